mod harness;

use intl_messageformat_parser::ParserOptions;

use crate::harness::{run_print_test, run_roundtrip_test, run_roundtrip_test_with};

mod printing {
    use super::*;

    #[test]
    fn plain_text() {
        run_print_test("Hello, World!", "Hello, World!");
    }

    #[test]
    fn simple_argument() {
        run_print_test("Hello, {name}!", "Hello, {name}!");
    }

    #[test]
    fn argument_whitespace_is_normalized() {
        run_print_test("{  num , number,percent  }", "{num, number, percent}");
    }

    #[test]
    fn plural_without_offset() {
        run_print_test(
            "this is {count, plural, one {# dog} other {# dogs}}",
            "this is {count, plural, one {# dog} other {# dogs}}",
        );
    }

    #[test]
    fn plural_with_offset() {
        run_print_test(
            "this is {count,plural,offset:1 one {# dog} other {# dogs}}",
            "this is {count, plural, offset:1 one {# dog} other {# dogs}}",
        );
    }

    #[test]
    fn selectordinal() {
        run_print_test(
            "{floor, selectordinal, one {#st} other {#th}}",
            "{floor, selectordinal, one {#st} other {#th}}",
        );
    }

    #[test]
    fn select() {
        run_print_test(
            "{gender, select, female {woman} male {man} other {person}}",
            "{gender, select, female {woman} male {man} other {person}}",
        );
    }

    #[test]
    fn date_with_style() {
        run_print_test("this is {now, time}", "this is {now, time}");
        run_print_test("{today, date, short}", "{today, date, short}");
        run_print_test("{count, number, currency/USD}", "{count, number, currency/USD}");
    }

    #[test]
    fn tags() {
        run_print_test(
            "an email <x:link>link</x:link>",
            "an email <x:link>link</x:link>",
        );
        run_print_test("a break <x:br/> here", "a break <x:br/> here");
    }

    #[test]
    fn braces_are_requoted() {
        run_print_test("'{'", "'{'");
        run_print_test("\\{", "'{'");
        run_print_test("a '{}' b", "a '{}' b");
    }

    #[test]
    fn apostrophes_are_doubled() {
        run_print_test("don't", "don't");
        run_print_test("''", "''");
        run_print_test("This '{isn''t}' obvious", "This '{isn''t}' obvious");
    }

    #[test]
    fn pound_is_requoted_only_inside_plural() {
        run_print_test("#1 fan", "#1 fan");
        run_print_test(
            "{n, plural, other{'#' of them}}",
            "{n, plural, other{'#' of them}}",
        );
    }

    #[test]
    fn angle_brackets_are_quoted_in_literals() {
        run_print_test("1 '<' 2", "1 '<' 2");
        run_print_test("\\u003C", "'<'");
    }
}

mod roundtrips {
    use super::*;

    static MESSAGES: &[&str] = &[
        "",
        "Hello, World!",
        "Hello, {name}!",
        "My name is {FIRST} {LAST}, age {age, number}, time {time, time}, date {date, date}.",
        "{num, number, percent}",
        "{numPhotos, plural, =0{no photos} =1{one photo} other{# photos}}",
        "Foo {var1, plural, =0{# var1} other{{var2, plural, =0{# var2} other{# var2-other}} # other}}",
        "{floor, selectordinal, =0{ground} one{#st} two{#nd} few{#rd} other{#th}} floor",
        "{gender, select, female {woman} male {man} other {person}}",
        "{c, plural, =1 { {text} project} other { {text} projects}}",
        "this is {count,plural,offset:3 one {# dog} other {# dogs}}",
        "\\{ \\} \\# \\\\ \\u003C",
        "''{name}''",
        "This '{isn''t}' obvious",
        "don't '{quote}' me",
        "an email <x:link>link</x:link>",
        "an email <x:link>{link, number}</x:link>",
        "an email <h1>link</h1>",
        "<x:outer>a <x:inner>b</x:inner> c</x:outer>",
        "unbalanced <x:a>text",
        "{n, plural, other{a '#' b # <x:b>#</x:b>}}",
        "{when, time, h 'o''clock'}",
        "{d, date, dd/MM/yyyy}",
        "its a speaker 🔈 {loud, select, yes {📢} other {🔈}}",
    ];

    #[test]
    fn default_options() {
        for message in MESSAGES {
            run_roundtrip_test(message);
        }
    }

    #[test]
    fn parsed_skeletons() {
        let options = ParserOptions {
            should_parse_skeleton: true,
            ..Default::default()
        };
        for message in [
            "{num, number, percent}",
            "{num, number, ::currency/USD .00}",
            "{num, number, ::integer}",
            "{num, number, compact-short currency/CAD}",
            "{today, date, short}",
            "{today, date, ::yyyyMMdd}",
            "{when, time, full}",
            "{when, time, hh:mm a}",
        ] {
            run_roundtrip_test_with(message, &options);
        }
    }

    #[test]
    fn ignored_tags() {
        let options = ParserOptions {
            ignore_tag: true,
            ..Default::default()
        };
        for message in [
            "an email <x:link>link</x:link>",
            "</x:a> is plain text here",
        ] {
            run_roundtrip_test_with(message, &options);
        }
    }
}
