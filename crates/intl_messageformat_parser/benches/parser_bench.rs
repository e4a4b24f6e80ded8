use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use intl_messageformat_parser::{parse, ParserOptions};

fn parse_message(message: &str) {
    let _ = parse(message, &ParserOptions::default());
}

fn parse_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("messages");
    group.throughput(Throughput::Elements(1));
    group.bench_function("complex messages", |b| {
        b.iter(|| {
        parse_message(r#"
            {gender_of_host, select,
                female {
                    {num_guests, plural,
                        =0 {{host} does not give a party.}
                        =1 {{host} invites <x:em>{guest}</x:em> to her party.}
                        =2 {{host} invites <x:em>{guest}</x:em> and <x:em>one</x:em> other person to her party.}
                        other {{host} invites <x:em>{guest}</x:em> and <x:em>#</x:em> other people to her party.}
                    }
                }
                male {
                    {num_guests, plural,
                        =0 {{host} does not give a party.}
                        =1 {{host} invites <x:em>{guest}</x:em> to his party.}
                        =2 {{host} invites <x:em>{guest}</x:em> and one other person to his party.}
                        other {{host} invites <x:em>{guest}</x:em> and <x:em>#</x:em> other people to his party.}
                    }
                }
                other {
                    {num_guests, plural,
                        =0 {{host} does not give a party.}
                        =1 {{host} invites <x:em>{guest}</x:em> to their party.}
                        =2 {{host} invites <x:em>{guest}</x:em> and one other person to their party.}
                        other {{host} invites <x:em>{guest}</x:em> and <x:em>#</x:em> other people to their party.}
                    }
                }
            }"#
        )});
    });

    group.bench_function("normal message", |b| {
        b.iter(|| {
            parse_message(
                r#"
            Yo, {firstName} {lastName} has
            {numBooks, number, integer}
            {numBooks, plural,
                one {book}
                other {books}
            }
        "#,
            )
        });
    });
    group.bench_function("simple message", |b| {
        b.iter(|| parse_message(r#"Hello, {name}"#));
    });
    group.bench_function("string message", |b| {
        b.iter(|| parse_message(r#"Hello, world"#));
    });
}
criterion_group!(benches, parse_bench);
criterion_main!(benches);
