// benches/parsing_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dz_phone_number::DzPhoneNumber;

use phonenumber::{self as rlp, country::Id};

/// A mix of notations seen in user input: local and international
/// indicatives, mobile and landline numbers, with and without formatting.
fn setup_parsing_data() -> Vec<&'static str> {
    vec![
        "0512345678",
        "+213 6 12 34 56 78",
        "(+213) 7-12-34-56-78",
        "00213 38-12-34-56",
        "0-21-12-34-56",
        "038123456",
        // rejected ones cost time too
        "+216512345678",
        "- (213) 512-34-56-78",
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();

    let numbers_to_parse = setup_parsing_data();

    let mut group = c.benchmark_group("Parsing Comparison");

    group.bench_function("dz_phone_number: parse()", |b| {
        b.iter(|| {
            for number_str in &numbers_to_parse {
                let _ = DzPhoneNumber::parse(black_box(*number_str));
            }
        })
    });

    group.bench_function("rust-phonenumber: parse()", |b| {
        b.iter(|| {
            for number_str in &numbers_to_parse {
                let _ = rlp::parse(black_box(Some(Id::DZ)), black_box(number_str));
            }
        })
    });

    group.finish();
}

fn equality_benchmark(c: &mut Criterion) {
    let local = DzPhoneNumber::parse("0512345678").unwrap();
    let international = DzPhoneNumber::parse("+213 5 12 34 56 78").unwrap();

    c.bench_function("dz_phone_number: eq()", |b| {
        b.iter(|| black_box(&local) == black_box(&international))
    });
}

criterion_group!(benches, parsing_benchmark, equality_benchmark);
criterion_main!(benches);
