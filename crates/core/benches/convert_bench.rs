use ccodes_core::{ConvertOptions, CountryResolver};
use criterion::{criterion_group, criterion_main, Criterion};

fn benchmark_regex_scan(c: &mut Criterion) {
    let resolver = CountryResolver::new().unwrap();
    let options = ConvertOptions {
        to: "name_short".to_string(),
        ..ConvertOptions::default()
    };
    let names = [
        "Germany",
        "United States of America",
        "Republic of Korea",
        "Kingdom of the Netherlands",
    ];

    c.bench_function("convert_regex_scan", |b| {
        b.iter(|| resolver.convert(&names, &options).unwrap())
    });
}

fn benchmark_code_lookup(c: &mut Criterion) {
    let resolver = CountryResolver::new().unwrap();
    let options = ConvertOptions {
        src: Some("ISO3".to_string()),
        to: "name_short".to_string(),
        ..ConvertOptions::default()
    };
    let codes = ["DEU", "USA", "KOR", "NLD"];

    c.bench_function("convert_code_lookup", |b| {
        b.iter(|| resolver.convert(&codes, &options).unwrap())
    });
}

criterion_group!(benches, benchmark_regex_scan, benchmark_code_lookup);
criterion_main!(benches);
