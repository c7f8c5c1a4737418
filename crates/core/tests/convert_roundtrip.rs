// Round-trip identity: every record's own names must match exactly one
// pattern and resolve back to themselves.

use ccodes_core::{ConvertOptions, CountryResolver, Resolved, SchemeValue};

const NOT_FOUND: &str = "XXX";

fn regex_options(to: &str) -> ConvertOptions {
    ConvertOptions {
        src: Some("regex".to_string()),
        to: to.to_string(),
        not_found: Some(NOT_FOUND.to_string()),
        ..ConvertOptions::default()
    }
}

fn roundtrip_column(column: &str) {
    let resolver = CountryResolver::new().unwrap();
    let options = regex_options(column);
    let frame = resolver.table().frame();
    let names = frame.column(column).unwrap().str().unwrap();

    for row in 0..resolver.table().height() {
        let name = names.get(row).unwrap();
        let result = resolver.convert_one(name, &options).unwrap();
        match result {
            Resolved::Single(SchemeValue::Text(value)) => {
                assert_ne!(value, NOT_FOUND, "{name} did not match any pattern");
                assert_eq!(value, name, "{name} matched the wrong pattern");
            }
            other => panic!("{name} did not resolve uniquely: {other:?}"),
        }
    }
}

#[test]
fn test_name_short_roundtrip() {
    roundtrip_column("name_short");
}

#[test]
fn test_name_official_roundtrip() {
    roundtrip_column("name_official");
}

#[test]
fn test_alternative_names_resolve_to_canonical_short_name() {
    let resolver = CountryResolver::new().unwrap();
    let options = regex_options("name_short");

    // (alternate spelling, expected name_short); XXX marks expected misses
    let cases = [
        ("United States of America", "United States"),
        ("USA", "United States"),
        ("U.S.A.", "United States"),
        ("Great Britain", "United Kingdom"),
        ("UK", "United Kingdom"),
        ("Republic of Korea", "South Korea"),
        ("Korea, Dem. Rep.", "North Korea"),
        ("Viet Nam", "Vietnam"),
        ("Russian Federation", "Russia"),
        ("Czechia", "Czech Republic"),
        ("Türkiye", "Turkey"),
        ("UAE", "United Arab Emirates"),
        ("Hong Kong SAR", "Hong Kong"),
        ("Congo-Brazzaville", "Congo"),
        ("Holland", "Netherlands"),
        ("Narnia", NOT_FOUND),
        ("Middle Earth", NOT_FOUND),
    ];

    for (alternate, expected) in cases {
        let result = resolver.convert_one(alternate, &options).unwrap();
        match result {
            Resolved::Single(SchemeValue::Text(value)) => {
                assert_eq!(value, expected, "alternate name {alternate}");
            }
            other => panic!("{alternate} resolved ambiguously: {other:?}"),
        }
    }
}
