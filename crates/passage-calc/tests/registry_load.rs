use passage_calc::registry::{DataLoadError, LegislatureType, PoliticalSystemRegistry, SystemType};
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/factbook_sample.json")
}

#[test]
fn loads_fixture_and_skips_bad_records() {
    let registry = PoliticalSystemRegistry::load(fixture_path()).expect("fixture loads");

    assert_eq!(
        registry.list_country_names(),
        vec![
            "Federative Republic of Brazil",
            "Kingdom of Saudi Arabia",
            "People's Republic of China",
            "United Kingdom of Great Britain and Northern Ireland",
            "Western Sahara",
        ]
    );

    let mut skipped: Vec<&str> = registry
        .skipped_records()
        .iter()
        .map(|record| record.country_code.as_str())
        .collect();
    skipped.sort_unstable();
    assert_eq!(skipped, vec!["xq", "xr", "xs"]);
}

#[test]
fn classifies_each_country() {
    let registry = PoliticalSystemRegistry::load(fixture_path()).expect("fixture loads");

    let cases = [
        (
            "Federative Republic of Brazil",
            LegislatureType::Bicameral,
            SystemType::Presidential,
        ),
        (
            "Kingdom of Saudi Arabia",
            LegislatureType::Unicameral,
            SystemType::Monarchy,
        ),
        (
            "People's Republic of China",
            LegislatureType::Unicameral,
            SystemType::Other,
        ),
        (
            "United Kingdom of Great Britain and Northern Ireland",
            LegislatureType::Bicameral,
            SystemType::Parliamentary,
        ),
        ("Western Sahara", LegislatureType::Unknown, SystemType::Other),
    ];

    for (country, legislature, system) in cases {
        let descriptor = registry
            .get_system(country)
            .unwrap_or_else(|| panic!("{country} missing"));
        assert_eq!(descriptor.country_name, country);
        assert_eq!(descriptor.legislature_type, legislature, "{country}");
        assert_eq!(descriptor.system_type, system, "{country}");
    }
}

#[test]
fn passes_profile_fields_through() {
    let registry = PoliticalSystemRegistry::load(fixture_path()).expect("fixture loads");
    let brazil = registry
        .profile("Federative Republic of Brazil")
        .expect("brazil profile");

    assert_eq!(brazil.country_code, "br");
    assert_eq!(brazil.capital, "Brasilia");
    assert_eq!(
        brazil.legislative_branch.description,
        "Federal Senate and Chamber of Deputies"
    );
}

#[test]
fn missing_file_is_a_load_error() {
    let err = PoliticalSystemRegistry::load("does/not/exist.json").expect_err("missing file");
    match err {
        DataLoadError::Io { path, .. } => assert_eq!(path, PathBuf::from("does/not/exist.json")),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn invalid_json_is_a_load_error() {
    let err = PoliticalSystemRegistry::from_reader("{ \"us\": ".as_bytes())
        .expect_err("truncated json");
    assert!(matches!(err, DataLoadError::Json(_)));
}

#[test]
fn bundled_dataset_loads() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/factbook.json");
    let registry = PoliticalSystemRegistry::load(path).expect("bundled dataset loads");

    assert!(registry.skipped_records().is_empty());
    assert_eq!(
        registry.get_system("Japan").map(|system| system.system_type),
        Some(SystemType::Parliamentary)
    );
    assert_eq!(
        registry
            .get_system("French Republic")
            .map(|system| system.system_type),
        Some(SystemType::Presidential)
    );
}
