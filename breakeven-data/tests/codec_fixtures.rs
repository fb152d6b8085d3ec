//! Import and export against files on disk.

use std::fs::File;

use breakeven_core::{BusinessModel, Schema, calculate_all};
use breakeven_data::{SkipReason, export_to_string, import_from_reader, import_from_str};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const SUMMER_UPDATE: &str = include_str!("fixtures/summer_update.csv");

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_fixture_applies_known_rows() {
    let mut model = BusinessModel::default();

    let report = import_from_str(&mut model, &Schema::default_shape(), SUMMER_UPDATE);

    assert_eq!(report.applied, 6);
    assert_eq!(model.costs.personnel[6].high, dec!(2));
    assert_eq!(model.costs.operating[0].monthly, dec!(1800));
    assert_eq!(model.revenue.daily.high_season.occupancy, dec!(80));
    assert_eq!(model.revenue.ticketed[1].label, "Quiz Nights, weekly");
    assert_eq!(model.revenue.fixed[1].high, dec!(2));
}

#[test]
fn test_fixture_reports_skipped_rows() {
    let mut model = BusinessModel::default();

    let report = import_from_str(&mut model, &Schema::default_shape(), SUMMER_UPDATE);

    let skipped: Vec<_> = report
        .skipped
        .iter()
        .map(|s| (s.line, s.reason.clone()))
        .collect();
    assert_eq!(
        skipped,
        vec![
            (10, SkipReason::NoDelimiter),
            (9, SkipReason::UnknownKey),
        ]
    );
    assert_eq!(model.revenue.fixed.len(), 4);
}

#[test]
fn test_comma_decimal_with_thousands_dot_keeps_prefix() {
    let mut model = BusinessModel::default();

    import_from_str(&mut model, &Schema::default_shape(), SUMMER_UPDATE);

    // "2.400,5" reads as "2.400.5", whose numeric prefix is 2.4
    assert_eq!(model.costs.goods[0].monthly, dec!(2.4));
}

#[test]
fn test_import_from_file_matches_import_from_str() {
    let schema = Schema::default_shape();
    let mut from_file = BusinessModel::default();
    let mut from_str = BusinessModel::default();

    let file = File::open(fixture_path("summer_update.csv")).expect("fixture should open");
    import_from_reader(&mut from_file, &schema, file).expect("fixture should import");
    import_from_str(&mut from_str, &schema, SUMMER_UPDATE);

    assert_eq!(from_file, from_str);
}

#[test]
fn test_imported_figures_follow_the_new_values() {
    let mut model = BusinessModel::default();
    import_from_str(&mut model, &Schema::default_shape(), SUMMER_UPDATE);

    let figures = calculate_all(&model);

    // 50 seats x 0.8 x 2.5 turns
    assert_eq!(figures.daily_high.guests, dec!(100));
    // two weddings at 3000 in the high season
    assert_eq!(
        figures.fixed.line("small-weddings").map(|l| l.seasons.high),
        Some(dec!(6000))
    );
}

#[test]
fn test_export_of_imported_model_round_trips() {
    let schema = Schema::default_shape();
    let mut first = BusinessModel::default();
    import_from_str(&mut first, &schema, SUMMER_UPDATE);

    let mut second = BusinessModel::default();
    second.revenue.ticketed[1].label = first.revenue.ticketed[1].label.clone();
    import_from_str(&mut second, &schema, &export_to_string(&first));

    assert_eq!(second, first);
}
