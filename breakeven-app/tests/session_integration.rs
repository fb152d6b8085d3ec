//! End-to-end runs of a session against files on disk.

use std::path::PathBuf;

use breakeven_app::{ReportFormat, Session, Settings, write_report};
use breakeven_core::{
    BreakEvenCalculator, BusinessModel, Locale, Publisher, RecordingSink, StyleState,
};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn session(locale: Locale) -> Session<RecordingSink> {
    Session::new(
        BreakEvenCalculator::default(),
        Publisher::new(locale),
        RecordingSink::new(),
    )
}

#[tokio::test]
async fn test_import_fixture_updates_model_and_view() {
    let mut session = session(Locale::EnUs);

    let report = session
        .import_file(&fixture_path("winter_menu.csv"))
        .await
        .expect("fixture should import")
        .expect("fixture exists");

    assert_eq!(report.applied, 4);
    let winter = &session.model().revenue.daily.winter_season;
    assert_eq!(winter.table_turnover, dec!(2));
    assert_eq!(winter.spend, dec!(12.5));

    // 50 seats x 0.25 x 2 turns
    assert_eq!(session.sink().text("guests-winter-season-daily"), Some("25"));
    // 25 guests x 12.50 x 16 days
    assert_eq!(session.sink().text("daily-ws-month"), Some("€5,000.00"));
}

#[tokio::test]
async fn test_export_then_import_into_fresh_session() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("export.csv");

    let mut source = session(Locale::DeDe);
    source.apply_edit(&"costs.operating.rent.monthly=1900".parse().unwrap());
    source.apply_edit(&"revenue.ticketed.trivia-nights.guests=25".parse().unwrap());
    source.write_export(&path).await.expect("export should write");

    let mut target = session(Locale::DeDe);
    let report = target.import_file(&path).await.unwrap().unwrap();

    assert!(report.skipped.is_empty());
    assert_eq!(target.model(), source.model());
    assert_eq!(target.figures(), source.figures());
    assert_eq!(target.sink(), source.sink());
}

#[tokio::test]
async fn test_written_export_matches_export_csv() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("model.csv");
    let session = session(Locale::DeDe);

    session.write_export(&path).await.unwrap();

    let written = tokio::fs::read_to_string(&path).await.unwrap();
    assert_eq!(written, session.export_csv());
    assert!(written.starts_with("key,value\n"));
}

#[tokio::test]
async fn test_missing_import_leaves_view_untouched() {
    let mut session = session(Locale::DeDe);
    let before = session.sink().clone();

    let report = session
        .import_file(&fixture_path("does_not_exist.csv"))
        .await
        .unwrap();

    assert!(report.is_none());
    assert_eq!(session.sink(), &before);
    assert_eq!(session.model(), &BusinessModel::default());
}

#[tokio::test]
async fn test_settings_file_drives_calendar_and_locale() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("breakeven.toml");
    tokio::fs::write(
        &path,
        "locale = \"en-us\"\n[seasons]\nhigh_season_months = 6\nwinter_season_months = 6\n",
    )
    .await
    .unwrap();

    let settings = Settings::load(&path).await.unwrap();
    let session = Session::new(
        BreakEvenCalculator::new(settings.seasons.calendar().unwrap()),
        Publisher::new(settings.locale),
        RecordingSink::new(),
    );

    // 17500 a month over six months
    assert_eq!(session.sink().text("daily-hs-annual"), Some("€105,000.00"));
    // 3000 a month over six months
    assert_eq!(session.sink().text("daily-ws-annual"), Some("€18,000.00"));
}

#[test]
fn test_loss_shows_in_report() {
    let mut session = session(Locale::DeDe);
    session.apply_edit(&"costs.goods.cogs.monthly=6000".parse().unwrap());

    let mut out = Vec::new();
    write_report(session.sink(), ReportFormat::Csv, &mut out).unwrap();
    let report = String::from_utf8(out).unwrap();

    assert_eq!(session.sink().style("sum-profit-m"), Some(StyleState::Alert));
    assert!(report.contains("sum-profit-m,\"-3.460,83\u{a0}€\",alert\n"));
}
