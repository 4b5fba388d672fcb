#![cfg(feature = "xbrl")]

use chrono::NaiveDate;
use jaarrekening::core::*;
use jaarrekening::kpi::FixedKpiEvaluator;
use jaarrekening::xbrl::{export_xbrl, generate_xbrl};
use rust_decimal_macros::dec;
use tempfile::tempdir;

const TAXONOMY: &str = include_str!("fixtures/nbb_taxonomy.json");

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn account() -> AnnualAccount {
    let company = CompanyBuilder::new(
        "Brasserie Dupont SA",
        "0123.456.789",
        AddressBuilder::new("Bruxelles", "1000", "BE")
            .street("10, Rue de la Loi")
            .build(),
    )
    .build();
    let admin = PartyBuilder::company(
        "Admin SA",
        AddressBuilder::new("Bruxelles", "1000", "BE")
            .street("5, Avenue Louise")
            .build(),
    )
    .kind_of_address(KindOfAddress::HeadOffice)
    .entity_number("0111.222.333")
    .build();

    AnnualAccountBuilder::new(
        "Annual Account 2023",
        company,
        date(2023, 1, 1),
        date(2023, 12, 31),
    )
    .company_category(CompanyCategory::WithCapital)
    .legal_form(LegalForm::from_code("lgf:m014").unwrap())
    .commercial_court(CommercialCourt::from_code("cct:m03").unwrap())
    .general_assembly(date(2024, 5, 20))
    .recent_filing(date(2023, 6, 30))
    .add_administrator(admin)
    .balance_sheet(ReportTemplate::new(
        "BS",
        Some(TAXONOMY.to_string()),
        Some("{}".into()),
    ))
    .profit_loss(ReportTemplate::new("PL", Some("{}".into()), Some("{}".into())))
    .build()
    .unwrap()
}

fn evaluator() -> FixedKpiEvaluator {
    FixedKpiEvaluator::new()
        .with_template("BS", vec![("rub_20_28".into(), Some(dec!(15000)))])
        .with_template("PL", vec![("rub_70".into(), Some(dec!(2500)))])
}

#[test]
fn export_writes_the_file_and_records_the_date() {
    let dir = tempdir().unwrap();
    let mut account = account();
    let today = date(2024, 6, 1);

    let artifact =
        export_xbrl(&mut account, &evaluator(), dir.path(), today, &XbrlConfig::default()).unwrap();

    assert_eq!(artifact.name, "Annual_Account_2023.xbrl");
    assert_eq!(artifact.mime_type, "application/xml");
    assert_eq!(artifact.path, dir.path().join("Annual_Account_2023.xbrl"));
    assert_eq!(std::fs::read(&artifact.path).unwrap(), artifact.content);
    assert_eq!(account.date_last_xbrl_generation, Some(today));

    let expected = generate_xbrl(&account, &evaluator(), &XbrlConfig::default(), today).unwrap();
    assert_eq!(artifact.content, expected.into_bytes());
}

#[test]
fn export_leaves_only_the_final_file() {
    let dir = tempdir().unwrap();
    let mut account = account();
    export_xbrl(
        &mut account,
        &evaluator(),
        dir.path(),
        date(2024, 6, 1),
        &XbrlConfig::default(),
    )
    .unwrap();
    let files: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(files, vec!["Annual_Account_2023.xbrl"]);
}

#[test]
fn export_replaces_a_previous_file() {
    let dir = tempdir().unwrap();
    let mut account = account();
    std::fs::write(dir.path().join("Annual_Account_2023.xbrl"), "stale").unwrap();
    let artifact = export_xbrl(
        &mut account,
        &evaluator(),
        dir.path(),
        date(2024, 6, 1),
        &XbrlConfig::default(),
    )
    .unwrap();
    let written = std::fs::read_to_string(&artifact.path).unwrap();
    assert!(written.starts_with("<?xml"));
}

#[test]
fn report_name_cannot_leave_the_directory() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");
    std::fs::create_dir(&out).unwrap();
    let mut account = account();
    account.report_name = "../AA/2023".into();

    let artifact =
        export_xbrl(&mut account, &evaluator(), &out, date(2024, 6, 1), &XbrlConfig::default())
            .unwrap();

    assert_eq!(artifact.name, "_AA_2023.xbrl");
    assert_eq!(artifact.path.parent(), Some(out.as_path()));
    assert_eq!(std::fs::read_dir(&out).unwrap().count(), 1);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn failed_export_writes_nothing() {
    let dir = tempdir().unwrap();
    let mut account = account();
    account.state = ReportState::Confirmed;
    account.commercial_court = None;

    let err = export_xbrl(
        &mut account,
        &evaluator(),
        dir.path(),
        date(2024, 6, 1),
        &XbrlConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err.validation_errors()[0].rule.as_deref(), Some("ANN-03"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    assert_eq!(account.date_last_xbrl_generation, None);
}

#[test]
fn confirmed_report_exports() {
    let dir = tempdir().unwrap();
    let mut account = account();
    account.confirm(date(2024, 6, 1)).unwrap();
    let artifact = export_xbrl(
        &mut account,
        &evaluator(),
        dir.path(),
        date(2024, 6, 1),
        &XbrlConfig::default(),
    )
    .unwrap();
    let xml = String::from_utf8(artifact.content).unwrap();
    assert!(xml.contains(">cct:m03</cct-enum:list1>"));
    assert!(xml.contains(">2500.00</met:am1>"));
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = tempdir().unwrap();
    let mut account = account();
    let err = export_xbrl(
        &mut account,
        &evaluator(),
        &dir.path().join("missing"),
        date(2024, 6, 1),
        &XbrlConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, JaarrekeningError::Io(_)));
}
