#![cfg(feature = "core")]

use chrono::NaiveDate;
use jaarrekening::core::currencies::{minor_units, round_monetary};
use jaarrekening::core::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn company() -> Company {
    CompanyBuilder::new(
        "Brasserie Dupont SA",
        "0123.456.789",
        AddressBuilder::new("Bruxelles", "1000", "BE")
            .street("10, Rue de la Loi")
            .build(),
    )
    .website("https://dupont.be")
    .build()
}

fn admin() -> Party {
    PartyBuilder::company(
        "Admin SA",
        AddressBuilder::new("Bruxelles", "1000", "BE")
            .street("5, Avenue Louise")
            .build(),
    )
    .kind_of_address(KindOfAddress::HeadOffice)
    .entity_number("0111.222.333")
    .build()
}

fn accountant() -> Party {
    PartyBuilder::person(
        "An",
        "Janssens",
        AddressBuilder::new("Gent", "9000", "BE").street("1, Veldstraat").build(),
    )
    .kind_of_address(KindOfAddress::BusinessUnit)
    .member_number("ITAA-10203")
    .build()
}

fn template(name: &str) -> ReportTemplate {
    ReportTemplate::new(name, Some("{}".into()), Some("{}".into()))
}

fn complete() -> AnnualAccount {
    AnnualAccountBuilder::new(
        "Annual Account 2023",
        company(),
        date(2023, 1, 1),
        date(2023, 12, 31),
    )
    .company_category(CompanyCategory::WithCapital)
    .legal_form(LegalForm::from_code("lgf:m014").unwrap())
    .commercial_court(CommercialCourt::from_code("cct:m03").unwrap())
    .general_assembly(date(2024, 5, 20))
    .recent_filing(date(2023, 6, 30))
    .add_administrator(admin())
    .add_accountant(accountant())
    .balance_sheet(template("BS"))
    .profit_loss(template("PL"))
    .build()
    .unwrap()
}

fn rules(errors: &[ValidationError]) -> Vec<&str> {
    errors.iter().filter_map(|e| e.rule.as_deref()).collect()
}

#[test]
fn complete_report_is_valid() {
    let account = complete();
    assert!(validate_annual_account(&account, date(2024, 6, 1)).is_empty());
    assert_eq!(
        account.schema_ref.as_deref(),
        Some("http://www.nbb.be/be/fr/cbso/fws/22.19/mod/m01/m01-f.xsd")
    );
}

#[test]
fn builder_rejects_inverted_period() {
    let err = AnnualAccountBuilder::new("AA", company(), date(2024, 1, 1), date(2023, 1, 1))
        .build()
        .unwrap_err();
    assert!(matches!(err, JaarrekeningError::Builder(_)));
}

#[test]
fn builder_requires_report_name_and_registry() {
    let err = AnnualAccountBuilder::new("  ", company(), date(2023, 1, 1), date(2023, 12, 31))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("report name"));

    let mut nameless = company();
    nameless.registry = String::new();
    let err = AnnualAccountBuilder::new("AA", nameless, date(2023, 1, 1), date(2023, 12, 31))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("registry"));
}

#[test]
fn date_range_sets_period() {
    let range = DateRange {
        name: "FY 2022".into(),
        date_start: date(2022, 1, 1),
        date_end: date(2022, 12, 31),
    };
    let account = AnnualAccountBuilder::new("AA", company(), date(2023, 1, 1), date(2023, 12, 31))
        .date_range(range)
        .build()
        .unwrap();
    assert_eq!(account.date_from, date(2022, 1, 1));
    assert_eq!(account.date_to, date(2022, 12, 31));
}

#[test]
fn general_assembly_before_closing_date() {
    let mut account = complete();
    account.date_general_assembly = Some(date(2023, 12, 30));
    assert_eq!(rules(&validate_annual_account(&account, date(2024, 6, 1))), vec!["ANN-08"]);

    account.date_general_assembly = Some(date(2023, 12, 31));
    assert!(validate_annual_account(&account, date(2024, 6, 1)).is_empty());
}

#[test]
fn recent_filing_in_the_future() {
    let account = complete();
    let errors = validate_annual_account(&account, date(2023, 6, 29));
    assert_eq!(rules(&errors), vec!["ANN-09"]);
}

#[test]
fn party_rules_collect_every_problem() {
    let mut account = complete();
    account.administrators[0].id_numbers.clear();
    account.administrators[0].kind_of_address = Some(KindOfAddress::Other("  ".into()));
    account.accountants[0].address.street = Some("Veldstraat 1".into());
    account.accountants[0].id_numbers.push(IdentificationNumber::new(
        "ITAA-99999",
        IdCategory::MemberNumber,
    ));

    let errors = validate_parties(&account);
    assert_eq!(rules(&errors), vec!["PTY-01", "PTY-03", "PTY-02", "PTY-04"]);
    assert_eq!(errors[0].field, "administrators[0].kind_of_address");
    assert_eq!(errors[2].field, "accountants[0].address.street");
    assert!(errors[3].message.contains("found 2"));
}

#[test]
fn validation_error_display() {
    let err = JaarrekeningError::Validation(vec![
        ValidationError::with_rule("legal_form", "Legal Status cannot be empty", "ANN-05"),
        ValidationError::new("company.name", "required"),
    ]);
    insta::assert_snapshot!(
        err.to_string(),
        @"validation failed: [ANN-05] legal_form: Legal Status cannot be empty; company.name: required"
    );
}

#[test]
fn workflow_confirm_publish() {
    let mut account = complete();
    account.confirm(date(2024, 6, 1)).unwrap();
    assert!(matches!(
        account.set_accountants(Vec::new()),
        Err(JaarrekeningError::Lifecycle(_))
    ));
    account.reset_to_draft().unwrap();
    account.set_company_category(CompanyCategory::NonProfit, &XbrlConfig::default()).unwrap();
    account.confirm(date(2024, 6, 1)).unwrap();
    account.publish(date(2024, 6, 2)).unwrap();
    assert_eq!(account.state, ReportState::Published);
    assert!(!account.active);
    assert!(account.schema_ref.unwrap().ends_with("/m04/m04-f.xsd"));
}

#[test]
fn street_lines() {
    let parsed = match_street("718A/14, Pink Road").unwrap();
    assert_eq!(parsed.part(StreetPart::Number), Some("718A"));
    assert_eq!(parsed.part(StreetPart::Box), Some("14"));
    assert_eq!(parsed.part(StreetPart::Name), Some("Pink Road"));

    let no_box = match_street("5 , Avenue Louise").unwrap();
    assert_eq!(no_box.part(StreetPart::Box), None);
    assert_eq!(no_box.part(StreetPart::Name), Some("Avenue Louise"));

    let err = parse_street("Admin SA", "Avenue Louise 5").unwrap_err();
    assert!(err.to_string().contains("Admin SA"));
}

#[test]
fn code_lists() {
    let form = LegalForm::from_code("lgf:m014").unwrap();
    assert_eq!(form.label(), "Public limited company");
    assert!(LegalForm::from_code("lgf:m999").is_none());
    assert_eq!(
        CommercialCourt::from_code("cct:m03").unwrap().label(),
        "Antwerp, division Antwerp"
    );
    assert_eq!(country_member(" be "), Some("cty:mBE".to_string()));
    assert_eq!(country_member("XX"), None);
    assert_eq!(KindOfAddress::from_code("atc:m002"), Some(KindOfAddress::BusinessUnit));
    assert_eq!(CompanyCategory::from_code("m81-f"), Some(CompanyCategory::WithoutCapital));
}

#[test]
fn monetary_rounding_uses_currency_precision_first() {
    assert_eq!(minor_units("EUR"), Some(2));
    assert_eq!(minor_units("JPY"), Some(0));
    assert_eq!(round_monetary(dec!(15000.004), "EUR", 2), dec!(15000.00));
    assert_eq!(round_monetary(dec!(0.125), "EUR", 2), dec!(0.13));
    assert_eq!(round_monetary(dec!(-0.125), "EUR", 2), dec!(-0.13));
    // Double rounding: 1.495 → 1.50 → 2
    assert_eq!(round_monetary(dec!(1.495), "EUR", 0), dec!(2));
    assert_eq!(round_monetary(dec!(1234.5), "JPY", 2), dec!(1235));
}

#[test]
fn config_from_json_keeps_defaults() {
    let config = XbrlConfig::from_json(r#"{"monetary_decimals": 0}"#).unwrap();
    assert_eq!(config.monetary_decimals, 0);
    assert_eq!(config.identifier_scheme, "http://fgov.be");
    assert!(matches!(
        XbrlConfig::from_json("not json"),
        Err(JaarrekeningError::Builder(_))
    ));
}

#[test]
fn report_loads_from_json() {
    let json = serde_json::to_string(&complete()).unwrap();
    assert!(json.contains("\"lgf:m014\""));
    let loaded: AnnualAccount = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded.report_name, "Annual Account 2023");
    assert_eq!(loaded.legal_form.unwrap().code(), "lgf:m014");
    assert_eq!(loaded.administrators[0].entity_number(), Some("0111.222.333"));

    let unknown = json.replace("lgf:m014", "lgf:m999");
    assert!(serde_json::from_str::<AnnualAccount>(&unknown).is_err());
}
