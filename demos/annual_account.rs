use chrono::NaiveDate;
use jaarrekening::core::*;
use jaarrekening::kpi::FixedKpiEvaluator;
use jaarrekening::xbrl::export_xbrl;
use rust_decimal_macros::dec;

const TAXONOMY: &str = include_str!("../tests/fixtures/nbb_taxonomy.json");

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn main() -> Result<(), JaarrekeningError> {
    // ── 1. Master data ────────────────────────────────────────────────
    let company = CompanyBuilder::new(
        "Brasserie Dupont SA",
        "0123.456.789",
        AddressBuilder::new("Bruxelles", "1000", "BE")
            .street("10, Rue de la Loi")
            .build(),
    )
    .email("info@dupont.be")
    .website("https://dupont.be")
    .build();

    let administrator = PartyBuilder::company(
        "Holding Dupont SA",
        AddressBuilder::new("Bruxelles", "1000", "BE")
            .street("5/2, Avenue Louise")
            .build(),
    )
    .kind_of_address(KindOfAddress::HeadOffice)
    .entity_number("0111.222.333")
    .build();

    let director = PartyBuilder::person(
        "Jan",
        "Peeters",
        AddressBuilder::new("Antwerpen", "2000", "BE")
            .street("12B, Meir")
            .build(),
    )
    .function("Managing director")
    .kind_of_address(KindOfAddress::Other("Private residence".into()))
    .build();

    let accountant = PartyBuilder::person(
        "An",
        "Janssens",
        AddressBuilder::new("Gent", "9000", "BE")
            .street("1, Veldstraat")
            .build(),
    )
    .kind_of_address(KindOfAddress::BusinessUnit)
    .member_number("ITAA-10203")
    .build();

    // ── 2. The report ─────────────────────────────────────────────────
    let mut account = AnnualAccountBuilder::new(
        "Annual Account 2023",
        company,
        date(2023, 1, 1),
        date(2023, 12, 31),
    )
    .company_category(CompanyCategory::WithCapital)
    .legal_form(LegalForm::from_code("lgf:m014").ok_or_else(|| JaarrekeningError::Builder("unknown legal form".into()))?)
    .commercial_court(
        CommercialCourt::from_code("cct:m03")
            .ok_or_else(|| JaarrekeningError::Builder("unknown commercial court".into()))?,
    )
    .general_assembly(date(2024, 5, 20))
    .recent_filing(date(2023, 6, 30))
    .add_administrator(administrator)
    .add_administrator(director)
    .add_accountant(accountant)
    .balance_sheet(ReportTemplate::new("BS", Some(TAXONOMY.into()), Some("{}".into())))
    .profit_loss(ReportTemplate::new("PL", Some(TAXONOMY.into()), Some("{}".into())))
    .build()?;

    let today = date(2024, 6, 1);
    println!("=== Validation ===");
    let errors = validate_annual_account(&account, today);
    println!("  {} errors", errors.len());

    account.confirm(today)?;
    println!("  State: {:?}", account.state);

    // ── 3. Amounts from the report engine ─────────────────────────────
    let kpis = FixedKpiEvaluator::new()
        .with_template(
            "BS",
            vec![
                ("rub_20_28".into(), Some(dec!(150000.004))),
                ("rub_10_15".into(), Some(dec!(82500))),
            ],
        )
        .with_template(
            "PL",
            vec![("rub_70".into(), Some(dec!(1234567.89))), ("rub_9904".into(), Some(dec!(0)))],
        );

    // ── 4. Export ─────────────────────────────────────────────────────
    println!("\n=== XBRL Export ===");
    let out_dir = std::env::temp_dir();
    let artifact = export_xbrl(&mut account, &kpis, &out_dir, today, &XbrlConfig::default())?;
    println!("  File:  {}", artifact.path.display());
    println!("  Type:  {}", artifact.mime_type);
    println!("  Size:  {} bytes", artifact.content.len());
    println!("  Generated on: {:?}", account.date_last_xbrl_generation);

    let xml = String::from_utf8_lossy(&artifact.content);
    for line in xml.lines().take(12) {
        println!("  {line}");
    }
    Ok(())
}
