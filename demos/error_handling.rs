use chrono::NaiveDate;
use jaarrekening::core::*;
use jaarrekening::kpi::FixedKpiEvaluator;
use jaarrekening::taxonomy::Catalogue;
use jaarrekening::xbrl::generate_xbrl;

const TAXONOMY: &str = include_str!("../tests/fixtures/nbb_taxonomy.json");

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn company(street: &str) -> Company {
    CompanyBuilder::new(
        "Brasserie Dupont SA",
        "0123.456.789",
        AddressBuilder::new("Bruxelles", "1000", "BE")
            .street(street)
            .build(),
    )
    .build()
}

fn draft(street: &str) -> AnnualAccount {
    AnnualAccountBuilder::new(
        "Annual Account 2023",
        company(street),
        date(2023, 1, 1),
        date(2023, 12, 31),
    )
    .company_category(CompanyCategory::WithCapital)
    .balance_sheet(ReportTemplate::new("BS", Some(TAXONOMY.into()), None))
    .build()
    .unwrap()
}

fn main() {
    let today = date(2024, 6, 1);
    let config = XbrlConfig::default();
    let kpis = FixedKpiEvaluator::new();

    // ── 1. Builder error: inverted period ─────────────────────────────
    println!("=== Builder Error ===");
    match AnnualAccountBuilder::new("AA", company("10, Rue de la Loi"), date(2024, 1, 1), date(2023, 1, 1)).build() {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  Build failed: {e}"),
    }

    // ── 2. Validation errors: incomplete report ───────────────────────
    println!("\n=== Validation Errors ===");
    let account = draft("10, Rue de la Loi");
    let errors = validate_annual_account(&account, today);
    println!("  Found {} validation errors:", errors.len());
    for e in &errors {
        println!("  - {e}");
    }

    // ── 3. Confirming runs the same rules ─────────────────────────────
    println!("\n=== confirm() ===");
    let mut account = draft("10, Rue de la Loi");
    if let Err(e) = account.confirm(today) {
        println!("  {} rules failed, state stays {:?}", e.validation_errors().len(), account.state);
    }

    // ── 4. Party rules apply to drafts too ────────────────────────────
    println!("\n=== Party Address ===");
    let mut account = draft("10, Rue de la Loi");
    account.administrators.push(
        PartyBuilder::company(
            "Admin SA",
            AddressBuilder::new("Bruxelles", "1000", "BE")
                .street("Avenue Louise 5")
                .build(),
        )
        .build(),
    );
    match generate_xbrl(&account, &kpis, &config, today) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => {
            for v in e.validation_errors() {
                println!("  - {v}");
            }
        }
    }

    // ── 5. Company street that cannot be decomposed ───────────────────
    println!("\n=== Address Format ===");
    match generate_xbrl(&draft("Rue de la Loi"), &kpis, &config, today) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  {e}"),
    }

    // ── 6. Broken taxonomy ────────────────────────────────────────────
    println!("\n=== Malformed Taxonomy ===");
    match Catalogue::from_json(r#"{"internalModels": [{"factPrototypes": []}]}"#) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  {e}"),
    }

    // ── 7. Frozen report ──────────────────────────────────────────────
    println!("\n=== Lifecycle ===");
    let mut account = draft("10, Rue de la Loi");
    account.state = ReportState::Published;
    if let Err(e) = account.set_period(date(2022, 1, 1), date(2022, 12, 31)) {
        println!("  {e}");
    }
}
