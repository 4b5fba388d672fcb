#![no_main]

use chrono::NaiveDate;
use jaarrekening::core::*;
use jaarrekening::taxonomy::Catalogue;
use jaarrekening::xbrl::to_xbrl_xml;
use libfuzzer_sys::fuzz_target;

const TAXONOMY: &str = include_str!("../../tests/fixtures/nbb_taxonomy.json");

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Some(day) = NaiveDate::from_ymd_opt(2023, 12, 31) else {
        return;
    };
    // Arbitrary names, streets and postal codes must not panic the generator.
    let mut fields = s.split('|');
    let mut next = || fields.next().unwrap_or_default().to_string();
    let company = CompanyBuilder::new(
        next(),
        "0123.456.789",
        AddressBuilder::new(next(), next(), next()).street(next()).build(),
    )
    .build();
    let admin = PartyBuilder::company(
        next(),
        AddressBuilder::new(next(), next(), next()).street(next()).build(),
    )
    .kind_of_address(KindOfAddress::Other(next()))
    .entity_number(next())
    .build();
    let Ok(account) = AnnualAccountBuilder::new("Fuzz", company, day, day)
        .company_category(CompanyCategory::WithCapital)
        .add_administrator(admin)
        .build()
    else {
        return;
    };
    let Ok(catalogue) = Catalogue::from_json(TAXONOMY) else {
        return;
    };
    let _ = to_xbrl_xml(&account, &catalogue, &Vec::new(), &Vec::new(), &XbrlConfig::default());
});
