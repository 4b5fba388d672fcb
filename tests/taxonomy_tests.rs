#![cfg(feature = "taxonomy")]

use jaarrekening::core::JaarrekeningError;
use jaarrekening::taxonomy::{Catalogue, TaxonomyDocument};

const TAXONOMY: &str = include_str!("fixtures/nbb_taxonomy.json");

#[test]
fn loads_the_regulator_fixture() {
    let catalogue = Catalogue::from_json(TAXONOMY).unwrap();
    assert_eq!(catalogue.prototypes().len(), 66);
    assert_eq!(
        catalogue.namespace("met"),
        Some("http://www.nbb.be/be/fr/cbso/dict/met")
    );
    assert!(catalogue.namespace("open").is_none());
}

#[test]
fn rubrics_resolve_to_current_year_prototypes() {
    let catalogue = Catalogue::from_json(TAXONOMY).unwrap();
    let rubric = catalogue.rubric_prototype("20/28").unwrap();
    assert_eq!(rubric.id, "rub-20-28");
    assert_eq!(rubric.period.as_deref(), Some("N"));
    assert_eq!(rubric.qname, "met:am1");
    assert!(catalogue.has_rubric("70"));
    assert!(!catalogue.has_rubric("99/99"));
}

#[test]
fn party_row_templates() {
    let catalogue = Catalogue::from_json(TAXONOMY).unwrap();
    assert_eq!(catalogue.row_templates().len(), 4);

    let admin = catalogue.row_template(&["dim:anlp"]).unwrap();
    assert_eq!(admin.fact_ids.len(), 11);
    assert!(admin.fact_ids[0].starts_with("met:str2#dim:anlp=#dim:bas=bas:m31#dim:ctc=ctc:m1"));
    assert!(admin.fact_ids[7].starts_with("nmt-enum:list1#dim:anlp="));

    let person = catalogue.row_template(&["dim:afnp", "dim:annp"]).unwrap();
    assert_eq!(person.fact_ids.len(), 10);
    assert!(catalogue.row_template(&["dim:annp", "dim:afnp"]).is_none());
    assert!(catalogue.row_template(&["dim:aclp"]).is_some());
    assert!(catalogue.row_template(&["dim:acfn", "dim:acnp"]).is_some());
}

#[test]
fn dimension_keys_skip_typed_dimensions() {
    let catalogue = Catalogue::from_json(TAXONOMY).unwrap();
    let fact = catalogue
        .prototype("met:str2#dim:anlp=#dim:bas=bas:m31#dim:ctc=ctc:m2#dim:part=part:m2#dim:psn=psn:m10")
        .unwrap();
    assert_eq!(
        fact.dimension_key(),
        "dim:bas=bas:m31#dim:ctc=ctc:m2#dim:part=part:m2#dim:psn=psn:m10#"
    );
    assert_eq!(fact.open_dimensions, vec!["dim:anlp"]);
    assert_eq!(fact.prefix(), Some("met"));
}

#[test]
fn postal_code_list() {
    let catalogue = Catalogue::from_json(TAXONOMY).unwrap();
    assert_eq!(catalogue.postal_code_member("9000").as_deref(), Some("pcd:m9000"));
    assert_eq!(catalogue.postal_code_member("2000"), None);
}

#[test]
fn parsed_document_can_be_indexed() {
    let document: TaxonomyDocument = serde_json::from_str(TAXONOMY).unwrap();
    let catalogue = Catalogue::from_document(document).unwrap();
    assert!(catalogue.prototype("rub-70").is_some());
}

#[test]
fn only_the_first_internal_model_counts() {
    let json = r#"{"internalModels": [
        {"factPrototypes": [{"id": "a", "qname": "met:str2"}], "namespacesByPrefix": {}},
        {"factPrototypes": [{"id": "b", "qname": "met:str2"}], "namespacesByPrefix": {}}
    ]}"#;
    let catalogue = Catalogue::from_json(json).unwrap();
    assert!(catalogue.prototype("a").is_some());
    assert!(catalogue.prototype("b").is_none());
}

#[test]
fn invalid_json_is_malformed_taxonomy() {
    for json in ["", "null", "{\"internalModels\": 3}", "{\"internalModels\": [{\"factPrototypes\": {}}]}"] {
        assert!(
            matches!(Catalogue::from_json(json), Err(JaarrekeningError::MalformedTaxonomy(_))),
            "{json} should be rejected"
        );
    }
}
