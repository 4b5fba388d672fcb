//! Decides which mapped facts have a reportable value.
//!
//! Absent values are the normal case and yield no fact. Only malformed input
//! (a street line that cannot be decomposed) is an error.

use tracing::warn;

use super::mapping::{FieldKind, FieldMapping, IdentificationField};
use crate::core::{
    Address, AnnualAccount, Company, IdCategory, JaarrekeningError, Party, country_member,
    parse_street,
};
use crate::taxonomy::{Catalogue, FactPrototype};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Record a mapping table reads from.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    Report(&'a AnnualAccount),
    Company(&'a Company),
    Party(&'a Party),
}

impl Source<'_> {
    fn owner(&self) -> &str {
        match self {
            Source::Report(account) => &account.company.name,
            Source::Company(company) => &company.name,
            Source::Party(party) => &party.name,
        }
    }

    fn address(&self) -> Option<&Address> {
        match self {
            Source::Report(_) => None,
            Source::Company(company) => Some(&company.address),
            Source::Party(party) => Some(&party.address),
        }
    }
}

/// A mapped fact with its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFact<'c> {
    pub prototype: &'c FactPrototype,
    pub field: FieldKind,
    pub value: String,
}

/// Resolves mapped fields against the catalogue.
#[derive(Debug, Clone, Copy)]
pub struct FactResolver<'c> {
    catalogue: &'c Catalogue,
}

impl<'c> FactResolver<'c> {
    pub fn new(catalogue: &'c Catalogue) -> Self {
        Self { catalogue }
    }

    /// Every fact of `mappings` that has a value, in table order.
    ///
    /// Fact ids unknown to the catalogue are skipped.
    pub fn resolve_all(
        &self,
        mappings: &[FieldMapping],
        source: Source<'_>,
    ) -> Result<Vec<ResolvedFact<'c>>, JaarrekeningError> {
        let mut facts = Vec::new();
        for mapping in mappings {
            let Some(prototype) = self.catalogue.prototype(mapping.fact_id) else {
                warn!(fact_id = mapping.fact_id, "mapped fact is not in the taxonomy");
                continue;
            };
            if let Some(value) = self.resolve(mapping.field, source)? {
                facts.push(ResolvedFact {
                    prototype,
                    field: mapping.field,
                    value,
                });
            }
        }
        Ok(facts)
    }

    /// Value of one field, `None` when there is nothing to report.
    pub fn resolve(
        &self,
        field: FieldKind,
        source: Source<'_>,
    ) -> Result<Option<String>, JaarrekeningError> {
        let value = match (field, source) {
            (FieldKind::Registry, Source::Report(a)) => Some(a.company.registry.clone()),
            (FieldKind::DateGeneralAssembly, Source::Report(a)) => {
                a.date_general_assembly.map(|d| d.format(DATE_FORMAT).to_string())
            }
            (FieldKind::DateFrom, Source::Report(a)) => {
                Some(a.date_from.format(DATE_FORMAT).to_string())
            }
            (FieldKind::DateTo, Source::Report(a)) => Some(a.date_to.format(DATE_FORMAT).to_string()),
            (FieldKind::DateRecentFiling, Source::Report(a)) => {
                a.date_recent_filing.map(|d| d.format(DATE_FORMAT).to_string())
            }
            (FieldKind::LegalForm, Source::Report(a)) => {
                a.legal_form.as_ref().map(|f| f.code().to_string())
            }
            (FieldKind::CommercialCourt, Source::Report(a)) => {
                a.commercial_court.as_ref().map(|c| c.code().to_string())
            }

            (FieldKind::Name, Source::Company(c)) => Some(c.name.clone()),
            (FieldKind::Name, Source::Party(p)) => Some(p.name.clone()),
            (FieldKind::Email, Source::Company(c)) => c.email.clone(),
            (FieldKind::Website, Source::Company(c)) => c.website.clone(),

            (FieldKind::Street(part), source) => match source.address().and_then(|a| a.street.as_deref()) {
                Some(street) if !street.trim().is_empty() => parse_street(source.owner(), street)?
                    .part(part)
                    .map(str::to_string),
                _ => None,
            },
            (FieldKind::PostalCodeList, source) => source
                .address()
                .and_then(|a| a.postal_code.as_deref())
                .and_then(|zip| self.catalogue.postal_code_member(zip)),
            (FieldKind::PostalCode, source) => source
                .address()
                .and_then(|a| a.postal_code.clone())
                .filter(|zip| self.catalogue.postal_code_member(zip).is_none()),
            (FieldKind::City, source) => source.address().and_then(|a| {
                let listed = a
                    .postal_code
                    .as_deref()
                    .is_some_and(|zip| self.catalogue.postal_code_member(zip).is_some());
                if listed { None } else { a.city.clone() }
            }),
            (FieldKind::CountryList, source) => source
                .address()
                .and_then(|a| a.country_code.as_deref())
                .and_then(country_member),

            (FieldKind::IdentificationNumber(id), Source::Party(p)) => match id {
                IdentificationField::EntityNumberKind => p
                    .entity_number()
                    .map(|_| IdCategory::EntityNumber.code().to_string()),
                IdentificationField::EntityNumber => p.entity_number().map(str::to_string),
                IdentificationField::MemberNumber => p.member_number().map(str::to_string),
            },
            (FieldKind::KindOfAddressList, Source::Party(p)) => p
                .kind_of_address
                .as_ref()
                .and_then(|k| k.code())
                .map(str::to_string),
            (FieldKind::KindOfAddressOther, Source::Party(p)) => p
                .kind_of_address
                .as_ref()
                .and_then(|k| k.other_text())
                .map(str::to_string),
            (FieldKind::Function, Source::Party(p)) => p.function.clone(),

            _ => None,
        };
        Ok(value.filter(|v| !v.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        AddressBuilder, CompanyBuilder, KindOfAddress, PartyBuilder, PartyKind, PartyRole, StreetPart,
    };
    use crate::xbrl::mapping::{COMPANY_FIELDS, party_fields};

    fn catalogue() -> Catalogue {
        Catalogue::from_json(
            r#"{"internalModels": [{
                "factPrototypes": [],
                "namespacesByPrefix": {},
                "editorModel": {"codeListsMap": {"pcd-enum:list1": [{"code": "pcd:m1000"}]}}
            }]}"#,
        )
        .unwrap()
    }

    fn party(zip: &str, street: &str) -> Party {
        PartyBuilder::company(
            "Admin SA",
            AddressBuilder::new("Bruxelles", zip, "be").street(street).build(),
        )
        .kind_of_address(KindOfAddress::Other("Seat of the branch".into()))
        .entity_number("0111.222.333")
        .build()
    }

    #[test]
    fn listed_postal_code_suppresses_plain_code_and_city() {
        let catalogue = catalogue();
        let resolver = FactResolver::new(&catalogue);
        let admin = party("1000", "10, Rue de la Loi");
        let source = Source::Party(&admin);
        assert_eq!(
            resolver.resolve(FieldKind::PostalCodeList, source).unwrap().as_deref(),
            Some("pcd:m1000")
        );
        assert_eq!(resolver.resolve(FieldKind::PostalCode, source).unwrap(), None);
        assert_eq!(resolver.resolve(FieldKind::City, source).unwrap(), None);
    }

    #[test]
    fn unlisted_postal_code_reports_plain_code_and_city() {
        let catalogue = catalogue();
        let resolver = FactResolver::new(&catalogue);
        let admin = party("9999", "10, Rue de la Loi");
        let source = Source::Party(&admin);
        assert_eq!(resolver.resolve(FieldKind::PostalCodeList, source).unwrap(), None);
        assert_eq!(
            resolver.resolve(FieldKind::PostalCode, source).unwrap().as_deref(),
            Some("9999")
        );
        assert_eq!(
            resolver.resolve(FieldKind::City, source).unwrap().as_deref(),
            Some("Bruxelles")
        );
        assert_eq!(
            resolver.resolve(FieldKind::CountryList, source).unwrap().as_deref(),
            Some("cty:mBE")
        );
    }

    #[test]
    fn street_components() {
        let catalogue = catalogue();
        let resolver = FactResolver::new(&catalogue);
        let admin = party("1000", "10, Rue de la Loi");
        let source = Source::Party(&admin);
        let number = resolver.resolve(FieldKind::Street(StreetPart::Number), source).unwrap();
        assert_eq!(number.as_deref(), Some("10"));
        assert_eq!(resolver.resolve(FieldKind::Street(StreetPart::Box), source).unwrap(), None);

        let malformed = party("1000", "Rue de la Loi");
        let err = resolver
            .resolve(FieldKind::Street(StreetPart::Name), Source::Party(&malformed))
            .unwrap_err();
        assert!(matches!(err, JaarrekeningError::AddressFormat { .. }));
    }

    #[test]
    fn identification_and_kind_of_address() {
        let catalogue = catalogue();
        let resolver = FactResolver::new(&catalogue);
        let admin = party("1000", "10, Rue de la Loi");
        let source = Source::Party(&admin);
        let kind = FieldKind::IdentificationNumber(IdentificationField::EntityNumberKind);
        assert_eq!(resolver.resolve(kind, source).unwrap().as_deref(), Some("nmt:m1"));
        let number = FieldKind::IdentificationNumber(IdentificationField::EntityNumber);
        assert_eq!(
            resolver.resolve(number, source).unwrap().as_deref(),
            Some("0111.222.333")
        );
        let member = FieldKind::IdentificationNumber(IdentificationField::MemberNumber);
        assert_eq!(resolver.resolve(member, source).unwrap(), None);
        assert_eq!(resolver.resolve(FieldKind::KindOfAddressList, source).unwrap(), None);
        assert_eq!(
            resolver.resolve(FieldKind::KindOfAddressOther, source).unwrap().as_deref(),
            Some("Seat of the branch")
        );
    }

    #[test]
    fn mappings_outside_the_taxonomy_are_skipped() {
        let catalogue = catalogue();
        let resolver = FactResolver::new(&catalogue);
        let admin = party("1000", "10, Rue de la Loi");
        let facts = resolver
            .resolve_all(
                party_fields(PartyRole::Administrator, PartyKind::Company),
                Source::Party(&admin),
            )
            .unwrap();
        assert!(facts.is_empty());

        let company = CompanyBuilder::new(
            "ACME",
            "0123.456.789",
            AddressBuilder::new("Bruxelles", "1000", "BE").street("Rue de la Loi").build(),
        )
        .build();
        // Nothing is resolved, so the malformed street is never parsed.
        let facts = resolver.resolve_all(COMPANY_FIELDS, Source::Company(&company)).unwrap();
        assert!(facts.is_empty());
    }

    #[test]
    fn fields_outside_their_source_are_absent() {
        let catalogue = catalogue();
        let resolver = FactResolver::new(&catalogue);
        let admin = party("1000", "10, Rue de la Loi");
        assert_eq!(resolver.resolve(FieldKind::Email, Source::Party(&admin)).unwrap(), None);
        assert_eq!(resolver.resolve(FieldKind::Registry, Source::Party(&admin)).unwrap(), None);
    }
}
