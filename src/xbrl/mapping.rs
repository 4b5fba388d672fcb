//! Fact id to field tables.
//!
//! Each table lists, in reporting order, the taxonomy fact ids fed by one
//! source (report, company, or a party of a given role and kind) together with
//! the field that supplies the value. Fact ids encode the element name and the
//! dimensions, `#`-separated; typed dimensions appear with an empty member.

use crate::core::{PartyKind, PartyRole, StreetPart};

/// Field of a source record that supplies a fact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Company registry number.
    Registry,
    DateGeneralAssembly,
    DateFrom,
    DateTo,
    DateRecentFiling,
    LegalForm,
    CommercialCourt,
    /// Company or party display name.
    Name,
    Email,
    Website,
    /// One component of the decomposed street line.
    Street(StreetPart),
    /// Postal code as a `pcd-enum:list1` member; only when the code is listed.
    PostalCodeList,
    /// Postal code as plain text; only when the code is not listed.
    PostalCode,
    /// City; only when the postal code is not listed.
    City,
    /// Country as a `cty-enum:list1` member.
    CountryList,
    IdentificationNumber(IdentificationField),
    /// Enumerated kind of address (`atc:m00x`).
    KindOfAddressList,
    /// Free-text kind of address.
    KindOfAddressOther,
    /// Profession of a natural person.
    Function,
}

/// Which identification number a fact reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentificationField {
    /// Category code of the entity number (`nmt:m1`).
    EntityNumberKind,
    EntityNumber,
    MemberNumber,
}

/// One entry of a mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub fact_id: &'static str,
    pub field: FieldKind,
}

const fn map(fact_id: &'static str, field: FieldKind) -> FieldMapping {
    FieldMapping { fact_id, field }
}

use FieldKind::*;
use IdentificationField::*;

/// Report metadata.
pub static REPORT_FIELDS: &[FieldMapping] = &[
    map(
        "met:str2#dim:bas=bas:m26#dim:part=part:m2#dim:psn=psn:m1#dim:qlt=qlt:m1",
        Registry,
    ),
    map(
        "met:dte1#dim:bas=bas:m27#dim:evt=evt:m1#dim:part=part:m2",
        DateGeneralAssembly,
    ),
    map(
        "met:dte1#dim:bas=bas:m27#dim:mmt=mmt:m1#dim:part=part:m2#dim:prd=prd:m1",
        DateFrom,
    ),
    map(
        "met:dte1#dim:bas=bas:m27#dim:mmt=mmt:m2#dim:part=part:m2#dim:prd=prd:m1",
        DateTo,
    ),
    map(
        "lgf-enum:list2#dim:bas=bas:m30#dim:part=part:m2#dim:psn=psn:m1",
        LegalForm,
    ),
    map("cct-enum:list1#dim:bas=bas:m32#dim:part=part:m2", CommercialCourt),
    map(
        "met:dte1#dim:bas=bas:m27#dim:evt=evt:m2#dim:part=part:m2",
        DateRecentFiling,
    ),
];

/// Filing company identifying data.
pub static COMPANY_FIELDS: &[FieldMapping] = &[
    map("met:str2#dim:bas=bas:m29#dim:part=part:m2#dim:psn=psn:m1", Name),
    map(
        "met:str2#dim:bas=bas:m31#dim:ctc=ctc:m1#dim:part=part:m2#dim:psn=psn:m1",
        Street(StreetPart::Name),
    ),
    map(
        "met:str2#dim:bas=bas:m31#dim:ctc=ctc:m2#dim:part=part:m2#dim:psn=psn:m1",
        Street(StreetPart::Number),
    ),
    map(
        "met:str2#dim:bas=bas:m31#dim:ctc=ctc:m3#dim:part=part:m2#dim:psn=psn:m1",
        Street(StreetPart::Box),
    ),
    map(
        "pcd-enum:list1#dim:bas=bas:m31#dim:ctc=ctc:m4#dim:part=part:m2#dim:psn=psn:m1",
        PostalCodeList,
    ),
    map(
        "met:str2#dim:bas=bas:m31#dim:ctc=ctc:m4#dim:part=part:m2#dim:psn=psn:m1",
        PostalCode,
    ),
    map(
        "met:str2#dim:bas=bas:m31#dim:ctc=ctc:m5#dim:part=part:m2#dim:psn=psn:m1",
        City,
    ),
    map(
        "cty-enum:list1#dim:bas=bas:m31#dim:ctc=ctc:m6#dim:part=part:m2#dim:psn=psn:m1",
        CountryList,
    ),
    map(
        "met:str2#dim:bas=bas:m31#dim:ctc=ctc:m7#dim:part=part:m2#dim:psn=psn:m1",
        Email,
    ),
    map(
        "met:str2#dim:bas=bas:m31#dim:ctc=ctc:m8#dim:part=part:m2#dim:psn=psn:m21",
        Website,
    ),
];

pub static ADMINISTRATOR_COMPANY_FIELDS: &[FieldMapping] = &[
    map(
        "nmt-enum:list1#dim:anlp=#dim:bas=bas:m26#dim:dcl=dcl:m7#dim:part=part:m2#dim:psn=psn:m10",
        IdentificationNumber(EntityNumberKind),
    ),
    map(
        "met:str2#dim:anlp=#dim:bas=bas:m26#dim:part=part:m2#dim:psn=psn:m10#dim:qlt=qlt:m1",
        IdentificationNumber(EntityNumber),
    ),
    map(
        "atc-enum:list1#dim:anlp=#dim:bas=bas:m31#dim:dcl=dcl:m7#dim:part=part:m2#dim:psn=psn:m10",
        KindOfAddressList,
    ),
    map(
        "met:str2#dim:anlp=#dim:bas=bas:m31#dim:dcl=dcl:m7#dim:part=part:m2#dim:psn=psn:m10",
        KindOfAddressOther,
    ),
    map(
        "met:str2#dim:anlp=#dim:bas=bas:m31#dim:ctc=ctc:m1#dim:part=part:m2#dim:psn=psn:m10",
        Street(StreetPart::Name),
    ),
    map(
        "met:str2#dim:anlp=#dim:bas=bas:m31#dim:ctc=ctc:m2#dim:part=part:m2#dim:psn=psn:m10",
        Street(StreetPart::Number),
    ),
    map(
        "met:str2#dim:anlp=#dim:bas=bas:m31#dim:ctc=ctc:m3#dim:part=part:m2#dim:psn=psn:m10",
        Street(StreetPart::Box),
    ),
    map(
        "pcd-enum:list1#dim:anlp=#dim:bas=bas:m31#dim:ctc=ctc:m4#dim:part=part:m2#dim:psn=psn:m10",
        PostalCodeList,
    ),
    map(
        "met:str2#dim:anlp=#dim:bas=bas:m31#dim:ctc=ctc:m4#dim:part=part:m2#dim:psn=psn:m10",
        PostalCode,
    ),
    map(
        "met:str2#dim:anlp=#dim:bas=bas:m31#dim:ctc=ctc:m5#dim:part=part:m2#dim:psn=psn:m10",
        City,
    ),
    map(
        "cty-enum:list1#dim:anlp=#dim:bas=bas:m31#dim:ctc=ctc:m6#dim:part=part:m2#dim:psn=psn:m10",
        CountryList,
    ),
];

pub static ADMINISTRATOR_PERSON_FIELDS: &[FieldMapping] = &[
    map(
        "met:str2#dim:afnp=#dim:annp=#dim:bas=bas:m28#dim:dcl=dcl:m27#dim:part=part:m2#dim:psn=psn:m12",
        Function,
    ),
    map(
        "atc-enum:list1#dim:afnp=#dim:annp=#dim:bas=bas:m31#dim:dcl=dcl:m7#dim:part=part:m2#dim:psn=psn:m12",
        KindOfAddressList,
    ),
    map(
        "met:str2#dim:afnp=#dim:annp=#dim:bas=bas:m31#dim:dcl=dcl:m7#dim:part=part:m2#dim:psn=psn:m12",
        KindOfAddressOther,
    ),
    map(
        "met:str2#dim:afnp=#dim:annp=#dim:bas=bas:m31#dim:ctc=ctc:m1#dim:part=part:m2#dim:psn=psn:m12",
        Street(StreetPart::Name),
    ),
    map(
        "met:str2#dim:afnp=#dim:annp=#dim:bas=bas:m31#dim:ctc=ctc:m2#dim:part=part:m2#dim:psn=psn:m12",
        Street(StreetPart::Number),
    ),
    map(
        "met:str2#dim:afnp=#dim:annp=#dim:bas=bas:m31#dim:ctc=ctc:m3#dim:part=part:m2#dim:psn=psn:m12",
        Street(StreetPart::Box),
    ),
    map(
        "pcd-enum:list1#dim:afnp=#dim:annp=#dim:bas=bas:m31#dim:ctc=ctc:m4#dim:part=part:m2#dim:psn=psn:m12",
        PostalCodeList,
    ),
    map(
        "met:str2#dim:afnp=#dim:annp=#dim:bas=bas:m31#dim:ctc=ctc:m4#dim:part=part:m2#dim:psn=psn:m12",
        PostalCode,
    ),
    map(
        "met:str2#dim:afnp=#dim:annp=#dim:bas=bas:m31#dim:ctc=ctc:m5#dim:part=part:m2#dim:psn=psn:m12",
        City,
    ),
    map(
        "cty-enum:list1#dim:afnp=#dim:annp=#dim:bas=bas:m31#dim:ctc=ctc:m6#dim:part=part:m2#dim:psn=psn:m12",
        CountryList,
    ),
];

pub static ACCOUNTANT_COMPANY_FIELDS: &[FieldMapping] = &[
    map(
        "nmt-enum:list1#dim:aclp=#dim:bas=bas:m26#dim:dcl=dcl:m7#dim:part=part:m2#dim:psn=psn:m13",
        IdentificationNumber(EntityNumberKind),
    ),
    map(
        "met:str2#dim:aclp=#dim:bas=bas:m26#dim:part=part:m2#dim:psn=psn:m13#dim:qlt=qlt:m1",
        IdentificationNumber(EntityNumber),
    ),
    map(
        "met:str2#dim:aclp=#dim:bas=bas:m34#dim:part=part:m2#dim:psn=psn:m13#dim:qlt=qlt:m5",
        IdentificationNumber(MemberNumber),
    ),
    map(
        "atc-enum:list1#dim:aclp=#dim:bas=bas:m31#dim:dcl=dcl:m7#dim:part=part:m2#dim:psn=psn:m13",
        KindOfAddressList,
    ),
    map(
        "met:str2#dim:aclp=#dim:bas=bas:m31#dim:dcl=dcl:m7#dim:part=part:m2#dim:psn=psn:m13",
        KindOfAddressOther,
    ),
    map(
        "met:str2#dim:aclp=#dim:bas=bas:m31#dim:ctc=ctc:m1#dim:part=part:m2#dim:psn=psn:m13",
        Street(StreetPart::Name),
    ),
    map(
        "met:str2#dim:aclp=#dim:bas=bas:m31#dim:ctc=ctc:m2#dim:part=part:m2#dim:psn=psn:m13",
        Street(StreetPart::Number),
    ),
    map(
        "met:str2#dim:aclp=#dim:bas=bas:m31#dim:ctc=ctc:m3#dim:part=part:m2#dim:psn=psn:m13",
        Street(StreetPart::Box),
    ),
    map(
        "pcd-enum:list1#dim:aclp=#dim:bas=bas:m31#dim:ctc=ctc:m4#dim:part=part:m2#dim:psn=psn:m13",
        PostalCodeList,
    ),
    map(
        "met:str2#dim:aclp=#dim:bas=bas:m31#dim:ctc=ctc:m4#dim:part=part:m2#dim:psn=psn:m13",
        PostalCode,
    ),
    map(
        "met:str2#dim:aclp=#dim:bas=bas:m31#dim:ctc=ctc:m5#dim:part=part:m2#dim:psn=psn:m13",
        City,
    ),
    map(
        "cty-enum:list1#dim:aclp=#dim:bas=bas:m31#dim:ctc=ctc:m6#dim:part=part:m2#dim:psn=psn:m13",
        CountryList,
    ),
];

pub static ACCOUNTANT_PERSON_FIELDS: &[FieldMapping] = &[
    map(
        "met:str2#dim:acfn=#dim:acnp=#dim:bas=bas:m28#dim:dcl=dcl:m27#dim:part=part:m2#dim:psn=psn:m15",
        Function,
    ),
    map(
        "met:str2#dim:acfn=#dim:acnp=#dim:bas=bas:m34#dim:part=part:m2#dim:psn=psn:m15#dim:qlt=qlt:m5",
        IdentificationNumber(MemberNumber),
    ),
    map(
        "atc-enum:list1#dim:acfn=#dim:acnp=#dim:bas=bas:m31#dim:dcl=dcl:m7#dim:part=part:m2#dim:psn=psn:m15",
        KindOfAddressList,
    ),
    map(
        "met:str2#dim:acfn=#dim:acnp=#dim:bas=bas:m31#dim:dcl=dcl:m7#dim:part=part:m2#dim:psn=psn:m15",
        KindOfAddressOther,
    ),
    map(
        "met:str2#dim:acfn=#dim:acnp=#dim:bas=bas:m31#dim:ctc=ctc:m1#dim:part=part:m2#dim:psn=psn:m15",
        Street(StreetPart::Name),
    ),
    map(
        "met:str2#dim:acfn=#dim:acnp=#dim:bas=bas:m31#dim:ctc=ctc:m2#dim:part=part:m2#dim:psn=psn:m15",
        Street(StreetPart::Number),
    ),
    map(
        "met:str2#dim:acfn=#dim:acnp=#dim:bas=bas:m31#dim:ctc=ctc:m3#dim:part=part:m2#dim:psn=psn:m15",
        Street(StreetPart::Box),
    ),
    map(
        "pcd-enum:list1#dim:acfn=#dim:acnp=#dim:bas=bas:m31#dim:ctc=ctc:m4#dim:part=part:m2#dim:psn=psn:m15",
        PostalCodeList,
    ),
    map(
        "met:str2#dim:acfn=#dim:acnp=#dim:bas=bas:m31#dim:ctc=ctc:m4#dim:part=part:m2#dim:psn=psn:m15",
        PostalCode,
    ),
    map(
        "met:str2#dim:acfn=#dim:acnp=#dim:bas=bas:m31#dim:ctc=ctc:m5#dim:part=part:m2#dim:psn=psn:m15",
        City,
    ),
    map(
        "cty-enum:list1#dim:acfn=#dim:acnp=#dim:bas=bas:m31#dim:ctc=ctc:m6#dim:part=part:m2#dim:psn=psn:m15",
        CountryList,
    ),
];

/// Mapping table of a party row.
pub fn party_fields(role: PartyRole, kind: PartyKind) -> &'static [FieldMapping] {
    match (role, kind) {
        (PartyRole::Administrator, PartyKind::Company) => ADMINISTRATOR_COMPANY_FIELDS,
        (PartyRole::Administrator, PartyKind::Person) => ADMINISTRATOR_PERSON_FIELDS,
        (PartyRole::Accountant, PartyKind::Company) => ACCOUNTANT_COMPANY_FIELDS,
        (PartyRole::Accountant, PartyKind::Person) => ACCOUNTANT_PERSON_FIELDS,
    }
}

/// Typed dimensions identifying a party row: the name for a legal person,
/// first and last name for a natural person.
pub fn party_open_dimensions(role: PartyRole, kind: PartyKind) -> &'static [&'static str] {
    match (role, kind) {
        (PartyRole::Administrator, PartyKind::Company) => &["dim:anlp"],
        (PartyRole::Administrator, PartyKind::Person) => &["dim:afnp", "dim:annp"],
        (PartyRole::Accountant, PartyKind::Company) => &["dim:aclp"],
        (PartyRole::Accountant, PartyKind::Person) => &["dim:acfn", "dim:acnp"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARTIES: [(PartyRole, PartyKind); 4] = [
        (PartyRole::Administrator, PartyKind::Company),
        (PartyRole::Administrator, PartyKind::Person),
        (PartyRole::Accountant, PartyKind::Company),
        (PartyRole::Accountant, PartyKind::Person),
    ];

    #[test]
    fn party_fact_ids_carry_their_open_dimensions() {
        for (role, kind) in PARTIES {
            for mapping in party_fields(role, kind) {
                for dim in party_open_dimensions(role, kind) {
                    assert!(
                        mapping.fact_id.contains(&format!("#{dim}=#")),
                        "{} lacks {dim}",
                        mapping.fact_id
                    );
                }
            }
        }
    }

    #[test]
    fn fact_ids_are_unique_per_table() {
        let tables = [
            REPORT_FIELDS,
            COMPANY_FIELDS,
            ADMINISTRATOR_COMPANY_FIELDS,
            ADMINISTRATOR_PERSON_FIELDS,
            ACCOUNTANT_COMPANY_FIELDS,
            ACCOUNTANT_PERSON_FIELDS,
        ];
        for table in tables {
            let mut ids: Vec<_> = table.iter().map(|m| m.fact_id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), table.len());
        }
    }

    #[test]
    fn only_accountants_report_member_numbers() {
        let member = FieldKind::IdentificationNumber(IdentificationField::MemberNumber);
        assert!(!ADMINISTRATOR_COMPANY_FIELDS.iter().any(|m| m.field == member));
        assert!(ACCOUNTANT_PERSON_FIELDS.iter().any(|m| m.field == member));
    }
}
