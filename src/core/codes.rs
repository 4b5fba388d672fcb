//! NBB code lists for legal forms and commercial courts.
//!
//! Both lists are enumerations of the regulator taxonomy; the member code is
//! reported as-is as the fact value (e.g. `lgf:m610`, `cct:m31`).

use serde::{Deserialize, Deserializer, Serialize};

/// Legal status of the filing company (`lgf-enum:list2`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct LegalForm(&'static str);

impl LegalForm {
    /// Look up a known legal form by its member code.
    pub fn from_code(code: &str) -> Option<Self> {
        lookup(LEGAL_FORMS, code).map(|(code, _)| Self(code))
    }

    pub fn code(&self) -> &'static str {
        self.0
    }

    pub fn label(&self) -> &'static str {
        lookup(LEGAL_FORMS, self.0).map_or("", |(_, label)| label)
    }
}

/// Competent commercial court (`cct-enum:list1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct CommercialCourt(&'static str);

impl CommercialCourt {
    /// Look up a known court by its member code.
    pub fn from_code(code: &str) -> Option<Self> {
        lookup(COMMERCIAL_COURTS, code).map(|(code, _)| Self(code))
    }

    pub fn code(&self) -> &'static str {
        self.0
    }

    pub fn label(&self) -> &'static str {
        lookup(COMMERCIAL_COURTS, self.0).map_or("", |(_, label)| label)
    }
}

impl TryFrom<String> for LegalForm {
    type Error = String;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::from_code(&code).ok_or_else(|| format!("unknown legal form code '{code}'"))
    }
}

impl From<LegalForm> for String {
    fn from(value: LegalForm) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for CommercialCourt {
    type Error = String;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::from_code(&code).ok_or_else(|| format!("unknown commercial court code '{code}'"))
    }
}

impl From<CommercialCourt> for String {
    fn from(value: CommercialCourt) -> Self {
        value.0.to_string()
    }
}

impl<'de> Deserialize<'de> for LegalForm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::try_from(code).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for CommercialCourt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::try_from(code).map_err(serde::de::Error::custom)
    }
}

fn lookup(
    table: &'static [(&'static str, &'static str)],
    code: &str,
) -> Option<(&'static str, &'static str)> {
    table
        .binary_search_by(|(c, _)| (*c).cmp(code))
        .ok()
        .and_then(|i| table.get(i))
        .copied()
}

/// Legal forms (sorted by code for binary search).
static LEGAL_FORMS: &[(&str, &str)] = &[
    ("lgf:m001", "European cooperative society"),
    ("lgf:m011", "General partnership"),
    ("lgf:m014", "Public limited company"),
    ("lgf:m017", "Non-profit organization"),
    ("lgf:m021", "Private mutual insurance fund"),
    ("lgf:m026", "Private foundation"),
    ("lgf:m027", "European company (Societas Europaea)"),
    ("lgf:m029", "Public utility foundation"),
    ("lgf:m030", "Foreign company"),
    ("lgf:m065", "European economic assoc with registered seat in Belgium"),
    ("lgf:m125", "International non-profit organization"),
    (
        "lgf:m265",
        "Europ. Econ. assoc wo reg.seat but with est. unit in Belgium",
    ),
    ("lgf:m418", "Autonomous municipal company"),
    ("lgf:m610", "Private limited company"),
    ("lgf:m612", "Limited partnership"),
    ("lgf:m616", "Private limited company governed by public law"),
    ("lgf:m706", "Cooperative society"),
    ("lgf:m716", "Cooperative society governed by public law"),
];

/// Commercial courts (sorted by code for binary search).
static COMMERCIAL_COURTS: &[(&str, &str)] = &[
    ("cct:m03", "Antwerp, division Antwerp"),
    ("cct:m04", "Liège, division Arlon"),
    ("cct:m05", "Ghent, division Bruges"),
    ("cct:m06", "Hainaut, division Charleroi"),
    ("cct:m07", "Ghent, division Dendermonde"),
    ("cct:m08", "Liège, division Dinant"),
    ("cct:m09", "Ghent, division Ghent"),
    ("cct:m10", "Antwerp, division Hasselt"),
    ("cct:m11", "Liège, division Huy"),
    ("cct:m12", "Ghent, division Ieper"),
    ("cct:m13", "Ghent, division Kortrijk"),
    ("cct:m14", "Leuven"),
    ("cct:m16", "Liège, division Marche-en-Famenne"),
    ("cct:m17", "Antwerp, division Mechelen"),
    ("cct:m18", "Hainaut, division Mons"),
    ("cct:m19", "Liège, division Namur"),
    ("cct:m20", "Liège, division Neufchâteau"),
    ("cct:m21", "Walloon Brabant"),
    ("cct:m22", "Ghent, division Ostend"),
    ("cct:m23", "Ghent, division Oudenaarde"),
    ("cct:m25", "Antwerp, division Tongeren"),
    ("cct:m26", "Hainaut, division Tournai"),
    ("cct:m27", "Antwerp, division Turnhout"),
    ("cct:m28", "Liège, division Verviers"),
    ("cct:m29", "Ghent, division Veurne"),
    ("cct:m30", "Eupen"),
    ("cct:m31", "Brussels, French speaking"),
    ("cct:m32", "Brussels, Dutch speaking"),
];
