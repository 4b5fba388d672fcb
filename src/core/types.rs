use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::codes::{CommercialCourt, LegalForm};

/// An annual account filing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualAccount {
    /// Report name, also the base of the generated file name.
    pub report_name: String,
    /// The filing company.
    pub company: Company,
    /// Model category, selects the regulator schema.
    pub company_category: Option<CompanyCategory>,
    /// URL of the regulator schema referenced by the instance.
    pub schema_ref: Option<String>,
    /// Legal status (`lgf:m...`).
    pub legal_form: Option<LegalForm>,
    /// Competent commercial court (`cct:m..`).
    pub commercial_court: Option<CommercialCourt>,
    /// Workflow state.
    pub state: ReportState,
    /// False once published (archived).
    pub active: bool,
    /// Named date range the period was taken from, if any.
    pub date_range: Option<DateRange>,
    /// First day of the financial year.
    pub date_from: NaiveDate,
    /// Closing date of the financial year; also the instant of every context.
    pub date_to: NaiveDate,
    /// Date of the general assembly that approved the accounts.
    pub date_general_assembly: Option<NaiveDate>,
    /// Filing date of the most recent document mentioning the deed of
    /// incorporation or amendment of the articles of association.
    pub date_recent_filing: Option<NaiveDate>,
    /// Set by the export action.
    pub date_last_xbrl_generation: Option<NaiveDate>,
    /// Administrators, in reporting order.
    pub administrators: Vec<Party>,
    /// External accountants, in reporting order.
    pub accountants: Vec<Party>,
    /// Balance-sheet report template; carries the taxonomy data file.
    pub balance_sheet: Option<ReportTemplate>,
    /// Profit-and-loss report template.
    pub profit_loss: Option<ReportTemplate>,
}

/// The filing company master data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// Registered name.
    pub name: String,
    /// Enterprise (registry) number, the context entity identifier.
    pub registry: String,
    /// Registered office address.
    pub address: Address,
    /// Contact e-mail.
    pub email: Option<String>,
    /// Website.
    pub website: Option<String>,
    /// Accounting currency (ISO 4217), drives monetary rounding.
    pub currency_code: String,
}

/// Postal address as entered, street not yet decomposed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Raw street line, expected as `NUMBER[/BOX], STREET NAME`.
    pub street: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Country code (ISO 3166-1 alpha-2).
    pub country_code: Option<String>,
}

/// An administrator or accountant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    /// Display name (company name or full person name).
    pub name: String,
    /// First name, natural persons only.
    pub first_name: Option<String>,
    /// Last name, natural persons only.
    pub last_name: Option<String>,
    /// Legal or natural person.
    pub kind: PartyKind,
    /// Profession, reported for natural persons.
    pub function: Option<String>,
    /// Kind of address.
    pub kind_of_address: Option<KindOfAddress>,
    /// Postal address.
    pub address: Address,
    /// Identification numbers, each tagged with a category.
    pub id_numbers: Vec<IdentificationNumber>,
}

impl Party {
    /// Identification numbers of the given category.
    pub fn ids_of(&self, category: &IdCategory) -> impl Iterator<Item = &IdentificationNumber> {
        self.id_numbers.iter().filter(move |id| &id.category == category)
    }

    /// The entity (enterprise) number, if any.
    pub fn entity_number(&self) -> Option<&str> {
        self.ids_of(&IdCategory::EntityNumber)
            .next()
            .map(|id| id.number.as_str())
    }

    /// The professional member number, if any.
    pub fn member_number(&self) -> Option<&str> {
        self.ids_of(&IdCategory::MemberNumber)
            .next()
            .map(|id| id.number.as_str())
    }

    pub fn is_company(&self) -> bool {
        self.kind == PartyKind::Company
    }
}

/// Legal (company) or natural (person) party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartyKind {
    Company,
    Person,
}

/// Function a party holds in the filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartyRole {
    Administrator,
    Accountant,
}

impl PartyRole {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::Accountant => "Accountant",
        }
    }
}

/// An identification number with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentificationNumber {
    pub number: String,
    pub category: IdCategory,
}

impl IdentificationNumber {
    pub fn new(number: impl Into<String>, category: IdCategory) -> Self {
        Self {
            number: number.into(),
            category,
        }
    }
}

/// Category of an identification number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdCategory {
    /// `nmt:m1`, enterprise number.
    EntityNumber,
    /// `member_number`, member number of a professional institute.
    MemberNumber,
    /// Any other category code.
    Other(String),
}

impl IdCategory {
    pub fn code(&self) -> &str {
        match self {
            Self::EntityNumber => "nmt:m1",
            Self::MemberNumber => "member_number",
            Self::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "nmt:m1" => Self::EntityNumber,
            "member_number" => Self::MemberNumber,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Kind of address of a party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KindOfAddress {
    /// `atc:m001`, address of the head office.
    HeadOffice,
    /// `atc:m002`, address of the business unit.
    BusinessUnit,
    /// `atc:m003`, branch of a foreign company.
    ForeignBranch,
    /// Free-text kind, reported through the "other" fact.
    Other(String),
}

impl KindOfAddress {
    /// Enumeration member code, `None` for free-text kinds.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::HeadOffice => Some("atc:m001"),
            Self::BusinessUnit => Some("atc:m002"),
            Self::ForeignBranch => Some("atc:m003"),
            Self::Other(_) => None,
        }
    }

    /// Free text, only for [`KindOfAddress::Other`].
    pub fn other_text(&self) -> Option<&str> {
        match self {
            Self::Other(text) => Some(text),
            _ => None,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "atc:m001" => Some(Self::HeadOffice),
            "atc:m002" => Some(Self::BusinessUnit),
            "atc:m003" => Some(Self::ForeignBranch),
            _ => None,
        }
    }
}

/// Model category of the filing company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanyCategory {
    /// `m01-f`, companies with capital.
    WithCapital,
    /// `m81-f`, companies without capital.
    WithoutCapital,
    /// `m04-f`, non-profit institutions.
    NonProfit,
}

impl CompanyCategory {
    pub fn code(&self) -> &'static str {
        match self {
            Self::WithCapital => "m01-f",
            Self::WithoutCapital => "m81-f",
            Self::NonProfit => "m04-f",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "m01-f" => Some(Self::WithCapital),
            "m81-f" => Some(Self::WithoutCapital),
            "m04-f" => Some(Self::NonProfit),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::WithCapital => "companies with capital",
            Self::WithoutCapital => "companies without capital",
            Self::NonProfit => "Non-profit institution",
        }
    }

    /// Model directory in the regulator schema tree (`m01`, `m81`, `m04`).
    pub fn model(&self) -> &'static str {
        match self {
            Self::WithCapital => "m01",
            Self::WithoutCapital => "m81",
            Self::NonProfit => "m04",
        }
    }
}

/// Workflow state of an annual account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReportState {
    #[default]
    Draft,
    Confirmed,
    Published,
}

/// A named accounting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub name: String,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
}

/// A financial statement template evaluated by the KPI engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTemplate {
    /// Template name, the key the KPI engine evaluates.
    pub name: String,
    /// Taxonomy description (JSON data file).
    pub data_file: Option<String>,
    /// Calculation rules (JSON calculation file).
    pub calc_file: Option<String>,
}

impl ReportTemplate {
    pub fn new(
        name: impl Into<String>,
        data_file: Option<String>,
        calc_file: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            data_file,
            calc_file,
        }
    }
}
