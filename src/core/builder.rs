use chrono::NaiveDate;

use super::codes::{CommercialCourt, LegalForm};
use super::config::XbrlConfig;
use super::error::JaarrekeningError;
use super::types::*;

/// Builder for annual account filings.
///
/// ```
/// use jaarrekening::core::*;
/// use chrono::NaiveDate;
///
/// let company = CompanyBuilder::new(
///     "ACME SRL",
///     "0123456789",
///     AddressBuilder::new("Bruxelles", "1000", "BE").street("10, Rue de la Loi").build(),
/// )
/// .build();
///
/// let account = AnnualAccountBuilder::new(
///     "Annual account 2023",
///     company,
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
/// )
/// .company_category(CompanyCategory::WithCapital)
/// .build()
/// .unwrap();
///
/// assert_eq!(
///     account.schema_ref.as_deref(),
///     Some("http://www.nbb.be/be/fr/cbso/fws/22.19/mod/m01/m01-f.xsd")
/// );
/// ```
pub struct AnnualAccountBuilder {
    report_name: String,
    company: Company,
    company_category: Option<CompanyCategory>,
    schema_ref: Option<String>,
    legal_form: Option<LegalForm>,
    commercial_court: Option<CommercialCourt>,
    date_range: Option<DateRange>,
    date_from: NaiveDate,
    date_to: NaiveDate,
    date_general_assembly: Option<NaiveDate>,
    date_recent_filing: Option<NaiveDate>,
    administrators: Vec<Party>,
    accountants: Vec<Party>,
    balance_sheet: Option<ReportTemplate>,
    profit_loss: Option<ReportTemplate>,
    config: XbrlConfig,
}

impl AnnualAccountBuilder {
    pub fn new(
        report_name: impl Into<String>,
        company: Company,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Self {
        Self {
            report_name: report_name.into(),
            company,
            company_category: None,
            schema_ref: None,
            legal_form: None,
            commercial_court: None,
            date_range: None,
            date_from,
            date_to,
            date_general_assembly: None,
            date_recent_filing: None,
            administrators: Vec::new(),
            accountants: Vec::new(),
            balance_sheet: None,
            profit_loss: None,
            config: XbrlConfig::default(),
        }
    }

    /// Configuration used to derive the schema reference from the category.
    pub fn config(mut self, config: XbrlConfig) -> Self {
        self.config = config;
        self
    }

    pub fn company_category(mut self, category: CompanyCategory) -> Self {
        self.company_category = Some(category);
        self
    }

    /// Explicit schema reference; overrides the one derived from the category.
    pub fn schema_ref(mut self, url: impl Into<String>) -> Self {
        self.schema_ref = Some(url.into());
        self
    }

    pub fn legal_form(mut self, form: LegalForm) -> Self {
        self.legal_form = Some(form);
        self
    }

    pub fn commercial_court(mut self, court: CommercialCourt) -> Self {
        self.commercial_court = Some(court);
        self
    }

    /// Take the period from a named date range.
    pub fn date_range(mut self, range: DateRange) -> Self {
        self.date_from = range.date_start;
        self.date_to = range.date_end;
        self.date_range = Some(range);
        self
    }

    pub fn general_assembly(mut self, date: NaiveDate) -> Self {
        self.date_general_assembly = Some(date);
        self
    }

    pub fn recent_filing(mut self, date: NaiveDate) -> Self {
        self.date_recent_filing = Some(date);
        self
    }

    pub fn add_administrator(mut self, party: Party) -> Self {
        self.administrators.push(party);
        self
    }

    pub fn add_accountant(mut self, party: Party) -> Self {
        self.accountants.push(party);
        self
    }

    pub fn balance_sheet(mut self, template: ReportTemplate) -> Self {
        self.balance_sheet = Some(template);
        self
    }

    pub fn profit_loss(mut self, template: ReportTemplate) -> Self {
        self.profit_loss = Some(template);
        self
    }

    /// Build a draft annual account.
    pub fn build(self) -> Result<AnnualAccount, JaarrekeningError> {
        if self.report_name.trim().is_empty() {
            return Err(JaarrekeningError::Builder("report name is required".into()));
        }
        if self.company.registry.trim().is_empty() {
            return Err(JaarrekeningError::Builder(
                "company registry number is required".into(),
            ));
        }
        if self.date_from > self.date_to {
            return Err(JaarrekeningError::Builder(format!(
                "period start {} is after period end {}",
                self.date_from, self.date_to
            )));
        }

        let schema_ref = self.schema_ref.or_else(|| {
            self.company_category
                .map(|category| self.config.schema_ref(category))
        });

        Ok(AnnualAccount {
            report_name: self.report_name,
            company: self.company,
            company_category: self.company_category,
            schema_ref,
            legal_form: self.legal_form,
            commercial_court: self.commercial_court,
            state: ReportState::Draft,
            active: true,
            date_range: self.date_range,
            date_from: self.date_from,
            date_to: self.date_to,
            date_general_assembly: self.date_general_assembly,
            date_recent_filing: self.date_recent_filing,
            date_last_xbrl_generation: None,
            administrators: self.administrators,
            accountants: self.accountants,
            balance_sheet: self.balance_sheet,
            profit_loss: self.profit_loss,
        })
    }
}

/// Builder for the filing company.
pub struct CompanyBuilder {
    name: String,
    registry: String,
    address: Address,
    email: Option<String>,
    website: Option<String>,
    currency_code: String,
}

impl CompanyBuilder {
    pub fn new(name: impl Into<String>, registry: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            registry: registry.into(),
            address,
            email: None,
            website: None,
            currency_code: "EUR".to_string(),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    pub fn build(self) -> Company {
        Company {
            name: self.name,
            registry: self.registry,
            address: self.address,
            email: self.email,
            website: self.website,
            currency_code: self.currency_code,
        }
    }
}

/// Builder for administrators and accountants.
pub struct PartyBuilder {
    name: String,
    first_name: Option<String>,
    last_name: Option<String>,
    kind: PartyKind,
    function: Option<String>,
    kind_of_address: Option<KindOfAddress>,
    address: Address,
    id_numbers: Vec<IdentificationNumber>,
}

impl PartyBuilder {
    /// A legal person.
    pub fn company(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            first_name: None,
            last_name: None,
            kind: PartyKind::Company,
            function: None,
            kind_of_address: None,
            address,
            id_numbers: Vec::new(),
        }
    }

    /// A natural person; the display name is `first last`.
    pub fn person(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: Address,
    ) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        Self {
            name: format!("{first_name} {last_name}").trim().to_string(),
            first_name: Some(first_name),
            last_name: Some(last_name),
            kind: PartyKind::Person,
            function: None,
            kind_of_address: None,
            address,
            id_numbers: Vec::new(),
        }
    }

    /// Profession of a natural person.
    pub fn function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    pub fn kind_of_address(mut self, kind: KindOfAddress) -> Self {
        self.kind_of_address = Some(kind);
        self
    }

    pub fn id_number(mut self, number: impl Into<String>, category: IdCategory) -> Self {
        self.id_numbers
            .push(IdentificationNumber::new(number, category));
        self
    }

    pub fn entity_number(self, number: impl Into<String>) -> Self {
        self.id_number(number, IdCategory::EntityNumber)
    }

    pub fn member_number(self, number: impl Into<String>) -> Self {
        self.id_number(number, IdCategory::MemberNumber)
    }

    pub fn build(self) -> Party {
        Party {
            name: self.name,
            first_name: self.first_name,
            last_name: self.last_name,
            kind: self.kind,
            function: self.function,
            kind_of_address: self.kind_of_address,
            address: self.address,
            id_numbers: self.id_numbers,
        }
    }
}

/// Builder for postal addresses.
pub struct AddressBuilder {
    street: Option<String>,
    city: String,
    postal_code: String,
    country_code: String,
}

impl AddressBuilder {
    pub fn new(
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            street: None,
            city: city.into(),
            postal_code: postal_code.into(),
            country_code: country_code.into(),
        }
    }

    /// Raw street line, `NUMBER[/BOX], STREET NAME`.
    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn build(self) -> Address {
        Address {
            street: self.street,
            postal_code: non_empty(self.postal_code),
            city: non_empty(self.city),
            country_code: non_empty(self.country_code),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}
