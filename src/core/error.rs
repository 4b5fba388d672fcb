use thiserror::Error;

/// Errors that can occur while preparing or generating an annual account filing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JaarrekeningError {
    /// One or more data-quality rules failed.
    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// A party street does not follow `NUMBER[/BOX], STREET NAME`.
    #[error(
        "address of {party} should be like: STREET_NUMBER/STREET_BOX(optional), STREET_NAME. \
         Example: 718A/14, Pink Road (got {street:?})"
    )]
    AddressFormat {
        /// Name of the party (or company) owning the address.
        party: String,
        /// The street string as entered.
        street: String,
    },

    /// The taxonomy description lacks a required structure.
    #[error("malformed taxonomy: {0}")]
    MalformedTaxonomy(String),

    /// The KPI evaluation engine failed.
    #[error("KPI evaluation error: {0}")]
    Kpi(String),

    /// Forbidden state transition or edit of a frozen report.
    #[error("lifecycle error: {0}")]
    Lifecycle(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// XML generation error.
    #[error("XML error: {0}")]
    Xml(String),

    /// Writing the generated file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "administrators[0].street").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// Rule ID if applicable (e.g. "ANN-08").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    /// Create a validation error without a rule ID.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Create a validation error with a rule ID.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}

impl JaarrekeningError {
    /// Turn a list of validation errors into a result, `Ok` when empty.
    pub fn check(errors: Vec<ValidationError>) -> Result<(), Self> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self::Validation(errors))
        }
    }

    /// Validation errors carried by this error, empty for other variants.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}
