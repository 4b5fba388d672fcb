use serde::{Deserialize, Serialize};

use super::error::JaarrekeningError;
use super::types::CompanyCategory;

/// Default NBB schema tree for taxonomy version 22.19.
pub const DEFAULT_SCHEMA_BASE_URL: &str = "http://www.nbb.be/be/fr/cbso/fws/22.19/mod";

/// Settings for XBRL instance generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XbrlConfig {
    /// Scheme of the context entity identifier.
    pub identifier_scheme: String,
    /// Base URL of the regulator schema tree.
    pub schema_base_url: String,
    /// Namespace of the typed-member wrapper element (`open:str`).
    pub open_namespace: String,
    /// Reported precision of monetary facts.
    pub monetary_decimals: u32,
    /// Unit id and ISO 4217 measure of monetary facts.
    pub monetary_unit: String,
}

impl Default for XbrlConfig {
    fn default() -> Self {
        Self {
            identifier_scheme: "http://fgov.be".into(),
            schema_base_url: DEFAULT_SCHEMA_BASE_URL.into(),
            open_namespace: "http://www.nbb.be/be/fr/cbso/dict/dom/open".into(),
            monetary_decimals: 2,
            monetary_unit: "EUR".into(),
        }
    }
}

impl XbrlConfig {
    /// Load a configuration document; absent keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, JaarrekeningError> {
        serde_json::from_str(json)
            .map_err(|e| JaarrekeningError::Builder(format!("invalid XBRL configuration: {e}")))
    }

    /// Schema reference for a company category, e.g. `.../m01/m01-f.xsd`.
    pub fn schema_ref(&self, category: CompanyCategory) -> String {
        format!(
            "{}/{}/{}.xsd",
            self.schema_base_url.trim_end_matches('/'),
            category.model(),
            category.code()
        )
    }
}

/// Builder for [`XbrlConfig`].
///
/// # Example
///
/// ```
/// use jaarrekening::core::XbrlConfigBuilder;
///
/// let config = XbrlConfigBuilder::new()
///     .schema_base_url("http://www.nbb.be/be/fr/cbso/fws/23.0/mod")
///     .build();
/// assert_eq!(config.monetary_decimals, 2);
/// ```
#[derive(Debug, Default)]
pub struct XbrlConfigBuilder {
    config: XbrlConfig,
}

impl XbrlConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entity identifier scheme.
    pub fn identifier_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.config.identifier_scheme = scheme.into();
        self
    }

    /// Set the base URL of the schema tree.
    pub fn schema_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.schema_base_url = url.into();
        self
    }

    /// Set the typed-member namespace.
    pub fn open_namespace(mut self, uri: impl Into<String>) -> Self {
        self.config.open_namespace = uri.into();
        self
    }

    /// Set the reported precision of monetary facts.
    pub fn monetary_decimals(mut self, decimals: u32) -> Self {
        self.config.monetary_decimals = decimals;
        self
    }

    /// Set the monetary unit (ISO 4217).
    pub fn monetary_unit(mut self, unit: impl Into<String>) -> Self {
        self.config.monetary_unit = unit.into();
        self
    }

    pub fn build(self) -> XbrlConfig {
        self.config
    }
}
