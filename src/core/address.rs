//! Decomposition of raw street lines into number, box and street name.
//!
//! The NBB taxonomy reports street name, house number and box as separate
//! facts, while master data holds a single line such as `718A/14, Pink Road`.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::JaarrekeningError;

static STREET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<number>\d+[a-zA-Z]*)\s*/*\s*(?P<box>\w*)\s*,\s*(?P<street>.+)")
        .expect("street pattern is a valid regex")
});

/// A street line split into its reported components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetAddress {
    /// House number, letters included (`718A`).
    pub number: String,
    /// Box number, empty when absent.
    pub r#box: String,
    /// Street name.
    pub street: String,
}

/// Which component of a street line a fact reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreetPart {
    Name,
    Number,
    Box,
}

impl StreetAddress {
    /// The requested component, `None` when it is empty.
    pub fn part(&self, part: StreetPart) -> Option<&str> {
        let value = match part {
            StreetPart::Name => &self.street,
            StreetPart::Number => &self.number,
            StreetPart::Box => &self.r#box,
        };
        (!value.is_empty()).then_some(value.as_str())
    }
}

/// Parse `NUMBER[/BOX], STREET NAME`, returning `None` when the line does not match.
pub fn match_street(street: &str) -> Option<StreetAddress> {
    let caps = STREET_PATTERN.captures(street)?;
    Some(StreetAddress {
        number: caps.name("number")?.as_str().to_string(),
        r#box: caps
            .name("box")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        street: caps.name("street")?.as_str().to_string(),
    })
}

/// Parse a street line owned by `owner`, failing with
/// [`JaarrekeningError::AddressFormat`] when it does not match.
pub fn parse_street(owner: &str, street: &str) -> Result<StreetAddress, JaarrekeningError> {
    match_street(street).ok_or_else(|| JaarrekeningError::AddressFormat {
        party: owner.to_string(),
        street: street.to_string(),
    })
}
