//! Core annual account types, validation, and lifecycle.
//!
//! This module provides the report entity, its parties and the code tables of
//! the NBB taxonomy, plus the data-quality rules checked before filing.

mod address;
mod builder;
mod codes;
mod config;
pub mod countries;
pub mod currencies;
mod error;
mod lifecycle;
mod types;
mod validation;

pub use address::*;
pub use builder::*;
pub use codes::*;
pub use config::*;
pub use countries::{country_member, is_known_country_code};
pub use error::*;
pub use types::*;
pub use validation::*;
