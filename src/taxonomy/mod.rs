//! NBB taxonomy catalogue.
//!
//! The regulator ships, per taxonomy version, a JSON description of every
//! reportable concept ("fact prototype"), the namespace of each prefix and the
//! enumerated code lists. [`Catalogue`] indexes that description once so the
//! generator can look facts up by id, statement line or editor table.

mod catalogue;
pub mod model;

pub use catalogue::*;
pub use model::{Dimension, FactPrototype, TaxonomyDocument};
