//! KPI evaluator adapter.
//!
//! Statement amounts are computed by an external report engine. This module
//! defines the contract the generator consumes ([`KpiEvaluator`]) and turns
//! the engine's `rub_*` keys into statement line codes.

mod evaluator;
mod rubric;

pub use evaluator::*;
pub use rubric::*;
