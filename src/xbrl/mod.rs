//! XBRL instance generation for NBB annual account filings.
//!
//! The instance is built in memory from the report, the taxonomy catalogue
//! loaded from the balance-sheet template, and the KPI values of both
//! templates, then serialized with `quick-xml`.
//!
//! ```text
//! AnnualAccount ──► FactResolver ──► DocumentBuilder ──► XbrlDocument ──► XML
//!                       ▲                  ▲
//!                   Catalogue        KpiEvaluator
//! ```

mod context;
mod document;
mod export;
pub mod mapping;
mod namespaces;
mod resolver;
mod xml_utils;

pub use context::{Context, DocumentBuilder, Fact, Node, Scenario, Unit};
pub use document::{XbrlDocument, build_document, generate_xbrl, to_xbrl_xml};
pub use export::{XbrlArtifact, export_xbrl, xbrl_file_name};
pub use namespaces::collect_namespaces;
pub use resolver::{FactResolver, ResolvedFact, Source};
pub use xml_utils::format_amount;

/// Namespace URIs the instance always uses.
pub mod ns {
    pub const XBRLI: &str = "http://www.xbrl.org/2003/instance";
    pub const XBRLDI: &str = "http://xbrl.org/2006/xbrldi";
    pub const LINK: &str = "http://www.xbrl.org/2003/linkbase";
    pub const XLINK: &str = "http://www.w3.org/1999/xlink";
    pub const ISO4217: &str = "http://www.xbrl.org/2003/iso4217";
}
