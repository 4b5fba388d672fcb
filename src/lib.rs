//! # jaarrekening
//!
//! Belgian annual account filing library: builds the XBRL instance the
//! National Bank of Belgium (NBB) expects from a report, its administrators and
//! accountants, the regulator taxonomy and the evaluated statement amounts.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Generation is a single synchronous pass; the taxonomy [`taxonomy::Catalogue`]
//! is read-only and can be shared between runs.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use jaarrekening::core::*;
//! use jaarrekening::kpi::FixedKpiEvaluator;
//! use jaarrekening::xbrl::generate_xbrl;
//! use rust_decimal_macros::dec;
//!
//! let taxonomy = r#"{"internalModels": [{
//!     "factPrototypes": [
//!         {"id": "met:str2#dim:bas=bas:m29#dim:part=part:m2#dim:psn=psn:m1", "qname": "met:str2",
//!          "dims": [{"dimQname": "dim:bas", "memberQname": "bas:m29"}]},
//!         {"id": "rub-20-28", "qname": "met:am1", "rubCode": "20/28", "period": "N",
//!          "dims": [{"dimQname": "dim:bas", "memberQname": "bas:m1"}]}
//!     ],
//!     "namespacesByPrefix": {"met": "http://www.nbb.be/be/fr/cbso/dict/met",
//!                            "dim": "http://www.nbb.be/be/fr/cbso/dict/dim",
//!                            "bas": "http://www.nbb.be/be/fr/cbso/dict/dom/bas"}
//! }]}"#;
//!
//! let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
//! let company = CompanyBuilder::new(
//!     "Brasserie Dupont SA",
//!     "0123.456.789",
//!     AddressBuilder::new("Bruxelles", "1000", "BE").street("10, Rue de la Loi").build(),
//! )
//! .build();
//! let account = AnnualAccountBuilder::new("Annual Account 2023", company, date(2023, 1, 1), date(2023, 12, 31))
//!     .company_category(CompanyCategory::WithCapital)
//!     .balance_sheet(ReportTemplate::new("BS", Some(taxonomy.into()), Some("{}".into())))
//!     .build()
//!     .unwrap();
//!
//! let kpis = FixedKpiEvaluator::new().with_template("BS", vec![("rub_20_28".into(), Some(dec!(15000)))]);
//! let xml = generate_xbrl(&account, &kpis, &XbrlConfig::default(), date(2024, 5, 1)).unwrap();
//!
//! assert!(xml.contains(r#"<met:am1 contextRef="c2" decimals="INF" unitRef="EUR">15000.00</met:am1>"#));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Report, company and party types, validation, lifecycle |
//! | `taxonomy` | NBB taxonomy JSON loader and fact catalogue |
//! | `kpi` | KPI evaluator seam and rubric normalisation |
//! | `xbrl` (default) | XBRL instance generation and file export |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "taxonomy")]
pub mod taxonomy;

#[cfg(feature = "kpi")]
pub mod kpi;

#[cfg(feature = "xbrl")]
pub mod xbrl;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
