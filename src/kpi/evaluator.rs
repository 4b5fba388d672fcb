use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::{JaarrekeningError, ReportTemplate};

/// Evaluated KPIs of one template, in evaluation order.
///
/// Keys follow the `rub_<code>` / `rub_<code1>_<code2>` convention; other
/// keys may be present and are ignored by the generator.
pub type KpiValues = Vec<(String, Option<Decimal>)>;

/// The report engine computing statement amounts over a period.
pub trait KpiEvaluator {
    /// Evaluate `template` from `date_from` to `date_to`, both inclusive.
    fn evaluate(
        &self,
        template: &ReportTemplate,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<KpiValues, JaarrekeningError>;
}

impl<F> KpiEvaluator for F
where
    F: Fn(&ReportTemplate, NaiveDate, NaiveDate) -> Result<KpiValues, JaarrekeningError>,
{
    fn evaluate(
        &self,
        template: &ReportTemplate,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<KpiValues, JaarrekeningError> {
        self(template, date_from, date_to)
    }
}

/// Evaluator returning precomputed values keyed by template name.
///
/// Useful when amounts come from an external export, and in tests.
///
/// ```
/// use chrono::NaiveDate;
/// use jaarrekening::core::ReportTemplate;
/// use jaarrekening::kpi::{FixedKpiEvaluator, KpiEvaluator};
/// use rust_decimal_macros::dec;
///
/// let evaluator = FixedKpiEvaluator::new()
///     .with_template("BS", vec![("rub_20_28".into(), Some(dec!(15000)))]);
/// let day = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
/// let values = evaluator
///     .evaluate(&ReportTemplate::new("BS", None, None), day, day)
///     .unwrap();
/// assert_eq!(values.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedKpiEvaluator {
    values: HashMap<String, KpiValues>,
    strict: bool,
}

impl FixedKpiEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the values returned for a template name.
    pub fn with_template(mut self, name: impl Into<String>, values: KpiValues) -> Self {
        self.insert(name, values);
        self
    }

    /// Fail with [`JaarrekeningError::Kpi`] for unknown templates instead of
    /// returning no values.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, values: KpiValues) {
        self.values.insert(name.into(), values);
    }
}

impl KpiEvaluator for FixedKpiEvaluator {
    fn evaluate(
        &self,
        template: &ReportTemplate,
        _date_from: NaiveDate,
        _date_to: NaiveDate,
    ) -> Result<KpiValues, JaarrekeningError> {
        match self.values.get(&template.name) {
            Some(values) => Ok(values.clone()),
            None if self.strict => Err(JaarrekeningError::Kpi(format!(
                "no values for template '{}'",
                template.name
            ))),
            None => Ok(Vec::new()),
        }
    }
}
