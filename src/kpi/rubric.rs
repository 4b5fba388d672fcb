use rust_decimal::Decimal;

use super::evaluator::KpiValues;

/// A statement line with its non-zero amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RubricAmount {
    /// Statement line code, e.g. `20/28`.
    pub code: String,
    pub amount: Decimal,
}

/// Canonical rubric code of a KPI key.
///
/// `rub_70` becomes `70` and `rub_20_28` becomes `20/28`. Keys that are not
/// rubrics, or have any other shape, yield `None`.
///
/// ```
/// use jaarrekening::kpi::rubric_code;
///
/// assert_eq!(rubric_code("rub_20_28").as_deref(), Some("20/28"));
/// assert_eq!(rubric_code("rub_9904").as_deref(), Some("9904"));
/// assert_eq!(rubric_code("total_assets"), None);
/// ```
pub fn rubric_code(key: &str) -> Option<String> {
    if !key.starts_with("rub") {
        return None;
    }
    let parts: Vec<&str> = key.split('_').collect();
    let code = match parts.as_slice() {
        [_, code] => (*code).to_string(),
        [_, from, to] => format!("{from}/{to}"),
        _ => return None,
    };
    (!code.is_empty() && code != "/").then_some(code)
}

/// Merge evaluated KPI sets into the amounts to report.
///
/// Sets are merged in order; a rubric seen again takes the later amount but
/// keeps its first position. Absent and zero amounts are not reportable and
/// are dropped after the merge.
pub fn reportable_rubrics<'a>(sets: impl IntoIterator<Item = &'a KpiValues>) -> Vec<RubricAmount> {
    let mut merged: Vec<(String, Option<Decimal>)> = Vec::new();
    for (key, value) in sets.into_iter().flatten() {
        let Some(code) = rubric_code(key) else {
            continue;
        };
        match merged.iter_mut().find(|(c, _)| *c == code) {
            Some(entry) => entry.1 = *value,
            None => merged.push((code, *value)),
        }
    }
    merged
        .into_iter()
        .filter_map(|(code, value)| {
            value
                .filter(|amount| !amount.is_zero())
                .map(|amount| RubricAmount { code, amount })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn key_shapes() {
        assert_eq!(rubric_code("rub_70").as_deref(), Some("70"));
        assert_eq!(rubric_code("rub_20_28").as_deref(), Some("20/28"));
        assert_eq!(rubric_code("rub_1_2_3"), None);
        assert_eq!(rubric_code("rub"), None);
        assert_eq!(rubric_code("rub_"), None);
        assert_eq!(rubric_code("sub_70"), None);
    }

    #[test]
    fn later_set_overrides_in_place() {
        let bs: KpiValues = vec![
            ("rub_20_28".into(), Some(dec!(100))),
            ("rub_10_15".into(), Some(dec!(50))),
        ];
        let pl: KpiValues = vec![
            ("rub_70".into(), Some(dec!(7))),
            ("rub_20_28".into(), Some(dec!(200))),
        ];
        let merged = reportable_rubrics([&bs, &pl]);
        let codes: Vec<_> = merged.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["20/28", "10/15", "70"]);
        assert_eq!(merged[0].amount, dec!(200));
    }

    #[test]
    fn zero_and_absent_are_dropped() {
        let bs: KpiValues = vec![
            ("rub_20".into(), Some(Decimal::ZERO)),
            ("rub_21".into(), None),
            ("rub_22".into(), Some(dec!(-3.5))),
            ("label".into(), Some(dec!(1))),
        ];
        let merged = reportable_rubrics([&bs]);
        assert_eq!(
            merged,
            vec![RubricAmount {
                code: "22".into(),
                amount: dec!(-3.5)
            }]
        );
    }

    #[test]
    fn zero_override_removes_rubric() {
        let bs: KpiValues = vec![("rub_20".into(), Some(dec!(5)))];
        let pl: KpiValues = vec![("rub_20".into(), Some(Decimal::ZERO))];
        assert!(reportable_rubrics([&bs, &pl]).is_empty());
    }
}
