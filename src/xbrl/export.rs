use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::NamedTempFile;
use tracing::info;

use super::document::generate_xbrl;
use crate::core::{AnnualAccount, JaarrekeningError, XbrlConfig};
use crate::kpi::KpiEvaluator;

/// A generated instance written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XbrlArtifact {
    /// File name, e.g. `Annual_Account_2023.xbrl`.
    pub name: String,
    pub mime_type: &'static str,
    pub path: PathBuf,
    pub content: Vec<u8>,
}

/// `Annual Account 2023` → `Annual_Account_2023.xbrl`.
///
/// Path separators and other characters that could leave the export
/// directory become `_`; leading dots are dropped.
pub fn xbrl_file_name(report_name: &str) -> String {
    let stem: String = report_name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_whitespace() || c.is_control() => '_',
            c => c,
        })
        .collect();
    let stem = stem.trim_start_matches('.');
    if stem.is_empty() {
        "annual_account.xbrl".to_string()
    } else {
        format!("{stem}.xbrl")
    }
}

/// Generate the instance and store it in `out_dir`.
///
/// The file is written to a temporary file in `out_dir` and only renamed to
/// its final name once complete, so a failed export never leaves a partial
/// file behind. On success the report's last generation date is set to `today`.
pub fn export_xbrl(
    account: &mut AnnualAccount,
    evaluator: &impl KpiEvaluator,
    out_dir: &Path,
    today: NaiveDate,
    config: &XbrlConfig,
) -> Result<XbrlArtifact, JaarrekeningError> {
    let xml = generate_xbrl(account, evaluator, config, today)?;
    let name = xbrl_file_name(&account.report_name);
    let path = out_dir.join(&name);

    let mut file = NamedTempFile::new_in(out_dir)?;
    file.write_all(xml.as_bytes())?;
    file.flush()?;
    file.persist(&path).map_err(|e| JaarrekeningError::Io(e.error))?;

    account.date_last_xbrl_generation = Some(today);
    info!(file = %path.display(), bytes = xml.len(), "XBRL file exported");

    Ok(XbrlArtifact {
        name,
        mime_type: "application/xml",
        path,
        content: xml.into_bytes(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn file_names() {
        assert_snapshot!(xbrl_file_name("Annual Account 2023"), @"Annual_Account_2023.xbrl");
        assert_snapshot!(xbrl_file_name("  Jaarrekening  "), @"Jaarrekening.xbrl");
        assert_snapshot!(xbrl_file_name("   "), @"annual_account.xbrl");
        assert_snapshot!(xbrl_file_name("../../etc/passwd"), @"_.._etc_passwd.xbrl");
        assert_snapshot!(xbrl_file_name("..\\AA 2023"), @"_AA_2023.xbrl");
        assert_snapshot!(xbrl_file_name("C:\\temp\\AA"), @"C__temp_AA.xbrl");
        assert_snapshot!(xbrl_file_name(".."), @"annual_account.xbrl");
    }
}
