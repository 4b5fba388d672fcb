//! Workflow of an annual account: draft, confirmed, published.
//!
//! Master data may only change while the report is a draft. Confirming and
//! publishing run the full validation; publishing also archives the report.

use chrono::NaiveDate;
use tracing::info;

use super::config::XbrlConfig;
use super::error::JaarrekeningError;
use super::types::*;
use super::validation::validate_annual_account;

impl AnnualAccount {
    /// Fail unless the report is still a draft.
    pub fn ensure_draft(&self) -> Result<(), JaarrekeningError> {
        if self.state == ReportState::Draft {
            Ok(())
        } else {
            Err(JaarrekeningError::Lifecycle(format!(
                "report '{}' is {:?}; reset it to draft before editing",
                self.report_name, self.state
            )))
        }
    }

    /// Validate and move `Draft → Confirmed`.
    pub fn confirm(&mut self, today: NaiveDate) -> Result<(), JaarrekeningError> {
        self.expect_state(ReportState::Draft, "confirm")?;
        JaarrekeningError::check(validate_annual_account(self, today))?;
        self.state = ReportState::Confirmed;
        info!(report = %self.report_name, "annual account confirmed");
        Ok(())
    }

    /// Move `Confirmed → Draft`.
    pub fn reset_to_draft(&mut self) -> Result<(), JaarrekeningError> {
        self.expect_state(ReportState::Confirmed, "reset to draft")?;
        self.state = ReportState::Draft;
        info!(report = %self.report_name, "annual account reset to draft");
        Ok(())
    }

    /// Validate, move `Confirmed → Published` and archive the report.
    pub fn publish(&mut self, today: NaiveDate) -> Result<(), JaarrekeningError> {
        self.expect_state(ReportState::Confirmed, "publish")?;
        JaarrekeningError::check(validate_annual_account(self, today))?;
        self.state = ReportState::Published;
        self.active = false;
        info!(report = %self.report_name, "annual account published");
        Ok(())
    }

    /// Set the period manually; detaches any named date range.
    pub fn set_period(
        &mut self,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<(), JaarrekeningError> {
        self.ensure_draft()?;
        self.date_from = date_from;
        self.date_to = date_to;
        self.date_range = None;
        Ok(())
    }

    /// Take the period from a named date range.
    pub fn apply_date_range(&mut self, range: DateRange) -> Result<(), JaarrekeningError> {
        self.ensure_draft()?;
        self.date_from = range.date_start;
        self.date_to = range.date_end;
        self.date_range = Some(range);
        Ok(())
    }

    /// Select the company category and derive the schema reference from it.
    pub fn set_company_category(
        &mut self,
        category: CompanyCategory,
        config: &XbrlConfig,
    ) -> Result<(), JaarrekeningError> {
        self.ensure_draft()?;
        self.company_category = Some(category);
        self.schema_ref = Some(config.schema_ref(category));
        Ok(())
    }

    pub fn set_administrators(&mut self, parties: Vec<Party>) -> Result<(), JaarrekeningError> {
        self.ensure_draft()?;
        self.administrators = parties;
        Ok(())
    }

    pub fn set_accountants(&mut self, parties: Vec<Party>) -> Result<(), JaarrekeningError> {
        self.ensure_draft()?;
        self.accountants = parties;
        Ok(())
    }

    pub fn set_balance_sheet(&mut self, template: ReportTemplate) -> Result<(), JaarrekeningError> {
        self.ensure_draft()?;
        self.balance_sheet = Some(template);
        Ok(())
    }

    pub fn set_profit_loss(&mut self, template: ReportTemplate) -> Result<(), JaarrekeningError> {
        self.ensure_draft()?;
        self.profit_loss = Some(template);
        Ok(())
    }

    fn expect_state(&self, expected: ReportState, action: &str) -> Result<(), JaarrekeningError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(JaarrekeningError::Lifecycle(format!(
                "cannot {action} report '{}' in state {:?}",
                self.report_name, self.state
            )))
        }
    }
}
