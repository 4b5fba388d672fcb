use chrono::NaiveDate;

use super::address::match_street;
use super::error::ValidationError;
use super::types::*;

/// Validate an annual account before confirmation or publication.
/// Returns all validation errors found (not just the first).
///
/// `today` bounds the recent filing date.
pub fn validate_annual_account(account: &AnnualAccount, today: NaiveDate) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if account.company_category.is_none() {
        errors.push(ValidationError::with_rule(
            "company_category",
            "Company Category cannot be empty",
            "ANN-01",
        ));
    }
    if account
        .schema_ref
        .as_ref()
        .is_none_or(|s| s.trim().is_empty())
    {
        errors.push(ValidationError::with_rule(
            "schema_ref",
            "Schema cannot be empty",
            "ANN-02",
        ));
    }
    if account.commercial_court.is_none() {
        errors.push(ValidationError::with_rule(
            "commercial_court",
            "Commercial Court cannot be empty",
            "ANN-03",
        ));
    }
    match account.date_recent_filing {
        None => errors.push(ValidationError::with_rule(
            "date_recent_filing",
            "Last filing date cannot be empty",
            "ANN-04",
        )),
        Some(filed) if filed > today => errors.push(ValidationError::with_rule(
            "date_recent_filing",
            "Last filing date cannot be in the future",
            "ANN-09",
        )),
        Some(_) => {}
    }
    if account.legal_form.is_none() {
        errors.push(ValidationError::with_rule(
            "legal_form",
            "Legal Status cannot be empty",
            "ANN-05",
        ));
    }

    validate_template(
        account.balance_sheet.as_ref(),
        "balance_sheet",
        "Balance Sheet",
        "ANN-06",
        &mut errors,
    );
    validate_template(
        account.profit_loss.as_ref(),
        "profit_loss",
        "Profit & Loss",
        "ANN-07",
        &mut errors,
    );

    match account.date_general_assembly {
        None => errors.push(ValidationError::with_rule(
            "date_general_assembly",
            "General Assembly date cannot be empty",
            "ANN-08",
        )),
        Some(assembly) if assembly < account.date_to => {
            errors.push(ValidationError::with_rule(
                "date_general_assembly",
                "The closing date of the financial year must be earlier than or equal to \
                 the date of approval by the general meeting",
                "ANN-08",
            ))
        }
        Some(_) => {}
    }

    if account.date_from > account.date_to {
        errors.push(ValidationError::with_rule(
            "date_from",
            format!(
                "period start {} is after period end {}",
                account.date_from, account.date_to
            ),
            "ANN-10",
        ));
    }

    errors.extend(validate_parties(account));
    errors
}

/// Validate administrators and accountants (names, address, entity and member numbers).
///
/// Runs on every export, drafts included, since street facts cannot be
/// resolved from a malformed street line.
pub fn validate_parties(account: &AnnualAccount) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (i, admin) in account.administrators.iter().enumerate() {
        validate_party(admin, PartyRole::Administrator, &format!("administrators[{i}]"), &mut errors);
    }
    for (i, accountant) in account.accountants.iter().enumerate() {
        validate_party(accountant, PartyRole::Accountant, &format!("accountants[{i}]"), &mut errors);
    }
    errors
}

fn validate_party(party: &Party, role: PartyRole, path: &str, errors: &mut Vec<ValidationError>) {
    match &party.kind_of_address {
        None => errors.push(ValidationError::with_rule(
            format!("{path}.kind_of_address"),
            format!(
                "Kind of Address field for {} {} cannot be empty",
                role.label(),
                party.name
            ),
            "PTY-01",
        )),
        Some(KindOfAddress::Other(text)) if text.trim().is_empty() => {
            errors.push(ValidationError::with_rule(
                format!("{path}.kind_of_address"),
                "Other Kind Of Address cannot be empty",
                "PTY-01",
            ))
        }
        Some(_) => {}
    }

    let unnamed = match party.kind {
        PartyKind::Company => party.name.trim().is_empty(),
        PartyKind::Person => [&party.first_name, &party.last_name]
            .into_iter()
            .any(|n| n.as_deref().is_none_or(|n| n.trim().is_empty())),
    };
    if unnamed {
        errors.push(ValidationError::with_rule(
            format!("{path}.name"),
            format!("{} '{}' needs a full name", role.label(), party.name),
            "PTY-05",
        ));
    }

    let street_ok = party.address.street.as_deref().and_then(match_street).is_some();
    if !street_ok {
        errors.push(ValidationError::with_rule(
            format!("{path}.address.street"),
            format!(
                "Address of {} should be like: STREET_NUMBER/STREET_BOX(optional), \
                 STREET_NAME. Example: 718A/14, Pink Road",
                party.name
            ),
            "PTY-02",
        ));
    }

    if party.is_company() {
        let count = party.ids_of(&IdCategory::EntityNumber).count();
        if count != 1 {
            errors.push(ValidationError::with_rule(
                format!("{path}.id_numbers"),
                format!(
                    "{} {} must have only one Entity Number (in ID Numbers), found {count}",
                    role.label(),
                    party.name
                ),
                "PTY-03",
            ));
        }
    }

    if role == PartyRole::Accountant {
        let count = party.ids_of(&IdCategory::MemberNumber).count();
        if count != 1 {
            errors.push(ValidationError::with_rule(
                format!("{path}.id_numbers"),
                format!(
                    "Accountant {} must have only one Member Number (in ID Numbers), found {count}",
                    party.name
                ),
                "PTY-04",
            ));
        }
    }
}

fn validate_template(
    template: Option<&ReportTemplate>,
    field: &str,
    label: &str,
    rule: &str,
    errors: &mut Vec<ValidationError>,
) {
    let Some(template) = template else {
        errors.push(ValidationError::with_rule(
            field,
            format!("{label} cannot be empty"),
            rule,
        ));
        return;
    };
    if template.data_file.as_ref().is_none_or(|f| f.trim().is_empty()) {
        errors.push(ValidationError::with_rule(
            format!("{field}.data_file"),
            format!(
                "JSON Data file cannot be empty, edit the {} to add one",
                label.to_lowercase()
            ),
            rule,
        ));
    }
    if template.calc_file.as_ref().is_none_or(|f| f.trim().is_empty()) {
        errors.push(ValidationError::with_rule(
            format!("{field}.calc_file"),
            format!(
                "JSON Calculation file cannot be empty, edit the {} to add one",
                label.to_lowercase()
            ),
            rule,
        ));
    }
}
