use chrono::NaiveDate;
use tracing::{info, warn};

use super::context::{Context, DocumentBuilder, Fact, Node, Scenario};
use super::mapping::{COMPANY_FIELDS, REPORT_FIELDS, party_fields, party_open_dimensions};
use super::namespaces::collect_namespaces;
use super::ns;
use super::resolver::{FactResolver, ResolvedFact, Source};
use super::xml_utils::{XmlWriter, format_amount};
use crate::core::{
    AnnualAccount, JaarrekeningError, Party, PartyRole, ReportState, ValidationError, XbrlConfig,
    validate_annual_account, validate_parties,
};
use crate::core::currencies::round_monetary;
use crate::kpi::{KpiEvaluator, KpiValues, reportable_rubrics};
use crate::taxonomy::Catalogue;

/// An assembled XBRL instance, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XbrlDocument {
    pub schema_ref: String,
    /// Entity identifier scheme and value shared by all contexts.
    pub identifier_scheme: String,
    pub identifier: String,
    /// Reporting instant of every context.
    pub instant: NaiveDate,
    /// Prefixed namespace declarations.
    pub namespaces: Vec<(String, String)>,
    /// Contexts, facts and units in document order.
    pub nodes: Vec<Node>,
}

impl XbrlDocument {
    pub fn contexts(&self) -> impl Iterator<Item = &Context> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Context(c) => Some(c),
            _ => None,
        })
    }

    pub fn facts(&self) -> impl Iterator<Item = &Fact> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Fact(f) => Some(f),
            _ => None,
        })
    }

    /// Serialize to a pretty-printed UTF-8 XML string.
    pub fn to_xml(&self) -> Result<String, JaarrekeningError> {
        let mut w = XmlWriter::new()?;

        let mut root_attrs: Vec<(String, &str)> = vec![("xmlns".into(), ns::XBRLI)];
        for (prefix, uri) in &self.namespaces {
            root_attrs.push((format!("xmlns:{prefix}"), uri.as_str()));
        }
        let root_attrs: Vec<(&str, &str)> = root_attrs.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        w.start_element_with_attrs("xbrl", &root_attrs)?;

        w.empty_element_with_attrs(
            "link:schemaRef",
            &[("xlink:type", "simple"), ("xlink:href", self.schema_ref.as_str())],
        )?;

        let instant = self.instant.format("%Y-%m-%d").to_string();
        for node in &self.nodes {
            match node {
                Node::Context(context) => {
                    w.start_element_with_attrs("context", &[("id", context.id.as_str())])?;
                    w.start_element("entity")?;
                    w.text_element_with_attrs(
                        "identifier",
                        &self.identifier,
                        &[("scheme", self.identifier_scheme.as_str())],
                    )?;
                    w.end_element("entity")?;
                    w.start_element("period")?;
                    w.text_element("instant", &instant)?;
                    w.end_element("period")?;
                    let scenario = &context.scenario;
                    if !scenario.is_empty() {
                        w.start_element("scenario")?;
                        for (dimension, value) in &scenario.typed_members {
                            w.start_element_with_attrs("xbrldi:typedMember", &[("dimension", dimension.as_str())])?;
                            w.text_element("open:str", value)?;
                            w.end_element("xbrldi:typedMember")?;
                        }
                        for (dimension, member) in &scenario.explicit_members {
                            w.text_element_with_attrs(
                                "xbrldi:explicitMember",
                                member,
                                &[("dimension", dimension.as_str())],
                            )?;
                        }
                        w.end_element("scenario")?;
                    }
                    w.end_element("context")?;
                }
                Node::Fact(fact) => {
                    let mut attrs = vec![("contextRef", fact.context_ref.as_str())];
                    if let Some(decimals) = &fact.decimals {
                        attrs.push(("decimals", decimals.as_str()));
                    }
                    if let Some(unit) = &fact.unit_ref {
                        attrs.push(("unitRef", unit.as_str()));
                    }
                    w.text_element_with_attrs(&fact.qname, &fact.value, &attrs)?;
                }
                Node::Unit(unit) => {
                    w.start_element_with_attrs("unit", &[("id", unit.id.as_str())])?;
                    w.text_element("measure", &unit.measure)?;
                    w.end_element("unit")?;
                }
            }
        }

        w.end_element("xbrl")?;
        w.into_string()
    }
}

/// Assemble the instance from the catalogue, the report and evaluated KPIs.
///
/// Sections are appended in a fixed order: identifying data contexts then
/// values, party contexts (administrators, then accountants) then values,
/// rubric contexts then values, and finally the units. Facts of the same
/// identifying-data section, or of the same party, share contexts with equal
/// dimensions; every rubric fact gets its own context.
pub fn build_document(
    account: &AnnualAccount,
    catalogue: &Catalogue,
    balance_sheet: &KpiValues,
    profit_loss: &KpiValues,
    config: &XbrlConfig,
) -> Result<XbrlDocument, JaarrekeningError> {
    let schema_ref = account
        .schema_ref
        .clone()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| account.company_category.map(|category| config.schema_ref(category)))
        .ok_or_else(|| {
            JaarrekeningError::Validation(vec![ValidationError::with_rule(
                "schema_ref",
                "Schema cannot be empty",
                "ANN-02",
            )])
        })?;

    let resolver = FactResolver::new(catalogue);
    let mut builder = DocumentBuilder::new();

    // Identifying data: report metadata and company, one dedup scope.
    let mut identifying = resolver.resolve_all(REPORT_FIELDS, Source::Report(account))?;
    identifying.extend(resolver.resolve_all(COMPANY_FIELDS, Source::Company(&account.company))?);
    builder.begin_scope();
    let refs: Vec<String> = identifying
        .iter()
        .map(|fact| {
            builder.scoped_context(&fact.prototype.dimension_key(), || {
                Scenario::from_prototype(fact.prototype)
            })
        })
        .collect();
    for (fact, context_ref) in identifying.iter().zip(refs) {
        builder.add_fact(Fact::text(&fact.prototype.qname, context_ref, &fact.value));
    }

    // Parties: all contexts first, then all values.
    let parties = account
        .administrators
        .iter()
        .map(|p| (PartyRole::Administrator, p))
        .chain(account.accountants.iter().map(|p| (PartyRole::Accountant, p)));
    let mut party_facts = Vec::new();
    for (role, party) in parties {
        let facts = resolver.resolve_all(party_fields(role, party.kind), Source::Party(party))?;
        let refs = write_party_contexts(&mut builder, catalogue, role, party, &facts);
        party_facts.push((facts, refs));
    }
    for (facts, refs) in &party_facts {
        for (fact, context_ref) in facts.iter().zip(refs) {
            builder.add_fact(Fact::text(&fact.prototype.qname, context_ref, &fact.value));
        }
    }

    // Rubrics: one fresh context per reported amount.
    let mut rubrics = Vec::new();
    for rubric in reportable_rubrics([balance_sheet, profit_loss]) {
        match catalogue.rubric_prototype(&rubric.code) {
            Some(prototype) => rubrics.push((prototype, rubric.amount)),
            None => warn!(rubric = %rubric.code, "KPI rubric has no current-year fact in the taxonomy"),
        }
    }
    let refs: Vec<String> = rubrics
        .iter()
        .map(|(prototype, _)| builder.add_context(Scenario::from_prototype(prototype)))
        .collect();
    for ((prototype, amount), context_ref) in rubrics.iter().zip(refs) {
        let rounded = round_monetary(*amount, &account.company.currency_code, config.monetary_decimals);
        builder.add_fact(Fact::monetary(
            &prototype.qname,
            context_ref,
            format_amount(rounded, config.monetary_decimals),
            &config.monetary_unit,
        ));
    }

    builder.add_unit(&config.monetary_unit, format!("iso4217:{}", config.monetary_unit));
    builder.add_unit("pure", "pure");

    let nodes = builder.into_nodes();
    let namespaces = collect_namespaces(&nodes, catalogue, config)?;

    Ok(XbrlDocument {
        schema_ref,
        identifier_scheme: config.identifier_scheme.clone(),
        identifier: account.company.registry.clone(),
        instant: account.date_to,
        namespaces,
        nodes,
    })
}

/// Contexts of one party, in row-template order, deduplicated within the party.
/// Returns the context id of each fact.
fn write_party_contexts(
    builder: &mut DocumentBuilder,
    catalogue: &Catalogue,
    role: PartyRole,
    party: &Party,
    facts: &[ResolvedFact<'_>],
) -> Vec<String> {
    let open_dimensions = party_open_dimensions(role, party.kind);
    // Unnamed members are left out rather than written as empty values.
    let typed_members: Vec<(String, String)> = match open_dimensions {
        [single] => vec![(*single, Some(&party.name))],
        [first, last] => vec![(*first, party.first_name.as_ref()), (*last, party.last_name.as_ref())],
        _ => Vec::new(),
    }
    .into_iter()
    .filter_map(|(dimension, name)| {
        name.filter(|n| !n.trim().is_empty())
            .map(|n| (dimension.to_string(), n.clone()))
    })
    .collect();

    let mut order: Vec<usize> = Vec::with_capacity(facts.len());
    let template = catalogue.row_template(open_dimensions);
    match template {
        Some(template) => {
            for id in &template.fact_ids {
                if let Some(i) = facts.iter().position(|f| &f.prototype.id == id) {
                    order.push(i);
                }
            }
        }
        None => warn!(
            role = role.label(),
            party = %party.name,
            "no row template in the taxonomy, using mapping order"
        ),
    }
    for i in 0..facts.len() {
        if !order.contains(&i) {
            if template.is_some() {
                warn!(fact_id = %facts[i].prototype.id, "party fact is missing from its row template");
            }
            order.push(i);
        }
    }

    builder.begin_scope();
    let mut refs = vec![String::new(); facts.len()];
    for i in order {
        let prototype = facts[i].prototype;
        refs[i] = builder.scoped_context(&prototype.dimension_key(), || {
            Scenario::from_prototype(prototype).with_typed_members(typed_members.clone())
        });
    }
    refs
}

/// Assemble and serialize the instance from already evaluated KPIs.
pub fn to_xbrl_xml(
    account: &AnnualAccount,
    catalogue: &Catalogue,
    balance_sheet: &KpiValues,
    profit_loss: &KpiValues,
    config: &XbrlConfig,
) -> Result<String, JaarrekeningError> {
    let document = build_document(account, catalogue, balance_sheet, profit_loss, config)?;
    let xml = document.to_xml()?;
    info!(
        report = %account.report_name,
        contexts = document.contexts().count(),
        facts = document.facts().count(),
        "XBRL instance generated"
    );
    Ok(xml)
}

/// Validate the report, load the taxonomy from the balance-sheet template,
/// evaluate both templates over the period and generate the instance.
///
/// Party rules always apply; the full rule set applies to confirmed and
/// published reports.
pub fn generate_xbrl(
    account: &AnnualAccount,
    evaluator: &impl KpiEvaluator,
    config: &XbrlConfig,
    today: NaiveDate,
) -> Result<String, JaarrekeningError> {
    let errors = if account.state == ReportState::Draft {
        validate_parties(account)
    } else {
        validate_annual_account(account, today)
    };
    JaarrekeningError::check(errors)?;

    let Some(balance_sheet) = account.balance_sheet.as_ref() else {
        return Err(JaarrekeningError::Validation(vec![ValidationError::with_rule(
            "balance_sheet",
            "Balance Sheet cannot be empty",
            "ANN-06",
        )]));
    };
    let data_file = balance_sheet
        .data_file
        .as_deref()
        .filter(|f| !f.trim().is_empty())
        .ok_or_else(|| {
            JaarrekeningError::Validation(vec![ValidationError::with_rule(
                "balance_sheet.data_file",
                "JSON Data file cannot be empty, edit the balance sheet to add one",
                "ANN-06",
            )])
        })?;
    let catalogue = Catalogue::from_json(data_file)?;

    let bs_values = evaluator.evaluate(balance_sheet, account.date_from, account.date_to)?;
    let pl_values = match &account.profit_loss {
        Some(template) => evaluator.evaluate(template, account.date_from, account.date_to)?,
        None => Vec::new(),
    };

    to_xbrl_xml(account, &catalogue, &bs_values, &pl_values, config)
}
