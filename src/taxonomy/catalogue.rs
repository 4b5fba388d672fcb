use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::debug;

use super::model::{FactPrototype, TaxonomyDocument};
use crate::core::JaarrekeningError;

/// Code list holding the Belgian postal codes.
pub const POSTAL_CODE_LIST: &str = "pcd-enum:list1";

/// Fact ids of one editor table, with the typed dimensions its cells carry.
///
/// Party tables are told apart by these dimensions (`dim:anlp` for a company
/// administrator, `dim:afnp` + `dim:annp` for a natural person, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTemplate {
    /// Fact ids in row then column order, without duplicates.
    pub fact_ids: Vec<String>,
    /// Typed dimensions in first-seen order, without duplicates.
    pub open_dimensions: Vec<String>,
}

/// Indexed, read-only view of a taxonomy description.
///
/// The catalogue does not change between generations and can be shared
/// (e.g. behind an `Arc`) by concurrent runs.
#[derive(Debug, Clone)]
pub struct Catalogue {
    prototypes: Vec<FactPrototype>,
    by_id: HashMap<String, usize>,
    rubrics: HashMap<String, usize>,
    namespaces: BTreeMap<String, String>,
    postal_codes: HashSet<String>,
    row_templates: Vec<RowTemplate>,
}

impl Catalogue {
    /// Parse a taxonomy JSON document.
    pub fn from_json(json: &str) -> Result<Self, JaarrekeningError> {
        let document: TaxonomyDocument = serde_json::from_str(json)
            .map_err(|e| JaarrekeningError::MalformedTaxonomy(format!("invalid JSON: {e}")))?;
        Self::from_document(document)
    }

    /// Index an already parsed document. Only the first internal model is used.
    pub fn from_document(document: TaxonomyDocument) -> Result<Self, JaarrekeningError> {
        let model = document
            .internal_models
            .and_then(|models| models.into_iter().next())
            .ok_or_else(|| missing("internalModels"))?;
        let prototypes = model
            .fact_prototypes
            .ok_or_else(|| missing("internalModels[0].factPrototypes"))?;
        let namespaces = model
            .namespaces_by_prefix
            .ok_or_else(|| missing("internalModels[0].namespacesByPrefix"))?;

        let mut by_id = HashMap::with_capacity(prototypes.len());
        let mut rubrics = HashMap::new();
        for (i, fp) in prototypes.iter().enumerate() {
            by_id.entry(fp.id.clone()).or_insert(i);
            if let Some(code) = fp.rubric_code.as_ref().filter(|_| fp.is_current_rubric()) {
                rubrics.entry(code.clone()).or_insert(i);
            }
        }

        let postal_codes: HashSet<String> = model
            .editor_model
            .code_lists_map
            .get(POSTAL_CODE_LIST)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|e| e.code.clone())
                    .filter(|code| !code.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let mut row_templates: Vec<RowTemplate> = Vec::new();
        for node in &model.editor_model.sections_or_tables {
            node.for_each_table(&mut |table| {
                let mut template = RowTemplate {
                    fact_ids: Vec::new(),
                    open_dimensions: Vec::new(),
                };
                for fp in table.rows.iter().flat_map(|r| &r.cols).filter_map(|c| c.fp.as_ref()) {
                    push_unique(&mut template.fact_ids, &fp.id);
                    for dim in &fp.open_dimensions {
                        push_unique(&mut template.open_dimensions, dim);
                    }
                }
                if template.open_dimensions.is_empty() {
                    return;
                }
                match row_templates
                    .iter_mut()
                    .find(|t| t.open_dimensions == template.open_dimensions)
                {
                    Some(existing) => {
                        for id in &template.fact_ids {
                            push_unique(&mut existing.fact_ids, id);
                        }
                    }
                    None => row_templates.push(template),
                }
            });
        }

        debug!(
            prototypes = prototypes.len(),
            rubrics = rubrics.len(),
            namespaces = namespaces.len(),
            postal_codes = postal_codes.len(),
            row_templates = row_templates.len(),
            "taxonomy catalogue loaded"
        );

        Ok(Self {
            prototypes,
            by_id,
            rubrics,
            namespaces,
            postal_codes,
            row_templates,
        })
    }

    /// All fact prototypes in catalogue order.
    pub fn prototypes(&self) -> &[FactPrototype] {
        &self.prototypes
    }

    /// Fact prototype by id.
    pub fn prototype(&self, id: &str) -> Option<&FactPrototype> {
        self.by_id.get(id).map(|&i| &self.prototypes[i])
    }

    /// First current-year (`period = "N"`) prototype of a statement line.
    pub fn rubric_prototype(&self, rubric_code: &str) -> Option<&FactPrototype> {
        self.rubrics.get(rubric_code).map(|&i| &self.prototypes[i])
    }

    pub fn has_rubric(&self, rubric_code: &str) -> bool {
        self.rubrics.contains_key(rubric_code)
    }

    /// Namespace URI declared for a prefix.
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.namespaces.get(prefix).map(String::as_str)
    }

    pub fn namespaces(&self) -> &BTreeMap<String, String> {
        &self.namespaces
    }

    /// Enumeration member of a postal code (`1000` → `pcd:m1000`), when listed.
    pub fn postal_code_member(&self, postal_code: &str) -> Option<String> {
        let postal_code = postal_code.trim();
        if postal_code.is_empty() {
            return None;
        }
        let member = format!("pcd:m{postal_code}");
        self.postal_codes.contains(&member).then_some(member)
    }

    /// Editor table whose cells carry exactly these typed dimensions.
    pub fn row_template(&self, open_dimensions: &[&str]) -> Option<&RowTemplate> {
        self.row_templates
            .iter()
            .find(|t| t.open_dimensions.iter().map(String::as_str).eq(open_dimensions.iter().copied()))
    }

    pub fn row_templates(&self) -> &[RowTemplate] {
        &self.row_templates
    }
}

fn missing(path: &str) -> JaarrekeningError {
    JaarrekeningError::MalformedTaxonomy(format!("missing required key '{path}'"))
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}
