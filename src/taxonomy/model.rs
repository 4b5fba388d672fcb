//! Serde model of the NBB taxonomy description (JSON data file).
//!
//! Only the parts the generator reads are modelled; unknown keys are ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level document: `{"internalModels": [...]}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyDocument {
    pub internal_models: Option<Vec<InternalModel>>,
}

/// One internal model of the taxonomy.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalModel {
    pub fact_prototypes: Option<Vec<FactPrototype>>,
    pub namespaces_by_prefix: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub editor_model: EditorModel,
}

/// Reportable concept: element name plus the dimensions of its context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactPrototype {
    /// Unique key, e.g. `met:str2#dim:bas=bas:m29#dim:part=part:m2#dim:psn=psn:m1`.
    pub id: String,
    /// Prefixed element name, e.g. `met:str2` or `pcd-enum:list1`.
    #[serde(default)]
    pub qname: String,
    /// Statement line code (`20/28`) for rubric facts.
    #[serde(rename = "rubCode", default, skip_serializing_if = "Option::is_none")]
    pub rubric_code: Option<String>,
    /// `N` for the current financial year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(rename = "dims", default)]
    pub dimensions: Vec<Dimension>,
    /// Typed dimensions whose value is supplied at generation time.
    #[serde(rename = "openDimQNames", default, skip_serializing_if = "Vec::is_empty")]
    pub open_dimensions: Vec<String>,
}

impl FactPrototype {
    /// Namespace prefix of the element name (`met` for `met:str2`).
    pub fn prefix(&self) -> Option<&str> {
        self.qname.split_once(':').map(|(prefix, _)| prefix)
    }

    /// Deduplication key of the context: `dim=member#` for every dimension
    /// with a fixed member, in catalogue order.
    pub fn dimension_key(&self) -> String {
        self.dimensions
            .iter()
            .filter_map(|d| {
                d.member
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .map(|m| format!("{}={}#", d.dimension, m))
            })
            .collect()
    }

    /// Whether this is the current-year prototype of a statement line.
    pub fn is_current_rubric(&self) -> bool {
        self.rubric_code.as_deref().is_some_and(|c| !c.is_empty())
            && self.period.as_deref() == Some("N")
    }
}

/// A dimension of a fact prototype; typed dimensions have no member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    #[serde(rename = "dimQname")]
    pub dimension: String,
    #[serde(rename = "memberQname", default, skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,
}

/// Editor layout: nested sections and tables, plus enumerated code lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorModel {
    #[serde(default)]
    pub sections_or_tables: Vec<SectionOrTable>,
    #[serde(default)]
    pub code_lists_map: BTreeMap<String, Vec<CodeListEntry>>,
}

/// Either a nested section or a table; both keys are optional in the file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionOrTable {
    #[serde(default)]
    pub section: Option<Section>,
    #[serde(default)]
    pub table: Option<Table>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default)]
    pub sections_or_tables: Vec<SectionOrTable>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub cols: Vec<Col>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Col {
    #[serde(default)]
    pub fp: Option<FactRef>,
}

/// Reference from a table cell to a fact prototype.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FactRef {
    pub id: String,
    #[serde(rename = "openDimQNames", default)]
    pub open_dimensions: Vec<String>,
}

/// Member of an enumerated code list, e.g. `{"code": "pcd:m1000"}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodeListEntry {
    #[serde(default)]
    pub code: Option<String>,
}

impl SectionOrTable {
    /// Visit every table below this node, depth first.
    pub fn for_each_table<'a>(&'a self, f: &mut impl FnMut(&'a Table)) {
        if let Some(table) = &self.table {
            f(table);
        }
        if let Some(section) = &self.section {
            for child in &section.sections_or_tables {
                child.for_each_table(f);
            }
        }
    }
}
