//! Contexts, facts and the builder owning the growing document.

use std::collections::HashMap;

use tracing::debug;

use crate::taxonomy::FactPrototype;

/// Dimensional scenario of a context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scenario {
    /// Typed members `(dimension, value)`, written first.
    pub typed_members: Vec<(String, String)>,
    /// Explicit members `(dimension, member)`, in catalogue order.
    pub explicit_members: Vec<(String, String)>,
}

impl Scenario {
    /// Explicit members of every dimension of `prototype` with a fixed member.
    pub fn from_prototype(prototype: &FactPrototype) -> Self {
        Self {
            typed_members: Vec::new(),
            explicit_members: prototype
                .dimensions
                .iter()
                .filter_map(|d| {
                    d.member
                        .as_ref()
                        .filter(|m| !m.is_empty())
                        .map(|m| (d.dimension.clone(), m.clone()))
                })
                .collect(),
        }
    }

    pub fn with_typed_members(mut self, members: Vec<(String, String)>) -> Self {
        self.typed_members = members;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.typed_members.is_empty() && self.explicit_members.is_empty()
    }
}

/// An XBRL context. Entity and instant are shared by the whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// `c1`, `c2`, ...
    pub id: String,
    pub scenario: Scenario,
}

/// A reported value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    /// Prefixed element name.
    pub qname: String,
    pub context_ref: String,
    pub value: String,
    /// Unit id of monetary facts.
    pub unit_ref: Option<String>,
    /// Precision of monetary facts (`INF`).
    pub decimals: Option<String>,
}

impl Fact {
    pub fn text(qname: impl Into<String>, context_ref: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            qname: qname.into(),
            context_ref: context_ref.into(),
            value: value.into(),
            unit_ref: None,
            decimals: None,
        }
    }

    /// Monetary fact with infinite precision.
    pub fn monetary(
        qname: impl Into<String>,
        context_ref: impl Into<String>,
        value: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            unit_ref: Some(unit.into()),
            decimals: Some("INF".to_string()),
            ..Self::text(qname, context_ref, value)
        }
    }
}

/// A unit declaration, `<unit id><measure>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub id: String,
    pub measure: String,
}

/// Top-level item of the instance, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Context(Context),
    Fact(Fact),
    Unit(Unit),
}

/// Owns the node sequence and the context counter of one generation.
///
/// Context ids are strictly increasing from `c1`. Contexts requested through
/// [`DocumentBuilder::scoped_context`] are shared within the current scope
/// when their dimension keys are equal; [`DocumentBuilder::add_context`]
/// always appends a new one.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    nodes: Vec<Node>,
    contexts: usize,
    scope: HashMap<String, String>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next appended context will get.
    pub fn next_context_id(&self) -> String {
        format!("c{}", self.contexts + 1)
    }

    /// Forget the contexts of the previous scope.
    pub fn begin_scope(&mut self) {
        self.scope.clear();
    }

    /// Append a new context and return its id.
    pub fn add_context(&mut self, scenario: Scenario) -> String {
        let id = self.next_context_id();
        self.contexts += 1;
        debug!(context = %id, "context added");
        self.nodes.push(Node::Context(Context {
            id: id.clone(),
            scenario,
        }));
        id
    }

    /// Context of `key` in the current scope, appended on first use.
    pub fn scoped_context(&mut self, key: &str, scenario: impl FnOnce() -> Scenario) -> String {
        if let Some(id) = self.scope.get(key) {
            debug!(context = %id, key, "context reused");
            return id.clone();
        }
        let id = self.add_context(scenario());
        self.scope.insert(key.to_string(), id.clone());
        id
    }

    pub fn add_fact(&mut self, fact: Fact) {
        debug!(qname = %fact.qname, context = %fact.context_ref, "fact added");
        self.nodes.push(Node::Fact(fact));
    }

    pub fn add_unit(&mut self, id: impl Into<String>, measure: impl Into<String>) {
        self.nodes.push(Node::Unit(Unit {
            id: id.into(),
            measure: measure.into(),
        }));
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(member: &str) -> Scenario {
        Scenario {
            typed_members: Vec::new(),
            explicit_members: vec![("dim:bas".into(), member.into())],
        }
    }

    #[test]
    fn ids_start_at_one() {
        let mut builder = DocumentBuilder::new();
        assert_eq!(builder.next_context_id(), "c1");
        assert_eq!(builder.add_context(scenario("bas:m1")), "c1");
        assert_eq!(builder.add_context(scenario("bas:m1")), "c2");
        assert_eq!(builder.next_context_id(), "c3");
    }

    #[test]
    fn scoped_contexts_are_shared_until_scope_ends() {
        let mut builder = DocumentBuilder::new();
        let a = builder.scoped_context("k1", || scenario("bas:m1"));
        let b = builder.scoped_context("k1", || scenario("bas:m1"));
        let c = builder.scoped_context("k2", || scenario("bas:m2"));
        assert_eq!((a.as_str(), b.as_str(), c.as_str()), ("c1", "c1", "c2"));

        builder.begin_scope();
        let d = builder.scoped_context("k1", || scenario("bas:m1"));
        assert_eq!(d, "c3");
        assert_eq!(builder.nodes().len(), 3);
    }

    #[test]
    fn facts_do_not_consume_ids() {
        let mut builder = DocumentBuilder::new();
        let id = builder.add_context(Scenario::default());
        builder.add_fact(Fact::text("met:str2", &id, "x"));
        builder.add_unit("pure", "pure");
        assert_eq!(builder.add_context(Scenario::default()), "c2");
    }

    #[test]
    fn monetary_fact_attributes() {
        let fact = Fact::monetary("met:am1", "c9", "15000.00", "EUR");
        assert_eq!(fact.unit_ref.as_deref(), Some("EUR"));
        assert_eq!(fact.decimals.as_deref(), Some("INF"));
    }
}
