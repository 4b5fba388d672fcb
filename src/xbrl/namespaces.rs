use std::collections::BTreeMap;

use tracing::warn;

use super::context::Node;
use super::ns;
use crate::core::{JaarrekeningError, XbrlConfig};
use crate::taxonomy::Catalogue;

/// Prefixes the instance declares itself; taxonomy entries never override them.
const RESERVED_PREFIXES: &[&str] = &["xbrldi", "link", "xlink", "iso4217", "open", "xml", "xmlns"];

/// Prefixed namespace declarations of an instance, sorted by prefix after the
/// fixed XBRL ones. The default namespace is always the XBRL instance.
pub fn collect_namespaces(
    nodes: &[Node],
    catalogue: &Catalogue,
    config: &XbrlConfig,
) -> Result<Vec<(String, String)>, JaarrekeningError> {
    let mut declarations: Vec<(String, String)> = vec![
        ("xbrldi".into(), ns::XBRLDI.into()),
        ("link".into(), ns::LINK.into()),
        ("xlink".into(), ns::XLINK.into()),
        ("iso4217".into(), ns::ISO4217.into()),
    ];
    let mut used: BTreeMap<&str, &str> = BTreeMap::new();
    let mut typed = false;

    for node in nodes {
        match node {
            Node::Fact(fact) => {
                let prefix = fact.qname.split_once(':').map(|(p, _)| p).ok_or_else(|| {
                    JaarrekeningError::MalformedTaxonomy(format!(
                        "fact element '{}' has no namespace prefix",
                        fact.qname
                    ))
                })?;
                let (p, uri) = catalogue.namespaces().get_key_value(prefix).ok_or_else(|| {
                    JaarrekeningError::MalformedTaxonomy(format!(
                        "no namespace declared for prefix '{prefix}' of fact '{}'",
                        fact.qname
                    ))
                })?;
                used.insert(p.as_str(), uri.as_str());
                let base = prefix.split_once('-').map(|(base, _)| base);
                if let Some((p, uri)) = base.and_then(|b| catalogue.namespaces().get_key_value(b)) {
                    used.insert(p.as_str(), uri.as_str());
                }
            }
            Node::Context(context) => {
                let scenario = &context.scenario;
                typed |= !scenario.typed_members.is_empty();
                for (dimension, _) in &scenario.typed_members {
                    if let Some((prefix, _)) = dimension.split_once(':') {
                        insert_declared(catalogue, prefix, &mut used);
                    }
                }
                for (dimension, member) in &scenario.explicit_members {
                    for qname in [dimension, member] {
                        if let Some((prefix, _)) = qname.split_once(':') {
                            insert_declared(catalogue, prefix, &mut used);
                        }
                    }
                }
            }
            Node::Unit(_) => {}
        }
    }

    if typed {
        declarations.push(("open".into(), config.open_namespace.clone()));
    }
    declarations.extend(
        used.into_iter()
            .filter(|(prefix, _)| !RESERVED_PREFIXES.contains(prefix))
            .map(|(prefix, uri)| (prefix.to_string(), uri.to_string())),
    );
    Ok(declarations)
}

fn insert_declared<'c>(catalogue: &'c Catalogue, prefix: &str, used: &mut BTreeMap<&'c str, &'c str>) {
    if RESERVED_PREFIXES.contains(&prefix) {
        return;
    }
    match catalogue.namespaces().get_key_value(prefix) {
        Some((p, uri)) => {
            used.insert(p.as_str(), uri.as_str());
        }
        None => warn!(prefix, "dimension prefix has no namespace in the taxonomy"),
    }
}
