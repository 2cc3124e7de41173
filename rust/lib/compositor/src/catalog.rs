//! Catalog reader.
//!
//! A [`Catalog`] exposes the block and item identifiers known to the game.
//! Two sources are provided:
//!
//! ```text
//! StaticCatalog   in-memory lists, used by tests and embedders
//! RegistryReport  reports/registries.json from the data generator
//! ```
//!
//! The report is a JSON object keyed by registry name. Each registry holds an
//! `entries` map from identifier to `{ "protocol_id": n }`; ascending protocol
//! id is the registry's native enumeration order.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::classify::{classify, Kind};
use crate::error::CompositorError;
use crate::key::TypeKey;

pub const BLOCK_REGISTRY: &str = "minecraft:block";
pub const ITEM_REGISTRY: &str = "minecraft:item";

/// Source of known content identifiers.
pub trait Catalog {
    /// All block identifiers, in enumeration order.
    fn blocks(&self) -> &[TypeKey];

    /// All item identifiers, in enumeration order.
    fn items(&self) -> &[TypeKey];
}

/// Catalog backed by two in-memory lists.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    blocks: Vec<TypeKey>,
    items: Vec<TypeKey>,
}

impl StaticCatalog {
    pub fn new(blocks: Vec<TypeKey>, items: Vec<TypeKey>) -> Self {
        Self { blocks, items }
    }
}

impl Catalog for StaticCatalog {
    fn blocks(&self) -> &[TypeKey] {
        &self.blocks
    }

    fn items(&self) -> &[TypeKey] {
        &self.items
    }
}

/// Catalog loaded from a data-generator registry report.
#[derive(Debug, Clone)]
pub struct RegistryReport {
    blocks: Vec<TypeKey>,
    items: Vec<TypeKey>,
}

impl RegistryReport {
    /// Read and parse a report file.
    pub fn load(path: &Path) -> Result<Self, CompositorError> {
        let content = fs::read_to_string(path).map_err(|e| CompositorError::io(path, e))?;
        debug!("RegistryReport: read {} bytes from {:?}", content.len(), path);
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, CompositorError> {
        let root: Value = serde_json::from_str(content)
            .map_err(|e| CompositorError::Catalog(format!("report is not valid JSON: {}", e)))?;
        let registries = root
            .as_object()
            .ok_or_else(|| CompositorError::Catalog("report root is not an object".to_string()))?;

        Ok(Self {
            blocks: read_registry(registries, BLOCK_REGISTRY)?,
            items: read_registry(registries, ITEM_REGISTRY)?,
        })
    }
}

impl Catalog for RegistryReport {
    fn blocks(&self) -> &[TypeKey] {
        &self.blocks
    }

    fn items(&self) -> &[TypeKey] {
        &self.items
    }
}

fn read_registry(registries: &Map<String, Value>, name: &str) -> Result<Vec<TypeKey>, CompositorError> {
    let entries = registries
        .get(name)
        .and_then(|r| r.get("entries"))
        .and_then(Value::as_object)
        .ok_or_else(|| CompositorError::Catalog(format!("registry {} missing or has no entries", name)))?;

    let mut accepted: Vec<(u64, TypeKey)> = entries
        .iter()
        .filter_map(|(entry, value)| {
            let found = accept_entry(entry, value);
            if found.is_none() {
                debug!("RegistryReport: skipping {:?} in {}", entry, name);
            }
            found
        })
        .collect();

    // Stable sort over a key-ordered map: entries sharing an id stay in
    // identifier order.
    accepted.sort_by_key(|(id, _)| *id);

    debug!("RegistryReport: {} entries in {}", accepted.len(), name);
    Ok(accepted.into_iter().map(|(_, key)| key).collect())
}

/// Shape filter for registry entries.
///
/// Returns the entry's protocol id and key when `value` is an object with a
/// non-negative integer `protocol_id` and `name` is a well-formed identifier.
/// Anything else is not an identifier constant and yields `None`.
pub fn accept_entry(name: &str, value: &Value) -> Option<(u64, TypeKey)> {
    let id = value.as_object()?.get("protocol_id")?.as_u64()?;
    let key = TypeKey::parse(name).ok()?;
    Some((id, key))
}

/// One fresh read of a catalog: the block lookup set and ordered items.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub blocks: HashSet<String>,
    pub items: Vec<TypeKey>,
}

impl CatalogSnapshot {
    pub fn read(catalog: &dyn Catalog) -> Self {
        Self {
            blocks: catalog.blocks().iter().map(TypeKey::as_string).collect(),
            items: catalog.items().to_vec(),
        }
    }

    /// Items paired with their kind, in catalog order.
    pub fn classified(&self) -> impl Iterator<Item = (&TypeKey, Kind)> + '_ {
        self.items.iter().map(move |item| (item, classify(item, &self.blocks)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(s: &str) -> TypeKey {
        TypeKey::parse(s).unwrap()
    }

    #[test]
    fn accept_entry_requires_identifier_shape() {
        assert!(accept_entry("minecraft:stone", &json!({"protocol_id": 1})).is_some());
        assert!(accept_entry("minecraft:stone", &json!(1)).is_none());
        assert!(accept_entry("minecraft:stone", &json!({})).is_none());
        assert!(accept_entry("minecraft:stone", &json!({"protocol_id": "1"})).is_none());
        assert!(accept_entry("minecraft:stone", &json!({"protocol_id": -1})).is_none());
        assert!(accept_entry("NOT A KEY", &json!({"protocol_id": 1})).is_none());
    }

    #[test]
    fn report_skips_ill_shaped_entries() {
        let report = RegistryReport::from_json(
            r#"{
                "minecraft:block": {"entries": {
                    "minecraft:stone": {"protocol_id": 1},
                    "comment": "not an entry",
                    "minecraft:dirt": {"protocol_id": 2}
                }},
                "minecraft:item": {"entries": {
                    "minecraft:stone": {"protocol_id": 1},
                    "minecraft:stick": {"protocol_id": 0},
                    "minecraft:broken": {"id": 3},
                    "Bad Key": {"protocol_id": 4}
                }}
            }"#,
        )
        .unwrap();

        assert_eq!(report.blocks(), &[key("minecraft:stone"), key("minecraft:dirt")]);
        assert_eq!(report.items(), &[key("minecraft:stick"), key("minecraft:stone")]);
    }

    #[test]
    fn report_orders_by_protocol_id() {
        let report = RegistryReport::from_json(
            r#"{
                "minecraft:block": {"entries": {}},
                "minecraft:item": {"entries": {
                    "minecraft:apple": {"protocol_id": 2},
                    "minecraft:zebra_spawn_egg": {"protocol_id": 0},
                    "minecraft:bow": {"protocol_id": 1}
                }}
            }"#,
        )
        .unwrap();

        let items: Vec<String> = report.items().iter().map(TypeKey::as_string).collect();
        assert_eq!(items, vec!["minecraft:zebra_spawn_egg", "minecraft:bow", "minecraft:apple"]);
        assert!(report.blocks().is_empty());
    }

    #[test]
    fn shared_protocol_id_falls_back_to_identifier_order() {
        let report = RegistryReport::from_json(
            r#"{
                "minecraft:block": {"entries": {}},
                "minecraft:item": {"entries": {
                    "modx:zeta": {"protocol_id": 0},
                    "modx:alpha": {"protocol_id": 0},
                    "minecraft:first": {"protocol_id": 0}
                }}
            }"#,
        )
        .unwrap();

        let items: Vec<String> = report.items().iter().map(TypeKey::as_string).collect();
        assert_eq!(items, vec!["minecraft:first", "modx:alpha", "modx:zeta"]);
    }

    #[test]
    fn report_missing_registry_is_error() {
        let err = RegistryReport::from_json(r#"{"minecraft:block": {"entries": {}}}"#).unwrap_err();
        assert!(matches!(err, CompositorError::Catalog(_)));

        let err = RegistryReport::from_json("[]").unwrap_err();
        assert!(matches!(err, CompositorError::Catalog(_)));

        let err = RegistryReport::from_json("{").unwrap_err();
        assert!(matches!(err, CompositorError::Catalog(_)));
    }

    #[test]
    fn snapshot_classifies_in_item_order() {
        let catalog = StaticCatalog::new(
            vec![key("minecraft:stone")],
            vec![key("minecraft:stick"), key("minecraft:stone")],
        );
        let snapshot = CatalogSnapshot::read(&catalog);
        let kinds: Vec<(String, Kind)> = snapshot
            .classified()
            .map(|(k, kind)| (k.as_string(), kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("minecraft:stick".to_string(), Kind::Item),
                ("minecraft:stone".to_string(), Kind::Block),
            ]
        );
    }
}
