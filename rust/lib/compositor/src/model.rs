//! Item model descriptor types, serialized in the resource-pack format:
//!
//! ```json
//! {
//!   "model": {
//!     "type": "select",
//!     "property": "custom_model_data",
//!     "cases": [{ "when": "captcha:blank", "model": { "type": "model", "model": "..." } }],
//!     "fallback": { "type": "model", "model": "minecraft:item/book" }
//!   }
//! }
//! ```

use serde::Serialize;

/// The per-instance property the selector branches on.
pub const SELECT_PROPERTY: &str = "custom_model_data";

/// A model descriptor: a single model, or layers drawn in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemModel {
    Model { model: String },
    Composite { models: Vec<ItemModel> },
}

impl ItemModel {
    pub fn model(reference: impl Into<String>) -> Self {
        ItemModel::Model {
            model: reference.into(),
        }
    }

    /// A two-layer composite: `frame` is drawn first, `content` over it.
    pub fn layered(frame: impl Into<String>, content: impl Into<String>) -> Self {
        ItemModel::Composite {
            models: vec![Self::model(frame), Self::model(content)],
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, ItemModel::Composite { .. })
    }
}

/// One `when` branch of the selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchCase {
    pub when: String,
    pub model: ItemModel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "select")]
pub struct Selector {
    pub property: String,
    pub cases: Vec<DispatchCase>,
    pub fallback: ItemModel,
}

/// Top-level document written to `assets/minecraft/<kind>s/<material>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorDocument {
    pub model: Selector,
}

impl SelectorDocument {
    pub fn cases(&self) -> &[DispatchCase] {
        &self.model.cases
    }

    pub fn fallback(&self) -> &ItemModel {
        &self.model.fallback
    }
}
