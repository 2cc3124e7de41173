//! Document builder: presets, one composite per catalog item, and the
//! carrier's own model as fallback.

use crate::classify::Kind;
use crate::key::TypeKey;
use crate::model::{DispatchCase, ItemModel, Selector, SelectorDocument, SELECT_PROPERTY};

/// Namespace for tags and static models when none is configured.
pub const DEFAULT_NAMESPACE: &str = "captcha";

/// Namespace of the carrier's fallback model.
pub const VANILLA_NAMESPACE: &str = "minecraft";

/// A fixed case not derived from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub key: &'static str,
    pub item: &'static str,
}

/// Pre-baked textures, emitted before any catalog case in this order:
/// an empty card, a card of blanks, and a card holding an unrecognized item.
pub const PRESETS: [Preset; 3] = [
    Preset { key: "blank", item: "blank_captchacard" },
    Preset { key: "blanks", item: "filled_captchacard_blanks" },
    Preset { key: "unknown", item: "filled_captchacard_unknown" },
];

const FILLED_FRAME_PREFIX: &str = "filled_captchacard_";

#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    namespace: String,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl DocumentBuilder {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Assemble the selector document for one carrier.
    ///
    /// `items` is consumed in order; the resulting cases are the three
    /// presets followed by one case per item.
    pub fn build<'a, I>(&self, items: I, carrier_kind: &str, carrier_material: &str) -> SelectorDocument
    where
        I: IntoIterator<Item = (&'a TypeKey, Kind)>,
    {
        let items = items.into_iter();
        let mut cases = Vec::with_capacity(PRESETS.len() + items.size_hint().0);

        for preset in &PRESETS {
            cases.push(self.preset_case(preset));
        }
        for (key, kind) in items {
            cases.push(self.composite_case(key, kind));
        }

        SelectorDocument {
            model: Selector {
                property: SELECT_PROPERTY.to_string(),
                cases,
                fallback: fallback_model(carrier_kind, carrier_material),
            },
        }
    }

    fn preset_case(&self, preset: &Preset) -> DispatchCase {
        DispatchCase {
            when: format!("{}:{}", self.namespace, preset.key),
            model: ItemModel::model(format!("{}:item/{}", self.namespace, preset.item)),
        }
    }

    fn composite_case(&self, key: &TypeKey, kind: Kind) -> DispatchCase {
        let frame = format!("{}:item/{}{}", self.namespace, FILLED_FRAME_PREFIX, kind.word());
        let content = format!("{}:{}/{}", key.namespace(), kind.word(), key.value());
        DispatchCase {
            when: format!("{}:{}", self.namespace, key.as_string()),
            model: ItemModel::layered(frame, content),
        }
    }
}

/// The carrier's plain appearance, e.g. `minecraft:item/book`.
pub fn fallback_model(carrier_kind: &str, carrier_material: &str) -> ItemModel {
    ItemModel::model(format!("{}:{}/{}", VANILLA_NAMESPACE, carrier_kind, carrier_material))
}

/// Build with the default namespace.
pub fn build_document<'a, I>(items: I, carrier_kind: &str, carrier_material: &str) -> SelectorDocument
where
    I: IntoIterator<Item = (&'a TypeKey, Kind)>,
{
    DocumentBuilder::default().build(items, carrier_kind, carrier_material)
}
