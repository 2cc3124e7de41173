//! Captcha compositor.
//!
//! Compiles the item model that lets a single carrier item (a book by
//! default) look like any catalogued block or item, chosen per instance by
//! its `custom_model_data` string:
//!
//! ```text
//! Catalog ──► CatalogSnapshot ──► classify ──► DocumentBuilder ──► write_document
//! ```

pub mod builder;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod error;
pub mod key;
pub mod model;
pub mod writer;

use std::path::{Path, PathBuf};

use tracing::info;

pub use builder::{build_document, DocumentBuilder, PRESETS};
pub use catalog::{Catalog, CatalogSnapshot, RegistryReport, StaticCatalog};
pub use classify::{classify, Kind};
pub use config::{Carrier, CompositorConfig};
pub use error::CompositorError;
pub use key::TypeKey;
pub use model::{DispatchCase, ItemModel, SelectorDocument};
pub use writer::{output_path, write_document};

/// Outcome of compiling one carrier to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileReport {
    pub path: PathBuf,
    pub cases: usize,
    pub blocks: usize,
    pub items: usize,
}

/// Runs the full pipeline for one or more carriers.
#[derive(Debug, Clone, Default)]
pub struct Compositor {
    builder: DocumentBuilder,
    pretty: bool,
}

impl Compositor {
    pub fn new(namespace: impl Into<String>, pretty: bool) -> Self {
        Self {
            builder: DocumentBuilder::new(namespace),
            pretty,
        }
    }

    pub fn from_config(config: &CompositorConfig) -> Self {
        Self::new(config.namespace.clone(), config.pretty)
    }

    /// Read the catalog fresh and build the document for `carrier`.
    pub fn compile(&self, catalog: &dyn Catalog, carrier: &Carrier) -> SelectorDocument {
        let snapshot = CatalogSnapshot::read(catalog);
        self.builder
            .build(snapshot.classified(), &carrier.kind, &carrier.material)
    }

    /// Compile and write the document under `root`.
    pub fn compile_to(
        &self,
        catalog: &dyn Catalog,
        carrier: &Carrier,
        root: &Path,
    ) -> Result<CompileReport, CompositorError> {
        let snapshot = CatalogSnapshot::read(catalog);
        let blocks = snapshot
            .classified()
            .filter(|(_, kind)| *kind == Kind::Block)
            .count();
        let items = snapshot.items.len() - blocks;

        let doc = self
            .builder
            .build(snapshot.classified(), &carrier.kind, &carrier.material);
        let path = write_document(&doc, root, &carrier.kind, &carrier.material, self.pretty)?;

        info!(
            "compiled {}/{}: {} cases ({} block, {} item) -> {}",
            carrier.kind,
            carrier.material,
            doc.cases().len(),
            blocks,
            items,
            path.display()
        );

        Ok(CompileReport {
            path,
            cases: doc.cases().len(),
            blocks,
            items,
        })
    }
}
