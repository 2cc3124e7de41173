//! `compositor catalog`

use anyhow::Result;
use captcha_compositor::{Catalog, CatalogSnapshot, CompositorConfig, Kind};

pub fn run(config: &CompositorConfig) -> Result<()> {
    let report = super::load_report(config)?;
    let snapshot = CatalogSnapshot::read(&report);
    let as_block = snapshot
        .classified()
        .filter(|(_, kind)| *kind == Kind::Block)
        .count();

    println!("blocks:          {}", report.blocks().len());
    println!("items:           {}", report.items().len());
    println!("items as blocks: {}", as_block);
    println!("items as items:  {}", snapshot.items.len() - as_block);
    Ok(())
}
