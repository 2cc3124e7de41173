//! `compositor generate`

use std::path::PathBuf;

use anyhow::Result;
use captcha_compositor::{Carrier, Compositor, CompositorConfig};
use clap::Args;

/// Flags that override the config file.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Registry report (reports/registries.json).
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Pack output directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Carrier kind; replaces configured carriers when given.
    #[arg(long, requires = "material")]
    pub kind: Option<String>,
    /// Carrier material.
    #[arg(long, requires = "kind")]
    pub material: Option<String>,
    /// Tag and model namespace.
    #[arg(long)]
    pub namespace: Option<String>,
    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

impl GenerateArgs {
    /// Merge the flags into `config` and validate the result.
    pub fn apply(self, config: &mut CompositorConfig) -> Result<()> {
        if let Some(catalog) = self.catalog {
            config.catalog = Some(catalog);
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let (Some(kind), Some(material)) = (self.kind, self.material) {
            config.carriers = vec![Carrier::new(kind, material)];
        }
        if let Some(namespace) = self.namespace {
            config.namespace = namespace;
        }
        // A config-file `pretty = true` is not turned off by a missing flag.
        config.pretty |= self.pretty;
        config.validate()?;
        Ok(())
    }
}

pub fn run(config: &CompositorConfig) -> Result<()> {
    let report = super::load_report(config)?;
    let compositor = Compositor::from_config(config);

    // Carriers are independent; each write targets its own path.
    for carrier in &config.carriers {
        let result = compositor.compile_to(&report, carrier, &config.output_dir)?;
        println!("{} ({} cases)", result.path.display(), result.cases);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_carriers() -> CompositorConfig {
        let mut config = CompositorConfig::default();
        config.carriers.push(Carrier::new("item", "paper"));
        config
    }

    #[test]
    fn no_flags_keep_config() {
        let mut config = two_carriers();
        config.pretty = true;
        GenerateArgs::default().apply(&mut config).unwrap();

        assert_eq!(config.carriers.len(), 2);
        assert!(config.pretty);
        assert_eq!(config.namespace, "captcha");
        assert_eq!(config.catalog, None);
    }

    #[test]
    fn kind_and_material_replace_carriers() {
        let mut config = two_carriers();
        let args = GenerateArgs {
            kind: Some("block".to_string()),
            material: Some("chest".to_string()),
            ..Default::default()
        };
        args.apply(&mut config).unwrap();

        assert_eq!(config.carriers, vec![Carrier::new("block", "chest")]);
    }

    #[test]
    fn paths_namespace_and_pretty_override() {
        let mut config = CompositorConfig::default();
        let args = GenerateArgs {
            catalog: Some(PathBuf::from("reports/registries.json")),
            output: Some(PathBuf::from("out")),
            namespace: Some("cards".to_string()),
            pretty: true,
            ..Default::default()
        };
        args.apply(&mut config).unwrap();

        assert_eq!(config.catalog, Some(PathBuf::from("reports/registries.json")));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.namespace, "cards");
        assert!(config.pretty);
    }

    #[test]
    fn invalid_namespace_flag_is_rejected() {
        let mut config = CompositorConfig::default();
        let args = GenerateArgs {
            namespace: Some("Bad:Ns".to_string()),
            ..Default::default()
        };
        assert!(args.apply(&mut config).is_err());
    }
}
