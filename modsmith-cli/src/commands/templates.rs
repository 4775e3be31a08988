//! Required-template listing command
//!
//! The host-side check that every template the generator depends on is
//! actually registered, surfaced as its own subcommand so a broken
//! `template_dir` override is caught before anyone tries to generate.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use console::style;

use modsmith::{
    ConfigAliasResolver, ConfigModuleRegistry, Generator, ModsmithConfig,
    ModuleSkeletonGenerator, TemplateRegistry,
};

/// List the generator's required templates and their registration state.
pub struct TemplatesCommand {
    /// Alternative configuration file.
    pub config_path: Option<PathBuf>,
}

impl TemplatesCommand {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns an error when configuration or templates cannot be loaded, or
    /// when a required template is missing.
    pub fn execute(&self) -> Result<()> {
        let config = match &self.config_path {
            Some(path) => ModsmithConfig::load_from(path),
            None => ModsmithConfig::load(),
        }
        .context("Failed to load configuration")?;

        let templates = match &config.generator.template_dir {
            Some(dir) => TemplateRegistry::with_overrides(dir),
            None => TemplateRegistry::new(),
        }
        .context("Failed to build template registry")?;

        let generator = ModuleSkeletonGenerator::new(
            templates,
            Box::new(ConfigAliasResolver::new(config.aliases.clone())),
            Box::new(ConfigModuleRegistry::new(config.registry.modules.clone())),
        );

        println!(
            "{} {}",
            style(generator.name()).bold(),
            style(format!("— {}", generator.description())).dim()
        );
        println!();

        let mut missing = Vec::new();
        for name in generator.required_templates() {
            if generator.template_registry().is_registered(name) {
                println!("  {} {name}", style("✓").green());
            } else {
                println!("  {} {name}", style("✗").red().bold());
                missing.push(*name);
            }
        }

        if !missing.is_empty() {
            println!();
            bail!("required templates are not registered: {}", missing.join(", "));
        }
        Ok(())
    }
}
