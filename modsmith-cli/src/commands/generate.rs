//! Module skeleton generation command

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use console::style;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use similar::{ChangeTag, TextDiff};
use tracing::debug;

use modsmith::{
    params, ConfigAliasResolver, ConfigModuleRegistry, GeneratedFile, Generator, GeneratorParams,
    ModsmithConfig, ModuleSkeletonGenerator, TemplateRegistry,
};

/// Generate a module skeleton and write it to disk.
pub struct GenerateCommand {
    /// Module ID.
    pub id: String,
    /// Fully qualified module class.
    pub class: String,
    /// Manifest description.
    pub description: String,
    /// Manifest author.
    pub author: String,
    /// Output alias override; configuration default when `None`.
    pub output: Option<String>,
    /// Overwrite changed files without prompting.
    pub force: bool,
    /// Preview only; never touch the filesystem.
    pub dry_run: bool,
    /// Alternative configuration file.
    pub config_path: Option<PathBuf>,
}

enum FileOutcome {
    Written,
    Unchanged,
    Skipped,
    Previewed,
}

impl GenerateCommand {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns an error when configuration or templates cannot be loaded,
    /// when validation fails, or when a file cannot be written.
    pub fn execute(&self) -> Result<()> {
        let config = match &self.config_path {
            Some(path) => ModsmithConfig::load_from(path),
            None => ModsmithConfig::load(),
        }
        .context("Failed to load configuration")?;
        debug!(
            output_path = %config.generator.output_path,
            aliases = config.aliases.len(),
            "configuration loaded"
        );

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

        let generator_params = GeneratorParams {
            module_id: self.id.clone(),
            module_class: self.class.clone(),
            module_description: self.description.clone(),
            author: self.author.clone(),
            output_path: self
                .output
                .clone()
                .unwrap_or_else(|| config.generator.output_path.clone()),
        };

        println!(
            "{} {} {}",
            style("Generating").green().bold(),
            style("module skeleton:").bold(),
            style(&self.id).cyan().bold()
        );

        // Validation always runs before generation; generate() trusts its
        // input and would happily produce malformed paths.
        if let Err(errors) = generator.validate(&generator_params) {
            println!();
            for error in &errors {
                println!("  {} {}", style("✗").red().bold(), style(error).red());
                if let Some(hint) = params::hint(error.field) {
                    println!("    {}", style(format!("hint: {hint}")).dim());
                }
            }
            println!();
            bail!("parameter validation failed");
        }

        let missing = generator.missing_templates();
        if !missing.is_empty() {
            bail!("required templates are not registered: {}", missing.join(", "));
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message("Rendering templates...");

        let files = generator
            .generate(&generator_params)
            .context("Failed to generate module skeleton")?;

        spinner.finish_and_clear();

        println!(
            "\n{} {} files:",
            style("Generated").green().bold(),
            files.len()
        );

        let mut written = 0usize;
        for file in &files {
            match self.apply(file)? {
                FileOutcome::Written | FileOutcome::Previewed => written += 1,
                FileOutcome::Unchanged | FileOutcome::Skipped => {}
            }
        }

        if self.dry_run {
            println!(
                "\n{} {} of {} files would be written.",
                style("Dry run:").yellow().bold(),
                written,
                files.len()
            );
            return Ok(());
        }

        print_success(&generator.success_message(&generator_params));
        Ok(())
    }

    /// Write one generated file, previewing a diff when it already exists.
    fn apply(&self, file: &GeneratedFile) -> Result<FileOutcome> {
        if let Ok(existing) = fs::read_to_string(&file.path) {
            if existing == file.content {
                println!(
                    "  {} {} {}",
                    style("=").dim(),
                    style(file.path.display()).dim(),
                    style("(unchanged)").dim()
                );
                return Ok(FileOutcome::Unchanged);
            }

            println!(
                "  {} {} {}",
                style("~").yellow().bold(),
                style(file.path.display()).yellow(),
                style("(differs)").yellow()
            );
            print_diff(&existing, &file.content);

            if !self.force && !self.dry_run {
                let overwrite = Confirm::new()
                    .with_prompt(format!("Overwrite {}?", file.path.display()))
                    .default(false)
                    .interact()
                    .context("Failed to read confirmation")?;
                if !overwrite {
                    println!(
                        "  {} {} {}",
                        style("-").dim(),
                        style(file.path.display()).dim(),
                        style("(kept existing)").dim()
                    );
                    return Ok(FileOutcome::Skipped);
                }
            }
        }

        if self.dry_run {
            println!(
                "  {} {} ({})",
                style("+").cyan(),
                style(file.path.display()).dim(),
                style(&file.description).dim()
            );
            return Ok(FileOutcome::Previewed);
        }

        if let Some(parent) = file.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&file.path, &file.content)
            .with_context(|| format!("Failed to write file: {}", file.path.display()))?;

        println!(
            "  {} {} ({})",
            style("✓").green(),
            style(file.path.display()).dim(),
            style(&file.description).dim()
        );
        Ok(FileOutcome::Written)
    }
}

/// Print the generator's completion message, highlighting the configuration
/// snippet when one is included.
fn print_success(message: &str) {
    println!("\n{}", style("✓ Module skeleton generated!").green().bold());
    println!();
    for line in message.lines() {
        if line.starts_with('\'') || line.starts_with(' ') || line.starts_with(']') {
            println!("  {}", style(line).yellow());
        } else {
            println!("{line}");
        }
    }
}

fn print_diff(existing: &str, generated: &str) {
    let diff = TextDiff::from_lines(existing, generated);
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => print!("    {}{}", style("-").red(), style(change).red()),
            ChangeTag::Insert => print!("    {}{}", style("+").green(), style(change).green()),
            ChangeTag::Equal => {}
        }
    }
}
