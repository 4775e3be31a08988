//! Module skeleton generation
//!
//! [`ModuleSkeletonGenerator`] turns a validated parameter set into an
//! ordered list of virtual files. It owns no I/O: the caller writes the
//! files, shows diffs, and reports the outcome. Collaborators are injected
//! so nothing here depends on ambient host state.

use std::path::PathBuf;

use serde_json::json;
use tracing::debug;

use crate::error::TemplateError;
use crate::host::{AliasResolver, ModuleRegistry};
use crate::naming;
use crate::params::GeneratorParams;
use crate::templates::{TemplateRegistry, REQUIRED_TEMPLATES};
use crate::validate::{self, FieldError};

/// Manifest version stamped into fresh skeletons.
const SKELETON_VERSION: &str = "0.1";

/// A rendered file the caller still has to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Output path, rooted at the resolved output directory.
    pub path: PathBuf,
    /// Rendered text content.
    pub content: String,
    /// One-line description for user feedback.
    pub description: String,
}

/// Capability interface a generator exposes to its host.
///
/// A host front end (CLI, web form, anything) depends only on this trait:
/// it validates, verifies the required templates, generates, writes, and
/// prints the success message.
pub trait Generator {
    /// Display name of the generator.
    fn name(&self) -> &'static str;

    /// One-line description of what the generator produces.
    fn description(&self) -> &'static str;

    /// Template names that must be registered before generation may run.
    fn required_templates(&self) -> &'static [&'static str];

    /// Validate a parameter set.
    ///
    /// # Errors
    ///
    /// All field errors found, for the front end to surface at once.
    fn validate(&self, params: &GeneratorParams) -> Result<(), Vec<FieldError>>;

    /// Render the full file list for a validated parameter set.
    ///
    /// # Errors
    ///
    /// A fatal [`TemplateError`]; no partial output is ever returned.
    fn generate(&self, params: &GeneratorParams) -> Result<Vec<GeneratedFile>, TemplateError>;

    /// Human-readable completion message shown after the files are written.
    fn success_message(&self, params: &GeneratorParams) -> String;
}

/// Generates the skeleton of a pluggable host-application module.
pub struct ModuleSkeletonGenerator {
    templates: TemplateRegistry,
    resolver: Box<dyn AliasResolver>,
    registry: Box<dyn ModuleRegistry>,
}

impl ModuleSkeletonGenerator {
    /// Build a generator from its collaborators.
    #[must_use]
    pub fn new(
        templates: TemplateRegistry,
        resolver: Box<dyn AliasResolver>,
        registry: Box<dyn ModuleRegistry>,
    ) -> Self {
        Self {
            templates,
            resolver,
            registry,
        }
    }

    /// The template registry backing this generator, for host-side checks.
    #[must_use]
    pub fn template_registry(&self) -> &TemplateRegistry {
        &self.templates
    }

    /// Required template names missing from the registry. Empty when
    /// generation is allowed to run.
    #[must_use]
    pub fn missing_templates(&self) -> Vec<&'static str> {
        REQUIRED_TEMPLATES
            .into_iter()
            .filter(|name| !self.templates.is_registered(name))
            .collect()
    }

    /// Root directory the skeleton is generated under:
    /// `resolve(output_path)/lowercase(module_id)`.
    ///
    /// An unresolvable output alias falls back to the literal path with the
    /// `@` stripped; the result is malformed but never a crash, and the
    /// caller sees the odd path in the preview.
    fn module_root(&self, params: &GeneratorParams) -> PathBuf {
        let alias = params.output_path.trim();
        let base = self
            .resolver
            .resolve(alias)
            .unwrap_or_else(|| PathBuf::from(alias.trim_start_matches('@')));
        base.join(naming::module_dir(params.module_id.trim()))
    }

    fn render_context(params: &GeneratorParams) -> serde_json::Value {
        let module_id = params.module_id.trim();
        let module_class = params.module_class.trim();
        let module_namespace = naming::module_namespace(module_class);
        json!({
            "module_id": module_id,
            "module_id_lower": naming::module_dir(module_id),
            "module_name": naming::display_name(module_id),
            "module_class": module_class,
            "module_class_name": naming::class_name(module_class),
            "module_namespace": module_namespace,
            "module_namespace_path": module_namespace.replace('\\', "/"),
            "controller_namespace": naming::controller_namespace(module_class),
            "controller_class": naming::controller_class(module_id),
            "module_description": params.module_description,
            "author": params.author,
            "version": SKELETON_VERSION,
        })
    }
}

impl Generator for ModuleSkeletonGenerator {
    fn name(&self) -> &'static str {
        "Module Skeleton Generator"
    }

    fn description(&self) -> &'static str {
        "Generates the skeleton code needed by a pluggable host-application module."
    }

    fn required_templates(&self) -> &'static [&'static str] {
        &REQUIRED_TEMPLATES
    }

    fn validate(&self, params: &GeneratorParams) -> Result<(), Vec<FieldError>> {
        validate::validate(params, self.resolver.as_ref())
    }

    fn generate(&self, params: &GeneratorParams) -> Result<Vec<GeneratedFile>, TemplateError> {
        let root = self.module_root(params);
        let context = Self::render_context(params);
        let module_id = params.module_id.trim();
        debug!(module_id, root = %root.display(), "generating module skeleton");

        let controller_file = format!(
            "controllers/{}.php",
            naming::controller_class(module_id)
        );
        let view_file = format!("views/{}/index.php", naming::module_dir(module_id));

        // Fixed output order; the caller's diff preview depends on it.
        let plan: [(&str, String, &str); 8] = [
            (
                "index.html",
                "assets/index.html".to_string(),
                "placeholder asset page",
            ),
            ("assets.php", "Assets.php".to_string(), "asset bundle"),
            ("config.php", "config.php".to_string(), "module configuration"),
            ("events.php", "Events.php".to_string(), "event handlers"),
            ("module_j.php", "module.json".to_string(), "module manifest"),
            ("module.php", "Module.php".to_string(), "module class"),
            ("controller.php", controller_file, "default controller"),
            ("view.php", view_file, "index view"),
        ];

        let mut files = Vec::with_capacity(plan.len());
        for (template, relative, description) in plan {
            let content = self.templates.render(template, &context)?;
            files.push(GeneratedFile {
                path: root.join(relative),
                content,
                description: description.to_string(),
            });
        }
        Ok(files)
    }

    fn success_message(&self, params: &GeneratorParams) -> String {
        let module_id = params.module_id.trim();
        if self.registry.is_registered(module_id) {
            format!(
                "The module has been generated successfully. You may try it now: {}",
                self.registry.url_for(module_id)
            )
        } else {
            format!(
                "The module has been generated successfully.\n\
                 To access the module, add this to your application configuration:\n\
                 \n\
                 'modules' => [\n\
                 \x20   '{module_id}' => [\n\
                 \x20       'class' => '{}',\n\
                 \x20   ],\n\
                 ],\n",
                params.module_class.trim()
            )
        }
    }
}
