//! Template registry
//!
//! Named templates rendered through handlebars, with HTML escaping disabled
//! since the output is source code rather than markup. The embedded defaults
//! in [`files`] cover every name the generator depends on; a directory of
//! `<name>.hbs` files can override any of them.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use handlebars::Handlebars;
use tracing::debug;

use crate::error::TemplateError;

pub mod files;

/// Template names the module skeleton generator depends on.
///
/// A host front end checks this list against the registry before allowing
/// generation to run. `module_j.php` renders the `module.json` output.
pub const REQUIRED_TEMPLATES: [&str; 8] = [
    "assets.php",
    "config.php",
    "events.php",
    "module_j.php",
    "module.php",
    "controller.php",
    "view.php",
    "index.html",
];

/// Registry of named, renderable templates.
#[derive(Debug)]
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
    names: BTreeSet<String>,
}

impl TemplateRegistry {
    /// Build a registry holding the embedded default templates.
    ///
    /// # Errors
    ///
    /// [`TemplateError::Syntax`] if a default body fails to parse; this only
    /// happens when a template constant is edited into invalid handlebars.
    pub fn new() -> Result<Self, TemplateError> {
        let mut handlebars = Handlebars::new();

        // Escaping is for HTML output; these templates emit source code.
        handlebars.register_escape_fn(handlebars::no_escape);

        let mut registry = Self {
            handlebars,
            names: BTreeSet::new(),
        };
        registry.register("assets.php", files::ASSETS_PHP)?;
        registry.register("config.php", files::CONFIG_PHP)?;
        registry.register("events.php", files::EVENTS_PHP)?;
        registry.register("module_j.php", files::MODULE_JSON)?;
        registry.register("module.php", files::MODULE_PHP)?;
        registry.register("controller.php", files::CONTROLLER_PHP)?;
        registry.register("view.php", files::VIEW_PHP)?;
        registry.register("index.html", files::INDEX_HTML)?;
        Ok(registry)
    }

    /// Build a registry with the defaults, then re-register every `<name>.hbs`
    /// file found in `dir` over them.
    ///
    /// # Errors
    ///
    /// [`TemplateError::Io`] when the directory or an override file cannot be
    /// read, [`TemplateError::Syntax`] when an override fails to parse.
    pub fn with_overrides(dir: &Path) -> Result<Self, TemplateError> {
        let mut registry = Self::new()?;
        let entries = fs::read_dir(dir).map_err(|source| TemplateError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| TemplateError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_string_lossy().strip_suffix(".hbs").map(String::from)
            else {
                continue;
            };
            let body =
                fs::read_to_string(entry.path()).map_err(|source| TemplateError::Io {
                    path: entry.path(),
                    source,
                })?;
            debug!(name, path = %entry.path().display(), "template override loaded");
            registry.register(&name, &body)?;
        }
        Ok(registry)
    }

    /// Register (or replace) a named template.
    ///
    /// # Errors
    ///
    /// [`TemplateError::Syntax`] when the body fails to parse.
    pub fn register(&mut self, name: &str, body: &str) -> Result<(), TemplateError> {
        self.handlebars
            .register_template_string(name, body)
            .map_err(|source| TemplateError::Syntax {
                name: name.to_string(),
                source: Box::new(source),
            })?;
        self.names.insert(name.to_string());
        Ok(())
    }

    /// Whether a template name is registered.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Render a named template against a JSON context.
    ///
    /// # Errors
    ///
    /// [`TemplateError::Missing`] for an unregistered name,
    /// [`TemplateError::Render`] when handlebars fails.
    pub fn render(
        &self,
        name: &str,
        context: &serde_json::Value,
    ) -> Result<String, TemplateError> {
        if !self.is_registered(name) {
            return Err(TemplateError::Missing {
                name: name.to_string(),
            });
        }
        self.handlebars
            .render(name, context)
            .map_err(|source| TemplateError::Render {
                name: name.to_string(),
                source: Box::new(source),
            })
    }
}
