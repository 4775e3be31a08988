//! Configuration
//!
//! Settings are loaded with clear precedence:
//!
//! 1. Environment variables (highest priority, `MODSMITH_` prefix,
//!    `__`-separated nesting, e.g. `MODSMITH_GENERATOR__OUTPUT_PATH`)
//! 2. `./modsmith.toml`
//! 3. Hardcoded defaults (fallback)
//!
//! # Example configuration
//!
//! ```toml
//! # modsmith.toml
//! [generator]
//! output_path = "@runtime/tmp-module"
//! # template_dir = "./templates"
//!
//! [aliases]
//! app = "."
//! runtime = "./runtime"
//!
//! [registry.modules]
//! blog = "/blog"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::params::DEFAULT_OUTPUT_PATH;

/// Generator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Alias path generated skeletons are rooted under.
    pub output_path: String,

    /// Optional directory of `<name>.hbs` files overriding the embedded
    /// templates.
    pub template_dir: Option<PathBuf>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            template_dir: None,
        }
    }
}

/// Host module registry settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrySettings {
    /// Modules already installed in the running host, module ID → URL.
    pub modules: BTreeMap<String, String>,
}

/// Complete modsmith configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModsmithConfig {
    /// Generator settings.
    pub generator: GeneratorSettings,

    /// Alias roots, alias name → filesystem path.
    pub aliases: BTreeMap<String, PathBuf>,

    /// Host module registry.
    pub registry: RegistrySettings,
}

impl Default for ModsmithConfig {
    fn default() -> Self {
        let mut aliases = BTreeMap::new();
        aliases.insert("app".to_string(), PathBuf::from("."));
        aliases.insert("runtime".to_string(), PathBuf::from("./runtime"));
        Self {
            generator: GeneratorSettings::default(),
            aliases,
            registry: RegistrySettings::default(),
        }
    }
}

impl ModsmithConfig {
    /// Load configuration from `./modsmith.toml` and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error when a source exists but cannot be parsed.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from("modsmith.toml")
    }

    /// Load configuration from a specific TOML file and the environment.
    ///
    /// The file is optional; defaults apply when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error when a source exists but cannot be parsed.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("MODSMITH_").split("__"))
            .extract()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = ModsmithConfig::default();
        assert_eq!(config.generator.output_path, "@runtime/tmp-module");
        assert!(config.generator.template_dir.is_none());
        assert_eq!(config.aliases.get("app"), Some(&PathBuf::from(".")));
        assert!(config.registry.modules.is_empty());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ModsmithConfig::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.generator.output_path, "@runtime/tmp-module");
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("modsmith.toml");
        std::fs::write(
            &path,
            r#"
[generator]
output_path = "@app/modules"

[aliases]
acme = "/srv/acme"

[registry.modules]
blog = "/blog"
"#,
        )
        .unwrap();

        let config = ModsmithConfig::load_from(&path).unwrap();
        assert_eq!(config.generator.output_path, "@app/modules");
        assert_eq!(config.aliases.get("acme"), Some(&PathBuf::from("/srv/acme")));
        assert_eq!(config.registry.modules.get("blog"), Some(&"/blog".to_string()));
    }
}
