//! Host collaborators
//!
//! The generator never reaches into ambient process state. Everything it
//! needs from the surrounding host application — alias roots and the table
//! of already-installed modules — is injected through the two traits here.
//! The `Config*` implementations back them with `modsmith.toml` tables; tests
//! substitute mocks.

use std::collections::BTreeMap;
use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;

/// Maps symbolic alias paths (`@app/modules/blog`) to filesystem paths.
///
/// Resolution checks that the leading `@alias` root is known and joins the
/// remainder onto it. It does not require the joined path to exist: a module
/// skeleton is usually generated into a directory that does not exist yet.
#[cfg_attr(test, automock)]
pub trait AliasResolver {
    /// Resolve an alias path to a filesystem path, or `None` when the root
    /// alias is unknown.
    fn resolve(&self, alias_path: &str) -> Option<PathBuf>;
}

/// Lookup into the host application's table of installed modules.
#[cfg_attr(test, automock)]
pub trait ModuleRegistry {
    /// Whether a module with this ID is already registered with the host.
    fn is_registered(&self, module_id: &str) -> bool;
    /// URL under which a registered module can be exercised.
    fn url_for(&self, module_id: &str) -> String;
}

/// [`AliasResolver`] backed by the `[aliases]` table of the configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigAliasResolver {
    roots: BTreeMap<String, PathBuf>,
}

impl ConfigAliasResolver {
    /// Build a resolver from a map of alias name → filesystem root.
    #[must_use]
    pub fn new(roots: BTreeMap<String, PathBuf>) -> Self {
        Self { roots }
    }
}

impl AliasResolver for ConfigAliasResolver {
    fn resolve(&self, alias_path: &str) -> Option<PathBuf> {
        let rest = alias_path.strip_prefix('@')?;
        let (root, remainder) = match rest.split_once('/') {
            Some((root, remainder)) => (root, Some(remainder)),
            None => (rest, None),
        };
        let base = self.roots.get(root)?;
        match remainder {
            Some(remainder) if !remainder.is_empty() => Some(base.join(remainder)),
            _ => Some(base.clone()),
        }
    }
}

/// [`ModuleRegistry`] backed by the `[registry]` table of the configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigModuleRegistry {
    modules: BTreeMap<String, String>,
}

impl ConfigModuleRegistry {
    /// Build a registry from a map of module ID → URL.
    #[must_use]
    pub fn new(modules: BTreeMap<String, String>) -> Self {
        Self { modules }
    }
}

impl ModuleRegistry for ConfigModuleRegistry {
    fn is_registered(&self, module_id: &str) -> bool {
        self.modules.contains_key(module_id)
    }

    fn url_for(&self, module_id: &str) -> String {
        self.modules
            .get(module_id)
            .cloned()
            .unwrap_or_else(|| format!("/{module_id}"))
    }
}
