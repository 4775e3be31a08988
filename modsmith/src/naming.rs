//! Naming derivations
//!
//! Every value here is a pure function of `module_id` / `module_class`.
//! Nothing in this module touches the filesystem; resolving a namespace to a
//! directory goes through the injected [`crate::host::AliasResolver`].

use std::path::PathBuf;

use convert_case::{Case, Casing};

use crate::host::AliasResolver;

/// Namespace of the module class: everything before the last `\`, with any
/// leading `\` stripped.
///
/// `app\modules\blog\Module` → `app\modules\blog`. A class without a
/// separator yields the empty string; validation rejects that case before
/// generation runs.
#[must_use]
pub fn module_namespace(module_class: &str) -> &str {
    module_class
        .rfind('\\')
        .map_or("", |pos| &module_class[..pos])
        .trim_start_matches('\\')
}

/// Controller namespace: the module namespace with a `controllers` segment
/// appended.
#[must_use]
pub fn controller_namespace(module_class: &str) -> String {
    format!("{}\\controllers", module_namespace(module_class))
}

/// Final segment of the module class, e.g. `Module` for
/// `app\modules\blog\Module`.
#[must_use]
pub fn class_name(module_class: &str) -> &str {
    module_class
        .rfind('\\')
        .map_or(module_class, |pos| &module_class[pos + 1..])
}

/// Directory that contains the module class, resolved through the alias
/// resolver (`app\modules\blog` → `@app/modules/blog`).
pub fn module_path(module_class: &str, resolver: &dyn AliasResolver) -> Option<PathBuf> {
    let alias = format!("@{}", module_namespace(module_class).replace('\\', "/"));
    resolver.resolve(&alias)
}

/// Directory name used for the skeleton root, the controller's view
/// directory and the manifest `id` field.
#[must_use]
pub fn module_dir(module_id: &str) -> String {
    module_id.to_lowercase()
}

/// Default controller class name: the module ID with its first letter
/// uppercased, suffixed with `Controller`.
///
/// IDs cannot contain spaces, so titlecasing is first-letter capitalization:
/// `my-module` → `My-moduleController`.
#[must_use]
pub fn controller_class(module_id: &str) -> String {
    format!("{}Controller", title_case(module_id))
}

/// Display name for the manifest, e.g. `my-module` → `My Module`.
#[must_use]
pub fn display_name(module_id: &str) -> String {
    module_id.to_case(Case::Title)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
