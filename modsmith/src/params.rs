//! Generator parameters
//!
//! A parameter set is constructed by the caller (CLI flags, or any other
//! front end), validated once via [`crate::validate::validate`], then
//! consumed exactly once by generation. It is never persisted.

/// Default output alias for generated skeletons.
pub const DEFAULT_OUTPUT_PATH: &str = "@runtime/tmp-module";

/// User-supplied parameters for a module skeleton.
///
/// `module_id` and `module_class` are trimmed at the point of use, so
/// surrounding whitespace from interactive input is harmless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorParams {
    /// Short module identifier, e.g. `blog`. Word characters and dashes only.
    pub module_id: String,
    /// Fully qualified module class, e.g. `app\modules\blog\Module`.
    pub module_class: String,
    /// Free-text module description. Optional.
    pub module_description: String,
    /// Module author, conventionally `Name <email>`. Optional.
    pub author: String,
    /// Alias path the module tree is generated under.
    pub output_path: String,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            module_id: String::new(),
            module_class: String::new(),
            module_description: String::new(),
            author: String::new(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

/// Human-readable label for a parameter field.
#[must_use]
pub fn label(field: &str) -> &str {
    match field {
        "module_id" => "Module ID",
        "module_class" => "Module Class",
        "module_description" => "Module Description",
        "author" => "Author",
        "output_path" => "Output Path",
        other => other,
    }
}

/// Usage hint for a parameter field, suitable for help text.
#[must_use]
pub fn hint(field: &str) -> Option<&'static str> {
    match field {
        "module_id" => Some("the ID of the module, e.g. `admin`"),
        "module_class" => Some(
            "the fully qualified class name of the module, e.g. `app\\modules\\admin\\Module`",
        ),
        "module_description" => Some("a short description shown in the module manifest"),
        "author" => Some("the module author, e.g. `Jane Doe <jane@example.com>`"),
        "output_path" => Some("alias path the skeleton is written under"),
        _ => None,
    }
}
