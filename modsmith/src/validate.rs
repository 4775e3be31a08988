//! Parameter validation
//!
//! Validation runs before generation and is the only place user input is
//! checked; [`crate::generator`] trusts its input. All problems found in one
//! pass are reported together so a front end can mark every offending field
//! at once.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::host::AliasResolver;
use crate::params::{self, GeneratorParams};

static MODULE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\-]+$").expect("module ID pattern is valid"));
static MODULE_CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\\]*$").expect("module class pattern is valid"));

/// What went wrong with a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// Required field was empty after trimming.
    Required,
    /// Field does not match its character pattern.
    Pattern,
    /// Class is not namespaced, or its namespace root is not a known alias.
    InvalidNamespace,
    /// Class ends in a namespace separator.
    TrailingSeparator,
}

/// A validation problem scoped to one parameter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Parameter field name, e.g. `module_class`.
    pub field: &'static str,
    /// Problem classification.
    pub kind: FieldErrorKind,
    /// Human-readable message for the field.
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", params::label(self.field), self.message)
    }
}

/// Validate a parameter set against the injected alias resolver.
///
/// Returns all field errors found, or `Ok(())` when the parameters are fit
/// for generation. `module_description` and `author` are accepted as-is.
///
/// # Errors
///
/// One [`FieldError`] per failed rule. The two semantic checks on
/// `module_class` are independent and may both report for the same input.
pub fn validate(
    params: &GeneratorParams,
    resolver: &dyn AliasResolver,
) -> Result<(), Vec<FieldError>> {
    let module_id = params.module_id.trim();
    let module_class = params.module_class.trim();
    let mut errors = Vec::new();

    if module_id.is_empty() {
        errors.push(FieldError::new(
            "module_id",
            FieldErrorKind::Required,
            "Module ID cannot be blank.",
        ));
    } else if !MODULE_ID_RE.is_match(module_id) {
        errors.push(FieldError::new(
            "module_id",
            FieldErrorKind::Pattern,
            "Only word characters and dashes are allowed.",
        ));
    }

    if module_class.is_empty() {
        errors.push(FieldError::new(
            "module_class",
            FieldErrorKind::Required,
            "Module Class cannot be blank.",
        ));
    } else {
        if !MODULE_CLASS_RE.is_match(module_class) {
            errors.push(FieldError::new(
                "module_class",
                FieldErrorKind::Pattern,
                "Only word characters and backslashes are allowed.",
            ));
        }

        // The two checks below mirror the host's class rules and are
        // deliberately independent: a class can be both unresolvable and end
        // in a separator, and the user should hear about both at once.
        let alias_path = format!("@{}", module_class.replace('\\', "/"));
        if !module_class.contains('\\') || resolver.resolve(&alias_path).is_none() {
            errors.push(FieldError::new(
                "module_class",
                FieldErrorKind::InvalidNamespace,
                "Module class must be properly namespaced.",
            ));
        }
        if module_class.ends_with('\\') {
            errors.push(FieldError::new(
                "module_class",
                FieldErrorKind::TrailingSeparator,
                "Module class name must not be empty. Please enter a fully \
                 qualified class name, e.g. \"app\\modules\\admin\\Module\".",
            ));
        }
    }

    if errors.is_empty() {
        debug!(module_id, module_class, "parameters validated");
        Ok(())
    } else {
        debug!(count = errors.len(), "parameter validation failed");
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ConfigAliasResolver;
    use proptest::prelude::*;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn resolver() -> ConfigAliasResolver {
        let mut roots = BTreeMap::new();
        roots.insert("app".to_string(), PathBuf::from("/srv/host"));
        roots.insert("acme".to_string(), PathBuf::from("/srv/acme"));
        ConfigAliasResolver::new(roots)
    }

    fn params(id: &str, class: &str) -> GeneratorParams {
        GeneratorParams {
            module_id: id.to_string(),
            module_class: class.to_string(),
            ..GeneratorParams::default()
        }
    }

    fn kinds_for(errors: &[FieldError], field: &str) -> Vec<FieldErrorKind> {
        errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.kind)
            .collect()
    }

    #[test]
    fn accepts_valid_parameters() {
        let p = params("blog", "app\\modules\\blog\\Module");
        assert!(validate(&p, &resolver()).is_ok());
    }

    #[test]
    fn accepts_dashed_module_id() {
        let p = params("my-module", "app\\modules\\mymodule\\Module");
        assert!(validate(&p, &resolver()).is_ok());
    }

    #[test]
    fn trims_before_validating() {
        let p = params("  blog  ", "  app\\modules\\blog\\Module  ");
        assert!(validate(&p, &resolver()).is_ok());
    }

    #[test]
    fn blank_fields_are_required_errors() {
        let p = params("   ", "");
        let errors = validate(&p, &resolver()).unwrap_err();
        assert_eq!(kinds_for(&errors, "module_id"), vec![FieldErrorKind::Required]);
        assert_eq!(
            kinds_for(&errors, "module_class"),
            vec![FieldErrorKind::Required]
        );
    }

    #[test]
    fn module_id_with_space_is_pattern_error() {
        let p = params("my module", "app\\modules\\blog\\Module");
        let errors = validate(&p, &resolver()).unwrap_err();
        assert_eq!(kinds_for(&errors, "module_id"), vec![FieldErrorKind::Pattern]);
    }

    #[test]
    fn class_without_separator_is_invalid_namespace() {
        let p = params("blog", "Module");
        let errors = validate(&p, &resolver()).unwrap_err();
        assert_eq!(
            kinds_for(&errors, "module_class"),
            vec![FieldErrorKind::InvalidNamespace]
        );
    }

    #[test]
    fn class_with_unknown_alias_root_is_invalid_namespace() {
        let p = params("blog", "vendor\\modules\\blog\\Module");
        let errors = validate(&p, &resolver()).unwrap_err();
        assert_eq!(
            kinds_for(&errors, "module_class"),
            vec![FieldErrorKind::InvalidNamespace]
        );
    }

    #[test]
    fn trailing_separator_is_reported() {
        let p = params("blog", "app\\modules\\");
        let errors = validate(&p, &resolver()).unwrap_err();
        assert_eq!(
            kinds_for(&errors, "module_class"),
            vec![FieldErrorKind::TrailingSeparator]
        );
    }

    #[test]
    fn unresolvable_and_trailing_separator_both_report() {
        let p = params("blog", "vendor\\");
        let errors = validate(&p, &resolver()).unwrap_err();
        assert_eq!(
            kinds_for(&errors, "module_class"),
            vec![
                FieldErrorKind::InvalidNamespace,
                FieldErrorKind::TrailingSeparator
            ]
        );
    }

    #[test]
    fn class_with_forbidden_character_is_pattern_error() {
        let p = params("blog", "app/modules/blog/Module");
        let errors = validate(&p, &resolver()).unwrap_err();
        assert!(kinds_for(&errors, "module_class").contains(&FieldErrorKind::Pattern));
    }

    #[test]
    fn description_and_author_are_not_validated() {
        let mut p = params("blog", "app\\modules\\blog\\Module");
        p.module_description = "anything at all! <>&".to_string();
        p.author = "!!!".to_string();
        assert!(validate(&p, &resolver()).is_ok());
    }

    #[test]
    fn error_display_includes_label() {
        let p = params("", "app\\modules\\blog\\Module");
        let errors = validate(&p, &resolver()).unwrap_err();
        assert_eq!(errors[0].to_string(), "Module ID: Module ID cannot be blank.");
    }

    proptest! {
        #[test]
        fn module_id_with_invalid_char_always_fails(
            prefix in "[a-z]{0,6}",
            bad in prop::sample::select(vec!['!', '@', '#', '%', '&', '*', '(', ')', '+', '=', '.', ',', '/', '~']),
            suffix in "[a-z]{0,6}",
        ) {
            let id = format!("{prefix}{bad}{suffix}");
            let p = params(&id, "app\\modules\\blog\\Module");
            let errors = validate(&p, &resolver()).unwrap_err();
            prop_assert!(kinds_for(&errors, "module_id")
                .contains(&FieldErrorKind::Pattern));
        }

        #[test]
        fn class_without_separator_always_fails(class in "[A-Za-z][A-Za-z0-9_]{0,14}") {
            let p = params("blog", &class);
            let errors = validate(&p, &resolver()).unwrap_err();
            prop_assert!(kinds_for(&errors, "module_class")
                .contains(&FieldErrorKind::InvalidNamespace));
        }
    }
}
