//! Error types
//!
//! Validation problems are field-scoped and recoverable; they live in
//! [`crate::validate`]. The errors here are generation-time and fatal: when
//! one occurs, no files are returned at all.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal template failure during registration or generation.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A template name the generator depends on is not registered.
    #[error("template not registered: {name}")]
    Missing {
        /// Canonical template name, e.g. `controller.php`.
        name: String,
    },

    /// A registered template failed to render.
    #[error("failed to render template {name}")]
    Render {
        /// Canonical template name.
        name: String,
        /// Underlying handlebars error.
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// A template body could not be parsed at registration time.
    #[error("invalid template {name}")]
    Syntax {
        /// Canonical template name.
        name: String,
        /// Underlying handlebars error.
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    /// A template override file could not be read.
    #[error("failed to read template override {}", path.display())]
    Io {
        /// Path of the unreadable override file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
