//! # modsmith
//!
//! Skeleton generator for pluggable host-application modules.
//!
//! Given a module ID, a fully qualified module class and some descriptive
//! metadata, modsmith renders a fixed set of templates into the file tree a
//! host application expects from a loadable module: manifest, asset bundle,
//! event-hook stub, module class, default controller and index view.
//!
//! ## Flow
//!
//! ```text
//! parameters → validate → generate → [(path, content); 8] → caller writes
//! ```
//!
//! The core is deliberately I/O-free. [`generator::ModuleSkeletonGenerator`]
//! returns virtual files; the caller (see the `modsmith-cli` crate) diffs
//! them against disk, asks for confirmation and performs the writes. Host
//! facts arrive through injected collaborators: an
//! [`host::AliasResolver`] for symbolic path roots and a
//! [`host::ModuleRegistry`] for the table of installed modules.
//!
//! ## Example
//!
//! ```rust
//! use modsmith::{
//!     ConfigAliasResolver, ConfigModuleRegistry, Generator, GeneratorParams,
//!     ModuleSkeletonGenerator, TemplateRegistry,
//! };
//! use std::collections::BTreeMap;
//! use std::path::PathBuf;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut roots = BTreeMap::new();
//! roots.insert("app".to_string(), PathBuf::from("."));
//! roots.insert("runtime".to_string(), PathBuf::from("./runtime"));
//!
//! let generator = ModuleSkeletonGenerator::new(
//!     TemplateRegistry::new()?,
//!     Box::new(ConfigAliasResolver::new(roots)),
//!     Box::new(ConfigModuleRegistry::default()),
//! );
//!
//! let params = GeneratorParams {
//!     module_id: "blog".to_string(),
//!     module_class: "app\\modules\\blog\\Module".to_string(),
//!     ..GeneratorParams::default()
//! };
//!
//! generator.validate(&params).map_err(|errors| {
//!     anyhow::anyhow!("invalid parameters: {}", errors.len())
//! })?;
//! let files = generator.generate(&params)?;
//! assert_eq!(files.len(), 8);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod generator;
pub mod host;
pub mod naming;
pub mod observability;
pub mod params;
pub mod templates;
pub mod validate;

pub use config::ModsmithConfig;
pub use error::TemplateError;
pub use generator::{GeneratedFile, Generator, ModuleSkeletonGenerator};
pub use host::{AliasResolver, ConfigAliasResolver, ConfigModuleRegistry, ModuleRegistry};
pub use params::GeneratorParams;
pub use templates::{TemplateRegistry, REQUIRED_TEMPLATES};
pub use validate::{validate, FieldError, FieldErrorKind};
