//! # Generator Module
//!
//! The generator module turns a resolved API service description into the Go
//! source file that registers every route with a go-zero `rest.Server`.
//!
//! ## Overview
//!
//! A generation run produces exactly one file, `<dir>/internal/handler/routes.go`
//! by default, containing:
//! - **Imports** - the service-context package, one aliased import per handler
//!   folder, and the framework's `rest` package
//! - **RegisterHandlers** - one `engine.AddRoutes(...)` call per group, each
//!   carrying the group's route triples and its JWT / signature / middleware
//!   options
//!
//! ## Architecture
//!
//! ```text
//! Service → build_groups ─┐
//!         → build_imports ┴→ RoutesTemplateData → Template Rendering → routes.go
//! ```
//!
//! 1. **Route grouping** - [`build_groups`] resolves qualified handler names and
//!    group flags, preserving input order
//! 2. **Imports** - [`build_imports`] deduplicates handler-folder imports and
//!    sorts them by literal text
//! 3. **Emission** - [`emit_routes`] renders the template, removes the stale file
//!    and writes the new one
//!
//! ## Annotation Precedence
//!
//! The grouping folder (`group` annotation) is read from the route first and
//! from its group second. `jwt`, `signature` and `middleware` are group-level
//! only. `signature` is enabled solely by the literal value `true`; the
//! `middleware` value is split on `,` without trimming.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use routegen::generator::{generate_routes, GenerateOptions};
//! use routegen::spec::load_service;
//!
//! let service = load_service("shop.yaml".as_ref())?;
//! let options = GenerateOptions::new("shop", "github.com/acme/shop");
//! let path = generate_routes(&service, &options)?;
//! println!("wrote {}", path.display());
//! ```
//!
//! ## Template Customization
//!
//! The built-in template lives in `templates/routes.go.txt` and is compiled in
//! with Askama. An override file with the same Jinja syntax can be supplied at
//! runtime; it is rendered with MiniJinja against the same context
//! (`import_packages`, `groups`). `routegen template` prints the built-in source.

mod emit;
mod error;
mod generate;
mod imports;
mod naming;
mod routes;
mod templates;

pub use emit::emit_routes;
pub use error::GenerateError;
pub use generate::{
    generate_routes, generate_routes_with, planned_routes_path, GenerateOptions, ROUTES_EXTENSION,
    ROUTES_FILENAME,
};
pub use imports::{build_imports, join_packages, PackageLayout};
pub use naming::{capitalize_first, qualified_handler, to_prefix, FileNamer, NamingStyle};
pub use routes::{build_groups, describe_groups, GroupOutput, RouteOutput};
pub use templates::{RoutesTemplate, RoutesTemplateData, DEFAULT_ROUTES_TEMPLATE};
