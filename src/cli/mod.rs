//! # CLI Module
//!
//! Command-line interface for the `routegen` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Write `<dir>/internal/handler/routes.go` for a service description:
//!
//! ```bash
//! routegen generate --api shop.yaml --dir ./shop --root-package github.com/acme/shop
//! ```
//!
//! Options:
//! - `--api <FILE>` - Resolved service description, YAML or JSON (required)
//! - `--dir <DIR>` - Output project directory (required)
//! - `--root-package <PKG>` - Go module path; may also come from `routegen.toml`
//! - `--config <FILE>` - Explicit `routegen.toml`
//! - `--template <FILE>` - Override template
//! - `--style <STYLE>` - File naming style (`gozero`, `go_zero`, `GoZero`, ...)
//!
//! ### `template`
//!
//! Print the built-in template, a starting point for `--template`:
//!
//! ```bash
//! routegen template > routes.tpl
//! ```
//!
//! ### `inspect`
//!
//! Print the resolved groups, handlers and flags without writing anything:
//!
//! ```bash
//! routegen inspect --api shop.yaml --dir ./shop
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands};
