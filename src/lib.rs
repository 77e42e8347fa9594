//! # routegen
//!
//! **routegen** generates the route registration file of a go-zero service from a
//! resolved API service description.
//!
//! ## Overview
//!
//! A service description is an ordered list of route groups. Each group and each
//! route can carry annotations that steer generation:
//!
//! | Annotation   | Level          | Effect                                              |
//! |--------------|----------------|-----------------------------------------------------|
//! | `group`      | route, group   | handler package folder and import alias             |
//! | `jwt`        | group          | wraps the group with `rest.WithJwt(...)`            |
//! | `signature`  | group          | `true` wraps the group with `rest.WithSignature(...)` |
//! | `middleware` | group          | comma-separated names for `rest.WithMiddlewares`    |
//!
//! The route's own `group` annotation wins over its group's.
//!
//! ## Architecture
//!
//! - **[`spec`]** - Service, group and route types; loading YAML/JSON descriptions
//! - **[`generator`]** - Route grouping, import assembly, template rendering and file output
//! - **[`config`]** - `routegen.toml` generator settings
//! - **[`cli`]** - The `routegen` command-line interface
//! - **[`logging`]** - `tracing` subscriber setup
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(routegen)
//!     participant Spec as spec::load_service
//!     participant Gen as generator
//!     participant FS as File System
//!
//!     User->>CLI: routegen generate --api shop.yaml --dir shop
//!     CLI->>Spec: load_service("shop.yaml")
//!     Spec-->>CLI: Service
//!     CLI->>Gen: generate_routes(&service, &options)
//!     Gen->>Gen: build_groups (handlers, jwt, signature, middleware)
//!     Gen->>Gen: format file name (naming style)
//!     Gen->>Gen: build_imports (dedup + sort)
//!     Gen->>FS: remove stale routes.go
//!     Gen->>Gen: render template
//!     Gen->>FS: write internal/handler/routes.go
//!     Gen-->>CLI: PathBuf
//!     CLI-->>User: ✅ Generated routes
//! ```
//!
//! ## Example
//!
//! ```yaml
//! name: shop
//! groups:
//!   - annotations:
//!       group: order
//!       jwt: Auth
//!       signature: "true"
//!     routes:
//!       - method: get
//!         path: /orders
//!         handler: list
//! ```
//!
//! generates a group registered as
//!
//! ```go
//! engine.AddRoutes(
//!     []rest.Route{
//!         {
//!             Method:  http.MethodGet,
//!             Path:    "/orders",
//!             Handler: order.List(serverCtx),
//!         },
//!     },
//!     rest.WithJwt(serverCtx.Config.Auth.AccessSecret),
//!     rest.WithSignature(serverCtx.Config.Signature),
//! )
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod logging;
pub mod spec;

pub use generator::{generate_routes, GenerateError, GenerateOptions};
pub use spec::{load_service, Group, HttpMethod, Route, Service};
