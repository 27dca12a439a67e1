//! # lavka-data: Catalog Document Layer for Lavka
//!
//! Everything that touches the outside world lives here: reading catalog
//! JSON documents, assembling them into `Category` graphs, TOML
//! configuration with environment overrides, and the tracing-backed
//! creation observer. The catalog rules themselves live in `lavka-core`;
//! this crate only feeds validated input into them.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  lavka.toml ──► config::CatalogConfig ──┐                               │
//! │                 (defaults ← file ← env) │                               │
//! │                                         ▼                               │
//! │  products.json ──► loader::load_catalog(path, &registry)                │
//! │                         │                                               │
//! │                         ├── loader::load_document  (file → JSON value)  │
//! │                         └── loader::build_catalog  (value → Categories) │
//! │                                         │                               │
//! │                                         ▼                               │
//! │                  Vec<Category>  +  Registry totals                      │
//! │                                         │                               │
//! │  observer::TracingObserver ◄────────────┘  (info! per entity)           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`loader`] - Document reading and catalog assembly
//! - [`config`] - TOML configuration with env overrides
//! - [`observer`] - `CatalogObserver` implemented over `tracing`
//! - [`error`] - Data layer error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod loader;
pub mod observer;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::CatalogConfig;
pub use error::{DataError, DataResult};
pub use loader::{build_catalog, build_category, load_catalog, load_document};
pub use observer::TracingObserver;
