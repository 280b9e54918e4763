//! CNCF Explorer - catalog browser and curation API
//!
//! Mirrors the externally-published CNCF landscape dataset into a local
//! store, exposes filtering endpoints over it, and lets users attach
//! enterprise solution annotations to categories.
//!
//! # Modules
//!
//! - [`config`] — Strongly-typed configuration with TOML and environment variable support
//! - [`domain`] — Catalog entities, value objects, and repository traits
//! - [`application`] — Landscape import use cases
//! - [`infrastructure`] — Landscape source client and SQLite persistence
//! - [`presentation`] — Axum routes, controllers, and wire models
//! - [`logging`] — Structured logging with tracing
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── domain/           # Pure business logic
//! │   └── catalog/      # Projects, solutions, maturity levels
//! ├── application/      # Use cases (landscape sync)
//! ├── infrastructure/   # External integrations
//! │   ├── landscape/    # Source fetch + normalization
//! │   └── persistence/  # SQLite repositories
//! ├── presentation/     # HTTP surface
//! └── config/           # Configuration management
//! ```
//!
//! # Configuration
//!
//! Environment variables use the `CNCF_EXPLORER__` prefix with double
//! underscore separators:
//!
//! ```bash
//! CNCF_EXPLORER__SERVER__PORT=3000
//! CNCF_EXPLORER__SYNC__ON_STARTUP=true
//! ```

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

pub use app::{AppHandle, create_app};
pub use config::Config;
pub use logging::init_tracing;
