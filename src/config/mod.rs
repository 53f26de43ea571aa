//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CLI flag overrides (cli module)
//!     → ScraperConfig (validated, immutable for the exchange)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the exchange starts
//! - All fields have defaults to allow minimal or absent configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::ScraperConfig;
pub use schema::HttpConfig;
pub use schema::LimitsConfig;
pub use schema::OutputConfig;
pub use schema::ObservabilityConfig;
