//! # Creational Patterns
//!
//! Reusable builders and a factory dispatcher, with small demo binaries.
//!
//! ## Patterns Covered
//!
//! 1. **Builder**
//!    - Hardware profile with placeholder values (`builder::computer`)
//!    - SQL `SELECT` assembly with a fixed clause order (`builder::query`)
//!    - HTML template sections (`builder::template`)
//!
//! 2. **Factory Method**
//!    - One restaurant type per burger kind (`factory::restaurant`)
//!    - Restaurants as data records (`factory::record`)
//!    - Key-based dispatch that rejects unknown categories (`factory::dispatcher`)
//!
//! 3. **Adapter**
//!    - A console logger adapted to the diagnostic sink interface
//!      (`diagnostics::adapter`)
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin computer_builder
//! cargo run --bin query_builder
//! cargo run --bin burger_factory -- patterns.toml
//! ```

pub mod builder;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod factory;

pub use builder::{Build, Render};
pub use config::Config;
pub use diagnostics::{DiagnosticSink, Level};
pub use error::{ConfigError, PatternError, Result};
