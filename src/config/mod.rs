//! Configuration module for ztile.
//!
//! This module provides configuration management including:
//! - Type definitions (`types`)
//! - Loading from disk (`loader`)
//! - Validation (`validation`)

mod loader;
mod types;
mod validation;

pub use loader::{config_dir, load_config, load_config_from, load_config_in};
pub use types::{AppConfig, EngineKind, FilterConfig, FocusConfig, LayoutConfig};
pub use validation::{ValidationWarning, validate_config};
