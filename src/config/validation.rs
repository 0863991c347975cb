//! Configuration validation utilities.
//!
//! Provides validation for configuration values, returning warnings for
//! non-fatal issues that should be logged but don't prevent startup.

use std::collections::HashSet;

use super::types::{AppConfig, EngineKind, LayoutConfig};

/// Non-fatal validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    /// The field that has an issue.
    pub field: String,
    /// A description of the issue.
    pub message: String,
}

/// Validate the entire config, returning warnings for non-fatal issues.
///
/// This function checks for:
/// - Gaps large enough to swallow the tiles
/// - A window limit on an engine that ignores it
/// - Empty or duplicated desktop exclusions
pub fn validate_config(config: &AppConfig) -> Vec<ValidationWarning> {
    let mut warnings = validate_layout(&config.layout);

    let mut seen = HashSet::new();
    for excluded in &config.filter.excluded_desktops {
        if excluded.trim().is_empty() {
            warnings.push(ValidationWarning {
                field: "filter.excluded_desktops".to_string(),
                message: "Empty desktop name never matches anything.".to_string(),
            });
        } else if !seen.insert(excluded.as_str()) {
            warnings.push(ValidationWarning {
                field: "filter.excluded_desktops".to_string(),
                message: format!("Desktop '{}' is excluded more than once.", excluded),
            });
        }
    }

    warnings
}

fn validate_layout(layout: &LayoutConfig) -> Vec<ValidationWarning> {
    let mut warnings = vec![];

    if layout.gap_inner > 200 {
        warnings.push(ValidationWarning {
            field: "layout.gap_inner".to_string(),
            message: format!(
                "Inner gap {} exceeds maximum (200). Tiles may collapse.",
                layout.gap_inner
            ),
        });
    }

    if layout.gap_outer > 200 {
        warnings.push(ValidationWarning {
            field: "layout.gap_outer".to_string(),
            message: format!(
                "Outer gap {} exceeds maximum (200). Tiles may collapse.",
                layout.gap_outer
            ),
        });
    }

    if layout.max_windows > 0 && matches!(layout.engine, EngineKind::Monocle | EngineKind::Floating)
    {
        warnings.push(ValidationWarning {
            field: "layout.max_windows".to_string(),
            message: format!(
                "max_windows has no effect with the {:?} engine.",
                layout.engine
            ),
        });
    }

    warnings
}
