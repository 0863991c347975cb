//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Which virtual desktops are managed.
    pub filter: FilterConfig,
    /// Defaults handed to every logical desktop.
    pub layout: LayoutConfig,
    /// Focus-passing behaviour shared by every logical desktop.
    pub focus: FocusConfig,
}

/// Desktop filter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Virtual desktops left alone, matched by name or id.
    pub excluded_desktops: Vec<String>,
}

/// Layout engine selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngineKind {
    #[default]
    Btree,
    Half,
    ThreeColumn,
    Monocle,
    Floating,
}

/// Layout settings for newly created logical desktops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Engine used by a freshly created desktop.
    pub engine: EngineKind,
    /// Gap between tiles in pixels.
    pub gap_inner: u32,
    /// Gap between tiles and the screen edge in pixels.
    pub gap_outer: u32,
    /// Maximum tiled windows per desktop, 0 for unlimited.
    pub max_windows: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::Btree,
            gap_inner: 8,
            gap_outer: 8,
            max_windows: 0,
        }
    }
}

/// Focus-passing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Focus a neighbouring tile when the focused window closes.
    pub pass_focus_on_close: bool,
    /// Move focus along with windows when the layout is rearranged.
    pub focus_follows_layout: bool,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            pass_focus_on_close: true,
            focus_follows_layout: false,
        }
    }
}
