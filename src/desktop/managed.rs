//! Default logical desktop backed by the configured layout settings.

use std::sync::Arc;

use tracing::debug;

use super::LogicalDesktop;
use crate::config::{AppConfig, EngineKind, FocusConfig, LayoutConfig};
use crate::host::{Screen, VirtualDesktop};

/// Settings shared by every [`ManagedDesktop`] of a registry.
#[derive(Debug, Clone, Default)]
pub struct DesktopShared {
    pub layout: Arc<LayoutConfig>,
    pub focus: Arc<FocusConfig>,
}

impl DesktopShared {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            layout: Arc::new(config.layout.clone()),
            focus: Arc::new(config.focus.clone()),
        }
    }
}

/// Layout state for one coordinate.
#[derive(Debug)]
pub struct ManagedDesktop {
    desktop: VirtualDesktop,
    screen: Screen,
    engine: EngineKind,
    layout: Arc<LayoutConfig>,
    focus: Arc<FocusConfig>,
    destroyed: bool,
}

impl ManagedDesktop {
    pub fn desktop(&self) -> &VirtualDesktop {
        &self.desktop
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The engine currently arranging this desktop.
    pub fn engine(&self) -> EngineKind {
        self.engine
    }

    /// Switch engines for this desktop only.
    pub fn set_engine(&mut self, engine: EngineKind) {
        self.engine = engine;
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn focus(&self) -> &FocusConfig {
        &self.focus
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl LogicalDesktop for ManagedDesktop {
    type Shared = DesktopShared;

    fn create(desktop: &VirtualDesktop, screen: &Screen, shared: &DesktopShared) -> Self {
        Self {
            desktop: desktop.clone(),
            screen: screen.clone(),
            engine: shared.layout.engine,
            layout: Arc::clone(&shared.layout),
            focus: Arc::clone(&shared.focus),
            destroyed: false,
        }
    }

    fn destroy(&mut self) {
        debug_assert!(!self.destroyed, "logical desktop destroyed twice");
        debug!(desktop = %self.desktop.name, screen = %self.screen.id, "Releasing desktop layout");
        self.destroyed = true;
    }
}
