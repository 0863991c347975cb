//! Virtual desktop filtering.
//!
//! A filter decides whether a virtual desktop is managed at all. The registry
//! treats a rejected desktop as if its coordinates did not exist.

use std::collections::HashSet;

use crate::config::FilterConfig;
use crate::host::VirtualDesktop;

/// Predicate consulted before every registry lookup.
pub trait DesktopFilter {
    fn should_manage(&self, desktop: &VirtualDesktop) -> bool;
}

impl<F> DesktopFilter for F
where
    F: Fn(&VirtualDesktop) -> bool,
{
    fn should_manage(&self, desktop: &VirtualDesktop) -> bool {
        self(desktop)
    }
}

/// Manages every desktop.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManageAll;

impl DesktopFilter for ManageAll {
    fn should_manage(&self, _desktop: &VirtualDesktop) -> bool {
        true
    }
}

/// Skips desktops whose name or id appears in the configured exclusion list.
#[derive(Debug, Clone, Default)]
pub struct ConfigDesktopFilter {
    excluded: HashSet<String>,
}

impl ConfigDesktopFilter {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            excluded: config
                .excluded_desktops
                .iter()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }
}

impl DesktopFilter for ConfigDesktopFilter {
    fn should_manage(&self, desktop: &VirtualDesktop) -> bool {
        !self.excluded.contains(desktop.name.as_str())
            && !self.excluded.contains(desktop.id.as_str())
    }
}
