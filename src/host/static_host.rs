//! Snapshot-backed host implementation.

use super::{Host, Screen, VirtualDesktop};
use crate::key::{ActivityId, DesktopId, ScreenId};

/// A host whose state is whatever was last written into it.
///
/// Useful for embedders that receive compositor state as pushed snapshots
/// rather than pulling it, and as a fake in tests. The first element of each
/// dimension becomes the current selection unless changed explicitly.
#[derive(Debug, Clone)]
pub struct StaticHost {
    activities: Vec<ActivityId>,
    desktops: Vec<VirtualDesktop>,
    screens: Vec<Screen>,
    current_activity: ActivityId,
    current_desktop: VirtualDesktop,
    active_screen: Screen,
}

impl StaticHost {
    pub fn new(activity: ActivityId, desktop: VirtualDesktop, screen: Screen) -> Self {
        Self {
            activities: vec![activity.clone()],
            desktops: vec![desktop.clone()],
            screens: vec![screen.clone()],
            current_activity: activity,
            current_desktop: desktop,
            active_screen: screen,
        }
    }

    pub fn add_activity(&mut self, activity: ActivityId) {
        if !self.activities.contains(&activity) {
            self.activities.push(activity);
        }
    }

    pub fn remove_activity(&mut self, activity: &ActivityId) {
        self.activities.retain(|a| a != activity);
    }

    pub fn add_desktop(&mut self, desktop: VirtualDesktop) {
        if !self.desktops.iter().any(|d| d.id == desktop.id) {
            self.desktops.push(desktop);
        }
    }

    pub fn remove_desktop(&mut self, desktop: &DesktopId) {
        self.desktops.retain(|d| &d.id != desktop);
    }

    pub fn add_screen(&mut self, screen: Screen) {
        if !self.screens.contains(&screen) {
            self.screens.push(screen);
        }
    }

    pub fn remove_screen(&mut self, screen: &ScreenId) {
        self.screens.retain(|s| &s.id != screen);
    }

    pub fn set_current_activity(&mut self, activity: ActivityId) {
        self.current_activity = activity;
    }

    pub fn set_current_desktop(&mut self, desktop: VirtualDesktop) {
        self.current_desktop = desktop;
    }

    pub fn set_active_screen(&mut self, screen: Screen) {
        self.active_screen = screen;
    }
}

impl Host for StaticHost {
    fn activities(&self) -> Vec<ActivityId> {
        self.activities.clone()
    }

    fn desktops(&self) -> Vec<VirtualDesktop> {
        self.desktops.clone()
    }

    fn screens(&self) -> Vec<Screen> {
        self.screens.clone()
    }

    fn current_activity(&self) -> ActivityId {
        self.current_activity.clone()
    }

    fn current_desktop(&self) -> VirtualDesktop {
        self.current_desktop.clone()
    }

    fn active_screen(&self) -> Screen {
        self.active_screen.clone()
    }

    fn name(&self) -> &'static str {
        "Static"
    }
}
