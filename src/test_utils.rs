//! Test utilities and mock factories.
//!
//! This module provides common testing utilities including mock object factories
//! and test helpers. Only compiled in test builds.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::desktop::LogicalDesktop;
use crate::filter::ManageAll;
use crate::host::{ClientInfo, Screen, StaticHost, VirtualDesktop};
use crate::key::{ActivityId, DesktopId, ScreenId};
use crate::registry::DesktopRegistry;

/// Shared log of every recording desktop built by one registry.
#[derive(Debug, Default)]
pub struct DesktopLog {
    next_serial: Cell<u64>,
    destroyed: RefCell<Vec<u64>>,
}

impl DesktopLog {
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Number of desktops created so far.
    pub fn created(&self) -> u64 {
        self.next_serial.get()
    }

    /// Serials of destroyed desktops, in destruction order.
    pub fn destroyed(&self) -> Vec<u64> {
        self.destroyed.borrow().clone()
    }

    pub fn destroyed_count(&self) -> usize {
        self.destroyed.borrow().len()
    }

    /// True when no serial appears twice in the destruction log.
    pub fn each_destroyed_once(&self) -> bool {
        let mut serials = self.destroyed();
        let total = serials.len();
        serials.sort();
        serials.dedup();
        serials.len() == total
    }
}

/// Logical desktop that records its lifecycle in a [`DesktopLog`].
#[derive(Debug)]
pub struct RecordingDesktop {
    /// Unique per registry; equal serials mean the same instance.
    pub serial: u64,
    pub desktop: DesktopId,
    pub screen: ScreenId,
    destroyed: bool,
    log: Rc<DesktopLog>,
}

impl LogicalDesktop for RecordingDesktop {
    type Shared = Rc<DesktopLog>;

    fn create(desktop: &VirtualDesktop, screen: &Screen, shared: &Rc<DesktopLog>) -> Self {
        let serial = shared.next_serial.get();
        shared.next_serial.set(serial + 1);
        Self {
            serial,
            desktop: desktop.id.clone(),
            screen: screen.id.clone(),
            destroyed: false,
            log: Rc::clone(shared),
        }
    }

    fn destroy(&mut self) {
        assert!(!self.destroyed, "desktop {} destroyed twice", self.serial);
        self.destroyed = true;
        self.log.destroyed.borrow_mut().push(self.serial);
    }
}

/// Create a mock VirtualDesktop named after its id.
pub fn mock_desktop(id: &str) -> VirtualDesktop {
    VirtualDesktop::new(id, format!("Desktop {}", id))
}

/// Create a mock Screen.
pub fn mock_screen(id: &str) -> Screen {
    Screen::new(id)
}

/// Create a host with activities A/B, desktops D1/D2 and screens S1/S2.
///
/// The current selection is (A, D1, S1).
pub fn mock_host() -> StaticHost {
    let mut host = StaticHost::new("A".into(), mock_desktop("D1"), mock_screen("S1"));
    host.add_activity("B".into());
    host.add_desktop(mock_desktop("D2"));
    host.add_screen(mock_screen("S2"));
    host
}

/// Create a mock ClientInfo.
pub fn mock_client(activities: &[&str], desktops: &[&str], screen: &str) -> ClientInfo {
    ClientInfo {
        activities: activities.iter().map(|a| ActivityId::from(*a)).collect(),
        desktops: desktops.iter().map(|d| mock_desktop(d)).collect(),
        screen: mock_screen(screen),
    }
}

/// Create a registry of recording desktops that manages every desktop.
pub fn mock_registry(host: &StaticHost) -> (DesktopRegistry<RecordingDesktop>, Rc<DesktopLog>) {
    let log = DesktopLog::shared();
    let registry = DesktopRegistry::new(host, ManageAll, Rc::clone(&log));
    (registry, log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Host;

    #[test]
    fn test_mock_host() {
        let host = mock_host();
        assert_eq!(host.activities().len(), 2);
        assert_eq!(host.desktops().len(), 2);
        assert_eq!(host.screens().len(), 2);
        assert_eq!(host.current_desktop().id.as_str(), "D1");
    }

    #[test]
    fn test_mock_client() {
        let client = mock_client(&["A"], &["D1", "D2"], "S2");
        assert_eq!(client.activities.len(), 1);
        assert_eq!(client.desktops[1].name, "Desktop D2");
        assert_eq!(client.screen.id.as_str(), "S2");
    }

    #[test]
    fn test_recording_desktop_serials() {
        let log = DesktopLog::shared();
        let mut first = RecordingDesktop::create(&mock_desktop("D1"), &mock_screen("S1"), &log);
        let second = RecordingDesktop::create(&mock_desktop("D1"), &mock_screen("S1"), &log);
        assert_ne!(first.serial, second.serial);
        assert_eq!(log.created(), 2);

        first.destroy();
        assert_eq!(log.destroyed(), vec![first.serial]);
        assert!(log.each_destroyed_once());
    }
}
