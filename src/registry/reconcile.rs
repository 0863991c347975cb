//! Reconciling the registry against shrinking host dimensions.
//!
//! Each pass diffs one cached snapshot against the host's current set and
//! destroys every entry built from a value that disappeared. Candidate keys
//! come from the cross product of the removed values with the other two
//! snapshots. The passes touch disjoint sets of keys, so their order does
//! not matter. The desktop pass also drops desktops the filter no longer
//! accepts, since names can change while ids stay put.

use std::collections::HashSet;

use tracing::{debug, info};

use super::{DesktopRegistry, destroy_entry};
use crate::desktop::LogicalDesktop;
use crate::host::Host;
use crate::key::{ActivityId, CoordinateKey, DesktopId, ScreenId};

impl<D: LogicalDesktop> DesktopRegistry<D> {
    /// Drop desktops of activities the host no longer has.
    ///
    /// Returns the number of destroyed desktops.
    pub fn reconcile_activities(&mut self, host: &dyn Host) -> usize {
        let current: HashSet<ActivityId> = host.activities().into_iter().collect();
        let removed: Vec<ActivityId> = self.known_activities.difference(&current).cloned().collect();

        let mut destroyed = 0;
        for activity in &removed {
            for desktop in &self.known_desktops {
                for screen in &self.known_screens {
                    let key = CoordinateKey::make(activity, desktop, screen);
                    destroyed += usize::from(destroy_entry(&mut self.entries, &key));
                }
            }
        }

        self.known_activities = current;
        log_pass("activities", removed.len(), destroyed);
        destroyed
    }

    /// Drop desktops of virtual desktops the host no longer has, and of
    /// desktops the filter rejects now (e.g. after a rename).
    ///
    /// Returns the number of destroyed desktops.
    pub fn reconcile_desktops(&mut self, host: &dyn Host) -> usize {
        let host_desktops = host.desktops();
        let rejected: Vec<DesktopId> = host_desktops
            .iter()
            .filter(|desktop| !self.filter.should_manage(desktop))
            .map(|desktop| desktop.id.clone())
            .collect();
        let current: HashSet<DesktopId> = host_desktops.into_iter().map(|d| d.id).collect();
        let removed: Vec<DesktopId> = self.known_desktops.difference(&current).cloned().collect();

        let mut destroyed = 0;
        for desktop in removed.iter().chain(&rejected) {
            for activity in &self.known_activities {
                for screen in &self.known_screens {
                    let key = CoordinateKey::make(activity, desktop, screen);
                    destroyed += usize::from(destroy_entry(&mut self.entries, &key));
                }
            }
        }

        self.known_desktops = current;
        if !rejected.is_empty() {
            debug!(count = rejected.len(), "Purged desktops rejected by the filter");
        }
        log_pass("desktops", removed.len(), destroyed);
        destroyed
    }

    /// Drop desktops of screens that were disconnected.
    ///
    /// Returns the number of destroyed desktops.
    pub fn reconcile_screens(&mut self, host: &dyn Host) -> usize {
        let current: HashSet<ScreenId> = host.screens().into_iter().map(|s| s.id).collect();
        let removed: Vec<ScreenId> = self.known_screens.difference(&current).cloned().collect();

        let mut destroyed = 0;
        for screen in &removed {
            for activity in &self.known_activities {
                for desktop in &self.known_desktops {
                    let key = CoordinateKey::make(activity, desktop, screen);
                    destroyed += usize::from(destroy_entry(&mut self.entries, &key));
                }
            }
        }

        self.known_screens = current;
        log_pass("screens", removed.len(), destroyed);
        destroyed
    }

    /// Run all three passes.
    pub fn reconcile_all(&mut self, host: &dyn Host) -> usize {
        self.reconcile_activities(host) + self.reconcile_desktops(host) + self.reconcile_screens(host)
    }
}

fn log_pass(dimension: &'static str, removed: usize, destroyed: usize) {
    if removed == 0 {
        debug!(dimension, "Nothing removed");
    } else {
        info!(dimension, removed, destroyed, "Reconciled removed values");
    }
}
