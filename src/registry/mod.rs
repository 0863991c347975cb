//! Registry of logical desktops keyed by (activity, desktop, screen).
//!
//! Entries are created lazily by the `resolve*` family and destroyed either
//! by reconciliation, when the host drops an activity, desktop or screen, or
//! by [`DesktopRegistry::teardown`].

mod events;
mod query;
mod reconcile;

pub use query::CoordinateMatches;

use std::collections::{HashMap, HashSet, hash_map::Entry};
use std::fmt;

use tracing::{debug, info, trace};

use crate::config::AppConfig;
use crate::desktop::{DesktopShared, LogicalDesktop, ManagedDesktop};
use crate::filter::{ConfigDesktopFilter, DesktopFilter};
use crate::host::{ClientInfo, Host, Screen, VirtualDesktop};
use crate::key::{ActivityId, CoordinateKey, DesktopId, ScreenId};

/// Owns every logical desktop and the last observed host dimensions.
pub struct DesktopRegistry<D: LogicalDesktop> {
    entries: HashMap<CoordinateKey, D>,
    known_activities: HashSet<ActivityId>,
    known_desktops: HashSet<DesktopId>,
    known_screens: HashSet<ScreenId>,
    filter: Box<dyn DesktopFilter>,
    shared: D::Shared,
}

impl<D: LogicalDesktop> DesktopRegistry<D> {
    /// Create an empty registry, snapshotting the host's current dimensions.
    pub fn new(host: &dyn Host, filter: impl DesktopFilter + 'static, shared: D::Shared) -> Self {
        let registry = Self {
            entries: HashMap::new(),
            known_activities: host.activities().into_iter().collect(),
            known_desktops: host.desktops().into_iter().map(|d| d.id).collect(),
            known_screens: host.screens().into_iter().map(|s| s.id).collect(),
            filter: Box::new(filter),
            shared,
        };
        debug!(
            host = host.name(),
            activities = registry.known_activities.len(),
            desktops = registry.known_desktops.len(),
            screens = registry.known_screens.len(),
            "Created desktop registry"
        );
        registry
    }

    /// Collaborators handed to every newly created desktop.
    pub fn shared(&self) -> &D::Shared {
        &self.shared
    }

    /// Look up the desktop for a coordinate, creating it on first use.
    ///
    /// Returns `None` when the filter rejects `desktop`; in that case nothing
    /// is created.
    pub fn resolve(
        &mut self,
        activity: &ActivityId,
        desktop: &VirtualDesktop,
        screen: &Screen,
    ) -> Option<&mut D> {
        if !self.filter.should_manage(desktop) {
            trace!(desktop = %desktop.name, "Desktop is not managed");
            return None;
        }

        let key = CoordinateKey::make(activity, &desktop.id, &screen.id);
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Some(entry.into_mut()),
            Entry::Vacant(entry) => {
                debug!(key = %entry.key(), "Creating logical desktop");
                // Keep the snapshots covering every materialized coordinate so a
                // value added without a reconciliation call is still cleaned up.
                self.known_activities.insert(activity.clone());
                self.known_desktops.insert(desktop.id.clone());
                self.known_screens.insert(screen.id.clone());
                let created = D::create(desktop, screen, &self.shared);
                Some(entry.insert(created))
            }
        }
    }

    /// Desktop for the host's current activity, desktop and active screen.
    pub fn resolve_current(&mut self, host: &dyn Host) -> Option<&mut D> {
        let activity = host.current_activity();
        let desktop = host.current_desktop();
        let screen = host.active_screen();
        self.resolve(&activity, &desktop, &screen)
    }

    /// Desktop for the host's current activity on an explicit desktop and screen.
    pub fn resolve_current_activity(
        &mut self,
        host: &dyn Host,
        desktop: &VirtualDesktop,
        screen: &Screen,
    ) -> Option<&mut D> {
        let activity = host.current_activity();
        self.resolve(&activity, desktop, screen)
    }

    /// Desktop a client lives on.
    ///
    /// Only clients on exactly one activity and exactly one virtual desktop
    /// resolve. The host cannot tell which screen region a client spanning
    /// several desktops or activities belongs to, so those return `None`;
    /// use [`DesktopRegistry::desktops_for_client`] for them instead.
    pub fn resolve_for_client(&mut self, client: &ClientInfo) -> Option<&mut D> {
        match (client.activities.as_slice(), client.desktops.as_slice()) {
            ([activity], [desktop]) => self.resolve(activity, desktop, &client.screen),
            (activities, desktops) => {
                trace!(
                    activities = activities.len(),
                    desktops = desktops.len(),
                    "Client is not on a single coordinate"
                );
                None
            }
        }
    }

    /// Destroy every remaining desktop and empty the registry.
    pub fn teardown(&mut self) {
        if self.entries.is_empty() {
            return;
        }

        info!(count = self.entries.len(), "Tearing down desktop registry");
        for desktop in self.entries.values_mut() {
            desktop.destroy();
        }
        self.entries.clear();
    }

    /// Number of materialized desktops.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &CoordinateKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Existing desktop for a key. Never creates.
    pub fn get(&self, key: &CoordinateKey) -> Option<&D> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &CoordinateKey) -> Option<&mut D> {
        self.entries.get_mut(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &CoordinateKey> {
        self.entries.keys()
    }

    pub fn known_activities(&self) -> impl Iterator<Item = &ActivityId> {
        self.known_activities.iter()
    }

    pub fn known_desktops(&self) -> impl Iterator<Item = &DesktopId> {
        self.known_desktops.iter()
    }

    pub fn known_screens(&self) -> impl Iterator<Item = &ScreenId> {
        self.known_screens.iter()
    }
}

impl DesktopRegistry<ManagedDesktop> {
    /// Registry of [`ManagedDesktop`]s filtered and configured from `config`.
    pub fn from_config(host: &dyn Host, config: &AppConfig) -> Self {
        Self::new(
            host,
            ConfigDesktopFilter::new(&config.filter),
            DesktopShared::from_config(config),
        )
    }
}

impl<D: LogicalDesktop> Drop for DesktopRegistry<D> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<D: LogicalDesktop> fmt::Debug for DesktopRegistry<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesktopRegistry")
            .field("entries", &self.entries.len())
            .field("known_activities", &self.known_activities.len())
            .field("known_desktops", &self.known_desktops.len())
            .field("known_screens", &self.known_screens.len())
            .finish()
    }
}

/// Destroy and remove one entry. Absent keys are skipped.
fn destroy_entry<D: LogicalDesktop>(
    entries: &mut HashMap<CoordinateKey, D>,
    key: &CoordinateKey,
) -> bool {
    let Some(desktop) = entries.get_mut(key) else {
        return false;
    };
    debug!(%key, "Destroying logical desktop");
    desktop.destroy();
    entries.remove(key);
    true
}
