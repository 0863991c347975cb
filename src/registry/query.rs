//! Read-only iteration over existing logical desktops.
//!
//! Nothing in here creates entries. Every iterator borrows the registry, so
//! it cannot outlive the next mutating call; to observe changes, call the
//! method again.

use std::collections::HashMap;
use std::iter::FusedIterator;

use super::DesktopRegistry;
use crate::desktop::LogicalDesktop;
use crate::host::{ClientInfo, Host};
use crate::key::{ActivityId, CoordinateKey, DesktopId, ScreenId};

impl<D: LogicalDesktop> DesktopRegistry<D> {
    /// Every materialized desktop, in no particular order.
    pub fn all_desktops(&self) -> impl Iterator<Item = &D> {
        self.entries.values()
    }

    /// Existing desktops for the host's current activity and desktop, one
    /// per known screen at most.
    pub fn desktops_on_current_selection(&self, host: &dyn Host) -> CoordinateMatches<'_, D> {
        let activity = host.current_activity();
        let desktop = host.current_desktop();
        self.desktops_matching(&[activity], &[desktop.id])
    }

    /// Existing desktops on any of the client's activities and desktops.
    ///
    /// Unlike [`DesktopRegistry::resolve_for_client`] this handles clients
    /// spread over several activities or desktops; an empty list on the
    /// client matches every known value.
    pub fn desktops_for_client(&self, client: &ClientInfo) -> CoordinateMatches<'_, D> {
        let desktops: Vec<DesktopId> = client.desktops.iter().map(|d| d.id.clone()).collect();
        self.desktops_matching(&client.activities, &desktops)
    }

    /// Existing desktops on the given activities and desktops, across every
    /// known screen. An empty slice matches every known value of that
    /// dimension.
    pub fn desktops_matching(
        &self,
        activities: &[ActivityId],
        desktops: &[DesktopId],
    ) -> CoordinateMatches<'_, D> {
        let activities = expand(activities, || self.known_activities.iter().cloned().collect());
        let desktops = expand(desktops, || self.known_desktops.iter().cloned().collect());
        let mut screens: Vec<ScreenId> = self.known_screens.iter().cloned().collect();
        screens.sort();

        CoordinateMatches::new(&self.entries, activities, desktops, screens)
    }
}

fn expand<T: Clone + Ord>(requested: &[T], all: impl FnOnce() -> Vec<T>) -> Vec<T> {
    let mut values = if requested.is_empty() {
        all()
    } else {
        requested.to_vec()
    };
    values.sort();
    values.dedup();
    values
}

/// Lazily walks a product of activities, desktops and screens, yielding the
/// desktops that exist. Ordered by activity, then desktop, then screen.
pub struct CoordinateMatches<'a, D> {
    entries: &'a HashMap<CoordinateKey, D>,
    activities: Vec<ActivityId>,
    desktops: Vec<DesktopId>,
    screens: Vec<ScreenId>,
    cursor: usize,
}

impl<'a, D> CoordinateMatches<'a, D> {
    fn new(
        entries: &'a HashMap<CoordinateKey, D>,
        activities: Vec<ActivityId>,
        desktops: Vec<DesktopId>,
        screens: Vec<ScreenId>,
    ) -> Self {
        Self {
            entries,
            activities,
            desktops,
            screens,
            cursor: 0,
        }
    }

    fn total(&self) -> usize {
        self.activities.len() * self.desktops.len() * self.screens.len()
    }

    fn key_at(&self, index: usize) -> CoordinateKey {
        let per_activity = self.desktops.len() * self.screens.len();
        let activity = &self.activities[index / per_activity];
        let desktop = &self.desktops[(index / self.screens.len()) % self.desktops.len()];
        let screen = &self.screens[index % self.screens.len()];
        CoordinateKey::make(activity, desktop, screen)
    }
}

impl<'a, D> Iterator for CoordinateMatches<'a, D> {
    type Item = &'a D;

    fn next(&mut self) -> Option<&'a D> {
        let total = self.total();
        while self.cursor < total {
            let key = self.key_at(self.cursor);
            self.cursor += 1;
            if let Some(desktop) = self.entries.get(&key) {
                return Some(desktop);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.cursor);
        (0, Some(remaining.min(self.entries.len())))
    }
}

impl<D> FusedIterator for CoordinateMatches<'_, D> {}

#[cfg(test)]
mod tests {
    use crate::key::{ActivityId, DesktopId};
    use crate::registry::DesktopRegistry;
    use crate::test_utils::{
        RecordingDesktop, mock_client, mock_desktop, mock_host, mock_registry, mock_screen,
    };

    fn resolve(registry: &mut DesktopRegistry<RecordingDesktop>, a: &str, d: &str, s: &str) -> u64 {
        registry
            .resolve(&a.into(), &mock_desktop(d), &mock_screen(s))
            .unwrap()
            .serial
    }

    fn serials<'a>(desktops: impl Iterator<Item = &'a RecordingDesktop>) -> Vec<u64> {
        let mut serials: Vec<u64> = desktops.map(|d| d.serial).collect();
        serials.sort();
        serials
    }

    #[test]
    fn test_all_desktops() {
        let host = mock_host();
        let (mut registry, _log) = mock_registry(&host);
        assert_eq!(registry.all_desktops().count(), 0);

        let a = resolve(&mut registry, "A", "D1", "S1");
        let b = resolve(&mut registry, "B", "D2", "S2");
        assert_eq!(serials(registry.all_desktops()), vec![a, b]);
    }

    #[test]
    fn test_current_selection_skips_missing_and_never_creates() {
        let host = mock_host();
        let (mut registry, log) = mock_registry(&host);
        let on_s2 = resolve(&mut registry, "A", "D1", "S2");
        resolve(&mut registry, "A", "D2", "S1");
        resolve(&mut registry, "B", "D1", "S1");

        let found = serials(registry.desktops_on_current_selection(&host));
        assert_eq!(found, vec![on_s2]);
        assert_eq!(registry.len(), 3);
        assert_eq!(log.created(), 3);
    }

    #[test]
    fn test_current_selection_covers_every_screen() {
        let host = mock_host();
        let (mut registry, _log) = mock_registry(&host);
        let s1 = resolve(&mut registry, "A", "D1", "S1");
        let s2 = resolve(&mut registry, "A", "D1", "S2");

        let found: Vec<u64> = registry
            .desktops_on_current_selection(&host)
            .map(|d| d.serial)
            .collect();
        // Screens are walked in sorted order.
        assert_eq!(found, vec![s1, s2]);
    }

    #[test]
    fn test_matching_empty_means_all() {
        let host = mock_host();
        let (mut registry, _log) = mock_registry(&host);
        let mut all = Vec::new();
        for a in ["A", "B"] {
            for d in ["D1", "D2"] {
                all.push(resolve(&mut registry, a, d, "S1"));
            }
        }
        all.sort();

        assert_eq!(serials(registry.desktops_matching(&[], &[])), all);

        let only_b = registry.desktops_matching(&[ActivityId::from("B")], &[]).count();
        assert_eq!(only_b, 2);

        let only_d2 = registry.desktops_matching(&[], &[DesktopId::from("D2")]).count();
        assert_eq!(only_d2, 2);
    }

    #[test]
    fn test_matching_unknown_values_yield_nothing() {
        let host = mock_host();
        let (mut registry, log) = mock_registry(&host);
        resolve(&mut registry, "A", "D1", "S1");

        let found = registry
            .desktops_matching(&[ActivityId::from("Z")], &[DesktopId::from("D9")])
            .count();
        assert_eq!(found, 0);
        assert_eq!(registry.len(), 1);
        assert_eq!(log.created(), 1);
    }

    #[test]
    fn test_matching_deduplicates_requests() {
        let host = mock_host();
        let (mut registry, _log) = mock_registry(&host);
        resolve(&mut registry, "A", "D1", "S1");

        let found = registry
            .desktops_matching(
                &[ActivityId::from("A"), ActivityId::from("A")],
                &[DesktopId::from("D1"), DesktopId::from("D1")],
            )
            .count();
        assert_eq!(found, 1);
    }

    #[test]
    fn test_desktops_for_multi_desktop_client() {
        let host = mock_host();
        let (mut registry, _log) = mock_registry(&host);
        let d1 = resolve(&mut registry, "A", "D1", "S1");
        let d2 = resolve(&mut registry, "A", "D2", "S2");
        resolve(&mut registry, "B", "D1", "S1");

        let client = mock_client(&["A"], &["D1", "D2"], "S1");
        assert_eq!(serials(registry.desktops_for_client(&client)), vec![d1, d2]);
    }

    #[test]
    fn test_desktops_for_client_on_all_activities() {
        let host = mock_host();
        let (mut registry, _log) = mock_registry(&host);
        let a = resolve(&mut registry, "A", "D1", "S1");
        let b = resolve(&mut registry, "B", "D1", "S2");
        resolve(&mut registry, "B", "D2", "S2");

        let client = mock_client(&[], &["D1"], "S1");
        assert_eq!(serials(registry.desktops_for_client(&client)), vec![a, b]);
    }

    #[test]
    fn test_matches_are_restartable() {
        let host = mock_host();
        let (mut registry, _log) = mock_registry(&host);
        resolve(&mut registry, "A", "D1", "S1");

        let mut matches = registry.desktops_matching(&[], &[]);
        assert!(matches.next().is_some());
        assert!(matches.next().is_none());
        assert!(matches.next().is_none());

        assert_eq!(registry.desktops_matching(&[], &[]).count(), 1);
    }
}
