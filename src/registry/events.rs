//! Dispatching host notifications to the registry.

use tracing::{debug, info};

use super::DesktopRegistry;
use crate::desktop::LogicalDesktop;
use crate::host::{Host, HostEvent, HostEventReceiver};

impl<D: LogicalDesktop> DesktopRegistry<D> {
    /// Apply one host notification.
    ///
    /// Returns `false` once the registry has been torn down by
    /// [`HostEvent::Shutdown`].
    pub fn handle_event(&mut self, host: &dyn Host, event: HostEvent) -> bool {
        debug!(?event, "Handling host event");
        match event {
            HostEvent::ActivitiesChanged => {
                self.reconcile_activities(host);
            }
            HostEvent::DesktopsChanged => {
                self.reconcile_desktops(host);
            }
            HostEvent::ScreensChanged => {
                self.reconcile_screens(host);
            }
            HostEvent::Shutdown => {
                info!("Host shutting down");
                self.teardown();
                return false;
            }
        }
        true
    }

    /// Process every pending event without blocking.
    ///
    /// Stops after a [`HostEvent::Shutdown`], leaving later events queued.
    /// Returns the number of events handled.
    pub fn drain_events(&mut self, host: &dyn Host, events: &HostEventReceiver) -> usize {
        let mut handled = 0;
        for event in events.try_iter() {
            handled += 1;
            if !self.handle_event(host, event) {
                break;
            }
        }
        handled
    }
}
