//! Host compositor abstraction.
//!
//! The registry never queries global compositor state. Every operation that
//! needs the host's view of activities, virtual desktops or screens takes a
//! `&dyn Host`, so adapters for a real compositor and fakes for tests plug
//! in the same way.

mod events;
mod static_host;

pub use events::{HostEvent, HostEventReceiver, HostEventSender, host_channel};
pub use static_host::StaticHost;

use std::fmt;

use crate::key::{ActivityId, DesktopId, ScreenId};

/// A virtual desktop as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VirtualDesktop {
    /// Stable identity used for keying.
    pub id: DesktopId,
    /// Human readable name, only used by filters and logs.
    pub name: String,
}

impl VirtualDesktop {
    pub fn new(id: impl Into<DesktopId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A connected output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Screen {
    /// Output name, stable while the output stays connected.
    pub id: ScreenId,
}

impl Screen {
    pub fn new(id: impl Into<ScreenId>) -> Self {
        Self { id: id.into() }
    }
}

/// What the host knows about a client's placement.
#[derive(Debug, Clone)]
pub struct ClientInfo {
    /// Activities the client is on. Empty means the host reports no
    /// specific activity (e.g. "on all activities").
    pub activities: Vec<ActivityId>,
    /// Virtual desktops the client is on. Empty means "on all desktops".
    pub desktops: Vec<VirtualDesktop>,
    /// The output the client is on.
    pub screen: Screen,
}

/// Queries the registry needs from the host compositor.
///
/// Enumerations return the authoritative current sets. Calls are made on the
/// compositor's control thread only.
pub trait Host {
    fn activities(&self) -> Vec<ActivityId>;

    fn desktops(&self) -> Vec<VirtualDesktop>;

    fn screens(&self) -> Vec<Screen>;

    fn current_activity(&self) -> ActivityId;

    fn current_desktop(&self) -> VirtualDesktop;

    /// The screen that currently has focus.
    fn active_screen(&self) -> Screen;

    /// Get the host name for logging/debugging.
    fn name(&self) -> &'static str {
        "host"
    }
}

impl fmt::Debug for dyn Host + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Host({})", self.name())
    }
}
