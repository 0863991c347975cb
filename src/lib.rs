//! Registry of per-(activity, virtual desktop, screen) logical desktops for
//! tiling compositor plugins.
//!
//! The host compositor exposes three dimensions that grow and shrink at
//! runtime. [`DesktopRegistry`] creates one logical desktop per coordinate
//! on first use and tears down exactly the desktops whose coordinate became
//! invalid when the host reports a change.

pub mod config;
pub mod desktop;
pub mod error;
pub mod filter;
pub mod host;
pub mod key;
pub mod logging;
pub mod registry;

pub use desktop::{LogicalDesktop, ManagedDesktop};
pub use filter::DesktopFilter;
pub use host::{ClientInfo, Host, HostEvent, Screen, VirtualDesktop};
pub use key::{ActivityId, CoordinateKey, DesktopId, ScreenId};
pub use registry::DesktopRegistry;

#[cfg(test)]
pub mod test_utils;
