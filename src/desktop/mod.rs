//! Logical desktops.
//!
//! A logical desktop is the per-coordinate unit of layout state. The registry
//! only needs to know how to build one and how to tear it down; everything
//! else about it belongs to the layout code.

mod managed;

pub use managed::{DesktopShared, ManagedDesktop};

use crate::host::{Screen, VirtualDesktop};

/// Contract between the registry and the layout state it owns.
pub trait LogicalDesktop: Sized {
    /// Collaborators shared by every desktop built by one registry
    /// (layout settings, pin policy, focus policy, ...).
    type Shared;

    /// Build the state for one coordinate. The activity is implied by the
    /// registry key and is not passed in.
    fn create(desktop: &VirtualDesktop, screen: &Screen, shared: &Self::Shared) -> Self;

    /// Release whatever the desktop holds. Called exactly once, right before
    /// the registry drops it.
    fn destroy(&mut self);
}
