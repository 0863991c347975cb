//! Coordinate identity types.
//!
//! A logical desktop is addressed by the triple (activity, virtual desktop,
//! screen). Each component is a stable identity string taken from the host,
//! never an object address, so two keys built at different times for the
//! same coordinate compare equal.

use std::fmt;
use std::sync::Arc;

macro_rules! identity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(id: impl Into<Arc<str>>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self::new(id)
            }
        }
    };
}

identity! {
    /// Activity identifier (a UUID on KDE Plasma).
    ActivityId
}

identity! {
    /// Virtual desktop identifier. Stable for the lifetime of the host.
    DesktopId
}

identity! {
    /// Screen identifier, the output name (e.g. `DP-1`).
    ScreenId
}

/// Unique, hashable identifier of one (activity, desktop, screen) coordinate.
///
/// Cloning a key only bumps reference counts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoordinateKey {
    activity: ActivityId,
    desktop: DesktopId,
    screen: ScreenId,
}

impl CoordinateKey {
    pub fn make(activity: &ActivityId, desktop: &DesktopId, screen: &ScreenId) -> Self {
        Self {
            activity: activity.clone(),
            desktop: desktop.clone(),
            screen: screen.clone(),
        }
    }

    pub fn activity(&self) -> &ActivityId {
        &self.activity
    }

    pub fn desktop(&self) -> &DesktopId {
        &self.desktop
    }

    pub fn screen(&self) -> &ScreenId {
        &self.screen
    }
}

impl fmt::Display for CoordinateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.activity, self.desktop, self.screen)
    }
}
