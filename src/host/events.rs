//! Dimension change notifications from the host.

/// Signals the host emits when one of the registry's dimensions may have
/// changed membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// An activity was created or removed.
    ActivitiesChanged,
    /// A virtual desktop was added, removed or renamed.
    DesktopsChanged,
    /// An output was plugged or unplugged.
    ScreensChanged,
    /// The compositor plugin is shutting down.
    Shutdown,
}

/// Sender half handed to the host adapter.
pub type HostEventSender = flume::Sender<HostEvent>;

/// Receiver half drained by the registry owner.
pub type HostEventReceiver = flume::Receiver<HostEvent>;

/// Create an unbounded host event channel.
pub fn host_channel() -> (HostEventSender, HostEventReceiver) {
    flume::unbounded()
}
