use slashbeat_model::InputSnapshot;

/// Abstraction over hand input.
/// Implementations: HandTrackerFeed (camera), TouchMapper (touch), DeviceInput (either, by
/// control mode), AutoplayInput (scripted).
pub trait InputSource {
    /// Whether the source can produce meaningful samples yet.
    fn is_ready(&self) -> bool;

    /// Current hand state. Called once per tick.
    fn snapshot(&self) -> InputSnapshot;
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn snapshot(&self) -> InputSnapshot {
        (**self).snapshot()
    }
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn snapshot(&self) -> InputSnapshot {
        (**self).snapshot()
    }
}
