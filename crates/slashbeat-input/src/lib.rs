// Input collaborators that produce per-tick hand snapshots

mod autoplay;
mod control_mode;
mod device;
mod source;
mod touch;
mod tracker;

pub use autoplay::AutoplayInput;
pub use control_mode::ControlMode;
pub use device::DeviceInput;
pub use source::InputSource;
pub use touch::{TouchMapper, TouchPoint};
pub use tracker::HandTrackerFeed;
