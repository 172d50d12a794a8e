// Real-time gameplay: timeline, collision, scoring and lifecycle

pub mod collision;
pub mod lifecycle;
pub mod result;
pub mod score;
pub mod simulation;
pub mod timeline;
pub mod transport;
pub mod view;

pub use collision::{CollisionResolver, NoteEvent};
pub use lifecycle::{GameStatus, GameplayStateMachine};
pub use result::{PlayResult, Rank};
pub use score::ScoreState;
pub use simulation::Simulation;
pub use timeline::NoteTimeline;
pub use transport::{ManualTransport, Transport};
pub use view::{FrameView, VisibleNote};
