// Timeline core: the session record (entries + active-entry state machine),
// the auto-play driver and the controller that serialises access to both.

pub mod autoplay;
pub mod controller;
pub mod handlers;
pub mod seed;
pub mod session;

pub use controller::TimelineController;
pub use session::{Action, Session, SessionError, SessionSnapshot};
