use crate::generation::StoryGenerator;
use crate::timeline::TimelineController;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Session record plus auto-play ticker.
    pub timeline: TimelineController,
    /// Generator over whichever `GenerativeBackend` was wired at startup.
    pub generator: StoryGenerator,
}
