// AI-assisted entry generation: chapter drafts, metadata regeneration and
// location images. All model calls go through llm_client::GenerativeBackend.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod schema;

pub use generator::{StoryDraft, StoryGenerator};
