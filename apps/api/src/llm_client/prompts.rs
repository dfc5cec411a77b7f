// Prompt fragments shared by every generation prompt.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Voice used for every narrative the model writes about the user.
pub const FIRST_PERSON_INSTRUCTION: &str = r#"CRITICAL INSTRUCTION: Write in the FIRST PERSON ("I", "My").
The user is narrating their story to a recruiter or hiring manager.
Tone: Professional, confident, yet conversational and storytelling-driven."#;

/// Closing line for prompts whose response is schema-constrained.
pub const JSON_ONLY_INSTRUCTION: &str = "Return JSON only.";
