//! Entry Generator — drafts new chapters and metadata through the generative backend.
//!
//! Failure policy differs per call:
//! - `generate_story` never fails: any error yields the canned fallback draft.
//! - `regenerate_metadata` and `generate_location_image` return `None`.
//!
//! Errors are logged here and never surface to callers.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::generation::prompts::{
    fill_template, CAREER_START_LINE, IMAGE_PROMPT_TEMPLATE, METADATA_PROMPT_TEMPLATE,
    STORY_PROMPT_TEMPLATE,
};
use crate::generation::schema::{metadata_schema, story_schema};
use crate::llm_client::prompts::{FIRST_PERSON_INSTRUCTION, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{call_json, GenerativeBackend, LlmError};
use crate::models::{EntryPatch, JourneyEntry, NewEntry, Theme};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A drafted chapter as returned by the model (camelCase on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryDraft {
    pub title: String,
    pub description: String,
    pub emoji: String,
    /// Requested from the model but not required by the schema.
    #[serde(default)]
    pub date_range: Option<String>,
    pub tags: Vec<String>,
    pub skills: Vec<String>,
    pub tools: Vec<String>,
    pub duties: Vec<String>,
    pub theme: Theme,
}

impl StoryDraft {
    /// Static draft used whenever generation is unavailable or fails.
    pub fn fallback(company: &str) -> Self {
        Self {
            title: format!("My Role at {company}"),
            description: "I took on a period of professional growth and new challenges, \
                working with a dedicated team to solve complex problems."
                .to_string(),
            emoji: "💼".to_string(),
            date_range: Some("2024".to_string()),
            tags: strings(&["Career", "Growth", "Work"]),
            skills: strings(&["Teamwork", "Problem Solving"]),
            tools: strings(&["Office Suite", "Communication Tools"]),
            duties: strings(&[
                "I managed key projects",
                "I collaborated with cross-functional teams",
                "I improved operational efficiency",
            ]),
            theme: Theme::new("#3b82f6", "#dbeafe", "#eff6ff", "#1e3a8a"),
        }
    }

    /// Combines the draft with the caller's role fields into an insertable entry.
    pub fn into_new_entry(self, role: &str, company: &str, location: &str) -> NewEntry {
        NewEntry {
            role: role.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            title: self.title,
            description: self.description,
            date_range: self.date_range.unwrap_or_default(),
            emoji: self.emoji,
            website_url: None,
            tags: self.tags,
            skills: self.skills,
            tools: self.tools,
            duties: self.duties,
            theme: Some(self.theme),
            image_url: None,
            ai_generated: true,
        }
    }
}

/// Regenerated classification fields for an existing chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterMetadata {
    pub emoji: String,
    pub tags: Vec<String>,
    pub skills: Vec<String>,
    pub tools: Vec<String>,
    pub duties: Vec<String>,
    pub theme: Theme,
}

impl ChapterMetadata {
    pub fn into_patch(self) -> EntryPatch {
        EntryPatch {
            emoji: Some(self.emoji),
            tags: Some(self.tags),
            skills: Some(self.skills),
            tools: Some(self.tools),
            duties: Some(self.duties),
            theme: Some(Some(self.theme)),
            ..Default::default()
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Generator
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct StoryGenerator {
    backend: Arc<dyn GenerativeBackend>,
}

impl StoryGenerator {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self { backend }
    }

    /// Drafts a new chapter. Always returns a usable draft.
    pub async fn generate_story(
        &self,
        role: &str,
        company: &str,
        location: &str,
        previous: Option<&JourneyEntry>,
        notes: &str,
    ) -> StoryDraft {
        if !self.backend.is_available() {
            warn!("No generative credential configured, using fallback draft for {company}");
            return StoryDraft::fallback(company);
        }

        let prompt = build_story_prompt(role, company, location, previous, notes);
        match call_json::<StoryDraft>(self.backend.as_ref(), &prompt, &story_schema()).await {
            Ok(draft) => {
                info!("Generated chapter draft '{}' for {company}", draft.title);
                draft
            }
            Err(e) => {
                error!("Error generating story: {e}");
                StoryDraft::fallback(company)
            }
        }
    }

    /// Re-derives emoji, tags, skills, tools, duties and theme from a chapter's text.
    pub async fn regenerate_metadata(
        &self,
        role: &str,
        company: &str,
        title: &str,
        description: &str,
    ) -> Option<ChapterMetadata> {
        if !self.backend.is_available() {
            warn!("No generative credential configured, skipping metadata regeneration");
            return None;
        }

        let prompt = fill_template(
            METADATA_PROMPT_TEMPLATE,
            &[
                ("json_only_instruction", JSON_ONLY_INSTRUCTION),
                ("role", role),
                ("company", company),
                ("title", title),
                ("description", description),
            ],
        );

        call_json::<ChapterMetadata>(self.backend.as_ref(), &prompt, &metadata_schema())
            .await
            .map_err(|e| error!("Error regenerating metadata: {e}"))
            .ok()
    }

    /// Generates an illustrative image and returns it as a `data:` URI.
    pub async fn generate_location_image(&self, company: &str, description: &str) -> Option<String> {
        if !self.backend.is_available() {
            warn!("No generative credential configured, skipping image generation");
            return None;
        }

        let prompt = fill_template(
            IMAGE_PROMPT_TEMPLATE,
            &[("company", company), ("description", description)],
        );

        match self.backend.generate_image(&prompt).await {
            Ok(image) => Some(image.to_data_uri()),
            Err(LlmError::NoImage) => {
                warn!("Image response for {company} contained no image part");
                None
            }
            Err(e) => {
                error!("Error generating image: {e}");
                None
            }
        }
    }
}

/// Fills the story template for one chapter.
fn build_story_prompt(
    role: &str,
    company: &str,
    location: &str,
    previous: Option<&JourneyEntry>,
    notes: &str,
) -> String {
    let previous_role = match previous {
        Some(prev) => format!("Previous role: {} at {}.", prev.role, prev.company),
        None => CAREER_START_LINE.to_string(),
    };

    fill_template(
        STORY_PROMPT_TEMPLATE,
        &[
            ("first_person_instruction", FIRST_PERSON_INSTRUCTION),
            ("previous_role", &previous_role),
            ("role", role),
            ("company", company),
            ("location", location),
            ("notes", notes),
        ],
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::InlineImage;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Scripted backend: replays a fixed text/image outcome and records prompts.
    struct ScriptedBackend {
        available: bool,
        text: Option<String>,
        image: Option<InlineImage>,
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        fn new(available: bool, text: Option<&str>, image: Option<InlineImage>) -> Arc<Self> {
            Arc::new(Self {
                available,
                text: text.map(str::to_string),
                image,
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn unavailable() -> Arc<Self> {
            Self::new(false, None, None)
        }

        /// Credential present but every call fails at the transport layer.
        fn failing() -> Arc<Self> {
            Self::new(true, None, None)
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GenerativeBackend for ScriptedBackend {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn generate_json(&self, prompt: &str, _schema: &Value) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.text.clone().ok_or(LlmError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            })
        }

        async fn generate_image(&self, prompt: &str) -> Result<InlineImage, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            match (&self.image, &self.text) {
                (Some(image), _) => Ok(image.clone()),
                (None, Some(_)) => Err(LlmError::NoImage),
                (None, None) => Err(LlmError::Api {
                    status: 500,
                    message: "boom".to_string(),
                }),
            }
        }
    }

    fn generator(backend: Arc<ScriptedBackend>) -> StoryGenerator {
        StoryGenerator::new(backend)
    }

    const STORY_JSON: &str = r##"{
        "title": "Scaling the Unicorn",
        "description": "I joined Acme as its fifth engineer.",
        "emoji": "🦄",
        "dateRange": "2021 - 2023",
        "tags": ["SaaS", "Growth", "B2B"],
        "skills": ["Rust", "Leadership", "Architecture"],
        "tools": ["Kubernetes", "Postgres", "Grafana"],
        "duties": ["I built the billing system", "I led a team of four", "I cut p99 latency in half"],
        "theme": {"primary": "#7c3aed", "secondary": "#ddd6fe", "background": "#f5f3ff", "text": "#4c1d95"}
    }"##;

    fn assert_is_fallback(draft: &StoryDraft) {
        assert_eq!(draft.title, "My Role at Acme");
        assert_eq!(draft.emoji, "💼");
        assert_eq!(draft.date_range.as_deref(), Some("2024"));
        assert_eq!(draft.tags, vec!["Career", "Growth", "Work"]);
        assert_eq!(draft.skills, vec!["Teamwork", "Problem Solving"]);
        assert_eq!(draft.tools, vec!["Office Suite", "Communication Tools"]);
        assert_eq!(draft.duties.len(), 3);
        assert_eq!(draft.theme.primary, "#3b82f6");
        assert_eq!(draft.theme.text, "#1e3a8a");
    }

    #[tokio::test]
    async fn test_story_falls_back_without_credential() {
        let backend = ScriptedBackend::unavailable();
        let draft = generator(backend.clone())
            .generate_story("Engineer", "Acme", "Remote", None, "notes")
            .await;
        assert_is_fallback(&draft);
        assert_eq!(backend.calls(), 0, "no network call without a credential");
    }

    #[tokio::test]
    async fn test_story_falls_back_on_transport_failure() {
        let draft = generator(ScriptedBackend::failing())
            .generate_story("Engineer", "Acme", "Remote", None, "notes")
            .await;
        assert_is_fallback(&draft);
    }

    #[tokio::test]
    async fn test_story_falls_back_on_non_json_response() {
        let backend = ScriptedBackend::new(true, Some("Sorry, I can't help with that."), None);
        let draft = generator(backend)
            .generate_story("Engineer", "Acme", "Remote", None, "notes")
            .await;
        assert_is_fallback(&draft);
    }

    #[tokio::test]
    async fn test_story_falls_back_on_schema_violation() {
        // Valid JSON but `theme` is missing.
        let backend = ScriptedBackend::new(
            true,
            Some(r#"{"title": "T", "description": "D", "emoji": "x", "tags": [], "skills": [], "tools": [], "duties": []}"#),
            None,
        );
        let draft = generator(backend)
            .generate_story("Engineer", "Acme", "Remote", None, "notes")
            .await;
        assert_is_fallback(&draft);
    }

    #[tokio::test]
    async fn test_story_parses_fenced_model_output() {
        let fenced = format!("```json\n{STORY_JSON}\n```");
        let backend = ScriptedBackend::new(true, Some(&fenced), None);
        let draft = generator(backend)
            .generate_story("Engineer", "Acme", "Remote", None, "notes")
            .await;
        assert_eq!(draft.title, "Scaling the Unicorn");
        assert_eq!(draft.date_range.as_deref(), Some("2021 - 2023"));
        assert_eq!(draft.theme.primary, "#7c3aed");
    }

    #[tokio::test]
    async fn test_story_accepts_missing_date_range() {
        let mut value: Value = serde_json::from_str(STORY_JSON).unwrap();
        value.as_object_mut().unwrap().remove("dateRange");
        let text = value.to_string();
        let backend = ScriptedBackend::new(true, Some(&text), None);
        let draft = generator(backend)
            .generate_story("Engineer", "Acme", "Remote", None, "notes")
            .await;
        assert_eq!(draft.title, "Scaling the Unicorn");
        assert_eq!(draft.date_range, None);
    }

    #[tokio::test]
    async fn test_story_prompt_mentions_previous_role() {
        let backend = ScriptedBackend::new(true, Some(STORY_JSON), None);
        let previous = NewEntry {
            role: "Intern".to_string(),
            company: "Initech".to_string(),
            ..Default::default()
        }
        .into_entry("p".to_string());

        generator(backend.clone())
            .generate_story("Engineer", "Acme", "Remote", Some(&previous), "shipped v2")
            .await;

        let prompts = backend.prompts.lock().unwrap();
        assert!(prompts[0].contains("Previous role: Intern at Initech."));
        assert!(prompts[0].contains(r#"Role: "Engineer" at "Acme" (Remote)."#));
        assert!(prompts[0].contains("shipped v2"));
        assert!(prompts[0].contains("FIRST PERSON"));
    }

    #[test]
    fn test_story_prompt_without_previous_marks_career_start() {
        let prompt = build_story_prompt("Engineer", "Acme", "Remote", None, "");
        assert!(prompt.contains(CAREER_START_LINE));
        assert!(!prompt.contains("{role}"));
    }

    #[test]
    fn test_story_prompt_keeps_braces_typed_by_user() {
        let prompt = build_story_prompt("Dev {company} {location}", "Acme", "Remote", None, "");
        assert!(prompt.contains(r#"Role: "Dev {company} {location}" at "Acme" (Remote)."#));
    }

    #[tokio::test]
    async fn test_metadata_prompt_keeps_braces_in_title() {
        let backend = ScriptedBackend::failing();
        generator(backend.clone())
            .regenerate_metadata("Engineer", "Acme", "About {description}", "Built things")
            .await;
        let prompts = backend.prompts.lock().unwrap();
        assert!(prompts[0].contains(r#"Title: "About {description}""#));
        assert!(prompts[0].contains(r#"Description: "Built things""#));
    }

    #[tokio::test]
    async fn test_metadata_returns_none_without_credential() {
        let backend = ScriptedBackend::unavailable();
        let result = generator(backend.clone())
            .regenerate_metadata("Engineer", "Acme", "Title", "Description")
            .await;
        assert!(result.is_none());
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_metadata_returns_none_on_failure() {
        let result = generator(ScriptedBackend::failing())
            .regenerate_metadata("Engineer", "Acme", "Title", "Description")
            .await;
        assert!(result.is_none(), "no canned metadata is fabricated");
    }

    #[tokio::test]
    async fn test_metadata_parses_valid_response() {
        let backend = ScriptedBackend::new(true, Some(STORY_JSON), None);
        let metadata = generator(backend)
            .regenerate_metadata("Engineer", "Acme", "Title", "Description")
            .await
            .unwrap();
        assert_eq!(metadata.emoji, "🦄");
        assert_eq!(metadata.tools, vec!["Kubernetes", "Postgres", "Grafana"]);

        let patch = metadata.into_patch();
        assert!(patch.title.is_none());
        assert_eq!(patch.emoji.as_deref(), Some("🦄"));
    }

    #[tokio::test]
    async fn test_image_returns_data_uri() {
        let image = InlineImage {
            mime_type: "image/png".to_string(),
            data: "AAAA".to_string(),
        };
        let backend = ScriptedBackend::new(true, None, Some(image));
        let uri = generator(backend.clone())
            .generate_location_image("Acme", "A rocket factory")
            .await;
        assert_eq!(uri.as_deref(), Some("data:image/png;base64,AAAA"));
        assert!(backend.prompts.lock().unwrap()[0].contains("environment of Acme"));
    }

    #[tokio::test]
    async fn test_image_failures_are_swallowed() {
        assert!(generator(ScriptedBackend::unavailable())
            .generate_location_image("Acme", "x")
            .await
            .is_none());
        assert!(generator(ScriptedBackend::failing())
            .generate_location_image("Acme", "x")
            .await
            .is_none());
        // Text-only answer: no image part.
        assert!(generator(ScriptedBackend::new(true, Some("no picture"), None))
            .generate_location_image("Acme", "x")
            .await
            .is_none());
    }

    #[test]
    fn test_draft_becomes_ai_generated_entry() {
        let entry = StoryDraft::fallback("Acme")
            .into_new_entry("Engineer", "Acme", "Remote")
            .into_entry("id".to_string());
        assert!(entry.ai_generated);
        assert_eq!(entry.role, "Engineer");
        assert_eq!(entry.date_range, "2024");
        assert_eq!(entry.theme.unwrap().primary, "#3b82f6");
    }
}
