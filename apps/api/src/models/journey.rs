use serde::{Deserialize, Deserializer, Serialize};

/// Four-colour palette applied to the view while an entry is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
}

impl Theme {
    pub fn new(primary: &str, secondary: &str, background: &str, text: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            background: background.to_string(),
            text: text.to_string(),
        }
    }
}

/// One chronological chapter of the timeline.
///
/// `id` is assigned by the store and never changes. Vector fields keep
/// insertion order, which is also their display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyEntry {
    pub id: String,
    pub role: String,
    pub company: String,
    pub location: String,
    pub title: String,
    pub description: String,
    pub date_range: String,
    pub emoji: String,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub duties: Vec<String>,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub ai_generated: bool,
}

/// Caller-supplied fields for a new entry. The key is assigned on insert.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewEntry {
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date_range: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub duties: Vec<String>,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub ai_generated: bool,
}

impl NewEntry {
    pub fn into_entry(self, id: String) -> JourneyEntry {
        JourneyEntry {
            id,
            role: self.role,
            company: self.company,
            location: self.location,
            title: self.title,
            description: self.description,
            date_range: self.date_range,
            emoji: self.emoji,
            website_url: self.website_url,
            tags: self.tags,
            skills: self.skills,
            tools: self.tools,
            duties: self.duties,
            theme: self.theme,
            image_url: self.image_url,
            ai_generated: self.ai_generated,
        }
    }
}

/// Partial edit of an existing entry. Absent fields are left untouched.
///
/// The nullable fields take `Option<Option<_>>`: an explicit `null` clears
/// the stored value, an absent key keeps it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryPatch {
    pub role: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date_range: Option<String>,
    pub emoji: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub website_url: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub tools: Option<Vec<String>>,
    pub duties: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub theme: Option<Option<Theme>>,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: Option<Option<String>>,
}

impl EntryPatch {
    pub fn apply_to(self, entry: &mut JourneyEntry) {
        if let Some(v) = self.role {
            entry.role = v;
        }
        if let Some(v) = self.company {
            entry.company = v;
        }
        if let Some(v) = self.location {
            entry.location = v;
        }
        if let Some(v) = self.title {
            entry.title = v;
        }
        if let Some(v) = self.description {
            entry.description = v;
        }
        if let Some(v) = self.date_range {
            entry.date_range = v;
        }
        if let Some(v) = self.emoji {
            entry.emoji = v;
        }
        if let Some(v) = self.website_url {
            entry.website_url = v;
        }
        if let Some(v) = self.tags {
            entry.tags = v;
        }
        if let Some(v) = self.skills {
            entry.skills = v;
        }
        if let Some(v) = self.tools {
            entry.tools = v;
        }
        if let Some(v) = self.duties {
            entry.duties = v;
        }
        if let Some(v) = self.theme {
            entry.theme = v;
        }
        if let Some(v) = self.image_url {
            entry.image_url = v;
        }
    }
}

/// Maps a present key to `Some`, so `null` arrives as `Some(None)`.
fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Header shown at the top of the main view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_deserializes_with_optional_fields_missing() {
        let json = serde_json::json!({
            "id": "abc",
            "role": "Engineer",
            "company": "Acme",
            "location": "Remote",
            "title": "Start",
            "description": "I built things.",
            "date_range": "2024",
            "emoji": "🚀"
        });
        let entry: JourneyEntry = serde_json::from_value(json).unwrap();
        assert!(entry.tags.is_empty());
        assert!(entry.theme.is_none());
        assert!(!entry.ai_generated);
    }

    #[test]
    fn test_patch_only_touches_present_fields() {
        let mut entry = NewEntry {
            role: "Clerk".to_string(),
            company: "Acme".to_string(),
            duties: vec!["I filed invoices".to_string()],
            ..Default::default()
        }
        .into_entry("k".to_string());

        EntryPatch {
            role: Some("Lead".to_string()),
            ..Default::default()
        }
        .apply_to(&mut entry);

        assert_eq!(entry.role, "Lead");
        assert_eq!(entry.company, "Acme");
        assert_eq!(entry.duties, vec!["I filed invoices".to_string()]);
        assert_eq!(entry.id, "k");
    }

    #[test]
    fn test_patch_null_clears_nullable_fields() {
        let mut entry = NewEntry {
            role: "Clerk".to_string(),
            company: "Acme".to_string(),
            website_url: Some("https://acme.example".to_string()),
            theme: Some(Theme::new("#000000", "#111111", "#222222", "#333333")),
            image_url: Some("data:image/png;base64,AAAA".to_string()),
            ..Default::default()
        }
        .into_entry("k".to_string());

        let patch: EntryPatch =
            serde_json::from_value(serde_json::json!({"theme": null, "image_url": null})).unwrap();
        assert_eq!(patch.theme, Some(None));
        assert!(patch.website_url.is_none());
        patch.apply_to(&mut entry);

        assert!(entry.theme.is_none());
        assert!(entry.image_url.is_none());
        assert_eq!(entry.website_url.as_deref(), Some("https://acme.example"));
    }

    #[test]
    fn test_patch_sets_nullable_field() {
        let patch: EntryPatch =
            serde_json::from_value(serde_json::json!({"website_url": "https://x.example"})).unwrap();
        assert_eq!(patch.website_url, Some(Some("https://x.example".to_string())));
    }
}
