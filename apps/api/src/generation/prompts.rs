// Prompt templates for the entry generator.
// Reuses cross-cutting fragments from llm_client::prompts.

/// New-chapter prompt. Replace: {first_person_instruction}, {role}, {company},
/// {location}, {previous_role}, {notes}
pub const STORY_PROMPT_TEMPLATE: &str = r#"You are an expert Career Coach and Resume Writer helping a user map their professional journey.

{first_person_instruction}

Context:
Role: "{role}" at "{company}" ({location}).
{previous_role}
User Notes: "{notes}".

Task:
1. Write a First-Person Narrative Description (3-4 sentences). Start with a hook. Explain what I built, led, or learned.
2. Extract 3-4 "Key Competencies" (Soft/Hard skills).
3. Extract 3-4 "Tools & Technologies" used.
4. Write 3 distinct "Key Duties/Achievements" as bullet points (Use active verbs: "I spearheaded...", "I developed...").
5. Design a COLOR THEME (Hex codes) matching the brand/industry.

Return JSON:
- title: A catchy chapter title (e.g., "Scaling the Unicorn", "Foundations of Design").
- description: The first-person narrative.
- emoji: Representative emoji.
- dateRange: Estimated year range.
- tags: 3 industry keywords.
- skills: 3-4 skills.
- tools: 3-4 tools.
- duties: 3 concise bullet points (first person).
- theme: Object with 'primary', 'secondary', 'background', 'text'."#;

/// Used for {previous_role} when there is no earlier chapter.
pub const CAREER_START_LINE: &str = "This was the beginning of my career.";

/// Metadata prompt for an existing chapter. Replace: {role}, {company},
/// {title}, {description}, {json_only_instruction}
pub const METADATA_PROMPT_TEMPLATE: &str = r#"Analyze this Career Chapter (written in first person):
Role: "{role}" at "{company}"
Title: "{title}"
Description: "{description}"

Based on this text:
1. Select a representative Emoji.
2. Extract 3 Industry Tags.
3. Identify 3-4 Professional Skills.
4. Identify 3-4 Tools/Technologies implied.
5. Extract 3 Key Duties/Achievements (Convert to First Person if not already).
6. Design a Color Theme.

{json_only_instruction}"#;

/// Image prompt. Replace: {company}, {description}
pub const IMAGE_PROMPT_TEMPLATE: &str = "Create a cinematic, photorealistic image representing the professional environment of {company}.
Context: {description}.
Style: Architectural Digest, Modern Office, High Tech, or Minimalist Workspace depending on the industry.
Golden hour lighting, highly detailed, 4k.
Do not include text in the image.";

/// Substitutes `{name}` placeholders in one pass over `template`.
///
/// Inserted values are never rescanned, so braces inside user text stay
/// literal. Unknown placeholders are kept as written.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let hit = after.find('}').and_then(|end| {
            let name = &after[..end];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, end))
        });
        match hit {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
