//! Prompt rendering
//!
//! Two templates exist: one that asks the model to weigh the caller's mood
//! tags and one that lets the model infer the mood from the image alone.
//! Placeholders are written `{{name}}` and substituted in a single pass, so
//! substituted values are never rescanned.

use crate::utils::error::ComposeError;
use tracing::debug;

/// Value substituted for `{{tags}}` when the caller sent none
pub const NO_TAGS: &str = "No tags provided";

const TAGS_AWARE_TEMPLATE: &str = r#"First, check whether the image is appropriate. If it shows disallowed content (for example explicit violence, sexual content or hate symbols), do not write a haiku. Return only this JSON instead:
{"error": "<short explanation in {{language}}>"}

Otherwise:

1. The user described the mood of the image with these tags: {{tags}}. Let them guide how you read the image and the tone of the poem.
2. Describe the image in one sentence in {{language}}, naming its subject and its emotional tone.
3. Write a haiku in {{language}}:
   - exactly three lines, separated by newlines
   - no rhyme
   - short and evocative, built on sensory imagery
   - carry the mood of the tags
4. If the image is unclear, focus on a single visible element such as a color, the light or a shape, and the feeling it evokes.
5. Answer with one JSON object and nothing else:
{"description": "<the sentence in {{language}}>", "haiku": "<the three lines in {{language}}>"}
6. Do not use markdown or code fences, and do not add keys besides "description" and "haiku".
"#;

const TAGS_AGNOSTIC_TEMPLATE: &str = r#"First, check whether the image is appropriate. If it shows disallowed content (for example explicit violence, sexual content or hate symbols), do not write a haiku. Return only this JSON instead:
{"error": "<short explanation in {{language}}>"}

Otherwise:

1. The user gave no mood tags ({{tags}}). Infer the emotion, mood and atmosphere from the image alone.
2. Describe the image in one sentence in {{language}}, naming its subject and its emotional tone.
3. Write a haiku in {{language}}:
   - exactly three lines, separated by newlines
   - no rhyme
   - short and evocative, built on sensory imagery
   - carry the mood you found in the image
4. If the image is unclear, focus on a single visible element such as a color, the light or a shape, and the feeling it evokes.
5. Answer with one JSON object and nothing else:
{"description": "<the sentence in {{language}}>", "haiku": "<the three lines in {{language}}>"}
6. Do not use markdown or code fences, and do not add keys besides "description" and "haiku".
"#;

/// Render the prompt for a language and a (possibly empty) tag list
pub fn build_prompt(language: &str, tags: &[String]) -> Result<String, ComposeError> {
    let (template, tags) = if tags.is_empty() {
        (TAGS_AGNOSTIC_TEMPLATE, NO_TAGS.to_string())
    } else {
        (TAGS_AWARE_TEMPLATE, tags.join(", "))
    };

    let prompt = render(template, &[("language", language), ("tags", &tags)])?;
    debug!(
        "Built prompt for language {} with tags [{}] ({} bytes)",
        language,
        tags,
        prompt.len()
    );
    Ok(prompt)
}

/// Substitute `{{name}}` placeholders from `vars`
pub(crate) fn render(template: &str, vars: &[(&str, &str)]) -> Result<String, ComposeError> {
    let mut rendered = String::with_capacity(template.len() + 128);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        rendered.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find("}}")
            .ok_or_else(|| template_error(format!("unterminated placeholder at byte {}", start)))?;

        let name = after[..end].trim();
        let value = vars
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| template_error(format!("unresolved placeholder {{{{{}}}}}", name)))?;

        rendered.push_str(value);
        rest = &after[end + 2..];
    }

    rendered.push_str(rest);
    Ok(rendered)
}

fn template_error(reason: String) -> ComposeError {
    ComposeError::internal(format!("Failed to execute prompt template: {}", reason))
}
