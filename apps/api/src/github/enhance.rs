//! Best-effort project description generation.
//!
//! Projects without a description get one written by the LLM from their
//! README. A failed LLM call never fails the request: the project falls
//! back to a generic label instead.

use tracing::warn;

use crate::github::GithubClient;
use crate::llm_client::prompts::{DESCRIBE_PROMPT_TEMPLATE, DESCRIBE_SYSTEM};
use crate::llm_client::LlmClient;
use crate::models::github::Project;

/// README excerpt cap, in characters, to stay well inside prompt limits.
const README_PREVIEW_CHARS: usize = 3000;

const BOILERPLATE_PREFIXES: &[&str] = &[
    "This project ",
    "This is ",
    "This repository ",
    "A project that ",
];

/// Fills in missing descriptions across a project list. Projects that
/// already have a description, or have no README, pass through untouched.
pub async fn enhance_descriptions(
    projects: Vec<Project>,
    github: &GithubClient,
    llm: &LlmClient,
    authorization: &str,
) -> Vec<Project> {
    let mut enhanced = Vec::with_capacity(projects.len());
    for mut project in projects {
        let missing = project.description.as_deref().map_or(true, str::is_empty);
        if missing {
            match github.fetch_readme(authorization, &project.full_name).await {
                Ok(Some(readme)) => {
                    project.description =
                        Some(describe_project(llm, &readme, &project.name).await);
                }
                Ok(None) => {}
                Err(e) => warn!("README fetch failed for {}: {e}", project.full_name),
            }
        }
        enhanced.push(project);
    }
    enhanced
}

/// Generates a resume-ready description for one repository.
async fn describe_project(llm: &LlmClient, readme: &str, repo_name: &str) -> String {
    let preview = truncate_chars(readme, README_PREVIEW_CHARS);
    let prompt = DESCRIBE_PROMPT_TEMPLATE
        .replace("{repo_name}", repo_name)
        .replace("{readme}", preview);

    match llm.call(&prompt, DESCRIBE_SYSTEM).await {
        Ok(text) => clean_description(&text),
        Err(e) => {
            warn!("Description generation failed for {repo_name}: {e}");
            format!("GitHub project: {repo_name}")
        }
    }
}

/// Strips surrounding quotes and the boilerplate openers the model tends to
/// produce despite instructions, re-capitalizing what remains.
fn clean_description(raw: &str) -> String {
    let description = raw.trim().trim_matches(['"', '\'']);
    for prefix in BOILERPLATE_PREFIXES {
        if let Some(rest) = description.strip_prefix(prefix) {
            let mut chars = rest.chars();
            return match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            };
        }
    }
    description.to_string()
}

/// Truncates to at most `max` characters without splitting a code point.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_quotes() {
        assert_eq!(
            clean_description("\"CLI for syncing dotfiles\""),
            "CLI for syncing dotfiles"
        );
    }

    #[test]
    fn test_clean_strips_this_project_prefix() {
        assert_eq!(
            clean_description("This project provides a fast cache."),
            "Provides a fast cache."
        );
    }

    #[test]
    fn test_clean_strips_this_is_prefix_and_recapitalizes() {
        assert_eq!(
            clean_description("This is a resume builder."),
            "A resume builder."
        );
    }

    #[test]
    fn test_clean_leaves_good_descriptions_alone() {
        let text = "Full-stack platform built with React and Node.js.";
        assert_eq!(clean_description(text), text);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "héllo wörld";
        let truncated = truncate_chars(text, 4);
        assert_eq!(truncated, "héll");
    }

    #[test]
    fn test_truncate_shorter_input_passes_through() {
        assert_eq!(truncate_chars("short", 3000), "short");
    }

    #[test]
    fn test_prompt_template_has_both_placeholders() {
        assert!(DESCRIBE_PROMPT_TEMPLATE.contains("{repo_name}"));
        assert!(DESCRIBE_PROMPT_TEMPLATE.contains("{readme}"));
    }
}
