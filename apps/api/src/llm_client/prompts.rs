// All LLM prompt constants for description generation.

/// System prompt for project description generation.
pub const DESCRIBE_SYSTEM: &str =
    "You are a professional resume writer who creates concise, impactful project \
    descriptions. Write clear, direct descriptions without unnecessary preamble.";

/// Description prompt template. Replace `{repo_name}` and `{readme}` before sending.
pub const DESCRIBE_PROMPT_TEMPLATE: &str = r#"You are a professional resume writer. Based on the README from a GitHub repository named "{repo_name}", write a concise, impactful 1-2 sentence description for a resume.

README Content:
{readme}

Requirements:
- Focus on WHAT the project does and WHY it's valuable
- Mention key technologies/frameworks used
- Use professional, active language
- Keep it under 150 words
- No markdown formatting
- Start directly with the description (no "This project..." or "This is...")

Example style: "Full-stack e-commerce platform built with React and Node.js, featuring real-time inventory management and payment processing for 10K+ daily transactions."

Your description:"#;
