//! Resume rendering — fills a named built-in HTML template from a parsed
//! resume. The extension prints the returned document to PDF client-side.

pub mod handlers;
mod templates;

use html_escape::encode_text;

use crate::errors::AppError;
use crate::models::resume::{Item, PersonalDetails, RenderRequest, Section};

/// Renders a structured resume into a complete HTML document.
/// Every interpolated value is HTML-escaped.
pub fn render_resume(request: &RenderRequest) -> Result<String, AppError> {
    let template = match request.template.as_str() {
        "resume_modern" => templates::RESUME_MODERN_TEMPLATE,
        "resume_classic" => templates::RESUME_CLASSIC_TEMPLATE,
        other => {
            return Err(AppError::InvalidInput(format!(
                "Unknown resume template '{other}'"
            )))
        }
    };

    let details = &request.user_details;
    let name = details.name.as_deref().unwrap_or("Unnamed");

    let html = template
        .replace("{name}", &encode_text(name))
        .replace("{job_title_block}", &job_title_block(details))
        .replace("{contact_block}", &contact_block(details))
        .replace("{sections}", &sections_html(&request.sections));

    Ok(html)
}

fn job_title_block(details: &PersonalDetails) -> String {
    match details.job_title.as_deref() {
        Some(title) if !title.is_empty() => {
            format!("  <p class=\"job-title\">{}</p>\n", encode_text(title))
        }
        _ => String::new(),
    }
}

fn contact_block(details: &PersonalDetails) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(email) = &details.email {
        parts.push(encode_text(email).into_owned());
    }
    if let Some(phone) = &details.phone {
        parts.push(encode_text(phone).into_owned());
    }
    if let Some(linkedin) = &details.linkedin {
        parts.push(encode_text(linkedin).into_owned());
    }
    if let Some(username) = &details.github_username {
        parts.push(format!("github.com/{}", encode_text(username)));
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!("  <p class=\"contact\">{}</p>\n", parts.join(" | "))
    }
}

fn sections_html(sections: &[Section]) -> String {
    sections.iter().map(section_html).collect()
}

fn section_html(section: &Section) -> String {
    let items: String = section.items.iter().map(item_html).collect();
    format!(
        "<section>\n<h2>{}</h2>\n<ul>\n{items}</ul>\n</section>\n",
        encode_text(&section.title)
    )
}

fn item_html(item: &Item) -> String {
    let mut parts = vec![format!(
        "<span class=\"primary\">{}</span>",
        encode_text(&item.primary)
    )];
    if !item.secondary.is_empty() {
        parts.push(format!(
            "<span class=\"secondary\">{}</span>",
            encode_text(&item.secondary)
        ));
    }
    if !item.timeline.is_empty() {
        parts.push(format!(
            "<span class=\"timeline\">{}</span>",
            encode_text(&item.timeline)
        ));
    }

    let mut li = format!("  <li>{}", parts.join(" | "));
    if !item.description.is_empty() {
        li.push_str(&format!(
            "<p class=\"description\">{}</p>",
            encode_text(&item.description)
        ));
    }
    li.push_str("</li>\n");
    li
}
