//! CV text parser — turns the plain-text export of a CV document into a
//! structured `ParseResult`.
//!
//! Single pass, line oriented, no backtracking. The parser is total: every
//! input, including empty or header-less text, yields a valid (possibly
//! empty) result. Unrecognized lines are skipped, never reported.
//!
//! Expected document shape:
//!
//! ```text
//! PERSONAL INFORMATION
//! Name: John Doe
//! Email: john@example.com
//!
//! EDUCATION
//! - University Name | Degree | 2018-2022 | Description
//!
//! EXPERIENCE
//! - Company Name | Position | 2020-Present | Achievements
//!
//! SKILLS
//! - Python, JavaScript, React
//! ```

use crate::models::resume::{Item, ParseResult, PersonalDetails, Section};

/// The three CV categories that produce sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Education,
    Experience,
    Skills,
}

impl SectionKind {
    /// Display titles are a fixed vocabulary; the parser never produces
    /// any other section title.
    fn title(self) -> &'static str {
        match self {
            SectionKind::Education => "Educational Qualifications",
            SectionKind::Experience => "Employment History",
            SectionKind::Skills => "Skills",
        }
    }
}

/// Current parser state. `Collecting` carries the pending-items buffer for
/// the section being accumulated.
#[derive(Debug)]
enum ParserState {
    None,
    Personal,
    Collecting { kind: SectionKind, items: Vec<Item> },
}

/// Where a header line sends the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderTarget {
    Personal,
    Section(SectionKind),
}

/// Case-insensitive substring header detection, in fixed priority order.
/// The first matching rule wins, so a line like "WORK INFO" is a personal
/// header, not an experience header.
fn detect_header(line: &str) -> Option<HeaderTarget> {
    let upper = line.to_uppercase();
    if upper.contains("PERSONAL") || upper.contains("CONTACT") || upper.contains("INFO") {
        Some(HeaderTarget::Personal)
    } else if upper.contains("EDUCATION") {
        Some(HeaderTarget::Section(SectionKind::Education))
    } else if upper.contains("EXPERIENCE") || upper.contains("EMPLOYMENT") || upper.contains("WORK")
    {
        Some(HeaderTarget::Section(SectionKind::Experience))
    } else if upper.contains("SKILL") {
        Some(HeaderTarget::Section(SectionKind::Skills))
    } else {
        None
    }
}

/// The flush table. A pending buffer survives a header transition only for
/// the two forward hops below; every other transition, re-entering the same
/// section included, drops whatever was buffered. Documents authored out of
/// the expected PERSONAL, EDUCATION, EXPERIENCE, SKILLS order therefore
/// lose items. Known quirk of the format, preserved deliberately.
fn flushes_on(leaving: SectionKind, entering: HeaderTarget) -> bool {
    matches!(
        (leaving, entering),
        (
            SectionKind::Education,
            HeaderTarget::Section(SectionKind::Experience)
        ) | (
            SectionKind::Experience,
            HeaderTarget::Section(SectionKind::Skills)
        )
    )
}

/// Parses the full plain-text export of a CV. Never fails.
pub fn parse_cv_content(text: &str) -> ParseResult {
    let mut result = ParseResult::default();
    let mut state = ParserState::None;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(target) = detect_header(line) {
            state = transition(state, target, &mut result);
            continue;
        }

        match &mut state {
            ParserState::None => {}
            ParserState::Personal => parse_personal_info(line, &mut result.user_details),
            ParserState::Collecting { kind, items } => match kind {
                SectionKind::Skills => collect_skills(line, items),
                _ => {
                    if let Some(item) = parse_section_item(line, items.len() + 1) {
                        items.push(item);
                    }
                }
            },
        }
    }

    // End-of-input flush: whatever is still buffered becomes the final section.
    if let ParserState::Collecting { kind, items } = state {
        append_section(&mut result, kind, items);
    }

    result
}

fn transition(state: ParserState, target: HeaderTarget, result: &mut ParseResult) -> ParserState {
    if let ParserState::Collecting { kind, items } = state {
        if flushes_on(kind, target) {
            append_section(result, kind, items);
        }
    }
    match target {
        HeaderTarget::Personal => ParserState::Personal,
        HeaderTarget::Section(kind) => ParserState::Collecting {
            kind,
            items: Vec::new(),
        },
    }
}

/// Sections are appended only once fully collected, and only if non-empty.
/// Ids are assigned here, so they stay contiguous from 1 no matter how many
/// buffers were dropped along the way.
fn append_section(result: &mut ParseResult, kind: SectionKind, items: Vec<Item>) {
    if items.is_empty() {
        return;
    }
    result.sections.push(Section {
        id: format!("sec_{}", result.sections.len() + 1),
        title: kind.title().to_string(),
        items,
    });
}

/// SKILLS lines are comma-separated tokens, one item per token, with only
/// `primary` set.
fn collect_skills(line: &str, items: &mut Vec<Item>) {
    let line = line.trim_start_matches(['-', '•', ' ']);
    for token in line.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        items.push(Item {
            id: format!("item_{}", items.len() + 1),
            primary: token.to_string(),
            secondary: String::new(),
            timeline: String::new(),
            description: String::new(),
        });
    }
}

/// Applies a `Key: value` line to the contact record. At most one field is
/// set per line; the first matching key substring wins. Lines without a
/// colon, or with an unrecognized key, are dropped.
fn parse_personal_info(line: &str, details: &mut PersonalDetails) {
    let Some((raw_key, raw_value)) = line.split_once(':') else {
        return;
    };
    let key = raw_key.trim().to_lowercase();
    let value = raw_value.trim();

    if key.contains("name") {
        details.name = Some(value.to_string());
    } else if key.contains("email") {
        details.email = Some(value.to_string());
    } else if key.contains("phone") {
        details.phone = Some(value.to_string());
    } else if key.contains("linkedin") {
        details.linkedin = Some(normalize_linkedin(value));
    } else if key.contains("github") {
        details.github_username = Some(normalize_github_username(value));
    } else if key.contains("job") || key.contains("title") || key.contains("role") {
        details.job_title = Some(value.to_string());
    }
}

fn normalize_linkedin(value: &str) -> String {
    if value.starts_with("http") {
        value.to_string()
    } else {
        format!("https://{value}")
    }
}

/// Reduces any common way of writing a GitHub handle (bare username,
/// host-prefixed, full URL, trailing slash) to the bare username.
fn normalize_github_username(value: &str) -> String {
    value
        .replace("github.com/", "")
        .replace("https://", "")
        .replace("http://", "")
        .trim_matches('/')
        .to_string()
}

/// Parses one `Primary | Secondary | Timeline | Description` bullet line.
/// Lines with fewer than three pipe-delimited fields are not items; fields
/// past the fourth are dropped. `position` is the 1-based slot the item
/// will occupy in its pending buffer and becomes its id.
fn parse_section_item(line: &str, position: usize) -> Option<Item> {
    let line = line.trim_start_matches(['-', '•']).trim();
    if line.is_empty() {
        return None;
    }

    let parts: Vec<&str> = line.split('|').map(str::trim).collect();
    if parts.len() < 3 {
        return None;
    }

    Some(Item {
        id: format!("item_{position}"),
        primary: parts[0].to_string(),
        secondary: parts[1].to_string(),
        timeline: parts[2].to_string(),
        description: parts.get(3).copied().unwrap_or("").to_string(),
    })
}
