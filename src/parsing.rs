use pulldown_cmark::{Options, Parser};

use crate::error::{Result, SedgeError};
use crate::summary::classify_summary;
use crate::types::Content;

const OPEN_TAG: &str = "{{% summary %}}";
const CLOSE_TAG: &str = "{{% /summary %}}";

pub fn parse_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

    let parser = Parser::new_ext(content, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

/// Captures the first `{{% summary %}} … {{% /summary %}}` block, skipping
/// fenced code regions. Returns the block body and the source with the
/// block removed.
pub fn capture_summary_block(markdown: &str) -> Result<(Option<String>, String)> {
    let mut offset = 0;

    loop {
        let rest = &markdown[offset..];
        let next_fence = find_next_code_fence(rest);
        let next_open = rest.find(OPEN_TAG);

        match (next_fence, next_open) {
            (Some(fence), Some(open)) if fence < open => {
                offset += advance_past_fence(rest, fence);
            }
            (Some(fence), None) => {
                offset += advance_past_fence(rest, fence);
            }
            (_, Some(open)) => {
                let open_at = offset + open;
                let body_start = open_at + OPEN_TAG.len();

                let close = markdown[body_start..].find(CLOSE_TAG).ok_or_else(|| {
                    SedgeError::DirectiveParse {
                        message: "missing closing tag for summary directive".to_string(),
                    }
                })?;

                let body = markdown[body_start..body_start + close].trim();
                let before = markdown[..open_at].trim_end();
                let after = markdown[body_start + close + CLOSE_TAG.len()..].trim_start();

                let remaining = match (before.is_empty(), after.is_empty()) {
                    (true, _) => after.to_string(),
                    (_, true) => before.to_string(),
                    _ => format!("{}\n\n{}", before, after),
                };

                return Ok((Some(body.to_string()), remaining));
            }
            (None, None) => return Ok((None, markdown.to_string())),
        }
    }
}

/// Renders and stores a captured summary block on the in-progress content,
/// returning the markdown with the directive removed.
pub fn apply_summary_directive(markdown: &str, content: &mut Content) -> Result<String> {
    let (captured, remaining) = capture_summary_block(markdown)?;

    if let Some(body) = captured {
        let html = parse_markdown(&body);
        content.summary = classify_summary(html.trim_end().to_string());
        content.has_summary = true;
    }

    Ok(remaining)
}

fn find_next_code_fence(content: &str) -> Option<usize> {
    let mut search_from = 0;
    while search_from < content.len() {
        let backtick = content[search_from..]
            .find("```")
            .map(|position| search_from + position);
        let tilde = content[search_from..]
            .find("~~~")
            .map(|position| search_from + position);
        let fence = match (backtick, tilde) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => return None,
        };
        if fence == 0 || content.as_bytes()[fence - 1] == b'\n' {
            return Some(fence);
        }
        search_from = fence + 3;
    }
    None
}

fn advance_past_fence(content: &str, fence: usize) -> usize {
    let marker = if content[fence..].starts_with("```") {
        "```"
    } else {
        "~~~"
    };

    let after_marker = &content[fence + marker.len()..];
    if let Some(line_end) = after_marker.find('\n') {
        let block = &after_marker[line_end + 1..];
        if let Some(closing) = find_closing_fence(block, marker) {
            let consumed = fence + marker.len() + line_end + 1 + closing + marker.len();
            return content[consumed..]
                .find('\n')
                .map(|newline| consumed + newline + 1)
                .unwrap_or(content.len());
        }
    }

    // Unclosed fence: step past the marker and keep scanning.
    fence + marker.len()
}

fn find_closing_fence(content: &str, marker: &str) -> Option<usize> {
    let mut search_from = 0;
    while search_from < content.len() {
        let position = content[search_from..].find(marker)? + search_from;
        if position == 0 || content.as_bytes()[position - 1] == b'\n' {
            let rest_of_line = content[position + marker.len()..]
                .split('\n')
                .next()
                .unwrap_or("");
            if rest_of_line.trim().is_empty() {
                return Some(position);
            }
        }
        search_from = position + marker.len();
    }
    None
}
