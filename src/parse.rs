//! Structural parser: raw text to typed document tree.
//!
//! The contract is "permissive on input, strict on output": parsing never
//! fails and never emits diagnostics — it produces structure (possibly mostly
//! empty) and leaves judgment to the validation pipeline. Every populated
//! element carries an accurate 1-indexed source line. The scan is a single
//! linear pass; adversarially large inputs cost no more than their length.
//!
//! Lines the link scanner does not consume are preserved verbatim in
//! `preamble` or the owning section's `raw_content`, so stray headings,
//! code fences, and prose survive for downstream checks.

use crate::models::{Blockquote, Link, ParsedDocument, Section, Title};

/// Strip a UTF-8 BOM and normalize CRLF/CR to LF.
///
/// The carriage-return fact is not recorded here; validation re-derives it
/// from the raw bytes.
pub fn normalize(text: &str) -> String {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Parse normalized or raw text into a document tree. Infallible.
pub fn parse(input: &str) -> ParsedDocument {
    let text = normalize(input);
    let mut doc = ParsedDocument::default();

    // Blockquote capture state: only lines directly under the title (blank
    // lines permitted in between) may start the description.
    let mut awaiting_description = false;
    let mut in_description = false;
    let mut in_fence = false;

    for (idx, line) in text.lines().enumerate() {
        let lineno = idx + 1;
        let trimmed = line.trim_start();

        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            push_raw(&mut doc, line);
            in_description = false;
            continue;
        }
        if in_fence {
            push_raw(&mut doc, line);
            continue;
        }

        if let Some(name) = line.strip_prefix("## ") {
            doc.sections.push(Section {
                name: name.trim().to_string(),
                canonical: crate::canon::match_canonical(name),
                raw_content: String::new(),
                line: lineno,
                links: Vec::new(),
            });
            awaiting_description = false;
            in_description = false;
            continue;
        }

        if line.starts_with("# ") && doc.title.is_none() && doc.sections.is_empty() {
            doc.title = Some(Title {
                text: line[2..].trim().to_string(),
                line: lineno,
            });
            awaiting_description = true;
            continue;
        }

        if let Some(quoted) = trimmed.strip_prefix('>') {
            let quoted = quoted.strip_prefix(' ').unwrap_or(quoted);
            if in_description {
                if let Some(d) = doc.description.as_mut() {
                    d.text.push('\n');
                    d.text.push_str(quoted);
                }
                continue;
            }
            if awaiting_description {
                doc.description = Some(Blockquote {
                    text: quoted.to_string(),
                    line: lineno,
                });
                awaiting_description = false;
                in_description = true;
                continue;
            }
        }

        if line.trim().is_empty() {
            // Blank lines between title and blockquote keep the window open.
            in_description = false;
            push_raw(&mut doc, line);
            continue;
        }
        awaiting_description = false;
        in_description = false;

        if let Some(section) = doc.sections.last_mut() {
            if let Some(link) = parse_link_line(line, lineno) {
                section.links.push(link);
                continue;
            }
        }

        push_raw(&mut doc, line);
    }

    doc
}

fn push_raw(doc: &mut ParsedDocument, line: &str) {
    let target = match doc.sections.last_mut() {
        Some(section) => &mut section.raw_content,
        None => &mut doc.preamble,
    };
    if !target.is_empty() {
        target.push('\n');
    }
    target.push_str(line);
}

/// Parse one `- [title](url)` line, with optional `: description` tail.
/// Returns `None` for anything that does not match the shape; such lines
/// stay in raw content.
fn parse_link_line(line: &str, lineno: usize) -> Option<Link> {
    let rest = line.trim_start().strip_prefix("- [")?;
    let text_end = rest.find("](")?;
    let title = &rest[..text_end];
    let after = &rest[text_end + 2..];
    let url_end = after.find(')')?;
    let url = after[..url_end].trim();
    let tail = after[url_end + 1..].trim_start();

    let description = tail
        .strip_prefix(':')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    Some(Link {
        title: title.trim().to_string(),
        url: url.to_string(),
        description,
        line: lineno,
        url_syntactically_valid: is_url_syntactically_valid(url),
    })
}

/// Basic scheme/host shape check; deliberately not a reachability check.
pub fn is_url_syntactically_valid(url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() || url == "#" || url.contains(char::is_whitespace) {
        return false;
    }
    for scheme in ["http://", "https://"] {
        if let Some(rest) = url.strip_prefix(scheme) {
            let host = rest.split('/').next().unwrap_or("");
            return !host.is_empty();
        }
    }
    if let Some(rest) = url.strip_prefix("mailto:") {
        return !rest.is_empty();
    }
    // Anything else (relative paths, anchors beyond a bare '#', other
    // schemes) is syntactically acceptable; strictness about absolute URLs
    // is a validation concern.
    true
}

/// Whether a syntactically valid URL is relative (no scheme).
pub fn is_relative_url(url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return false;
    }
    match url.find(':') {
        None => true,
        Some(colon) => url[..colon].contains('/'),
    }
}

/// One fenced code block opening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFence {
    pub language: Option<String>,
    pub line: usize,
}

/// Fence scan over a whole document.
#[derive(Debug, Clone, Default)]
pub struct FenceScan {
    pub blocks: Vec<CodeFence>,
    /// A fence was opened and never closed before end of input.
    pub unterminated: bool,
}

/// Scan for fenced code blocks, returning each opening with its info
/// string. Linear, fence-state aware; used by validation and the
/// anti-pattern detector.
pub fn scan_fences(text: &str) -> FenceScan {
    let mut scan = FenceScan::default();
    let mut open = false;
    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim_start();
        if !trimmed.starts_with("```") {
            continue;
        }
        if open {
            open = false;
            continue;
        }
        open = true;
        let info = trimmed.trim_start_matches('`').trim();
        scan.blocks.push(CodeFence {
            language: if info.is_empty() {
                None
            } else {
                Some(info.split_whitespace().next().unwrap_or(info).to_string())
            },
            line: idx + 1,
        });
    }
    scan.unterminated = open;
    scan
}

/// 1-indexed lines of `# ` headings outside code fences.
pub fn h1_heading_lines(text: &str) -> Vec<usize> {
    let mut lines = Vec::new();
    let mut in_fence = false;
    for (idx, line) in text.lines().enumerate() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if !in_fence && line.starts_with("# ") {
            lines.push(idx + 1);
        }
    }
    lines
}

/// Render a tree back to canonical Markdown. Re-parsing the result yields a
/// structurally equal tree: same title, same section names and order, same
/// link count.
pub fn to_markdown(doc: &ParsedDocument) -> String {
    let mut out = String::new();
    if let Some(title) = &doc.title {
        out.push_str("# ");
        out.push_str(&title.text);
        out.push('\n');
    }
    if let Some(description) = &doc.description {
        out.push('\n');
        for line in description.text.lines() {
            out.push_str("> ");
            out.push_str(line);
            out.push('\n');
        }
    }
    if !doc.preamble.trim().is_empty() {
        out.push('\n');
        out.push_str(doc.preamble.trim_matches('\n'));
        out.push('\n');
    }
    for section in &doc.sections {
        out.push('\n');
        out.push_str("## ");
        out.push_str(&section.name);
        out.push('\n');
        for link in &section.links {
            out.push_str(&format!("- [{}]({})", link.title, link.url));
            if let Some(description) = &link.description {
                out.push_str(": ");
                out.push_str(description);
            }
            out.push('\n');
        }
        if !section.raw_content.trim().is_empty() {
            out.push_str(section.raw_content.trim_matches('\n'));
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# Project\n\n> A tidy index.\n\n## Master Index\n- [Guide](https://docs.example/guide): The guide\n- [API](https://docs.example/api)\nplain prose line\n\n## Examples\n```rust\nfn main() {}\n```\n";

    #[test]
    fn parses_title_description_and_sections() {
        let doc = parse(SAMPLE);
        assert_eq!(doc.title.as_ref().unwrap().text, "Project");
        assert_eq!(doc.title.as_ref().unwrap().line, 1);
        assert_eq!(doc.description.as_ref().unwrap().text, "A tidy index.");
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].name, "Master Index");
        assert_eq!(doc.sections[0].line, 5);
        assert_eq!(doc.sections[1].name, "Examples");
    }

    #[test]
    fn links_capture_description_and_position() {
        let doc = parse(SAMPLE);
        let links = &doc.sections[0].links;
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].title, "Guide");
        assert_eq!(links[0].description.as_deref(), Some("The guide"));
        assert_eq!(links[0].line, 6);
        assert_eq!(links[1].description, None);
        assert!(links[1].url_syntactically_valid);
    }

    #[test]
    fn non_link_lines_stay_in_raw_content() {
        let doc = parse(SAMPLE);
        assert!(doc.sections[0].raw_content.contains("plain prose line"));
        assert!(doc.sections[1].raw_content.contains("```rust"));
    }

    #[test]
    fn missing_title_is_represented_not_synthesized() {
        let doc = parse("## Only A Section\n- [x](https://x.example/)\n");
        assert!(doc.title.is_none());
        assert!(doc.description.is_none());
        assert_eq!(doc.sections.len(), 1);
    }

    #[test]
    fn second_h1_becomes_raw_content() {
        let doc = parse("# First\n\n# Second\n\n## S\n");
        assert_eq!(doc.title.as_ref().unwrap().text, "First");
        assert!(doc.preamble.contains("# Second"));
        assert_eq!(h1_heading_lines("# First\n\n# Second\n\n## S\n"), vec![1, 3]);
    }

    #[test]
    fn h1_inside_fence_is_not_a_heading() {
        let text = "# Real\n```\n# not a heading\n```\n";
        assert_eq!(h1_heading_lines(text), vec![1]);
    }

    #[test]
    fn blockquote_must_follow_title_area() {
        let doc = parse("# T\nprose first\n> late quote\n");
        assert!(doc.description.is_none());
        assert!(doc.preamble.contains("> late quote"));
    }

    #[test]
    fn multi_line_blockquote_merges() {
        let doc = parse("# T\n> first\n> second\n");
        assert_eq!(doc.description.as_ref().unwrap().text, "first\nsecond");
    }

    #[test]
    fn crlf_input_normalizes() {
        let doc = parse("# T\r\n\r\n## S\r\n- [a](https://a.example/)\r\n");
        assert_eq!(doc.title.as_ref().unwrap().text, "T");
        assert_eq!(doc.sections[0].links.len(), 1);
    }

    #[test]
    fn url_shape_checks() {
        assert!(is_url_syntactically_valid("https://example.com/docs"));
        assert!(is_url_syntactically_valid("docs/guide.md"));
        assert!(is_url_syntactically_valid("mailto:team@example.com"));
        assert!(!is_url_syntactically_valid(""));
        assert!(!is_url_syntactically_valid("#"));
        assert!(!is_url_syntactically_valid("https://"));
        assert!(!is_url_syntactically_valid("http://host with space"));
        assert!(is_relative_url("docs/guide.md"));
        assert!(!is_relative_url("https://example.com/"));
    }

    #[test]
    fn fence_scan_reports_languages_and_termination() {
        let scan = scan_fences("```rust\nfn x() {}\n```\n```\nplain\n```\n```bash");
        assert_eq!(scan.blocks.len(), 3);
        assert_eq!(scan.blocks[0].language.as_deref(), Some("rust"));
        assert_eq!(scan.blocks[1].language, None);
        assert!(scan.unterminated);
    }

    #[test]
    fn round_trip_preserves_structure() {
        let doc = parse(SAMPLE);
        let rendered = to_markdown(&doc);
        let reparsed = parse(&rendered);
        assert_eq!(
            doc.title.as_ref().map(|t| &t.text),
            reparsed.title.as_ref().map(|t| &t.text)
        );
        let names: Vec<_> = doc.sections.iter().map(|s| &s.name).collect();
        let renames: Vec<_> = reparsed.sections.iter().map(|s| &s.name).collect();
        assert_eq!(names, renames);
        assert_eq!(
            doc.all_links().count(),
            reparsed.all_links().count()
        );
    }
}
