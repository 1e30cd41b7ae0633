use crate::utils::error::{GenError, Result};
use regex::Regex;

pub const PORTLIST_SECTION: &str = "PORTLIST";
pub const SHOWCASE_SECTION: &str = "SHOWCASE";

const NOTICE: &str = "<!-- the following section is auto-generated, do not edit -->";

pub fn start_marker(section: &str) -> String {
    format!("<!-- AUTOGEN:{} START -->", section)
}

pub fn end_marker(section: &str) -> String {
    format!("<!-- AUTOGEN:{} END -->", section)
}

fn marker_pattern(section: &str, edge: &str) -> Result<Regex> {
    Regex::new(&format!(
        r"<!--\s*AUTOGEN:{}\s+{}\s*-->",
        regex::escape(section),
        edge
    ))
    .map_err(|e| GenError::SectionNotFoundError {
        section: section.to_string(),
        reason: format!("invalid section id: {}", e),
    })
}

/// Replaces everything between the section's START and END markers with `content`.
/// Markers are rewritten in canonical form, so running twice with the same content is a no-op.
pub fn replace_section(document: &str, content: &str, section: &str) -> Result<String> {
    let not_found = |reason: &str| GenError::SectionNotFoundError {
        section: section.to_string(),
        reason: reason.to_string(),
    };

    let starts: Vec<_> = marker_pattern(section, "START")?.find_iter(document).collect();
    let ends: Vec<_> = marker_pattern(section, "END")?.find_iter(document).collect();

    let (start, end) = match (starts.as_slice(), ends.as_slice()) {
        ([], _) => return Err(not_found("start marker missing")),
        (_, []) => return Err(not_found("end marker missing")),
        ([start], [end]) => (*start, *end),
        _ => return Err(not_found("markers appear more than once")),
    };

    if end.start() < start.end() {
        return Err(not_found("end marker comes before start marker"));
    }

    let mut updated = String::with_capacity(document.len() + content.len());
    updated.push_str(&document[..start.start()]);
    updated.push_str(&start_marker(section));
    updated.push('\n');
    updated.push_str(NOTICE);
    updated.push('\n');
    if !content.is_empty() {
        updated.push_str(content);
        updated.push('\n');
    }
    updated.push_str(&end_marker(section));
    updated.push_str(&document[end.end()..]);

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    const README: &str = "# Catppuccin\n\n## Ports\n<!-- AUTOGEN:PORTLIST START -->\nold list\n<!-- AUTOGEN:PORTLIST END -->\n\n## Showcase\n<!-- AUTOGEN:SHOWCASE START --><!-- AUTOGEN:SHOWCASE END -->\n";

    #[test]
    fn test_replace_section_swaps_only_marked_region() {
        let updated = replace_section(README, "- [Zed](https://z)", PORTLIST_SECTION).unwrap();

        assert!(updated.starts_with("# Catppuccin\n\n## Ports\n"));
        assert!(updated.contains(
            "<!-- AUTOGEN:PORTLIST START -->\n<!-- the following section is auto-generated, do not edit -->\n- [Zed](https://z)\n<!-- AUTOGEN:PORTLIST END -->"
        ));
        assert!(!updated.contains("old list"));
        assert!(updated.ends_with("<!-- AUTOGEN:SHOWCASE START --><!-- AUTOGEN:SHOWCASE END -->\n"));
    }

    #[test]
    fn test_replace_section_is_idempotent() {
        let once = replace_section(README, "- [A](https://a)", SHOWCASE_SECTION).unwrap();
        let twice = replace_section(&once, "- [A](https://a)", SHOWCASE_SECTION).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_replace_section_tolerates_marker_spacing() {
        let doc = "<!--AUTOGEN:PORTLIST   START-->x<!--   AUTOGEN:PORTLIST END   -->";
        let updated = replace_section(doc, "y", PORTLIST_SECTION).unwrap();
        assert!(updated.starts_with("<!-- AUTOGEN:PORTLIST START -->"));
        assert!(updated.ends_with("y\n<!-- AUTOGEN:PORTLIST END -->"));
    }

    #[test]
    fn test_missing_or_malformed_markers() {
        let err = replace_section("# nothing here", "x", PORTLIST_SECTION).unwrap_err();
        assert!(matches!(err, GenError::SectionNotFoundError { .. }));

        let only_start = "<!-- AUTOGEN:PORTLIST START -->";
        assert!(replace_section(only_start, "x", PORTLIST_SECTION).is_err());

        let reversed = "<!-- AUTOGEN:PORTLIST END -->\n<!-- AUTOGEN:PORTLIST START -->";
        let err = replace_section(reversed, "x", PORTLIST_SECTION).unwrap_err();
        assert!(err.to_string().contains("before start"));

        let doubled = format!("{}{}", README, README);
        assert!(replace_section(&doubled, "x", PORTLIST_SECTION).is_err());
    }
}
