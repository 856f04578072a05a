//! Section indexing over cleaned lines

use crate::app::models::Section;
use crate::constants::SECTION_MARKER;

/// Locate every `~` header and compute the inclusive body range of each
/// section
pub fn index_sections(lines: &[String]) -> Vec<Section> {
    let headers: Vec<(usize, &String)> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.starts_with(SECTION_MARKER))
        .collect();

    let last_line = lines.len().saturating_sub(1);

    headers
        .iter()
        .enumerate()
        .map(|(i, &(header_line, line))| {
            let end = match headers.get(i + 1) {
                Some(&(next_header, _)) => next_header - 1,
                None => last_line,
            };

            Section {
                id: line.chars().take(2).collect(),
                name: line.replace(SECTION_MARKER, "").trim().to_string(),
                header_line,
                start: header_line + 1,
                end,
            }
        })
        .collect()
}

/// First section whose id equals `id`
pub fn find_by_id<'a>(sections: &'a [Section], id: &str) -> Option<&'a Section> {
    sections.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ranges_follow_header_positions() {
        let cleaned = lines(&[
            "~VERSION INFORMATION",
            "VERS. 2.0 : v",
            "WRAP. NO : w",
            "~WELL INFORMATION",
            "STRT.M 10.0 : start",
            "~A DEPTH GR",
            "10.0 1.0",
            "10.5 2.0",
        ]);

        let sections = index_sections(&cleaned);
        assert_eq!(sections.len(), 3);

        for (i, section) in sections.iter().enumerate() {
            assert_eq!(section.start, section.header_line + 1);
            match sections.get(i + 1) {
                Some(next) => assert_eq!(section.end, next.header_line - 1),
                None => assert_eq!(section.end, cleaned.len() - 1),
            }
        }

        assert_eq!(sections[0].id, "~V");
        assert_eq!(sections[0].name, "VERSION INFORMATION");
        assert_eq!(sections[2].id, "~A");
        assert_eq!(sections[2].name, "A DEPTH GR");
        assert_eq!(sections[2].body(&cleaned).len(), 2);
    }

    #[test]
    fn test_v3_reference_preserved() {
        let cleaned = lines(&["~Log_Definition", "DEPT.M : depth", "~Log_Data | Log_Definition", "1.0"]);
        let sections = index_sections(&cleaned);
        assert_eq!(sections[1].name, "Log_Data | Log_Definition");
        assert_eq!(
            sections[1].data_reference().map(|r| r.definition),
            Some("Log_Definition".to_string())
        );
    }

    #[test]
    fn test_adjacent_headers_have_empty_body() {
        let cleaned = lines(&["~V", "~W", "STRT.M 1 : s"]);
        let sections = index_sections(&cleaned);
        assert_eq!(sections[0].line_count(), 0);
        assert!(sections[0].body(&cleaned).is_empty());
        assert_eq!(find_by_id(&sections, "~W").map(|s| s.start), Some(2));
    }

    #[test]
    fn test_no_sections() {
        assert!(index_sections(&lines(&["just text"])).is_empty());
        assert!(index_sections(&[]).is_empty());
    }
}
