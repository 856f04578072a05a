//! Raw text cleanup
//!
//! Every line index used after this point refers to the cleaned list, not
//! to the physical file.

use super::events::{DropReason, EventSink, ParseEvent};
use crate::constants::COMMENT_MARKER;

/// Split `content` on any line ending and keep trimmed, non-comment,
/// non-blank lines
pub fn clean_lines(content: &str, sink: &mut dyn EventSink) -> Vec<String> {
    let mut cleaned = Vec::new();

    for (index, raw) in split_lines(content).enumerate() {
        let line = raw.trim();
        let reason = if line.is_empty() {
            Some(DropReason::Blank)
        } else if line.starts_with(COMMENT_MARKER) {
            Some(DropReason::Comment)
        } else {
            None
        };

        match reason {
            Some(reason) => sink.emit(ParseEvent::LineDropped {
                line_number: index + 1,
                reason,
            }),
            None => cleaned.push(line.to_string()),
        }
    }

    cleaned
}

/// Lines separated by `\r\n`, `\n` or a lone `\r`; a final terminator
/// does not start another line
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}
