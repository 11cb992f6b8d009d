//! Merging the fenced section into the draft commit message.

use crate::git::trailers::trailer_block_start;
use crate::message::block::find_block;

/// Merge the composed section into the draft message.
///
/// Pure function of the draft and the new section. Four transitions:
/// - neither an existing section nor a new one: the draft is returned
///   byte-identical;
/// - existing section, no new one: the old section is removed;
/// - no existing section, new one: inserted before the trailer block,
///   separated by one blank line on each side (appended at the end when
///   there are no trailers);
/// - both: the old section is replaced in place by the new one.
///
/// The trailer block, when present, is preserved verbatim as the suffix.
pub fn splice_message(draft: &str, block: Option<&str>) -> String {
    let mut lines: Vec<String> = draft.lines().map(str::to_string).collect();
    let had_block = strip_block(&mut lines);

    if block.is_none() && !had_block {
        return draft.to_string();
    }

    let stripped = lines.join("\n");
    let (mut prose, trailer_lines) = match trailer_block_start(&stripped) {
        Some(start) => (lines[..start].to_vec(), Some(lines[start..].to_vec())),
        None => (lines, None),
    };

    while prose.last().is_some_and(|l| l.trim().is_empty()) {
        prose.pop();
    }

    let mut out = prose;

    if let Some(block) = block {
        if !out.is_empty() {
            out.push(String::new());
        }
        out.extend(block.lines().map(str::to_string));
    }

    if let Some(trailers) = trailer_lines {
        out.push(String::new());
        out.extend(trailers);
    }

    let mut text = out.join("\n");
    text.push('\n');
    text
}

/// Remove an existing fenced section (plus the single blank line following
/// it, if any) from the message lines. Returns whether one was found.
fn strip_block(lines: &mut Vec<String>) -> bool {
    let Some((start, end)) = find_block(lines.as_slice()) else {
        return false;
    };

    let mut after = end + 1;
    if lines.get(after).is_some_and(|l| l.is_empty()) {
        after += 1;
    }
    lines.drain(start..after);
    true
}
