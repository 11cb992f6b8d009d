//! The fenced submodule change section.

use crate::message::format::FormattedChange;

/// First line of the fenced section.
pub const BLOCK_HEADER: &str = "Submodule changes:";

/// Last line of the fenced section.
pub const BLOCK_FOOTER: &str = "End of submodule changes:";

/// Assemble the fenced section from per-submodule outputs.
///
/// Each submodule contributes its `path:` header, its display lines, and a
/// blank separator line (including the last submodule, separating it from
/// the footer). An empty change set produces no section at all, which tells
/// the splicer to leave the message alone.
pub fn compose_block(changes: &[FormattedChange]) -> Option<String> {
    if changes.is_empty() {
        return None;
    }

    let mut lines = vec![BLOCK_HEADER.to_string()];

    for change in changes {
        lines.push(format!("{}:", change.path));
        lines.extend(change.lines.iter().cloned());
        lines.push(String::new());
    }

    lines.push(BLOCK_FOOTER.to_string());

    Some(lines.join("\n"))
}

/// Locate an existing fenced section, returning the inclusive line range
/// from header to footer.
///
/// The delimiters are matched as exact whole lines. This is the only place
/// that knows how a prior section is recognized; a submodule commit subject
/// that reproduces the delimiter strings verbatim can confuse it, which is
/// an accepted limitation.
pub fn find_block<S: AsRef<str>>(lines: &[S]) -> Option<(usize, usize)> {
    let start = lines.iter().position(|l| l.as_ref() == BLOCK_HEADER)?;
    let end = lines[start..]
        .iter()
        .position(|l| l.as_ref() == BLOCK_FOOTER)?
        + start;
    Some((start, end))
}
