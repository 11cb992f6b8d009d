//! Trailer block location in a draft commit message.

/// Line index where the trailing trailer block starts, if the message has
/// one.
///
/// Whether trailers exist is decided by libgit2's trailer parser; the block
/// itself is the final paragraph of the message, matching git's own
/// last-paragraph model. Two carve-outs: trailing blank lines are not part
/// of the block, and a paragraph starting at line zero is never a trailer
/// block — a message consisting only of `key: value` lines keeps its
/// subject. A parse failure counts as "no trailers" and the whole message
/// is treated as prose.
pub fn trailer_block_start(message: &str) -> Option<usize> {
    let trailers = git2::message_trailers_strs(message).ok()?;
    if trailers.iter().count() == 0 {
        return None;
    }

    let lines: Vec<&str> = message.lines().collect();

    let mut end = lines.len();
    while end > 0 && lines[end - 1].trim().is_empty() {
        end -= 1;
    }

    let mut start = end;
    while start > 0 && !lines[start - 1].trim().is_empty() {
        start -= 1;
    }

    if start == 0 {
        return None;
    }

    Some(start)
}
