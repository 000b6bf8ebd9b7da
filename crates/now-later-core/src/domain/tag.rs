//! Tags
//!
//! Tags are free text attached to a task. They are trimmed and de-duplicated
//! when inserted; there is no separate tag registry.

/// Number of colour classes tags are spread across
pub const TAG_PALETTE_SIZE: usize = 10;

/// Trimmed tag, or `None` when nothing is left.
fn normalize_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Appends `raw` to `tags` unless it is blank or already present.
///
/// Returns `true` when the list changed.
pub fn insert_tag(tags: &mut Vec<String>, raw: &str) -> bool {
    match normalize_tag(raw) {
        Some(tag) if !tags.contains(&tag) => {
            tags.push(tag);
            true
        }
        _ => false,
    }
}

/// Stable palette slot for a tag.
///
/// 32-bit `h * 31 + unit` hash over UTF-16 code units, so a tag keeps its
/// colour across sessions and boards.
pub fn tag_color_index(tag: &str) -> usize {
    let hash = tag.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    });
    (hash.unsigned_abs() as usize) % TAG_PALETTE_SIZE
}
