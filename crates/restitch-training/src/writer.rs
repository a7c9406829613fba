//! Shared field-writing and tag-closing primitives.
//!
//! Every reconstruction path goes through these two functions so that
//! segment-boundary semantics are identical across entity families
//! instead of re-implemented per generator.

use quick_xml::escape::escape;

use restitch_tagging::Label;

use crate::tables::ElementTable;

/// Append the closing element for `prev_base` when the base tag
/// changed. Returns whether a closing element was written (tags without
/// a table entry close silently).
pub fn test_closing_tag(
    buf: &mut String,
    current_base: Option<&str>,
    prev_base: Option<&str>,
    table: &ElementTable,
) -> bool {
    if current_base == prev_base {
        return false;
    }
    let Some(prev) = prev_base else {
        return false;
    };
    let Some(element) = table.element_for(prev) else {
        return false;
    };
    buf.push_str("</");
    buf.push_str(element);
    buf.push('>');
    true
}

/// Write one token for `target_tag` if the label matches it (with or
/// without the segment-start prefix). A matching continuation emits
/// plain escaped text; a matching segment start (or first occurrence
/// after another tag) emits `opening` first. `has_space` prefixes a
/// single separating space. Returns whether the label matched.
pub fn write_field(
    buf: &mut String,
    label: &Label,
    prev_base: Option<&str>,
    text: &str,
    target_tag: &str,
    opening: &str,
    has_space: bool,
) -> bool {
    if label.base() != target_tag {
        return false;
    }
    if has_space {
        buf.push(' ');
    }
    if label.is_segment_start() || prev_base != Some(target_tag) {
        buf.push_str(opening);
    }
    buf.push_str(&escape(text));
    true
}
