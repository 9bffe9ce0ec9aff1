//! Resolves a raw label/value line from an attribute group to a field slot.
//!
//! Labels and values are not independently addressable in the listing
//! markup, so callers hand over the combined text and get back the slot
//! plus the value with the label stripped.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSlot {
    Serial,
    Colors,
    DateStolen,
    Location,
    Unknown,
}

/// Recognized label prefixes in match priority order. None of these may be
/// a prefix of another; `prefixes_are_prefix_free` guards extensions.
const LABEL_PREFIXES: &[(&str, FieldSlot)] = &[
    ("SERIAL", FieldSlot::Serial),
    ("PRIMARY COLORS", FieldSlot::Colors),
    ("STOLEN", FieldSlot::DateStolen),
    ("LOCATION", FieldSlot::Location),
];

/// Match `raw` against the label vocabulary. The first matching prefix
/// wins; the prefix and its `:` separator are stripped from the returned
/// value. Unrecognized text resolves to `(Unknown, "")` — noise lines are
/// expected and never an error.
pub fn classify(raw: &str) -> (FieldSlot, String) {
    let normalized = collapse_lines(raw);

    for &(prefix, slot) in LABEL_PREFIXES {
        if let Some(value) = strip_label(&normalized, prefix) {
            return (slot, value.to_owned());
        }
    }

    (FieldSlot::Unknown, String::new())
}

fn strip_label<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    if text.len() < prefix.len() || !text.is_char_boundary(prefix.len()) {
        return None;
    }
    let (head, rest) = text.split_at(prefix.len());
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }
    Some(rest.trim_start_matches(':').trim_start())
}

/// Trim and collapse embedded newline runs into single spaces. Also used
/// for titles, which wrap across blank lines in the rendered markup.
pub(crate) fn collapse_lines(raw: &str) -> String {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
