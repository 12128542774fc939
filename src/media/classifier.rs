// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media fragment classification.
//!
//! Media strip entries are hand-authored markup fragments. This module only
//! decides whether a fragment is an embedded frame and pulls single
//! attribute values out of it; it never parses the markup.

/// Opening token of an embedded frame element, lowercase.
const FRAME_TOKEN: &str = "<iframe";

/// True if the trimmed, lowercased fragment starts with `<iframe`.
pub fn is_embedded_frame(fragment: &str) -> bool {
    fragment.trim().to_lowercase().starts_with(FRAME_TOKEN)
}

/// Value of the first `src="..."` attribute, or `""` if there is none.
pub fn extract_source(fragment: &str) -> &str {
    extract_attribute(fragment, "src").unwrap_or("")
}

/// Value of the first `name="value"` occurrence with a non-empty value.
///
/// This is a plain first-match scan: occurrences whose value is empty are
/// skipped and the scan continues after them.
pub fn extract_attribute<'a>(fragment: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{}=\"", name);

    for (start, _) in fragment.match_indices(&needle) {
        let rest = &fragment[start + needle.len()..];
        // No closing quote anywhere after this point means no later match either
        let end = rest.find('"')?;
        if end > 0 {
            return Some(&rest[..end]);
        }
    }

    None
}

/// Authored height of a frame fragment in pixels, if it declares one.
pub fn frame_height(fragment: &str) -> Option<f32> {
    extract_attribute(fragment, "height")?
        .trim()
        .trim_end_matches("px")
        .parse::<f32>()
        .ok()
        .filter(|h| h.is_finite() && *h > 0.0)
}
