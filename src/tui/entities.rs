//! HTML entity decoding for question and answer text.
//!
//! The API returns text like `Who wrote &quot;Hamlet&quot;?`. Decoding is
//! display-only: scoring always compares the encoded originals.

/// Decodes named and numeric HTML entities. Unknown entities are left as-is.
pub fn decode_entities(input: &str) -> String {
    html_escape::decode_html_entities(input).into_owned()
}
