//! Utility functions

/// URL encode a mount or secret path
///
/// Mounts and secret names are slash-separated paths in the store, so `/`
/// is kept verbatim; everything else unsafe in a URL path is escaped.
pub fn encode_path(s: &str) -> String {
    use percent_encoding::{AsciiSet, CONTROLS};

    const FRAGMENT: &AsciiSet = &CONTROLS
        .add(b' ')
        .add(b'"')
        .add(b'<')
        .add(b'>')
        .add(b'`')
        .add(b'#')
        .add(b'?')
        .add(b'{')
        .add(b'}')
        .add(b'%');

    percent_encoding::utf8_percent_encode(s, FRAGMENT).to_string()
}
