//! Extract the Content-Type from collected response header lines.

/// Find the `Content-Type` value among raw header lines.
///
/// Lines are collected across the whole redirect chain; the last occurrence
/// wins, so the final response's value is the one returned. The value is kept
/// verbatim (parameters such as charset included) for error reporting.
pub fn content_type_of(lines: &[String]) -> Option<String> {
    let mut content_type = None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                content_type = Some(value.trim().to_string());
            }
        }
    }

    content_type
}
