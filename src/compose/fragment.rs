//! Comment stripping for YAML fragments.

/// Remove every line whose whitespace-trimmed content begins with `#`.
///
/// All other lines pass through unchanged, including blank lines and lines
/// with trailing or inline `#`. Original line terminators (`\n` or `\r\n`)
/// are preserved. Idempotent.
pub fn strip_comments(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    for line in src.split_inclusive('\n') {
        if line.trim_start().starts_with('#') {
            continue;
        }
        out.push_str(line);
    }
    out
}
