// Byte order marks count as whitespace here so a BOM-prefixed first line trims clean.
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

pub fn trim_line(line: &str) -> &str {
    line.trim_matches(is_trimmable)
}

/// Strip leading and trailing whitespace from every line
pub fn trim(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| trim_line(&line).to_string())
        .collect()
}
