use regex::Regex;

/// Rewrite a single line through `template`, or drop it.
///
/// Returns `None` when `pattern` finds no match in the line. Otherwise the
/// first occurrence of each `$i` token in the template is replaced with the
/// text of capture group `i`, starting from the whole match at `$0`.
/// Substitution stops at the first group that did not participate or
/// matched an empty string, so later groups are never substituted.
pub fn substitute_line(line: &str, pattern: &Regex, template: &str) -> Option<String> {
    let captures = pattern.captures(line)?;

    let mut result = template.to_string();
    for (idx, group) in captures.iter().enumerate() {
        let text = match group {
            Some(m) if !m.as_str().is_empty() => m.as_str(),
            _ => break,
        };
        result = result.replacen(&format!("${}", idx), text, 1);
    }

    if result.is_empty() {
        None
    } else {
        Some(result)
    }
}

/// Apply `substitute_line` to every line, dropping lines that do not match
pub fn substitute(lines: Vec<String>, pattern: &Regex, template: &str) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| substitute_line(line, pattern, template))
        .collect()
}
