/// Drop every empty line, keeping the order of the rest.
///
/// Whitespace-only lines survive unless they were trimmed earlier.
pub fn remove_blank(lines: Vec<String>) -> Vec<String> {
    lines.into_iter().filter(|line| !line.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_removes_empty_lines_in_order() {
        let lines = owned(&["a", "", "b", "", "", "c"]);
        assert_eq!(remove_blank(lines), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_whitespace_only_lines_are_not_blank() {
        let lines = owned(&["  ", "", "\t"]);
        assert_eq!(remove_blank(lines), vec!["  ", "\t"]);
    }

    #[test]
    fn test_output_never_longer_and_never_empty() {
        let input = owned(&["", "x", "", "yy", ""]);
        let output = remove_blank(input.clone());
        assert!(output.len() <= input.len());
        assert!(output.iter().all(|line| !line.is_empty()));
    }
}
