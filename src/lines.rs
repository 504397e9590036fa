use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

// Alternation is leftmost-first, so "\r\n" wins over a lone "\r".
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r\n|\r|\n").expect("Failed to compile line break pattern")
});

/// Split raw text into lines on `\r\n`, `\r` or `\n`.
///
/// Empty input yields a single empty line, and a trailing line break
/// yields a trailing empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    LINE_BREAK.split(text).map(str::to_string).collect()
}

pub fn join_lines<S: AsRef<str>>(lines: &[S], ending: LineEnding) -> String {
    let mut joined = String::new();
    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 {
            joined.push_str(ending.as_str());
        }
        joined.push_str(line.as_ref());
    }
    joined
}

/// Line terminator used when joining transformed output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
    Cr,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
            LineEnding::Cr => "\r",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LineEnding::Crlf => "crlf",
            LineEnding::Lf => "lf",
            LineEnding::Cr => "cr",
        }
    }
}

impl FromStr for LineEnding {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "crlf" => Ok(LineEnding::Crlf),
            "lf" => Ok(LineEnding::Lf),
            "cr" => Ok(LineEnding::Cr),
            _ => Err(ConfigError::InvalidValue {
                field: "output.line_ending".to_string(),
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_mixed_line_endings() {
        let lines = split_lines("one\r\ntwo\rthree\nfour");
        assert_eq!(lines, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_crlf_is_one_break() {
        let lines = split_lines("a\r\n\r\nb");
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_empty_input_is_single_empty_line() {
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_trailing_break_yields_empty_line() {
        assert_eq!(split_lines("foo123\nbar\n"), vec!["foo123", "bar", ""]);
    }

    #[test]
    fn test_resplit_after_join_is_stable() {
        let samples = ["", "a", "a\nb", "\r\n\r\n", "x\ry\r\nz\n", "  spaced  \n\tTab"];
        for sample in samples {
            let lines = split_lines(sample);
            for ending in [LineEnding::Crlf, LineEnding::Lf, LineEnding::Cr] {
                let rejoined = join_lines(&lines, ending);
                assert_eq!(split_lines(&rejoined), lines, "sample {:?} via {}", sample, ending);
            }
        }
    }

    #[test]
    fn test_join_uses_crlf_by_default() {
        let joined = join_lines(&["hello", "world"], LineEnding::default());
        assert_eq!(joined, "hello\r\nworld");
    }

    #[test]
    fn test_parse_line_ending() {
        assert_eq!("LF".parse::<LineEnding>().unwrap(), LineEnding::Lf);
        assert_eq!("crlf".parse::<LineEnding>().unwrap(), LineEnding::Crlf);
        assert!("unix".parse::<LineEnding>().is_err());
    }
}
