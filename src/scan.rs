//! Line scanner: turns source text into depth-annotated content records.
//!
//! The scanner does no semantic parsing. It measures indentation, computes
//! the nesting depth of every non-blank line, records where blank lines sit
//! (the decoder needs them for strict-mode array checks), and hands the
//! trimmed content onward.
//!
//! Strict mode requires indentation to be spaces only and an exact multiple
//! of the configured unit. Lenient mode accepts any indentation and rounds
//! the depth down.

use crate::error::{Error, Result};
use crate::options::DecodeOptions;

/// One non-blank source line.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParsedLine<'a> {
    /// Nesting depth: leading spaces divided by the indent unit.
    pub depth: usize,
    /// Line content with indentation and trailing whitespace removed.
    pub content: &'a str,
    /// 1-based source line number.
    pub line_no: usize,
}

/// Scanner output: content lines plus the positions of blank lines.
#[derive(Debug)]
pub(crate) struct Scan<'a> {
    pub lines: Vec<ParsedLine<'a>>,
    /// Line numbers of blank (whitespace-only) lines, in order.
    pub blanks: Vec<usize>,
}

pub(crate) fn scan<'a>(input: &'a str, options: &DecodeOptions) -> Result<Scan<'a>> {
    let unit = options.indent.max(1);
    let mut lines = Vec::new();
    let mut blanks = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = raw.trim_end();
        if trimmed.trim_start().is_empty() {
            blanks.push(line_no);
            continue;
        }

        let mut columns = 0;
        let mut has_tab = false;
        for ch in trimmed.chars() {
            match ch {
                ' ' => columns += 1,
                '\t' => {
                    has_tab = true;
                    columns += 1;
                }
                _ => break,
            }
        }

        if options.strict {
            if has_tab {
                return Err(Error::InvalidIndentation {
                    line: line_no,
                    detail: "tab character in indentation".to_string(),
                });
            }
            if columns % unit != 0 {
                return Err(Error::InvalidIndentation {
                    line: line_no,
                    detail: format!("{columns} spaces is not a multiple of {unit}"),
                });
            }
        }

        lines.push(ParsedLine {
            depth: columns / unit,
            // Leading whitespace is all ASCII, one byte per column.
            content: &trimmed[columns..],
            line_no,
        });
    }

    Ok(Scan { lines, blanks })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DecodeOptions;

    fn strict() -> DecodeOptions {
        DecodeOptions::default()
    }

    fn lenient() -> DecodeOptions {
        DecodeOptions::default().with_strict(false)
    }

    #[test]
    fn test_depths_and_content() {
        let scan = scan("a: 1\n  b: 2\n    c: 3", &strict()).unwrap();
        let depths: Vec<_> = scan.lines.iter().map(|l| l.depth).collect();
        assert_eq!(depths, vec![0, 1, 2]);
        assert_eq!(scan.lines[1].content, "b: 2");
        assert_eq!(scan.lines[2].line_no, 3);
    }

    #[test]
    fn test_blank_lines_recorded() {
        let scan = scan("a: 1\n\n   \nb: 2", &strict()).unwrap();
        assert_eq!(scan.blanks, vec![2, 3]);
        assert_eq!(scan.lines.len(), 2);
        assert_eq!(scan.lines[1].line_no, 4);
    }

    #[test]
    fn test_strict_rejects_odd_indent() {
        let err = scan("a: 1\n   b: 2", &strict()).unwrap_err();
        assert!(matches!(err, Error::InvalidIndentation { line: 2, .. }));
    }

    #[test]
    fn test_strict_rejects_tabs() {
        let err = scan("\tb: 2", &strict()).unwrap_err();
        assert!(matches!(err, Error::InvalidIndentation { line: 1, .. }));
    }

    #[test]
    fn test_lenient_rounds_down() {
        let scan = scan("   b: 2", &lenient()).unwrap();
        assert_eq!(scan.lines[0].depth, 1);
    }

    #[test]
    fn test_trailing_whitespace_trimmed() {
        let scan = scan("a: 1   \r", &strict()).unwrap();
        assert_eq!(scan.lines[0].content, "a: 1");
    }

    #[test]
    fn test_tabs_allowed_in_content() {
        let scan = scan("  1\tAlice", &strict()).unwrap();
        assert_eq!(scan.lines[0].content, "1\tAlice");
        assert_eq!(scan.lines[0].depth, 1);
    }
}
