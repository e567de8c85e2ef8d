#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod numeral;
pub mod parser;
pub mod syntax;

extern crate regex;

/// Character offset into the source a lexer was configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(pub u32);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

/// Finds the line holding the character at `position`.
///
/// Returns the 1-based line number, the line text and the column of the
/// position within that line. Positions past the end point at the end of
/// the last line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;
    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in source.split_inclusive('\n') {
        let end = start + line.chars().count();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        last = (line_number, line.to_string(), pos - start);
        start = end;
        line_number += 1;
    }

    // end of input, or an empty source
    let (line_number, line, _) = last;
    let column = line.trim_end_matches('\n').chars().count();
    (line_number, line, column)
}

#[cfg(test)]
mod tests {
    use super::{get_line_at_position, render_error};
    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "1 + 2\n3 * (4\n";

        let (line_number, line, line_pos) = get_line_at_position(source, 4);
        assert_eq!(line_number, 1);
        assert_eq!(line, "1 + 2\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = get_line_at_position(source, 10);
        assert_eq!(line_number, 2);
        assert_eq!(line, "3 * (4\n");
        assert_eq!(line_pos, 4);
    }

    #[test]
    fn test_get_line_past_end() {
        let (line_number, line, line_pos) = get_line_at_position("2 +", 3);
        assert_eq!(line_number, 1);
        assert_eq!(line, "2 +");
        assert_eq!(line_pos, 3);
    }

    #[test]
    fn test_render_error() {
        let error = Error::new(ErrorImpl::UnknownToken { token: '#' }, Position(4));
        let rendered = render_error(&error, "2 + # 3");

        assert_eq!(
            rendered,
            "Error: UnknownToken\n  |\n1 | 2 + # 3\n  | ----^\n"
        );
    }
}

/// Renders an error against the source it was raised for.
///
/// ```text
/// Error: UnknownToken
///   |
/// 1 | 2 + # 3
///   | ----^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut rendered = String::new();
    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
