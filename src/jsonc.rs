//! Comment stripping for JSON-with-comments configuration files.
//!
//! `.jshintrc` files routinely carry `//` and `/* */` comments, but the
//! consumer requires strict JSON. `strip_comments` removes both comment
//! styles without touching comment markers inside string literals.

/// Remove `//` line comments and `/* */` block comments from `input`.
///
/// Newlines terminating a line comment are preserved so line numbers in any
/// downstream parse error still point at the original file. An unterminated
/// block comment swallows the rest of the input.
pub fn strip_comments(input: &str) -> String {
    #[derive(PartialEq)]
    enum State {
        Code,
        InString,
        InLineComment,
        InBlockComment,
    }

    let mut out = String::with_capacity(input.len());
    let mut state = State::Code;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Code => match c {
                '"' => {
                    state = State::InString;
                    out.push(c);
                }
                '/' => match chars.peek() {
                    Some('/') => {
                        chars.next();
                        state = State::InLineComment;
                    }
                    Some('*') => {
                        chars.next();
                        state = State::InBlockComment;
                    }
                    _ => out.push(c),
                },
                _ => out.push(c),
            },
            State::InString => {
                out.push(c);
                match c {
                    '\\' => {
                        // Escaped character, never ends the string
                        if let Some(next) = chars.next() {
                            out.push(next);
                        }
                    }
                    '"' => state = State::Code,
                    _ => {}
                }
            }
            State::InLineComment => {
                if c == '\n' {
                    out.push(c);
                    state = State::Code;
                }
            }
            State::InBlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = State::Code;
                }
            }
        }
    }

    out
}
