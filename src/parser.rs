//! Line parser
//!
//! Splits a raw input line into a command name and arguments. Whitespace
//! separates tokens except inside quote pairs; an unterminated quote runs
//! to the end of the line rather than failing.

/// Parse a raw line. Empty or whitespace-only input yields an empty
/// command name, which the dispatcher treats as a no-op.
pub fn parse(raw: &str) -> (String, Vec<String>) {
    let mut tokens = tokenize(raw).into_iter();
    let command = tokens.next().unwrap_or_default();
    (command, tokens.collect())
}

fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_single_quote = false;
    let mut in_double_quote = false;

    for c in raw.chars() {
        match c {
            '\'' if !in_double_quote => {
                in_single_quote = !in_single_quote;
                in_token = true;
            }
            '"' if !in_single_quote => {
                in_double_quote = !in_double_quote;
                in_token = true;
            }
            c if c.is_whitespace() && !in_single_quote && !in_double_quote => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_token {
        tokens.push(current);
    }
    tokens
}
