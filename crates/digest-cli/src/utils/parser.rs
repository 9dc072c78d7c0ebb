use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unbalanced brackets in '{0}'. Expected a list like '[d1, d2, d3]'.")]
    UnbalancedBrackets(String),

    #[error("Empty element at position {position} in '{input}'.")]
    EmptyElement { input: String, position: usize },

    #[error("Invalid value '{token}' at position {position}. Expected a non-negative integer.")]
    InvalidValue { token: String, position: usize },
}

/// Parses a list of non-negative integers.
///
/// Accepts the bracketed form `[d1, d2, d3]` as well as bare lists separated by
/// commas or whitespace. `[]` and blank input yield an empty list; rejecting an
/// empty digest is left to the caller.
pub fn parse_integer_list(input: &str) -> Result<Vec<u64>, ParseError> {
    let trimmed = input.trim();
    let content = match (trimmed.starts_with('['), trimmed.ends_with(']')) {
        (true, true) if trimmed.len() >= 2 => &trimmed[1..trimmed.len() - 1],
        (false, false) => trimmed,
        _ => return Err(ParseError::UnbalancedBrackets(trimmed.to_string())),
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let tokens: Vec<&str> = if content.contains(',') {
        content.split(',').map(str::trim).collect()
    } else {
        content.split_whitespace().collect()
    };

    tokens
        .into_iter()
        .enumerate()
        .map(|(idx, token)| {
            if token.is_empty() {
                return Err(ParseError::EmptyElement {
                    input: trimmed.to_string(),
                    position: idx + 1,
                });
            }
            token.parse::<u64>().map_err(|_| ParseError::InvalidValue {
                token: token.to_string(),
                position: idx + 1,
            })
        })
        .collect()
}

/// Formats a list the way [`parse_integer_list`] reads it back.
pub fn format_integer_list(values: &[u64]) -> String {
    let items: Vec<String> = values.iter().map(u64::to_string).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bracketed_comma_list() {
        assert_eq!(
            parse_integer_list("[2, 2, 3, 3, 4, 5, 6, 7, 8, 10]").unwrap(),
            vec![2, 2, 3, 3, 4, 5, 6, 7, 8, 10]
        );
    }

    #[test]
    fn parses_bare_comma_and_whitespace_lists() {
        assert_eq!(parse_integer_list("1,2 ,3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_integer_list("  4 5\t6\n").unwrap(), vec![4, 5, 6]);
        assert_eq!(parse_integer_list("[7 8]").unwrap(), vec![7, 8]);
    }

    #[test]
    fn empty_brackets_and_blank_input_yield_empty_list() {
        assert_eq!(parse_integer_list("[]").unwrap(), Vec::<u64>::new());
        assert_eq!(parse_integer_list("[  ]").unwrap(), Vec::<u64>::new());
        assert_eq!(parse_integer_list("   ").unwrap(), Vec::<u64>::new());
    }

    #[test]
    fn unbalanced_brackets_are_rejected() {
        assert_eq!(
            parse_integer_list("[1, 2"),
            Err(ParseError::UnbalancedBrackets("[1, 2".to_string()))
        );
        assert!(matches!(
            parse_integer_list("1, 2]"),
            Err(ParseError::UnbalancedBrackets(_))
        ));
        assert!(matches!(
            parse_integer_list("["),
            Err(ParseError::UnbalancedBrackets(_))
        ));
    }

    #[test]
    fn negative_and_non_numeric_tokens_are_rejected() {
        assert_eq!(
            parse_integer_list("[1, -2, 3]"),
            Err(ParseError::InvalidValue {
                token: "-2".to_string(),
                position: 2
            })
        );
        assert_eq!(
            parse_integer_list("1 x"),
            Err(ParseError::InvalidValue {
                token: "x".to_string(),
                position: 2
            })
        );
        assert!(matches!(
            parse_integer_list("[1.5]"),
            Err(ParseError::InvalidValue { .. })
        ));
    }

    #[test]
    fn empty_elements_are_rejected() {
        assert_eq!(
            parse_integer_list("[1,,2]"),
            Err(ParseError::EmptyElement {
                input: "[1,,2]".to_string(),
                position: 2
            })
        );
    }

    #[test]
    fn formatted_list_parses_back() {
        let values = vec![0, 2, 4, 7, 10];
        assert_eq!(format_integer_list(&values), "[0, 2, 4, 7, 10]");
        assert_eq!(parse_integer_list(&format_integer_list(&values)).unwrap(), values);
        assert_eq!(format_integer_list(&[]), "[]");
    }
}
