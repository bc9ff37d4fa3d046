use std::{collections::VecDeque, fmt::Display, io::BufRead, str::FromStr};

use anyhow::{Context, Result};

/// Whitespace separated tokens read from a text stream.
///
/// Lines are only pulled from the reader once the tokens already buffered
/// run out, so an interactive reader blocks one line at a time.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// The next token, or `None` at the end of the stream.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .context("couldn't read from input")?;
            if read == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_ascii_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Read the next token and parse it, failing on end of input.
    pub fn parse_next<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let token = self
            .next_token()?
            .with_context(|| format!("unexpected end of input, expected {}", what))?;
        token
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("invalid {} {:?}: {}", what, token, e))
    }
}

#[cfg(test)]
mod tokens_tests {
    use std::io::Cursor;

    use super::Tokens;

    #[test]
    fn test_tokens_span_lines() {
        let mut tokens = Tokens::new(Cursor::new("3\n 1  2\n\n\t3\n"));
        assert_eq!(tokens.parse_next::<usize>("count").unwrap(), 3);
        assert_eq!(tokens.parse_next::<i64>("element").unwrap(), 1);
        assert_eq!(tokens.parse_next::<i64>("element").unwrap(), 2);
        assert_eq!(tokens.parse_next::<i64>("element").unwrap(), 3);
        assert_eq!(tokens.next_token().unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        let mut tokens = Tokens::new(Cursor::new("abc"));
        let err = tokens.parse_next::<i64>("element").unwrap_err();
        assert!(err.to_string().contains("invalid element \"abc\""));

        let err = tokens.parse_next::<i64>("element").unwrap_err();
        assert!(err.to_string().contains("unexpected end of input"));
    }
}
