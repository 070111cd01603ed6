use crate::error::ParseGeometryError;
use std::str::FromStr;

/// Whitespace-tolerant token reader shared by the `FromStr` impls of the geometry types.
pub(crate) struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    /// Consumes `token` if it is next in the input.
    pub(crate) fn test(&mut self, token: &str) -> bool {
        self.rest = self.rest.trim_start();
        match self.rest.strip_prefix(token) {
            Some(tail) => {
                self.rest = tail;
                true
            }
            None => false,
        }
    }

    pub(crate) fn expect(&mut self, token: &'static str) -> Result<(), ParseGeometryError> {
        if self.test(token) {
            Ok(())
        } else {
            Err(ParseGeometryError::Expected {
                expected: token,
                found: self.peek_word(),
            })
        }
    }

    /// Reads an optionally signed run of ASCII digits.
    pub(crate) fn number<N: FromStr>(&mut self) -> Result<N, ParseGeometryError> {
        self.rest = self.rest.trim_start();
        let end = self
            .rest
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
            .map_or(self.rest.len(), |(i, _)| i);

        let (text, tail) = self.rest.split_at(end);
        if text.is_empty() {
            return Err(ParseGeometryError::InvalidNumber {
                text: self.peek_word(),
            });
        }
        let n = text.parse().map_err(|_| ParseGeometryError::InvalidNumber {
            text: text.to_string(),
        })?;
        self.rest = tail;
        Ok(n)
    }

    pub(crate) fn finish(self) -> Result<(), ParseGeometryError> {
        let rest = self.rest.trim();
        if rest.is_empty() {
            Ok(())
        } else {
            Err(ParseGeometryError::TrailingInput {
                rest: rest.to_string(),
            })
        }
    }

    fn peek_word(&self) -> String {
        self.rest
            .trim_start()
            .chars()
            .take_while(|c| !c.is_whitespace())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_reads_tokens_and_numbers() {
        let mut cur = Cursor::new("  ( 12 ,-3)");
        assert!(cur.test("("));
        assert_eq!(cur.number::<usize>().unwrap(), 12);
        assert!(!cur.test(")"));
        cur.expect(",").unwrap();
        assert_eq!(cur.number::<isize>().unwrap(), -3);
        cur.expect(")").unwrap();
        cur.finish().unwrap();
    }

    #[test]
    fn it_reports_what_it_found() {
        let mut cur = Cursor::new("[1, 2]");
        assert_eq!(
            cur.expect("("),
            Err(ParseGeometryError::Expected {
                expected: "(",
                found: "[1,".to_string(),
            })
        );
    }

    #[test]
    fn it_rejects_signs_for_unsigned_numbers() {
        let mut cur = Cursor::new("-4");
        assert_eq!(
            cur.number::<usize>(),
            Err(ParseGeometryError::InvalidNumber {
                text: "-4".to_string(),
            })
        );
    }

    #[test]
    fn it_rejects_trailing_input() {
        let mut cur = Cursor::new("7 junk");
        assert_eq!(cur.number::<usize>().unwrap(), 7);
        assert_eq!(
            cur.finish(),
            Err(ParseGeometryError::TrailingInput {
                rest: "junk".to_string(),
            })
        );
    }
}
