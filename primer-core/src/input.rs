//! Whitespace-delimited token reader
//!
//! Reads the same way the exercises consume standard input: values are
//! separated by any run of whitespace, including newlines, and a whole
//! line can be taken at any point.

use crate::{Error, Result};
use std::io::{BufRead, ErrorKind};
use std::str::FromStr;

/// Token reader over any buffered source
#[derive(Debug)]
pub struct TokenReader<R> {
    inner: R,
    /// Current line, including its terminator
    line: String,
    /// Byte offset of the first unread character in `line`
    pos: usize,
}

impl<R: BufRead> TokenReader<R> {
    /// Wrap a buffered reader
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: String::new(),
            pos: 0,
        }
    }

    /// Next whitespace-delimited token, or `None` at end of input
    pub fn next_token(&mut self) -> Result<Option<String>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }

        let rest = &self.line[self.pos..];
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let token = rest[..len].to_string();
        self.pos += len;
        Ok(Some(token))
    }

    /// Next token parsed as `T`
    ///
    /// `what` names the value in the error when the token does not parse.
    pub fn next_parsed<T: FromStr>(&mut self, what: &'static str) -> Result<Option<T>> {
        match self.next_token()? {
            None => Ok(None),
            Some(token) => token
                .parse::<T>()
                .map(Some)
                .map_err(|_| Error::Parse { what, token }),
        }
    }

    /// Like [`next_parsed`](Self::next_parsed), but end of input is an error
    pub fn expect_parsed<T: FromStr>(&mut self, what: &'static str) -> Result<T> {
        self.next_parsed(what)?.ok_or(Error::UnexpectedEof { expected: what })
    }

    /// First non-whitespace character
    pub fn next_char(&mut self) -> Result<Option<char>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }

        let c = self.line[self.pos..].chars().next();
        if let Some(c) = c {
            self.pos += c.len_utf8();
        }
        Ok(c)
    }

    /// Rest of the current line, or the next line if the current one is used up
    ///
    /// The line terminator (`\n` or `\r\n`) is stripped.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        if self.pos >= self.line.len() && !self.fill()? {
            return Ok(None);
        }

        let rest = &self.line[self.pos..];
        let rest = rest.strip_suffix('\n').unwrap_or(rest);
        let rest = rest.strip_suffix('\r').unwrap_or(rest);
        let line = rest.to_string();
        self.pos = self.line.len();
        Ok(Some(line))
    }

    /// Advance past whitespace; false when input is exhausted
    fn skip_whitespace(&mut self) -> Result<bool> {
        loop {
            let rest = &self.line[self.pos..];
            match rest.find(|c: char| !c.is_whitespace()) {
                Some(offset) => {
                    self.pos += offset;
                    return Ok(true);
                }
                None => {
                    if !self.fill()? {
                        return Ok(false);
                    }
                }
            }
        }
    }

    /// Load the next line; false at end of input
    ///
    /// A line that is not UTF-8 is rejected as input, not as an IO failure.
    fn fill(&mut self) -> Result<bool> {
        self.line.clear();
        self.pos = 0;
        let read = self.inner.read_line(&mut self.line).map_err(|e| match e.kind() {
            ErrorKind::InvalidData => Error::InvalidInput("input is not valid UTF-8".to_string()),
            _ => Error::Io(e),
        })?;
        Ok(read > 0)
    }
}
