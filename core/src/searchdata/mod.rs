//! Parser for the documentation generator's JavaScript search shards.
//!
//! A shard is a single `var searchData=` assignment:
//!
//! ```text
//! var searchData=
//! [
//!   ['call',['Call',['../classCall.html',1,'Call'],
//!                   ['../classCall.html#a7fdd…',1,'Call::Call()']]],
//!   ['call_2ecpp',['Call.cpp',['../Call_8cpp.html',1,'']]]
//! ];
//! ```
//!
//! Strings are single-quoted with backslash escapes; the numeric element of
//! each child is a frame flag the index has no use for. Each `[url, flag,
//! detail]` child flattens into one `(label, url)` pair on the record's key:
//! the detail string when non-empty, otherwise the record's display name.

use crate::error::ParseError;
use crate::index::RawRecord;

/// Parses one shard into raw records, preserving shard order.
pub fn parse(src: &str) -> Result<Vec<RawRecord>, ParseError> {
    let mut scanner = Scanner::new(src);
    scanner.prefix()?;

    let mut records = Vec::new();
    scanner.expect(b'[', "`[`")?;
    loop {
        if scanner.eat(b']') {
            break;
        }
        records.push(scanner.record()?);
        if !scanner.eat(b',') {
            scanner.expect(b']', "`]` or `,`")?;
            break;
        }
    }

    Ok(records)
}

struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn skip_ws(&mut self) {
        let rest = &self.src.as_bytes()[self.pos..];
        self.pos += rest
            .iter()
            .take_while(|b| b.is_ascii_whitespace())
            .count();
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    /// Consumes `byte` (after whitespace) if present.
    fn eat(&mut self, byte: u8) -> bool {
        self.skip_ws();
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, byte: u8, expected: &'static str) -> Result<(), ParseError> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(ParseError::Unexpected {
                offset: self.pos,
                expected,
            })
        }
    }

    fn eat_literal(&mut self, literal: &str) -> bool {
        self.skip_ws();
        if self.src[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// `var searchData=`, tolerating arbitrary whitespace between tokens.
    fn prefix(&mut self) -> Result<(), ParseError> {
        if self.eat_literal("var") && self.eat_literal("searchData") && self.eat(b'=') {
            Ok(())
        } else {
            Err(ParseError::MissingPrefix)
        }
    }

    /// `['key',['Name',child,child,…]]`
    fn record(&mut self) -> Result<RawRecord, ParseError> {
        self.expect(b'[', "`[`")?;
        let key = self.string()?;
        self.expect(b',', "`,`")?;
        self.expect(b'[', "`[`")?;
        let name = self.string()?;

        let mut targets = Vec::new();
        while self.eat(b',') {
            targets.push(self.child(&name)?);
        }
        self.expect(b']', "`]`")?;
        self.expect(b']', "`]`")?;

        Ok((key, targets))
    }

    /// `['url',flag,'detail']` → `(label, url)`
    fn child(&mut self, name: &str) -> Result<(String, String), ParseError> {
        self.expect(b'[', "`[`")?;
        let url = self.string()?;
        self.expect(b',', "`,`")?;
        self.flag()?;
        self.expect(b',', "`,`")?;
        let detail = self.string()?;
        self.expect(b']', "`]`")?;

        let label = if detail.is_empty() {
            name.to_string()
        } else {
            detail
        };
        Ok((label, url))
    }

    fn flag(&mut self) -> Result<(), ParseError> {
        self.skip_ws();
        let digits = self.src[self.pos..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 {
            return Err(ParseError::Unexpected {
                offset: self.pos,
                expected: "frame flag",
            });
        }
        self.pos += digits;
        Ok(())
    }

    /// Single-quoted string with backslash escapes.
    fn string(&mut self) -> Result<String, ParseError> {
        self.skip_ws();
        let start = self.pos;
        self.expect(b'\'', "string")?;

        let mut out = String::new();
        loop {
            match self.peek() {
                None => return Err(ParseError::UnterminatedString { offset: start }),
                Some(b'\'') => {
                    self.pos += 1;
                    return Ok(out);
                }
                Some(b'\\') => {
                    self.pos += 1;
                    let Some(escaped) = self.src[self.pos..].chars().next() else {
                        return Err(ParseError::UnterminatedString { offset: start });
                    };
                    out.push(escaped);
                    self.pos += escaped.len_utf8();
                }
                Some(_) => {
                    let Some(ch) = self.src[self.pos..].chars().next() else {
                        return Err(ParseError::UnterminatedString { offset: start });
                    };
                    out.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
