// Author: Dustin Pilgrim
// License: MIT

use std::iter::Enumerate;
use std::str::Lines;

pub(crate) mod scanner;

/// A trimmed, non-empty, non-comment source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number in the raw input.
    pub number: usize,
    pub text: &'a str,
}

/// Lexical preprocessor: yields logical lines in source order.
///
/// Only full-line comments are dropped. A `#` after real content is kept as part
/// of the line and left for the parser to deal with.
pub struct Lexer<'a> {
    input: Enumerate<Lines<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.lines().enumerate(),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, raw) = self.input.next()?;
            let text = raw.trim();
            if text.is_empty() || is_comment(text) {
                continue;
            }
            return Some(Line { number: index + 1, text });
        }
    }
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}

/// Collect every logical line of `input`.
pub fn logical_lines(input: &str) -> Vec<Line<'_>> {
    Lexer::new(input).collect()
}
