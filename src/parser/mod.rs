use crate::ConfError;
use crate::ast::Document;
use crate::lexer::logical_lines;
use crate::lexer::scanner::Cursor;

mod block;
mod document;
mod value;

pub(crate) const DEVICE: &str = "device";
pub(crate) const CONTROLLER: &str = "controller";
pub(crate) const PARAMETERS: &str = "parameters";
pub(crate) const DEVICES: &str = "devices";

/// What happens to text following a value on the same line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingContent {
    /// Only `KEY = VALUE` is consumed; the rest of the line is parsed as the next
    /// statement, so `device { A = "B" }` fits on one line. A `#` after a value
    /// is not a comment here: `name = "Lamp" # note` is rejected.
    #[default]
    Reattach,
    /// Everything after `=` is the value and anything the value does not use is
    /// dropped. A quoted string anywhere after `=` wins, and a `}` sharing the line
    /// with a pair is swallowed.
    Discard,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub trailing: TrailingContent,
}

pub struct Parser<'a> {
    cursor: Cursor<'a>,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(logical_lines(input)),
            options,
        }
    }

    pub(crate) fn peek(&self) -> Option<&'a str> {
        self.cursor.peek()
    }

    pub(crate) fn advance(&mut self) {
        self.cursor.advance();
    }

    pub(crate) fn consume(&mut self, len: usize) {
        self.cursor.consume(len);
    }

    pub(crate) fn line(&self) -> usize {
        self.cursor.line_number()
    }

    pub fn parse_document(&mut self) -> Result<Document, ConfError> {
        document::parse_document(self)
    }
}

/// True when `line` opens a block called `name`: the name must be followed by
/// the end of the line, whitespace or `{`. `deviceNode = ...` is therefore a pair.
pub(crate) fn starts_with_keyword(line: &str, name: &str) -> bool {
    line.strip_prefix(name).is_some_and(|rest| {
        rest.is_empty() || rest.starts_with('{') || rest.starts_with(char::is_whitespace)
    })
}

/// Why `key` cannot be stored as a pair at this level, if it cannot.
///
/// Such a key would be written out as text that reads back as a block header,
/// a comment or a different key.
pub(crate) fn reserved_key(key: &str, top_level: bool) -> Option<&'static str> {
    if key.starts_with('#') {
        return Some("A key starting with '#' reads back as a comment");
    }
    if key.contains('=') || key.starts_with(['{', '}']) {
        return Some("Keys cannot contain '=' or start with a brace");
    }
    let names_block = if top_level {
        key == DEVICES || starts_with_keyword(key, DEVICE) || starts_with_keyword(key, CONTROLLER)
    } else {
        starts_with_keyword(key, PARAMETERS)
    };
    names_block.then_some("This name opens a block; write `name { ... }` instead")
}

pub(crate) fn reserved_key_error(key: String, line: usize, hint: &str) -> ConfError {
    ConfError::ReservedKey {
        key,
        line,
        hint: Some(hint.into()),
        code: Some(206),
    }
}

#[cfg(test)]
mod tests;
