use tracing::trace;

use super::*;
use crate::ast::Block;

/// Parse `name { ... }` starting at the current line, which must begin with `name`.
///
/// The `{` may sit on the header line or alone at the start of the next one.
/// Text after the closing `}` is left on the cursor for the caller.
pub(super) fn parse_block(parser: &mut Parser, name: &str) -> Result<Block, ConfError> {
    let opened_at = parser.line();
    trace!(block = name, line = opened_at, "entering block");

    parser.consume(name.len());
    if parser.peek() == Some("") {
        parser.advance();
    }

    match parser.peek() {
        Some(header) if header.starts_with('{') => parser.consume(1),
        found => {
            return Err(ConfError::ExpectedBlockOpen {
                block: name.to_string(),
                found: found.unwrap_or("end of input").to_string(),
                line: parser.line(),
                hint: Some(format!("Write `{} {{` to open the block", name)),
                code: Some(202),
            });
        }
    }

    let mut block = Block::new();

    while let Some(line) = parser.peek() {
        if line.is_empty() {
            parser.advance();
        } else if line.starts_with('}') {
            parser.consume(1);
            trace!(block = name, line = parser.line(), "closed block");
            return Ok(block);
        } else if starts_with_keyword(line, PARAMETERS) {
            // Generic over the name, so `parameters` may nest inside `parameters`.
            let nested = parse_block(parser, PARAMETERS)?;
            block.parameters = Some(Box::new(nested));
        } else {
            let line_number = parser.line();
            let (key, value) = value::parse_pair(parser)?;
            if let Some(hint) = reserved_key(&key, false) {
                return Err(reserved_key_error(key, line_number, hint));
            }
            block.pairs.insert(key, value);
        }
    }

    Err(ConfError::UnterminatedBlock {
        block: name.to_string(),
        line: opened_at,
        hint: Some("Add a closing '}'".into()),
        code: Some(203),
    })
}
