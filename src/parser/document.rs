use tracing::debug;

use super::*;

pub(super) fn parse_document(parser: &mut Parser) -> Result<Document, ConfError> {
    let mut doc = Document::new();

    while let Some(line) = parser.peek() {
        if line.is_empty() {
            parser.advance();
        } else if line.starts_with('}') {
            return Err(ConfError::UnexpectedBlockClose {
                line: parser.line(),
                hint: Some("This '}' does not close any open block".into()),
                code: Some(205),
            });
        } else if starts_with_keyword(line, DEVICE) {
            let device = block::parse_block(parser, DEVICE)?;
            doc.devices.push(device);
        } else if starts_with_keyword(line, CONTROLLER) {
            // A later controller block replaces an earlier one.
            doc.controller = Some(block::parse_block(parser, CONTROLLER)?);
        } else {
            let line_number = parser.line();
            let (key, value) = value::parse_pair(parser)?;
            if let Some(hint) = reserved_key(&key, true) {
                return Err(reserved_key_error(key, line_number, hint));
            }
            doc.pairs.insert(key, value);
        }
    }

    debug!(
        pairs = doc.pairs.len(),
        devices = doc.devices.len(),
        controller = doc.controller.is_some(),
        "parsed document"
    );

    Ok(doc)
}
