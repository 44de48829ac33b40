use once_cell::sync::Lazy;
use regex::Regex;

use super::*;
use crate::ast::{Number, Value};

static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""(.*?)""#).unwrap());
static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$").unwrap());

/// Parse `KEY = VALUE` from the current line.
pub(super) fn parse_pair(parser: &mut Parser) -> Result<(String, Value), ConfError> {
    let line = parser.peek().unwrap_or("");
    let line_number = parser.line();

    let Some((raw_key, after_eq)) = line.split_once('=') else {
        return Err(missing_assignment(line, line_number, "Assignments look like KEY = VALUE"));
    };

    let key = raw_key.trim();
    if key.is_empty() {
        return Err(missing_assignment(line, line_number, "The key before '=' is empty"));
    }

    let value = match parser.options.trailing {
        TrailingContent::Discard => {
            let value = coerce_value(after_eq.trim(), line_number)?;
            parser.advance();
            value
        }
        TrailingContent::Reattach => {
            let value_text = after_eq.trim_start();
            let token = value_token(value_text);
            let value = coerce_value(token, line_number)?;
            let consumed = line.len() - value_text.len() + token.len();
            parser.consume(consumed);
            value
        }
    };

    Ok((key.to_string(), value))
}

/// The leading value token of `text`: a complete quoted string, or everything up
/// to the first whitespace or `}`.
fn value_token(text: &str) -> &str {
    if let Some(inner) = text.strip_prefix('"') {
        if let Some(end) = inner.find('"') {
            return &text[..end + 2];
        }
    }
    let end = text
        .find(|c: char| c.is_whitespace() || c == '}')
        .unwrap_or(text.len());
    &text[..end]
}

/// Coerce value text: quoted string, then `false`, `true`, `null` (any case), then number.
pub(crate) fn coerce_value(text: &str, line: usize) -> Result<Value, ConfError> {
    if let Some(caps) = QUOTED.captures(text) {
        return Ok(Value::String(caps[1].to_string()));
    }

    if text.eq_ignore_ascii_case("false") {
        return Ok(Value::Bool(false));
    }
    if text.eq_ignore_ascii_case("true") {
        return Ok(Value::Bool(true));
    }
    if text.eq_ignore_ascii_case("null") {
        return Ok(Value::Null);
    }

    if let Some(number) = parse_number(text) {
        return Ok(Value::Number(number));
    }

    Err(ConfError::UnknownValueType {
        value: text.to_string(),
        line,
        hint: Some("Use a quoted string, true, false, null or a number".into()),
        code: Some(201),
    })
}

fn parse_number(text: &str) -> Option<Number> {
    if !NUMBER.is_match(text) {
        return None;
    }

    let is_integral = !text.contains(['.', 'e', 'E']);
    if is_integral {
        if let Ok(i) = text.parse::<i64>() {
            return Some(Number::Int(i));
        }
    }

    text.parse::<f64>().ok().map(Number::Float)
}

fn missing_assignment(line: &str, line_number: usize, hint: &str) -> ConfError {
    ConfError::MissingAssignment {
        content: line.to_string(),
        line: line_number,
        hint: Some(hint.into()),
        code: Some(204),
    }
}
