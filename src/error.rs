use std::fmt;

/// The main error type for reading, writing and querying tellstick configs.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfError {
    /// A value matched none of the string, boolean, null or number forms.
    UnknownValueType {
        value: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A block header was not followed by `{`.
    ExpectedBlockOpen {
        block: String,
        found: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// End of input reached inside an open block. `line` is the header line.
    UnterminatedBlock {
        block: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    MissingAssignment {
        content: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnexpectedBlockClose {
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    ReservedKey {
        key: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    MissingKey {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    InvalidPath {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a structure handed to the writer has no textual form.
    InvalidShape {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl ConfError {
    /// Source line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ConfError::UnknownValueType { line, .. }
            | ConfError::ExpectedBlockOpen { line, .. }
            | ConfError::UnterminatedBlock { line, .. }
            | ConfError::MissingAssignment { line, .. }
            | ConfError::UnexpectedBlockClose { line, .. }
            | ConfError::ReservedKey { line, .. }
            | ConfError::TypeError { line, .. } if *line > 0 => Some(*line),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            ConfError::UnknownValueType { code, .. }
            | ConfError::ExpectedBlockOpen { code, .. }
            | ConfError::UnterminatedBlock { code, .. }
            | ConfError::MissingAssignment { code, .. }
            | ConfError::UnexpectedBlockClose { code, .. }
            | ConfError::ReservedKey { code, .. }
            | ConfError::FileError { code, .. }
            | ConfError::MissingKey { code, .. }
            | ConfError::InvalidPath { code, .. }
            | ConfError::TypeError { code, .. }
            | ConfError::InvalidShape { code, .. } => *code,
        }
    }

    /// Helper for file-related errors when loading or saving configs.
    pub fn file_error(message: String, path: String, code: u32) -> Self {
        ConfError::FileError {
            message,
            path,
            hint: Some("Check file path and permissions".into()),
            code: Some(code),
        }
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for ConfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfError::UnknownValueType { value, line, hint, code } =>
                write!(f, "[TELLSTICK] Unknown value type '{}' on line {}{}",
                    value, line, suffix(hint, code)),
            ConfError::ExpectedBlockOpen { block, found, line, hint, code } =>
                write!(f, "[TELLSTICK] Expected '{{' after '{}' on line {}, found \"{}\"{}",
                    block, line, found, suffix(hint, code)),
            ConfError::UnterminatedBlock { block, line, hint, code } =>
                write!(f, "[TELLSTICK] Unexpected end of config in '{}' block opened on line {}{}",
                    block, line, suffix(hint, code)),
            ConfError::MissingAssignment { content, line, hint, code } =>
                write!(f, "[TELLSTICK] Expected KEY = VALUE on line {}, found \"{}\"{}",
                    line, content, suffix(hint, code)),
            ConfError::UnexpectedBlockClose { line, hint, code } =>
                write!(f, "[TELLSTICK] Unexpected '}}' on line {}{}",
                    line, suffix(hint, code)),
            ConfError::ReservedKey { key, line, hint, code } =>
                write!(f, "[TELLSTICK] Key '{}' on line {} cannot be stored as a value{}",
                    key, line, suffix(hint, code)),
            ConfError::FileError { message, path, hint, code } =>
                write!(f, "[TELLSTICK] File Error '{}': {}{}",
                    path, message, suffix(hint, code)),
            ConfError::MissingKey { path, hint, code } =>
                write!(f, "[TELLSTICK] Path '{}' not found in configuration{}",
                    path, suffix(hint, code)),
            ConfError::InvalidPath { path, hint, code } =>
                write!(f, "[TELLSTICK] Invalid path '{}'{}",
                    path, suffix(hint, code)),
            ConfError::TypeError { message, line, hint, code } => {
                if *line > 0 {
                    write!(f, "[TELLSTICK] Type Error on line {}: {}{}",
                        line, message, suffix(hint, code))
                } else {
                    write!(f, "[TELLSTICK] Type Error: {}{}",
                        message, suffix(hint, code))
                }
            }
            ConfError::InvalidShape { message, path, hint, code } =>
                write!(f, "[TELLSTICK] Cannot write '{}': {}{}",
                    path, message, suffix(hint, code)),
        }
    }
}

impl std::error::Error for ConfError {}
