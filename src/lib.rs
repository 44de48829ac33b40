//! Reader and writer for `tellstick.conf` style configuration files.
//!
//! ```
//! let doc = tellstick_cfg::parse("user = \"nobody\"\ndevice {\n  id = 1\n}").unwrap();
//! assert_eq!(doc.devices.len(), 1);
//! assert_eq!(doc.to_string(), "user = \"nobody\"\ndevice {\n  id = 1\n}");
//! ```

pub mod ast;
pub mod config;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod writer;

pub use ast::{Block, Document, Number, Value};
pub use config::ConfFile;
pub use error::ConfError;
pub use parser::{ParseOptions, Parser, TrailingContent};
pub use writer::{Node, Tree, render};

/// Parse config text with the default options.
pub fn parse(input: &str) -> Result<Document, ConfError> {
    Parser::new(input).parse_document()
}

pub fn parse_with(input: &str, options: ParseOptions) -> Result<Document, ConfError> {
    Parser::with_options(input, options).parse_document()
}
