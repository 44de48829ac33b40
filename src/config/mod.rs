// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ast::{Block, Document, Value};
use crate::parser::{ParseOptions, Parser};
use crate::writer;
use crate::ConfError;

mod access;
mod conversion;
mod helpers;

/// A parsed config file together with where it came from.
///
/// This is the file I/O wrapper around [`crate::parse`] and [`crate::render`]:
/// it reads the file, keeps the raw text around for error reporting and can
/// write the (possibly modified) document back.
#[derive(Debug, Clone)]
pub struct ConfFile {
    document: Document,
    path: Option<PathBuf>,
    raw_content: String,
}

impl ConfFile {
    /// Load and parse a config file. A leading `~/` is expanded to the home directory.
    ///
    /// # Example
    /// ```no_run
    /// # use tellstick_cfg::ConfFile;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let conf = ConfFile::from_file("/etc/tellstick.conf")?;
    /// let device_node: String = conf.get("deviceNode")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfError> {
        Self::from_file_with_options(path, ParseOptions::default())
    }

    pub fn from_file_with_options<P: AsRef<Path>>(
        path: P,
        options: ParseOptions,
    ) -> Result<Self, ConfError> {
        let path = helpers::resolve_path(path.as_ref())?;

        let content = fs::read_to_string(&path).map_err(|e| {
            ConfError::file_error(
                format!("Failed to read file: {}", e),
                path.to_string_lossy().to_string(),
                301,
            )
        })?;
        debug!(path = %path.display(), bytes = content.len(), "loaded config file");

        let mut conf = Self::from_str_with_options(&content, options)?;
        conf.path = Some(path);
        Ok(conf)
    }

    /// Parse config text that did not come from a file.
    pub fn from_str(content: &str) -> Result<Self, ConfError> {
        Self::from_str_with_options(content, ParseOptions::default())
    }

    pub fn from_str_with_options(content: &str, options: ParseOptions) -> Result<Self, ConfError> {
        let document = Parser::with_options(content, options).parse_document()?;
        Ok(Self {
            document,
            path: None,
            raw_content: content.to_string(),
        })
    }

    /// Wrap an already built document, e.g. one that is about to be written out.
    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            path: None,
            raw_content: String::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn controller(&self) -> Option<&Block> {
        self.document.controller.as_ref()
    }

    pub fn devices(&self) -> &[Block] {
        &self.document.devices
    }

    pub fn device(&self, index: usize) -> Option<&Block> {
        self.document.devices.get(index)
    }

    /// First device whose `key` pair equals `value`.
    pub fn find_device(&self, key: &str, value: &Value) -> Option<&Block> {
        self.document
            .devices
            .iter()
            .find(|device| device.get(key) == Some(value))
    }

    pub fn push_device(&mut self, device: Block) {
        self.document.devices.push(device);
    }

    /// Render the current document.
    pub fn to_conf_string(&self) -> String {
        writer::render_document(&self.document)
    }

    /// Write the document back to the file it was loaded from.
    pub fn save(&self) -> Result<(), ConfError> {
        let path = self.path.as_ref().ok_or_else(|| ConfError::FileError {
            message: "Config was not loaded from a file".into(),
            path: String::new(),
            hint: Some("Use write_to_file with an explicit path".into()),
            code: Some(303),
        })?;
        self.write_to_file(path)
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfError> {
        let path = helpers::resolve_path(path.as_ref())?;
        let content = self.to_conf_string();

        fs::write(&path, &content).map_err(|e| {
            ConfError::file_error(
                format!("Failed to write file: {}", e),
                path.to_string_lossy().to_string(),
                302,
            )
        })?;
        debug!(path = %path.display(), bytes = content.len(), "saved config file");
        Ok(())
    }
}
