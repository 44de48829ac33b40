use super::*;
use crate::parser::{reserved_key, CONTROLLER, DEVICES, PARAMETERS};

impl ConfFile {
    /// Get a typed value using dot notation.
    ///
    /// Paths name a top-level key (`deviceNode`), a controller key
    /// (`controller.serial`) or a device key by position (`devices.0.name`).
    /// `parameters` segments step into nested parameter blocks
    /// (`devices.1.parameters.house`).
    ///
    /// # Examples
    /// ```no_run
    /// # use tellstick_cfg::ConfFile;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let conf = ConfFile::from_file("tellstick.conf")?;
    /// let user: String = conf.get("user")?;
    /// let id: u32 = conf.get("devices.0.id")?;
    /// let house: String = conf.get("devices.0.parameters.house")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if the path doesn't exist or the value can't be converted to `T`.
    pub fn get<T>(&self, path: &str) -> Result<T, ConfError>
    where
        T: TryFrom<Value, Error = ConfError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value.clone()).map_err(|e| enhance_error_with_line_info(e, path, &self.raw_content))
    }

    /// Like [`ConfFile::get`], but a missing path or a `null` value yields `None`.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, ConfError>
    where
        T: TryFrom<Value, Error = ConfError>,
    {
        match self.get::<Option<T>>(path) {
            Ok(value) => Ok(value),
            Err(ConfError::MissingKey { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = ConfError>,
    {
        self.get(path).unwrap_or(default)
    }

    pub fn has(&self, path: &str) -> bool {
        self.get_value(path).is_ok()
    }

    /// Get the raw value at `path`.
    pub fn get_value(&self, path: &str) -> Result<&Value, ConfError> {
        let segs = split_path(path)?;
        let (last, parents) = segs
            .split_last()
            .ok_or_else(|| invalid_path(path, "Path is empty"))?;

        let pairs = if parents.is_empty() {
            &self.document.pairs
        } else {
            &self.block_at(parents, path)?.pairs
        };

        pairs.get(*last).ok_or_else(|| missing_key(path))
    }

    /// Keys at a given level. The empty path lists the top level, including
    /// `controller` (when present) and `devices`.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, ConfError> {
        if path.trim().is_empty() {
            let mut keys: Vec<String> = self.document.pairs.keys().cloned().collect();
            if self.document.controller.is_some() {
                keys.push(CONTROLLER.to_string());
            }
            keys.push(DEVICES.to_string());
            return Ok(keys);
        }

        let segs = split_path(path)?;
        let block = self.block_at(&segs, path)?;
        let mut keys: Vec<String> = block.pairs.keys().cloned().collect();
        if block.parameters.is_some() {
            keys.push(PARAMETERS.to_string());
        }
        Ok(keys)
    }

    /// Set a value, creating the controller or `parameters` blocks along the way.
    /// Devices must already exist; use [`ConfFile::push_device`] to add one.
    ///
    /// Returns the previous value, if any.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<Option<Value>, ConfError> {
        let segs = split_path(path)?;
        let (last, parents) = segs
            .split_last()
            .ok_or_else(|| invalid_path(path, "Path is empty"))?;

        if let Some(hint) = reserved_key(last, parents.is_empty()) {
            return Err(invalid_path(path, hint));
        }

        let pairs = if parents.is_empty() {
            &mut self.document.pairs
        } else {
            &mut self.block_at_mut(parents, path)?.pairs
        };

        Ok(pairs.insert(last.to_string(), value.into()))
    }

    fn block_at(&self, segs: &[&str], path: &str) -> Result<&Block, ConfError> {
        let (mut block, rest) = match segs {
            [CONTROLLER, rest @ ..] => {
                let controller = self.document.controller.as_ref().ok_or_else(|| missing_key(path))?;
                (controller, rest)
            }
            [DEVICES, index, rest @ ..] => {
                let index = parse_index(index, path)?;
                let device = self.document.devices.get(index).ok_or_else(|| missing_key(path))?;
                (device, rest)
            }
            _ => return Err(invalid_path(path, "Paths start with a key, 'controller' or 'devices.N'")),
        };

        for seg in rest {
            if *seg != PARAMETERS {
                return Err(invalid_path(path, "Only 'parameters' blocks nest inside a block"));
            }
            block = block.parameters().ok_or_else(|| missing_key(path))?;
        }
        Ok(block)
    }

    fn block_at_mut(&mut self, segs: &[&str], path: &str) -> Result<&mut Block, ConfError> {
        let (mut block, rest) = match segs {
            [CONTROLLER, rest @ ..] => (self.document.controller.get_or_insert_with(Block::new), rest),
            [DEVICES, index, rest @ ..] => {
                let index = parse_index(index, path)?;
                let device = self.document.devices.get_mut(index).ok_or_else(|| missing_key(path))?;
                (device, rest)
            }
            _ => return Err(invalid_path(path, "Paths start with a key, 'controller' or 'devices.N'")),
        };

        for seg in rest {
            if *seg != PARAMETERS {
                return Err(invalid_path(path, "Only 'parameters' blocks nest inside a block"));
            }
            block = block.parameters.get_or_insert_with(Box::default).as_mut();
        }
        Ok(block)
    }
}

fn split_path(path: &str) -> Result<Vec<&str>, ConfError> {
    let segs: Vec<&str> = path.split('.').map(str::trim).collect();
    if segs.iter().any(|s| s.is_empty()) {
        return Err(invalid_path(path, "Path segments must not be empty"));
    }
    Ok(segs)
}

fn parse_index(seg: &str, path: &str) -> Result<usize, ConfError> {
    seg.parse::<usize>()
        .map_err(|_| invalid_path(path, &format!("'{}' is not a device index", seg)))
}

fn missing_key(path: &str) -> ConfError {
    ConfError::MissingKey {
        path: path.to_string(),
        hint: Some("Check that the path exists in your config file".into()),
        code: Some(401),
    }
}

fn invalid_path(path: &str, hint: &str) -> ConfError {
    ConfError::InvalidPath {
        path: path.to_string(),
        hint: Some(hint.into()),
        code: Some(405),
    }
}

/// Attach the source line of `path` to conversion errors.
fn enhance_error_with_line_info(e: ConfError, path: &str, raw_content: &str) -> ConfError {
    match e {
        ConfError::TypeError { message, hint, code, .. } => {
            let (line, snippet) = helpers::find_config_line(path, raw_content);
            if line > 0 {
                ConfError::TypeError {
                    message: format!("{}\n  → {}", message, snippet),
                    line,
                    hint,
                    code,
                }
            } else {
                ConfError::TypeError { message, line: 0, hint, code }
            }
        }
        other => other,
    }
}
