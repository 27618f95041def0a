//! Lazily loaded source inputs
//!
//! An `Input` is created from a file name and only reads the file when
//! `open` is called. The printers only ever look at the name; the loaded
//! bytes are there for turning byte offsets into line/column pairs.

use crate::error::CompilerError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::fs;

/// A named source file whose contents are loaded on demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    name: String,
    #[serde(skip)]
    data: RefCell<Option<Vec<u8>>>,
}

impl Input {
    /// Create a handle for `name` without touching the filesystem
    pub fn create(name: &str) -> Self {
        Self {
            name: name.to_string(),
            data: RefCell::new(None),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_open(&self) -> bool {
        self.data.borrow().is_some()
    }

    /// Load the file contents. Fails if the file is missing or unreadable,
    /// or if the input is already open.
    pub fn open(&self) -> Result<(), CompilerError> {
        if self.is_open() {
            return Err(CompilerError::InternalError {
                message: format!("input {} is already open", self.name),
            });
        }
        let bytes = fs::read(&self.name).map_err(|e| CompilerError::io_error(&self.name, &e))?;
        debug!("Opened input {} ({} bytes)", self.name, bytes.len());
        *self.data.borrow_mut() = Some(bytes);
        Ok(())
    }

    /// Release the loaded contents. The handle stays usable and may be reopened.
    pub fn close(&self) {
        if self.data.borrow_mut().take().is_some() {
            debug!("Closed input {}", self.name);
        }
    }

    /// The loaded byte range, or `None` when the input is not open
    pub fn data(&self) -> Option<Ref<'_, [u8]>> {
        Ref::filter_map(self.data.borrow(), |d| d.as_deref()).ok()
    }

    /// Convert a byte offset into a 1-based (line, column) pair.
    /// Returns `None` when the input is not open or the offset is past the end.
    pub fn line_col(&self, offset: usize) -> Option<(u32, u32)> {
        let data = self.data()?;
        if offset > data.len() {
            return None;
        }
        let prefix = &data[..offset];
        let line = prefix.iter().filter(|&&b| b == b'\n').count() + 1;
        let line_start = prefix.iter().rposition(|&b| b == b'\n').map_or(0, |p| p + 1);
        let column = offset - line_start + 1;
        Some((line as u32, column as u32))
    }
}

impl Drop for Input {
    fn drop(&mut self) {
        self.close();
    }
}
