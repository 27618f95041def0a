//! Output buffer for the printers
//!
//! `Buf` is an append-only text buffer. It can be written two ways:
//!
//! - directly, through `push_str`/`push_fmt`/`fill`, growing as needed;
//! - through `render_fit`, which hands a fixed-size `Window` over the
//!   unused tail to a render function and commits the result only if it
//!   fit. If it did not, the buffer grows to the size the window reported
//!   and the render runs again from scratch.
//!
//! Either way, a failed allocation is reported as
//! `CompilerError::OutOfMemory` and the buffer keeps only what was
//! committed before the failing call.

use c0_common::CompilerError;
use log::trace;
use std::fmt;

/// Default size of the first render window
pub const INITIAL_GUESS: usize = 64;

/// Growable text buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buf {
    text: String,
    /// Total length past which growth fails, to exercise allocation failure
    #[cfg(test)]
    limit: Option<usize>,
}

impl Buf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Drop everything past `len`, back to a previously committed length
    pub(crate) fn truncate(&mut self, len: usize) {
        self.text.truncate(len);
    }

    #[cfg(test)]
    pub(crate) fn with_limit(limit: usize) -> Self {
        Self {
            text: String::new(),
            limit: Some(limit),
        }
    }

    /// Make room for at least `additional` more bytes
    pub fn reserve(&mut self, additional: usize) -> Result<(), CompilerError> {
        #[cfg(test)]
        if let Some(limit) = self.limit {
            let requested = self.text.len().saturating_add(additional);
            if requested > limit {
                return Err(CompilerError::OutOfMemory { requested });
            }
        }
        self.text
            .try_reserve(additional)
            .map_err(|e| CompilerError::out_of_memory(self.text.len().saturating_add(additional), e))
    }

    pub fn push_str(&mut self, s: &str) -> Result<(), CompilerError> {
        self.reserve(s.len())?;
        self.text.push_str(s);
        Ok(())
    }

    pub fn push_char(&mut self, ch: char) -> Result<(), CompilerError> {
        self.reserve(ch.len_utf8())?;
        self.text.push(ch);
        Ok(())
    }

    /// Append `count` copies of `ch`
    pub fn fill(&mut self, ch: char, count: usize) -> Result<(), CompilerError> {
        self.reserve(count.saturating_mul(ch.len_utf8()))?;
        self.text.extend(std::iter::repeat(ch).take(count));
        Ok(())
    }

    /// Append formatted text, e.g. `buf.push_fmt(format_args!("v{}", id))`
    pub fn push_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), CompilerError> {
        struct Adapter<'a> {
            buf: &'a mut Buf,
            err: Option<CompilerError>,
        }

        impl fmt::Write for Adapter<'_> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                self.buf.push_str(s).map_err(|e| {
                    self.err = Some(e);
                    fmt::Error
                })
            }
        }

        let start = self.text.len();
        let mut adapter = Adapter { buf: self, err: None };
        match fmt::write(&mut adapter, args) {
            Ok(()) => Ok(()),
            Err(_) => {
                let err = adapter.err.take().unwrap_or_else(|| CompilerError::InternalError {
                    message: "formatting trait returned an error".to_string(),
                });
                self.truncate(start);
                Err(err)
            }
        }
    }

    /// Run `render` against a window over the unused tail, starting with a
    /// window of `guess` bytes. The render is committed once the bytes it
    /// needs are strictly fewer than the window size; otherwise the window
    /// grows to the needed size plus one and `render` runs again. `render`
    /// must produce the same output every time it is called.
    pub fn render_fit<F>(&mut self, guess: usize, mut render: F) -> Result<(), CompilerError>
    where
        F: FnMut(&mut Window<'_>),
    {
        let start = self.text.len();
        let mut avail = guess.max(1);
        loop {
            self.reserve(avail)?;
            let mut window = Window::new(&mut self.text, avail);
            render(&mut window);
            let need = window.len();
            if need < avail {
                return Ok(());
            }
            self.text.truncate(start);
            trace!("render needed {need} bytes, window was {avail}; retrying");
            avail = need + 1;
        }
    }
}

impl fmt::Display for Buf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Fixed-capacity view of a `Buf`'s tail.
///
/// Writes are counted even when they no longer fit, so after an
/// overflowing render `len()` is the exact size the render needs.
/// Text is only ever stored in whole pieces.
pub struct Window<'a> {
    out: &'a mut String,
    cap: usize,
    need: usize,
}

impl<'a> Window<'a> {
    fn new(out: &'a mut String, cap: usize) -> Self {
        Self { out, cap, need: 0 }
    }

    /// Bytes this render has produced so far, stored or not
    pub fn len(&self) -> usize {
        self.need
    }

    pub fn is_empty(&self) -> bool {
        self.need == 0
    }

    pub fn overflowed(&self) -> bool {
        self.need > self.cap
    }

    pub fn push_str(&mut self, s: &str) {
        self.need += s.len();
        if !self.overflowed() {
            self.out.push_str(s);
        }
    }

    pub fn push_char(&mut self, ch: char) {
        let mut tmp = [0u8; 4];
        self.push_str(ch.encode_utf8(&mut tmp));
    }

    pub fn fill(&mut self, ch: char, count: usize) {
        for _ in 0..count {
            self.push_char(ch);
        }
    }

    pub fn push_fmt(&mut self, args: fmt::Arguments<'_>) {
        // write_str never fails, so an error can only come from a Display impl
        let result = fmt::write(self, args);
        debug_assert!(result.is_ok(), "Display impl returned an error");
    }
}

impl fmt::Write for Window<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}
