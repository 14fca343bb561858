//! Streaming reader for a JSON array stored on disk.
//!
//! The array is scanned byte by byte and each top-level element is handed to
//! `serde_json` on its own, so only one record is held in memory at a time.

use super::record::Record;
use crate::errors::{AppError, AppResult};
use serde_json::Value;
use std::io::{self, BufRead};
use std::marker::PhantomData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Before the opening `[`.
    Start,
    /// Right after `[`: either `]` or the first element.
    First,
    /// After an element: either `,` or `]`.
    Next,
    Done,
}

/// Lazy iterator over the records of a JSON array file.
pub struct RecordIter<T, R> {
    reader: Option<R>,
    origin: String,
    state: ScanState,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Record, R: BufRead> RecordIter<T, R> {
    pub fn new(reader: R, origin: impl Into<String>) -> Self {
        Self {
            reader: Some(reader),
            origin: origin.into(),
            state: ScanState::Start,
            _marker: PhantomData,
        }
    }

    /// An iterator that yields nothing (missing backing file).
    pub fn empty(origin: impl Into<String>) -> Self {
        Self {
            reader: None,
            origin: origin.into(),
            state: ScanState::Done,
            _marker: PhantomData,
        }
    }

    fn malformed(&self, reason: impl Into<String>) -> AppError {
        AppError::MalformedStore {
            path: self.origin.clone(),
            reason: reason.into(),
        }
    }

    fn peek(&mut self) -> io::Result<Option<u8>> {
        match self.reader.as_mut() {
            Some(r) => Ok(r.fill_buf()?.first().copied()),
            None => Ok(None),
        }
    }

    fn bump(&mut self) {
        if let Some(r) = self.reader.as_mut() {
            r.consume(1);
        }
    }

    fn skip_whitespace(&mut self) -> io::Result<()> {
        while let Some(b) = self.peek()? {
            if !b.is_ascii_whitespace() {
                break;
            }
            self.bump();
        }
        Ok(())
    }

    fn next_value(&mut self) -> AppResult<Option<Value>> {
        loop {
            match self.state {
                ScanState::Done => return Ok(None),
                ScanState::Start => {
                    self.skip_whitespace()?;
                    match self.peek()? {
                        // zero-byte or blank file
                        None => {
                            self.state = ScanState::Done;
                            return Ok(None);
                        }
                        Some(b'[') => {
                            self.bump();
                            self.state = ScanState::First;
                        }
                        Some(b) => {
                            return Err(
                                self.malformed(format!("expected '[', found '{}'", b as char))
                            );
                        }
                    }
                }
                ScanState::First => {
                    self.skip_whitespace()?;
                    match self.peek()? {
                        Some(b']') => {
                            self.bump();
                            self.state = ScanState::Done;
                            return Ok(None);
                        }
                        None => return Err(self.malformed("unterminated array")),
                        Some(_) => {
                            self.state = ScanState::Next;
                            return self.read_element().map(Some);
                        }
                    }
                }
                ScanState::Next => {
                    self.skip_whitespace()?;
                    match self.peek()? {
                        Some(b',') => {
                            self.bump();
                            self.skip_whitespace()?;
                            return self.read_element().map(Some);
                        }
                        Some(b']') => {
                            self.bump();
                            self.state = ScanState::Done;
                            return Ok(None);
                        }
                        None => return Err(self.malformed("unterminated array")),
                        Some(b) => {
                            return Err(self.malformed(format!(
                                "expected ',' or ']', found '{}'",
                                b as char
                            )));
                        }
                    }
                }
            }
        }
    }

    /// Collect the bytes of exactly one top-level element and parse them.
    fn read_element(&mut self) -> AppResult<Value> {
        let mut buf = Vec::new();
        let mut depth = 0usize;
        let mut in_string = false;
        let mut escaped = false;

        while let Some(b) = self.peek()? {
            if in_string {
                buf.push(b);
                self.bump();
                if escaped {
                    escaped = false;
                } else if b == b'\\' {
                    escaped = true;
                } else if b == b'"' {
                    in_string = false;
                    if depth == 0 {
                        break;
                    }
                }
                continue;
            }

            match b {
                b'"' => in_string = true,
                b'{' | b'[' => depth += 1,
                b'}' | b']' if depth == 0 => break,
                b'}' | b']' => {
                    depth -= 1;
                    buf.push(b);
                    self.bump();
                    if depth == 0 {
                        break;
                    }
                    continue;
                }
                b',' if depth == 0 => break,
                b if b.is_ascii_whitespace() && depth == 0 => break,
                _ => {}
            }
            buf.push(b);
            self.bump();
        }

        if buf.is_empty() {
            return Err(self.malformed("empty array element"));
        }
        if in_string || depth != 0 {
            return Err(self.malformed("truncated array element"));
        }

        Ok(serde_json::from_slice(&buf)?)
    }
}

impl<T: Record, R: BufRead> Iterator for RecordIter<T, R> {
    type Item = AppResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_value() {
            Ok(Some(value)) => Some(T::decode(value)),
            Ok(None) => {
                self.reader = None;
                None
            }
            Err(e) => {
                self.state = ScanState::Done;
                self.reader = None;
                Some(Err(e))
            }
        }
    }
}
