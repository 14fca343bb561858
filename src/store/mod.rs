//! Flat JSON-array record store.
//!
//! Two write paths exist on purpose:
//! - `save` rewrites the whole array through a temp file + rename, used for
//!   small collections and for removals;
//! - `append_one` splices one record in front of the closing `]`, so its
//!   cost does not grow with the history length.

pub mod reader;
pub mod record;

pub use reader::RecordIter;
pub use record::{FieldKind, FieldValue, RawRecord, Record};

use crate::errors::{AppError, AppResult};
use log::debug;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Size of the window read from the end of the file while looking for `]`.
const TAIL_CHUNK: u64 = 64;

pub type FileRecords<T> = RecordIter<T, BufReader<File>>;

/// Storage of a homogeneous collection of `T` in one JSON file.
#[derive(Debug, Clone)]
pub struct JsonStore<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Record> JsonStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    /// Lazily stream the stored records. A missing file is an empty store.
    pub fn load(&self) -> AppResult<FileRecords<T>> {
        match File::open(&self.path) {
            Ok(file) => Ok(RecordIter::new(BufReader::new(file), self.origin())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} store {} not found, treating as empty", T::KIND, self.origin());
                Ok(RecordIter::empty(self.origin()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load every record into memory.
    pub fn load_all(&self) -> AppResult<Vec<T>> {
        self.load()?.collect()
    }

    /// Replace the whole file with `records`. Returns how many were written.
    pub fn save<I>(&self, records: I) -> AppResult<usize>
    where
        I: IntoIterator<Item = T>,
    {
        self.save_stream(records.into_iter().map(Ok))
    }

    /// Rewrite the store keeping only the records accepted by `keep`.
    /// Returns how many records were dropped.
    pub fn retain<F>(&self, mut keep: F) -> AppResult<usize>
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0usize;
        let kept = self.load()?.filter(|item| match item {
            Ok(rec) if !keep(rec) => {
                removed += 1;
                false
            }
            _ => true,
        });
        self.save_stream(kept)?;
        debug!("{} store {}: dropped {} record(s)", T::KIND, self.origin(), removed);
        Ok(removed)
    }

    /// Streams `records` into a sibling temp file, then renames it over the
    /// store. On any failure the old file is left untouched.
    fn save_stream<I>(&self, records: I) -> AppResult<usize>
    where
        I: Iterator<Item = AppResult<T>>,
    {
        ensure_parent_dir(&self.path)?;
        let tmp = self.temp_path();

        match write_array(&tmp, records) {
            Ok(count) => {
                fs::rename(&tmp, &self.path)?;
                debug!("{} store {}: wrote {} record(s)", T::KIND, self.origin(), count);
                Ok(count)
            }
            Err(e) => {
                let _ = fs::remove_file(&tmp);
                Err(e)
            }
        }
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "store".to_string());
        self.path
            .with_file_name(format!("{}.tmp.{}", name, std::process::id()))
    }

    /// Append a single record without decoding or rewriting the existing ones.
    ///
    /// - missing file → `[<rec>]`
    /// - zero-byte or blank file → `[<rec>]`
    /// - `[...]` → the closing `]` is replaced by `,<rec>]`
    /// - `[]` → `[<rec>]`
    pub fn append_one(&self, record: &T) -> AppResult<()> {
        let encoded = record.encode()?;

        let mut file = match OpenOptions::new().read(true).write(true).open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                ensure_parent_dir(&self.path)?;
                fs::write(&self.path, format!("[{encoded}]"))?;
                debug!("{} store {} created by append", T::KIND, self.origin());
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let len = file.metadata()?.len();
        let Some((close_pos, close)) = last_non_whitespace(&mut file, len)? else {
            file.set_len(0)?;
            file.seek(SeekFrom::Start(0))?;
            file.write_all(format!("[{encoded}]").as_bytes())?;
            file.flush()?;
            return Ok(());
        };

        if close != b']' {
            return Err(AppError::MalformedStore {
                path: self.origin(),
                reason: format!("expected trailing ']', found '{}'", close as char),
            });
        }

        let separator = match last_non_whitespace(&mut file, close_pos)? {
            Some((_, b'[')) => "",
            Some(_) => ",",
            None => {
                return Err(AppError::MalformedStore {
                    path: self.origin(),
                    reason: "closing ']' without opening '['".to_string(),
                });
            }
        };

        file.set_len(close_pos)?;
        file.seek(SeekFrom::Start(close_pos))?;
        file.write_all(format!("{separator}{encoded}]").as_bytes())?;
        file.flush()?;

        debug!("{} store {}: appended one record", T::KIND, self.origin());
        Ok(())
    }
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir),
        _ => Ok(()),
    }
}

fn write_array<T, I>(path: &Path, records: I) -> AppResult<usize>
where
    T: Record,
    I: Iterator<Item = AppResult<T>>,
{
    let mut out = BufWriter::new(File::create(path)?);
    let mut count = 0usize;

    out.write_all(b"[")?;
    for rec in records {
        let rec = rec?;
        if count > 0 {
            out.write_all(b",")?;
        }
        serde_json::to_writer(&mut out, &rec)?;
        count += 1;
    }
    out.write_all(b"]")?;

    let file = out.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(count)
}

/// Position and value of the last non-whitespace byte before `end`,
/// reading backwards in small chunks.
fn last_non_whitespace(file: &mut File, end: u64) -> io::Result<Option<(u64, u8)>> {
    let mut chunk_end = end;
    let mut buf = [0u8; TAIL_CHUNK as usize];

    while chunk_end > 0 {
        let chunk_start = chunk_end.saturating_sub(TAIL_CHUNK);
        let size = (chunk_end - chunk_start) as usize;
        file.seek(SeekFrom::Start(chunk_start))?;
        file.read_exact(&mut buf[..size])?;

        if let Some(i) = buf[..size].iter().rposition(|b| !b.is_ascii_whitespace()) {
            return Ok(Some((chunk_start + i as u64, buf[i])));
        }
        chunk_end = chunk_start;
    }

    Ok(None)
}
