//! CSV Data Loader Module
//! Reads header-delimited CSV files into typed records using Polars.
//!
//! Every column is read as text and coerced row by row, so a malformed cell
//! only costs its own row. Rows that fail coercion are dropped without any
//! advisory; run with `RUST_LOG=debug` to see which rows were skipped.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
}

/// Why a row did not become a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowRejection {
    #[error("missing field `{0}`")]
    Missing(&'static str),
    #[error("field `{column}` has unusable value {value:?}")]
    Invalid { column: &'static str, value: String },
}

/// One data row, with fields looked up by header name.
#[derive(Debug, Clone)]
pub struct CsvRow<'a> {
    line: usize,
    fields: Vec<(&'a str, Option<&'a str>)>,
}

impl<'a> CsvRow<'a> {
    pub fn new(line: usize, fields: Vec<(&'a str, Option<&'a str>)>) -> Self {
        Self { line, fields }
    }

    /// 1-based line number in the source file (the header is line 1).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Raw cell value; `None` when the column is absent or the cell is empty.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == column)
            .and_then(|(_, value)| *value)
    }

    /// Cell value that must be present and not blank.
    pub fn require(&self, column: &'static str) -> Result<&'a str, RowRejection> {
        match self.get(column) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(RowRejection::Missing(column)),
        }
    }

    /// Parse a required cell, ignoring surrounding whitespace.
    pub fn parse<T: FromStr>(&self, column: &'static str) -> Result<T, RowRejection> {
        let raw = self.require(column)?;
        raw.trim().parse().map_err(|_| RowRejection::Invalid {
            column,
            value: raw.to_string(),
        })
    }
}

/// A record that can be built from a single CSV row.
pub trait TabularRecord: Sized {
    /// Columns the record reads. Columns missing from the file are seen as empty cells.
    const COLUMNS: &'static [&'static str];

    fn from_row(row: &CsvRow<'_>) -> Result<Self, RowRejection>;
}

/// Records collected from one file, in source row order.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRows<T> {
    pub records: Vec<T>,
    /// Data rows seen in the file, excluding the header.
    pub rows_read: usize,
    /// Message for the user when the file could not be found.
    pub advisory: Option<String>,
}

impl<T> LoadedRows<T> {
    fn missing(path: &Path) -> Self {
        Self {
            records: Vec::new(),
            rows_read: 0,
            advisory: Some(missing_file_advisory(path)),
        }
    }

    fn empty() -> Self {
        Self {
            records: Vec::new(),
            rows_read: 0,
            advisory: None,
        }
    }

    pub fn rows_skipped(&self) -> usize {
        self.rows_read - self.records.len()
    }
}

pub fn missing_file_advisory(path: &Path) -> String {
    format!("CSV file not found: {}", path.display())
}

/// Loads one CSV file into typed records.
pub struct DataLoader {
    file_path: PathBuf,
}

impl DataLoader {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load every usable row of the file.
    ///
    /// A missing file yields no records and an advisory for the user.
    pub fn load<T: TabularRecord>(&self) -> Result<LoadedRows<T>, LoaderError> {
        if !self.file_path.exists() {
            return Ok(LoadedRows::missing(&self.file_path));
        }

        let metadata = std::fs::metadata(&self.file_path).map_err(|source| self.io_error(source))?;
        if metadata.is_dir() {
            return Err(self.io_error(std::io::Error::other("path is a directory")));
        }

        let contents = std::fs::read(&self.file_path).map_err(|source| self.io_error(source))?;
        if contents.iter().all(u8::is_ascii_whitespace) {
            debug!(path = %self.file_path.display(), "CSV file has no content");
            return Ok(LoadedRows::empty());
        }

        let df = match self.read_frame() {
            Ok(df) => df,
            Err(LoaderError::CsvError(PolarsError::NoData(_))) => return Ok(LoadedRows::empty()),
            Err(e) => return Err(e),
        };

        Ok(Self::records_from_frame::<T>(&df))
    }

    fn io_error(&self, source: std::io::Error) -> LoaderError {
        LoaderError::Io {
            path: self.file_path.clone(),
            source,
        }
    }

    /// Read the whole file with every column typed as a string.
    fn read_frame(&self) -> Result<DataFrame, LoaderError> {
        let path = self.file_path.to_string_lossy().to_string();

        let df = LazyCsvReader::new(&path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .with_truncate_ragged_lines(true)
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        Ok(df)
    }

    fn records_from_frame<T: TabularRecord>(df: &DataFrame) -> LoadedRows<T> {
        let columns: Vec<(&'static str, Option<&StringChunked>)> = T::COLUMNS
            .iter()
            .map(|&name| (name, df.column(name).ok().and_then(|col| col.str().ok())))
            .collect();

        let mut records = Vec::new();
        for i in 0..df.height() {
            let fields = columns
                .iter()
                .map(|(name, values)| (*name, values.and_then(|ca| ca.get(i))))
                .collect();
            let row = CsvRow::new(i + 2, fields);

            match T::from_row(&row) {
                Ok(record) => records.push(record),
                Err(reason) => debug!(line = row.line(), %reason, "skipping row"),
            }
        }

        LoadedRows {
            records,
            rows_read: df.height(),
            advisory: None,
        }
    }
}
