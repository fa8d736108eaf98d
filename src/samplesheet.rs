//! Loading and writing of comma separated samplesheets.
//!
//! A [`Samplesheet`] keeps every value as text, so numeric looking fields such as
//! a lane of `001` are written back exactly as they were read.
use csv::StringRecord;
use std::{fs::File, path::Path};

use crate::error::SamplesheetError;

const DELIMITER: u8 = b',';

/// An in-memory samplesheet: a header and the rows beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Samplesheet {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Samplesheet {
    pub(crate) fn new(headers: StringRecord, rows: Vec<StringRecord>) -> Self {
        Samplesheet { headers, rows }
    }

    /// Read a samplesheet, treating the first line as the header.
    ///
    /// Rows shorter than the header are padded with empty fields. Rows longer
    /// than the header are an error.
    pub fn from_path(path: &Path) -> Result<Samplesheet, SamplesheetError> {
        let file = File::open(path).map_err(|source| SamplesheetError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .flexible(true)
            .from_reader(file);
        let parse_err = |source: csv::Error| SamplesheetError::Parse {
            path: path.to_path_buf(),
            source,
        };

        let headers = rdr.headers().map_err(parse_err)?.clone();
        let mut rows = Vec::new();
        for result in rdr.records() {
            let mut row = result.map_err(parse_err)?;
            if row.len() > headers.len() {
                return Err(SamplesheetError::TooManyFields {
                    path: path.to_path_buf(),
                    line: row.position().map_or(0, |p| p.line()),
                    expected: headers.len(),
                    found: row.len(),
                });
            }
            while row.len() < headers.len() {
                row.push_field("");
            }
            rows.push(row);
        }
        log::debug!("Read {} rows from {:?}", rows.len(), path);
        Ok(Samplesheet::new(headers, rows))
    }

    /// Write the samplesheet with its header, creating or truncating `path`.
    pub fn to_path(&self, path: &Path) -> Result<(), SamplesheetError> {
        let file = File::create(path).map_err(|source| SamplesheetError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file);
        let write_err = |source: csv::Error| SamplesheetError::Write {
            path: path.to_path_buf(),
            source,
        };

        wtr.write_record(&self.headers).map_err(write_err)?;
        for row in &self.rows {
            wtr.write_record(row).map_err(write_err)?;
        }
        wtr.flush().map_err(|e| write_err(csv::Error::from(e)))?;
        log::debug!("Wrote {} rows to {:?}", self.rows.len(), path);
        Ok(())
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the column called `name`.
    pub fn column_index(&self, name: &str) -> Result<usize, SamplesheetError> {
        self.headers
            .iter()
            .position(|field| field == name)
            .ok_or_else(|| SamplesheetError::MissingColumn {
                column: name.to_owned(),
            })
    }

    /// Set the column `name` to `values`, one per row.
    ///
    /// An existing column of the same name is overwritten where it stands,
    /// otherwise the column is appended after the current last column.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        match self.headers.iter().position(|field| field == name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    *row = row
                        .iter()
                        .enumerate()
                        .map(|(i, field)| if i == idx { value.as_str() } else { field })
                        .collect();
                }
            }
            None => {
                self.headers.push_field(name);
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push_field(&value);
                }
            }
        }
    }
}
