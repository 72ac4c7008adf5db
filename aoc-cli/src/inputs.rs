//! Read-only store of local puzzle inputs

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-based store of puzzle inputs
///
/// Directory structure: `{input_dir}/{year}_day{day:02}.txt`. A single
/// year/day can be pointed at an arbitrary file instead.
#[derive(Debug, Clone)]
pub struct InputStore {
    input_dir: PathBuf,
    override_file: Option<(u16, u8, PathBuf)>,
}

impl InputStore {
    /// Store reading from `input_dir`
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            override_file: None,
        }
    }

    /// Read year/day from `file` instead of the input directory
    pub fn with_override(mut self, year: u16, day: u8, file: impl Into<PathBuf>) -> Self {
        self.override_file = Some((year, day, file.into()));
        self
    }

    /// Directory inputs are read from
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Path of the input for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match &self.override_file {
            Some((y, d, file)) if (*y, *d) == (year, day) => file.clone(),
            _ => self.input_dir.join(format!("{}_day{:02}.txt", year, day)),
        }
    }

    /// Check if the input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the whole input for year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing(path),
            _ => InputError::Read { path, source },
        })
    }
}
