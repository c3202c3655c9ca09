//! Local puzzle input storage
//!
//! Inputs live at `<root>/<year>/day<DD>.txt`. A missing file is a fatal
//! startup error; there is no fetching or retry.

use crate::error::CliError;
use std::io::ErrorKind;
use std::path::PathBuf;

pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The expected path for a day's input file
    pub fn path_for(&self, year: u16, day: u8) -> PathBuf {
        self.root
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path_for(year, day).is_file()
    }

    /// Load a day's input, failing fatally if the file is missing
    pub fn load(&self, year: u16, day: u8) -> Result<String, CliError> {
        let path = self.path_for(year, day);
        match std::fs::read_to_string(&path) {
            Ok(input) => Ok(input),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(CliError::MissingInput { year, day, path })
            }
            Err(e) => Err(CliError::InputIo { path, source: e }),
        }
    }
}
