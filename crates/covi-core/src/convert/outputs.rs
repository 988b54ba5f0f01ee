use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use log::warn;

use super::ConvertError;
use crate::export::ExportError;

/// Output files of one batch.
///
/// Files created through this set are removed again when it is dropped
/// without [`Outputs::commit`], so a failed batch leaves nothing behind.
pub(crate) struct Outputs {
    created: Vec<PathBuf>,
    committed: bool,
}

impl Outputs {
    pub(crate) fn new() -> Self {
        Self {
            created: Vec::new(),
            committed: false,
        }
    }

    /// Create `path`, run `encode` on a buffered writer and flush it.
    pub(crate) fn write<F>(&mut self, path: PathBuf, encode: F) -> Result<(), ConvertError>
    where
        F: FnOnce(&mut BufWriter<File>) -> Result<(), ExportError>,
    {
        let export_err = |source: ExportError| ConvertError::Export {
            path: path.display().to_string(),
            source,
        };
        let file = File::create(&path).map_err(|err| export_err(err.into()))?;
        self.created.push(path.clone());

        let mut out = BufWriter::new(file);
        encode(&mut out).map_err(export_err)?;
        out.flush().map_err(|err| export_err(err.into()))?;
        Ok(())
    }

    pub(crate) fn commit(mut self) -> Vec<String> {
        self.committed = true;
        self.created
            .iter()
            .map(|path| path.display().to_string())
            .collect()
    }
}

impl Drop for Outputs {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        for path in &self.created {
            if let Err(err) = fs::remove_file(path) {
                warn!("could not remove partial output {}: {err}", path.display());
            }
        }
    }
}
