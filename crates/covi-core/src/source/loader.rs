use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::SourceError;

/// Full contents of one `.covi` file.
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Read `folder/name` whole; the file handle is closed before returning.
pub fn load_record(folder: &Path, name: &str) -> Result<RawRecord, SourceError> {
    let path = folder.join(name);
    let io_err = |source| SourceError::Io {
        path: path.display().to_string(),
        source,
    };
    let mut file = File::open(&path).map_err(io_err)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(io_err)?;
    Ok(RawRecord {
        name: name.to_string(),
        bytes,
    })
}
