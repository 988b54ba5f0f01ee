//! Batch conversion of a folder of `.covi` files.
//!
//! A batch discovers its inputs, decodes every one of them and only then
//! creates output files. The first failing file aborts the batch; no output
//! from a failed batch is left on disk.

mod options;
mod outputs;
mod summary;

pub use options::{ConvertOptions, Mode, PressureFormat};
pub use summary::{ConversionSummary, InputInfo};

use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use crate::export::{ExportError, write_force_csv, write_pressure_csv, write_pressure_txt};
use crate::records::{DecodeError, PressureFrame, decode_force, decode_pressure};
use crate::source::{Category, SourceError, container_subfolder, find_files, load_record};
use outputs::Outputs;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("failed to decode {file}: {source}")]
    Decode {
        file: String,
        #[source]
        source: DecodeError,
    },
    #[error("failed to write {path}: {source}")]
    Export {
        path: String,
        #[source]
        source: ExportError,
    },
    #[error("no files matching '{pattern}' in {folder}")]
    NoInputs { pattern: String, folder: String },
}

/// Run the conversion selected by `mode`.
pub fn convert(
    mode: Mode,
    folder: &Path,
    prefix: &str,
    options: &ConvertOptions,
) -> Result<ConversionSummary, ConvertError> {
    match mode {
        Mode::Force => force_to_csv(folder, prefix, options),
        Mode::Pressure => pressure_to_files(folder, prefix, options),
        Mode::ForcePressure => force_pressure_to_files(folder, prefix, options),
    }
}

/// Decode every pressure file in `folder` and write CSV or TXT output.
pub fn pressure_to_files(
    folder: &Path,
    prefix: &str,
    options: &ConvertOptions,
) -> Result<ConversionSummary, ConvertError> {
    let mut summary = ConversionSummary::new(Mode::Pressure);
    let names = required_files(folder, Category::Pressure, options.order.as_deref())?;
    let total = names.len();
    let mut frames = Vec::with_capacity(total);
    for (i, name) in names.iter().enumerate() {
        info!("{} from {}", i + 1, total);
        frames.push(decode_file(folder, name, "", decode_pressure, &mut summary)?);
    }

    let mut outputs = Outputs::new();
    write_pressure(&mut outputs, &frames, prefix, options)?;
    summary.outputs = outputs.commit();
    Ok(summary)
}

/// Decode every force file in `folder` into `<prefix>_force.csv`.
pub fn force_to_csv(
    folder: &Path,
    prefix: &str,
    options: &ConvertOptions,
) -> Result<ConversionSummary, ConvertError> {
    let mut summary = ConversionSummary::new(Mode::Force);
    let names = required_files(folder, Category::Force, options.order.as_deref())?;
    let total = names.len();
    let mut series = Vec::with_capacity(total);
    for (i, name) in names.iter().enumerate() {
        info!("{} from {}", i + 1, total);
        series.push(decode_file(folder, name, "", decode_force, &mut summary)?);
    }

    let mut outputs = Outputs::new();
    outputs.write(force_csv_path(prefix), |out| write_force_csv(&series, out))?;
    summary.outputs = outputs.commit();
    Ok(summary)
}

/// Decode every Force-pressure container in `folder`.
///
/// Each container `<name>.covi` has a sibling subfolder `<name>` holding its
/// force and pressure files; both kinds are collected in container order.
pub fn force_pressure_to_files(
    folder: &Path,
    prefix: &str,
    options: &ConvertOptions,
) -> Result<ConversionSummary, ConvertError> {
    let mut summary = ConversionSummary::new(Mode::ForcePressure);
    let containers = required_files(folder, Category::ForcePressure, options.order.as_deref())?;
    let total = containers.len();
    let mut series = Vec::new();
    let mut frames = Vec::new();
    for (i, container) in containers.iter().enumerate() {
        info!("{} from {}", i + 1, total);
        let subfolder = container_subfolder(folder, container);
        let label = format!("{}/", subfolder.file_name().unwrap_or_default().to_string_lossy());

        let force_names = find_files(&subfolder, Category::Force, None)?;
        let pressure_names = find_files(&subfolder, Category::Pressure, None)?;
        if force_names.is_empty() || pressure_names.is_empty() {
            warn!(
                "{} holds {} force and {} pressure files",
                subfolder.display(),
                force_names.len(),
                pressure_names.len()
            );
        }
        for name in &force_names {
            series.push(decode_file(&subfolder, name, &label, decode_force, &mut summary)?);
        }
        for name in &pressure_names {
            frames.push(decode_file(&subfolder, name, &label, decode_pressure, &mut summary)?);
        }
    }
    ensure_decoded(&series, folder, Category::Force)?;
    ensure_decoded(&frames, folder, Category::Pressure)?;

    let mut outputs = Outputs::new();
    outputs.write(force_csv_path(prefix), |out| write_force_csv(&series, out))?;
    write_pressure(&mut outputs, &frames, prefix, options)?;
    summary.outputs = outputs.commit();
    Ok(summary)
}

pub fn pressure_csv_path(prefix: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}_pressure.csv"))
}

/// TXT output for the `index`-th (zero-based) pressure file.
pub fn pressure_txt_path(prefix: &str, index: usize) -> PathBuf {
    PathBuf::from(format!("{prefix}_{}_pressure.txt", index + 1))
}

pub fn force_csv_path(prefix: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}_force.csv"))
}

fn write_pressure(
    outputs: &mut Outputs,
    frames: &[PressureFrame],
    prefix: &str,
    options: &ConvertOptions,
) -> Result<(), ConvertError> {
    match options.pressure_format {
        PressureFormat::Csv => outputs.write(pressure_csv_path(prefix), |out| {
            write_pressure_csv(frames, options.digits, out)
        }),
        PressureFormat::Txt => {
            for (i, frame) in frames.iter().enumerate() {
                outputs.write(pressure_txt_path(prefix, i), |out| {
                    write_pressure_txt(frame, options.digits, out)
                })?;
            }
            Ok(())
        }
    }
}

fn required_files(
    folder: &Path,
    category: Category,
    order: Option<&[i64]>,
) -> Result<Vec<String>, ConvertError> {
    let names = find_files(folder, category, order)?;
    if names.is_empty() {
        return Err(no_inputs(folder, category));
    }
    Ok(names)
}

fn ensure_decoded<T>(decoded: &[T], folder: &Path, category: Category) -> Result<(), ConvertError> {
    if decoded.is_empty() {
        return Err(no_inputs(folder, category));
    }
    Ok(())
}

fn no_inputs(folder: &Path, category: Category) -> ConvertError {
    ConvertError::NoInputs {
        pattern: category.pattern().to_string(),
        folder: folder.display().to_string(),
    }
}

fn decode_file<T>(
    folder: &Path,
    name: &str,
    label: &str,
    decode: fn(&[u8]) -> Result<T, DecodeError>,
    summary: &mut ConversionSummary,
) -> Result<T, ConvertError> {
    let record = load_record(folder, name)?;
    let file = format!("{label}{}", record.name);
    let decoded = decode(&record.bytes).map_err(|source| ConvertError::Decode {
        file: file.clone(),
        source,
    })?;
    summary.inputs.push(InputInfo {
        name: file,
        bytes: record.bytes.len() as u64,
    });
    Ok(decoded)
}
