use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use glob::{MatchOptions, Pattern, glob_with};
use regex::Regex;

use super::SourceError;

/// Measurement kind, as encoded in the exported `.covi` file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Pressure,
    Force,
    /// Container whose sibling subfolder holds one force and one pressure file.
    ForcePressure,
}

impl Category {
    pub fn pattern(self) -> &'static str {
        match self {
            Category::Pressure => "*Pressure measurement*.covi",
            Category::Force => "*Force measurement*.covi",
            Category::ForcePressure => "*Force-pressure*.covi",
        }
    }
}

/// File names in `folder` matching `category`, in conversion order.
///
/// Without `order` files are sorted by [`file_index`]. With `order`, the
/// i-th file in glob listing order (alphabetical) takes rank `order[i]`.
pub fn find_files(
    folder: &Path,
    category: Category,
    order: Option<&[i64]>,
) -> Result<Vec<String>, SourceError> {
    let names = list_matching(folder, category.pattern())?;
    order_files(names, order)
}

pub fn order_files(names: Vec<String>, order: Option<&[i64]>) -> Result<Vec<String>, SourceError> {
    let mut ranked: Vec<(i64, String)> = match order {
        Some(order) => {
            if order.len() != names.len() {
                return Err(SourceError::OrderMismatch {
                    given: order.len(),
                    files: names.len(),
                });
            }
            order.iter().copied().zip(names).collect()
        }
        None => names
            .into_iter()
            .map(|name| (file_index(&name), name))
            .collect(),
    };
    ranked.sort();
    Ok(ranked.into_iter().map(|(_, name)| name).collect())
}

/// Zero-based index taken from the last run of digits in `name`, `-1` without one.
///
/// A `-` before the digits is a separator, not a sign.
///
/// # Examples
/// ```
/// use covi_core::source::file_index;
///
/// assert_eq!(file_index("run-10.covi"), 9);
/// assert_eq!(file_index("baseline.covi"), -1);
/// ```
pub fn file_index(name: &str) -> i64 {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    let number = NUMBER.get_or_init(|| Regex::new(r"\d+").expect("valid number regex"));
    number
        .find_iter(name)
        .last()
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .map_or(-1, |n| n.saturating_sub(1))
}

/// Subfolder holding the payload of a Force-pressure container file.
///
/// The container name minus its last five characters (the `.covi` suffix).
pub fn container_subfolder(folder: &Path, container: &str) -> PathBuf {
    let cut = container
        .char_indices()
        .rev()
        .nth(4)
        .map_or(0, |(idx, _)| idx);
    folder.join(&container[..cut])
}

/// Data folder of a device project directory.
pub fn project_data_folder(project: &Path) -> PathBuf {
    project.join("Robots").join("Data").join("Data").join("Data")
}

fn list_matching(folder: &Path, pattern: &str) -> Result<Vec<String>, SourceError> {
    let escaped = Pattern::escape(&folder.to_string_lossy());
    let full = Path::new(&escaped).join(pattern);
    let full = full.to_string_lossy();
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };
    let paths = glob_with(&full, options).map_err(|err| SourceError::Pattern {
        pattern: full.to_string(),
        message: err.msg.to_string(),
    })?;

    let mut names = Vec::new();
    for entry in paths {
        let path = entry.map_err(|err| SourceError::Glob {
            path: err.path().display().to_string(),
            message: err.error().to_string(),
        })?;
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name() {
            names.push(name.to_string_lossy().into_owned());
        }
    }
    Ok(names)
}
