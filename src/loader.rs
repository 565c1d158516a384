use serde_json::Value;
use thiserror::Error;

use std::{fs, io, path::Path};

/// Failure to load one of the JSON inputs.
///
/// Loading is all-or-nothing per file: either the whole top-level array
/// parses, or one of these comes back and nothing downstream runs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file '{path}' was not found")]
    NotFound { path: String },

    #[error("file '{path}' is not a valid JSON array")]
    InvalidJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not read file '{path}'")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Reads `path` and parses it as a top-level JSON array.
///
/// Both inputs — the price catalogue and the sales records — go through
/// this. Each element comes back as a raw [`Value`] for the record-level
/// pipeline to classify; a top-level value of any other JSON type is
/// invalid.
///
/// # Errors
///
/// [`LoadError::NotFound`] when the file does not exist,
/// [`LoadError::InvalidJson`] when its contents do not parse as a JSON
/// array, and [`LoadError::Io`] for any other read failure.
pub fn load_json(path: impl AsRef<Path>) -> Result<Vec<Value>, LoadError> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound { path: name.clone() },
        _ => LoadError::Io {
            path: name.clone(),
            source: err,
        },
    })?;
    serde_json::from_str(&text).map_err(|err| LoadError::InvalidJson {
        path: name,
        source: err,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_a_top_level_array_of_records() {
        let records = load_json("testdata/priceCatalogue.json").unwrap();
        assert_eq!(records.len(), 12);
        assert!(records[0].is_object());
    }

    #[test]
    fn a_missing_file_is_not_found() {
        let err = load_json("testdata/no-such-file.json").unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(
            err.to_string(),
            "file 'testdata/no-such-file.json' was not found"
        );
    }

    #[test]
    fn malformed_json_is_invalid() {
        let err = load_json("testdata/invalid.json").unwrap_err();
        assert!(matches!(err, LoadError::InvalidJson { .. }));
    }

    #[test]
    fn a_top_level_object_is_invalid() {
        let err = load_json("testdata/notAnArray.json").unwrap_err();
        assert!(matches!(err, LoadError::InvalidJson { .. }));
    }

    #[test]
    fn element_types_are_not_checked_at_load_time() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title": "Apple"}}, 3, "loose text", null]"#).unwrap();
        let records = load_json(file.path()).unwrap();
        assert_eq!(records.len(), 4);
    }
}
