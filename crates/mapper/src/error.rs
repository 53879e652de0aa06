//! Mapping failure model.

use thiserror::Error;

/// Result type used across the mapping layer.
pub type MapResult<T> = Result<T, MapError>;

/// Failure raised while mapping a raw value tree into a record type.
///
/// The first offending field aborts the whole call; a failed mapping never
/// yields a partially-populated record. `path` is the field path from the
/// mapping root, with sequence indexes inline (`lines[2].product_id`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A required field was absent from the raw mapping.
    #[error("missing required field `{0}`")]
    MissingField(String),

    /// A value had the wrong JSON shape for its declared field type.
    #[error("field `{path}`: expected {expected}, found {found}")]
    Shape {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A value had a plausible shape but no registered hook or cast could
    /// convert it.
    #[error("field `{path}`: {reason}")]
    Conversion { path: String, reason: String },
}

impl MapError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn shape(expected: &'static str, found: &'static str) -> Self {
        Self::Shape {
            path: String::new(),
            expected,
            found,
        }
    }

    pub fn conversion(reason: impl Into<String>) -> Self {
        Self::Conversion {
            path: String::new(),
            reason: reason.into(),
        }
    }

    /// Prefix the error's field path with an enclosing segment.
    pub fn at(self, segment: &str) -> Self {
        match self {
            Self::MissingField(path) => Self::MissingField(join(segment, &path)),
            Self::Shape {
                path,
                expected,
                found,
            } => Self::Shape {
                path: join(segment, &path),
                expected,
                found,
            },
            Self::Conversion { path, reason } => Self::Conversion {
                path: join(segment, &path),
                reason,
            },
        }
    }
}

fn join(segment: &str, path: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else if path.starts_with('[') {
        // Index segments attach directly: `lines[2].product_id`.
        format!("{segment}{path}")
    } else {
        format!("{segment}.{path}")
    }
}
