use std::fmt;
use std::io;

/// Error raised while locating, reading or parsing a plan file
#[derive(Debug)]
pub enum PlanError {
    /// No plan file path was supplied
    InputRequired,

    /// Plan file does not exist
    NotFound(String),

    /// Plan file exists but cannot be accessed
    PermissionDenied(String),

    /// Path rejected by pre-flight validation because it is not a regular file
    IsADirectory,

    /// Path rejected by the reader because it is not a regular file
    NotAFile(String),

    /// Content is not valid JSON
    InvalidJson(String),

    /// Content is JSON but not a Terraform plan
    InvalidStructure(StructureDefect),

    /// Any other I/O failure, surfaced with its original text
    Io(io::Error),
}

/// Coarse classification of a [`PlanError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanErrorKind {
    InputRequired,
    NotFound,
    PermissionDenied,
    NotAFile,
    InvalidJson,
    InvalidStructure,
    Io,
}

/// Structural problem found in an otherwise well-formed JSON document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureDefect {
    /// Top-level value is not an object
    NotAnObject,

    /// A required version field is missing, not a string, or blank
    InvalidVersionField(&'static str),

    /// `resource_changes` is missing or not an array
    MissingResourceChanges,

    /// A resource change lacks `address`, `type`, `name` or `change`
    ResourceChangeFields,

    /// `change.actions` is not an array
    ActionsNotArray,

    /// `change.actions` contains a non-string element
    ActionsNotStrings,
}

impl PlanError {
    pub fn kind(&self) -> PlanErrorKind {
        match self {
            PlanError::InputRequired => PlanErrorKind::InputRequired,
            PlanError::NotFound(_) => PlanErrorKind::NotFound,
            PlanError::PermissionDenied(_) => PlanErrorKind::PermissionDenied,
            PlanError::IsADirectory | PlanError::NotAFile(_) => PlanErrorKind::NotAFile,
            PlanError::InvalidJson(_) => PlanErrorKind::InvalidJson,
            PlanError::InvalidStructure(_) => PlanErrorKind::InvalidStructure,
            PlanError::Io(_) => PlanErrorKind::Io,
        }
    }

    /// Map a filesystem error for `path` onto the classified variants.
    /// Unclassified errors are kept as-is.
    pub(crate) fn from_io(err: io::Error, path: &str) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => PlanError::NotFound(path.to_string()),
            io::ErrorKind::PermissionDenied => PlanError::PermissionDenied(path.to_string()),
            _ => PlanError::Io(err),
        }
    }
}

impl fmt::Display for StructureDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureDefect::NotAnObject => write!(f, "expected an object"),
            StructureDefect::InvalidVersionField(field) => {
                write!(f, "missing or invalid required field '{}'", field)
            }
            StructureDefect::MissingResourceChanges => {
                write!(f, "missing required field 'resource_changes'")
            }
            StructureDefect::ResourceChangeFields => write!(
                f,
                "resource change missing required fields (address, type, name, or change)"
            ),
            StructureDefect::ActionsNotArray => {
                write!(f, "resource change actions must be an array")
            }
            StructureDefect::ActionsNotStrings => {
                write!(f, "resource change actions must be strings")
            }
        }
    }
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::InputRequired => write!(f, "Plan file path is required"),
            PlanError::NotFound(path) => write!(f, "File does not exist: {}", path),
            PlanError::PermissionDenied(path) => write!(f, "Permission denied: {}", path),
            PlanError::IsADirectory => write!(f, "Path is a directory, not a file"),
            PlanError::NotAFile(path) => write!(f, "Path is not a file: {}", path),
            PlanError::InvalidJson(detail) => write!(f, "Invalid JSON in plan file: {}", detail),
            PlanError::InvalidStructure(defect) => {
                write!(f, "Invalid plan structure: {}", defect)
            }
            PlanError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            // Io is transparent: its Display is already the inner error's
            PlanError::Io(err) => std::error::Error::source(err),
            _ => None,
        }
    }
}

impl From<StructureDefect> for PlanError {
    fn from(defect: StructureDefect) -> Self {
        PlanError::InvalidStructure(defect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_messages() {
        let err = PlanError::from(StructureDefect::InvalidVersionField("format_version"));
        assert_eq!(
            err.to_string(),
            "Invalid plan structure: missing or invalid required field 'format_version'"
        );
        assert_eq!(err.kind(), PlanErrorKind::InvalidStructure);

        let err = PlanError::from(StructureDefect::NotAnObject);
        assert_eq!(err.to_string(), "Invalid plan structure: expected an object");
    }

    #[test]
    fn test_from_io_classification() {
        let err = PlanError::from_io(io::Error::from(io::ErrorKind::NotFound), "plan.json");
        assert_eq!(err.kind(), PlanErrorKind::NotFound);
        assert_eq!(err.to_string(), "File does not exist: plan.json");

        let err = PlanError::from_io(
            io::Error::from(io::ErrorKind::PermissionDenied),
            "plan.json",
        );
        assert_eq!(err.to_string(), "Permission denied: plan.json");
    }

    #[test]
    fn test_unclassified_io_keeps_message() {
        let err = PlanError::from_io(io::Error::other("disk on fire"), "plan.json");
        assert_eq!(err.kind(), PlanErrorKind::Io);
        assert_eq!(err.to_string(), "disk on fire");
    }
}
