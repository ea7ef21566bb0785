use std::path::PathBuf;
use thiserror::Error;

/// Failed equip or unequip. The player is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EquipError {
    #[error("No item at index {index} (inventory holds {owned})")]
    InvalidIndex { index: usize, owned: usize },

    #[error("Nothing is equipped")]
    NothingEquipped,
}

/// Failed save or load. The live session is never touched by a failed load.
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("No save file at {}", .0.display())]
    MissingSaveFile(PathBuf),

    #[error("Malformed save record at line {line} ({field}): {reason}")]
    MalformedRecord {
        line: usize,
        field: &'static str,
        reason: String,
    },

    #[error("Nothing to save: {0}")]
    NothingToSave(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SaveError {
    pub fn malformed(line: usize, field: &'static str, reason: impl Into<String>) -> Self {
        SaveError::MalformedRecord {
            line,
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equip_error_messages() {
        let err = EquipError::InvalidIndex { index: 4, owned: 2 };
        assert_eq!(err.to_string(), "No item at index 4 (inventory holds 2)");
        assert_eq!(EquipError::NothingEquipped.to_string(), "Nothing is equipped");
    }

    #[test]
    fn test_malformed_message_names_line_and_field() {
        let err = SaveError::malformed(1, "enemy index", "not an integer: \"abc\"");
        let msg = err.to_string();
        assert!(msg.contains("line 1"));
        assert!(msg.contains("enemy index"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SaveError = io.into();
        assert!(matches!(err, SaveError::Io(_)));
    }
}
