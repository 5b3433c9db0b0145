use thiserror::Error;

use super::tag::Tag;
use crate::word::WordRecord;

/// A field that fell back to its default while parsing.
///
/// `block` is the zero-based index of the record the warning belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldWarning {
    #[error("entry {}: {tag} is the last line, nothing to read", .block + 1)]
    MissingPayload { block: usize, tag: Tag },

    #[error("entry {}: frequency '{payload}' is not a number", .block + 1)]
    InvalidFrequency { block: usize, payload: String },

    #[error("entry {}: audio line '{payload}' has no [sound:...] reference", .block + 1)]
    MissingSoundRef { block: usize, payload: String },
}

impl FieldWarning {
    #[must_use]
    pub const fn block(&self) -> usize {
        match self {
            Self::MissingPayload { block, .. }
            | Self::InvalidFrequency { block, .. }
            | Self::MissingSoundRef { block, .. } => *block,
        }
    }
}

/// Records plus everything that degraded on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub records: Vec<WordRecord>,
    pub warnings: Vec<FieldWarning>,
}

impl ImportReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_use_one_based_entries() {
        let warning = FieldWarning::InvalidFrequency {
            block: 0,
            payload: "abc".to_string(),
        };
        assert_eq!(warning.to_string(), "entry 1: frequency 'abc' is not a number");

        let warning = FieldWarning::MissingPayload {
            block: 2,
            tag: Tag::Meaning,
        };
        assert_eq!(
            warning.to_string(),
            "entry 3: [Meaning] is the last line, nothing to read"
        );
        assert_eq!(warning.block(), 2);
    }
}
