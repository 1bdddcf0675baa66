//! Error types for configuration and generation operations
//!
//! Contradictions during solving are not errors: they surface as a normal
//! failed attempt and are retried. Errors here are configuration and
//! contract violations, plus exhaustion of the retry budget.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// A pattern set with no patterns was supplied
    EmptyPatternSet,

    /// A pattern frequency was zero, negative, or not finite
    InvalidFrequency {
        /// Pattern index carrying the bad frequency
        index: usize,
        /// The rejected value
        value: f64,
    },

    /// A rule table row does not carry one list per direction
    MalformedRuleTable {
        /// Pattern whose row is malformed
        pattern: usize,
        /// Direction count the dimensionality requires
        expected: usize,
        /// Direction count found
        found: usize,
    },

    /// A pattern index exceeds the pattern set
    PatternOutOfRange {
        /// The invalid pattern index
        index: usize,
        /// Number of patterns available
        num_patterns: usize,
    },

    /// A compatibility rule lacks its mirrored counterpart
    AsymmetricRule {
        /// Pattern holding the one-sided rule
        pattern: usize,
        /// Direction of the one-sided rule
        direction: usize,
        /// Pattern missing the opposite-direction entry
        other: usize,
    },

    /// Frequency list and rule table disagree on the pattern count
    PatternCountMismatch {
        /// Patterns in the frequency set
        patterns: usize,
        /// Patterns in the rule table
        rules: usize,
    },

    /// A cell coordinate lies outside the output extents
    CellOutOfBounds {
        /// The rejected coordinates
        cell: Vec<usize>,
        /// Extents of the output grid
        extents: Vec<usize>,
    },

    /// Every attempt ended in contradiction
    AttemptsExhausted {
        /// Number of attempts made
        attempts: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPatternSet => {
                write!(f, "Pattern set is empty")
            }
            Self::InvalidFrequency { index, value } => {
                write!(
                    f,
                    "Pattern {index} has invalid frequency {value} (must be positive and finite)"
                )
            }
            Self::MalformedRuleTable {
                pattern,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Rule table row for pattern {pattern} has {found} direction lists (expected {expected})"
                )
            }
            Self::PatternOutOfRange {
                index,
                num_patterns,
            } => {
                write!(
                    f,
                    "Pattern index {index} is out of range (pattern set holds {num_patterns})"
                )
            }
            Self::AsymmetricRule {
                pattern,
                direction,
                other,
            } => {
                write!(
                    f,
                    "Rule ({pattern} -> {other}) along direction {direction} has no mirrored counterpart"
                )
            }
            Self::PatternCountMismatch { patterns, rules } => {
                write!(
                    f,
                    "Frequency set holds {patterns} patterns but the rule table holds {rules}"
                )
            }
            Self::CellOutOfBounds { cell, extents } => {
                write!(f, "Cell {cell:?} lies outside the output extents {extents:?}")
            }
            Self::AttemptsExhausted { attempts } => {
                write!(f, "All {attempts} attempts ended in contradiction")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_the_offending_values() {
        let err = GenerationError::InvalidFrequency {
            index: 3,
            value: -1.0,
        };
        let text = err.to_string();
        assert!(text.contains('3'));
        assert!(text.contains("-1"));
    }

    #[test]
    fn test_file_system_error_carries_path_and_source() {
        let err = GenerationError::FileSystem {
            path: PathBuf::from("/tmp/out.txt"),
            operation: "write",
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let text = err.to_string();
        assert!(text.contains("write"));
        assert!(text.contains("/tmp/out.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_parameter_helper_formats_all_parts() {
        let err = invalid_parameter("depth", &0, &"must be at least 1");
        match err {
            GenerationError::InvalidParameter {
                parameter, value, ..
            } => {
                assert_eq!(parameter, "depth");
                assert_eq!(value, "0");
            }
            _ => unreachable!("Expected InvalidParameter error type"),
        }
    }
}
