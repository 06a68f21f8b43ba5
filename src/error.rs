//! Error Types
//!
//! Error handling for the input synthesis engine. Argument validation
//! errors are raised at build time, before any record reaches dispatch,
//! so a rejected call never leaves a modifier pressed or a cursor moved.

use thiserror::Error;

/// Result type for synthesis operations
pub type Result<T> = std::result::Result<T, SynthError>;

/// Input synthesis error types
#[derive(Error, Debug)]
pub enum SynthError {
    /// A caller-supplied argument is out of range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Character cannot be represented by a single 16-bit code unit
    #[error("character U+{:04X} needs a surrogate pair and cannot be typed as one event", *.0 as u32)]
    UnsupportedCharacter(char),

    /// Normalization attempted against a zero-extent reference rectangle
    #[error("reference rectangle has zero extent on the {axis} axis")]
    DegenerateRect {
        /// Which axis collapsed ("x" or "y")
        axis: &'static str,
    },

    /// The OS accepted fewer records than were submitted.
    ///
    /// The injection API reports only a count; the cause (UIPI blocking,
    /// secure desktop, focus policy) is deliberately not guessed at.
    #[error("injection accepted {accepted} of {submitted} events")]
    PartialInjection {
        /// Events the OS actually accepted
        accepted: u32,
        /// Events in the submitted batch
        submitted: u32,
    },

    /// A collaborator query (cursor position, screen rectangle) failed
    #[error("desktop query failed: {0}")]
    Probe(String),

    /// Configuration load or validation failure
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SynthError::PartialInjection {
            accepted: 3,
            submitted: 5,
        };
        assert_eq!(err.to_string(), "injection accepted 3 of 5 events");

        let err = SynthError::DegenerateRect { axis: "x" };
        assert!(err.to_string().contains("zero extent on the x axis"));
    }

    #[test]
    fn test_unsupported_character_reports_code_point() {
        let err = SynthError::UnsupportedCharacter('\u{1F600}');
        assert!(err.to_string().contains("1F600"));
    }
}
