//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish
//!   error types.
//! - Map `SourceError` to the I/O exit code.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Store-level misses: absence and non-coercibility are values, print
//!   as zero values, and exit successfully.

use cascade_store::SourceError;

/// Structured exit codes for cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    #[allow(dead_code)]
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// I/O error - the configuration file could not be opened or read.
    ///
    /// Scripts should verify the path passed via --file or CASCADE_CONFIG.
    IoError = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if the error is not a SourceError.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.downcast_ref::<SourceError>().is_some() {
                return ExitCode::IoError;
            }
        }
        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::IoError.as_i32(), 3);
    }

    #[test]
    fn test_source_error_maps_to_io_exit_code() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = anyhow::Error::new(SourceError::Open {
            path: "config.txt".into(),
            source,
        });
        assert_eq!(err.exit_code(), ExitCode::IoError);
    }

    #[test]
    fn test_other_errors_map_to_general_exit_code() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
