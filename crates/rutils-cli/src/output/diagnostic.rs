//! Miette diagnostics for library errors.

use miette::Diagnostic;
use rutils::RutilsError;
use thiserror::Error;

/// A miette-compatible diagnostic for [`RutilsError`].
#[derive(Debug, Error, Diagnostic)]
pub enum RutilsDiagnostic {
    #[error("invalid input: {message}")]
    #[diagnostic(code(rutils::invalid_input))]
    InvalidInput {
        message: String,

        #[help]
        help: Option<String>,
    },

    #[error("internal error: {message}")]
    #[diagnostic(
        code(rutils::internal),
        help("this is a bug in rutils, please report it with the command line used")
    )]
    Internal { message: String },
}

impl RutilsDiagnostic {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        RutilsDiagnostic::InvalidInput {
            message: message.into(),
            help: None,
        }
    }

    /// Attach a hint to an invalid-input diagnostic.
    pub fn with_help(self, hint: impl Into<String>) -> Self {
        match self {
            RutilsDiagnostic::InvalidInput { message, .. } => RutilsDiagnostic::InvalidInput {
                message,
                help: Some(hint.into()),
            },
            internal @ RutilsDiagnostic::Internal { .. } => internal,
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            RutilsDiagnostic::InvalidInput { .. } => exitcode::DATAERR,
            RutilsDiagnostic::Internal { .. } => exitcode::SOFTWARE,
        }
    }
}

impl From<RutilsError> for RutilsDiagnostic {
    fn from(err: RutilsError) -> Self {
        match err {
            RutilsError::InvalidInput { message } => RutilsDiagnostic::invalid_input(message),
            RutilsError::InternalInconsistency { message } => {
                RutilsDiagnostic::Internal { message }
            }
        }
    }
}
