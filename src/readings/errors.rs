//! Reading store error types
//!
//! Error codes:
//! - DS_STORE_IO_ERROR (ERROR severity)
//! - DS_STORE_READ_FAILED (ERROR severity)
//! - DS_STORE_WRITE_FAILED (ERROR severity)
//! - DS_STORE_MALFORMED_TABLE (FATAL severity)
//!
//! A candidate row missing its key is NOT an error: it is dropped locally
//! and the batch continues.

use std::fmt;
use std::io;

use crate::observability::Severity;

/// Reading store error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// Directory creation or other filesystem failure
    DsStoreIoError,
    /// Workbook read failed
    DsStoreReadFailed,
    /// Workbook write failed
    DsStoreWriteFailed,
    /// Workbook exists but is not a well-formed table
    DsStoreMalformedTable,
}

impl StoreErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::DsStoreIoError => "DS_STORE_IO_ERROR",
            StoreErrorCode::DsStoreReadFailed => "DS_STORE_READ_FAILED",
            StoreErrorCode::DsStoreWriteFailed => "DS_STORE_WRITE_FAILED",
            StoreErrorCode::DsStoreMalformedTable => "DS_STORE_MALFORMED_TABLE",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            StoreErrorCode::DsStoreIoError => Severity::Error,
            StoreErrorCode::DsStoreReadFailed => Severity::Error,
            StoreErrorCode::DsStoreWriteFailed => Severity::Error,
            StoreErrorCode::DsStoreMalformedTable => Severity::Fatal,
        }
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Reading store error with context
#[derive(Debug)]
pub struct StoreError {
    code: StoreErrorCode,
    message: String,
    source: Option<io::Error>,
}

impl StoreError {
    /// Filesystem failure outside read/write of the workbook itself
    pub fn io_error(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::DsStoreIoError,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Workbook read failed
    pub fn read_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::DsStoreReadFailed,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Workbook write failed
    pub fn write_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::DsStoreWriteFailed,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Workbook content is not a well-formed table
    pub fn malformed_table(message: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::DsStoreMalformedTable,
            message: message.into(),
            source: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> StoreErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )?;
        if let Some(ref source) = self.source {
            write!(f, " (caused by: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for reading store operations
pub type StoreResult<T> = Result<T, StoreError>;
