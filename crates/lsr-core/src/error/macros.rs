//! Error macros for lsr

/// Macro for creating malformed line errors
#[macro_export]
macro_rules! bail_malformed {
    ($line:expr, $reason:expr) => {
        return Err($crate::error::LsrError::malformed_line($line, $reason))
    };
}

/// Macro for creating empty input errors
#[macro_export]
macro_rules! bail_empty {
    ($field:expr) => {
        return Err($crate::error::LsrError::EmptyInput {
            field: $field.to_string(),
        })
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::LsrError::UsageError($msg.to_string()))
    };
}
