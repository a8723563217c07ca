//! Error macros for teamdraw

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::TeamdrawError::UsageError($msg.to_string()))
    };
}

/// Macro for creating invalid configuration errors
#[macro_export]
macro_rules! bail_config {
    ($($arg:tt)*) => {
        return Err($crate::error::TeamdrawError::invalid_config(format!($($arg)*)))
    };
}
