//! Error macros for travel-distance

/// Return early with an invalid-argument error
#[macro_export]
macro_rules! bail_invalid {
    ($msg:expr) => {
        return Err($crate::error::TravelError::invalid_argument($msg))
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err($crate::error::TravelError::invalid_argument(format!($fmt, $($arg)+)))
    };
}

/// Return early with an invalid-state error
#[macro_export]
macro_rules! bail_state {
    ($msg:expr) => {
        return Err($crate::error::TravelError::invalid_state($msg))
    };
}

/// Return early with a usage error
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::TravelError::UsageError($msg.to_string()))
    };
}
