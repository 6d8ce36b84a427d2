/// Reports normal progress. Rendered as `[+]` by the cli formatter.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

/// Reports a completed step. Same level as [`info!`], kept separate so
/// call sites read as outcomes rather than progress.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

/// Rendered as `[*]`.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

/// Rendered as `[-]`.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}
