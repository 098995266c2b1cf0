//! Convenience macros for application messaging and logging.
//!
//! All output flows through the tracing subscriber installed at process
//! start, which mirrors every line to stdout and to the append-mode log
//! file. The macros take a [`Message`](super::Message) value so the text
//! itself stays centralized in the messages module.

/// Logs a general message at info level.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        tracing::info!("{}", $msg)
    };
}

/// Logs a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        tracing::info!("✅ {}", $msg)
    };
}

/// Logs an informational message.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        tracing::info!("{}", $msg)
    };
}

/// Logs an error message. Errors reported this way are terminal for the
/// current operation but never crash the batch run.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        tracing::error!("{}", $msg)
    };
}

/// Logs a debug-level message, visible when `LOG_LEVEL=debug`.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        tracing::debug!("{}", $msg)
    };
}

