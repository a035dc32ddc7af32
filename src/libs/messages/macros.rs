//! Message output macros.
//!
//! Every user-facing line goes through one of these macros. They pick the
//! output channel at runtime:
//!
//! - **Debug mode** (`MACHMON_DEBUG` or `RUST_LOG` set): the line is emitted
//!   as a `tracing` event at the matching level, so it carries timestamps and
//!   targets and honours the subscriber's filter.
//! - **Normal mode**: plain `println!`/`eprintln!` with an emoji prefix.
//!
//! ## Macros
//!
//! | Macro                | Prefix | Normal mode | Debug mode        |
//! |----------------------|--------|-------------|-------------------|
//! | `msg_print!`         |        | stdout      | `tracing::info!`  |
//! | `msg_success!`       | ✅     | stdout      | `tracing::info!`  |
//! | `msg_info!`          | ℹ️     | stdout      | `tracing::info!`  |
//! | `msg_warning!`       | ⚠️     | stdout      | `tracing::warn!`  |
//! | `msg_error!`         | ❌     | stderr      | `tracing::error!` |
//! | `msg_debug!`         | 🔍     | suppressed  | `tracing::debug!` |
//!
//! `msg_error_anyhow!` and `msg_bail_anyhow!` turn a message into an
//! `anyhow::Error` instead of printing it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use machmon::libs::messages::Message;
//! use machmon::{msg_debug, msg_success};
//!
//! msg_success!(Message::ConfigSaved);
//! msg_debug!(Message::MigrationsFound(2));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether messages are routed to `tracing`. Read once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("MACHMON_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a message without prefix.
///
/// The two-argument form `msg_print!(msg, true)` surrounds it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success confirmation with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error with ❌ prefix. Goes to stderr in normal mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning with ⚠️ prefix.
///
/// Used when the tool falls back to a default instead of failing, e.g. a tag
/// outside the view's catalog.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational line with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Debug-only line with 🔍 prefix; nothing is printed in normal mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a message.
///
/// ```rust,no_run
/// use machmon::libs::messages::Message;
/// use machmon::msg_error_anyhow;
///
/// fn find(id: &str) -> anyhow::Result<()> {
///     Err(msg_error_anyhow!(Message::RecordNotFound("machines".into(), id.into())))
/// }
/// ```
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Returns early with an error built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
