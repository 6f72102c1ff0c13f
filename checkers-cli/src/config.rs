//! Configuration for the checkers CLI.
//!
//! Every value has a compile-time default and can be overridden at runtime via
//! a dedicated environment variable.

use std::path::PathBuf;

use checkers::{Ruleset, WinPolicy};

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// File name prefix for rolling log files.
pub const LOG_FILE_PREFIX: &str = "checkers";

const DEFAULT_WIN_POLICY: WinPolicy = WinPolicy::PieceExhaustion;

const DEFAULT_BACKWARD_CAPTURE: bool = false;

/// Get the directory for rolling log files.
///
/// Returns `None` unless `CHECKERS_LOG_DIR` is set, in which case logs go to
/// a daily file there instead of stderr.
pub fn get_log_dir() -> Option<PathBuf> {
    std::env::var("CHECKERS_LOG_DIR").ok().map(PathBuf::from)
}

/// Get the win policy.
///
/// Priority:
/// 1. `CHECKERS_WIN_POLICY` env variable if set (`pieces` or `moves`; falls
///    back to the default if the value cannot be parsed)
/// 2. piece exhaustion as fallback
pub fn get_win_policy() -> WinPolicy {
    if let Ok(policy) = std::env::var("CHECKERS_WIN_POLICY") {
        return parse_win_policy(&policy);
    }

    DEFAULT_WIN_POLICY
}

/// Whether pawns may capture backwards.
///
/// Priority:
/// 1. `CHECKERS_BACKWARD_CAPTURE` env variable if set (`true`/`1`/`yes`)
/// 2. `false` as fallback
pub fn get_backward_capture() -> bool {
    if let Ok(value) = std::env::var("CHECKERS_BACKWARD_CAPTURE") {
        return parse_flag(&value);
    }

    DEFAULT_BACKWARD_CAPTURE
}

/// Ruleset assembled from the environment.
pub fn get_ruleset() -> Ruleset {
    Ruleset::default()
        .with_win_policy(get_win_policy())
        .with_pawn_backward_capture(get_backward_capture())
}

fn parse_win_policy(value: &str) -> WinPolicy {
    value.parse().unwrap_or_else(|e| {
        tracing::warn!("Ignoring CHECKERS_WIN_POLICY: {}", e);
        DEFAULT_WIN_POLICY
    })
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
