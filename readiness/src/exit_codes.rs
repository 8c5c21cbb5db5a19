//! Stable exit codes for readiness CLI commands.

/// Command succeeded or the assessment was completed.
pub const OK: i32 = 0;
/// Command failed due to an invalid bank/config or other errors.
pub const INVALID: i32 = 1;
/// `readiness take` ended before the assessment was completed.
pub const INCOMPLETE: i32 = 2;
