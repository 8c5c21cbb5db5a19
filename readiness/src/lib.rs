//! "Should You Learn React.js?" readiness assessment.
//!
//! A fixed sequence of choice, scale and slider questions grouped into
//! sections, ending in a locally computed readiness score and a YES / MAYBE /
//! NO recommendation. The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure logic (bank invariants, cursor arithmetic, the flow
//!   state machine, scoring). Randomness is injected, so everything is
//!   testable in isolation.
//! - **[`io`]**: Config files, bank files, the RNG and report rendering.
//!
//! [`session`] connects the two into the interactive `readiness take` command.

pub mod core;
pub mod exit_codes;
pub mod guidance;
pub mod io;
pub mod logging;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
