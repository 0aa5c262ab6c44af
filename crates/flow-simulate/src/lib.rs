//! `flow-simulate` — load a named experiment, adjust it from the command
//! line, and run it.
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`flags`]  | `Flags` — structopt command line                  |
//! | [`runner`] | `Runner`, `Stage`, `check_flags`, `mutate_config` |
//! | [`error`]  | `SimulateError`, `SimulateResult<T>`              |
//!
//! ```text
//! PARSE_FLAGS ──► LOAD_CONFIG ──► MUTATE_CONFIG ──► RUN
//! ```
//!
//! Any failure ends the process; nothing is retried.

pub mod error;
pub mod flags;
pub mod runner;


pub use error::{SimulateError, SimulateResult};
pub use flags::Flags;
pub use runner::{DEFAULT_EMISSION_PATH, Runner, Stage, check_flags, mutate_config};
