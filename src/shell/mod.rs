//! Executes script commands against a filesystem session and reports structured
//! outcomes.

mod shell;

pub use shell::{Outcome, Shell};
