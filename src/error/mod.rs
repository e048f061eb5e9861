//! Error types for validation failures.
//!
//! This module provides [`Failure`], the value every test returns when it
//! rejects a value, [`ErrorReport`] for the path-keyed output of structural
//! matching, and [`VerifyError`] for the raising form of evaluation.

mod failure;
mod report;

pub use failure::{Failure, VerifyError};
pub use report::{ErrorReport, ReportEntry};
