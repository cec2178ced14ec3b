//! Text transformations applied to the editor buffer
//!
//! Both passes are pure functions over a single string:
//! - [`format`] normalizes section headers, bullets and numbered lists
//! - [`optimize`] wraps unstructured text in the Context/Task scaffold and
//!   reports what it changed as a list of [`OptimizationChange`]s

mod format;
mod optimize;

pub use format::format;
pub use optimize::{optimize, OptimizationChange, ChangeKind, BREVITY_THRESHOLD};
