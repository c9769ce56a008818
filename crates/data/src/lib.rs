//! Log reading and report writing around the core auditor.

pub mod load;
pub mod report;

pub use load::*;
pub use report::*;
