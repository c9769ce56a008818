//! Core audit logic. Keep this crate free of IO and platform concerns.

pub mod analyze;
pub mod cards;
pub mod hand;
pub mod rules;
pub mod session;
pub mod turn;

pub use analyze::*;
pub use cards::*;
pub use hand::*;
pub use rules::*;
pub use session::*;
pub use turn::*;
