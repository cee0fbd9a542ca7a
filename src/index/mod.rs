//! In-memory index over a loaded card document and the queries it answers

pub mod category;
pub mod engine;
pub mod record;

pub use category::*;
pub use engine::*;
pub use record::*;
