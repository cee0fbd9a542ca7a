pub mod document;
pub mod line;

pub use document::*;
pub use line::*;
