pub mod cli;
pub mod collate;
pub mod config;
pub mod document;
pub mod error;
pub mod import;
pub mod index;
pub mod logging;
pub mod normalize;
pub mod parser;
pub mod period;
pub mod reference;
pub mod source;
pub mod ui;
pub mod writer;

pub use cli::{Cli, Commands};
pub use collate::JaCollator;
pub use document::{CardDocument, StationDocument};
pub use error::{ImportError, LoadError};
pub use index::{Engine, LoadState, StationHit, StationRecord};
pub use reference::ReferenceData;
