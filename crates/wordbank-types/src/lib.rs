pub mod pos;
pub mod types;

pub use pos::PartOfSpeech;
pub use types::*;
