//! Replayable pull pipelines over bounded sources.

mod core;
mod stage;

pub use self::core::{SharedCursor, Stream, View};
