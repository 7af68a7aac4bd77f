//! Push pipelines for unbounded sources.

mod chain;
mod stream;

pub use self::stream::UbStream;
