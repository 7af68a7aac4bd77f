//! Lazily-composed, replayable data-transformation pipelines.
//!
//! Two pipeline engines share one vocabulary of transformations:
//!
//! - [`Stream`] — a pull-based, replayable pipeline over a bounded
//!   [`Cursor`] source. Intermediate operations only compose; every
//!   terminal operation resets the source and re-drives the whole chain,
//!   so one stream value supports any number of independent terminal
//!   calls.
//! - [`UbStream`] — a push-based pipeline for unbounded sources, built
//!   from typed stages including sliding and tumbling window operators.
//!
//! Both compose with [`Collector`], a supplier/accumulator/finisher
//! contract for mutable reduction, and the [`collectors`] catalog of
//! prebuilt reductions (grouping, partitioning, joining, averaging, …).
//!
//! ```
//! use rivulet::Stream;
//!
//! let stream = Stream::of(vec![1, 2, 3, 4, 5]);
//! let doubled = stream.map(|x| x * 2);
//! assert_eq!(doubled.to_vec()?, vec![2, 4, 6, 8, 10]);
//! assert_eq!(doubled.sum()?, 30);
//! # Ok::<(), rivulet::StreamError>(())
//! ```

pub mod adapters;
pub mod collector;
pub mod collectors;
pub mod config;
pub mod cursor;
pub mod error;
pub mod stream;
pub mod unbound;

pub use adapters::Streamable;
pub use collector::Collector;
pub use config::BufferConfig;
pub use cursor::{Cursor, SliceCursor, SnapshotCursor};
pub use error::{StreamError, StreamResult};
pub use stream::{Stream, View};
pub use unbound::UbStream;
