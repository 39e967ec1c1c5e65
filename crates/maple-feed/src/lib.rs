//! Weather feed extraction engine.
//!
//! Turns the bytes of an Atom-style weather syndication feed into a typed
//! [`maple_core::WeatherReport`]:
//!
//! 1. [`envelope`] decodes the XML into generic entries.
//! 2. [`classify`] routes entries by category term.
//! 3. [`condition`] parses the free-form current-conditions entry;
//!    [`bulletin`] copies forecasts and warnings.
//! 4. [`report`] assembles the result, isolating a current-conditions failure
//!    from the rest of the report.

pub mod bulletin;
pub mod classify;
pub mod condition;
pub mod envelope;
pub mod error;
pub mod observed;
pub mod pipeline;
pub mod report;

mod summary;

pub use classify::{classify, ClassifiedEntries};
pub use envelope::{decode, decode_envelope, FeedEnvelope};
pub use error::{DecodeError, ExtractionError, ExtractionStage};
pub use pipeline::parse_feed;
pub use report::{aggregate, ReportOutcome};
