//! Document Acquisition Module
//!
//! Obtains the text a run analyzes. This is the only place the crate talks to
//! the outside world for input; the counting engine only ever sees a `Document`.
//!
//! ## Workflow
//! 1. **Download / Read**: Fetches raw text over HTTP or reads it from a local file.
//! 2. **Clean**: Optionally strips the Project Gutenberg license header and footer.
//! 3. **Hand-off**: Wraps the text into an immutable `Document`.
//!
//! Any failure here is an `UpstreamFailure`: the engine never receives input.

pub mod fetcher;
pub mod types;

pub use fetcher::{fetch_document, load_document, strip_gutenberg};
pub use types::DocumentSource;
