//! Parsers for markdown post files
//!
//! # Error Handling Strategy
//!
//! Parsers never log or decide on fallbacks themselves. They return structured
//! errors ([`FrontMatterError`], [`DateError`]) or `None`, and the indexer
//! applies graceful degradation per file.

pub mod dates;
pub mod front_matter;
pub mod markdown;

pub use dates::{DateError, normalize_date};
pub use front_matter::{Document, FrontMatterError, FrontMatterParser, YamlFrontMatter};
pub use markdown::first_heading;
