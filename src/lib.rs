//! Classify bibliographic URLs into identifier schemes.
//!
//! ```
//! use citation_url::{Parsed, Scheme, parse};
//!
//! assert_eq!(
//!     parse("https://joss.theoj.org/papers/10.21105/joss.01708"),
//!     Parsed::Identified { scheme: Scheme::Doi, id: "10.21105/joss.01708".into() },
//! );
//! assert_eq!(
//!     parse("https://example.com/true-garbage"),
//!     Parsed::Unparsed("https://example.com/true-garbage".into()),
//! );
//! ```

pub mod batch;
pub mod classifier;
pub mod export;
pub mod identifier;
pub mod rule;
pub mod rules;
pub mod scheme;

pub use batch::{Groups, group, parse_many};
pub use classifier::{Classifier, Match, Parsed, parse};
pub use export::{ExportRecords, process_export, read_export};
pub use rule::{Extractor, Rule, Surface};
pub use rules::RULES;
pub use scheme::Scheme;
