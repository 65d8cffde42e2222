//! Building/Level/Module identifiers.
//!
//! - [`parser`]: normalization and `B<n>L<n>M<n>` extraction
//! - [`matcher`]: shop-drawing lookup per module
//! - [`sorting`]: deterministic multi-key module ordering
//! - [`coverage`]: project-wide matched/missing summary
//!
//! Everything here is pure: callers pass already-loaded records and get
//! values back. Malformed identifiers degrade to [`BlmId::unmatched`].

pub mod coverage;
pub mod matcher;
pub mod parser;
pub mod sorting;

pub use coverage::{drawing_coverage, DrawingCoverage, DrawingStatus, ModuleDrawingStatus};
pub use matcher::{find_matching_drawing, has_matching_drawing, MatchKeys};
pub use parser::{core_pattern, normalize, parse, BlmId, DEFAULT_BUILDING};
pub use sorting::{sort_identifier, sort_modules, SortDirection, SortKey};
