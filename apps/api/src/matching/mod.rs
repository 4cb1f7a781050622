// Career matching: the role catalog, the overlap scorer, and its short-lived memo.

pub mod cache;
pub mod catalog;
pub mod handlers;
pub mod matcher;

pub use cache::MatchCache;
pub use catalog::{find_role, Role, CATALOG};
pub use matcher::Match;

/// How many matches the analysis, advice and report surfaces show.
pub const TOP_MATCHES: usize = 3;
