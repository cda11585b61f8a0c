// Core algorithm exports
pub mod eligibility;
pub mod lifecycle;
pub mod matcher;
pub mod similarity;

pub use eligibility::{budgets_match, has_overlapping_dates, is_eligible};
pub use lifecycle::{channel_id, ErrorKind, MatchError, MatchService};
pub use matcher::{MatchResult, Matcher};
pub use similarity::{list_similarity, similarity, tag_score};
