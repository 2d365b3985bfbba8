pub mod enums;
pub mod posting;
pub mod result;

pub use enums::{MatchMode, MatchScheme, PayPeriod, RejectReason};
pub use posting::JobPosting;
pub use result::{Evaluation, KeywordMatch, MatchingResult};
