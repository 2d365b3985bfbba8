//! 岗位名称与用户关键词的多方案匹配
pub mod keyword;
pub mod schemes;
pub mod tables;

pub use keyword::KeywordMatcher;
pub use schemes::{MatchConfig, SchemeSet};
pub use tables::{MatchTables, DEFAULT_EXCLUDE_KEYWORDS, DEFAULT_ROLE_SUFFIXES};
