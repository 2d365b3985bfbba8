//! zhitou-filter - 岗位投递准入过滤
//! 在过滤内核（zhitou-filter-engine）之上提供用户配置加载、岗位快照读取与命令行入口

// 导出全局错误类型
pub use self::error::{ZhitouError, ZhitouResult};

// 导出配置模块
pub use self::config::{
    load_profile, BlacklistSettings, BossSettings, DeliveryStrategy, MatchingSchemes, UserSettings,
};

// 导出岗位读取接口
pub use self::input::{load_postings, postings_from_json_str};

// 导出过滤内核核心接口
pub use zhitou_filter_engine::{
    decode_digits, is_chinese_char, is_dead_recruiter, is_out_of_expected_range, split_boss_name,
    split_boss_title,
    BlacklistConfig, CoreError, CoreResult, DeadStatusConfig, Evaluation, FilterConfig,
    FilterConfigBuilder, FilterProfile, FontDigitTable, JobAdmissibilityPipeline, JobPosting,
    KeywordMatch, KeywordMatcher, MatchConfig, MatchMode, MatchScheme, MatchTables, MatchingResult,
    PayPeriod, RecruiterActivityFilter, RejectReason, SalaryExpectation, SalaryFilter, SalaryRange,
    SchemeSet,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod input;
