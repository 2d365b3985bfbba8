//! zhitou-filter-engine - 岗位投递准入过滤内核
//! 纯函数实现，无I/O，配置只读，可在多个工作线程间共享

// 核心数据结构+枚举
pub mod core;
// 内核错误
pub mod error;
// 字体反爬数字解码 + 中文字符判断
pub mod codec;
// 关键词多方案匹配
pub mod matcher;
// 薪资文本规整与区间过滤
pub mod salary;
// HR活跃度过滤
pub mod recruiter;
// 职位/公司黑名单
pub mod blacklist;
// 准入流水线
pub mod pipeline;
// 日志格式化工具
pub mod utils;

// 顶层导出常用类型
pub use crate::core::{
    Evaluation, JobPosting, KeywordMatch, MatchMode, MatchScheme, MatchingResult, PayPeriod, RejectReason,
};
pub use blacklist::BlacklistConfig;
pub use codec::{decode_digits, is_chinese_char, FontDigitTable};
pub use error::{CoreError, CoreResult};
pub use matcher::{KeywordMatcher, MatchConfig, MatchTables, SchemeSet};
pub use pipeline::{FilterConfig, FilterConfigBuilder, FilterProfile, JobAdmissibilityPipeline};
pub use recruiter::{
    is_dead_recruiter, split_boss_name, split_boss_title, DeadStatusConfig, RecruiterActivityFilter,
};
pub use salary::{is_out_of_expected_range, SalaryExpectation, SalaryFilter, SalaryRange};
