//! 岗位准入流水线：关键词 → 匹配度阈值 → 职位黑名单 → 薪资 → HR活跃度 → 公司黑名单
pub mod admissibility;
pub mod profile;

pub use admissibility::JobAdmissibilityPipeline;
pub use profile::{FilterConfig, FilterConfigBuilder, FilterProfile};
