//! HR活跃度过滤（"僵尸HR"过滤）
//! 活跃时间缺失时放行（fail open）：读不到信号不代表HR不活跃
pub mod activity;

pub use activity::{
    is_dead_recruiter, split_boss_name, split_boss_title, DeadStatusConfig, RecruiterActivityFilter,
};
