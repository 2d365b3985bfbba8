//! 薪资区间过滤
//! 处理顺序：字体数字解码 → 去年终奖 → 格式校验 → 判定日薪/月薪 → 清理 → 解析 → 区间比较
pub mod filter;
pub mod normalize;
pub mod range;

pub use filter::{is_out_of_expected_range, SalaryFilter};
pub use normalize::{
    clean_salary_text, detect_job_type, is_salary_in_expected_format, remove_day_unit_if_needed,
    remove_year_bonus_text, DAY_UNIT,
};
pub use range::{
    is_salary_out_of_range, monthly_k_to_daily, parse_salary_range, SalaryExpectation, SalaryRange,
};
