//! 薪资文本的纯字符串变换，每一步都可以单独测试

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::PayPeriod;

/// 日薪单位
pub const DAY_UNIT: &str = "元/天";

/// 年终奖标注，如 "·15薪"
static YEAR_BONUS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"·\d+薪").unwrap());

/// 去掉年终奖信息，如 "15K-25K·15薪" -> "15K-25K"
pub fn remove_year_bonus_text(salary: &str) -> String {
    if !salary.contains('薪') {
        return salary.to_string();
    }
    YEAR_BONUS_RE.replace_all(salary, "").into_owned()
}

/// 包含 "元/天" 视为日薪，否则为月薪
pub fn detect_job_type(salary: &str) -> PayPeriod {
    if salary.contains(DAY_UNIT) {
        PayPeriod::Day
    } else {
        PayPeriod::Month
    }
}

/// 日薪时去掉 "元/天"
pub fn remove_day_unit_if_needed(salary: &str) -> String {
    if salary.contains(DAY_UNIT) {
        salary.replace(DAY_UNIT, "")
    } else {
        salary.to_string()
    }
}

/// 薪资格式是否可信：必须带 "K"/"k" 或 "元/天"
pub fn is_salary_in_expected_format(salary: &str) -> bool {
    salary.contains('K') || salary.contains('k') || salary.contains(DAY_UNIT)
}

/// 去掉 "K"/"k"，并截掉第一个 "·" 之后的残余标注
pub fn clean_salary_text(salary: &str) -> String {
    let head = salary.split('·').next().unwrap_or_default();
    head.chars().filter(|c| !matches!(c, 'K' | 'k')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_year_bonus_text() {
        let cases = [
            ("15K-25K·15薪", "15K-25K"),
            ("10K-20K·13薪", "10K-20K"),
            ("20K-30K·14薪", "20K-30K"),
            ("15K-25K", "15K-25K"),
            ("20-30K·底薪", "20-30K·底薪"),
        ];
        for (input, expected) in cases {
            assert_eq!(remove_year_bonus_text(input), expected);
        }
    }

    #[test]
    fn test_detect_job_type() {
        let cases = [
            ("15K-25K", PayPeriod::Month),
            ("10K-20K", PayPeriod::Month),
            ("200元/天", PayPeriod::Day),
            ("300-400元/天", PayPeriod::Day),
            ("面议", PayPeriod::Month),
        ];
        for (input, expected) in cases {
            assert_eq!(detect_job_type(input), expected, "{input}");
        }
    }

    #[test]
    fn test_remove_day_unit() {
        assert_eq!(remove_day_unit_if_needed("300-400元/天"), "300-400");
        assert_eq!(remove_day_unit_if_needed("15-25K"), "15-25K");
    }

    #[test]
    fn test_expected_format() {
        assert!(is_salary_in_expected_format("15K-25K"));
        assert!(is_salary_in_expected_format("10k-20k"));
        assert!(is_salary_in_expected_format("300-400元/天"));
        assert!(!is_salary_in_expected_format("面议"));
        assert!(!is_salary_in_expected_format("3000-5000元/月"));
    }

    #[test]
    fn test_clean_salary_text() {
        let cases = [
            ("15K-25K", "15-25"),
            ("10k-20k", "10-20"),
            ("15K·25K", "15"),
            ("10-20", "10-20"),
            ("20-30K·底薪", "20-30"),
        ];
        for (input, expected) in cases {
            assert_eq!(clean_salary_text(input), expected);
        }
    }
}
