use crate::codec::FontDigitTable;
use crate::error::CoreResult;
use crate::utils::log_format::preview_compact;

use super::normalize::{
    clean_salary_text, detect_job_type, is_salary_in_expected_format, remove_day_unit_if_needed,
    remove_year_bonus_text,
};
use super::range::{is_salary_out_of_range, parse_salary_range, SalaryExpectation};

/// 薪资过滤器
/// 格式异常一律视为不符合预期（fail closed），保护用户设定的薪资下限
#[derive(Debug, Clone, Default)]
pub struct SalaryFilter {
    digits: FontDigitTable,
}

impl SalaryFilter {
    pub fn new(digits: FontDigitTable) -> Self {
        Self { digits }
    }

    /// true = 薪资不符合预期，应排除该岗位
    pub fn is_out_of_expected_range(&self, salary_text: &str, expectation: &SalaryExpectation) -> bool {
        match self.check(salary_text, expectation) {
            Ok(excluded) => excluded,
            Err(e) => {
                log::warn!(
                    "[salary] parse failed, excluding posting: text='{}' error={}",
                    preview_compact(salary_text, 30),
                    e
                );
                true
            }
        }
    }

    /// 带错误返回的判定，解析失败时返回 Err
    pub fn check(&self, salary_text: &str, expectation: &SalaryExpectation) -> CoreResult<bool> {
        if !expectation.is_filtering() {
            return Ok(false);
        }

        let decoded = self.digits.decode(salary_text);
        let without_bonus = remove_year_bonus_text(&decoded);
        if !is_salary_in_expected_format(&without_bonus) {
            log::debug!("[salary] untrusted format, excluding: '{}'", preview_compact(&decoded, 30));
            return Ok(true);
        }

        let period = detect_job_type(&decoded);
        let cleaned = clean_salary_text(&remove_day_unit_if_needed(&without_bonus));
        let range = parse_salary_range(&cleaned)?;
        let excluded = is_salary_out_of_range(&range, expectation, period);
        log::debug!(
            "[salary] text='{}' period={:?} range={}-{} expected={:?}-{:?} excluded={}",
            preview_compact(&decoded, 30),
            period,
            range.lo,
            range.hi,
            expectation.min,
            expectation.max,
            excluded
        );
        Ok(excluded)
    }
}

/// 使用默认字体映射表判定
pub fn is_out_of_expected_range(salary_text: &str, expectation: &SalaryExpectation) -> bool {
    SalaryFilter::default().is_out_of_expected_range(salary_text, expectation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_year_bonus_is_ignored() {
        let exp = SalaryExpectation::between(10, 30);
        assert!(!is_out_of_expected_range("15K-25K·15薪", &exp));
        assert!(!is_out_of_expected_range("15K-25K", &exp));
    }

    #[test]
    fn test_day_rate_conversion() {
        let exp = SalaryExpectation::between(20, 30);
        assert!(is_out_of_expected_range("300-400元/天", &exp));
        assert!(!is_out_of_expected_range("1000-1200元/天", &exp));
    }

    #[test]
    fn test_malformed_fails_closed() {
        let exp = SalaryExpectation::between(10, 20);
        for text in ["面议", "", "3000-5000元/月", "300元/天", "15K以上", "K-K"] {
            assert!(is_out_of_expected_range(text, &exp), "{text:?} should be excluded");
        }
    }

    #[test]
    fn test_no_expectation_passes_through() {
        for exp in [SalaryExpectation::unbounded(), SalaryExpectation::new(None, Some(20))] {
            for text in ["面议", "15K-25K", "300-400元/天", "garbage"] {
                assert!(!is_out_of_expected_range(text, &exp));
            }
        }
    }

    #[test]
    fn test_month_table() {
        let cases = [
            ("5K-8K", SalaryExpectation::between(10, 30), true),
            ("40K-50K", SalaryExpectation::between(10, 30), true),
            ("40K-50K", SalaryExpectation::at_least(10), false),
            ("8-12k", SalaryExpectation::between(10, 30), false),
            ("20-30K·底薪", SalaryExpectation::between(10, 30), false),
            ("20-30K·14薪", SalaryExpectation::between(35, 40), true),
        ];
        for (text, exp, expected) in cases {
            assert_eq!(is_out_of_expected_range(text, &exp), expected, "{text}");
        }
    }

    #[test]
    fn test_obfuscated_digits_normalize_like_plain() {
        let obfuscated = "\u{E031}\u{E035}-\u{E032}\u{E035}K·\u{E031}\u{E035}薪";
        for exp in [SalaryExpectation::between(10, 30), SalaryExpectation::between(30, 40)] {
            assert_eq!(
                is_out_of_expected_range(obfuscated, &exp),
                is_out_of_expected_range("15-25K·15薪", &exp)
            );
        }
        assert!(!is_out_of_expected_range(obfuscated, &SalaryExpectation::between(10, 30)));
    }

    #[test]
    fn test_check_reports_parse_error() {
        let filter = SalaryFilter::default();
        let exp = SalaryExpectation::at_least(10);
        assert!(matches!(filter.check("15K", &exp), Err(CoreError::SalaryRangeShape { .. })));
        assert_eq!(filter.check("面议", &exp), Ok(true));
        assert_eq!(filter.check("15-25K", &exp), Ok(false));
    }
}
