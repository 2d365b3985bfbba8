use serde::{Deserialize, Serialize};

use crate::core::PayPeriod;
use crate::error::{CoreError, CoreResult};

/// 月计薪天数：期望月薪(K)折算日薪用
const WORK_DAYS_PER_MONTH_X100: u64 = 2175;

/// 岗位薪资区间 [lo, hi]，单位与原文一致（月薪为K，日薪为元）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryRange {
    pub lo: u32,
    pub hi: u32,
}

/// 用户期望薪资（单位：K/月）
/// min 缺失表示不过滤；max 缺失表示无上限
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryExpectation {
    #[serde(default)]
    pub min: Option<u32>,
    #[serde(default)]
    pub max: Option<u32>,
}

impl SalaryExpectation {
    pub fn new(min: Option<u32>, max: Option<u32>) -> Self {
        Self { min, max }
    }

    pub fn between(min: u32, max: u32) -> Self {
        Self::new(Some(min), Some(max))
    }

    pub fn at_least(min: u32) -> Self {
        Self::new(Some(min), None)
    }

    /// 不做薪资过滤
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_filtering(&self) -> bool {
        self.min.is_some()
    }

    pub fn validate(&self) -> CoreResult<()> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Err(CoreError::InvalidConfig(format!(
                "expected salary min {}K > max {}K",
                min, max
            ))),
            _ => Ok(()),
        }
    }
}

/// 按 "-" 拆分为两段，每段去掉非数字字符后解析为整数
pub fn parse_salary_range(salary: &str) -> CoreResult<SalaryRange> {
    let parts: Vec<&str> = salary.split('-').collect();
    if parts.len() != 2 {
        return Err(CoreError::SalaryRangeShape {
            text: salary.to_string(),
            parts: parts.len(),
        });
    }
    Ok(SalaryRange {
        lo: parse_digits(parts[0])?,
        hi: parse_digits(parts[1])?,
    })
}

fn parse_digits(part: &str) -> CoreResult<u32> {
    let digits: String = part.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<u32>().map_err(|source| CoreError::SalaryNumber {
        text: part.to_string(),
        source,
    })
}

/// 月薪(K)折算为日薪(元)：round_half_up(k * 1000 / 21.75)
/// 结果可能超出 u32，按 u64 返回
pub fn monthly_k_to_daily(monthly_k: u32) -> u64 {
    // k*1000/21.75 = k*100000/2175，加半个除数实现四舍五入
    let numerator = u64::from(monthly_k) * 100_000;
    (numerator * 2 + WORK_DAYS_PER_MONTH_X100) / (WORK_DAYS_PER_MONTH_X100 * 2)
}

/// 区间重叠判断：岗位上限低于期望下限，或岗位下限高于期望上限，则不符合
pub fn is_salary_out_of_range(job: &SalaryRange, expectation: &SalaryExpectation, period: PayPeriod) -> bool {
    let Some(min) = expectation.min else {
        return false;
    };
    let (min, max) = match period {
        PayPeriod::Day => (monthly_k_to_daily(min), expectation.max.map(monthly_k_to_daily)),
        PayPeriod::Month => (u64::from(min), expectation.max.map(u64::from)),
    };
    if u64::from(job.hi) < min {
        return true;
    }
    max.is_some_and(|max| u64::from(job.lo) > max)
}
