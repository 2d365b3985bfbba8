use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::CoreError;

/// 关键词匹配模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchMode {
    /// 仅方案1
    Strict,
    /// 方案1+2+3
    #[default]
    Standard,
    /// 方案1-5全部启用
    Flexible,
    /// 由调用方给出方案开关
    Custom,
}

impl FromStr for MatchMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STRICT" => Ok(MatchMode::Strict),
            "STANDARD" => Ok(MatchMode::Standard),
            "FLEXIBLE" => Ok(MatchMode::Flexible),
            "CUSTOM" => Ok(MatchMode::Custom),
            _ => Err(CoreError::UnknownMatchMode(s.to_string())),
        }
    }
}

impl Display for MatchMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::Strict => write!(f, "STRICT"),
            MatchMode::Standard => write!(f, "STANDARD"),
            MatchMode::Flexible => write!(f, "FLEXIBLE"),
            MatchMode::Custom => write!(f, "CUSTOM"),
        }
    }
}

/// 匹配方案编号与固定分数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchScheme {
    /// 方案1：岗位名以关键词开头
    Prefix = 1,
    /// 方案2：关键词后紧跟职位词
    SuffixCombination = 2,
    /// 方案3：前后均为词边界的完整词
    BoundedSubstring = 3,
    /// 方案4：长关键词拆分为核心词+职位词
    SplitMatch = 4,
    /// 方案5：短关键词+职位词，且前侧为词边界
    ShortKeywordSuffix = 5,
}

impl MatchScheme {
    pub const ALL: [MatchScheme; 5] = [
        MatchScheme::Prefix,
        MatchScheme::SuffixCombination,
        MatchScheme::BoundedSubstring,
        MatchScheme::SplitMatch,
        MatchScheme::ShortKeywordSuffix,
    ];

    #[inline(always)]
    pub fn number(self) -> u8 {
        self as u8
    }

    #[inline(always)]
    pub fn score(self) -> f64 {
        match self {
            MatchScheme::Prefix => 1.0,
            MatchScheme::SuffixCombination => 0.8,
            MatchScheme::BoundedSubstring => 0.7,
            MatchScheme::SplitMatch | MatchScheme::ShortKeywordSuffix => 0.6,
        }
    }

    /// 零基下标，用于方案开关数组
    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self as usize - 1
    }
}

impl Display for MatchScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MatchScheme::Prefix => "prefix",
            MatchScheme::SuffixCombination => "suffix-combination",
            MatchScheme::BoundedSubstring => "bounded-substring",
            MatchScheme::SplitMatch => "split",
            MatchScheme::ShortKeywordSuffix => "short-keyword-suffix",
        };
        write!(f, "scheme{}({})", self.number(), name)
    }
}

/// 计薪周期：日薪 "元/天" 或月薪 "K"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayPeriod {
    Day,
    Month,
}

/// 岗位被拒绝的原因（按流水线阶段顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RejectReason {
    KeywordMismatch,
    ScoreBelowThreshold,
    PositionBlacklisted,
    SalaryOutOfRange,
    DeadRecruiter,
    CompanyBlacklisted,
}

impl Display for RejectReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            RejectReason::KeywordMismatch => "关键词不匹配",
            RejectReason::ScoreBelowThreshold => "匹配度低于阈值",
            RejectReason::PositionBlacklisted => "职位在黑名单中",
            RejectReason::SalaryOutOfRange => "薪资不符合预期",
            RejectReason::DeadRecruiter => "HR不活跃",
            RejectReason::CompanyBlacklisted => "公司在黑名单中",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("strict".parse::<MatchMode>().unwrap(), MatchMode::Strict);
        assert_eq!(" Flexible ".parse::<MatchMode>().unwrap(), MatchMode::Flexible);
        assert_eq!("CUSTOM".parse::<MatchMode>().unwrap(), MatchMode::Custom);
        assert_eq!(
            "loose".parse::<MatchMode>(),
            Err(CoreError::UnknownMatchMode("loose".into()))
        );
        assert_eq!(MatchMode::default(), MatchMode::Standard);
    }

    #[test]
    fn test_scheme_scores() {
        let scores: Vec<(u8, f64)> = MatchScheme::ALL.iter().map(|s| (s.number(), s.score())).collect();
        assert_eq!(scores, vec![(1, 1.0), (2, 0.8), (3, 0.7), (4, 0.6), (5, 0.6)]);
    }
}
