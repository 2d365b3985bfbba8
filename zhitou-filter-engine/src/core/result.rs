use serde::Serialize;

use super::enums::{MatchScheme, RejectReason};

/// 关键词匹配结果
/// 不变量：matched == false ⇔ score == 0 ⇔ scheme == 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchingResult {
    matched: bool,
    score: f64,
    scheme: u8,
}

impl MatchingResult {
    #[inline(always)]
    pub fn unmatched() -> Self {
        Self {
            matched: false,
            score: 0.0,
            scheme: 0,
        }
    }

    #[inline(always)]
    pub fn by(scheme: MatchScheme) -> Self {
        Self {
            matched: true,
            score: scheme.score(),
            scheme: scheme.number(),
        }
    }

    pub fn is_matched(&self) -> bool {
        self.matched
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// 命中的方案编号（1-5），未命中为0
    pub fn scheme(&self) -> u8 {
        self.scheme
    }
}

impl Default for MatchingResult {
    fn default() -> Self {
        Self::unmatched()
    }
}

/// 多关键词匹配结果：命中的关键词 + 匹配结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordMatch {
    pub keyword: Option<String>,
    pub result: MatchingResult,
}

impl KeywordMatch {
    pub fn none() -> Self {
        Self {
            keyword: None,
            result: MatchingResult::unmatched(),
        }
    }
}

/// 单个岗位的准入判定
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub admissible: bool,
    pub keyword_result: MatchingResult,
    pub matched_keyword: Option<String>,
    pub reject: Option<RejectReason>,
}

impl Evaluation {
    pub(crate) fn accept(matched: KeywordMatch) -> Self {
        Self {
            admissible: true,
            keyword_result: matched.result,
            matched_keyword: matched.keyword,
            reject: None,
        }
    }

    pub(crate) fn reject(matched: KeywordMatch, reason: RejectReason) -> Self {
        Self {
            admissible: false,
            keyword_result: matched.result,
            matched_keyword: matched.keyword,
            reject: Some(reason),
        }
    }
}
