//! 过滤配置：用户偏好的原始形态（FilterConfig）与校验、解析后的只读形态（FilterProfile）

use serde::{Deserialize, Serialize};

use crate::blacklist::BlacklistConfig;
use crate::core::MatchMode;
use crate::error::{CoreError, CoreResult};
use crate::matcher::{MatchConfig, SchemeSet};
use crate::recruiter::DeadStatusConfig;
use crate::salary::SalaryExpectation;

/// 一次抓取会话的过滤配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    /// 用户搜索关键词，按顺序尝试
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub matching: MatchConfig,
    #[serde(default)]
    pub salary: SalaryExpectation,
    #[serde(default)]
    pub dead_status: DeadStatusConfig,
    #[serde(default)]
    pub blacklist: BlacklistConfig,
    /// 关键词匹配度下限（0.0-1.0），None 表示不限制
    #[serde(default)]
    pub min_match_score: Option<f64>,
}

impl FilterConfig {
    pub fn builder() -> FilterConfigBuilder {
        FilterConfigBuilder::new()
    }

    pub fn validate(&self) -> CoreResult<()> {
        self.salary.validate()?;
        if let Some(score) = self.min_match_score {
            if !(0.0..=1.0).contains(&score) {
                return Err(CoreError::InvalidConfig(format!(
                    "min match score {} outside [0, 1]",
                    score
                )));
            }
        }
        Ok(())
    }
}

/// 校验并解析后的只读配置，会话期间不可变，可在多个工作线程间共享
#[derive(Debug, Clone, PartialEq)]
pub struct FilterProfile {
    config: FilterConfig,
    schemes: SchemeSet,
}

impl FilterProfile {
    pub fn new(config: FilterConfig) -> CoreResult<Self> {
        config.validate()?;
        if config.keywords.iter().all(|k| k.trim().is_empty()) {
            log::warn!("[profile] no search keyword configured, every posting will be rejected");
        }
        let schemes = config.matching.resolve();
        log::debug!(
            "[profile] mode={} schemes={:?} keywords={}",
            config.matching.mode,
            schemes.as_array(),
            config.keywords.len()
        );
        Ok(Self { config, schemes })
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn keywords(&self) -> &[String] {
        &self.config.keywords
    }

    pub fn schemes(&self) -> &SchemeSet {
        &self.schemes
    }

    pub fn salary(&self) -> &SalaryExpectation {
        &self.config.salary
    }

    pub fn dead_status(&self) -> &DeadStatusConfig {
        &self.config.dead_status
    }

    pub fn blacklist(&self) -> &BlacklistConfig {
        &self.config.blacklist
    }

    pub fn min_match_score(&self) -> Option<f64> {
        self.config.min_match_score
    }
}

impl TryFrom<FilterConfig> for FilterProfile {
    type Error = CoreError;

    fn try_from(config: FilterConfig) -> CoreResult<Self> {
        Self::new(config)
    }
}

/// 过滤配置构建器（链式 API）
#[derive(Debug, Clone, Default)]
pub struct FilterConfigBuilder {
    config: FilterConfig,
}

impl FilterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.config.keywords.push(keyword.into());
        self
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.config.matching = MatchConfig::preset(mode);
        self
    }

    pub fn custom_schemes(mut self, enabled: [bool; 5]) -> Self {
        self.config.matching = MatchConfig::custom(enabled);
        self
    }

    pub fn expected_salary(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.config.salary = SalaryExpectation::new(min, max);
        self
    }

    pub fn dead_status<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.dead_status = DeadStatusConfig::new(true, phrases.into_iter().map(Into::into).collect());
        self
    }

    pub fn blacklist(mut self, blacklist: BlacklistConfig) -> Self {
        self.config.blacklist = blacklist;
        self
    }

    pub fn min_match_score(mut self, score: f64) -> Self {
        self.config.min_match_score = Some(score);
        self
    }

    pub fn build(self) -> CoreResult<FilterConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    pub fn build_profile(self) -> CoreResult<FilterProfile> {
        FilterProfile::new(self.config)
    }
}
