//! 用户配置加载
//! 读取用户配置文件（config.json）中的 boss 与 blacklistConfig 部分，
//! 转换为过滤内核使用的 FilterConfig / FilterProfile。

use serde::Deserialize;
use std::path::Path;
use zhitou_filter_engine::{
    BlacklistConfig, DeadStatusConfig, FilterConfig, FilterProfile, MatchConfig, MatchMode,
    SalaryExpectation, SchemeSet,
};

use crate::error::{ZhitouError, ZhitouResult};

/// 用户配置文件
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(default)]
    pub boss: Option<BossSettings>,
    #[serde(default)]
    pub blacklist_config: Option<BlacklistSettings>,
}

/// Boss直聘投递配置
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossSettings {
    /// 搜索关键词列表
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    /// 目标薪资 [最低, 最高]，单位K
    #[serde(default)]
    pub expected_salary: Option<Vec<u32>>,
    /// 是否过滤不活跃HR
    #[serde(default, rename = "filterDeadHR")]
    pub filter_dead_hr: Option<bool>,
    /// HR未上线状态
    #[serde(default)]
    pub dead_status: Option<Vec<String>>,
    #[serde(default)]
    pub delivery_strategy: Option<DeliveryStrategy>,
}

/// 投递策略
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryStrategy {
    /// STRICT / STANDARD / FLEXIBLE
    #[serde(default)]
    pub keyword_matching_mode: Option<String>,
    /// 存在时视为自定义模式
    #[serde(default)]
    pub matching_schemes: Option<MatchingSchemes>,
    /// 匹配度阈值（0.0-1.0）
    #[serde(default)]
    pub match_threshold: Option<f64>,
}

/// 自定义方案开关，未给出的方案按标准模式取值
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingSchemes {
    pub enable_scheme1: Option<bool>,
    pub enable_scheme2: Option<bool>,
    pub enable_scheme3: Option<bool>,
    pub enable_scheme4: Option<bool>,
    pub enable_scheme5: Option<bool>,
}

impl MatchingSchemes {
    pub fn to_scheme_set(&self) -> SchemeSet {
        let defaults = SchemeSet::STANDARD.as_array();
        let flags = [
            self.enable_scheme1,
            self.enable_scheme2,
            self.enable_scheme3,
            self.enable_scheme4,
            self.enable_scheme5,
        ];
        let mut enabled = defaults;
        for (slot, flag) in enabled.iter_mut().zip(flags) {
            if let Some(flag) = flag {
                *slot = flag;
            }
        }
        SchemeSet::new(enabled)
    }
}

/// 黑名单配置（字段名与前端统一）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlacklistSettings {
    #[serde(default)]
    pub enable_blacklist_filter: Option<bool>,
    #[serde(default)]
    pub company_blacklist: Option<Vec<String>>,
    #[serde(default)]
    pub position_blacklist: Option<Vec<String>>,
}

impl UserSettings {
    pub fn from_json_str(json: &str) -> ZhitouResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ZhitouResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        log::info!("Loading user settings from {}", path.display());
        Self::from_json_str(&content)
    }

    /// 转换为过滤配置（会校验配置合法性）
    pub fn to_filter_config(&self) -> ZhitouResult<FilterConfig> {
        let boss = self
            .boss
            .as_ref()
            .ok_or_else(|| ZhitouError::InvalidInput("用户配置中没有boss部分".to_string()))?;

        let config = FilterConfig {
            keywords: boss.keywords.clone().unwrap_or_default(),
            matching: boss.match_config()?,
            salary: boss.salary_expectation(),
            dead_status: DeadStatusConfig::new(
                boss.filter_dead_hr.unwrap_or(false),
                boss.dead_status.clone().unwrap_or_default(),
            ),
            blacklist: self.blacklist(),
            min_match_score: boss.delivery_strategy.as_ref().and_then(|s| s.match_threshold),
        };
        config.validate()?;

        log::info!(
            "Settings loaded: keywords={:?}, salary={:?}-{:?}, mode={}, filterDeadHR={}",
            config.keywords,
            config.salary.min,
            config.salary.max,
            config.matching.mode,
            config.dead_status.enabled
        );
        Ok(config)
    }

    pub fn to_profile(&self) -> ZhitouResult<FilterProfile> {
        Ok(FilterProfile::new(self.to_filter_config()?)?)
    }

    fn blacklist(&self) -> BlacklistConfig {
        let Some(bl) = &self.blacklist_config else {
            return BlacklistConfig::default();
        };
        let enabled = bl.enable_blacklist_filter.unwrap_or(false);
        if !enabled {
            log::info!("Blacklist filter disabled");
        }
        BlacklistConfig {
            enabled,
            position_blacklist: bl.position_blacklist.clone().unwrap_or_default(),
            company_blacklist: bl.company_blacklist.clone().unwrap_or_default(),
        }
    }
}

impl BossSettings {
    fn match_config(&self) -> ZhitouResult<MatchConfig> {
        let strategy = match &self.delivery_strategy {
            Some(strategy) => strategy,
            None => return Ok(MatchConfig::default()),
        };
        if let Some(schemes) = &strategy.matching_schemes {
            return Ok(MatchConfig::custom(schemes.to_scheme_set().as_array()));
        }
        let mode = match strategy.keyword_matching_mode.as_deref() {
            Some(name) => name.parse::<MatchMode>()?,
            None => MatchMode::Standard,
        };
        Ok(MatchConfig::preset(mode))
    }

    fn salary_expectation(&self) -> SalaryExpectation {
        let values = self.expected_salary.as_deref().unwrap_or_default();
        SalaryExpectation::new(values.first().copied(), values.get(1).copied())
    }
}

/// 一步加载配置文件并生成只读过滤配置
pub fn load_profile(path: impl AsRef<Path>) -> ZhitouResult<FilterProfile> {
    UserSettings::from_path(path)?.to_profile()
}
