//! 职位/公司黑名单过滤
use serde::{Deserialize, Serialize};

/// 黑名单配置，关闭或列表为空时不排除任何岗位
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlacklistConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub position_blacklist: Vec<String>,
    #[serde(default)]
    pub company_blacklist: Vec<String>,
}

impl BlacklistConfig {
    pub fn new(position_blacklist: Vec<String>, company_blacklist: Vec<String>) -> Self {
        Self {
            enabled: true,
            position_blacklist,
            company_blacklist,
        }
    }

    /// 岗位名命中的职位黑名单词
    pub fn blocked_position(&self, title: &str) -> Option<&str> {
        if !self.enabled {
            return None;
        }
        first_contained(&self.position_blacklist, title)
    }

    /// 公司名命中的公司黑名单词，公司名缺失时不拦截
    pub fn blocked_company(&self, company: Option<&str>) -> Option<&str> {
        if !self.enabled {
            return None;
        }
        first_contained(&self.company_blacklist, company?)
    }
}

fn first_contained<'a>(words: &'a [String], text: &str) -> Option<&'a str> {
    words
        .iter()
        .map(String::as_str)
        .find(|w| !w.is_empty() && text.contains(w))
}
