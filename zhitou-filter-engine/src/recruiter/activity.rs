use serde::{Deserialize, Serialize};

use crate::utils::log_format::preview_list;

/// 不活跃HR的判定配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadStatusConfig {
    #[serde(default)]
    pub enabled: bool,
    /// 视为不活跃的活跃时间文案，如 "3月前活跃"、"半年前活跃"
    #[serde(default)]
    pub phrases: Vec<String>,
}

impl DeadStatusConfig {
    pub fn new(enabled: bool, phrases: Vec<String>) -> Self {
        Self { enabled, phrases }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    /// 关闭或未配置任何文案时永不排除
    pub fn is_active(&self) -> bool {
        self.enabled && self.phrases.iter().any(|p| !p.is_empty())
    }
}

/// HR活跃度过滤器，只读配置，无内部状态
#[derive(Debug, Clone, Copy, Default)]
pub struct RecruiterActivityFilter;

impl RecruiterActivityFilter {
    /// true = HR不活跃，应跳过该岗位
    pub fn is_dead_recruiter(&self, activity_text: Option<&str>, config: &DeadStatusConfig) -> bool {
        if !config.enabled {
            return false;
        }
        let Some(text) = activity_text else {
            log::debug!("[recruiter] activity text missing, delivering by default");
            return false;
        };
        if config.phrases.is_empty() {
            return false;
        }

        // 空文案会匹配任何文本，跳过
        match config.phrases.iter().find(|p| !p.is_empty() && text.contains(p.as_str())) {
            Some(phrase) => {
                log::debug!("[recruiter] dead status '{}' found in '{}'", phrase, text);
                true
            }
            None => {
                log::trace!(
                    "[recruiter] '{}' matches none of {}",
                    text,
                    preview_list(&config.phrases)
                );
                false
            }
        }
    }
}

/// 默认过滤器判定
pub fn is_dead_recruiter(activity_text: Option<&str>, config: &DeadStatusConfig) -> bool {
    RecruiterActivityFilter.is_dead_recruiter(activity_text, config)
}

/// 拆分 "姓名 活跃状态" 标签：首段为姓名，其余以单个空格拼接为活跃状态
pub fn split_boss_name(raw: &str) -> (String, String) {
    let mut parts = raw.split_whitespace();
    let name = parts.next().unwrap_or_default().to_string();
    let activity = parts.collect::<Vec<_>>().join(" ");
    (name, activity)
}

/// 拆分 "公司 · 职位" 标签：首段为公司名，第二段为职位名（缺失时为空）
pub fn split_boss_title(raw: &str) -> (String, String) {
    let mut parts = raw.trim().split(" · ");
    let company = parts.next().unwrap_or_default().to_string();
    let title = parts.next().unwrap_or_default().to_string();
    (company, title)
}
