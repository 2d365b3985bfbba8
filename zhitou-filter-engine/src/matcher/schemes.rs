use serde::{Deserialize, Serialize};

use crate::core::{MatchMode, MatchScheme};

/// 解析后的方案开关（方案1..=5）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemeSet([bool; 5]);

impl SchemeSet {
    pub const STRICT: SchemeSet = SchemeSet([true, false, false, false, false]);
    pub const STANDARD: SchemeSet = SchemeSet([true, true, true, false, false]);
    pub const FLEXIBLE: SchemeSet = SchemeSet([true, true, true, true, true]);

    pub const fn new(enabled: [bool; 5]) -> Self {
        Self(enabled)
    }

    /// 预设模式对应的方案集合；Custom 无预设，按标准模式处理
    pub fn for_mode(mode: MatchMode) -> Self {
        match mode {
            MatchMode::Strict => Self::STRICT,
            MatchMode::Flexible => Self::FLEXIBLE,
            MatchMode::Standard | MatchMode::Custom => Self::STANDARD,
        }
    }

    #[inline(always)]
    pub fn is_enabled(&self, scheme: MatchScheme) -> bool {
        self.0[scheme.index()]
    }

    pub fn enabled(&self) -> impl Iterator<Item = MatchScheme> + '_ {
        MatchScheme::ALL.into_iter().filter(|s| self.is_enabled(*s))
    }

    pub fn as_array(&self) -> [bool; 5] {
        self.0
    }
}

impl Default for SchemeSet {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// 关键词匹配配置
/// 仅 Custom 模式使用 scheme_enabled，其余模式由 mode 决定
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchConfig {
    #[serde(default)]
    pub mode: MatchMode,
    #[serde(default)]
    pub scheme_enabled: SchemeSet,
}

impl MatchConfig {
    pub fn preset(mode: MatchMode) -> Self {
        Self {
            mode,
            scheme_enabled: SchemeSet::for_mode(mode),
        }
    }

    pub fn custom(enabled: [bool; 5]) -> Self {
        Self {
            mode: MatchMode::Custom,
            scheme_enabled: SchemeSet::new(enabled),
        }
    }

    /// 一次性解析为方案集合，匹配过程中不再重复推导
    pub fn resolve(&self) -> SchemeSet {
        match self.mode {
            MatchMode::Custom => self.scheme_enabled,
            mode => SchemeSet::for_mode(mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_resolution() {
        let cases = [
            (MatchMode::Strict, [true, false, false, false, false]),
            (MatchMode::Standard, [true, true, true, false, false]),
            (MatchMode::Flexible, [true, true, true, true, true]),
        ];
        for (mode, expected) in cases {
            assert_eq!(MatchConfig::preset(mode).resolve().as_array(), expected, "{mode}");
        }
    }

    #[test]
    fn test_custom_uses_caller_flags() {
        let cfg = MatchConfig::custom([false, false, true, false, true]);
        let enabled: Vec<u8> = cfg.resolve().enabled().map(MatchScheme::number).collect();
        assert_eq!(enabled, vec![3, 5]);
    }

    #[test]
    fn test_preset_ignores_stored_flags() {
        let cfg = MatchConfig {
            mode: MatchMode::Strict,
            scheme_enabled: SchemeSet::FLEXIBLE,
        };
        assert_eq!(cfg.resolve(), SchemeSet::STRICT);
    }
}
