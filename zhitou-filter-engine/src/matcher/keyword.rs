//! 关键词多方案匹配器
//! 核心流程：
//! 1. 排除词守卫（始终生效，与模式无关）
//! 2. 按方案编号顺序尝试已启用的方案，第一个命中的方案胜出
//! 3. 方案4仅用于长关键词（≥3字），方案5仅用于短关键词（<3字）

use crate::codec::cjk::{boundary_after, boundary_before};
use crate::core::{KeywordMatch, MatchScheme, MatchingResult};
use crate::utils::log_format::preview_compact;

use super::schemes::{MatchConfig, SchemeSet};
use super::tables::MatchTables;

/// 长关键词的最小字符数
const LONG_KEYWORD_CHARS: usize = 3;
/// 方案4拆分后核心词的最小字符数
const MIN_CORE_CHARS: usize = 2;
/// 日志中岗位名的最大预览长度
const LOG_PREVIEW_CHARS: usize = 40;

/// 关键词匹配器，持有只读词表，可在多线程间共享
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher {
    tables: MatchTables,
}

impl KeywordMatcher {
    pub fn new(tables: MatchTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &MatchTables {
        &self.tables
    }

    /// 按配置匹配（内部先解析方案集合）
    pub fn match_with_config(&self, title: &str, keyword: &str, config: &MatchConfig) -> MatchingResult {
        self.match_keyword(title, keyword, &config.resolve())
    }

    /// 检查关键词是否匹配岗位名，返回匹配度与命中方案
    pub fn match_keyword(&self, title: &str, keyword: &str, schemes: &SchemeSet) -> MatchingResult {
        if title.is_empty() || keyword.is_empty() {
            log::debug!("[keyword] empty input, title={:?} keyword={:?}", title, keyword);
            return MatchingResult::unmatched();
        }

        if let Some(excluded) = self.tables.find_excluded(title) {
            return self.guard_excluded(title, keyword, excluded);
        }

        let is_long = keyword.chars().count() >= LONG_KEYWORD_CHARS;
        for scheme in schemes.enabled() {
            let hit = match scheme {
                MatchScheme::Prefix => title.starts_with(keyword),
                MatchScheme::SuffixCombination => self.followed_by_role(title, keyword).is_some(),
                MatchScheme::BoundedSubstring => is_bounded_substring(title, keyword),
                MatchScheme::SplitMatch => is_long && self.split_match(title, keyword).is_some(),
                MatchScheme::ShortKeywordSuffix => {
                    !is_long && self.short_keyword_suffix(title, keyword).is_some()
                }
            };
            if hit {
                log::debug!(
                    "[keyword] ✓ {} title='{}' keyword='{}'",
                    scheme,
                    preview_compact(title, LOG_PREVIEW_CHARS),
                    keyword
                );
                return MatchingResult::by(scheme);
            }
        }

        log::debug!(
            "[keyword] ✗ no scheme matched, title='{}' keyword='{}'",
            preview_compact(title, LOG_PREVIEW_CHARS),
            keyword
        );
        MatchingResult::unmatched()
    }

    /// 依次尝试多个关键词，第一个命中的关键词胜出
    pub fn match_any<S: AsRef<str>>(&self, title: &str, keywords: &[S], schemes: &SchemeSet) -> KeywordMatch {
        for keyword in keywords.iter().map(AsRef::as_ref) {
            let result = self.match_keyword(title, keyword, schemes);
            if result.is_matched() {
                return KeywordMatch {
                    keyword: Some(keyword.to_string()),
                    result,
                };
            }
        }
        KeywordMatch::none()
    }

    // 岗位名含排除词：只有关键词是岗位主体（开头或关键词+职位词）时才放行
    fn guard_excluded(&self, title: &str, keyword: &str, excluded: &str) -> MatchingResult {
        if title.starts_with(keyword) || self.followed_by_role(title, keyword).is_some() {
            log::debug!(
                "[keyword] ✓ main part matched despite excluded word '{}', title='{}' keyword='{}'",
                excluded,
                preview_compact(title, LOG_PREVIEW_CHARS),
                keyword
            );
            return MatchingResult::by(MatchScheme::Prefix);
        }
        log::debug!(
            "[keyword] ✗ unrelated job type '{}', title='{}' keyword='{}'",
            excluded,
            preview_compact(title, LOG_PREVIEW_CHARS),
            keyword
        );
        MatchingResult::unmatched()
    }

    /// 方案2：岗位名包含 关键词+职位词，返回命中的职位词
    fn followed_by_role(&self, title: &str, keyword: &str) -> Option<&str> {
        self.role_suffixes()
            .find(|suffix| contains_joined(title, keyword, suffix))
    }

    /// 方案4：关键词以职位词结尾，拆出的核心词在岗位名中前侧为词边界，且其后出现该职位词
    fn split_match<'k>(&self, title: &str, keyword: &'k str) -> Option<(&'k str, &str)> {
        for suffix in self.role_suffixes() {
            let Some(core) = keyword.strip_suffix(suffix) else {
                continue;
            };
            if core.chars().count() < MIN_CORE_CHARS {
                continue;
            }
            let hit = occurrences(title, core).any(|idx| {
                boundary_before(title, idx) && title[idx + core.len()..].contains(suffix)
            });
            if hit {
                log::debug!("[keyword] split keyword='{}' core='{}' suffix='{}'", keyword, core, suffix);
                return Some((core, suffix));
            }
        }
        None
    }

    /// 方案5：短关键词+职位词组合出现，且组合前侧为词边界
    fn short_keyword_suffix(&self, title: &str, keyword: &str) -> Option<&str> {
        self.role_suffixes().find(|suffix| {
            let combined = format!("{keyword}{suffix}");
            let hit = occurrences(title, &combined).any(|idx| boundary_before(title, idx));
            hit
        })
    }

    fn role_suffixes(&self) -> impl Iterator<Item = &str> + '_ {
        self.tables
            .role_suffixes
            .iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// 方案3：关键词某次出现的前后都不是汉字
fn is_bounded_substring(title: &str, keyword: &str) -> bool {
    occurrences(title, keyword)
        .any(|idx| boundary_before(title, idx) && boundary_after(title, idx + keyword.len()))
}

/// `title` 包含 `head` 紧跟 `tail`（不分配新字符串）
fn contains_joined(title: &str, head: &str, tail: &str) -> bool {
    occurrences(title, head).any(|idx| title[idx + head.len()..].starts_with(tail))
}

/// 子串所有出现位置（字节下标，允许重叠）
fn occurrences<'a>(haystack: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
    let step = needle.chars().next().map_or(1, char::len_utf8);
    let mut from = 0;
    std::iter::from_fn(move || {
        if needle.is_empty() || from > haystack.len() {
            return None;
        }
        let idx = from + haystack[from..].find(needle)?;
        from = idx + step;
        Some(idx)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchMode;

    fn matcher() -> KeywordMatcher {
        KeywordMatcher::default()
    }

    fn run(title: &str, keyword: &str, schemes: SchemeSet) -> (u8, f64) {
        let r = matcher().match_keyword(title, keyword, &schemes);
        (r.scheme(), r.score())
    }

    #[test]
    fn test_empty_inputs() {
        for (title, keyword) in [("", "运营"), ("运营专员", ""), ("", "")] {
            assert_eq!(run(title, keyword, SchemeSet::FLEXIBLE), (0, 0.0));
        }
    }

    #[test]
    fn test_standard_mode_table() {
        let cases: [(&str, &str, (u8, f64)); 10] = [
            ("Java开发工程师", "Java开发", (1, 1.0)),
            ("高级Java开发工程师", "Java开发", (2, 0.8)),
            ("高级 Java开发 岗", "Java开发", (3, 0.7)),
            // 右侧紧跟汉字
            ("高级 Java开发岗", "Java开发", (0, 0.0)),
            ("资深Java开发", "Java开发", (0, 0.0)),
            ("产品部门经理", "产品经理", (0, 0.0)),
            ("AI工程师", "AI", (1, 1.0)),
            ("资深AI工程师", "AI", (2, 0.8)),
            ("运维 / AI 平台", "AI", (3, 0.7)),
            ("新媒体编辑", "媒体", (0, 0.0)),
        ];
        for (title, keyword, expected) in cases {
            assert_eq!(run(title, keyword, SchemeSet::STANDARD), expected, "{title} / {keyword}");
        }
    }

    #[test]
    fn test_strict_mode_only_prefix() {
        assert_eq!(run("Java开发工程师", "Java开发", SchemeSet::STRICT), (1, 1.0));
        assert_eq!(run("高级Java开发工程师", "Java开发", SchemeSet::STRICT), (0, 0.0));
        assert_eq!(run("运维 / AI 平台", "AI", SchemeSet::STRICT), (0, 0.0));
    }

    #[test]
    fn test_split_match_long_keyword() {
        assert_eq!(run("产品部门经理", "产品经理", SchemeSet::FLEXIBLE), (4, 0.6));
        assert_eq!(run("(数据)分析平台工程师", "数据分析工程师", SchemeSet::FLEXIBLE), (0, 0.0));
        assert_eq!(run("大数据分析与建模工程师", "数据分析工程师", SchemeSet::FLEXIBLE), (0, 0.0));
        assert_eq!(run("数据分析与建模工程师", "数据分析工程师", SchemeSet::FLEXIBLE), (4, 0.6));
        // 职位词只出现在核心词之前
        assert_eq!(run("经理助理 产品", "产品经理", SchemeSet::FLEXIBLE), (0, 0.0));
        // 核心词不足2字
        assert_eq!(run("A组经理", "A经理", SchemeSet::FLEXIBLE), (0, 0.0));
    }

    #[test]
    fn test_short_keyword_suffix() {
        let only5 = SchemeSet::new([false, false, false, false, true]);
        assert_eq!(run("【AI工程师】", "AI", only5), (5, 0.6));
        assert_eq!(run("资深AI工程师", "AI", only5), (0, 0.0));
        // 方案5不适用于长关键词
        assert_eq!(run("【Java工程师】", "Java", only5), (0, 0.0));
    }

    #[test]
    fn test_first_enabled_scheme_wins() {
        // 同时满足方案1/2/3时方案1胜出；关闭方案1后方案2胜出
        assert_eq!(run("运营专员", "运营", SchemeSet::FLEXIBLE), (1, 1.0));
        assert_eq!(run("运营专员", "运营", SchemeSet::new([false, true, true, true, true])), (2, 0.8));
        let only3 = SchemeSet::new([false, false, true, false, false]);
        assert_eq!(run("数据数据分析 数据", "数据", only3), (3, 0.7));
    }

    #[test]
    fn test_exclusion_guard() {
        let cases: [(&str, &str, (u8, f64)); 6] = [
            ("行政厨师", "行政", (1, 1.0)),
            ("门店收银运营专员", "运营", (1, 1.0)),
            ("酒店厨师长", "酒店管理", (0, 0.0)),
            ("餐厅服务员", "运营", (0, 0.0)),
            ("快递 运营", "运营", (0, 0.0)),
            ("司机", "司机", (1, 1.0)),
        ];
        for mode in [MatchMode::Strict, MatchMode::Standard, MatchMode::Flexible] {
            let schemes = SchemeSet::for_mode(mode);
            for (title, keyword, expected) in cases {
                assert_eq!(run(title, keyword, schemes), expected, "{mode}: {title} / {keyword}");
            }
        }
        // 即使全部方案关闭，守卫仍然生效
        let none = SchemeSet::new([false; 5]);
        assert_eq!(run("行政厨师", "行政", none), (1, 1.0));
        assert_eq!(run("厨师助理招聘", "招聘", none), (0, 0.0));
    }

    #[test]
    fn test_long_keyword_prefix_always_scheme1() {
        let titles = ["产品经理（B端）", "数据分析师-实习", "前端开发工程师"];
        let keywords = ["产品经理", "数据分析", "前端开发"];
        for (title, keyword) in titles.iter().zip(keywords) {
            for mode in [MatchMode::Strict, MatchMode::Standard, MatchMode::Flexible] {
                let r = matcher().match_with_config(title, keyword, &MatchConfig::preset(mode));
                assert_eq!((r.scheme(), r.score()), (1, 1.0));
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let m = matcher();
        let a = m.match_keyword("高级Java开发工程师", "Java开发", &SchemeSet::FLEXIBLE);
        let b = m.match_keyword("高级Java开发工程师", "Java开发", &SchemeSet::FLEXIBLE);
        assert_eq!(a, b);
        assert_eq!(a.score().to_bits(), b.score().to_bits());
    }

    #[test]
    fn test_match_any_first_keyword_wins() {
        let m = matcher();
        let keywords = ["测试", "运营", "运营专员"];
        let found = m.match_any("运营专员", &keywords, &SchemeSet::STANDARD);
        assert_eq!(found.keyword.as_deref(), Some("运营"));
        assert_eq!(found.result.scheme(), 1);

        let empty: [&str; 0] = [];
        assert_eq!(m.match_any("运营专员", &empty, &SchemeSet::STANDARD), KeywordMatch::none());
        assert!(!m.match_any("财务会计", &keywords, &SchemeSet::FLEXIBLE).result.is_matched());
    }

    #[test]
    fn test_injected_tables() {
        let m = KeywordMatcher::new(MatchTables::new(vec!["实习".into()], vec!["岗".into()]));
        assert_eq!(m.match_keyword("运营实习生", "运营", &SchemeSet::STANDARD).scheme(), 1);
        assert!(!m.match_keyword("市场运营实习生", "运营", &SchemeSet::FLEXIBLE).is_matched());
        // 默认排除词不再生效
        assert_eq!(m.match_keyword("厨师 运营", "运营", &SchemeSet::STANDARD).scheme(), 3);
    }

    #[test]
    fn test_occurrences_overlap() {
        let found: Vec<usize> = occurrences("aaaa", "aa").collect();
        assert_eq!(found, vec![0, 1, 2]);
        let cjk: Vec<usize> = occurrences("数据数据", "数据").collect();
        assert_eq!(cjk, vec![0, 6]);
    }
}
