//! 匹配用的常量词表，构造 KeywordMatcher 时注入

/// 职位词：关键词后紧跟这些词视为"关键词+职位"的组合
pub const DEFAULT_ROLE_SUFFIXES: [&str; 12] = [
    "总监", "经理", "主管", "负责人", "专员", "助理", "专家", "工程师", "运营", "营销", "推广", "策划",
];

/// 明显不相关的岗位类型，命中后只有关键词是岗位主体时才放行
pub const DEFAULT_EXCLUDE_KEYWORDS: [&str; 11] = [
    "总厨", "厨师", "服务员", "保安", "保洁", "司机", "快递", "外卖", "收银", "理货", "仓管",
];

/// 关键词匹配词表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTables {
    pub exclude_keywords: Vec<String>,
    pub role_suffixes: Vec<String>,
}

impl Default for MatchTables {
    fn default() -> Self {
        Self {
            exclude_keywords: DEFAULT_EXCLUDE_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            role_suffixes: DEFAULT_ROLE_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MatchTables {
    pub fn new(exclude_keywords: Vec<String>, role_suffixes: Vec<String>) -> Self {
        Self {
            exclude_keywords,
            role_suffixes,
        }
    }

    /// 岗位名中命中的第一个排除词
    pub fn find_excluded<'a>(&'a self, title: &str) -> Option<&'a str> {
        self.exclude_keywords
            .iter()
            .map(String::as_str)
            .find(|word| !word.is_empty() && title.contains(word))
    }
}
