//! Boss直聘字体反爬解码
//! 页面用私有区码点（U+E030..U+E039）配合自定义字体渲染薪资数字，
//! 解析前必须先还原为ASCII数字。

use rustc_hash::FxHashMap;

/// 默认的私有区码点 -> 数字映射表
pub const DEFAULT_FONT_DIGITS: [(char, char); 10] = [
    ('\u{E030}', '0'),
    ('\u{E031}', '1'),
    ('\u{E032}', '2'),
    ('\u{E033}', '3'),
    ('\u{E034}', '4'),
    ('\u{E035}', '5'),
    ('\u{E036}', '6'),
    ('\u{E037}', '7'),
    ('\u{E038}', '8'),
    ('\u{E039}', '9'),
];

/// 字体数字映射表，构造时注入，运行期只读
#[derive(Debug, Clone)]
pub struct FontDigitTable {
    map: FxHashMap<char, char>,
}

impl Default for FontDigitTable {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_DIGITS)
    }
}

impl FontDigitTable {
    pub fn new(entries: impl IntoIterator<Item = (char, char)>) -> Self {
        Self {
            map: entries.into_iter().collect(),
        }
    }

    /// 表内字符替换为对应数字，其余字符原样保留
    pub fn decode(&self, text: &str) -> String {
        // 快速路径：没有任何需要替换的字符时直接拷贝
        if !text.chars().any(|c| self.map.contains_key(&c)) {
            return text.to_string();
        }
        text.chars()
            .map(|c| self.map.get(&c).copied().unwrap_or(c))
            .collect()
    }

    /// 数字 -> 私有区码点（测试与数据构造用）
    pub fn encode_digit(&self, digit: char) -> Option<char> {
        self.map
            .iter()
            .find_map(|(&glyph, &d)| (d == digit).then_some(glyph))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// 使用默认映射表解码
pub fn decode_digits(text: &str) -> String {
    FontDigitTable::default().decode(text)
}
