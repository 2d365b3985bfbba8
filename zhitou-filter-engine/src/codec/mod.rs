//! 文本编解码：Boss直聘字体反爬数字解码 + 中文字符边界判断
pub mod cjk;
pub mod font_digits;

pub use cjk::{is_chinese_char, CharCjkExt};
pub use font_digits::{decode_digits, FontDigitTable, DEFAULT_FONT_DIGITS};
