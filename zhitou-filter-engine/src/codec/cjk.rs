//! 中文字符判断（仅用于关键词词边界检查，不是完整的Unicode文字判定）

/// CJK统一汉字基本区（U+4E00..=U+9FA5）
#[inline(always)]
pub fn is_chinese_char(c: char) -> bool {
    matches!(c as u32, 0x4E00..=0x9FA5)
}

/// 中文判断扩展，便于在迭代器链中直接调用
pub trait CharCjkExt {
    fn is_chinese(&self) -> bool;
}

impl CharCjkExt for char {
    #[inline(always)]
    fn is_chinese(&self) -> bool {
        is_chinese_char(*self)
    }
}

/// 字节下标 `idx` 之前的字符不是汉字（或者 idx 位于开头）
#[inline]
pub(crate) fn boundary_before(text: &str, idx: usize) -> bool {
    text[..idx].chars().next_back().map_or(true, |c| !c.is_chinese())
}

/// 字节下标 `idx` 处的字符不是汉字（或者 idx 位于末尾）
#[inline]
pub(crate) fn boundary_after(text: &str, idx: usize) -> bool {
    text[idx..].chars().next().map_or(true, |c| !c.is_chinese())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chinese_chars() {
        for c in ['中', '文', '测', '试', '字', '\u{4E00}', '\u{9FA5}'] {
            assert!(is_chinese_char(c), "{c} should be chinese");
        }
    }

    #[test]
    fn test_non_chinese_chars() {
        // 基本区之外的扩展汉字、全角标点都不算
        for c in ['A', 'a', '1', '0', '!', '@', '·', '（', '\u{9FA6}', '\u{3400}'] {
            assert!(!is_chinese_char(c), "{c:?} should not be chinese");
        }
    }

    #[test]
    fn test_boundaries() {
        let title = "高级Java开发";
        let idx = title.find("Java").unwrap();
        assert!(!boundary_before(title, idx));
        assert!(!boundary_after(title, idx + "Java".len()));
        assert!(boundary_before(title, 0));
        assert!(boundary_after(title, title.len()));
        assert!(boundary_before("(运营)", "(".len()));
    }
}
