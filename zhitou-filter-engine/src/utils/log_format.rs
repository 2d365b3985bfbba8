use std::fmt::{self, Write};

// ======================== 零堆分配的日志预览 ========================
/// 空白字符折叠 + 截断，岗位名/薪资文本写日志时使用
/// 超出 max_len 个字符时以省略号结尾
#[inline(always)]
pub fn preview_compact<'a>(s: &'a str, max_len: usize) -> impl fmt::Display + 'a {
    struct CompactView<'a> {
        source: &'a str,
        max_length: usize,
    }

    impl<'a> fmt::Display for CompactView<'a> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut char_count = 0;
            let mut last_was_whitespace = false;

            for ch in self.source.chars() {
                if char_count >= self.max_length {
                    f.write_str("…")?;
                    break;
                }

                if ch.is_whitespace() {
                    if !last_was_whitespace {
                        f.write_char(' ')?;
                        char_count += 1;
                        last_was_whitespace = true;
                    }
                } else {
                    f.write_char(ch)?;
                    char_count += 1;
                    last_was_whitespace = false;
                }
            }
            Ok(())
        }
    }

    CompactView {
        source: s,
        max_length: max_len,
    }
}

// ======================== 词表日志格式化 ========================
/// 格式：[a, b, ...] (total: N)，最多展示前 MAX_COUNT 项
pub fn preview_list<S: AsRef<str>>(items: &[S]) -> String {
    const MAX_COUNT: usize = 8;
    const MAX_ITEM_LEN: usize = 20;

    if items.is_empty() {
        return "[empty]".to_string();
    }

    let mut result = String::with_capacity(MAX_COUNT * (MAX_ITEM_LEN + 2) + 20);
    result.push('[');
    for (idx, item) in items.iter().take(MAX_COUNT).enumerate() {
        if idx > 0 {
            result.push_str(", ");
        }
        // 写入String不会失败
        let _ = write!(result, "{}", preview_compact(item.as_ref(), MAX_ITEM_LEN));
    }
    if items.len() > MAX_COUNT {
        let _ = write!(result, ", … (total: {})", items.len());
    }
    result.push(']');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_compact() {
        assert_eq!(preview_compact("Java  开发\n工程师", 40).to_string(), "Java 开发 工程师");
        assert_eq!(preview_compact("高级数据分析工程师", 4).to_string(), "高级数据…");
        assert_eq!(preview_compact("运营", 2).to_string(), "运营");
        assert_eq!(preview_compact("", 5).to_string(), "");
    }

    #[test]
    fn test_preview_list() {
        let empty: [&str; 0] = [];
        assert_eq!(preview_list(&empty), "[empty]");
        assert_eq!(preview_list(&["3月前活跃", "半年前活跃"]), "[3月前活跃, 半年前活跃]");
        let many: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        assert_eq!(preview_list(&many), "[0, 1, 2, 3, 4, 5, 6, 7, … (total: 10)]");
    }
}
