//! zhitou-filter-engine 内核错误定义
//! 内核层只有两类失败：薪资文本解析失败、配置不合法。
//! 匹配本身永不失败，薪资解析错误在 SalaryFilter 边界被映射为"排除"。
use thiserror::Error;

use std::num::ParseIntError;

/// 内核核心错误枚举
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    // ===================== 薪资解析错误 =====================
    /// 薪资区间不是 "lo-hi" 两段结构
    #[error("Salary range malformed: expected 2 parts, got {parts} in {text:?}")]
    SalaryRangeShape { text: String, parts: usize },

    /// 薪资区间某一段无法解析为整数
    #[error("Salary number parse failed: {text:?}: {source}")]
    SalaryNumber {
        text: String,
        #[source]
        source: ParseIntError,
    },

    // ===================== 配置错误 =====================
    /// 未知的关键词匹配模式名
    #[error("Unknown keyword matching mode: {0}")]
    UnknownMatchMode(String),

    /// 配置参数不合法（例如期望薪资下限大于上限）
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// 内核层全局Result类型别名
pub type CoreResult<T> = Result<T, CoreError>;
