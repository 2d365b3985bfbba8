//! 全局错误类型定义
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use thiserror::Error;
use zhitou_filter_engine::CoreError;

#[derive(Error, Debug)]
pub enum ZhitouError {
    // 过滤内核错误（配置不合法、匹配模式未知等）
    #[error("过滤内核错误：{0}")]
    CoreError(#[from] CoreError),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type ZhitouResult<T> = Result<T, ZhitouError>;
