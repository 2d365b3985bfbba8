//! 岗位快照读取
//! 支持 JSON 数组形式的岗位列表，字段与 JobPosting 的 camelCase 序列化一致

use std::path::Path;
use zhitou_filter_engine::JobPosting;

use crate::error::{ZhitouError, ZhitouResult};

pub fn postings_from_json_str(json: &str) -> ZhitouResult<Vec<JobPosting>> {
    let postings: Vec<JobPosting> = serde_json::from_str(json)?;
    if let Some(idx) = postings.iter().position(|p| p.title.trim().is_empty()) {
        return Err(ZhitouError::InvalidInput(format!("第{}个岗位缺少职位名称", idx + 1)));
    }
    Ok(postings)
}

pub fn load_postings(path: impl AsRef<Path>) -> ZhitouResult<Vec<JobPosting>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let postings = postings_from_json_str(&content)?;
    log::info!("Loaded {} postings from {}", postings.len(), path.display());
    Ok(postings)
}
