//! zhitou-filter 命令行入口
//! 读取用户配置与岗位快照，逐个输出准入判定（JSON），日志写入标准错误
//!
//! 运行命令：
//! cargo run --features cli -- --settings config.json --postings jobs.json --pretty

use clap::Parser;
use env_logger::{Builder, Env, Target};
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use zhitou_filter::{load_postings, load_profile, JobAdmissibilityPipeline, RejectReason};

#[derive(Debug, Parser)]
#[command(name = "zhitou-filter", version, about = "岗位投递准入过滤")]
struct Cli {
    /// 用户配置文件（包含 boss / blacklistConfig 部分）
    #[arg(long)]
    settings: PathBuf,

    /// 岗位快照文件（JobPosting 的 JSON 数组）
    #[arg(long)]
    postings: PathBuf,

    /// 格式化输出
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Serialize)]
struct Verdict<'a> {
    title: &'a str,
    admissible: bool,
    score: f64,
    scheme: u8,
    keyword: Option<&'a str>,
    reject: Option<RejectReason>,
}

fn main() -> Result<(), Box<dyn Error>> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stderr)
        .init();

    let cli = Cli::parse();
    let profile = load_profile(&cli.settings)?;
    let postings = load_postings(&cli.postings)?;

    let pipeline = JobAdmissibilityPipeline::default();
    let evaluations = pipeline.evaluate_all(&postings, &profile);

    let verdicts: Vec<Verdict<'_>> = postings
        .iter()
        .zip(&evaluations)
        .map(|(posting, eval)| Verdict {
            title: &posting.title,
            admissible: eval.admissible,
            score: eval.keyword_result.score(),
            scheme: eval.keyword_result.scheme(),
            keyword: eval.matched_keyword.as_deref(),
            reject: eval.reject,
        })
        .collect();

    let admitted = verdicts.iter().filter(|v| v.admissible).count();
    log::info!("✅ 过滤完成 | 可投递 {}/{}", admitted, verdicts.len());

    let output = if cli.pretty {
        serde_json::to_string_pretty(&verdicts)?
    } else {
        serde_json::to_string(&verdicts)?
    };
    println!("{}", output);
    Ok(())
}
