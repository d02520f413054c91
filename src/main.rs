// 成语搜索命令行
//
// 用法: idiom-search [配置文件路径] [--json]
// 不指定配置文件时使用默认配置目录下的 config.json

use std::path::PathBuf;

use anyhow::Result;
use idiom_search_lib::{SearchConfig, SearchPipeline};
use tracing::Level;

fn main() -> Result<()> {
    let mut config_path: Option<PathBuf> = None;
    let mut output_json = false;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            output_json = true;
        } else if config_path.is_none() {
            config_path = Some(PathBuf::from(arg));
        } else {
            anyhow::bail!("无法识别的参数: {}", arg);
        }
    }

    let config = match &config_path {
        Some(path) => SearchConfig::load_from(path)?,
        None => SearchConfig::load()?,
    };

    // 初始化日志（调试模式输出被丢弃的成语和限制）
    let level = if config.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let pipeline = SearchPipeline::new(config)?;
    let outcome = pipeline.run_from_file()?;

    if output_json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", pipeline.render(&outcome));
    }

    Ok(())
}
