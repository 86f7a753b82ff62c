//! 种子数据夹具生成 CLI
//!
//! 不带参数运行时按配置生成全部预定义夹具。

use anyhow::Context;
use clap::Parser;
use fixture_generator::cli::{Cli, CommandRunner, Commands};
use seed_shared::config::AppConfig;
use seed_shared::observability::{self, ObservabilityConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.config_dir.as_deref() {
        Some(dir) => AppConfig::load_from(dir),
        None => AppConfig::load(),
    }
    .context("加载配置失败")?;

    // 初始化 tracing 日志
    // 优先使用环境变量 RUST_LOG，其次是命令行参数，最后是配置文件
    observability::init(
        &ObservabilityConfig::from_app_config("seed-gen", &config)
            .with_log_level(cli.log_level.as_deref()),
    )?;

    let runner = CommandRunner::new(config);

    match cli.command.unwrap_or_default() {
        Commands::Generate(args) => {
            runner.run_generate(&args)?;
        }
        Commands::List => runner.run_list()?,
        Commands::Show { fixture, format } => runner.run_show(&fixture, format)?,
    }

    Ok(())
}
