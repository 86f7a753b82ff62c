//! 命令执行器
//!
//! 负责执行各 CLI 子命令的具体逻辑。
//! 将命令行参数与配置合并后交给夹具生成器。

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use seed_shared::config::AppConfig;

use super::commands::{GenerateArgs, SpecFormat};
use crate::fixtures::{FixtureSpec, PredefinedFixtures};
use crate::generators::{FixtureGenerator, GenerationReport};

/// 命令执行器
///
/// 持有加载好的应用配置，作为 CLI 与生成逻辑之间的桥梁。
pub struct CommandRunner {
    config: AppConfig,
}

impl CommandRunner {
    /// 创建命令执行器
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// 执行 generate 命令
    ///
    /// 所有夹具共用同一个随机源，按顺序依次生成。
    /// 未指定种子时随机选取一个并记录到日志，便于复现。
    pub fn run_generate(&self, args: &GenerateArgs) -> Result<Vec<GenerationReport>> {
        let specs = self.resolve_specs(args)?;
        let config = self.merged_config(args);
        let seed = config.seed.unwrap_or_else(rand::random);

        info!(
            seed,
            fixtures = specs.len(),
            output_dir = %config.output_dir.display(),
            "开始生成夹具"
        );

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut reports = Vec::with_capacity(specs.len());

        for mut spec in specs {
            if let Some(count) = args.count {
                spec = spec.with_record_count(count);
            }
            spec.escape_strings |= config.escape_strings;

            let path = config.output_path(spec.output_file_name());
            let name = spec.name.clone();
            let generator =
                FixtureGenerator::new(spec).with_context(|| format!("夹具定义无效: {}", name))?;

            let report = generator
                .write_to(&path, &mut rng)
                .with_context(|| format!("生成夹具失败: {}", name))?;
            reports.push(report);
        }

        print_summary(seed, &reports);
        Ok(reports)
    }

    /// 执行 list 命令
    pub fn run_list(&self) -> Result<()> {
        println!("\n可用的预定义夹具:");
        println!("{}", "-".repeat(60));
        for spec in PredefinedFixtures::all() {
            println!("  {} - {}", spec.name, spec.description);
        }
        println!("{}", "-".repeat(60));
        println!("\n使用示例: seed-gen generate -f bookings");
        Ok(())
    }

    /// 执行 show 命令
    pub fn run_show(&self, name: &str, format: SpecFormat) -> Result<()> {
        let spec = PredefinedFixtures::get(name).ok_or_else(|| {
            anyhow::anyhow!("未找到夹具 '{}'\n使用 'seed-gen list' 查看所有可用夹具", name)
        })?;

        println!("{}", render_spec(&spec, format)?);
        Ok(())
    }

    // ========================================================================
    // 辅助方法
    // ========================================================================

    /// 命令行参数覆盖配置文件中的同名项
    fn merged_config(&self, args: &GenerateArgs) -> AppConfig {
        let mut config = self.config.clone();
        if let Some(ref dir) = args.output_dir {
            config.output_dir = PathBuf::from(dir);
        }
        if args.seed.is_some() {
            config.seed = args.seed;
        }
        config.escape_strings |= args.escape_strings;
        config
    }

        /// 确定要生成的夹具：优先从文件加载，否则按名称选择预定义夹具
    fn resolve_specs(&self, args: &GenerateArgs) -> Result<Vec<FixtureSpec>> {
        if let Some(ref path) = args.spec_file {
            return Ok(vec![load_spec_from_file(path)?]);
        }

        if args.fixture == "all" {
            return Ok(PredefinedFixtures::all());
        }

        match PredefinedFixtures::get(&args.fixture) {
            Some(spec) => Ok(vec![spec]),
            None => bail!(
                "未找到夹具 '{}'\n可用的夹具: all, {}",
                args.fixture,
                PredefinedFixtures::names().join(", ")
            ),
        }
    }
}

// ============================================================================
// 辅助函数
// ============================================================================

/// 从文件加载夹具定义
///
/// 根据文件扩展名选择解析方式：.yaml/.yml 为 YAML，其余按 JSON 解析。
pub fn load_spec_from_file(path: &str) -> Result<FixtureSpec> {
    let content =
        fs::read_to_string(path).with_context(|| format!("读取夹具文件失败: {}", path))?;

    let spec = if path.ends_with(".yaml") || path.ends_with(".yml") {
        FixtureSpec::from_yaml(&content).with_context(|| format!("解析 YAML 夹具失败: {}", path))?
    } else {
        FixtureSpec::from_json(&content).with_context(|| format!("解析 JSON 夹具失败: {}", path))?
    };

    debug!(fixture = %spec.name, path, "从文件加载夹具");
    Ok(spec)
}

fn render_spec(spec: &FixtureSpec, format: SpecFormat) -> Result<String> {
    let rendered = match format {
        SpecFormat::Yaml => spec.to_yaml()?,
        SpecFormat::Json => spec.to_json()?,
    };
    Ok(rendered)
}

/// 打印生成汇总
fn print_summary(seed: u64, reports: &[GenerationReport]) {
    println!("\n夹具生成完成 (seed = {}):", seed);
    println!("{}", "-".repeat(90));
    println!(
        "{:<20} {:<18} {:>8} {:>8} {:>8}  {}",
        "夹具", "表", "请求", "写入", "去重", "路径"
    );
    for r in reports {
        println!(
            "{:<20} {:<18} {:>8} {:>8} {:>8}  {}",
            r.fixture,
            r.table,
            r.requested,
            r.written,
            r.duplicates_dropped,
            r.path.display()
        );
    }
    println!("{}", "-".repeat(90));
}

// ============================================================================
// 单元测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn runner_for(dir: &std::path::Path) -> CommandRunner {
        CommandRunner::new(AppConfig {
            output_dir: dir.to_path_buf(),
            ..Default::default()
        })
    }

    #[test]
    fn test_resolve_all_fixtures() {
        let runner = CommandRunner::new(AppConfig::default());

        let specs = runner.resolve_specs(&GenerateArgs::default()).unwrap();
        assert_eq!(specs.len(), 4);
    }

    #[test]
    fn test_resolve_single_fixture() {
        let runner = CommandRunner::new(AppConfig::default());
        let args = GenerateArgs {
            fixture: "event_attendees".to_string(),
            ..Default::default()
        };

        let specs = runner.resolve_specs(&args).unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].table, "EventAttendees");
    }

    #[test]
    fn test_resolve_unknown_fixture() {
        let runner = CommandRunner::new(AppConfig::default());
        let args = GenerateArgs {
            fixture: "tickets".to_string(),
            ..Default::default()
        };

        assert!(runner.resolve_specs(&args).is_err());
    }

    #[test]
    fn test_run_generate_with_count_override() {
        let dir = tempfile::tempdir().unwrap();
        let runner = runner_for(dir.path());
        let args = GenerateArgs {
            fixture: "event_attendees".to_string(),
            count: Some(7),
            seed: Some(1),
            ..Default::default()
        };

        let reports = runner.run_generate(&args).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].written, 7);
        let content = fs::read_to_string(dir.path().join("event_attendees.sql")).unwrap();
        assert_eq!(content.lines().count(), 7);
    }

    #[test]
    fn test_config_seed_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let runner = CommandRunner::new(AppConfig {
            output_dir: dir.path().to_path_buf(),
            seed: Some(2024),
            ..Default::default()
        });
        let args = GenerateArgs {
            fixture: "bookings".to_string(),
            ..Default::default()
        };

        runner.run_generate(&args).unwrap();
        let first = fs::read_to_string(dir.path().join("bookings.sql")).unwrap();
        runner.run_generate(&args).unwrap();
        let second = fs::read_to_string(dir.path().join("bookings.sql")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_cli_arguments_override_config() {
        let runner = CommandRunner::new(AppConfig {
            output_dir: PathBuf::from("/from/config"),
            seed: Some(1),
            ..Default::default()
        });

        let merged = runner.merged_config(&GenerateArgs::default());
        assert_eq!(merged.output_dir, PathBuf::from("/from/config"));
        assert_eq!(merged.seed, Some(1));
        assert!(!merged.escape_strings);

        let args = GenerateArgs {
            output_dir: Some("/from/cli".to_string()),
            seed: Some(9),
            escape_strings: true,
            ..Default::default()
        };
        let merged = runner.merged_config(&args);
        assert_eq!(
            merged.output_path("bookings.sql"),
            PathBuf::from("/from/cli/bookings.sql")
        );
        assert_eq!(merged.seed, Some(9));
        assert!(merged.escape_strings);
    }

    #[test]
    fn test_load_spec_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tags.yml");
        fs::write(
            &path,
            "name: tags\ntable: Tags\nrecord_count: 2\nfields:\n  - column: Label\n    kind: choice\n    values: [a, b]\n",
        )
        .unwrap();

        let spec = load_spec_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(spec.name, "tags");
        assert_eq!(spec.record_count, 2);
    }

    #[test]
    fn test_load_spec_from_missing_file() {
        assert!(load_spec_from_file("/definitely/not/here.json").is_err());
    }

    #[test]
    fn test_render_spec_formats() {
        let spec = PredefinedFixtures::bookings();

        let yaml = render_spec(&spec, SpecFormat::Yaml).unwrap();
        assert!(yaml.contains("table: Bookings"));

        let json = render_spec(&spec, SpecFormat::Json).unwrap();
        assert_eq!(FixtureSpec::from_json(&json).unwrap(), spec);
    }
}
