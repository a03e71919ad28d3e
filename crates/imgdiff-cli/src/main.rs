use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use imgdiff_core::{build_rows, generate_and_write, resolve_fragments, Endpoints, ReportOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "imgdiff", version, about = "对比两个图片处理端点的输出，生成 HTML 对比页")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// 端点与片段来源（各子命令共用）
#[derive(Args, Debug)]
struct Source {
    /// 端点 A 的基址（未给出时读取环境变量 A，再退回默认演示 bucket）
    #[arg(long, env = "A")]
    a: Option<String>,

    /// 端点 B 的基址（必需；未给出时读取环境变量 B）
    #[arg(long, env = "B")]
    b: Option<String>,

    /// 片段文件路径（TOML）；默认使用内置列表
    #[arg(long)]
    fragments: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 生成对比页 index.html
    Generate {
        #[command(flatten)]
        source: Source,

        /// 输出文件（已存在则覆盖）
        #[arg(long, default_value = imgdiff_core::DEFAULT_OUTPUT)]
        output: PathBuf,
    },
    /// 列出将要生成的行
    List {
        #[command(flatten)]
        source: Source,

        /// 以 JSON 数组输出（含完整 URL）
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { source, output } => {
            // 先解析端点：B 缺失时在写文件之前失败
            let endpoints = Endpoints::resolve(source.a, source.b).context("resolve endpoints")?;
            let opts = ReportOptions { endpoints, fragments_path: source.fragments, output };
            let stats = generate_and_write(&opts).context("generate report failed")?;

            info!(rows = stats.rows_written, bytes = stats.bytes_written, unknown_actions = stats.unknown_actions, "report written");
            println!("{}", confirmation_line(&stats.output));
        }
        Commands::List { source, json } => {
            let endpoints = Endpoints::resolve(source.a, source.b).context("resolve endpoints")?;
            let fragments = resolve_fragments(source.fragments.as_deref()).context("load fragments")?;
            let rows = build_rows(&fragments, &endpoints);

            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            if json {
                serde_json::to_writer_pretty(&mut out, &rows).context("write json")?;
                writeln!(out)?;
            } else {
                for r in &rows {
                    writeln!(out, "{}\t{}\t{}", r.index, r.group, r.fragment)?;
                }
            }
            out.flush()?;
        }
    }

    Ok(())
}

/// 生成成功后输出到 stdout 的确认信息
fn confirmation_line(output: &Path) -> String {
    format!("html has been created at {}", output.display())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，stdout 只留给结果输出
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).with_writer(io::stderr).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
