use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;

use brandlens_core::{
    AnalysisOptions, MemoriesClient, ReportFormat, VideoStatus, analyze_video, api_key_from_env,
    format_result_readable, render_report,
};

/// CLI wrapper for ReportFormat enum (needed for clap ValueEnum)
#[derive(Clone, Copy, ValueEnum)]
enum CliFormat {
    Json,
    Csv,
    Srt,
}

impl From<CliFormat> for ReportFormat {
    fn from(cli: CliFormat) -> Self {
        match cli {
            CliFormat::Json => ReportFormat::Json,
            CliFormat::Csv => ReportFormat::Csv,
            CliFormat::Srt => ReportFormat::Srt,
        }
    }
}

#[derive(Parser)]
#[command(name = "brandlens")]
#[command(about = "Analyze an uploaded video for brand-safety risks and export a report")]
struct Cli {
    /// Video number assigned by the analysis service at upload time
    video_no: String,

    /// Export format; omit to print a terminal summary only
    #[arg(short, long)]
    format: Option<CliFormat>,

    /// Write the exported report to this path instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wait for the video to finish parsing before analyzing
    #[arg(short, long)]
    wait: bool,

    /// Library id the video was uploaded under
    #[arg(long, default_value = "brand-safety-app")]
    unique_id: String,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", secs / 60.0, secs % 60.0)
    }
}

async fn wait_for_parse(client: &MemoriesClient, video_no: &str) -> Result<()> {
    let spinner = create_spinner("Waiting for video to parse...");
    // Parsing long uploads takes a while; poll generously.
    for _ in 0..120 {
        match client.video_status(video_no).await? {
            VideoStatus::Parsed => {
                spinner.finish_and_clear();
                return Ok(());
            }
            VideoStatus::Failed => {
                spinner.finish_and_clear();
                bail!("video {video_no} failed to parse");
            }
            VideoStatus::Unparsed | VideoStatus::Unknown(_) => {}
        }
        tokio::time::sleep(Duration::from_secs(2)).await;
    }
    spinner.finish_and_clear();
    bail!("video {video_no} did not finish parsing in time");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Validate API key early
    let api_key = match api_key_from_env() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    let client = MemoriesClient::new(api_key).with_unique_id(&cli.unique_id);

    println!(
        "\n{}  {}\n",
        style("brandlens").cyan().bold(),
        style("Brand Safety Analyzer").dim()
    );
    println!("{}", style("─".repeat(60)).dim());

    if cli.wait {
        wait_for_parse(&client, &cli.video_no).await?;
        println!("{} Video parsed", style("✓").green().bold());
    }

    let total_start = Instant::now();
    let spinner = create_spinner("Analyzing video...");
    let result = analyze_video(&client, &client, &cli.video_no, &AnalysisOptions::default()).await?;
    spinner.finish_and_clear();
    println!(
        "{} Analyzed {}",
        style("✓").green().bold(),
        style(format!("({})", format_duration(total_start.elapsed()))).dim()
    );

    println!("{}", style("─".repeat(60)).dim());
    print!("{}", format_result_readable(&result));

    if let Some(format) = cli.format {
        let format: ReportFormat = format.into();
        let rendered = render_report(&result, format)?;

        match &cli.output {
            Some(path) => {
                fs::write(path, &rendered).await?;
                println!(
                    "{} Report written to {}",
                    style("✓").green().bold(),
                    style(path.display()).cyan()
                );
            }
            None => {
                println!("{}", style("─".repeat(60)).dim());
                println!("{rendered}");
            }
        }
    }

    Ok(())
}
