use clap::{Args, Parser, Subcommand, ValueEnum};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use newsdash::api::{
    ApiClient, IngestMetricsClient, IngestMetricsSource, MetricsQuery, OutletDirectory,
    OutletsClient, StatusClient, StatusSource,
};
use newsdash::config::{ConfigLoader, DashboardConfig, OutputConfig, Overrides};
use newsdash::render::render_rows;
use newsdash::view::{Dashboard, DevPanel, DevTab, MatchReport};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio_stream::wrappers::IntervalStream;
use tokio_stream::StreamExt;

#[derive(Parser)]
#[command(name = "newsdash")]
#[command(version = "0.1.0")]
#[command(about = "Outlet directory and ingestion metrics dashboard", long_about = None)]
struct Cli {
    /// Path to a configuration file (JSON/YAML/TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Backend root URL, overrides config and environment
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Show a spinner while fetching (stderr)
    #[arg(short, long, global = true)]
    progress: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Backend status and outlets per country
    Outlets,
    /// Outlet rows with their ingestion sparklines, or the matching report
    Dev(DevArgs),
    /// Backend status only
    Status,
    /// Reload the dev panel on an interval until Ctrl-C
    Watch {
        #[arg(short, long, default_value_t = 60)]
        interval_secs: u64,

        #[command(flatten)]
        dev: DevArgs,
    },
    /// Validate the configuration file given with --config
    Check,
}

#[derive(Args, Clone)]
struct DevArgs {
    /// ingestion | matching
    #[arg(short, long, default_value = "ingestion")]
    tab: DevTab,

    /// Filter outlets by id, name, type or country
    #[arg(short, long, default_value = "")]
    search: String,

    /// Lookback window in days
    #[arg(short, long)]
    days: Option<u32>,

    /// Only fetch metrics for this country
    #[arg(long)]
    country: Option<String>,

    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Output file for json/csv
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy)]
enum Format {
    Console,
    Json,
    Csv,
}

impl DevArgs {
    fn output(&self, config: &DashboardConfig) -> anyhow::Result<Option<OutputConfig>> {
        let path = || -> anyhow::Result<String> {
            self.out
                .as_ref()
                .map(|p| p.display().to_string())
                .ok_or_else(|| anyhow::anyhow!("--out is required for json and csv output"))
        };
        Ok(match self.format {
            Some(Format::Console) => Some(OutputConfig::Console),
            Some(Format::Json) => Some(OutputConfig::Json { path: path()? }),
            Some(Format::Csv) => Some(OutputConfig::Csv { path: path()? }),
            None => config.output.clone(),
        })
    }
}

struct Services {
    api: ApiClient,
    outlets: Arc<dyn OutletDirectory>,
    metrics: Arc<dyn IngestMetricsSource>,
    status: Arc<dyn StatusSource>,
}

impl Services {
    fn new(config: &DashboardConfig) -> anyhow::Result<Self> {
        let api = ApiClient::new(config)?;
        Ok(Self {
            outlets: Arc::new(OutletsClient::new(api.clone())),
            metrics: Arc::new(IngestMetricsClient::new(api.clone())),
            status: Arc::new(StatusClient::new(api.clone())),
            api,
        })
    }
}

fn spinner(multi: &MultiProgress, enabled: bool, msg: &str) -> anyhow::Result<Option<ProgressBar>> {
    if !enabled {
        return Ok(None);
    }
    let pb = multi.add(ProgressBar::new_spinner());
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(msg.to_string());
    Ok(Some(pb))
}

fn print_matching(report: &MatchReport, output: Option<&OutputConfig>) -> anyhow::Result<()> {
    if let Some(OutputConfig::Json { path }) = output {
        std::fs::write(path, serde_json::to_string_pretty(report)?)?;
        log::info!("Matching report written to {}", path);
        return Ok(());
    }
    if let Some(OutputConfig::Csv { .. }) = output {
        log::warn!("CSV output is not available for the matching tab, printing instead");
    }

    println!("Matched: {}", report.matched.len());
    for key in &report.matched {
        println!("   {}", key);
    }
    println!("Outlets without series: {}", report.outlets_without_series.len());
    for key in &report.outlets_without_series {
        println!("   {}", key);
    }
    println!("Series without outlet: {}", report.series_without_outlet.len());
    for key in &report.series_without_outlet {
        println!("   {}", key);
    }
    Ok(())
}

async fn show_panel(
    panel: &DevPanel,
    output: Option<&OutputConfig>,
    console: Option<Arc<MultiProgress>>,
) -> anyhow::Result<()> {
    match panel.active_tab() {
        DevTab::Ingestion => {
            let rows = panel.rows();
            let mut renderer = ConfigLoader::create_renderer(output, console)?;
            render_rows(renderer.as_mut(), panel.ingest_days(), &rows).await?;
            log::info!("Rendered {} outlet rows", rows.len());
        }
        DevTab::Matching => print_matching(&panel.matching(), output)?,
    }
    Ok(())
}

fn build_panel(services: &Services, config: &DashboardConfig, args: &DevArgs) -> DevPanel {
    let query = MetricsQuery::new(
        args.days.unwrap_or(config.days),
        args.country.clone().or_else(|| config.country.clone()),
    );
    let mut panel = DevPanel::new(services.outlets.clone(), services.metrics.clone())
        .with_query(query)
        .with_sparkline(config.sparkline);
    panel.set_tab(args.tab);
    panel.on_search_change(&args.search);
    panel
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        unsafe { std::env::set_var("RUST_LOG", "info"); }
    }
    let cli = Cli::parse();
    let logger = env_logger::Builder::from_default_env().build();
    let multi = Arc::new(MultiProgress::new());

    let level = logger.filter();

    if cli.progress {
        indicatif_log_bridge::LogWrapper::new((*multi).clone(), logger).try_init()?;
    } else {
        log::set_boxed_logger(Box::new(logger))?;
    }
    log::set_max_level(level);
    let console = cli.progress.then(|| multi.clone());

    if let Commands::Check = &cli.command {
        let Some(path) = cli.config.as_deref() else {
            anyhow::bail!("check needs a configuration file: --config PATH");
        };
        match ConfigLoader::load(path) {
            Ok(cfg) => {
                println!("✅ Config is valid:");
                println!("   Base URL: {}", cfg.base_url);
                println!("   Days: {}", cfg.days);
                println!("   Country: {}", cfg.country.as_deref().unwrap_or("(all)"));
                println!("   Sparkline: {}x{}", cfg.sparkline.width, cfg.sparkline.height);
            }
            Err(e) => {
                eprintln!("❌ Config error: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let overrides = Overrides {
        base_url: cli.base_url.clone(),
        ..Overrides::default()
    };
    let config = ConfigLoader::resolve(cli.config.as_deref(), &overrides)?;
    log::info!("Using backend at {}", config.base_url);
    let services = Services::new(&config)?;

    let mut failure = None;
    match &cli.command {
        Commands::Outlets => {
            let mut dashboard = Dashboard::new(services.outlets.clone(), services.status.clone());
            let pb = spinner(&multi, cli.progress, "Fetching outlets and status...")?;
            dashboard.load().await;
            if let Some(pb) = pb {
                pb.finish_and_clear();
            }
            for line in dashboard.summary_lines() {
                println!("{}", line);
            }
            failure = dashboard.last_error().map(str::to_string);
        }
        Commands::Status => {
            let mut dashboard = Dashboard::new(services.outlets.clone(), services.status.clone());
            let pb = spinner(&multi, cli.progress, "Fetching status...")?;
            dashboard.load_status().await;
            if let Some(pb) = pb {
                pb.finish_and_clear();
            }
            for line in dashboard.status_lines() {
                println!("{}", line);
            }
            failure = dashboard.last_error().map(str::to_string);
        }
        Commands::Dev(args) => {
            let output = args.output(&config)?;
            let mut panel = build_panel(&services, &config, args);
            let pb = spinner(&multi, cli.progress, "Fetching outlets and ingest metrics...")?;
            panel.load().await;
            if let Some(pb) = pb {
                pb.finish_and_clear();
            }
            show_panel(&panel, output.as_ref(), console.clone()).await?;
            failure = panel.last_error().map(str::to_string);
        }
        Commands::Watch { interval_secs, dev } => {
            let output = dev.output(&config)?;
            let mut panel = build_panel(&services, &config, dev);
            let mut ticks = IntervalStream::new(tokio::time::interval(Duration::from_secs(
                (*interval_secs).max(1),
            )));

            log::info!("Watching every {}s, Ctrl-C to stop", interval_secs);
            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        log::info!("Shutting down...");
                        break;
                    }
                    tick = ticks.next() => {
                        if tick.is_none() {
                            break;
                        }
                        if !panel.load().await {
                            log::warn!("Reload incomplete: {}", panel.last_error().unwrap_or("unknown"));
                        }
                        show_panel(&panel, output.as_ref(), console.clone()).await?;
                    }
                }
            }
        }
        Commands::Check => return Ok(()),
    }

    let stats = services.api.stats().snapshot();
    println!("\n✅ Fetch summary:");
    println!("   Requests: {}", stats.requests_total);
    println!("   Success Rate: {:.1}%", stats.success_rate);
    println!("   Average Duration: {}ms", stats.avg_response_time_ms);
    println!("   Received: {} bytes", stats.bytes_received);

    if let Some(err) = failure {
        anyhow::bail!("fetch failed, showing previous data where available: {}", err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_reads_the_global_config_flag() {
        let cli = Cli::try_parse_from(["newsdash", "check", "--config", "/tmp/dash.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::Check));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/dash.toml")));

        let cli = Cli::try_parse_from(["newsdash", "-c", "dash.yaml", "check"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("dash.yaml")));
    }

    #[test]
    fn check_takes_no_positional_path() {
        assert!(Cli::try_parse_from(["newsdash", "check", "dash.toml"]).is_err());
    }

    #[test]
    fn status_and_outlets_parse_as_distinct_commands() {
        let cli = Cli::try_parse_from(["newsdash", "status"]).unwrap();
        assert!(matches!(cli.command, Commands::Status));
        let cli = Cli::try_parse_from(["newsdash", "outlets", "--base-url", "http://x/api"]).unwrap();
        assert!(matches!(cli.command, Commands::Outlets));
        assert_eq!(cli.base_url.as_deref(), Some("http://x/api"));
    }
}
