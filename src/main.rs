use clap::{ArgGroup, Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordfreq::api::{router, ApiState};
use wordfreq::chart::BarChart;
use wordfreq::config::{AnalysisConfig, DEFAULT_PARALLELISM, DEFAULT_TOP_N};
use wordfreq::ingestion::DocumentSource;
use wordfreq::WordFrequencyEngine;

#[derive(Parser)]
#[command(name = "wordfreq", version, about = "Parallel map-reduce word-frequency analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze one document and print its most frequent words.
    Analyze(AnalyzeArgs),
    /// Serve the analyzer over HTTP.
    Serve {
        #[arg(long, env = "WORDFREQ_BIND", default_value = "127.0.0.1:8080")]
        bind: SocketAddr,
        #[command(flatten)]
        params: ParamArgs,
    },
}

#[derive(Args)]
struct ParamArgs {
    /// Number of chunks and parallel workers.
    #[arg(short, long, env = "WORDFREQ_PARALLELISM", default_value_t = DEFAULT_PARALLELISM)]
    parallelism: usize,
    /// Number of ranked words to report.
    #[arg(short = 'n', long = "top", env = "WORDFREQ_TOP_N", default_value_t = DEFAULT_TOP_N)]
    top_n: usize,
}

impl From<&ParamArgs> for AnalysisConfig {
    fn from(params: &ParamArgs) -> Self {
        AnalysisConfig::new(params.parallelism, params.top_n)
    }
}

#[derive(Args)]
#[command(group(ArgGroup::new("source").required(true).args(["url", "file"])))]
struct AnalyzeArgs {
    /// Download the document from this URL.
    #[arg(long)]
    url: Option<String>,
    /// Read the document from a local file.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Strip Project Gutenberg header and footer.
    #[arg(long)]
    gutenberg: bool,
    /// Print the report as JSON instead of a chart.
    #[arg(long)]
    json: bool,
    /// Width of the longest chart bar.
    #[arg(long, default_value_t = 50)]
    width: usize,
    #[command(flatten)]
    params: ParamArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Analyze(args) => analyze(args).await,
        Command::Serve { bind, params } => serve(bind, AnalysisConfig::from(&params)).await,
    }
}

async fn analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    // Validate before fetching anything.
    let engine = WordFrequencyEngine::new(AnalysisConfig::from(&args.params))?;

    let source = match (args.url, args.file) {
        (Some(url), _) => DocumentSource::Url(url),
        (None, Some(path)) => DocumentSource::File(path),
        (None, None) => anyhow::bail!("either --url or --file is required"),
    };

    let client = reqwest::Client::new();
    let document = source.acquire(&client, args.gutenberg).await?;
    let report = engine.analyze(&document).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let chart = BarChart::from_ranking(&report.ranking, report.top_n);
        print!("{}", chart.render(args.width));
        println!(
            "\n{} tokens, {} distinct, {} workers",
            report.total_tokens, report.distinct_tokens, report.parallelism
        );
    }

    Ok(())
}

async fn serve(bind: SocketAddr, defaults: AnalysisConfig) -> anyhow::Result<()> {
    defaults.validate()?;
    let app = router(ApiState::new(defaults));

    tracing::info!(
        "HTTP server listening on {} (parallelism {}, top {})",
        bind,
        defaults.parallelism,
        defaults.top_n
    );

    let listener = tokio::net::TcpListener::bind(bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
