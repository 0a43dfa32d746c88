use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use basira::{
    AppState, DisabledTranslator, GoogleTranslator, GroqClient, GroqConfig, MemoryStore,
    TranslateConfig, Translator, analyze, parse_segments_file, serve,
};

#[derive(Parser)]
#[command(name = "basira")]
#[command(author, version, about = "Arabic interview speech analysis service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP analysis service
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value = "8000")]
        port: u16,

        /// Directory for uploaded videos and extracted audio
        #[arg(long, default_value = "uploads")]
        upload_dir: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a transcript file without running the service
    Analyze {
        /// Input segments file (JSON array of {start, end, text})
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the report JSON (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip segment translation (sentiment falls back to neutral)
        #[arg(long)]
        skip_translation: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            upload_dir,
            verbose,
        } => {
            setup_logging(verbose);
            run_server(host, port, upload_dir).await
        }
        Commands::Analyze {
            input,
            output,
            skip_translation,
            verbose,
        } => {
            setup_logging(verbose);
            run_analysis(input, output, skip_translation).await
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

async fn run_server(host: String, port: u16, upload_dir: PathBuf) -> Result<()> {
    std::fs::create_dir_all(&upload_dir)
        .with_context(|| format!("Failed to create upload directory {:?}", upload_dir))?;

    let transcriber = match GroqConfig::from_env() {
        Ok(config) => Some(GroqClient::new(config)),
        Err(error) => {
            warn!(%error, "transcription disabled, uploads will be rejected");
            None
        }
    };

    let state = Arc::new(AppState {
        store: Arc::new(MemoryStore::new()),
        transcriber,
        translator: Arc::new(GoogleTranslator::new(TranslateConfig::default())),
        upload_dir,
    });

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("Invalid listen address {host}:{port}"))?;

    serve(addr, state).await
}

async fn run_analysis(
    input: PathBuf,
    output: Option<PathBuf>,
    skip_translation: bool,
) -> Result<()> {
    info!("Loading transcript from {:?}", input);
    let transcript = parse_segments_file(&input).context("Failed to parse input transcript")?;

    info!(
        "Loaded {} segments, {} words, {:.1}s of speech",
        transcript.len(),
        transcript.total_words(),
        transcript.total_duration()
    );

    let translator: Box<dyn Translator> = if skip_translation {
        info!("Translation disabled, sentiment will default to neutral");
        Box::new(DisabledTranslator)
    } else {
        Box::new(GoogleTranslator::new(TranslateConfig::default()))
    };

    let report = analyze(&transcript, translator.as_ref()).await;

    match output {
        Some(path) => {
            let file = std::fs::File::create(&path)
                .with_context(|| format!("Failed to create file: {:?}", path))?;
            serde_json::to_writer_pretty(file, &report).context("Failed to write report JSON")?;
            info!("Report written to {:?}", path);
        }
        None => {
            let rendered =
                serde_json::to_string_pretty(&report).context("Failed to render report JSON")?;
            println!("{rendered}");
        }
    }

    Ok(())
}
