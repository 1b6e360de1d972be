use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use cyberdoom_certificate::inspect::inspect;
use cyberdoom_certificate::{CertificateBuilder, CertificateRequest, CERTIFICATE_FILE_NAME};

mod host;
mod page;

/// Serves the CyberDoom certificate form and renders certificates from the command line.
#[derive(Parser)]
#[command(author, version, about = "CyberDoom completion certificates")]
struct Cli {
    /// Log debug output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the certificate form over HTTP.
    Serve {
        /// Address to listen on.
        #[arg(long, default_value = "127.0.0.1:8501")]
        bind: String,
    },

    /// Render a certificate to disk.
    Render {
        /// Recipient name, printed verbatim.
        #[arg(long, default_value = "")]
        name: String,

        /// Completion score.
        #[arg(long, default_value_t = 0)]
        score: u32,

        /// Title stored in the document metadata.
        #[arg(long)]
        title: Option<String>,

        /// Output path.
        #[arg(short, long, default_value = CERTIFICATE_FILE_NAME)]
        output: PathBuf,
    },

    /// Print the text and page count of a rendered certificate.
    Inspect {
        /// Path to a rendered certificate.
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Serve { bind } => serve(&bind),
        Commands::Render {
            name,
            score,
            title,
            output,
        } => render(name, score, title, output),
        Commands::Inspect { path } => inspect_file(path),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {}", cause);
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn serve(bind: &str) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(host::serve(bind))
}

fn render(
    name: String,
    score: u32,
    title: Option<String>,
    output: PathBuf,
) -> anyhow::Result<()> {
    let mut builder = CertificateBuilder::new();
    if let Some(title) = title {
        builder = builder.with_document_title(title);
    }
    let rendered = builder.render(&CertificateRequest::new(name, score))?;
    fs::write(&output, &rendered.bytes)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!(
        "Generated {} ({} bytes)",
        output.display(),
        rendered.bytes.len()
    );
    Ok(())
}

fn inspect_file(path: PathBuf) -> anyhow::Result<()> {
    let bytes = fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
    let summary =
        inspect(&bytes).with_context(|| format!("failed to inspect {}", path.display()))?;

    println!("pages: {}", summary.page_count);
    if let Some(title) = &summary.title {
        println!("title: {}", title);
    }
    for line in &summary.lines {
        println!("  {}", line);
    }
    Ok(())
}
