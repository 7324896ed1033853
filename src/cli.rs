// src/cli.rs
//! Command line interface in front of the analysis session

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{Confirm, Select, Text};

use crate::config::ServiceConfig;
use crate::core::AnalysisClient;
use crate::input::{FileCandidate, InputMode};
use crate::render::{print_report, Report};
use crate::session::Session;
use crate::utils::media_type_for;

#[derive(Parser)]
#[command(name = "cvscan")]
#[command(about = "Analyze resumes against a remote analysis service")]
pub struct Cli {
    /// Base URL of the analysis service (falls back to CV_ANALYZER_URL)
    #[arg(long, global = true)]
    pub service_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a resume PDF from disk
    File { path: PathBuf },
    /// Analyze pasted resume text (reads stdin when omitted)
    Text { text: Option<String> },
    /// Pick a mode, stage input and analyze, repeatedly
    Interactive,
    /// Check that the analysis service is reachable
    Health,
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = ServiceConfig::resolve(cli.service_url)?;
    let client = AnalysisClient::new(config.base_url)?;

    match cli.command {
        Command::File { path } => analyze_file(client, &path).await,
        Command::Text { text } => analyze_text(client, text).await,
        Command::Interactive => interactive(client).await,
        Command::Health => health(client).await,
    }
}

/// Read a picked file into a staging candidate. The media type comes from
/// the file name, like a browser file picker would set it.
fn read_candidate(path: &Path) -> Result<FileCandidate> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .context("File path has no usable file name")?
        .to_string();

    let media_type = media_type_for(&file_name);
    Ok(FileCandidate::new(file_name, media_type, bytes))
}

async fn analyze_file(client: AnalysisClient, path: &Path) -> Result<()> {
    let mut session = Session::new(client);
    session.set_mode(InputMode::File);
    session.stage_file(read_candidate(path)?);
    finish(&mut session).await
}

async fn analyze_text(client: AnalysisClient, text: Option<String>) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read resume text from stdin")?;
            buffer
        }
    };

    let mut session = Session::new(client);
    session.set_mode(InputMode::Text);
    session.stage_text(text);
    finish(&mut session).await
}

/// Submit whatever is staged, then render the settled outcome.
async fn finish(session: &mut Session) -> Result<()> {
    // Staging may already have rejected the input (a non-PDF file).
    if let Some(err) = session.error() {
        anyhow::bail!("{}", err);
    }

    println!("⏳ Analyzing...");
    session.submit().await;

    if let Some(result) = session.result() {
        print_report(&Report::from_result(result));
        return Ok(());
    }
    match session.error() {
        Some(err) => anyhow::bail!("{}", err),
        None => anyhow::bail!("Analysis settled without a result"),
    }
}

/// The full session loop: mode selection, staging, submission, and the
/// "analyze another" reset, until the user leaves.
async fn interactive(client: AnalysisClient) -> Result<()> {
    let mut session = Session::new(client);

    println!("AI Resume Analyzer");
    println!("Upload or paste your resume for instant analysis");

    loop {
        let mode = Select::new("Input mode:", vec![InputMode::File, InputMode::Text]).prompt()?;
        session.set_mode(mode);

        match session.mode() {
            InputMode::File => {
                let path = Text::new("Path to PDF:").prompt()?;
                match read_candidate(Path::new(path.trim())) {
                    Ok(candidate) => session.stage_file(candidate),
                    Err(err) => {
                        println!("❌ {:#}", err);
                        continue;
                    }
                }
            }
            InputMode::Text => {
                let text = Text::new("Resume text:").prompt()?;
                session.stage_text(text);
            }
        }

        if let Some(err) = session.error() {
            // Staging rejected the input; the session is ready for another try.
            println!("❌ {}", err);
            continue;
        }

        println!("⏳ Analyzing...");
        session.submit().await;

        match (session.result(), session.error()) {
            (Some(result), _) => print_report(&Report::from_result(result)),
            (None, Some(err)) => println!("❌ {}", err),
            (None, None) => println!("❌ Analysis settled without a result"),
        }

        let again = Confirm::new("↺ Analyze another resume?")
            .with_default(true)
            .prompt()?;
        if !again {
            break;
        }
        session.reset();
    }

    Ok(())
}

async fn health(client: AnalysisClient) -> Result<()> {
    let response = client.health().await?;
    println!("✓ Analysis service is {}", response.status);
    Ok(())
}
