use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;

use npc_search::change_detector::ChangeDetector;
use npc_search::cli::{Cli, Command};
use npc_search::config::CONFIG;
use npc_search::display::{DisplaySurface, MemorySurface, StdoutSurface};
use npc_search::query_client::QueryClient;
use npc_search::session::SearchSession;
use npc_search::transcript::{self, TranscriptBuffer, TranscriptionStats};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // fmt().init() also installs the log -> tracing bridge for the library's log::* calls
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = (*CONFIG).clone().with_overrides(cli.base_url, cli.timeout_secs);
    tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "search service");

    let client =
        Arc::new(QueryClient::from_config(&config).context("Failed to build HTTP client")?);

    match cli.command {
        Command::Search { keyword } => {
            // only the final text goes to stdout
            let display: Arc<dyn DisplaySurface> = Arc::new(MemorySurface::new());
            let session = SearchSession::new(client, display);
            let text = session.submit(&keyword.join(" ")).await;
            println!("{text}");
        }
        Command::Watch => {
            let session = SearchSession::new(client, Arc::new(StdoutSurface));
            watch(&session).await?;
        }
        Command::Listen {
            no_stream,
            no_language,
            language,
            audio_secs,
            max_chars,
        } => {
            let started = Instant::now();
            let mut buffer = TranscriptBuffer::new(max_chars);
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines
                .next_line()
                .await
                .context("Failed to read transcript segment from stdin")?
            {
                let segment = line.trim();
                if segment.is_empty() {
                    continue;
                }
                let segment = if buffer.text().is_empty() {
                    segment.to_string()
                } else {
                    format!(" {segment}")
                };
                let view = buffer.push_segment(&segment);
                if !no_stream {
                    eprintln!("{view}");
                }
            }

            let transcript = buffer.text().trim().to_string();
            eprintln!("{}", transcript::finish(&transcript, &language, !no_language));
            if let Some(audio_secs) = audio_secs {
                let stats = TranscriptionStats {
                    elapsed_ms: started.elapsed().as_millis() as u64,
                    audio_secs,
                };
                eprintln!("{}", stats.summary());
            }

            let session = SearchSession::new(client, Arc::new(StdoutSurface));
            session.input_changed(&transcript).await;
        }
    }

    Ok(())
}

/// Every stdin line is the whole new content of the input field.
async fn watch(session: &SearchSession) -> Result<()> {
    let mut detector = ChangeDetector::default();
    let mut tasks = JoinSet::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read input from stdin")?
    {
        if let Some(text) = detector.observe(line.trim_end_matches('\r')) {
            session.spawn_input_changed(&mut tasks, text);
        }
        // reap finished searches so a long session does not pile up handles
        while let Some(res) = tasks.try_join_next() {
            log_task_result(res);
        }
    }

    while let Some(res) = tasks.join_next().await {
        log_task_result(res);
    }
    Ok(())
}

fn log_task_result(res: Result<String, tokio::task::JoinError>) {
    if let Err(e) = res {
        tracing::error!("search task failed: {e}");
    }
}
