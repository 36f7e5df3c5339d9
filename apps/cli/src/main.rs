use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::Parser;
use quiz_core::{HttpQuizBackend, QuizSession};
use tokio::io::AsyncBufReadExt;

mod surface;

use surface::TerminalSurface;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the quiz service.
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    server_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();
    tracing::debug!(server_url = %args.server_url, "starting quiz client");

    let options = Arc::new(Mutex::new(Vec::new()));
    let surface = TerminalSurface::new(options.clone());
    let session = QuizSession::new(HttpQuizBackend::new(args.server_url), surface);

    session.initialize().await;
    println!("Commands: n = next question, 1-9 = answer, h = hint, r = refresh history, q = quit");
    session.start_round().await;

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => {}
            "q" | "quit" => break,
            "n" | "next" | "start" => session.start_round().await,
            "h" | "hint" => session.reveal_hint().await,
            "r" | "history" => session.refresh_history().await,
            input => match input.parse::<usize>() {
                Ok(index) if index >= 1 => {
                    let option = options
                        .lock()
                        .expect("option list")
                        .get(index - 1)
                        .cloned();
                    match option {
                        Some(option) => session.submit_answer(&option).await,
                        None => println!("No option {index} on this question"),
                    }
                }
                _ => println!("Unknown command: {input}"),
            },
        }
    }
    Ok(())
}
