//! Terminal front end for the playground server
//!
//! Same flow as the browser client: load models, compose a prompt, submit,
//! show the answer and its metrics.

use anyhow::Result;
use clap::Parser;
use groq_playground::client::{ComposeKey, KeyAction, PlaygroundClient, Session};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(name = "playground")]
#[command(about = "Terminal client for the Groq playground server")]
#[command(long_about = "Sends prompts to a running playground server and prints the answer \
with its timing and token metrics.\n\n\
Controls:\n\
  Enter             Send the prompt\n\
  \\ then Enter      Continue the prompt on a new line\n\n\
Commands:\n\
  /models           List available models\n\
  /model <id>       Select a model\n\
  /quit             Exit")]
struct Args {
    #[arg(short, long, default_value = "http://localhost:7049", help = "Playground server URL")]
    server: String,

    #[arg(short, long, help = "Model to select instead of the first one listed")]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let client = PlaygroundClient::new(&args.server)?;
    let mut session = Session::new();

    session.load_models(&client).await;
    if let Some(error) = session.error() {
        eprintln!("Error: {}", error);
    }
    if let Some(model) = &args.model {
        if !session.select_model(model) {
            eprintln!("Unknown model: {}", model);
        }
    }
    print_selected(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut draft = String::new();

    while let Some(line) = lines.next_line().await? {
        if draft.is_empty() {
            match line.trim() {
                "/quit" => break,
                "/models" => {
                    print_models(&session);
                    continue;
                }
                cmd if cmd.starts_with("/model ") => {
                    let id = cmd.trim_start_matches("/model ").trim();
                    if !session.select_model(id) {
                        eprintln!("Unknown model: {}", id);
                    }
                    print_selected(&session);
                    continue;
                }
                _ => {}
            }
        }

        // A trailing backslash stands in for Shift+Enter
        let (text, key) = match line.strip_suffix('\\') {
            Some(rest) => (rest, ComposeKey { enter: true, shift: true }),
            None => (line.as_str(), ComposeKey { enter: true, shift: false }),
        };
        draft.push_str(text);

        match key.action() {
            KeyAction::Newline => draft.push('\n'),
            KeyAction::Submit => {
                session.set_prompt(std::mem::take(&mut draft));
                if !session.can_submit() {
                    continue;
                }
                println!("Running...");
                session.submit(&client).await;
                print_outcome(&session);
            }
            KeyAction::Input => {}
        }
    }

    Ok(())
}

fn print_models(session: &Session) {
    for model in session.models() {
        let marker = if Some(model.as_str()) == session.selected_model() { "*" } else { " " };
        println!("{} {}", marker, model);
    }
}

fn print_selected(session: &Session) {
    match session.selected_model() {
        Some(model) => println!("Model: {}", model),
        None => println!("Model: (none)"),
    }
}

fn print_outcome(session: &Session) {
    if let Some(error) = session.error() {
        println!("Error: {}", error);
    }
    if let Some(result) = session.result() {
        if !result.text.is_empty() {
            println!("\nResponse\n{}\n", result.text);
        }
    }
    if let Some(metrics) = session.metrics() {
        print!("{}", metrics);
    }
}
