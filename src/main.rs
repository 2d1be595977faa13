use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing::{debug, error};

use folio_contact::config::ContactConfig;
use folio_contact::contact::{ContactError, ContactWorkflow, Field, Notice, Notifier, SubmitOutcome};
use folio_contact::email::EmailJsClient;

const EXIT_SENT: u8 = 0;
const EXIT_FAILED: u8 = 1;
const EXIT_CONFIG: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "folio-contact", about = "Send a message through the portfolio contact form")]
struct Cli {
    /// Sender name; prompted for when omitted.
    #[arg(long)]
    name: Option<String>,

    /// Sender email address; prompted for when omitted.
    #[arg(long)]
    email: Option<String>,

    /// Message body; prompted for when omitted.
    #[arg(long)]
    message: Option<String>,
}

impl Cli {
    fn take(&mut self, field: Field) -> Option<String> {
        match field {
            Field::Name => self.name.take(),
            Field::Email => self.email.take(),
            Field::Message => self.message.take(),
        }
    }
}

/// Prints notices to the terminal.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        if notice.is_success() {
            println!("{notice}");
        } else {
            eprintln!("{notice}");
        }
    }
}

fn prompt_label(field: Field) -> &'static str {
    match field {
        Field::Name => "Your name",
        Field::Email => "Your email",
        Field::Message => "Your message",
    }
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, field: Field) -> std::io::Result<String> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(format!("{}: ", prompt_label(field)).as_bytes())
        .await?;
    stdout.flush().await?;
    Ok(lines.next_line().await?.unwrap_or_default())
}

/// Validation and delivery failures share one code; the notice says which.
fn exit_code(result: &Result<SubmitOutcome, ContactError>) -> u8 {
    match result {
        Ok(_) => EXIT_SENT,
        Err(_) => EXIT_FAILED,
    }
}

async fn collect_fields(workflow: &ContactWorkflow, mut cli: Cli) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    for field in Field::ALL {
        let value = match cli.take(field) {
            Some(value) => value,
            None => prompt(&mut lines, field).await?,
        };
        workflow.update_field(field, value);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        debug!(error = %e, "no .env file loaded");
    }

    let cli = Cli::parse();

    let config = match ContactConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "contact config invalid");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let sender = match EmailJsClient::new(config.emailjs, config.timeouts) {
        Ok(sender) => sender,
        Err(e) => {
            error!(error = %e, "email client init failed");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let workflow = ContactWorkflow::new(config.recipient, Arc::new(sender), Arc::new(TerminalNotifier));

    if let Err(e) = collect_fields(&workflow, cli).await {
        error!(error = %e, "failed to read contact form input");
        return ExitCode::from(EXIT_FAILED);
    }

    let result = workflow.submit().await;
    debug!(status = ?workflow.status(), "contact submission finished");
    ExitCode::from(exit_code(&result))
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
