//! Command-line surface: argument parsing and one handler per command.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};
use scribewise_completion::revision::{RevisionClient, RevisionRequest};
use scribewise_core::models::style::WritingStyle;
use scribewise_editor::session::{EditorSession, RevisionTicket};
use scribewise_storage::sessions::{FileSessionStore, SessionRepository};
use tracing::{error, info};
use uuid::Uuid;

use crate::clipboard::SystemClipboard;
use crate::config::{self, ScribeConfig};
use crate::notify::{Notifier, REVISION_FAILED};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "scribewise",
    version,
    about = "Style-guided revisions for your writing",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List writing styles.
    Styles,

    /// List recent sessions, newest first.
    Sessions,

    /// Start a session.
    NewSession {
        /// Writing style (default: the configured style).
        #[arg(long, value_parser = parse_style)]
        style: Option<WritingStyle>,
    },

    /// Remove a session from the index.
    DeleteSession {
        #[arg(value_name = "ID")]
        id: Uuid,
    },

    /// Print the text extracted from a file.
    Import {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Revise a passage of a document.
    Revise(ReviseArgs),

    /// Show the active configuration (API key redacted).
    Config,

    /// Update and save the configuration.
    Configure(ConfigureArgs),

    /// Delete the saved configuration.
    ResetConfig,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ReviseArgs {
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Text to revise. The first occurrence in the document is used.
    #[arg(long, value_name = "TEXT")]
    pub select: String,

    #[arg(long, value_parser = parse_style)]
    pub style: Option<WritingStyle>,

    /// Restore the writing style of a stored session.
    #[arg(long, value_name = "ID")]
    pub session: Option<Uuid>,

    /// Annotate a span before requesting the revision (repeatable).
    #[arg(long = "annotate", num_args = 2, value_names = ["SPAN", "COMMENT"])]
    pub annotate: Vec<String>,

    /// Copy the revised document to the clipboard.
    #[arg(long)]
    pub copy: bool,
}

impl ReviseArgs {
    /// `--annotate` values as `(span, comment)` pairs.
    pub fn annotations(&self) -> Vec<(String, String)> {
        self.annotate
            .chunks_exact(2)
            .map(|pair| (pair[0].clone(), pair[1].clone()))
            .collect()
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigureArgs {
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long, value_parser = parse_style)]
    pub style: Option<WritingStyle>,

    /// Request JSON-schema responses.
    #[arg(long, value_parser = BoolishValueParser::new())]
    pub structured_output: Option<bool>,
}

fn parse_style(raw: &str) -> Result<WritingStyle, String> {
    raw.parse::<WritingStyle>().map_err(|e| e.to_string())
}

// ── Handlers ─────────────────────────────────────────────────────────────────

pub async fn run(
    command: Command,
    config: ScribeConfig,
    notifier: &dyn Notifier,
) -> eyre::Result<ExitCode> {
    match command {
        Command::Styles => {
            for style in WritingStyle::ALL {
                println!("{:<10} {}: {}", style.as_str(), style.title(), style.description());
            }
        }
        Command::Sessions => {
            let store = FileSessionStore::new(config.sessions_path()?);
            for record in store.list()? {
                println!("{}  {}  {}", record.id, record.date, record.writing_style);
            }
        }
        Command::NewSession { style } => {
            let mut store = FileSessionStore::new(config.sessions_path()?);
            let record = store.create(style.unwrap_or(config.writing_style))?;
            println!("{}", record.id);
        }
        Command::DeleteSession { id } => {
            let mut store = FileSessionStore::new(config.sessions_path()?);
            if !store.remove(id)? {
                return Err(eyre::eyre!("no session with id {id}"));
            }
            notifier.success("Session deleted", &id.to_string());
        }
        Command::Import { file } => {
            let imported = scribewise_import::import_path(&file)?;
            println!("{}", imported.text);
        }
        Command::Revise(args) => return revise(args, &config, notifier).await,
        Command::Config => {
            let mut effective = config.clone();
            let endpoint = config.endpoint();
            effective.api_url = endpoint.api_url;
            effective.api_key = endpoint.api_key;
            println!(
                "{}",
                serde_json::to_string_pretty(&config::config_info(&effective))?
            );
        }
        Command::Configure(args) => {
            let mut updated = config;
            if let Some(url) = args.api_url {
                updated.api_url = Some(url);
            }
            if let Some(key) = args.api_key {
                updated.api_key = Some(key);
            }
            if let Some(model) = args.model {
                updated.model = model;
            }
            if let Some(style) = args.style {
                updated.writing_style = style;
            }
            if let Some(enabled) = args.structured_output {
                updated.structured_output = enabled;
            }
            config::save_config(&updated)?;
            notifier.success("Configuration saved", &config::config_path()?.display().to_string());
        }
        Command::ResetConfig => {
            config::delete_config()?;
            notifier.success("Configuration reset", "defaults will be used");
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn request_for(ticket: &RevisionTicket) -> RevisionRequest {
    RevisionRequest {
        document: ticket.document.clone(),
        selected_text: ticket.selected_text.clone(),
        context: Some(ticket.context.clone()),
        style: ticket.style,
        annotations: ticket.annotations.clone(),
    }
}

async fn revise(
    args: ReviseArgs,
    config: &ScribeConfig,
    notifier: &dyn Notifier,
) -> eyre::Result<ExitCode> {
    let style = match (args.style, args.session) {
        (Some(style), _) => style,
        (None, Some(id)) => {
            FileSessionStore::new(config.sessions_path()?)
                .get(id)?
                .writing_style
        }
        (None, None) => config.writing_style,
    };

    // Credentials are checked before anything else happens.
    let client = match RevisionClient::from_config(&config.endpoint()) {
        Ok(client) => client
            .with_model(config.model.clone())
            .with_structured_output(config.structured_output),
        Err(e) => {
            notifier.error("Configuration", &e.to_string());
            return Ok(ExitCode::FAILURE);
        }
    };

    let imported = scribewise_import::import_path(&args.file)?;
    let mut session = EditorSession::new(style, imported.text);

    for (span, comment) in args.annotations() {
        session.select(span);
        session.annotate(comment)?;
    }

    session.select(args.select);
    let ticket = session.begin_revision()?;
    let request = request_for(&ticket);

    let result = tokio::task::spawn_blocking(move || client.request_revision(&request)).await?;

    let revision = match result {
        Ok(outcome) => session.complete_revision(&ticket, outcome)?.revision,
        Err(e) => {
            error!(ticket_id = %ticket.id, kind = ?e.kind(), error = %e, "revision request failed");
            session.fail_revision(&ticket)?;
            notifier.error("Revision", REVISION_FAILED);
            return Ok(ExitCode::FAILURE);
        }
    };

    let stats = session.stats();
    info!(words = stats.words, characters = stats.characters, "document updated");

    println!("{}", session.plain_text());
    notifier.success("Revision", &revision.explanation);

    if args.copy {
        match session.copy_to(&mut SystemClipboard::new()) {
            Ok(()) => notifier.success("Copied", "Text copied to clipboard"),
            Err(e) => {
                error!(error = %e, "clipboard copy failed");
                notifier.error("Copy failed", "Failed to copy text");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
