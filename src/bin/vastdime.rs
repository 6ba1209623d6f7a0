//! Operator CLI for the vastdime front-end.
//!
//! Drives the same registration form and share-link dialog as the web
//! front-end, from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Register an account interactively
//! cargo run --bin vastdime -- register
//!
//! # Print a share link and copy it to the terminal clipboard
//! cargo run --bin vastdime -- share-link --username alice --title "My Prog" --copy
//!
//! # Validate the environment configuration
//! cargo run --bin vastdime -- config check
//! ```
//!
//! # Environment Variables
//!
//! - `API_URL`, `IDENTITY_API_KEY` (required for `register` and `config check`)
//! - `SHARE_HOST` (optional): host used by `share-link`

use vastdime_web::application::forms::{RegistrationForm, ShareLinkDialog, SubmitOutcome};
use vastdime_web::config::{self, mask_secret};
use vastdime_web::domain::entities::{DEFAULT_SHARE_HOST, RegistrationRequest, ShareLinkData};
use vastdime_web::domain::ports::Clipboard;
use vastdime_web::infrastructure::backend::HttpRegistrationBackend;
use vastdime_web::infrastructure::clipboard::TerminalClipboard;
use vastdime_web::infrastructure::identity::IdentityToolkitClient;
use vastdime_web::infrastructure::notify::ConsoleNotifier;
use vastdime_web::utils::validation::validation_messages;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use validator::Validate;

/// CLI tool for the vastdime front-end.
#[derive(Parser)]
#[command(name = "vastdime")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new account
    Register {
        #[arg(short, long)]
        email: Option<String>,

        #[arg(short, long)]
        username: Option<String>,
    },

    /// Build the share link for a program
    ShareLink {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        title: String,

        /// Host the link points at (defaults to SHARE_HOST, then www.vastdime.com)
        #[arg(long)]
        host: Option<String>,

        /// Copy the link to the clipboard through the terminal (OSC 52)
        #[arg(short, long)]
        copy: bool,
    },

    /// Configuration tools
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Load and validate the configuration from the environment
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Register { email, username } => register(email, username).await?,
        Commands::ShareLink {
            username,
            title,
            host,
            copy,
        } => share_link(username, title, host, copy)?,
        Commands::Config { action } => match action {
            ConfigAction::Check => check_config()?,
        },
    }

    Ok(())
}

/// Registers an account with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for email and username (unless given)
/// 2. Prompt for password and confirmation
/// 3. Validate locally
/// 4. Submit through the registration form
/// 5. Wait for the verification email request
async fn register(email: Option<String>, username: Option<String>) -> Result<()> {
    println!("{}", "📝 Register".bright_blue().bold());
    println!();

    let config = config::load_from_env()?;
    let timeout = config.http_timeout();
    let backend = HttpRegistrationBackend::new(&config.api_url, timeout)
        .context("Failed to build backend client")?;
    let identity =
        IdentityToolkitClient::new(&config.identity_url, &config.identity_api_key, timeout)
            .context("Failed to build identity provider client")?;
    let form = RegistrationForm::new(Arc::new(backend), Arc::new(identity), Arc::new(ConsoleNotifier));

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password = Password::new().with_prompt("Password").interact()?;
    let confirm_password = loop {
        let confirm = Password::new().with_prompt("Confirm password").interact()?;
        match form.validate_passwords_match(&password, &confirm) {
            Ok(()) => break confirm,
            Err(_) => println!("{}", "  Passwords do not match".red()),
        }
    };

    let request = RegistrationRequest::new(email, username, password, confirm_password);
    if let Err(errors) = request.validate() {
        for message in validation_messages(&errors) {
            println!("  {}", message.red());
        }
        anyhow::bail!("Registration form is invalid");
    }

    match form.submit(&request).await {
        SubmitOutcome::Registered(task) => {
            println!();
            println!("{}", "✅ Account created".green().bold());
            println!("{}", "  Requesting verification email...".bright_black());

            match task.wait().await {
                Ok(()) => println!(
                    "  Verification email sent to {}",
                    request.email.cyan()
                ),
                Err(e) => println!(
                    "  {} {}",
                    "Verification email not sent:".yellow(),
                    e
                ),
            }
            Ok(())
        }
        SubmitOutcome::Failed(e) if e.user_message().is_none() => {
            Err(anyhow::anyhow!("Registration failed: {e}"))
        }
        SubmitOutcome::InvalidUsername | SubmitOutcome::Failed(_) => {
            anyhow::bail!("Registration rejected")
        }
        SubmitOutcome::AlreadyInFlight => anyhow::bail!("Registration already in progress"),
    }
}

/// Prints the share link and optionally copies it.
fn share_link(username: String, title: String, host: Option<String>, copy: bool) -> Result<()> {
    let data = ShareLinkData::new(username, title);
    if let Err(errors) = data.validate() {
        anyhow::bail!(validation_messages(&errors).join(", "));
    }

    let host = host
        .or_else(|| std::env::var("SHARE_HOST").ok())
        .unwrap_or_else(|| DEFAULT_SHARE_HOST.to_string());

    let clipboard = copy.then(TerminalClipboard::stderr);
    write_share_link(
        &host,
        data,
        &mut io::stdout(),
        clipboard.as_ref().map(|c| c as &dyn Clipboard),
    )
}

/// Writes the link as a single line to `out`; the clipboard gets its own stream.
fn write_share_link(
    host: &str,
    data: ShareLinkData,
    out: &mut impl Write,
    clipboard: Option<&dyn Clipboard>,
) -> Result<()> {
    let (dialog, _handle) = ShareLinkDialog::initialize(host, data, Arc::new(ConsoleNotifier));
    writeln!(out, "{}", dialog.link())?;

    if let Some(clipboard) = clipboard {
        dialog.copy_link(clipboard);
    }
    dialog.close();

    Ok(())
}

/// Loads the configuration and prints it with secrets masked.
fn check_config() -> Result<()> {
    println!("{}", "🔧 Configuration".bright_blue().bold());
    println!();

    let config = config::load_from_env()?;

    println!("  Listen:            {}", config.listen_addr.cyan());
    println!("  Backend API:       {}", config.api_url.cyan());
    println!("  Identity provider: {}", config.identity_url.cyan());
    println!(
        "  Identity API key:  {}",
        mask_secret(&config.identity_api_key).bright_black()
    );
    println!("  Share host:        {}", config.share_host.cyan());
    println!(
        "  HTTP timeout:      {}",
        format!("{}s", config.http_timeout_seconds).cyan()
    );
    println!();
    println!("{}", "✅ Configuration is valid".green().bold());

    Ok(())
}
