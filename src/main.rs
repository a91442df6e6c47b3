//! roster — admin client for a REST user directory.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use roster::client;
use roster::config;
use roster::constants;
use roster::env;
use roster::models;
use roster::session;
use roster::validate;

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cli::args::{
    AddArgs, ApiArgs, Cli, Command, DeleteArgs, DraftArgs, EditArgs, ListArgs, OutputFormat,
};
use config::Config;
use env::Env;
use models::UserId;
use session::UserSession;

#[tokio::main]
async fn main() {
    cli::init_logging();

    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::List(args) => run_list(&cli.api, args).await,
        Command::Add(args) => run_add(&cli.api, args).await,
        Command::Edit(args) => run_edit(&cli.api, args).await,
        Command::Delete(args) => run_delete(&cli.api, args).await,
        Command::Check(args) => run_check(&args),
        Command::Config => run_config(&cli.api),
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Load layered config and apply CLI overrides.
fn load_config(api: &ApiArgs) -> Result<Config> {
    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let mut config =
        Config::load(Some(&cwd), &Env::real()).context("failed to load configuration")?;
    api.apply(&mut config);
    Ok(config)
}

/// Build a session backed by the HTTP client.
fn open_session(api: &ApiArgs) -> Result<UserSession> {
    let config = load_config(api)?;
    let http = client::HttpUserApi::new(&config.api).context("failed to build HTTP client")?;
    tracing::debug!(base_url = http.base_url(), "using user directory");
    Ok(UserSession::new(Arc::new(http), config.pagination.page_size))
}

/// Print the effective configuration as TOML.
fn run_config(api: &ApiArgs) -> Result<()> {
    let config = load_config(api)?;
    print!("{}", config.to_toml().context("failed to render configuration")?);
    Ok(())
}

/// Print the session, banner included, then surface the operation's outcome.
///
/// A failed operation still shows the last loaded list; the exit code
/// comes from the returned error.
fn report(format: OutputFormat, session: &UserSession, outcome: Result<()>) -> Result<()> {
    print!("{}", format.render(session.state()));
    outcome
}

/// List users, loading as many pages as requested.
async fn run_list(api: &ApiArgs, args: ListArgs) -> Result<()> {
    let mut session = open_session(api)?;
    let outcome = load_pages(&mut session, &args).await;
    report(args.format, &session, outcome)
}

async fn load_pages(session: &mut UserSession, args: &ListArgs) -> Result<()> {
    session.mount().await?;

    let mut loaded = 1;
    while args.all || loaded < args.pages {
        if !session.load_more().await? {
            break;
        }
        loaded += 1;
    }
    Ok(())
}

/// Create a user from the given fields.
async fn run_add(api: &ApiArgs, args: AddArgs) -> Result<()> {
    let mut session = open_session(api)?;
    for (field, value) in args.fields.provided() {
        session.set_field(field, value);
    }
    let outcome = session.submit().await.map_err(Into::into);
    report(args.format, &session, outcome)
}

/// Edit a user, paging through the list until it is found.
async fn run_edit(api: &ApiArgs, args: EditArgs) -> Result<()> {
    let mut session = open_session(api)?;
    let outcome = edit_user(&mut session, &args).await;
    report(args.format, &session, outcome)
}

async fn edit_user(session: &mut UserSession, args: &EditArgs) -> Result<()> {
    session.mount().await?;

    while !session.edit(args.id) {
        if !session.load_more().await? {
            bail!("user {} not found", args.id);
        }
    }
    for (field, value) in args.fields.provided() {
        session.set_field(field, value);
    }
    session.submit().await?;
    Ok(())
}

/// Delete a user and show the reloaded list.
async fn run_delete(api: &ApiArgs, args: DeleteArgs) -> Result<()> {
    let mut session = open_session(api)?;
    let outcome = delete_user(&mut session, args.id).await;
    report(args.format, &session, outcome)
}

async fn delete_user(session: &mut UserSession, id: UserId) -> Result<()> {
    session.mount().await?;
    session.delete(id).await?;
    Ok(())
}

/// Run the validator on the given fields without touching the API.
fn run_check(args: &DraftArgs) -> Result<()> {
    use colored::Colorize;

    match validate::validate(&args.to_draft()) {
        Ok(()) => {
            println!("  {} {}", "✔".green().bold(), "Fields are valid.".green());
            Ok(())
        }
        Err(e) => bail!("{} {}", "✖".red().bold(), e.to_string().red()),
    }
}
