//! Clap argument types and config overrides.

use clap::{Args, Parser, ValueEnum};

use roster::config::Config;
use roster::models::{Draft, DraftField, UserId};
use roster::session::SessionState;

/// Admin client for a REST user directory.
#[derive(Parser, Debug)]
#[command(name = "roster", version = roster::constants::VERSION)]
pub struct Cli {
    #[command(flatten)]
    pub api: ApiArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection overrides, applied on top of config files and environment.
#[derive(Args, Debug, Default)]
pub struct ApiArgs {
    /// Base URL of the user directory API.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Number of users fetched per page.
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// List users page by page.
    List(ListArgs),

    /// Create a user.
    Add(AddArgs),

    /// Edit an existing user; omitted fields keep their current value.
    Edit(EditArgs),

    /// Delete a user.
    Delete(DeleteArgs),

    /// Validate user fields without contacting the API.
    Check(DraftArgs),

    /// Print the effective configuration.
    Config,

    /// Print version and build information.
    Version,
}

/// Arguments for the `list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Number of pages to load.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,

    /// Keep loading until the directory is exhausted.
    #[arg(long, default_value_t = false, conflicts_with = "pages")]
    pub all: bool,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Arguments for the `add` subcommand.
#[derive(Args, Debug)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: DraftArgs,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Arguments for the `edit` subcommand.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Id of the user to edit.
    pub id: UserId,

    #[command(flatten)]
    pub fields: DraftArgs,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Arguments for the `delete` subcommand.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Id of the user to delete.
    pub id: UserId,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// User fields. Missing ones are left to the validator to report.
#[derive(Args, Debug, Default)]
pub struct DraftArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub department: Option<String>,
}

impl DraftArgs {
    /// The fields given on the command line.
    pub fn provided(&self) -> Vec<(DraftField, &str)> {
        [
            (DraftField::FirstName, &self.first_name),
            (DraftField::LastName, &self.last_name),
            (DraftField::Email, &self.email),
            (DraftField::Department, &self.department),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }

    /// Build a fresh draft from the given fields.
    pub fn to_draft(&self) -> Draft {
        let mut draft = Draft::default();
        for (field, value) in self.provided() {
            draft.set(field, value);
        }
        draft
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render a session using the renderer for this format.
    pub fn render(&self, state: &SessionState) -> String {
        use roster::output::SessionRenderer;
        match self {
            OutputFormat::Terminal => roster::output::terminal::TerminalRenderer.render(state),
            OutputFormat::Json => roster::output::json::JsonRenderer.render(state),
        }
    }
}

impl ApiArgs {
    /// Apply CLI overrides, the highest-priority config layer.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref url) = self.base_url {
            config.api.base_url = url.clone();
        }
        if let Some(size) = self.page_size {
            config.pagination.page_size = size;
        }
        if let Some(secs) = self.timeout {
            config.api.timeout_secs = secs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_defaults() {
        let cli = Cli::try_parse_from(["roster", "list"]).unwrap();
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.pages, 1);
                assert!(!args.all);
                assert_eq!(args.format, OutputFormat::Terminal);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn list_all_conflicts_with_pages() {
        assert!(Cli::try_parse_from(["roster", "list", "--all", "--pages", "3"]).is_err());
    }

    #[test]
    fn zero_page_size_rejected() {
        assert!(Cli::try_parse_from(["roster", "--page-size", "0", "list"]).is_err());
    }

    #[test]
    fn parse_edit_with_partial_fields() {
        let cli = Cli::try_parse_from([
            "roster",
            "edit",
            "3",
            "--email",
            "new@example.com",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Command::Edit(args) => {
                assert_eq!(args.id, 3);
                assert_eq!(args.format, OutputFormat::Json);
                assert_eq!(
                    args.fields.provided(),
                    vec![(DraftField::Email, "new@example.com")]
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["roster", "delete", "2", "--base-url", "http://localhost:3000"])
                .unwrap();
        assert_eq!(cli.api.base_url.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn to_draft_fills_given_fields_only() {
        let args = DraftArgs {
            first_name: Some("Ada".into()),
            department: Some("Eng".into()),
            ..DraftArgs::default()
        };
        let draft = args.to_draft();
        assert_eq!(draft.first_name, "Ada");
        assert_eq!(draft.department, "Eng");
        assert_eq!(draft.email, "");
        assert_eq!(draft.id, None);
    }

    #[test]
    fn api_args_override_config() {
        let args = ApiArgs {
            base_url: Some("http://cli".into()),
            page_size: Some(2),
            timeout: None,
        };
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config.api.base_url, "http://cli");
        assert_eq!(config.pagination.page_size, 2);
        assert_eq!(config.api.timeout_secs, 10);
    }
}
