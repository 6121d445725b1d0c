// Command-line front end for pull request review requests.
//
// Reads GITHUB_TOKEN (and optionally GITHUB_API_URL) like the library's
// `GitHubClient::from_env`, then runs one list/create/delete call and prints
// the response as JSON.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use futures::StreamExt;
use kodegen_review_requests::{
    GitHubClient, ListReviewRequestsOptions, ReviewRequestOptions,
    github::client::{API_URL_ENV, TOKEN_ENV},
};
use log::info;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "review-requests", version, about = "Manage pull request review requests")]
struct Cli {
    /// Personal access token
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    token: String,

    /// API root, for GitHub Enterprise
    #[arg(long, env = API_URL_ENV)]
    api_url: Option<String>,

    /// Accept header override (defaults to the symmetra preview media type)
    #[arg(long, global = true)]
    accept: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct PullArgs {
    /// Repository owner
    owner: String,
    /// Repository name
    repo: String,
    /// Pull request number
    number: u64,
}

#[derive(Args)]
struct ReviewerArgs {
    #[command(flatten)]
    pull: PullArgs,
    /// User login (repeatable)
    #[arg(long = "reviewer")]
    reviewers: Vec<String>,
    /// Team slug (repeatable)
    #[arg(long = "team-reviewer")]
    team_reviewers: Vec<String>,
}

#[derive(Subcommand)]
enum Command {
    /// List requested reviewers
    List {
        #[command(flatten)]
        pull: PullArgs,
        /// Print one login or team slug per line instead of the raw response
        #[arg(long)]
        entries: bool,
    },
    /// Request reviews
    Create(ReviewerArgs),
    /// Withdraw requested reviews
    Delete(ReviewerArgs),
}

impl ReviewerArgs {
    fn options(&self, accept: Option<String>) -> ReviewRequestOptions {
        ReviewRequestOptions {
            reviewers: Some(self.reviewers.clone()),
            team_reviewers: Some(self.team_reviewers.clone()),
            accept,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut builder = GitHubClient::builder().personal_token(cli.token);
    if let Some(uri) = cli.api_url {
        builder = builder.base_uri(uri);
    }
    let client = builder.build().context("Failed to create GitHub client")?;
    let review_requests = client.review_requests();

    let response = match cli.command {
        Command::List { pull, entries } => {
            let options = ListReviewRequestsOptions {
                accept: cli.accept,
            };
            if entries {
                let mut stream =
                    review_requests.stream(pull.owner, pull.repo, pull.number, options);
                while let Some(entry) = stream.next().await {
                    let entry = entry.context("GitHub API error")?;
                    println!("{}", entry_label(&entry));
                }
                return Ok(());
            }
            review_requests
                .list(pull.owner, pull.repo, pull.number, options)
                .await
                .context("Task channel error")?
                .context("GitHub API error")?
        }
        Command::Create(args) => {
            info!(
                "Requesting {} reviewer(s) and {} team(s) on {}/{}#{}",
                args.reviewers.len(),
                args.team_reviewers.len(),
                args.pull.owner,
                args.pull.repo,
                args.pull.number
            );
            let options = args.options(cli.accept);
            review_requests
                .create(args.pull.owner, args.pull.repo, args.pull.number, options)
                .await
                .context("Task channel error")?
                .context("GitHub API error")?
        }
        Command::Delete(args) => {
            let options = args.options(cli.accept);
            review_requests
                .delete(args.pull.owner, args.pull.repo, args.pull.number, options)
                .await
                .context("Task channel error")?
                .context("GitHub API error")?
        }
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Users are labelled by login, teams by slug.
fn entry_label(entry: &Value) -> String {
    entry
        .get("login")
        .or_else(|| entry.get("slug"))
        .and_then(Value::as_str)
        .map_or_else(|| entry.to_string(), str::to_string)
}
