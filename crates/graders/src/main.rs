use std::time::Duration;

use anyhow::{Context, Error};
use clap::{ArgAction, Parser};
use graders::{
    assign,
    config::{DEFAULT_API_URL, DEFAULT_PROJECT, DEFAULT_TOKEN},
    telemetry, GitHubPager, GradingConfig, ListingConfig, RandomShuffler,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};


/// Random assignment of graders to students
#[derive(Debug, Parser)]
#[command(name = "github-graders", version, about, long_about = None)]
struct Cli {
    /// GitHub API token
    #[arg(long, env = "GITHUB_TOKEN", default_value = DEFAULT_TOKEN, hide_env_values = true)]
    token: String,

    /// GitHub project (organization) to scan
    #[arg(long, env = "GITHUB_PROJECT", default_value = DEFAULT_PROJECT)]
    project: String,

    /// Prefix on projects to match (default: match all projects)
    #[arg(long, default_value = "")]
    prefix: String,

    /// Graders, preferably their GitHub IDs
    #[arg(
        long,
        env = "GRADERS",
        value_delimiter = ',',
        default_value = "alice,bob,charlie,dorothy,eve,frank"
    )]
    graders: Vec<String>,

    /// GitHub IDs that are never graded, e.g. the instructor
    #[arg(long, env = "GRADERS_IGNORE", value_delimiter = ',', default_value = "danwallach")]
    ignore: Vec<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Seed for a reproducible assignment
    #[arg(long)]
    seed: Option<u64>,

    /// Show debug diagnostics
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

impl Cli {
    fn grading_config(&self) -> GradingConfig {
        GradingConfig::new(&self.prefix, &self.graders, &self.ignore)
    }

    fn listing_config(&self) -> ListingConfig {
        ListingConfig {
            token: self.token.clone(),
            project: self.project.clone(),
            api_url: self.api_url.clone(),
        }
    }

    fn shuffler(&self) -> RandomShuffler<rand::rngs::StdRng> {
        match self.seed {
            Some(seed) => RandomShuffler::seeded(seed),
            None => RandomShuffler::from_entropy(),
        }
    }
}

fn page_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    // A missing .env file is fine, everything can come from flags instead.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let spinner = page_spinner();
    telemetry::init_local_telemetry(cli.verbose, spinner.clone())?;

    let listing = cli.listing_config();
    if listing.uses_placeholders() {
        warn!("The GitHub token or project is not configured, the listing will most likely fail");
    }

    let config = cli.grading_config();
    info!(
        project = %listing.project,
        prefix = config.prefix(),
        graders = config.graders().len(),
        "Assigning graders"
    );

    let pager = GitHubPager::new(&listing).context("Failed to create the GitHub client")?;
    let mut shuffler = cli.shuffler();

    spinner.set_message("Getting repo list from GitHub");
    spinner.enable_steady_tick(Duration::from_millis(120));
    let result = assign(&pager, &config, &mut shuffler, |page, count| {
        spinner.set_message(format!("Getting repo list from GitHub, page {page}: {count} repos"));
        spinner.tick();
    })
    .await;
    spinner.finish_and_clear();

    let assignment = result.context("Failed to assign graders")?;
    print!("{}", assignment);

    Ok(())
}
