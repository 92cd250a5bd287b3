// folio: one-shot static portfolio page builder.
// Pipeline: fetch listing pages -> on-disk cache -> merge/filter -> render.

use std::path::PathBuf;

use clap::Parser;
use log::info;

mod cache;
mod error;
mod github;
mod site;

use error::Result;
use github::GitHubClient;
use site::FilterLists;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    about = "Build a static portfolio page from a GitHub repository listing"
)]
struct Cli {
    /// GitHub account whose repositories feed the page.
    #[arg(long, default_value = "soulteary")]
    user: String,

    /// Listing pages to fetch, 100 repositories each.
    #[arg(long, default_value_t = 4)]
    pages: u32,

    /// Directory holding one cached JSON file per listing page.
    #[arg(long, default_value = "cache")]
    cache_dir: PathBuf,

    /// Base template containing the project-list marker.
    #[arg(long, default_value = "template/index.html")]
    template: PathBuf,

    /// Output directory for index.html and projects.json.
    #[arg(long, default_value = "public")]
    out_dir: PathBuf,

    /// Directory of per-repository localization override files.
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    /// Flat JSON array of repository names to exclude.
    #[arg(long, default_value = "ignore.json")]
    ignore_file: PathBuf,

    /// Flat JSON array of fork names to keep anyway.
    #[arg(long, default_value = "forks.json")]
    forks_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let client = GitHubClient::from_env()?;
    cache::sync_pages(&client, &cli.user, &cli.cache_dir, cli.pages).await?;

    let lists = FilterLists::load(&cli.ignore_file, &cli.forks_file)?;
    let mut projects = site::merge_projects(&cli.cache_dir, &lists)?;
    info!("merged {} public projects", projects.len());

    site::sort_by_pushed(&mut projects);

    let template = std::fs::read_to_string(&cli.template)?;
    let fragments = site::render_fragments(&projects, &cli.config_dir)?;
    let page = site::render_page(&template, &fragments)?;
    site::write_outputs(&cli.out_dir, &page, &projects)?;

    Ok(())
}
