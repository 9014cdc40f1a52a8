use anyhow::Result;
use clap::{Parser, Subcommand};
use plain::CommitDisplayFormat;
use plain::areas::repository::Repository;
use plain::commands::porcelain::log::LogOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directives
const LOG_ENV_VAR: &str = "PLAIN_LOG";

#[derive(Parser)]
#[command(
    name = "plain",
    version = "0.1.0",
    about = "Read the commit history of a git repository",
    long_about = "This is a read-only reader for git repositories, written in Rust. \
    It decodes loose objects straight from the object database and rebuilds \
    the commit graph reachable from a branch.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Path inside the repository (defaults to the current directory)"
    )]
    repo: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command decodes a loose object and prints its header. \
        Commits are printed field by field, other objects as their raw payload."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
    #[command(
        name = "log",
        about = "Show commit logs",
        long_about = "This command shows the commit history reachable from a branch, \
        newest first. Without a branch name the checked-out branch is used."
    )]
    Log {
        #[arg(index = 1, help = "The branch whose history to show")]
        branch: Option<String>,
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
        #[arg(long, help = "Show abbreviated commit hashes")]
        abbrev_commit: bool,
        #[arg(long, value_enum, default_value_t = CommitDisplayFormat::Medium, help = "The commit layout")]
        format: CommitDisplayFormat,
        #[arg(long, help = "Follow only the first parent of merge commits")]
        first_parent: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let start = match cli.repo {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let repository = Repository::discover(&start, Box::new(std::io::stdout()))?;

    match &cli.command {
        Commands::CatFile { sha } => repository.cat_file(sha)?,
        Commands::Log {
            branch,
            oneline,
            abbrev_commit,
            format,
            first_parent,
        } => {
            let opts = LogOptions {
                branch: branch.clone(),
                oneline: *oneline,
                abbrev_commit: *abbrev_commit,
                format: *format,
                first_parent: *first_parent,
            };

            repository.log(&opts)?
        }
    }

    Ok(())
}
