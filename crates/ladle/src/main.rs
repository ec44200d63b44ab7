//! Ladle - command line entry point

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ladle::{Config, Criteria, NodeView};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ladle")]
#[command(about = "Find elements and text in HTML documents")]
#[command(version)]
struct Cli {
    /// JSON file with `headers`, `cookies` and `debug`
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Abort on the first failure
    #[arg(long, global = true)]
    debug: bool,

    /// Extra request header
    #[arg(short = 'H', long = "header", value_name = "NAME:VALUE", global = true)]
    headers: Vec<String>,

    /// Extra request cookie
    #[arg(short = 'b', long = "cookie", value_name = "NAME=VALUE", global = true)]
    cookies: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the text of the first matching element
    Find(QueryArgs),
    /// Print the text of every matching element, one per line
    FindAll(QueryArgs),
    /// Print all text of the document
    Text {
        /// URL or file path
        source: String,
    },
    /// Print the attributes of the first element with the given tag
    Attrs {
        /// URL or file path
        source: String,
        tag: String,
    },
}

#[derive(Args)]
struct QueryArgs {
    /// URL or file path
    source: String,

    /// TAG, or TAG ATTRIBUTE VALUE
    #[arg(required = true, num_args = 1..)]
    criteria: Vec<String>,

    /// Compare attribute values exactly
    #[arg(long)]
    strict: bool,
}

impl QueryArgs {
    fn criteria(&self) -> Result<Criteria, ladle::QueryError> {
        let criteria = Criteria::from_args(self.criteria.as_slice())?;
        Ok(if self.strict { criteria.strict() } else { criteria })
    }
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                Config::from_json(&json)?
            }
            None => Config::default(),
        };

        for header in &self.headers {
            let (name, value) = header
                .split_once(':')
                .with_context(|| format!("header `{}` is not NAME:VALUE", header))?;
            config = config.header(name.trim(), value.trim());
        }
        for cookie in &self.cookies {
            let (name, value) = cookie
                .split_once('=')
                .with_context(|| format!("cookie `{}` is not NAME=VALUE", cookie))?;
            config = config.cookie(name, value);
        }
        if self.debug {
            config = config.debug(true);
        }
        Ok(config)
    }
}

fn load(source: &str, config: &Config) -> Result<String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        Ok(ladle::get(source, config)?)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("reading {}", source))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;

    let source = match &cli.command {
        Commands::Find(args) | Commands::FindAll(args) => &args.source,
        Commands::Text { source } | Commands::Attrs { source, .. } => source,
    };
    let html = load(source, &config)?;
    let doc = config.check(ladle::parse(&html))?;
    let root = config.check(NodeView::root(&doc))?;

    match &cli.command {
        Commands::Find(args) => {
            let criteria = config.check(args.criteria())?;
            let found = config.check(root.find_matching(&criteria))?;
            println!("{}", found.full_text());
        }
        Commands::FindAll(args) => {
            let criteria = config.check(args.criteria())?;
            for found in root.find_all_matching(&criteria) {
                println!("{}", found.full_text());
            }
        }
        Commands::Text { .. } => {
            println!("{}", root.full_text());
        }
        Commands::Attrs { tag, .. } => {
            let found = config.check(root.find(tag.as_str()))?;
            for (name, value) in config.check(found.attrs())? {
                println!("{}={}", name, value);
            }
        }
    }

    Ok(())
}
