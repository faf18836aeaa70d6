//! census: an interactive manager for a file-backed person collection.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use census::collection::PersonCollection;
use census::repl;
use census::session::Session;
use census::storage::FileStore;

#[derive(Parser)]
#[command(name = "census", version, about = "Interactive person record manager")]
struct Cli {
    /// JSON file holding the record set.
    #[arg(long, env = "CENSUS_FILE")]
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("census=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = FileStore::new(&cli.file);
    let mut collection = PersonCollection::new();
    match store
        .load()
        .context("cannot load the collection; refusing to start from unknown state")?
    {
        Some(records) => {
            collection
                .replace(records)
                .context("loaded record set is inconsistent")?;
        }
        None => {
            println!(
                "no file at {}; starting with an empty collection",
                cli.file.display()
            );
        }
    }

    let registry = repl::handlers::default_registry();
    let mut session = Session::interactive(collection, store)?;
    repl::run(&registry, &mut session);

    Ok(())
}
