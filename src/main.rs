//! # Frecent CLI Entry Point
//!
//! Lists the contents of one or more root directories ranked by how
//! often each entry has been picked before, and records picks so future
//! listings surface them sooner. Designed to sit between a launcher menu
//! (dmenu, rofi, fzf) and the filesystem.
//!
//! ## Usage
//!
//! ```bash
//! # List the current directory, most-selected entries first
//! frecent
//!
//! # List several roots together
//! frecent --root ~/work --root ~/play
//!
//! # Keep only the last two path components in the printed list
//! frecent --root ~/work --components 2
//!
//! # Record a selection (typically wired to the launcher's choice)
//! frecent --root ~/work ~/work/notes
//! ```
//!
//! ## Architecture
//!
//! 1. **Roots**: resolve root locations from flags or the config file and
//!    expand `~`.
//! 2. **History**: load the selection counts from the backing file,
//!    canonicalizing against the roots' common prefix.
//! 3. **Listing**: enumerate one directory level per root and merge with
//!    the history into a ranked ordering, evicting entries that no longer
//!    exist.
//! 4. **Selection**: with a positional argument, increment that item's
//!    count and persist instead of listing.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use frecent::config::{default_history_file, Config};
use frecent::display;
use frecent::history::{rank, HistoryStore};
use frecent::listing;
use frecent::prefix;

/// Frecent - frecency-ranked directory listings for launcher menus
#[derive(Parser, Debug)]
#[command(name = "frecent")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "List directory contents ranked by selection frequency", long_about = None)]
struct Args {
    /// Item to record a selection for; lists ranked candidates when absent
    selection: Option<String>,

    /// Root location(s) to list; repeatable, each value may be comma-separated
    #[arg(short, long, value_name = "DIR")]
    root: Vec<String>,

    /// History file location
    #[arg(long, value_name = "FILE")]
    history_file: Option<PathBuf>,

    /// Number of trailing path components to keep in output (0 keeps full items)
    #[arg(short, long, value_name = "N")]
    components: Option<usize>,

    /// Echo the recorded selection back on stdout
    #[arg(short, long)]
    echo: bool,
}

/// Resolve the root locations from flags or config, splitting
/// comma-separated specs and expanding `~`.
fn resolve_roots(args: &Args, config: &Config) -> Vec<String> {
    let specs = if args.root.is_empty() {
        &config.roots
    } else {
        &args.root
    };

    let mut roots = Vec::new();
    for spec in specs {
        for root in listing::split_roots(spec) {
            roots.push(listing::expand_home(&root));
        }
    }
    roots
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load();

    let roots = resolve_roots(&args, &config);
    let prefix = prefix::longest_common_prefix(&roots)?;

    let history_file = match args.history_file.clone().or_else(|| config.history_file.clone()) {
        Some(path) => path,
        None => default_history_file()?,
    };
    let mut store = HistoryStore::load(history_file, prefix)
        .context("Failed to load selection history")?;

    match args.selection {
        Some(raw) => {
            store
                .record(&raw)
                .context("Failed to record selection")?;
            if args.echo {
                println!("{}", raw);
            }
        }
        None => {
            let live = listing::list_root_contents(&roots);
            let ranked = rank(&mut store, &live);
            if ranked.evicted > 0 {
                store
                    .persist()
                    .context("Failed to persist history after eviction")?;
            }

            let keep = args.components.unwrap_or(config.components);
            for item in &ranked.items {
                println!("{}", display::strip(item, keep));
            }
        }
    }

    Ok(())
}
