use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use offerdesk_offer::{classify_and_sort_with_links, Bucket, SortKey};
use offerdesk_store::{Config, Snapshot};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Print the offers list for one tab of an offers snapshot
#[derive(Debug, Parser)]
#[command(name = "offerdesk", version)]
struct Args {
    /// JSON document with `offers` and `tiers`
    snapshot: PathBuf,

    /// Tab to show: active or archived
    #[arg(default_value = "active")]
    bucket: String,

    /// Override the configured sort key (date-added, name, redemptions)
    #[arg(long)]
    sort: Option<String>,

    /// Flip the configured sort direction
    #[arg(long)]
    reverse: bool,

    /// Directory holding default/{RUN_MODE}/local config files
    #[arg(long, env = "OFFERDESK_CONFIG_DIR", default_value = "config")]
    config_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "offerdesk=info,offerdesk_offer=info,offerdesk_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = Config::load_from(&args.config_dir).context("Failed to load config")?;
    let bucket: Bucket = args.bucket.parse()?;

    let mut sort = config.listing.sort_preference()?;
    if let Some(key) = args.sort.as_deref() {
        sort = sort.with_key(key.parse::<SortKey>()?);
    }
    if args.reverse {
        sort = sort.toggled();
    }

    let snapshot = Snapshot::load(&args.snapshot)?;

    let listing = classify_and_sort_with_links(
        &snapshot.offers,
        snapshot.tiers(),
        bucket,
        sort,
        &config.link_settings(),
    );
    tracing::info!("{}: {}", listing.title(), listing.count_label());

    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}
