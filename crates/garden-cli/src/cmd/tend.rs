use crate::output::{display_path, print_json};
use anyhow::Context;
use chrono::Utc;
use clap::Args;
use garden_core::config::GardenConfig;
use garden_core::event::{EventContext, DEFAULT_EVENT, DEFAULT_REF};
use garden_core::pipeline::{self, TendOptions};
use std::path::Path;

#[derive(Args)]
pub struct TendArgs {
    /// Triggering event: a GitHub event name or an event key such as pr-closed
    #[arg(long, env = "GITHUB_EVENT_NAME", default_value = DEFAULT_EVENT)]
    pub event: String,

    /// Ref the event fired on; PR/issue numbers are read from it
    #[arg(long, env = "GITHUB_REF_NAME", default_value = DEFAULT_REF)]
    pub ref_name: String,

    /// Seed the random source for a reproducible run
    #[arg(long, env = "GARDEN_SEED")]
    pub seed: Option<u64>,

    /// Show what would change without writing any files
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(root: &Path, args: TendArgs, json: bool) -> anyhow::Result<()> {
    let config = GardenConfig::load(root).context("failed to load garden config")?;
    let ctx = EventContext::resolve(Some(&args.event), Some(&args.ref_name));
    let mut rng = super::rng_from(args.seed);
    let opts = TendOptions {
        now: Utc::now(),
        dry_run: args.dry_run,
    };

    let report = pipeline::tend(root, &config, &ctx, &mut rng, opts)
        .with_context(|| format!("failed to tend garden for event '{}'", ctx.event))?;

    if json {
        return print_json(&report);
    }

    match report.outcome {
        Some(outcome) => println!("Event: {} ({outcome})", report.event),
        None => println!("Event: {}", report.event),
    }
    println!("{}", report.story);
    if args.dry_run {
        if let Some(marker) = &report.marker {
            println!("\nWould write marker: {}", display_path(root, marker));
        }
        println!("Dry run: nothing written.");
    } else {
        let written: Vec<String> = report
            .written
            .iter()
            .map(|p| display_path(root, p))
            .collect();
        println!("\nWrote: {}", written.join(", "));
    }
    Ok(())
}
