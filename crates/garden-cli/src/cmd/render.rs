use crate::output::{display_path, print_json};
use anyhow::Context;
use chrono::{Timelike, Utc};
use clap::Args;
use garden_core::config::GardenConfig;
use garden_core::pipeline;
use garden_core::render::TimeOfDay;
use std::path::Path;

#[derive(Args)]
pub struct RenderArgs {
    /// UTC hour to draw the sky for (default: now)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
    pub hour: Option<u32>,

    /// Print the SVG to stdout instead of writing files
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(root: &Path, args: RenderArgs, json: bool) -> anyhow::Result<()> {
    let config = GardenConfig::load(root).context("failed to load garden config")?;
    let hour = args.hour.unwrap_or_else(|| Utc::now().hour());
    let time = TimeOfDay::from_hour(hour)?;

    let report = pipeline::render_current(root, &config, time, args.dry_run)
        .context("failed to render garden")?;

    if json {
        return print_json(&report);
    }
    if args.dry_run {
        println!("{}", report.artwork.svg);
        return Ok(());
    }
    println!("{}", report.story.summary());
    for path in &report.written {
        println!("Wrote {}", display_path(root, path));
    }
    Ok(())
}
