use crate::output::print_json;
use anyhow::Context;
use garden_core::config::GardenConfig;
use garden_core::health::HealthState;
use garden_core::narrative;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = GardenConfig::load(root).context("failed to load garden config")?;
    let paths = config.paths(root);
    let health = HealthState::load(&paths.state).context("failed to load lawn state")?;
    let story = narrative::build(&health, None);

    if json {
        let value = serde_json::json!({
            "health": health,
            "story": story,
        });
        return print_json(&value);
    }

    println!("{story}");
    println!();
    println!("Sprouting: {}", health.seeds.sprouting);
    println!("Failed:    {}", health.seeds.failed);
    match health.last_updated {
        Some(ts) => println!("Updated:   {}", ts.format("%Y-%m-%d %H:%M UTC")),
        None => println!("Updated:   never"),
    }
    Ok(())
}
