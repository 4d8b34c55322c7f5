//! One run of the garden: event in, state and artwork out.

use crate::config::GardenConfig;
use crate::error::Result;
use crate::event::{EventContext, EventKey};
use crate::health::{HealthState, PrOutcome};
use crate::markers;
use crate::narrative::{self, Narrative, Sprout};
use crate::paths::GardenPaths;
use crate::render::{self, TimeOfDay};
use chrono::{DateTime, Timelike, Utc};
use rand::Rng;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy)]
pub struct TendOptions {
    pub now: DateTime<Utc>,
    /// Compute everything but write nothing.
    pub dry_run: bool,
}

/// The SVG and markdown page produced for a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub svg: String,
    pub markdown: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TendReport {
    pub event: EventKey,
    pub context: EventContext,
    pub outcome: Option<PrOutcome>,
    pub health: HealthState,
    pub story: Narrative,
    pub marker: Option<PathBuf>,
    pub written: Vec<PathBuf>,
    #[serde(skip)]
    pub artwork: Artwork,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderReport {
    pub health: HealthState,
    pub story: Narrative,
    pub time: TimeOfDay,
    pub written: Vec<PathBuf>,
    #[serde(skip)]
    pub artwork: Artwork,
}

/// Draw the artwork for a state. Pure.
pub fn draw(
    config: &GardenConfig,
    paths: &GardenPaths,
    health: &HealthState,
    story: &Narrative,
    time: TimeOfDay,
) -> Artwork {
    Artwork {
        svg: render::svg::render(health, story, time),
        markdown: render::markdown::render(&config.title, &paths.svg_link(), story),
    }
}

/// React to one repository event.
pub fn tend<R: Rng + ?Sized>(
    root: &Path,
    config: &GardenConfig,
    ctx: &EventContext,
    rng: &mut R,
    opts: TendOptions,
) -> Result<TendReport> {
    config.check()?;
    let paths = config.paths(root);
    let key = ctx.key();
    tracing::debug!(event = %ctx.event, ref_name = %ctx.ref_name, key = %key, "tending garden");

    // Read before any write so a bad state file fails the run cleanly.
    let mut health = HealthState::load(&paths.state)?;

    let sprout = if key.is_pr() {
        Some(Sprout::Seed)
    } else if key.is_issue() {
        Some(Sprout::Weed)
    } else {
        None
    };

    let mut written = Vec::new();
    let mut recent = None;
    let mut marker_path = None;
    if let Some(kind) = sprout {
        recent = Some(narrative::recent_event(kind, ctx.id.as_deref(), rng));
        let marker = markers::marker(&paths, kind, ctx.id.as_deref(), opts.now);
        if !opts.dry_run {
            markers::write(&paths, &marker)?;
            written.push(marker.path.clone());
        }
        marker_path = Some(marker.path);
    }

    let outcome = health.apply(key, rng, opts.now);
    if let Some(outcome) = outcome {
        tracing::info!(%outcome, "pull request closed");
    }
    if !opts.dry_run {
        health.save(&paths.state)?;
        written.push(paths.state.clone());
    }

    let story = narrative::build(&health, recent.as_deref());
    let time = TimeOfDay::from_hour(opts.now.hour())?;
    let artwork = draw(config, &paths, &health, &story, time);
    if !opts.dry_run {
        written.extend(write_artwork(&paths, &artwork)?);
    }

    Ok(TendReport {
        event: key,
        context: ctx.clone(),
        outcome,
        health,
        story,
        marker: marker_path,
        written,
        artwork,
    })
}

/// Redraw the artwork from the stored state without touching it.
pub fn render_current(
    root: &Path,
    config: &GardenConfig,
    time: TimeOfDay,
    dry_run: bool,
) -> Result<RenderReport> {
    config.check()?;
    let paths = config.paths(root);
    let health = HealthState::load(&paths.state)?;
    let story = narrative::build(&health, None);
    let artwork = draw(config, &paths, &health, &story, time);
    let written = if dry_run {
        Vec::new()
    } else {
        write_artwork(&paths, &artwork)?
    };
    Ok(RenderReport {
        health,
        story,
        time,
        written,
        artwork,
    })
}

fn write_artwork(paths: &GardenPaths, artwork: &Artwork) -> Result<Vec<PathBuf>> {
    crate::io::atomic_write(&paths.svg, artwork.svg.as_bytes())?;
    crate::io::atomic_write(&paths.markdown, artwork.markdown.as_bytes())?;
    for path in [&paths.svg, &paths.markdown] {
        tracing::info!(path = %path.display(), "wrote");
    }
    Ok(vec![paths.svg.clone(), paths.markdown.clone()])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
