//! Plant haiku, for when the garden wants to say something nice.

use rand::seq::SliceRandom;
use rand::Rng;

pub type Haiku = [&'static str; 3];

pub const FOOTER: &str = "tap to cycle—water your code";
const RULE_WIDTH: usize = 36;

pub const HAIKUS: &[Haiku] = &[
    ["Moss on quiet stone", "whispers photosynthesis", "gnomes nod approving"],
    ["Sunflower tall, bold", "tracks meetings across the sky", "minutes become seeds"],
    ["Fern curls like question", "unfurls answers at sunrise", "shade applauds softly"],
    ["Cactus keeps receipts", "of every drop ever spent", "budget: succulent"],
    ["Mint invades the pot", "writes forked roots into history", "tea accepts the PR"],
    ["Bamboo push commits", "fast green continuous deploy", "pandas run the tests"],
    ["Dandelion puff", "issues opened to the wind", "labels: wish, pending"],
    ["Aloe, calm and cool", "handles hotfixes with gel", "blameless root-cause: sun"],
    ["Thyme takes its own time", "schedules flavor in sprints", "retros taste better"],
    ["Peony debugs", "petals step through perfumed code", "spring ships v1.0"],
];

const EMOJI: &[&str] = &["🌱", "🌿", "🍃", "🌵", "🌼", "🌷", "🌾", "🌻"];

pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static Haiku {
    HAIKUS.choose(rng).unwrap_or(&HAIKUS[0])
}

pub fn title<R: Rng + ?Sized>(rng: &mut R) -> String {
    let emoji = EMOJI.choose(rng).copied().unwrap_or("🌱");
    format!("{emoji} Plant Haiku")
}

/// The haiku framed between two rules, ready for a terminal.
pub fn boxed(title: &str, haiku: &Haiku) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let body = [title, "", haiku[0], haiku[1], haiku[2], "", FOOTER].join("\n");
    format!("\n{rule}\n{body}\n{rule}\n")
}
