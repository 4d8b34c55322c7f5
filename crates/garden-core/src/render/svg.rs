use super::{panel, TimeOfDay, HEIGHT, HORIZON, MAX_MARKERS, WIDTH};
use crate::health::HealthState;
use crate::narrative::Narrative;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const GRASS_SPACING: usize = 10;
const STAR_COUNT: usize = 24;

const PETALS: &[&str] = &["#F06292", "#BA68C8", "#FFB74D", "#FFFFFF", "#E57373"];

/// Render the lawn as a self-contained SVG document.
///
/// The decorative layer is seeded from the health index, so the same state
/// at the same time of day always produces the same bytes.
pub fn render(health: &HealthState, story: &Narrative, time: TimeOfDay) -> String {
    let lush = health.lushness_percent.min(100);
    let scene = Scene::grow(health);

    let mut out = vec![format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{WIDTH}' height='{HEIGHT}' viewBox='0 0 {WIDTH} {HEIGHT}'>"
    )];
    out.push(sky(time));
    out.push(format!(
        "<rect x='0' y='0' width='{WIDTH}' height='{HORIZON}' fill='url(#sky)' />"
    ));
    out.push(format!(
        "<rect x='0' y='{HORIZON}' width='{WIDTH}' height='{}' fill='{}' />",
        HEIGHT - HORIZON,
        ground_color(lush)
    ));

    match time {
        TimeOfDay::Day => {
            out.push("<circle class='sun' cx='80' cy='60' r='28' fill='#FFD54F' opacity='0.9' />".to_string())
        }
        TimeOfDay::Night => {
            out.push("<circle class='moon' cx='80' cy='60' r='22' fill='#ECEFF1' opacity='0.9' />".to_string());
            out.extend(scene.stars.iter().map(|s| {
                format!(
                    "<circle class='star' cx='{}' cy='{}' r='{}' fill='#FFFDE7' opacity='0.8' />",
                    s.x, s.y, s.r
                )
            }));
        }
    }

    out.extend(scene.grass.iter().map(|(x, h)| {
        format!(
            "<path d='M{x},{HEIGHT} q5,-{h} 0,-{}' stroke='rgba(20,80,20,0.6)' stroke-width='2' fill='none' />",
            h * 2
        )
    }));
    out.extend(scene.flowers.iter().map(flower));
    out.extend(scene.weeds.iter().map(|w| weed(w.x, w.y)));

    out.push(panel::panel(story));
    out.push("</svg>".to_string());
    out.join("\n")
}

/// Lusher lawns are greener.
pub fn ground_color(lushness: u32) -> String {
    let green = (100.0 + f64::from(lushness) * 1.5).clamp(0.0, 255.0) as u32;
    format!("rgb(30,{green},60)")
}

fn sky(time: TimeOfDay) -> String {
    let (top, bottom) = match time {
        TimeOfDay::Day => ("#87CEEB", "#E0F7FA"),
        TimeOfDay::Night => ("#0B1D3A", "#2C3E66"),
    };
    [
        "<defs>".to_string(),
        "  <linearGradient id='sky' x1='0' y1='0' x2='0' y2='1'>".to_string(),
        format!("    <stop offset='0%' stop-color='{top}' />"),
        format!("    <stop offset='100%' stop-color='{bottom}' />"),
        "  </linearGradient>".to_string(),
        "</defs>".to_string(),
    ]
    .join("\n")
}

// ---------------------------------------------------------------------------
// Decorative layer
// ---------------------------------------------------------------------------

struct Star {
    x: u32,
    y: u32,
    r: u32,
}

struct Marker {
    x: u32,
    y: u32,
    petal: &'static str,
}

/// Positions for everything procedurally placed. Stars are drawn last from
/// the stream so the lawn itself looks the same by day and by night.
struct Scene {
    grass: Vec<(usize, u32)>,
    flowers: Vec<Marker>,
    weeds: Vec<Marker>,
    stars: Vec<Star>,
}

impl Scene {
    fn grow(health: &HealthState) -> Self {
        let mut rng = StdRng::seed_from_u64(u64::from(health.lawn_health_index));
        let lush = health.lushness_percent.min(100);

        let grass = (0..WIDTH as usize)
            .step_by(GRASS_SPACING)
            .map(|x| (x, rng.gen_range(10..=10 + lush / 2)))
            .collect();
        let flowers = (0..health.seeds.count.min(MAX_MARKERS))
            .map(|_| ground_marker(&mut rng))
            .collect();
        let weeds = (0..health.weeds.count.min(MAX_MARKERS))
            .map(|_| ground_marker(&mut rng))
            .collect();
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.gen_range(0..WIDTH),
                y: rng.gen_range(5..HORIZON - 20),
                r: rng.gen_range(1..=2),
            })
            .collect();

        Self {
            grass,
            flowers,
            weeds,
            stars,
        }
    }
}

fn ground_marker(rng: &mut StdRng) -> Marker {
    Marker {
        x: rng.gen_range(20..=WIDTH - 20),
        y: rng.gen_range(HORIZON + 25..=HEIGHT - 15),
        petal: PETALS.choose(rng).copied().unwrap_or("#FFFFFF"),
    }
}

fn flower(m: &Marker) -> String {
    let (x, y, petal) = (m.x, m.y, m.petal);
    [
        format!("<g class='flower' transform='translate({x},{y})'>"),
        "  <path d='M0,0 l0,14' stroke='#2E7D32' stroke-width='2' />".to_string(),
        format!("  <circle cx='0' cy='-5' r='4' fill='{petal}' />"),
        format!("  <circle cx='5' cy='0' r='4' fill='{petal}' />"),
        format!("  <circle cx='0' cy='5' r='4' fill='{petal}' />"),
        format!("  <circle cx='-5' cy='0' r='4' fill='{petal}' />"),
        "  <circle cx='0' cy='0' r='3' fill='#FFEB3B' />".to_string(),
        "</g>".to_string(),
    ]
    .join("\n")
}

fn weed(x: u32, y: u32) -> String {
    format!(
        "<path class='weed' d='M{x},{y} l-6,-14 l4,6 l2,-16 l2,16 l4,-6 l-6,14 z' fill='#827717' stroke='#4E342E' stroke-width='1' />"
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrative;
    use quick_xml::events::Event;
    use quick_xml::Reader;

    /// Walks the document and fails on mismatched or unclosed tags.
    fn assert_well_formed(svg: &str) {
        let mut reader = Reader::from_str(svg);
        let mut depth = 0i32;
        loop {
            match reader.read_event() {
                Ok(Event::Start(_)) => depth += 1,
                Ok(Event::End(_)) => {
                    depth -= 1;
                    assert!(depth >= 0, "closing tag without opener");
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => panic!("malformed svg at {}: {e}", reader.buffer_position()),
            }
        }
        assert_eq!(depth, 0, "unclosed tags");
    }

    fn lawn(index: u32, lushness: u32, seeds: u32, weeds: u32) -> HealthState {
        let mut h = HealthState::default();
        h.lawn_health_index = index;
        h.lushness_percent = lushness;
        h.seeds.count = seeds;
        h.weeds.count = weeds;
        h
    }

    fn draw(health: &HealthState, time: TimeOfDay) -> String {
        let story = narrative::build(health, Some("🌾 A new weed has appeared: Issue #3. <b>& friends</b>"));
        render(health, &story, time)
    }

    #[test]
    fn well_formed_for_extreme_states() {
        for (index, lush) in [(0, 0), (100, 100), (50, 0), (0, 100), (70, 60)] {
            for counts in [(0, 0), (1, 1), (12, 12), (u32::MAX, u32::MAX)] {
                let health = lawn(index, lush, counts.0, counts.1);
                assert_well_formed(&draw(&health, TimeOfDay::Day));
                assert_well_formed(&draw(&health, TimeOfDay::Night));
            }
        }
    }

    #[test]
    fn markers_capped_at_twelve() {
        let svg = draw(&lawn(40, 40, 500, 900), TimeOfDay::Day);
        assert_eq!(svg.matches("class='flower'").count(), 12);
        assert_eq!(svg.matches("class='weed'").count(), 12);

        let svg = draw(&lawn(40, 40, 3, 0), TimeOfDay::Day);
        assert_eq!(svg.matches("class='flower'").count(), 3);
        assert_eq!(svg.matches("class='weed'").count(), 0);
    }

    #[test]
    fn same_state_same_bytes() {
        let health = lawn(63, 48, 4, 7);
        assert_eq!(draw(&health, TimeOfDay::Night), draw(&health, TimeOfDay::Night));
        assert_eq!(draw(&health, TimeOfDay::Day), draw(&health, TimeOfDay::Day));
    }

    #[test]
    fn different_index_reshuffles_decorations() {
        assert_ne!(
            draw(&lawn(10, 50, 2, 2), TimeOfDay::Day),
            draw(&lawn(11, 50, 2, 2), TimeOfDay::Day)
        );
    }

    #[test]
    fn grass_layout_ignores_time_of_day() {
        let health = lawn(33, 80, 2, 2);
        let blades = |svg: &str| -> Vec<String> {
            svg.lines()
                .filter(|l| l.contains("stroke='rgba(20,80,20,0.6)'"))
                .map(str::to_string)
                .collect()
        };
        let day = draw(&health, TimeOfDay::Day);
        let night = draw(&health, TimeOfDay::Night);
        assert_eq!(blades(&day).len(), 80);
        assert_eq!(blades(&day), blades(&night));
    }

    #[test]
    fn celestial_marker_follows_time() {
        let health = lawn(50, 50, 1, 1);
        let day = draw(&health, TimeOfDay::Day);
        assert!(day.contains("class='sun'"));
        assert!(!day.contains("class='star'"));

        let night = draw(&health, TimeOfDay::Night);
        assert!(night.contains("class='moon'"));
        assert_eq!(night.matches("class='star'").count(), STAR_COUNT);
    }

    #[test]
    fn ground_color_tracks_lushness() {
        assert_eq!(ground_color(0), "rgb(30,100,60)");
        assert_eq!(ground_color(60), "rgb(30,190,60)");
        assert_eq!(ground_color(100), "rgb(30,250,60)");
    }
}
