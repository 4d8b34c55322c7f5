use crate::narrative::Narrative;

pub const FOOTER: &str = "(Auto-updated by garden-bot)";

/// The garden page: heading, the illustration, and the story as plain text.
pub fn render(title: &str, svg_link: &str, story: &Narrative) -> String {
    let mut md = vec![
        format!("# {title}"),
        String::new(),
        format!("![Garden Status]({svg_link})"),
        String::new(),
        "```".to_string(),
    ];
    md.extend(story.lines().map(str::to_string));
    md.extend([
        "```".to_string(),
        String::new(),
        FOOTER.to_string(),
        String::new(),
    ]);
    md.join("\n")
}
