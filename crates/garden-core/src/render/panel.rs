//! The narrative text panel.
//!
//! Two independent renderings of the same story: an XHTML block inside a
//! `<foreignObject>` for viewers that lay out HTML, and hand-wrapped SVG
//! `<text>` lines for everything else. [`panel`] composes them in a
//! `<switch>` so each viewer picks the first one it supports.

use super::{FONT_SIZE, LINE_HEIGHT, PANEL_HEIGHT, PANEL_PADDING, PANEL_WIDTH, PANEL_X, PANEL_Y};
use crate::narrative::Narrative;
use quick_xml::escape::escape;

const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";
const TEXT_COLOR: &str = "#263238";
const ELLIPSIS: char = '…';

/// Monospace glyphs are roughly 0.6em wide.
pub fn wrap_width() -> usize {
    let usable = f64::from(PANEL_WIDTH - 2 * PANEL_PADDING);
    (usable / (f64::from(FONT_SIZE) * 0.6)).floor() as usize
}

pub fn max_lines() -> usize {
    ((PANEL_HEIGHT - 2 * PANEL_PADDING) / LINE_HEIGHT) as usize
}

// ---------------------------------------------------------------------------
// Wrapping
// ---------------------------------------------------------------------------

/// Greedy word wrap on character counts. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if line_len > 0 {
                out.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let rest = word.split_off(width);
            out.push(word.into_iter().collect());
            word = rest;
        }
        if word.is_empty() {
            continue;
        }
        let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
        if needed > width {
            out.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line_len += word.len();
        line.extend(word);
    }
    if line_len > 0 {
        out.push(line);
    }
    out
}

/// Wrap every narrative line and cut to `max_lines`, marking the cut with an
/// ellipsis on the last visible line.
pub fn fit(story: &Narrative, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = story.lines().flat_map(|l| wrap(l, width)).collect();
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let keep = width.saturating_sub(1);
            let mut clipped: String = last.chars().take(keep).collect();
            clipped.push(ELLIPSIS);
            *last = clipped;
        }
    }
    lines
}

// ---------------------------------------------------------------------------
// Renderings
// ---------------------------------------------------------------------------

/// The HTML rendering; the viewer does the wrapping.
pub fn rich_panel(story: &Narrative) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "<foreignObject x='{PANEL_X}' y='{PANEL_Y}' width='{PANEL_WIDTH}' height='{PANEL_HEIGHT}' requiredExtensions='{XHTML_NS}'>"
    ));
    out.push(format!(
        "  <div xmlns='{XHTML_NS}' style='box-sizing:border-box;height:100%;overflow:hidden;padding:{PANEL_PADDING}px;font-family:monospace;font-size:{FONT_SIZE}px;line-height:{LINE_HEIGHT}px;color:{TEXT_COLOR}'>"
    ));
    for line in story.lines() {
        out.push(format!("    <p style='margin:0'>{}</p>", escape(line)));
    }
    out.push("  </div>".to_string());
    out.push("</foreignObject>".to_string());
    out.join("\n")
}

/// The plain SVG rendering, wrapped by hand.
pub fn plain_panel(story: &Narrative) -> String {
    let x = PANEL_X + PANEL_PADDING;
    let top = PANEL_Y + PANEL_PADDING + FONT_SIZE;
    let mut out = vec!["<g class='narrative'>".to_string()];
    for (idx, line) in fit(story, wrap_width(), max_lines()).iter().enumerate() {
        let y = top + idx as u32 * LINE_HEIGHT;
        out.push(format!(
            "  <text x='{x}' y='{y}' font-family='monospace' font-size='{FONT_SIZE}' fill='{TEXT_COLOR}'>{}</text>",
            escape(line.as_str())
        ));
    }
    out.push("</g>".to_string());
    out.join("\n")
}

/// Backdrop plus both renderings inside a `<switch>`.
pub fn panel(story: &Narrative) -> String {
    [
        format!(
            "<rect x='{PANEL_X}' y='{PANEL_Y}' rx='8' ry='8' width='{PANEL_WIDTH}' height='{PANEL_HEIGHT}' fill='rgba(255,255,255,0.85)' />"
        ),
        "<switch>".to_string(),
        rich_panel(story),
        plain_panel(story),
        "</switch>".to_string(),
    ]
    .join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
