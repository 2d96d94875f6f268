//! Rendered card view.
//!
//! The card is drawn as one self-contained SVG document. The Presenting view
//! shows this markup and the rasterizer renders the very same markup, so the
//! downloaded PNG always matches what is on screen.

use std::fmt::Write as _;

use crate::content::CardContent;
use crate::portrait::Portrait;
use crate::session::CardSession;

pub const CARD_WIDTH: u32 = 600;
pub const CARD_HEIGHT: u32 = 960;

const GOLD: &str = "#d4af37";
const GOLD_LIGHT: &str = "#f1d27a";
const SNOW: &str = "#f5f5f5";
const SERIF: &str = "Georgia, 'Times New Roman', serif";

const PHOTO_X: u32 = 70;
const PHOTO_W: u32 = 460;
const PHOTO_H: u32 = 345;

/// A card rendered to SVG markup.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    svg: String,
}

impl CardView {
    /// Render the card for a session snapshot.
    pub fn from_session(content: &CardContent, session: &CardSession) -> Self {
        Self::render(content, session.trimmed_name(), session.portrait.as_ref())
    }

    /// Render the card for a sender and optional portrait.
    pub fn render(content: &CardContent, sender_name: &str, portrait: Option<&Portrait>) -> Self {
        let mut svg = String::with_capacity(4096);
        let mid = CARD_WIDTH / 2;

        let _ = write!(
            svg,
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"##,
            w = CARD_WIDTH,
            h = CARD_HEIGHT
        );
        let _ = write!(
            svg,
            r##"<rect width="{w}" height="{h}" rx="24" fill="{bg}"/><rect x="16" y="16" width="{iw}" height="{ih}" rx="16" fill="none" stroke="{GOLD}" stroke-width="2" stroke-opacity="0.7"/>"##,
            w = CARD_WIDTH,
            h = CARD_HEIGHT,
            iw = CARD_WIDTH - 32,
            ih = CARD_HEIGHT - 32,
            bg = content.background.to_hex(),
        );

        let mut y = 100;
        text_line(&mut svg, mid, y, 52, GOLD, "bold", &content.heading);
        y += 60;
        text_line(&mut svg, mid, y, 22, SNOW, "normal", &content.salutation);
        y += 25;

        // Photo frame
        let _ = write!(
            svg,
            r##"<rect x="{x}" y="{y}" width="{w}" height="{h}" rx="12" fill="#101a2c" stroke="{GOLD}" stroke-width="3"/>"##,
            x = PHOTO_X - 4,
            y = y - 4,
            w = PHOTO_W + 8,
            h = PHOTO_H + 8,
        );
        if let Some(portrait) = portrait {
            let _ = write!(
                svg,
                r##"<image x="{x}" y="{y}" width="{w}" height="{h}" preserveAspectRatio="xMidYMid slice" href="{uri}"/>"##,
                x = PHOTO_X,
                w = PHOTO_W,
                h = PHOTO_H,
                uri = portrait.data_uri(),
            );
        }
        let tag_x = PHOTO_X + PHOTO_W - 90;
        let tag_y = y + PHOTO_H - 40;
        let _ = write!(
            svg,
            r##"<rect x="{tag_x}" y="{tag_y}" width="80" height="30" rx="15" fill="{GOLD}"/>"##,
        );
        text_line(&mut svg, tag_x + 40, tag_y + 21, 16, "#000000", "bold", &content.year_tag);
        y += PHOTO_H + 45;

        text_line(&mut svg, mid, y, 20, SNOW, "normal", &content.greeting);
        y += 36;
        for line in wrap_text(&content.highlight, 42) {
            text_line(&mut svg, mid, y, 19, GOLD_LIGHT, "italic", &line);
            y += 26;
        }
        y += 18;
        text_line(&mut svg, mid, y, 17, GOLD, "bold", &content.scripture_reference);
        y += 26;
        for line in wrap_text(&content.scripture_quote, 50) {
            text_line(&mut svg, mid, y, 16, SNOW, "italic", &line);
            y += 22;
        }
        y += 18;
        text_line(&mut svg, mid, y, 20, GOLD, "bold", &content.blessing);

        let sign_x = CARD_WIDTH - 70;
        let sign_y = (y + 60).max(CARD_HEIGHT - 90);
        let _ = write!(
            svg,
            r##"<text x="{sign_x}" y="{sign_y}" text-anchor="end" font-family="{SERIF}" font-size="18" fill="{SNOW}">{prefix}<tspan x="{sign_x}" dy="28" font-size="24" font-weight="bold" fill="{GOLD}">{name}</tspan></text>"##,
            prefix = escape_xml(&content.signature_prefix),
            name = escape_xml(sender_name),
        );

        svg.push_str("</svg>");
        Self { svg }
    }

    pub fn svg(&self) -> &str {
        &self.svg
    }

    pub fn into_svg(self) -> String {
        self.svg
    }

    pub fn width(&self) -> u32 {
        CARD_WIDTH
    }

    pub fn height(&self) -> u32 {
        CARD_HEIGHT
    }
}

fn text_line(svg: &mut String, x: u32, y: u32, size: u32, fill: &str, style: &str, text: &str) {
    let (weight, font_style) = match style {
        "bold" => ("bold", "normal"),
        "italic" => ("normal", "italic"),
        _ => ("normal", "normal"),
    };
    let _ = write!(
        svg,
        r##"<text x="{x}" y="{y}" text-anchor="middle" font-family="{SERIF}" font-size="{size}" font-weight="{weight}" font-style="{font_style}" fill="{fill}">{text}</text>"##,
        text = escape_xml(text),
    );
}

/// Greedy word wrap on character count. Words longer than the limit get a
/// line of their own.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Escape text for use inside SVG elements and attributes.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
