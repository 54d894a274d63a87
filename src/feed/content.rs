//! HTML body of a feed item.
//!
//! The body is assembled from an ordered list of sections. Each section has
//! a condition and a renderer; a section whose condition fails contributes
//! nothing at all, so absent optional fields never leave placeholder text.

use crate::site::escape_html;
use crate::wallpaper::BingWallpaper;

/// Separator between title and caption.
pub const CAPTION_SEPARATOR: &str = " —— ";

/// What a section renderer gets to see.
pub struct ContentContext<'a> {
    pub wallpaper: &'a BingWallpaper,
    /// Absolute image URL.
    pub image_url: &'a str,
}

/// One conditional piece of the item body.
pub struct ContentSection {
    pub name: &'static str,
    pub condition: fn(&BingWallpaper) -> bool,
    pub render: fn(&ContentContext<'_>, &mut String),
}

fn always(_: &BingWallpaper) -> bool {
    true
}

fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

fn has_title(w: &BingWallpaper) -> bool {
    has_text(Some(&w.title))
}

fn has_caption(w: &BingWallpaper) -> bool {
    has_text(w.caption.as_deref())
}

fn has_description(w: &BingWallpaper) -> bool {
    has_text(w.description.as_deref())
}

fn render_image(ctx: &ContentContext<'_>, out: &mut String) {
    out.push_str("<img src=\"");
    out.push_str(&escape_html(ctx.image_url));
    out.push_str("\" border=\"0\"/><h2>");
}

fn render_title(ctx: &ContentContext<'_>, out: &mut String) {
    out.push_str(&escape_html(&ctx.wallpaper.title));
}

fn render_caption(ctx: &ContentContext<'_>, out: &mut String) {
    if let Some(caption) = &ctx.wallpaper.caption {
        out.push_str(CAPTION_SEPARATOR);
        out.push_str(&escape_html(caption));
    }
}

fn render_heading_end(_: &ContentContext<'_>, out: &mut String) {
    out.push_str("</h2><h4>");
}

fn render_description(ctx: &ContentContext<'_>, out: &mut String) {
    if let Some(description) = &ctx.wallpaper.description {
        out.push_str(&escape_html(description));
    }
}

fn render_end(_: &ContentContext<'_>, out: &mut String) {
    out.push_str("</h4>");
}

/// Body sections, in output order.
pub const CONTENT_SECTIONS: &[ContentSection] = &[
    ContentSection {
        name: "image",
        condition: always,
        render: render_image,
    },
    ContentSection {
        name: "title",
        condition: has_title,
        render: render_title,
    },
    ContentSection {
        name: "caption",
        condition: has_caption,
        render: render_caption,
    },
    ContentSection {
        name: "heading-end",
        condition: always,
        render: render_heading_end,
    },
    ContentSection {
        name: "description",
        condition: has_description,
        render: render_description,
    },
    ContentSection {
        name: "end",
        condition: always,
        render: render_end,
    },
];

/// Render the item body for a wallpaper.
pub fn render_content(wallpaper: &BingWallpaper, image_url: &str) -> String {
    let ctx = ContentContext {
        wallpaper,
        image_url,
    };
    let mut out = String::new();
    for section in CONTENT_SECTIONS {
        if (section.condition)(wallpaper) {
            (section.render)(&ctx, &mut out);
        }
    }
    out
}
