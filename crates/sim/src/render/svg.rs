//! SVG output for scenes.

use crate::render::{Anchor, Primitive, Renderer, Rgba, Scene};
use std::fmt::Write as _;

/// Renders scenes to standalone SVG documents.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    /// Clip paths emitted so far, for unique ids across scenes
    clip_ids: usize,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_clip_id(&mut self) -> String {
        self.clip_ids += 1;
        format!("clip{}", self.clip_ids)
    }
}

impl Renderer for SvgRenderer {
    type Output = String;

    fn render(&mut self, scene: &Scene) -> String {
        let mut out = String::new();
        let mut open_groups = 0usize;

        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = scene.width,
            h = scene.height
        );
        let _ = writeln!(
            out,
            r#"<rect width="100%" height="100%" {}/>"#,
            fill(scene.background)
        );

        for primitive in &scene.primitives {
            match primitive {
                Primitive::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                } => {
                    let _ = writeln!(
                        out,
                        r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" {}/>"#,
                        stroke(*color)
                    );
                }
                Primitive::FillRect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => {
                    let _ = writeln!(
                        out,
                        r#"<rect x="{x:.2}" y="{y:.2}" width="{width:.2}" height="{height:.2}" {}/>"#,
                        fill(*color)
                    );
                }
                Primitive::FillEllipse {
                    cx,
                    cy,
                    rx,
                    ry,
                    color,
                } => {
                    let _ = writeln!(
                        out,
                        r#"<ellipse cx="{cx:.2}" cy="{cy:.2}" rx="{rx:.2}" ry="{ry:.2}" {}/>"#,
                        fill(*color)
                    );
                }
                Primitive::Text {
                    x,
                    y,
                    text,
                    anchor,
                    size,
                    bold,
                    color,
                } => {
                    let anchor = match anchor {
                        Anchor::Start => "start",
                        Anchor::Middle => "middle",
                        Anchor::End => "end",
                    };
                    let weight = if *bold { "bold" } else { "normal" };
                    let _ = writeln!(
                        out,
                        r#"<text x="{x:.2}" y="{y:.2}" text-anchor="{anchor}" font-family="sans-serif" font-size="{size}" font-weight="{weight}" {}>{}</text>"#,
                        fill(*color),
                        escape(text)
                    );
                }
                Primitive::PushClipEllipse { cx, cy, rx, ry } => {
                    let id = self.next_clip_id();
                    let _ = writeln!(
                        out,
                        r#"<clipPath id="{id}"><ellipse cx="{cx:.2}" cy="{cy:.2}" rx="{rx:.2}" ry="{ry:.2}"/></clipPath>"#
                    );
                    let _ = writeln!(out, r#"<g clip-path="url(#{id})">"#);
                    open_groups += 1;
                }
                Primitive::PopClip => {
                    if open_groups > 0 {
                        out.push_str("</g>\n");
                        open_groups -= 1;
                    }
                }
            }
        }

        for _ in 0..open_groups {
            out.push_str("</g>\n");
        }
        out.push_str("</svg>\n");
        out
    }
}

fn fill(color: Rgba) -> String {
    if color.a == 255 {
        format!(r#"fill="{}""#, color.hex())
    } else {
        format!(
            r#"fill="{}" fill-opacity="{:.3}""#,
            color.hex(),
            color.opacity()
        )
    }
}

fn stroke(color: Rgba) -> String {
    if color.a == 255 {
        format!(r#"stroke="{}""#, color.hex())
    } else {
        format!(
            r#"stroke="{}" stroke-opacity="{:.3}""#,
            color.hex(),
            color.opacity()
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
