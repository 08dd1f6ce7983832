//! SVG serialisation of a [`Scene`].

use crate::scene::{Element, NodeId, Scene, TransformOp};
use dialkit_core::draw::fmt_num;
use dialkit_core::{LineCap, Paint, Shadow, ShapeStyle, StrokeStyle, TextStyle};
use std::fmt::Write;

/// Escape text for use in element content and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// SVG `transform` attribute value.
#[must_use]
pub fn transform_attr(ops: &[TransformOp]) -> String {
    ops.iter()
        .map(|op| match *op {
            TransformOp::Translate(x, y) => format!("translate({}, {})", fmt_num(x), fmt_num(y)),
            TransformOp::Rotate(degrees) => format!("rotate({})", fmt_num(degrees)),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn write_document(scene: &Scene) -> String {
    let mut writer = Writer::default();
    if let Some(root) = scene.node(scene.root()) {
        for &child in root.children() {
            writer.node(scene, child);
        }
    }

    let size = scene.size();
    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_num(size.width),
        h = fmt_num(size.height)
    );
    if !writer.defs.is_empty() {
        out.push_str("<defs>");
        out.push_str(&writer.defs);
        out.push_str("</defs>");
    }
    out.push_str(&writer.body);
    out.push_str("</svg>");
    out
}

#[derive(Default)]
struct Writer {
    body: String,
    defs: String,
    gradients: usize,
    filters: usize,
}

impl Writer {
    fn node(&mut self, scene: &Scene, id: NodeId) {
        let Some(node) = scene.node(id) else {
            return;
        };
        let tag = node.element.tag();
        let mut attrs = format!(r#" class="{}""#, escape(&node.class));
        if !node.transform.is_empty() {
            let _ = write!(attrs, r#" transform="{}""#, transform_attr(&node.transform));
        }
        if let Some(shadow) = &node.shadow {
            let id = self.shadow(shadow);
            let _ = write!(attrs, r#" filter="url(#{id})""#);
        }

        match &node.element {
            Element::Group => {
                let _ = write!(self.body, "<g{attrs}>");
                for &child in node.children() {
                    self.node(scene, child);
                }
                self.body.push_str("</g>");
            }
            Element::Text {
                content,
                position,
                style,
            } => {
                let _ = write!(
                    self.body,
                    r#"<text{attrs} x="{}" y="{}"{}>{}</text>"#,
                    fmt_num(position.x),
                    fmt_num(position.y),
                    text_attrs(style),
                    escape(content)
                );
            }
            element => {
                let geometry = self.geometry(element);
                let _ = write!(self.body, "<{tag}{attrs}{geometry}/>");
            }
        }
    }

    fn geometry(&mut self, element: &Element) -> String {
        match element {
            Element::Path { path, style } => {
                format!(r#" d="{}"{}"#, path.to_svg_data(), self.shape(style))
            }
            Element::Line { from, to, stroke } => format!(
                r#" x1="{}" y1="{}" x2="{}" y2="{}" fill="none"{}"#,
                fmt_num(from.x),
                fmt_num(from.y),
                fmt_num(to.x),
                fmt_num(to.y),
                stroke_attrs(stroke)
            ),
            Element::Circle {
                center,
                radius,
                style,
            } => format!(
                r#" cx="{}" cy="{}" r="{}"{}"#,
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(*radius),
                self.shape(style)
            ),
            Element::Rect { bounds, style } => format!(
                r#" x="{}" y="{}" width="{}" height="{}"{}"#,
                fmt_num(bounds.x),
                fmt_num(bounds.y),
                fmt_num(bounds.width),
                fmt_num(bounds.height),
                self.shape(style)
            ),
            Element::Image { href, bounds } => format!(
                r#" href="{}" x="{}" y="{}" width="{}" height="{}""#,
                escape(href),
                fmt_num(bounds.x),
                fmt_num(bounds.y),
                fmt_num(bounds.width),
                fmt_num(bounds.height)
            ),
            Element::Group | Element::Text { .. } => String::new(),
        }
    }

    fn shape(&mut self, style: &ShapeStyle) -> String {
        let mut attrs = match &style.fill {
            None => r#" fill="none""#.to_string(),
            Some(Paint::Solid(color)) => format!(r#" fill="{}""#, color.to_css()),
            Some(paint @ Paint::Radial { .. }) => {
                let id = self.gradient(paint);
                format!(r#" fill="url(#{id})""#)
            }
        };
        if let Some(stroke) = &style.stroke {
            attrs.push_str(&stroke_attrs(stroke));
        }
        if style.opacity < 1.0 {
            let _ = write!(attrs, r#" opacity="{}""#, fmt_num(style.opacity));
        }
        attrs
    }

    fn gradient(&mut self, paint: &Paint) -> String {
        let id = format!("dialkit-gradient-{}", self.gradients);
        self.gradients += 1;
        if let Paint::Radial {
            center,
            inner_radius,
            outer_radius,
            stops,
        } = paint
        {
            // SVG 1.1 has no focal radius: fold the inner radius into the
            // stop offsets instead.
            let start = if *outer_radius > 0.0 {
                inner_radius / outer_radius
            } else {
                0.0
            };
            let _ = write!(
                self.defs,
                r#"<radialGradient id="{id}" gradientUnits="userSpaceOnUse" cx="{}" cy="{}" r="{}">"#,
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(*outer_radius)
            );
            for stop in stops {
                let offset = (1.0 - start).mul_add(stop.offset, start);
                let _ = write!(
                    self.defs,
                    r#"<stop offset="{}" stop-color="{}"/>"#,
                    fmt_num(offset),
                    stop.color.to_css()
                );
            }
            self.defs.push_str("</radialGradient>");
        }
        id
    }

    fn shadow(&mut self, shadow: &Shadow) -> String {
        let id = format!("dialkit-shadow-{}", self.filters);
        self.filters += 1;
        let _ = write!(
            self.defs,
            r#"<filter id="{id}" x="-50%" y="-50%" width="200%" height="200%"><feDropShadow dx="{}" dy="{}" stdDeviation="{}" flood-color="{}"/></filter>"#,
            fmt_num(shadow.offset_x),
            fmt_num(shadow.offset_y),
            fmt_num(shadow.blur / 2.0),
            shadow.color.to_css()
        );
        id
    }
}

fn stroke_attrs(stroke: &StrokeStyle) -> String {
    let mut attrs = format!(
        r#" stroke="{}" stroke-width="{}""#,
        stroke.color.to_css(),
        fmt_num(stroke.width)
    );
    if stroke.cap != LineCap::Butt {
        let _ = write!(attrs, r#" stroke-linecap="{}""#, stroke.cap.as_str());
    }
    attrs
}

fn text_attrs(style: &TextStyle) -> String {
    format!(
        r#" font-size="{}" font-family="{}" font-weight="{}" fill="{}" text-anchor="{}" dominant-baseline="{}""#,
        fmt_num(style.size),
        escape(&style.family),
        style.weight.as_css(),
        style.color.to_css(),
        style.anchor.as_svg(),
        style.baseline.as_str()
    )
}
