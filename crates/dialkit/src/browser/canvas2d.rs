//! Canvas2D surface: draws gauge primitives onto an HTML5 canvas.

use dialkit_core::draw::estimate_text_width;
use dialkit_core::{
    Canvas, Paint, Path, PathCommand, Point, Rect, Shadow, ShapeStyle, Size, StrokeStyle,
    TextStyle, Transform2D,
};
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// [`Canvas`] backed by a `CanvasRenderingContext2d`.
pub struct Canvas2d {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Loaded images by URI.
    images: HashMap<String, HtmlImageElement>,
    /// Saves pushed by `push_transform` not yet restored.
    depth: usize,
}

impl Canvas2d {
    /// Wrap a canvas element.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("Failed to get 2d context: {e:?}"))?
            .ok_or("No 2d context available")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Failed to cast to CanvasRenderingContext2d")?;

        Ok(Self {
            canvas,
            ctx,
            images: HashMap::new(),
            depth: 0,
        })
    }

    /// The canvas element.
    pub const fn element(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn trace(&self, path: &Path) {
        self.ctx.begin_path();
        for command in path.commands() {
            match *command {
                PathCommand::MoveTo(p) => self.ctx.move_to(p.x, p.y),
                PathCommand::LineTo(p) => self.ctx.line_to(p.x, p.y),
                PathCommand::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    counterclockwise,
                } => {
                    self.ctx
                        .arc_with_anticlockwise(
                            center.x,
                            center.y,
                            radius,
                            start_angle,
                            end_angle,
                            counterclockwise,
                        )
                        .ok();
                }
                PathCommand::Close => self.ctx.close_path(),
            }
        }
    }

    fn set_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Paint::Radial {
                center,
                inner_radius,
                outer_radius,
                stops,
            } => {
                let Ok(gradient) = self.ctx.create_radial_gradient(
                    center.x,
                    center.y,
                    *inner_radius,
                    center.x,
                    center.y,
                    *outer_radius,
                ) else {
                    self.ctx.set_fill_style_str(&paint.primary_color().to_css());
                    return;
                };
                for stop in stops {
                    gradient
                        .add_color_stop(stop.offset as f32, &stop.color.to_css())
                        .ok();
                }
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
    }

    fn set_stroke(&self, stroke: &StrokeStyle) {
        self.ctx.set_stroke_style_str(&stroke.color.to_css());
        self.ctx.set_line_width(stroke.width);
        self.ctx.set_line_cap(stroke.cap.as_str());
    }

    fn paint(&self, style: &ShapeStyle) {
        self.ctx.save();
        self.ctx.set_global_alpha(style.opacity);
        if let Some(fill) = &style.fill {
            self.set_fill(fill);
            self.ctx.fill();
        }
        if let Some(stroke) = &style.stroke {
            self.set_stroke(stroke);
            self.ctx.stroke();
        }
        self.ctx.restore();
    }

    fn set_shadow(&self, shadow: Option<&Shadow>) {
        if let Some(shadow) = shadow {
            self.ctx.set_shadow_color(&shadow.color.to_css());
            self.ctx.set_shadow_blur(shadow.blur);
            self.ctx.set_shadow_offset_x(shadow.offset_x);
            self.ctx.set_shadow_offset_y(shadow.offset_y);
        }
    }

    fn image(&mut self, href: &str) -> Option<HtmlImageElement> {
        if let Some(image) = self.images.get(href) {
            return Some(image.clone());
        }
        let image = HtmlImageElement::new().ok()?;
        image.set_src(href);
        self.images.insert(href.to_string(), image.clone());
        Some(image)
    }
}

impl Canvas for Canvas2d {
    fn clear(&mut self, size: Size) {
        while self.depth > 0 {
            self.ctx.restore();
            self.depth -= 1;
        }
        let (width, height) = (size.width.round() as u32, size.height.round() as u32);
        if self.canvas.width() != width || self.canvas.height() != height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }
        self.ctx.reset_transform().ok();
        self.ctx.clear_rect(0.0, 0.0, f64::from(width), f64::from(height));
    }

    fn draw_path(&mut self, path: &Path, style: &ShapeStyle) {
        self.trace(path);
        self.paint(style);
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &StrokeStyle, shadow: Option<&Shadow>) {
        self.ctx.save();
        self.set_shadow(shadow);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.set_stroke(stroke);
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn draw_circle(&mut self, center: Point, radius: f64, style: &ShapeStyle) {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
            .ok();
        self.paint(style);
    }

    fn draw_rect(&mut self, rect: Rect, style: &ShapeStyle) {
        self.ctx.begin_path();
        self.ctx.rect(rect.x, rect.y, rect.width, rect.height);
        self.paint(style);
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.ctx.set_font(&style.css_font());
        self.ctx.set_fill_style_str(&style.color.to_css());
        self.ctx.set_text_align(style.anchor.as_canvas());
        self.ctx.set_text_baseline(style.baseline.as_str());
        self.ctx.fill_text(text, position.x, position.y).ok();
    }

    fn draw_image(&mut self, href: &str, bounds: Rect, shadow: Option<&Shadow>) {
        let Some(image) = self.image(href) else {
            return;
        };
        // Drawn on the first frame after the image finishes loading.
        if !image.complete() {
            return;
        }
        self.ctx.save();
        self.set_shadow(shadow);
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                &image,
                bounds.x,
                bounds.y,
                bounds.width,
                bounds.height,
            )
            .ok();
        self.ctx.restore();
    }

    fn push_transform(&mut self, transform: Transform2D) {
        let [a, b, c, d, e, f] = transform.matrix;
        self.ctx.save();
        self.ctx.transform(a, b, c, d, e, f).ok();
        self.depth += 1;
    }

    fn pop_transform(&mut self) {
        if self.depth > 0 {
            self.ctx.restore();
            self.depth -= 1;
        }
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> f64 {
        self.ctx.set_font(&style.css_font());
        self.ctx
            .measure_text(text)
            .map_or_else(|_| estimate_text_width(text, style.size), |m| m.width())
    }
}
