//! Painting: plays a [`Scene`] onto a 2D canvas context.
//!
//! This module is the only place that draws on a [`web_sys::CanvasRenderingContext2d`].
//! It interprets draw commands in order and mutates nothing but the context.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::geometry::{Point, Rect, Size, Transform};
use crate::render::{DrawCmd, Label, Scene, Style, TextAlign};

/// Padding around text drawn on a backdrop, in screen pixels.
const BACKDROP_PADDING_PX: f64 = 4.0;
const BACKDROP_RADIUS_PX: f64 = 4.0;

/// Paint `scene` onto `ctx`.
///
/// `viewport` is in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn paint(ctx: &CanvasRenderingContext2d, scene: &Scene, viewport: Size, dpr: f64) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

    for cmd in &scene.commands {
        match cmd {
            DrawCmd::Background { color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);
            }
            DrawCmd::BeginMapSpace(transform) => {
                ctx.save();
                enter_map_space(ctx, transform)?;
            }
            DrawCmd::EndMapSpace => ctx.restore(),
            DrawCmd::Line { from, to, stroke } => {
                ctx.begin_path();
                ctx.move_to(from.x, from.y);
                ctx.line_to(to.x, to.y);
                ctx.set_stroke_style_str(stroke.color);
                ctx.set_line_width(stroke.width);
                ctx.stroke();
            }
            DrawCmd::Rect { rect, radius, style } => {
                ctx.begin_path();
                rounded_rect_path(ctx, *rect, *radius)?;
                apply_style(ctx, style);
            }
            DrawCmd::Ellipse { rect, style } => {
                if rect.width <= 0.0 || rect.height <= 0.0 {
                    continue;
                }
                ctx.begin_path();
                ctx.ellipse(rect.mid_x(), rect.mid_y(), rect.width * 0.5, rect.height * 0.5, 0.0, 0.0, 2.0 * PI)?;
                apply_style(ctx, style);
            }
            DrawCmd::Polygon { points, style } => {
                polygon_path(ctx, points);
                apply_style(ctx, style);
            }
            DrawCmd::Text(label) => draw_label(ctx, label)?,
        }
    }

    Ok(())
}

/// Center the anchor in the viewport, scale by zoom, then offset by pan.
fn enter_map_space(ctx: &CanvasRenderingContext2d, transform: &Transform) -> Result<(), JsValue> {
    let Some(anchor) = transform.anchor else {
        return Ok(());
    };
    let center = transform.viewport.center();
    ctx.translate(center.x + transform.pan.x, center.y + transform.pan.y)?;
    ctx.scale(transform.zoom, transform.zoom)?;
    ctx.translate(-anchor.x, -anchor.y)?;
    Ok(())
}

fn apply_style(ctx: &CanvasRenderingContext2d, style: &Style) {
    if let Some(fill) = style.fill {
        ctx.set_fill_style_str(fill);
        ctx.fill();
    }
    if let Some(stroke) = style.stroke {
        ctx.set_stroke_style_str(stroke.color);
        ctx.set_line_width(stroke.width);
        ctx.stroke();
    }
}

fn rounded_rect_path(ctx: &CanvasRenderingContext2d, rect: Rect, radius: f64) -> Result<(), JsValue> {
    let r = radius.min(rect.width * 0.5).min(rect.height * 0.5).max(0.0);
    if r <= 0.0 {
        ctx.rect(rect.x, rect.y, rect.width, rect.height);
        return Ok(());
    }
    ctx.move_to(rect.min_x() + r, rect.min_y());
    ctx.arc_to(rect.max_x(), rect.min_y(), rect.max_x(), rect.max_y(), r)?;
    ctx.arc_to(rect.max_x(), rect.max_y(), rect.min_x(), rect.max_y(), r)?;
    ctx.arc_to(rect.min_x(), rect.max_y(), rect.min_x(), rect.min_y(), r)?;
    ctx.arc_to(rect.min_x(), rect.min_y(), rect.max_x(), rect.min_y(), r)?;
    ctx.close_path();
    Ok(())
}

fn polygon_path(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    ctx.begin_path();
    for (i, pt) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(pt.x, pt.y);
        } else {
            ctx.line_to(pt.x, pt.y);
        }
    }
    ctx.close_path();
}

// =============================================================
// Text
// =============================================================

fn draw_label(ctx: &CanvasRenderingContext2d, label: &Label) -> Result<(), JsValue> {
    if label.text.is_empty() {
        return Ok(());
    }
    ctx.save();
    ctx.set_font(&format!("{} {}px -apple-system, system-ui, sans-serif", label.weight.css(), label.size));
    ctx.set_text_baseline("middle");
    ctx.set_text_align(match label.align {
        TextAlign::Center => "center",
        TextAlign::Left => "left",
    });

    if let Some(backdrop) = label.backdrop {
        let width = measured_text_width(ctx, &label.text);
        let left = match label.align {
            TextAlign::Center => label.at.x - width * 0.5,
            TextAlign::Left => label.at.x,
        };
        let rect = Rect::new(left, label.at.y - label.size * 0.5, width, label.size).inflate(BACKDROP_PADDING_PX);
        ctx.begin_path();
        rounded_rect_path(ctx, rect, BACKDROP_RADIUS_PX)?;
        ctx.set_fill_style_str(backdrop);
        ctx.fill();
    }

    ctx.set_fill_style_str(label.color);
    ctx.fill_text(&label.text, label.at.x, label.at.y)?;
    ctx.restore();
    Ok(())
}

fn measured_text_width(ctx: &CanvasRenderingContext2d, text: &str) -> f64 {
    match ctx.measure_text(text) {
        Ok(metrics) => metrics.width(),
        Err(_) => 0.0,
    }
}
