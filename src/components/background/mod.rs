//! Decorative animated background.
//!
//! A fixed, pointer-transparent canvas behind all content, drifting a
//! field of pastel shapes upward. The particle state lives in
//! [`ParticleField`] (pure, tested); this module only owns the canvas,
//! the redraw interval, and the resize listener — both released on
//! unmount.

use std::cell::RefCell;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};
use std::rc::Rc;
use std::time::Duration;

use leptos::leptos_dom::helpers::{set_interval_with_handle, window_event_listener};
use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::particles::{FRAME_INTERVAL_MS, SHAPE_COUNT};
use crate::models::{Particle, ParticleField, ShapeKind};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/background/background.module.css");

// ============================================================================
// Canvas Drawing
// ============================================================================

/// Four-spoke sparkle with a smaller rotated cross.
fn draw_star(ctx: &CanvasRenderingContext2d, shape: &Particle) {
    ctx.save();
    let _ = ctx.translate(shape.x, shape.y);
    let _ = ctx.rotate(shape.rotation);

    ctx.begin_path();
    for i in 0..4 {
        let angle = i as f64 * FRAC_PI_2;
        ctx.move_to(0.0, 0.0);
        ctx.line_to(angle.cos() * shape.size, angle.sin() * shape.size);
    }
    ctx.stroke();

    ctx.begin_path();
    for i in 0..4 {
        let angle = i as f64 * FRAC_PI_2 + FRAC_PI_4;
        ctx.move_to(0.0, 0.0);
        ctx.line_to(angle.cos() * shape.size * 0.5, angle.sin() * shape.size * 0.5);
    }
    ctx.stroke();

    ctx.restore();
}

fn draw_diamond(ctx: &CanvasRenderingContext2d, shape: &Particle) {
    ctx.save();
    let _ = ctx.translate(shape.x, shape.y);
    let _ = ctx.rotate(shape.rotation);

    ctx.begin_path();
    ctx.move_to(0.0, -shape.size);
    ctx.line_to(shape.size * 0.6, 0.0);
    ctx.line_to(0.0, shape.size);
    ctx.line_to(-shape.size * 0.6, 0.0);
    ctx.close_path();
    ctx.fill();

    ctx.restore();
}

/// Redraw the whole field.
fn draw_field(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, field: &ParticleField) {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);

    for shape in field.shapes() {
        let style = shape.paint_style();
        match shape.kind {
            ShapeKind::Circle => {
                ctx.begin_path();
                let _ = ctx.arc(shape.x, shape.y, shape.size, 0.0, TAU);
                ctx.set_fill_style_str(&style);
                ctx.fill();
            }
            ShapeKind::Star => {
                ctx.set_stroke_style_str(&style);
                ctx.set_line_width(1.0);
                draw_star(ctx, shape);
            }
            ShapeKind::Diamond => {
                ctx.set_fill_style_str(&style);
                draw_diamond(ctx, shape);
            }
        }
    }
}

fn size_to_viewport(canvas: &HtmlCanvasElement) -> Option<(f64, f64)> {
    let (width, height) = dom::viewport_size()?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    Some((width, height))
}

// ============================================================================
// Component
// ============================================================================

/// Full-viewport animated particle canvas.
///
/// Regenerates its field on every mount and owns nothing persistent:
/// the redraw interval and the window resize listener are removed when
/// the component unmounts.
#[component]
pub fn ParticleBackground() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    // Set up once the canvas element exists
    let started = StoredValue::new(false);
    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if started.get_value() {
            return;
        }
        started.set_value(true);

        let Some((width, height)) = size_to_viewport(&canvas) else {
            return;
        };
        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            return;
        };

        let field = Rc::new(RefCell::new(ParticleField::generate(
            SHAPE_COUNT,
            width,
            height,
            &mut js_sys::Math::random,
        )));

        let interval = {
            let field = Rc::clone(&field);
            let canvas = canvas.clone();
            set_interval_with_handle(
                move || {
                    let mut field = field.borrow_mut();
                    field.step(&mut js_sys::Math::random);
                    draw_field(&ctx, &canvas, &field);
                },
                Duration::from_millis(u64::from(FRAME_INTERVAL_MS)),
            )
            .ok()
        };

        let resize = window_event_listener(ev::resize, move |_| {
            if let Some((width, height)) = size_to_viewport(&canvas) {
                field.borrow_mut().resize(width, height);
            }
        });

        on_cleanup(move || {
            if let Some(interval) = interval {
                interval.clear();
            }
            resize.remove();
        });
    });

    view! { <canvas node_ref=canvas_ref class=css::canvas></canvas> }
}
