//! Ambient particle background.
//!
//! Owns the animation clock and the canvas drawing for the pure
//! [`ParticleField`] simulation. The frame chain is an explicit cancellable
//! handle dropped on unmount, not a fire-and-forget loop.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{AnimationFrame, request_animation_frame};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use vitrina_core::particles::ParticleField;

/// Canvas extent: viewport width by the larger of viewport height and the
/// document scroll height.
fn document_extent() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let scroll_height = window
        .document()
        .and_then(|d| d.body())
        .map(|body| f64::from(body.scroll_height()))
        .unwrap_or(0.0);

    (width, viewport_height.max(scroll_height))
}

fn draw(ctx: &web_sys::CanvasRenderingContext2d, field: &ParticleField) {
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());
    for p in field.particles() {
        ctx.begin_path();
        if ctx.arc(p.x, p.y, p.radius, 0.0, std::f64::consts::TAU).is_err() {
            continue;
        }
        ctx.set_fill_style_str(&format!("rgba(36, 145, 217, {})", p.alpha));
        ctx.fill();
    }
}

/// Advance, draw, and schedule the next frame, parking the pending handle in
/// `slot` so clearing the slot cancels the chain.
fn tick(
    field: Rc<RefCell<ParticleField>>,
    ctx: web_sys::CanvasRenderingContext2d,
    slot: RwSignal<Option<AnimationFrame>, LocalStorage>,
) {
    {
        let mut field = field.borrow_mut();
        field.step();
        draw(&ctx, &field);
    }

    let next = {
        let field = Rc::clone(&field);
        request_animation_frame(move |_| tick(field, ctx, slot))
    };
    slot.set(Some(next));
}

/// Decorative particle layer behind the page content.
///
/// Independent of the configuration: a fixed population of translucent
/// drifting dots, regenerated whenever the viewport resizes, stepped once
/// per display refresh until the component unmounts.
#[component]
pub fn AmbientBackground() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    // Cancellation slots; clearing them drops the pending frame and the
    // resize listener.
    let frame = RwSignal::new_local(None::<AnimationFrame>);
    let resize = RwSignal::new_local(None::<EventListener>);

    Effect::new(move |_| {
        if frame.with_untracked(Option::is_some) {
            return;
        }
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
        else {
            log::warn!("ambient background: 2d context unavailable");
            return;
        };

        let (width, height) = document_extent();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let field = Rc::new(RefCell::new(ParticleField::new(
            width,
            height,
            &mut || js_sys::Math::random(),
        )));

        if let Some(window) = web_sys::window() {
            let field = Rc::clone(&field);
            let canvas = canvas.clone();
            resize.set(Some(EventListener::new(&window, "resize", move |_| {
                let (width, height) = document_extent();
                canvas.set_width(width as u32);
                canvas.set_height(height as u32);
                field
                    .borrow_mut()
                    .resize(width, height, &mut || js_sys::Math::random());
            })));
        }

        tick(field, ctx, frame);
    });

    on_cleanup(move || {
        frame.set(None);
        resize.set(None);
    });

    view! { <canvas class="bg-canvas" node_ref=canvas_ref aria-hidden="true"></canvas> }
}
