//! Cover export: rasterize the preview layer stack to a PNG download.
//!
//! The export paints the same layers as [`crate::preview::CoverPreview`], in
//! the same z-order, onto an offscreen canvas at the fixed 2x pixel density
//! (1080×1920), then triggers a browser download named after the business.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use vitrina_core::cover::{self, EXPORT_SCALE, FRAME_HEIGHT, FRAME_WIDTH, Tone};

use crate::state::CoverDraft;

/// Export canvas width in device pixels.
const WIDTH: f64 = (FRAME_WIDTH * EXPORT_SCALE) as f64;
/// Export canvas height in device pixels.
const HEIGHT: f64 = (FRAME_HEIGHT * EXPORT_SCALE) as f64;

const MARGIN: f64 = 48.0;
const HEADLINE_FONT: &str = "800 76px sans-serif";
const SUBHEAD_FONT: &str = "800 54px sans-serif";
const SIGNATURE_FONT: &str = "italic 600 42px sans-serif";
const CHIP_FONT: &str = "600 32px sans-serif";
const LOGO_SIZE: f64 = 104.0;

/// Errors surfaced by the export pipeline.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Canvas creation or drawing failed.
    #[error("canvas error: {0}")]
    Canvas(String),

    /// An image payload could not be decoded.
    #[error("image decode failed for the {0} slot")]
    Image(&'static str),

    /// PNG encoding or download handoff failed.
    #[error("encoding error: {0}")]
    Encode(String),
}

impl ExportError {
    fn canvas(detail: impl Into<String>) -> Self {
        Self::Canvas(detail.into())
    }
}

/// Rasterize the draft and trigger the PNG download.
pub async fn download_png(draft: &CoverDraft) -> Result<(), ExportError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExportError::canvas("document unavailable"))?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| ExportError::canvas("canvas creation failed"))?
        .dyn_into()
        .map_err(|_| ExportError::canvas("canvas creation failed"))?;
    canvas.set_width(WIDTH as u32);
    canvas.set_height(HEIGHT as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into().ok())
        .ok_or_else(|| ExportError::canvas("2d context unavailable"))?;

    let owner = load_slot(draft.owner.as_deref(), "owner").await?;
    let face = load_slot(draft.face.as_deref(), "face").await?;
    let logo = load_slot(draft.logo.as_deref(), "logo").await?;

    ctx.set_filter(&cover::contrast_filter(draft.contrast));
    paint(&ctx, draft, owner.as_ref(), face.as_ref(), logo.as_ref())?;

    let data_url = canvas
        .to_data_url()
        .map_err(|_| ExportError::Encode("PNG encoding failed".into()))?;
    trigger_download(&data_url, &cover::export_filename(&draft.business_name))
}

/// Decode one optional data-URI slot into a drawable image.
async fn load_slot(
    data_url: Option<&str>,
    slot: &'static str,
) -> Result<Option<HtmlImageElement>, ExportError> {
    let Some(data_url) = data_url else {
        return Ok(None);
    };

    let img = HtmlImageElement::new().map_err(|_| ExportError::Image(slot))?;
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(data_url);
    wasm_bindgen_futures::JsFuture::from(loaded)
        .await
        .map_err(|_| ExportError::Image(slot))?;

    Ok(Some(img))
}

fn paint(
    ctx: &CanvasRenderingContext2d,
    draft: &CoverDraft,
    owner: Option<&HtmlImageElement>,
    face: Option<&HtmlImageElement>,
    logo: Option<&HtmlImageElement>,
) -> Result<(), ExportError> {
    // Base
    ctx.set_fill_style_str("#000000");
    ctx.fill_rect(0.0, 0.0, WIDTH, HEIGHT);

    paint_tone(ctx, draft.tone)?;

    if let Some(owner) = owner {
        paint_cover_fit(ctx, owner, 0.8)?;
    }

    paint_sparks(ctx, draft.spark_intensity)?;
    paint_headings(ctx, &draft.headline, &draft.subhead)?;

    if let Some(face) = face {
        paint_face(ctx, face)?;
    }

    paint_brandline(ctx, logo, &draft.signature)?;
    paint_chip(ctx, &format!("{} • {}", draft.business_name, draft.city))?;

    Ok(())
}

fn paint_tone(ctx: &CanvasRenderingContext2d, tone: Tone) -> Result<(), ExportError> {
    let gradient = ctx.create_linear_gradient(0.0, 0.0, WIDTH, HEIGHT);
    let [from, via, to] = tone.stops();
    for (offset, color) in [(0.0_f32, from), (0.5, via), (1.0, to)] {
        gradient
            .add_color_stop(offset, color)
            .map_err(|_| ExportError::canvas("tone gradient stop"))?;
    }
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, WIDTH, HEIGHT);
    Ok(())
}

/// Distance from a point to the farthest canvas corner, the CSS default
/// radial-gradient extent.
fn farthest_corner(cx: f64, cy: f64) -> f64 {
    let dx = cx.max(WIDTH - cx);
    let dy = cy.max(HEIGHT - cy);
    (dx * dx + dy * dy).sqrt()
}

fn paint_sparks(ctx: &CanvasRenderingContext2d, intensity: u32) -> Result<(), ExportError> {
    let Some((a1, a2, a3)) = cover::spark_alphas(intensity) else {
        return Ok(());
    };

    let (cx, cy) = (WIDTH * 0.7, HEIGHT * 0.7);
    let gradient = ctx
        .create_radial_gradient(cx, cy, 0.0, cx, cy, farthest_corner(cx, cy))
        .map_err(|_| ExportError::canvas("spark gradient"))?;
    for (offset, color) in [
        (0.0_f32, format!("rgba(255, 180, 80, {a1})")),
        (0.2, format!("rgba(255, 140, 0, {a2})")),
        (0.4, "rgba(0, 0, 0, 0)".to_string()),
    ] {
        gradient
            .add_color_stop(offset, &color)
            .map_err(|_| ExportError::canvas("spark gradient stop"))?;
    }
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, WIDTH, HEIGHT);

    let (cx, cy) = (WIDTH * 0.8, HEIGHT * 0.6);
    let gradient = ctx
        .create_radial_gradient(cx, cy, 0.0, cx, cy, farthest_corner(cx, cy))
        .map_err(|_| ExportError::canvas("spark gradient"))?;
    for (offset, color) in [
        (0.0_f32, format!("rgba(255, 220, 120, {a3})")),
        (0.5, "rgba(0, 0, 0, 0)".to_string()),
    ] {
        gradient
            .add_color_stop(offset, &color)
            .map_err(|_| ExportError::canvas("spark gradient stop"))?;
    }
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, WIDTH, HEIGHT);

    Ok(())
}

/// Draw an image scaled to cover the whole frame, centered.
fn paint_cover_fit(
    ctx: &CanvasRenderingContext2d,
    img: &HtmlImageElement,
    alpha: f64,
) -> Result<(), ExportError> {
    let (nw, nh) = (f64::from(img.natural_width()), f64::from(img.natural_height()));
    if nw <= 0.0 || nh <= 0.0 {
        return Ok(());
    }

    let scale = (WIDTH / nw).max(HEIGHT / nh);
    let (dw, dh) = (nw * scale, nh * scale);
    let (dx, dy) = ((WIDTH - dw) / 2.0, (HEIGHT - dh) / 2.0);

    ctx.set_global_alpha(alpha);
    let drawn = ctx.draw_image_with_html_image_element_and_dw_and_dh(img, dx, dy, dw, dh);
    ctx.set_global_alpha(1.0);
    drawn.map_err(map_js("owner photo draw"))
}

fn paint_headings(
    ctx: &CanvasRenderingContext2d,
    headline: &str,
    subhead: &str,
) -> Result<(), ExportError> {
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");
    let max_width = WIDTH - 2.0 * MARGIN;
    let mut y = MARGIN;

    ctx.set_font(HEADLINE_FONT);
    ctx.set_fill_style_str("#fde047");
    for line in wrap_lines(ctx, &headline.to_uppercase(), max_width) {
        ctx.fill_text(&line, MARGIN, y)
            .map_err(map_js("headline draw"))?;
        y += 84.0;
    }

    y += 12.0;
    ctx.set_font(SUBHEAD_FONT);
    ctx.set_fill_style_str("#ffffff");
    for line in wrap_lines(ctx, &subhead.to_uppercase(), max_width) {
        ctx.fill_text(&line, MARGIN, y)
            .map_err(map_js("subhead draw"))?;
        y += 62.0;
    }

    Ok(())
}

/// Greedy word wrap against the current canvas font.
fn wrap_lines(ctx: &CanvasRenderingContext2d, text: &str, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        let fits = ctx
            .measure_text(&candidate)
            .map(|m| m.width() <= max_width)
            .unwrap_or(true);
        if fits {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(current);
            }
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Face cutout anchored bottom-left at 70% frame width, aspect preserved.
fn paint_face(ctx: &CanvasRenderingContext2d, img: &HtmlImageElement) -> Result<(), ExportError> {
    let (nw, nh) = (f64::from(img.natural_width()), f64::from(img.natural_height()));
    if nw <= 0.0 || nh <= 0.0 {
        return Ok(());
    }

    let dw = WIDTH * 0.7;
    let dh = dw * nh / nw;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, HEIGHT - dh, dw, dh)
        .map_err(map_js("face draw"))
}

fn paint_brandline(
    ctx: &CanvasRenderingContext2d,
    logo: Option<&HtmlImageElement>,
    signature: &str,
) -> Result<(), ExportError> {
    ctx.set_font(SIGNATURE_FONT);
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str("rgba(255, 255, 255, 0.9)");

    let baseline_y = HEIGHT - MARGIN - LOGO_SIZE / 2.0;
    ctx.fill_text(signature, WIDTH - MARGIN, baseline_y)
        .map_err(map_js("signature draw"))?;

    if let Some(logo) = logo {
        let text_width = ctx
            .measure_text(signature)
            .map(|m| m.width())
            .unwrap_or(0.0);
        let x = WIDTH - MARGIN - text_width - 16.0 - LOGO_SIZE;
        ctx.draw_image_with_html_image_element_and_dw_and_dh(
            logo,
            x,
            HEIGHT - MARGIN - LOGO_SIZE,
            LOGO_SIZE,
            LOGO_SIZE,
        )
        .map_err(map_js("logo draw"))?;
    }

    Ok(())
}

fn paint_chip(ctx: &CanvasRenderingContext2d, text: &str) -> Result<(), ExportError> {
    ctx.set_font(CHIP_FONT);
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");

    let text_width = ctx.measure_text(text).map(|m| m.width()).unwrap_or(0.0);
    let (pad_x, chip_height) = (20.0, 56.0);
    let y = HEIGHT - MARGIN - chip_height;

    ctx.set_fill_style_str("rgba(255, 255, 255, 0.9)");
    ctx.fill_rect(MARGIN, y, text_width + 2.0 * pad_x, chip_height);
    ctx.set_fill_style_str("#000000");
    ctx.fill_text(text, MARGIN + pad_x, y + chip_height / 2.0)
        .map_err(map_js("chip draw"))
}

fn trigger_download(data_url: &str, filename: &str) -> Result<(), ExportError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExportError::Encode("document unavailable".into()))?;
    let body = document
        .body()
        .ok_or_else(|| ExportError::Encode("document body unavailable".into()))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| ExportError::Encode("anchor creation failed".into()))?
        .dyn_into()
        .map_err(|_| ExportError::Encode("anchor creation failed".into()))?;
    anchor.set_href(data_url);
    anchor.set_download(filename);

    body.append_child(&anchor)
        .map_err(|_| ExportError::Encode("anchor attach failed".into()))?;
    anchor.click();
    anchor.remove();
    Ok(())
}

fn map_js(detail: &'static str) -> impl FnOnce(JsValue) -> ExportError {
    move |_| ExportError::canvas(detail)
}
