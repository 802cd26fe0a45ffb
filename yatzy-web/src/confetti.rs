//! Full-screen canvas overlay that plays one confetti burst.
//!
//! The overlay removes itself once every flake has left the viewport, or on
//! the first frame after [`ConfettiHandle::stop`].
use std::cell::Cell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use rand::SeedableRng;
#[cfg(target_arch = "wasm32")]
use rand::rngs::SmallRng;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(target_arch = "wasm32")]
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};
#[cfg(target_arch = "wasm32")]
use yatzy_game::ConfettiBurst;

/// Early-stop handle for a running burst.
#[derive(Debug, Clone, Default)]
pub struct ConfettiHandle {
    stopped: Rc<Cell<bool>>,
}

impl ConfettiHandle {
    pub fn stop(&self) {
        self.stopped.set(true);
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

impl PartialEq for ConfettiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.stopped, &other.stopped)
    }
}

/// Start a burst over the whole viewport.
///
/// Returns `None` outside a browser or when the canvas cannot be set up; the
/// failure is logged and the celebration is simply skipped.
#[must_use]
pub fn launch() -> Option<ConfettiHandle> {
    #[cfg(target_arch = "wasm32")]
    {
        match start_burst() {
            Ok(handle) => Some(handle),
            Err(err) => {
                log::warn!(
                    "Confetti unavailable: {}",
                    crate::dom::js_error_message(&err)
                );
                None
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg(target_arch = "wasm32")]
type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[cfg(target_arch = "wasm32")]
fn start_burst() -> Result<ConfettiHandle, JsValue> {
    let window = crate::dom::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document body unavailable"))?;

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_id("confetti-canvas");
    let style = canvas.style();
    for (prop, value) in [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("pointer-events", "none"),
        ("z-index", "9999"),
    ] {
        style.set_property(prop, value)?;
    }
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;

    let (width, height) = crate::dom::viewport_size().unwrap_or((800.0, 600.0));
    size_canvas(&canvas, width, height);
    body.append_child(&canvas)?;

    let rng = SmallRng::seed_from_u64(crate::dom::entropy_seed());
    let burst = Rc::new(RefCell::new(ConfettiBurst::new(width, height, rng)));
    let handle = ConfettiHandle::default();

    let on_resize = {
        let canvas = canvas.clone();
        let burst = Rc::clone(&burst);
        Closure::<dyn FnMut()>::new(move || {
            if let Some((w, h)) = crate::dom::viewport_size() {
                size_canvas(&canvas, w, h);
                burst.borrow_mut().resize(w, h);
            }
        })
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

    let frame: FrameSlot = Rc::new(RefCell::new(None));
    {
        let frame_loop = Rc::clone(&frame);
        let stopped = Rc::clone(&handle.stopped);
        let win = window.clone();
        let mut on_resize = Some(on_resize);
        *frame.borrow_mut() = Some(Closure::new(move || {
            let finished = {
                let mut burst = burst.borrow_mut();
                burst.advance();
                burst.is_finished()
            };
            if finished || stopped.get() {
                if let Some(cb) = on_resize.take() {
                    let _ = win
                        .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
                }
                canvas.remove();
                // Dropping our own closure; it is released once this call returns.
                let _ = frame_loop.borrow_mut().take();
                return;
            }
            paint(&ctx, &canvas, &burst.borrow());
            request_frame(&win, &frame_loop);
        }));
    }
    request_frame(&window, &frame);
    Ok(handle)
}

#[cfg(target_arch = "wasm32")]
fn request_frame(window: &Window, frame: &FrameSlot) {
    if let Some(cb) = frame.borrow().as_ref()
        && let Err(err) = window.request_animation_frame(cb.as_ref().unchecked_ref())
    {
        log::warn!(
            "Confetti frame request failed: {}",
            crate::dom::js_error_message(&err)
        );
    }
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn size_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}

#[cfg(target_arch = "wasm32")]
fn paint(
    ctx: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    burst: &ConfettiBurst<SmallRng>,
) {
    ctx.clear_rect(
        0.0,
        0.0,
        f64::from(canvas.width()),
        f64::from(canvas.height()),
    );
    for particle in burst.particles() {
        ctx.save();
        let _ = ctx.translate(particle.x, particle.y);
        let _ = ctx.rotate(particle.rotation);
        ctx.set_fill_style_str(particle.fill());
        let (w, h) = particle.drawn_size();
        ctx.fill_rect(-w / 2.0, -h / 2.0, w, h);
        ctx.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_share_the_stop_flag() {
        let handle = ConfettiHandle::default();
        let copy = handle.clone();
        assert_eq!(handle, copy);
        assert_ne!(handle, ConfettiHandle::default());
        copy.stop();
        assert!(handle.is_stopped());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_hosts_skip_the_burst() {
        assert!(launch().is_none());
    }
}
