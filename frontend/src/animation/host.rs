//! Browser facilities the animations depend on, behind small traits so the
//! loader and the particle field can be driven by fakes in tests.

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};
use yew::NodeRef;

/// One-shot deferred callbacks. Dropping the returned handle cancels the
/// callback if it has not fired yet.
pub trait TimerHost {
    type Handle;

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Callbacks gated on the next display refresh. Dropping the handle cancels.
pub trait FrameHost {
    type Handle;

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Current viewport size plus resize notifications. The listener stays
/// registered for as long as the subscription lives.
pub trait Viewport {
    type Subscription;

    fn size(&self) -> (f64, f64);
    fn on_resize(&self, callback: Box<dyn FnMut()>) -> Self::Subscription;
}

/// Pixel-addressable drawing target.
pub trait DrawSurface {
    fn set_size(&self, width: f64, height: f64);
    fn clear(&self);
    fn fill_circle(&self, x: f64, y: f64, radius: f64, fill: &str);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

impl TimerHost for BrowserTimers {
    type Handle = Timeout;

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFrames;

impl FrameHost for BrowserFrames {
    type Handle = AnimationFrame;

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> AnimationFrame {
        request_animation_frame(move |_timestamp| callback())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

pub struct ResizeListener {
    registered: Option<(Window, Closure<dyn FnMut()>)>,
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        if let Some((window, callback)) = self.registered.take() {
            let _ = window
                .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
        }
    }
}

impl Viewport for BrowserViewport {
    type Subscription = ResizeListener;

    fn size(&self) -> (f64, f64) {
        let Some(window) = web_sys::window() else {
            return (0.0, 0.0);
        };
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (width, height)
    }

    fn on_resize(&self, callback: Box<dyn FnMut()>) -> ResizeListener {
        let Some(window) = web_sys::window() else {
            return ResizeListener { registered: None };
        };
        let callback = Closure::wrap(callback);
        if window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("could not register resize listener");
            return ResizeListener { registered: None };
        }
        ResizeListener {
            registered: Some((window, callback)),
        }
    }
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the node is not mounted or has no 2d context.
    pub fn from_node(node: &NodeRef) -> Option<Self> {
        let canvas = node.cast::<HtmlCanvasElement>()?;
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, context })
    }
}

impl DrawSurface for CanvasSurface {
    fn set_size(&self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn clear(&self) {
        self.context.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_circle(&self, x: f64, y: f64, radius: f64, fill: &str) {
        self.context.begin_path();
        if self
            .context
            .arc(x, y, radius, 0.0, std::f64::consts::TAU)
            .is_err()
        {
            return;
        }
        self.context.set_fill_style_str(fill);
        self.context.fill();
    }
}
