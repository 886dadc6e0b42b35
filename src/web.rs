// web.rs - Browser host (wasm32 only)
//
// Owns a GardenWorld and a 2D canvas context. A requestAnimationFrame loop
// advances and draws once per display refresh; a 16ms setInterval runs decay
// while exploring. Both callbacks and every exported method borrow the shared
// state one at a time on the browser's single thread.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::config::GardenConfig;
use crate::content::MessageBank;
use crate::error::GardenError;
use crate::render::{self, Canvas, RadialGradient, Shadow};
use crate::scene::{Emotion, Phase, Rgba};
use crate::sim::{GardenWorld, DECAY_INTERVAL_MS};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

impl From<GardenError> for JsValue {
    fn from(err: GardenError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

// ============================================================================
// Canvas backend
// ============================================================================

pub struct WebCanvas {
    element: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl WebCanvas {
    pub fn new(element: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = element
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { element, ctx })
    }

    fn resize(&self, width: u32, height: u32) {
        self.element.set_width(width);
        self.element.set_height(height);
    }
}

/// Canvas calls only fail on bad arguments; log and keep drawing
fn check(result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("canvas call failed: {err:?}");
    }
}

impl Canvas for WebCanvas {
    type Image = HtmlImageElement;

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn save(&mut self) { self.ctx.save(); }
    fn restore(&mut self) { self.ctx.restore(); }

    fn set_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn set_fill(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
    }

    fn set_stroke(&mut self, color: Rgba, width: f64) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width);
    }

    fn set_shadow(&mut self, shadow: Shadow) {
        self.ctx.set_shadow_color(&shadow.color.css());
        self.ctx.set_shadow_blur(shadow.blur);
        self.ctx.set_shadow_offset_x(shadow.offset_x);
        self.ctx.set_shadow_offset_y(shadow.offset_y);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn translate(&mut self, x: f64, y: f64) { check(self.ctx.translate(x, y)); }
    fn rotate(&mut self, angle: f64) { check(self.ctx.rotate(angle)); }

    fn begin_path(&mut self) { self.ctx.begin_path(); }
    fn move_to(&mut self, x: f64, y: f64) { self.ctx.move_to(x, y); }
    fn line_to(&mut self, x: f64, y: f64) { self.ctx.line_to(x, y); }

    fn quadratic_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.ctx.quadratic_curve_to(cx, cy, x, y);
    }

    fn bezier_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.ctx.bezier_curve_to(c1x, c1y, c2x, c2y, x, y);
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64) {
        check(self.ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU));
    }

    fn close_path(&mut self) { self.ctx.close_path(); }
    fn fill(&mut self) { self.ctx.fill(); }
    fn stroke(&mut self) { self.ctx.stroke(); }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_rect_gradient(&mut self, g: &RadialGradient, x: f64, y: f64, w: f64, h: f64) {
        let gradient = match self.ctx.create_radial_gradient(g.cx, g.cy, g.r0, g.cx, g.cy, g.r1) {
            Ok(gradient) => gradient,
            Err(err) => {
                log::warn!("radial gradient failed: {err:?}");
                return;
            }
        };
        for (offset, color) in &g.stops {
            check(gradient.add_color_stop(*offset as f32, &color.css()));
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(x, y, w, h);
    }

    fn draw_image(&mut self, image: &HtmlImageElement, x: f64, y: f64, w: f64, h: f64) {
        check(self.ctx.draw_image_with_html_image_element_and_dw_and_dh(image, x, y, w, h));
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        self.ctx.measure_text(text).map(|m| m.width()).unwrap_or(0.0)
    }

    fn fill_text_centered(&mut self, text: &str, x: f64, y: f64) {
        self.ctx.set_text_align("center");
        check(self.ctx.fill_text(text, x, y));
    }
}

// ============================================================================
// Scheduling
// ============================================================================

/// Self-rescheduling requestAnimationFrame callback
#[derive(Default)]
struct FrameLoop {
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameLoop {
    fn running(&self) -> bool {
        self.callback.borrow().is_some()
    }

    fn schedule(&self) {
        let Some(window) = web_sys::window() else { return };
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else { return };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(handle) => self.handle.set(Some(handle)),
            Err(err) => log::warn!("requestAnimationFrame failed: {err:?}"),
        }
    }

    fn cancel(&self) {
        if let (Some(handle), Some(window)) = (self.handle.take(), web_sys::window()) {
            check(window.cancel_animation_frame(handle));
        }
        self.callback.borrow_mut().take();
    }
}

/// setInterval registration, cleared on drop
struct Interval {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    fn every(ms: i32, f: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = Closure::<dyn FnMut()>::new(f);
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            ms,
        )?;
        Ok(Self { handle, _callback: callback })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

// ============================================================================
// Exported app
// ============================================================================

struct Host {
    world: GardenWorld,
    canvas: WebCanvas,
    background: Option<HtmlImageElement>,
}

#[wasm_bindgen]
pub struct GardenApp {
    host: Rc<RefCell<Host>>,
    frame: Rc<FrameLoop>,
    decay: Option<Interval>,
}

#[wasm_bindgen]
impl GardenApp {
    /// `config` is an optional JSON object of tunables
    #[wasm_bindgen(constructor)]
    pub fn new(element: HtmlCanvasElement, config: Option<String>) -> Result<GardenApp, JsValue> {
        let mut config = match config {
            Some(json) => GardenConfig::from_json(&json)?,
            None => GardenConfig::default(),
        };
        if config.seed.is_none() {
            config.seed = Some((js_sys::Math::random() * u32::MAX as f64) as u32);
        }

        let (w, h) = (element.width() as f64, element.height() as f64);
        let canvas = WebCanvas::new(element)?;
        let world = GardenWorld::new(w, h, config);
        log::info!("garden ready at {w}x{h}");

        Ok(GardenApp {
            host: Rc::new(RefCell::new(Host { world, canvas, background: None })),
            frame: Rc::new(FrameLoop::default()),
            decay: None,
        })
    }

    /// Begin drawing every animation frame
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.frame.running() { return Ok(()); }

        let host = self.host.clone();
        let frame = Rc::downgrade(&self.frame);
        let tick = Closure::<dyn FnMut()>::new(move || {
            {
                let mut host = host.borrow_mut();
                let Host { world, canvas, background } = &mut *host;
                world.advance_frame();
                render::draw_frame(world, canvas, background.as_ref());
            }
            if let Some(frame) = frame.upgrade() {
                frame.schedule();
            }
        });

        *self.frame.callback.borrow_mut() = Some(tick);
        self.frame.schedule();
        self.sync_decay()
    }

    /// Cancel the frame loop and decay timer
    pub fn stop(&mut self) {
        self.frame.cancel();
        self.decay = None;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let mut host = self.host.borrow_mut();
        host.canvas.resize(width, height);
        host.world.resize(width as f64, height as f64);
    }

    pub fn set_emotion(&mut self, key: &str) {
        self.host.borrow_mut().world.set_emotion(Emotion::from_key(key));
    }

    pub fn set_intensity(&mut self, intensity: f64) {
        self.host.borrow_mut().world.set_intensity(intensity);
    }

    pub fn set_phase(&mut self, phase: &str) -> Result<(), JsValue> {
        let phase: Phase = phase.parse()?;
        self.host.borrow_mut().world.set_phase(phase);
        self.sync_decay()
    }

    pub fn set_elapsed_seconds(&mut self, secs: u32) {
        self.host.borrow_mut().world.set_elapsed_seconds(secs);
    }

    /// `None` removes the background
    pub fn set_background(&mut self, image: Option<HtmlImageElement>) {
        self.host.borrow_mut().background = image;
    }

    pub fn load_messages(&mut self, json: &str) -> Result<(), JsValue> {
        let bank = MessageBank::from_json(json)?;
        self.host.borrow_mut().world.set_message_bank(bank);
        Ok(())
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.host.borrow_mut().world.pointer_move(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.host.borrow_mut().world.pointer_leave();
    }

    /// Returns how many spots the click discovered
    pub fn click(&mut self, x: f64, y: f64) -> usize {
        self.host.borrow_mut().world.click(x, y, js_sys::Date::now())
    }

    pub fn found_count(&self) -> usize {
        self.host.borrow().world.found_count()
    }

    /// `[{ text, color, elapsed_secs, tier }, ..]`
    pub fn found_messages_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.host.borrow().world.found_messages())
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    pub fn restart(&mut self) -> Result<(), JsValue> {
        self.host.borrow_mut().world.restart();
        self.sync_decay()
    }
}

impl GardenApp {
    /// Decay runs only while exploring with the frame loop up
    fn sync_decay(&mut self) -> Result<(), JsValue> {
        let wanted = self.frame.running() && self.host.borrow().world.scene().is_exploring();
        match (wanted, self.decay.is_some()) {
            (true, false) => {
                let host = self.host.clone();
                let interval = Interval::every(DECAY_INTERVAL_MS as i32, move || {
                    host.borrow_mut().world.decay_tick();
                })?;
                self.decay = Some(interval);
            }
            (false, true) => self.decay = None,
            _ => {}
        }
        Ok(())
    }
}

impl Drop for GardenApp {
    fn drop(&mut self) {
        self.stop();
    }
}
