//! Browser driver: frame loop and click removal
//!
//! The world lives in one `Rc<RefCell<WorldCore>>` shared by the
//! `requestAnimationFrame` callback and the canvas `click` listener. Both run
//! on the main thread and never overlap, so a click always lands between
//! two ticks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use crate::simulation::{SimulationSettings, WorldCore};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running animation
#[wasm_bindgen]
pub struct Animation {
    world: Rc<RefCell<WorldCore>>,
    running: Rc<Cell<bool>>,
    canvas: HtmlCanvasElement,
    on_click: Closure<dyn FnMut(MouseEvent)>,
}

#[wasm_bindgen]
impl Animation {
    /// Stop scheduling frames and detach the click listener
    pub fn stop(&mut self) -> Result<(), JsValue> {
        if !self.running.replace(false) {
            return Ok(());
        }
        self.canvas
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref())?;
        console_log!("animation stopped after {} frames", self.world.borrow().frame());
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.running.get()
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 {
        self.world.borrow().particle_count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.world.borrow().frame()
    }
}

/// Size the canvas to the window, spawn the initial particles and run until
/// stopped. `settings_json` is an optional `SimulationSettings` object.
#[wasm_bindgen(js_name = startAnimation)]
pub fn start(canvas_id: &str, settings_json: Option<String>) -> Result<Animation, JsValue> {
    let settings = match settings_json {
        Some(json) => SimulationSettings::from_json(&json).map_err(|e| {
            console_warn!("settings rejected: {}", e);
            JsValue::from_str(&e)
        })?,
        None => SimulationSettings::default(),
    };

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("element '{}' is not a canvas", canvas_id)))?;

    let width = window_dimension(window.inner_width(), "innerWidth")?;
    let height = window_dimension(window.inner_height(), "innerHeight")?;
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
        .style()
        .set_property("background", &settings.background.to_css())?;

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("2d context has an unexpected type"))?;

    let initial_count = settings.initial_count;
    let mut core = WorldCore::with_settings(width, height, settings).map_err(|e| JsValue::from_str(&e))?;
    core.generate(initial_count);
    let world = Rc::new(RefCell::new(core));

    let on_click = {
        let world = Rc::clone(&world);
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let x = event.client_x() as f64;
            let y = event.client_y() as f64;
            let removed = world.borrow_mut().remove_at(x, y);
            if removed > 0 {
                console_log!("click at ({}, {}) removed {} particle(s)", x, y, removed);
            }
        })
    };
    canvas.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

    let running = Rc::new(Cell::new(true));
    run_frames(window, Rc::clone(&world), ctx, Rc::clone(&running))?;

    console_log!("animation started on #{} ({}x{}, {} particles)", canvas_id, width, height, initial_count);

    Ok(Animation {
        world,
        running,
        canvas,
        on_click,
    })
}

fn window_dimension(value: Result<JsValue, JsValue>, name: &str) -> Result<u32, JsValue> {
    value?
        .as_f64()
        .map(|v| v.max(0.0) as u32)
        .ok_or_else(|| JsValue::from_str(&format!("window.{} is not a number", name)))
}

/// Self-rescheduling frame callback. It drops itself once `running` is false.
fn run_frames(
    window: Window,
    world: Rc<RefCell<WorldCore>>,
    mut ctx: CanvasRenderingContext2d,
    running: Rc<Cell<bool>>,
) -> Result<(), JsValue> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = Rc::clone(&callback);
    let loop_window = window.clone();

    *callback.borrow_mut() = Some(Closure::new(move || {
        if !running.get() {
            let _ = next.borrow_mut().take();
            return;
        }

        world.borrow_mut().step(&mut ctx);

        if let Some(cb) = next.borrow().as_ref() {
            if let Err(e) = loop_window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                console_warn!("requestAnimationFrame failed: {:?}", e);
                running.set(false);
            }
        }
    }));

    let first = callback.borrow();
    if let Some(cb) = first.as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
