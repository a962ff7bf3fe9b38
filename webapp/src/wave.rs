use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::prelude::*;
use gloo_events::EventListener;
use gloo_render::{AnimationFrame, request_animation_frame};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const CANVAS_ID: &str = "wave-canvas";

// fixed time step per frame: the animation speed is tied to the achieved
// frame rate, not to measured elapsed time
const TIME_STEP: f64 = 16.0;

/// Base gradient hue at a given animation time; wraps every 7200 time units.
pub fn base_hue(time: f64) -> f64 {
    (time * 0.05) % 360.0
}

/// The three gradient stop hues, spaced 60 degrees apart around the wheel.
pub fn stop_hues(time: f64) -> [f64; 3] {
    let hue = base_hue(time);
    [hue, (hue + 60.0) % 360.0, (hue + 120.0) % 360.0]
}

/// Vertical position of the waveform at column `x`, centered on the canvas
/// with an amplitude of 30% of its height.
pub fn wave_y(x: f64, time: f64, height: f64) -> f64 {
    height * 0.5 + (x * 0.002 + time * 0.001).sin() * (height * 0.3)
}

struct WaveState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    time: Cell<f64>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl WaveState {
    fn draw(&self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        let time = self.time.get();

        self.ctx.set_fill_style_str("black");
        self.ctx.fill_rect(0.0, 0.0, w, h);

        self.ctx.begin_path();
        let mut x = 0.0;
        while x <= w {
            let y = wave_y(x, time, h);
            if x == 0.0 {
                self.ctx.move_to(x, y);
            } else {
                self.ctx.line_to(x, y);
            }
            x += 1.0;
        }

        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, w, 0.0);
        let [h0, h1, h2] = stop_hues(time);
        let _ = gradient.add_color_stop(0.0, &format!("hsla({h0}, 100%, 50%, 0.6)"));
        let _ = gradient.add_color_stop(0.5, &format!("hsla({h1}, 100%, 60%, 0.8)"));
        let _ = gradient.add_color_stop(1.0, &format!("hsla({h2}, 100%, 50%, 0.6)"));

        self.ctx.set_stroke_style_canvas_gradient(&gradient);
        self.ctx.set_line_width(h * 0.3);
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
        self.ctx.stroke();
    }
}

// WaveHandle
//
// owns the pending animation frame and the viewport resize listener; both
// are cancelled by dropping this, so teardown cannot leak callbacks
struct WaveHandle {
    state: Rc<WaveState>,
    _resize: EventListener,
}

impl WaveHandle {
    fn stop(self) {
        self.state.frame.borrow_mut().take();
    }
}

fn resize_to_viewport(canvas: &HtmlCanvasElement) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let width = window.inner_width().ok().and_then(|v| v.as_f64());
    let height = window.inner_height().ok().and_then(|v| v.as_f64());

    if let (Some(width), Some(height)) = (width, height) {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }
}

// each frame draws once and then re-arms itself; the handle in the shared
// state always points at the pending callback
fn schedule_frame(state: Rc<WaveState>) {
    let next = state.clone();

    let frame = request_animation_frame(move |_| {
        next.time.set(next.time.get() + TIME_STEP);
        next.draw();
        schedule_frame(next.clone());
    });

    *state.frame.borrow_mut() = Some(frame);
}

fn start() -> Option<WaveHandle> {
    let window = web_sys::window()?;
    let document = window.document()?;

    let canvas = document
        .get_element_by_id(CANVAS_ID)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()?;

    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    resize_to_viewport(&canvas);

    let state = Rc::new(WaveState {
        canvas: canvas.clone(),
        ctx,
        time: Cell::new(0.0),
        frame: RefCell::new(None),
    });

    let resize = EventListener::new(&window, "resize", move |_| {
        resize_to_viewport(&canvas);
    });

    schedule_frame(state.clone());

    Some(WaveHandle {
        state,
        _resize: resize,
    })
}

#[component]
pub fn WaveBackground() -> Element {
    let handle: Rc<RefCell<Option<WaveHandle>>> = use_hook(|| Rc::new(RefCell::new(None)));

    {
        let handle = handle.clone();
        use_effect(move || {
            if handle.borrow().is_none() {
                match start() {
                    Some(wave) => *handle.borrow_mut() = Some(wave),
                    // without a drawing context the backdrop stays black
                    None => warn!("wave background disabled: no 2d canvas context"),
                }
            }
        });
    }

    use_drop(move || {
        if let Some(wave) = handle.borrow_mut().take() {
            wave.stop();
        }
    });

    rsx! {
        canvas { id: CANVAS_ID, class: "wave-canvas" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn hue_cycle_closes_after_full_period() {
        for time in [0.0, 16.0, 123.0, 4096.0, 7199.0] {
            let delta = (base_hue(time) - base_hue(time + 7200.0)).abs();
            assert!(delta < EPSILON, "hue drifted by {delta} at t = {time}");
        }
    }

    #[test]
    fn stop_hues_stay_on_the_wheel() {
        for time in [0.0, 5000.0, 6800.0, 7100.0] {
            for hue in stop_hues(time) {
                assert!((0.0..360.0).contains(&hue));
            }
        }
    }

    #[test]
    fn wave_stays_within_amplitude_band() {
        let height = 900.0;
        let mut x = 0.0;
        while x <= 1440.0 {
            let y = wave_y(x, 12345.0, height);
            assert!((y - height * 0.5).abs() <= height * 0.3 + EPSILON);
            x += 1.0;
        }
    }

    #[test]
    fn wave_crosses_center_at_zero_phase() {
        assert!((wave_y(0.0, 0.0, 600.0) - 300.0).abs() < EPSILON);
    }
}
