use crate::core::LoopGate;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Something that draws once per display refresh while its loop runs.
pub trait FrameTarget: 'static {
    fn render_loop(&mut self) -> &mut RenderLoop;

    /// One frame at `now_ms`. Returning false ends the loop.
    fn frame(&mut self, now_ms: f64) -> bool;
}

/// requestAnimationFrame driver that re-registers itself every frame.
///
/// Stopping cancels the pending request and bumps the gate, so a callback
/// already queued by the browser finds a stale generation and returns early.
#[derive(Default)]
pub struct RenderLoop {
    gate: LoopGate,
    raf_id: Option<i32>,
    tick: Option<Closure<dyn FnMut()>>,
}

impl RenderLoop {
    pub fn is_running(&self) -> bool {
        self.gate.is_running()
    }

    pub fn start<T: FrameTarget>(&mut self, target: Weak<RefCell<T>>) -> bool {
        let Some(generation) = self.gate.start() else {
            return false;
        };
        let closure = Closure::wrap(Box::new(move || {
            let Some(rc) = target.upgrade() else {
                return;
            };
            let Ok(mut t) = rc.try_borrow_mut() else {
                return;
            };
            let lp = t.render_loop();
            lp.raf_id = None;
            if !lp.gate.admits(generation) {
                return;
            }
            if t.frame(instant::now()) {
                t.render_loop().schedule();
            } else {
                t.render_loop().stop();
            }
        }) as Box<dyn FnMut()>);
        // The previous closure is never the one currently executing: start is
        // only reached from event callbacks, never from inside a tick.
        self.tick = Some(closure);
        self.schedule();
        true
    }

    fn schedule(&mut self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = &self.tick {
            self.raf_id = w.request_animation_frame(cb.as_ref().unchecked_ref()).ok();
        }
    }

    /// Returns true if the loop was running.
    pub fn stop(&mut self) -> bool {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.gate.stop()
    }

    /// Stop and release the tick closure. Must not be called from inside a tick.
    pub fn dispose(&mut self) {
        self.stop();
        self.tick = None;
    }
}
