use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, ResizeObserver, Window};

use crate::error::MountError;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A `requestAnimationFrame` loop. Dropping it cancels the pending frame
/// and stops the loop.
pub struct FrameLoop {
    window: Window,
    callback: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    /// Start calling `on_frame(dt_seconds)` once per display frame.
    pub fn start(window: &Window, mut on_frame: impl FnMut(f32) + 'static) -> Result<Self, MountError> {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(true));

        let last = Cell::new(None::<f64>);
        let cb = callback.clone();
        let pending_cb = pending.clone();
        let running_cb = running.clone();
        let window_cb = window.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            if !running_cb.get() {
                return;
            }
            // Tabs in the background stall rAF; don't replay that gap.
            let dt = last.replace(Some(now)).map_or(0.0, |prev| ((now - prev) / 1000.0).clamp(0.0, 0.1));
            on_frame(dt as f32);
            if let Some(next) = cb.borrow().as_ref() {
                match window_cb.request_animation_frame(next.as_ref().unchecked_ref()) {
                    Ok(id) => pending_cb.set(Some(id)),
                    Err(err) => log::error!("requestAnimationFrame failed: {:?}", err),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(first) = callback.borrow().as_ref() {
            let id = window
                .request_animation_frame(first.as_ref().unchecked_ref())
                .map_err(MountError::js)?;
            pending.set(Some(id));
        }

        Ok(Self {
            window: window.clone(),
            callback,
            pending,
            running,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to itself.
        self.callback.borrow_mut().take();
    }
}

/// Observes an element's size; disconnects when dropped.
pub struct ResizeWatch {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut()>,
}

impl ResizeWatch {
    pub fn observe(target: &Element, on_resize: impl FnMut() + 'static) -> Result<Self, MountError> {
        let callback = Closure::wrap(Box::new(on_resize) as Box<dyn FnMut()>);
        let observer =
            ResizeObserver::new(callback.as_ref().unchecked_ref()).map_err(MountError::js)?;
        observer.observe(target);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
