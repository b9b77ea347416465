//! Browser bridge for the Zaeon landing page.
//!
//! `zaeon_mount` wires `zaeon-core` onto the current document: the glyph
//! rain on `canvas[data-zaeon-rain]`, keyboard and pointer input into the
//! page machine, and the hover button / hero tracks on a shared animation
//! frame loop. Markup is found through `data-*` hooks; anything missing is
//! simply not driven.

pub mod canvas;
pub mod dom;
pub mod error;
pub mod frame_loop;
pub mod runner;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlCanvasElement, HtmlInputElement, KeyboardEvent, MouseEvent, Window};
use zaeon_core::{Ensino, PageAction, PageConfig};

use canvas::Canvas2d;
use dom::Listener;
use error::MountError;
use frame_loop::{FrameLoop, ResizeWatch};
use runner::{PageRunner, RainSurface};

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

/// Everything alive while the page is mounted. Dropping it detaches the
/// listeners, stops the frame loop and releases any scroll lock.
struct App {
    runner: Rc<RefCell<PageRunner>>,
    _listeners: Vec<Listener>,
    _resize: Option<ResizeWatch>,
    _frame_loop: FrameLoop,
}

impl App {
    fn mount(config_json: Option<&str>) -> Result<Self, MountError> {
        let config = match config_json {
            Some(json) => PageConfig::from_json(json)?,
            None => PageConfig::default(),
        };
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;
        let reduced = config
            .reduced_motion
            .unwrap_or_else(|| dom::prefers_reduced_motion(&window));

        let runner = Rc::new(RefCell::new(PageRunner::new(
            window.clone(),
            document.clone(),
            reduced,
        )));
        runner.borrow().render();

        let rain = mount_rain(&window, &document, &config, reduced)?;
        let resize = match &rain {
            Some(surface) => {
                let element = surface.borrow().element().clone();
                let surface = surface.clone();
                let window = window.clone();
                Some(ResizeWatch::observe(&element, move || {
                    if let Ok(mut surface) = surface.try_borrow_mut() {
                        surface.resize(&window);
                    }
                })?)
            }
            None => None,
        };

        let frame_loop = {
            let runner = runner.clone();
            FrameLoop::start(&window, move |dt| {
                if let Some(surface) = &rain {
                    if let Ok(mut surface) = surface.try_borrow_mut() {
                        surface.frame();
                    }
                }
                if let Ok(mut runner) = runner.try_borrow_mut() {
                    runner.tick(dt);
                }
            })?
        };

        let listeners = bind_listeners(&window, &document, &runner)?;
        log::info!(
            "zaeon: {} listeners, reduced motion {}",
            listeners.len(),
            reduced
        );

        Ok(Self {
            runner,
            _listeners: listeners,
            _resize: resize,
            _frame_loop: frame_loop,
        })
    }
}

/// The background canvas, unless motion is reduced or the page has none.
/// A canvas without a 2D context is fatal.
fn mount_rain(
    window: &Window,
    document: &Document,
    config: &PageConfig,
    reduced: bool,
) -> Result<Option<Rc<RefCell<RainSurface>>>, MountError> {
    if reduced {
        log::info!("zaeon: reduced motion, glyph rain not mounted");
        return Ok(None);
    }
    let Some(element) = dom::query(document, "canvas[data-zaeon-rain]") else {
        log::warn!("zaeon: no canvas[data-zaeon-rain], glyph rain not mounted");
        return Ok(None);
    };
    let canvas = element
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| MountError::Js("data-zaeon-rain is not on a canvas".to_string()))?;
    let canvas = Canvas2d::new(canvas)?;
    Ok(Some(Rc::new(RefCell::new(RainSurface::new(window, canvas, config)))))
}

/// Attach `kind` listeners to every element matching `selector`, turning
/// each event into a page action.
fn bind_actions(
    listeners: &mut Vec<Listener>,
    document: &Document,
    runner: &Rc<RefCell<PageRunner>>,
    selector: &str,
    kind: &'static str,
    action: impl Fn(&Element) -> Option<PageAction> + Clone + 'static,
) -> Result<(), MountError> {
    for element in dom::query_all(document, selector) {
        let runner = runner.clone();
        let action = action.clone();
        let target = element.clone();
        listeners.push(Listener::new(&element, kind, move |event: Event| {
            let Some(action) = action(&target) else {
                return;
            };
            // Picker controls sit inside the "Nova conta" item.
            event.stop_propagation();
            let Ok(mut runner) = runner.try_borrow_mut() else {
                return;
            };
            if runner.dispatch(action).consumed {
                event.prevent_default();
            }
        })?);
    }
    Ok(())
}

/// Cursor position relative to `section`'s top-left corner.
fn section_point(section: &Element, mouse: &MouseEvent) -> (f32, f32) {
    let rect = section.get_bounding_client_rect();
    let x = mouse.client_x() as f64 - rect.left();
    let y = mouse.client_y() as f64 - rect.top();
    (x as f32, y as f32)
}

fn menu_index(el: &Element) -> Option<usize> {
    el.get_attribute("data-menu-index")?.parse().ok()
}

fn bind_listeners(
    window: &Window,
    document: &Document,
    runner: &Rc<RefCell<PageRunner>>,
) -> Result<Vec<Listener>, MountError> {
    let mut listeners = Vec::new();

    {
        let runner = runner.clone();
        listeners.push(Listener::new(window, "keydown", move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Ok(mut runner) = runner.try_borrow_mut() else {
                return;
            };
            if runner.key_code(&key.code()).consumed {
                event.prevent_default();
            }
        })?);
    }

    let l = &mut listeners;
    bind_actions(l, document, runner, "[data-menu-index]", "mouseenter", |el| {
        menu_index(el).map(PageAction::HoverMenu)
    })?;
    bind_actions(l, document, runner, "[data-menu-index]", "click", |el| {
        menu_index(el).map(PageAction::ClickMenu)
    })?;
    bind_actions(l, document, runner, "[data-role-prev]", "click", |_| {
        Some(PageAction::PickerPrev)
    })?;
    bind_actions(l, document, runner, "[data-role-next]", "click", |_| {
        Some(PageAction::PickerNext)
    })?;
    bind_actions(l, document, runner, "[data-role-chip]", "click", |_| {
        Some(PageAction::PickerConfirm)
    })?;
    bind_actions(l, document, runner, "[data-step-field]", "input", |el| {
        let step = dom::step_from_key(&el.get_attribute("data-step-field")?)?;
        let value = el.dyn_ref::<HtmlInputElement>()?.value();
        Some(PageAction::EditField(step, value))
    })?;
    bind_actions(l, document, runner, "[data-ensino]", "change", |el| {
        match el.get_attribute("data-ensino")?.as_str() {
            "sim" => Some(PageAction::SetEnsino(Ensino::Sim)),
            "nao" => Some(PageAction::SetEnsino(Ensino::Nao)),
            _ => None,
        }
    })?;
    bind_actions(l, document, runner, "[data-onboarding-close]", "click", |_| {
        Some(PageAction::CloseOnboarding)
    })?;
    bind_actions(l, document, runner, "[data-onboarding-submit]", "click", |_| {
        Some(PageAction::SubmitOnboarding)
    })?;

    // The button follows the cursor only over the artwork, but it is
    // positioned inside the section, so coordinates are section-relative.
    if let (Some(section), Some(art)) = (
        dom::query(document, "[data-cta-section]"),
        dom::query(document, "[data-hero-art]"),
    ) {
        {
            let runner = runner.clone();
            listeners.push(Listener::new(&art, "mousemove", move |event: Event| {
                let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let (x, y) = section_point(&section, mouse);
                if let Ok(mut runner) = runner.try_borrow_mut() {
                    runner.cta_move(x, y);
                }
            })?);
        }
        for (kind, hovering) in [("mouseenter", true), ("mouseleave", false)] {
            let runner = runner.clone();
            listeners.push(Listener::new(&art, kind, move |_event: Event| {
                if let Ok(mut runner) = runner.try_borrow_mut() {
                    runner.cta_hover(hovering);
                }
            })?);
        }
    }
    if let Some(button) = dom::query(document, "[data-cta]") {
        let runner = runner.clone();
        listeners.push(Listener::new(&button, "click", move |_event: Event| {
            if let Ok(mut runner) = runner.try_borrow_mut() {
                runner.cta_click();
            }
        })?);
    }

    Ok(listeners)
}

/// Mount the page onto the current document. `config_json` is an optional
/// `PageConfig`; missing fields take their defaults. Mounting again
/// replaces the previous mount.
#[wasm_bindgen]
pub fn zaeon_mount(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    zaeon_unmount();
    let app = App::mount(config_json.as_deref())?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));
    log::info!("zaeon: mounted");
    Ok(())
}

/// Stop every animation and detach from the document.
#[wasm_bindgen]
pub fn zaeon_unmount() {
    let app = APP.with(|cell| cell.borrow_mut().take());
    if app.is_some() {
        drop(app);
        log::info!("zaeon: unmounted");
    }
}

/// The current page state as JSON.
#[wasm_bindgen]
pub fn zaeon_snapshot() -> Result<String, JsValue> {
    APP.with(|cell| {
        let borrow = cell.borrow();
        let app = borrow
            .as_ref()
            .ok_or_else(|| JsValue::from_str("zaeon not mounted; call zaeon_mount() first"))?;
        let view = app.runner.borrow().snapshot();
        serde_json::to_string(&view).map_err(|e| JsValue::from_str(&e.to_string()))
    })
}
