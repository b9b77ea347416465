//! Thin helpers over web-sys for the bits of DOM the page touches.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};
use zaeon_core::Step;

use crate::error::MountError;

/// An event listener that unregisters itself when dropped.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, MountError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(MountError::js)?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// Holds page scroll disabled; dropping restores the previous `overflow`.
pub struct ScrollLock {
    body: HtmlElement,
    previous: String,
}

impl ScrollLock {
    pub fn acquire(document: &Document) -> Option<Self> {
        let body = document.body()?;
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        if let Err(err) = style.set_property("overflow", "hidden") {
            log::warn!("could not lock scroll: {:?}", err);
            return None;
        }
        Some(Self { body, previous })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        let restored = if self.previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &self.previous)
        };
        if let Err(err) = restored {
            log::warn!("could not restore scroll: {:?}", err);
        }
    }
}

/// Every element matching `selector`.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    query(document, selector).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Set one inline style property, logging failures.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::warn!("style {} rejected: {:?}", property, err);
    }
}

/// Set or remove a boolean attribute.
pub fn toggle_attr(el: &Element, name: &str, on: bool) {
    let result = if on {
        el.set_attribute(name, "")
    } else {
        el.remove_attribute(name)
    };
    if let Err(err) = result {
        log::warn!("attribute {} rejected: {:?}", name, err);
    }
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(err) = el.set_attribute(name, value) {
        log::warn!("attribute {} rejected: {:?}", name, err);
    }
}

/// Selector for the control that takes focus on `step`.
pub fn step_selector(step: Step) -> String {
    match step {
        Step::Ensino => r#"[data-ensino="sim"]"#.to_string(),
        step => format!(r#"[data-step-field="{}"]"#, step_key(step)),
    }
}

/// Attribute value naming a step in markup.
pub fn step_key(step: Step) -> &'static str {
    match step {
        Step::Id => "id",
        Step::Nome => "nome",
        Step::Email => "email",
        Step::Celular => "celular",
        Step::Ensino => "ensino",
    }
}

pub fn step_from_key(key: &str) -> Option<Step> {
    [Step::Id, Step::Nome, Step::Email, Step::Celular, Step::Ensino]
        .into_iter()
        .find(|&s| step_key(s) == key)
}

pub fn focus_step(document: &Document, step: Step) {
    if let Some(el) = query_html(document, &step_selector(step)) {
        if let Err(err) = el.focus() {
            log::debug!("focus {:?} failed: {:?}", step, err);
        }
    }
}

pub fn navigate(window: &Window, url: &str) {
    log::info!("navigating to {}", url);
    if let Err(err) = window.location().assign(url) {
        log::error!("navigation to {} failed: {:?}", url, err);
    }
}

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}

/// Host entropy for the rain RNG.
pub fn entropy_seed() -> u64 {
    let high = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let low = js_sys::Date::now() as u64;
    (high << 32) ^ low
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_keys_round_trip() {
        for step in [Step::Id, Step::Nome, Step::Email, Step::Celular, Step::Ensino] {
            assert_eq!(step_from_key(step_key(step)), Some(step));
        }
        assert_eq!(step_from_key("telefone"), None);
    }

    #[test]
    fn focus_selectors() {
        assert_eq!(step_selector(Step::Email), r#"[data-step-field="email"]"#);
        assert_eq!(step_selector(Step::Ensino), r#"[data-ensino="sim"]"#);
    }
}
