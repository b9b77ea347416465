use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, HtmlInputElement, Window};
use zaeon_core::{
    hero_gradient, Effect, GlyphRain, HeroMotion, HoverCta, Outcome, PageAction, PageConfig,
    PageMachine, PageView, Rng, Step,
};

use crate::canvas::Canvas2d;
use crate::dom::{self, ScrollLock};

/// The background canvas and its animation.
pub struct RainSurface {
    canvas: Canvas2d,
    rain: GlyphRain<Rng>,
}

impl RainSurface {
    pub fn new(window: &Window, mut canvas: Canvas2d, config: &PageConfig) -> Self {
        let seed = config.seed.unwrap_or_else(dom::entropy_seed);
        let rain = GlyphRain::new(config.rain.clone(), canvas.measure(window), Rng::new(seed));
        rain.attach(&mut canvas);
        Self { canvas, rain }
    }

    pub fn element(&self) -> &HtmlCanvasElement {
        self.canvas.element()
    }

    pub fn frame(&mut self) {
        self.rain.frame(&mut self.canvas);
    }

    pub fn resize(&mut self, window: &Window) {
        let surface = self.canvas.measure(window);
        if surface != self.rain.surface() {
            self.rain.resize(surface, &mut self.canvas);
        }
    }
}

/// Owns the page state machine and mirrors it onto the DOM.
///
/// Every input goes through `dispatch`: the core decides, the runner
/// re-renders from the new snapshot and then performs the side effects.
pub struct PageRunner {
    window: Window,
    document: Document,
    page: PageMachine,
    cta: HoverCta,
    hero: HeroMotion,
    scroll_lock: Option<ScrollLock>,
    animated: Animated,
}

/// Elements restyled every frame, looked up once at mount.
struct Animated {
    cta: Option<HtmlElement>,
    hero_text: Option<HtmlElement>,
    hero_art: Option<HtmlElement>,
}

impl Animated {
    fn find(document: &Document) -> Self {
        Self {
            cta: dom::query_html(document, "[data-cta]"),
            hero_text: dom::query_html(document, "[data-hero-text]"),
            hero_art: dom::query_html(document, "[data-hero-art]"),
        }
    }
}

impl PageRunner {
    pub fn new(window: Window, document: Document, reduced_motion: bool) -> Self {
        Self {
            animated: Animated::find(&document),
            window,
            document,
            page: PageMachine::new(),
            cta: HoverCta::new(),
            hero: HeroMotion::new(reduced_motion),
            scroll_lock: None,
        }
    }

    pub fn snapshot(&self) -> PageView {
        self.page.snapshot()
    }

    pub fn dispatch(&mut self, action: PageAction) -> Outcome {
        let outcome = self.page.dispatch(action);
        if outcome.consumed {
            self.render();
            self.apply(&outcome.effects);
        }
        outcome
    }

    pub fn key_code(&mut self, code: &str) -> Outcome {
        match zaeon_core::Key::from_code(code) {
            Some(key) => self.dispatch(PageAction::Key(key)),
            None => Outcome::ignored(),
        }
    }

    pub fn cta_move(&mut self, x: f32, y: f32) {
        self.cta.pointer_move(x, y);
    }

    pub fn cta_hover(&mut self, hovering: bool) {
        if hovering {
            self.cta.hover_start();
        } else {
            self.cta.hover_end();
        }
    }

    pub fn cta_click(&mut self) {
        let outcome = self.cta.click();
        self.apply(&outcome.effects);
    }

    fn apply(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::Navigate(url) => dom::navigate(&self.window, url),
                Effect::LockScroll => {
                    if self.scroll_lock.is_none() {
                        self.scroll_lock = ScrollLock::acquire(&self.document);
                    }
                }
                // Drop restores the saved overflow.
                Effect::ReleaseScroll => self.scroll_lock = None,
                Effect::Focus(step) => dom::focus_step(&self.document, *step),
            }
        }
    }

    /// Advance the hover button and hero tracks and write their styles.
    pub fn tick(&mut self, dt: f32) {
        let cta = self.cta.tick(dt);
        // Reduced motion freezes the tracks on their first keys.
        let hero = self.hero.tick(dt);
        let Animated {
            cta: button,
            hero_text,
            hero_art,
        } = &self.animated;

        if let Some(el) = button {
            dom::set_style(el, "left", &format!("{}px", cta.x));
            dom::set_style(el, "top", &format!("{}px", cta.y));
            dom::set_style(el, "opacity", &cta.opacity.to_string());
            dom::set_style(
                el,
                "transform",
                &format!("translate(-50%, -100%) scale({})", cta.scale),
            );
        }
        // Hover scaling still applies with reduced motion.
        if let Some(el) = hero_art {
            dom::set_style(
                el,
                "transform",
                &format!("translateY({}px) scale({})", hero.art_y, cta.art_scale),
            );
        }
        if self.hero.is_reduced() {
            return;
        }
        if let Some(el) = hero_text {
            dom::set_style(el, "transform", &format!("translateY({}px)", hero.text_y));
            dom::set_style(el, "opacity", &hero.text_opacity.to_string());
            dom::set_style(el, "background-image", &hero_gradient(hero.gradient_phase));
        }
    }

    /// Mirror the current snapshot onto the markup.
    pub fn render(&self) {
        let view = self.page.snapshot();
        let doc = &self.document;

        for el in dom::query_all(doc, "[data-menu-index]") {
            let index = el
                .get_attribute("data-menu-index")
                .and_then(|v| v.parse::<usize>().ok());
            let selected = index == Some(view.menu_index);
            dom::set_attr(&el, "data-selected", if selected { "true" } else { "false" });
        }
        if let Some(el) = dom::query(doc, "[data-menu-index=\"0\"]") {
            dom::set_attr(&el, "aria-expanded", if view.picker_open { "true" } else { "false" });
        }

        if let Some(picker) = dom::query(doc, "[data-role-picker]") {
            dom::toggle_attr(&picker, "hidden", !view.picker_open);
        }
        if let Some(chip) = dom::query(doc, "[data-role-chip]") {
            chip.set_text_content(Some(view.picker_label));
        }

        let onboarding_open = view.onboarding.is_some();
        if let Some(hero) = dom::query_html(doc, "[data-hero]") {
            dom::set_attr(&hero, "aria-hidden", if onboarding_open { "true" } else { "false" });
            dom::set_style(&hero, "pointer-events", if onboarding_open { "none" } else { "auto" });
        }
        if let Some(modal) = dom::query(doc, "[data-onboarding]") {
            dom::toggle_attr(&modal, "hidden", !onboarding_open);
        }
        let Some(onboarding) = view.onboarding else {
            return;
        };

        if let Some(title) = dom::query(doc, "[data-onboarding-title]") {
            title.set_text_content(Some(&format!("Nova Conta · {}", onboarding.role_label)));
        }

        for step in [Step::Id, Step::Nome, Step::Email, Step::Celular, Step::Ensino] {
            let key = dom::step_key(step);
            let row_view = onboarding.steps.iter().find(|s| s.step == step);
            if let Some(row) = dom::query(doc, &format!("[data-step-row=\"{}\"]", key)) {
                dom::toggle_attr(&row, "hidden", row_view.is_none());
                let active = row_view.is_some_and(|s| s.active);
                dom::set_attr(&row, "data-active", if active { "true" } else { "false" });
            }
            let Some(row_view) = row_view else {
                continue;
            };
            if let Some(label) = dom::query(doc, &format!("[data-step-label=\"{}\"]", key)) {
                label.set_text_content(Some(row_view.label));
            }
            if step.is_text() {
                if let Some(input) = dom::query(doc, &dom::step_selector(step))
                    .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                {
                    input.set_placeholder(row_view.placeholder);
                    let value = onboarding.draft.value(step);
                    // Rewriting an equal value would move the caret.
                    if input.value() != value {
                        input.set_value(value);
                    }
                }
            }
        }

        for radio in dom::query_all(doc, "[data-ensino]") {
            if let Ok(input) = radio.dyn_into::<HtmlInputElement>() {
                let checked = input.get_attribute("data-ensino").as_deref()
                    == Some(onboarding.draft.ensino.as_str());
                input.set_checked(checked);
            }
        }

        if let Some(submit) = dom::query(doc, "[data-onboarding-submit]") {
            dom::toggle_attr(&submit, "disabled", !onboarding.can_submit);
        }
    }
}
