//! Scroll-triggered effects built on `IntersectionObserver`.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::SiteConfig;
use crate::counter::{format_count, Counter, Tick};
use crate::error::PortfolioError;

use super::render::run_loop;

/// Runs `on_visible` for each target the first time at least `threshold`
/// of it is on screen, then stops watching that target.
pub fn observe_once(
    targets: &[Element],
    threshold: f64,
    on_visible: impl Fn(&Element) + 'static,
) -> Result<(), PortfolioError> {
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    on_visible(&target);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for target in targets {
        observer.observe(target);
    }
    callback.forget();
    Ok(())
}

/// Fades items in by adding `visible`.
pub fn reveal(targets: &[Element], threshold: f64) -> Result<(), PortfolioError> {
    observe_once(targets, threshold, |el| {
        if let Err(err) = el.class_list().add_1("visible") {
            log::warn!("cannot mark element visible: {err:?}");
        }
    })
}

/// Shows the first step of `counter` on `el` right away, then keeps
/// stepping once per animation frame until the target is reached.
pub fn start_counter(el: &Element, mut counter: Counter) {
    let el = el.clone();
    let mut update = move || match counter.tick() {
        Tick::Running(value) => {
            el.set_text_content(Some(&format_count(value)));
            true
        }
        Tick::Done(target) => {
            el.set_text_content(Some(&format_count(target)));
            false
        }
    };
    if !update() {
        return;
    }
    if let Err(err) = run_loop(update) {
        log::error!("counter animation failed to start: {err}");
    }
}

/// Counts every `.stat-number` up to its `data-target` once it scrolls in.
pub fn animate_counters(counters: &[Element], config: &SiteConfig) -> Result<(), PortfolioError> {
    let duration = config.counter_duration_ms;
    let frame = config.counter_frame_ms;
    observe_once(counters, config.stat_threshold, move |el| {
        let target = el.get_attribute("data-target");
        start_counter(el, Counter::from_attribute(target.as_deref(), duration, frame));
    })
}

/// Widens each `.skill-progress-fill` to its `data-level` percent shortly
/// after it becomes visible.
pub fn animate_skill_bars(bars: &[Element], config: &SiteConfig) -> Result<(), PortfolioError> {
    let delay = config.skill_bar_delay_ms;
    observe_once(bars, config.stat_threshold, move |el| {
        let Some(bar) = el.dyn_ref::<HtmlElement>().cloned() else {
            return;
        };
        let level = bar.get_attribute("data-level").unwrap_or_else(|| "0".to_string());
        gloo_timers::callback::Timeout::new(delay, move || {
            if let Err(err) = bar.style().set_property("width", &format!("{level}%")) {
                log::warn!("cannot set skill bar width: {err:?}");
            }
        })
        .forget();
    })
}
