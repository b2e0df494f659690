use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions};

use crate::error::PortfolioError;
use crate::nav;

use super::dom::query_all;

fn on_click(target: &Element, handler: impl FnMut(Event) + 'static) -> Result<(), PortfolioError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// In-page links scroll smoothly instead of jumping.
pub fn setup_smooth_scroll(document: &Document) -> Result<(), PortfolioError> {
    for anchor in query_all(document, r##"a[href^="#"]"##)? {
        let doc = document.clone();
        let link = anchor.clone();
        on_click(&anchor, move |event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(selector) = nav::anchor_selector(&href) else {
                return;
            };
            if let Ok(Some(target)) = doc.query_selector(selector) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }
    Ok(())
}

fn set_active(el: Option<&Element>, active: Option<bool>) {
    let Some(el) = el else { return };
    let classes = el.class_list();
    let result = match active {
        None => classes.toggle("active").map(|_| ()),
        Some(true) => classes.add_1("active"),
        Some(false) => classes.remove_1("active"),
    };
    if let Err(err) = result {
        log::warn!("cannot update menu state: {err:?}");
    }
}

/// Hamburger toggle plus close-on-navigate for the collapsed menu.
pub fn setup_mobile_menu(document: &Document) -> Result<(), PortfolioError> {
    let toggle = document.query_selector(".menu-toggle")?;
    let links = document.query_selector(".nav-links")?;

    if let Some(button) = &toggle {
        let (toggle, links) = (toggle.clone(), links.clone());
        on_click(button, move |_| {
            set_active(links.as_ref(), None);
            set_active(toggle.as_ref(), None);
        })?;
    }

    for link in query_all(document, ".nav-links a")? {
        let (toggle, links) = (toggle.clone(), links.clone());
        on_click(&link, move |_| {
            set_active(links.as_ref(), Some(false));
            set_active(toggle.as_ref(), Some(false));
        })?;
    }
    Ok(())
}

/// Marks the navbar `scrolled` once the page is scrolled past `offset`.
pub fn setup_navbar_scroll(document: &Document, navbar_id: &str, offset: f64) -> Result<(), PortfolioError> {
    let Some(navbar) = document.get_element_by_id(navbar_id) else {
        return Ok(());
    };
    let win = web_sys::window().ok_or_else(|| PortfolioError::MissingElement("window".into()))?;

    let scroller = win.clone();
    let closure = Closure::wrap(Box::new(move || {
        let y = scroller.scroll_y().unwrap_or(0.0);
        let classes = navbar.class_list();
        let result = if nav::is_scrolled(y, offset) {
            classes.add_1("scrolled")
        } else {
            classes.remove_1("scrolled")
        };
        if let Err(err) = result {
            log::warn!("cannot update navbar: {err:?}");
        }
    }) as Box<dyn FnMut()>);
    win.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
