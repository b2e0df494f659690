#![cfg(target_arch = "wasm32")]

use folio_wasm::config::{NetworkParams, SiteConfig, CONFIG_ELEMENT_ID};
use folio_wasm::counter::Counter;
use folio_wasm::data::PortfolioData;
use folio_wasm::error::PortfolioError;
use folio_wasm::wasm::{dom, interactions, loader, observe, render};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, HtmlCanvasElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

const DATA: &str = include_str!("../static/data/portfolio.json");

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh sandbox at the top of <body> holding `html`, so it starts on screen.
fn mount(html: &str) -> Element {
    let doc = document();
    let root = doc.create_element("section").unwrap();
    root.set_inner_html(html);
    let body = doc.body().unwrap();
    body.insert_before(&root, body.first_child().as_ref()).unwrap();
    root
}

fn width_of(el: &Element) -> String {
    el.dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("width")
        .unwrap()
}

fn click(el: &Element) {
    el.dyn_ref::<HtmlElement>().unwrap().click();
}

#[wasm_bindgen_test]
fn timeline_items_follow_document_order() {
    let data = PortfolioData::from_json(DATA).unwrap();
    let root = mount(r#"<div id="tl-test"></div>"#);

    let items = dom::render_timeline(&document(), "tl-test", &data.experience).unwrap();

    assert_eq!(items.len(), data.experience.len());
    let first = &items[0];
    assert!(first.class_name().starts_with("timeline-item "));
    let title = first.query_selector(".timeline-title").unwrap().unwrap();
    assert_eq!(title.text_content().unwrap(), data.experience[0].title);
    assert_eq!(root.query_selector_all(".timeline-item").unwrap().length() as usize, items.len());
    root.remove();
}

#[wasm_bindgen_test]
fn missing_containers_are_skipped() {
    let data = PortfolioData::from_json(DATA).unwrap();
    assert!(dom::render_timeline(&document(), "nope", &data.experience).unwrap().is_empty());
    assert!(dom::render_awards(&document(), "nope", &data.awards).unwrap().is_empty());
}

#[wasm_bindgen_test]
fn skills_fill_each_category() {
    let data = PortfolioData::from_json(DATA).unwrap();
    let root = mount(
        r#"<div data-category="programming"></div>
           <div data-category="data-collection"></div>
           <div data-category="research-tools"></div>"#,
    );

    dom::render_skills(&document(), &data.skills).unwrap();

    let bars = root.query_selector_all(".skill-progress-fill").unwrap();
    assert_eq!(bars.length() as usize, data.skills.programming.len());
    let plain = root.query_selector_all(".skill-item").unwrap();
    assert_eq!(
        plain.length() as usize,
        data.skills.data_collection.len() + data.skills.research_tools.len()
    );
    root.remove();
}

#[wasm_bindgen_test]
fn award_text_is_not_parsed_as_markup() {
    let mut data = PortfolioData::from_json(DATA).unwrap();
    data.awards[0].title = "<img src=x onerror=alert(1)>".to_string();
    let root = mount(r#"<div id="aw-test"></div>"#);

    let cards = dom::render_awards(&document(), "aw-test", &data.awards).unwrap();

    assert!(cards[0].query_selector("img").unwrap().is_none());
    let title = cards[0].query_selector(".award-title").unwrap().unwrap();
    assert_eq!(title.text_content().unwrap(), "<img src=x onerror=alert(1)>");
    root.remove();
}

#[wasm_bindgen_test]
fn mobile_menu_toggles_and_closes() {
    let root = mount(
        r##"<button class="menu-toggle"></button>
            <ul class="nav-links"><li><a id="mm-link" href="#about">About</a></li></ul>"##,
    );
    let doc = document();
    interactions::setup_mobile_menu(&doc).unwrap();

    let toggle = root.query_selector(".menu-toggle").unwrap().unwrap();
    let links = root.query_selector(".nav-links").unwrap().unwrap();

    click(&toggle);
    assert!(toggle.class_list().contains("active"));
    assert!(links.class_list().contains("active"));

    click(&doc.get_element_by_id("mm-link").unwrap());
    assert!(!toggle.class_list().contains("active"));
    assert!(!links.class_list().contains("active"));
    root.remove();
}

#[wasm_bindgen_test]
fn bare_hash_link_cancels_navigation_without_scrolling() {
    let root = mount(r##"<a id="top-link" href="#">Top</a>"##);
    interactions::setup_smooth_scroll(&document()).unwrap();
    let window = web_sys::window().unwrap();
    let before = window.scroll_y().unwrap();

    let init = EventInit::new();
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("click", &init).unwrap();
    let link = root.query_selector("#top-link").unwrap().unwrap();
    link.dispatch_event(&event).unwrap();

    assert!(event.default_prevented());
    assert_eq!(window.scroll_y().unwrap(), before);
    root.remove();
}

#[wasm_bindgen_test]
fn network_canvas_fits_layout_and_stops() {
    let root = mount(r#"<canvas id="nn-test" style="width: 320px; height: 200px"></canvas>"#);
    let canvas = document()
        .get_element_by_id("nn-test")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();

    let handle = render::start_network(canvas.clone(), &NetworkParams::default()).unwrap();

    assert_eq!((canvas.width(), canvas.height()), (320, 200));
    assert!(handle.is_running());
    handle.stop();
    assert!(!handle.is_running());
    root.remove();
}

#[wasm_bindgen_test]
async fn revealed_items_gain_visible_class() {
    let root = mount(r#"<div id="rv-test" style="height: 40px">item</div>"#);
    let item = document().get_element_by_id("rv-test").unwrap();

    observe::reveal(&[item.clone()], 0.2).unwrap();
    TimeoutFuture::new(300).await;

    assert!(item.class_list().contains("visible"));
    root.remove();
}

#[wasm_bindgen_test]
async fn skill_bars_widen_after_delay() {
    let root = mount(
        r#"<div class="skill-progress" style="width: 200px">
             <div id="sb-level" class="skill-progress-fill" data-level="80" style="height: 10px"></div>
           </div>
           <div class="skill-progress" style="width: 200px">
             <div id="sb-none" class="skill-progress-fill" style="height: 10px"></div>
           </div>"#,
    );
    let doc = document();
    let with_level = doc.get_element_by_id("sb-level").unwrap();
    let without = doc.get_element_by_id("sb-none").unwrap();

    observe::animate_skill_bars(&[with_level.clone(), without.clone()], &SiteConfig::default()).unwrap();
    assert_eq!(width_of(&with_level), "");

    TimeoutFuture::new(600).await;
    assert_eq!(width_of(&with_level), "80%");
    assert_eq!(width_of(&without), "0%");
    root.remove();
}

#[wasm_bindgen_test]
fn counter_shows_first_step_immediately() {
    let root = mount(r#"<span id="ct-sync">0</span>"#);
    let el = document().get_element_by_id("ct-sync").unwrap();

    // 1000 over 125 frames: 8 per step
    observe::start_counter(&el, Counter::new(1000.0, 2000.0, 16.0));

    assert_eq!(el.text_content().unwrap(), "8");
    root.remove();
}

#[wasm_bindgen_test]
async fn counters_finish_on_their_target() {
    let root = mount(
        r#"<span id="ct-a" class="stat-number" data-target="37">0</span>
           <span id="ct-b" class="stat-number" data-target="n/a">0</span>"#,
    );
    let doc = document();
    let a = doc.get_element_by_id("ct-a").unwrap();
    let b = doc.get_element_by_id("ct-b").unwrap();
    let config = SiteConfig {
        counter_duration_ms: 160.0,
        ..SiteConfig::default()
    };

    observe::animate_counters(&[a.clone(), b.clone()], &config).unwrap();
    TimeoutFuture::new(1500).await;

    assert_eq!(a.text_content().unwrap(), "37");
    assert_eq!(b.text_content().unwrap(), "0");
    root.remove();
}

#[wasm_bindgen_test]
fn navbar_tracks_scroll_offset() {
    let root = mount(r#"<nav id="nb-test"></nav><div style="height: 5000px"></div>"#);
    let doc = document();
    let window = web_sys::window().unwrap();
    let navbar = doc.get_element_by_id("nb-test").unwrap();
    interactions::setup_navbar_scroll(&doc, "nb-test", 100.0).unwrap();

    window.scroll_to_with_x_and_y(0.0, 500.0);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    assert!(navbar.class_list().contains("scrolled"));

    window.scroll_to_with_x_and_y(0.0, 0.0);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    assert!(!navbar.class_list().contains("scrolled"));
    root.remove();
}

#[wasm_bindgen_test]
fn config_block_overrides_and_falls_back() {
    let root = mount(&format!(
        r#"<script id="{CONFIG_ELEMENT_ID}" type="application/json">
             {{ "dataUrl": "/elsewhere.json", "network": {{ "nodeCount": 12, "nodeRadius": -2 }} }}
           </script>"#
    ));
    let doc = document();

    let cfg = loader::read_config(&doc);
    assert_eq!(cfg.data_url, "/elsewhere.json");
    assert_eq!(cfg.network.node_count, 12);
    assert_eq!(cfg.network.node_radius, 0.0);

    doc.get_element_by_id(CONFIG_ELEMENT_ID)
        .unwrap()
        .set_text_content(Some("{ not json"));
    assert_eq!(loader::read_config(&doc), SiteConfig::default());

    root.remove();
    assert_eq!(loader::read_config(&doc), SiteConfig::default());
}

#[wasm_bindgen_test]
async fn missing_data_file_reports_status() {
    let err = loader::load_portfolio_data("/no-such-portfolio.json")
        .await
        .unwrap_err();
    assert!(
        matches!(err, PortfolioError::Status { status: 404, .. }),
        "{err}"
    );
}
