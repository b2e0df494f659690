use std::cell::RefCell;

use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement};

use crate::config::{SiteConfig, CONFIG_ELEMENT_ID};
use crate::data::PortfolioData;
use crate::error::PortfolioError;

use super::render::{self, AnimationHandle};
use super::{dom, interactions, observe};

thread_local! {
    static SCENES: RefCell<Vec<AnimationHandle>> = const { RefCell::new(Vec::new()) };
}

/// Halts both canvas animations.
pub fn stop_scenes() {
    SCENES.with(|scenes| scenes.borrow_mut().drain(..).for_each(|h| h.stop()));
}

pub async fn load_portfolio_data(url: &str) -> Result<PortfolioData, PortfolioError> {
    let fetch_err = |reason: gloo_net::Error| PortfolioError::Fetch {
        url: url.to_string(),
        reason: reason.to_string(),
    };
    let response = Request::get(url).send().await.map_err(fetch_err)?;
    if !response.ok() {
        return Err(PortfolioError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    let body = response.text().await.map_err(fetch_err)?;
    PortfolioData::from_json(&body)
}

/// Reads overrides from `<script id="site-config">`, falling back to the
/// defaults when the block is absent or unreadable.
pub fn read_config(document: &Document) -> SiteConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    SiteConfig::from_json(&raw).unwrap_or_else(|err| {
        log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
        SiteConfig::default()
    })
}

fn canvas(document: &Document, id: &str) -> Result<HtmlCanvasElement, PortfolioError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PortfolioError::MissingElement(format!("#{id}")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| PortfolioError::WrongElementType(format!("#{id}")))
}

pub async fn init(config: &SiteConfig) -> Result<(), PortfolioError> {
    let document = dom::document()?;

    let data = load_portfolio_data(&config.data_url).await?;
    log::info!(
        "loaded {} experiences, {} skills, {} awards",
        data.experience.len(),
        data.skills.programming.len(),
        data.awards.len()
    );

    let timeline = dom::render_timeline(&document, &config.timeline_container_id, &data.experience)?;
    observe::reveal(&timeline, config.reveal_threshold)?;
    dom::render_skills(&document, &data.skills)?;
    let awards = dom::render_awards(&document, &config.awards_container_id, &data.awards)?;
    observe::reveal(&awards, config.reveal_threshold)?;

    observe::animate_counters(&dom::query_all(&document, ".stat-number")?, config)?;
    observe::animate_skill_bars(&dom::query_all(&document, ".skill-progress-fill")?, config)?;
    interactions::setup_smooth_scroll(&document)?;
    interactions::setup_mobile_menu(&document)?;
    interactions::setup_navbar_scroll(&document, &config.navbar_id, config.navbar_scroll_offset)?;

    let network = render::start_network(canvas(&document, &config.network_canvas_id)?, &config.network)?;
    let waves = render::start_waves(canvas(&document, &config.wave_canvas_id)?, &config.waves)?;
    SCENES.with(|scenes| scenes.borrow_mut().extend([network, waves]));
    Ok(())
}

pub async fn run() {
    let config = match dom::document() {
        Ok(document) => read_config(&document),
        Err(err) => {
            log::error!("Error initializing portfolio: {err}");
            return;
        }
    };
    if let Err(err) = init(&config).await {
        log::error!("Error initializing portfolio: {err}");
    }
}
