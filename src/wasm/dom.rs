//! Injects the portfolio document into the page.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::data::{Award, Experience, Skills};
use crate::error::PortfolioError;
use crate::markup::{self, Fragment};

pub fn document() -> Result<Document, PortfolioError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| PortfolioError::MissingElement("document".into()))
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PortfolioError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn append_fragment(
    document: &Document,
    container: &Element,
    fragment: Fragment,
) -> Result<Element, PortfolioError> {
    let item = document.create_element("div")?;
    item.set_class_name(&fragment.class_name);
    item.set_inner_html(&fragment.inner_html);
    container.append_child(&item)?;
    Ok(item)
}

fn append_text_item(document: &Document, container: &Element, text: &str) -> Result<(), PortfolioError> {
    let item = document.create_element("div")?;
    item.set_class_name("skill-item");
    item.set_text_content(Some(text));
    container.append_child(&item)?;
    Ok(())
}

/// Appends one `.timeline-item` per entry to `#<container_id>` and returns
/// them for the scroll reveal. A page without the container renders nothing.
pub fn render_timeline(
    document: &Document,
    container_id: &str,
    experiences: &[Experience],
) -> Result<Vec<Element>, PortfolioError> {
    let Some(container) = document.get_element_by_id(container_id) else {
        log::debug!("#{container_id} absent, skipping timeline");
        return Ok(Vec::new());
    };
    experiences
        .iter()
        .map(|exp| append_fragment(document, &container, markup::timeline_item(exp)))
        .collect()
}

pub fn render_skills(document: &Document, skills: &Skills) -> Result<(), PortfolioError> {
    if let Some(container) = document.query_selector(r#"[data-category="programming"]"#)? {
        for skill in &skills.programming {
            append_fragment(document, &container, markup::skill_bar(skill))?;
        }
    }
    if let Some(container) = document.query_selector(r#"[data-category="data-collection"]"#)? {
        for skill in &skills.data_collection {
            append_text_item(document, &container, skill)?;
        }
    }
    if let Some(container) = document.query_selector(r#"[data-category="research-tools"]"#)? {
        for tool in &skills.research_tools {
            append_text_item(document, &container, tool)?;
        }
    }
    Ok(())
}

pub fn render_awards(
    document: &Document,
    container_id: &str,
    awards: &[Award],
) -> Result<Vec<Element>, PortfolioError> {
    let Some(container) = document.get_element_by_id(container_id) else {
        log::debug!("#{container_id} absent, skipping awards");
        return Ok(Vec::new());
    };
    awards
        .iter()
        .map(|award| append_fragment(document, &container, markup::award_card(award)))
        .collect()
}
