//! The static portfolio document fetched at start-up.

use serde::Deserialize;

use crate::error::PortfolioError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Experience {
    pub id: u32,
    pub period: String,
    pub title: String,
    pub role: String,
    pub description: String,
    /// Extra CSS class on the timeline item, e.g. `research` or `industry`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent, used verbatim as the bar width.
    pub level: f64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    pub programming: Vec<Skill>,
    pub data_collection: Vec<String>,
    pub research_tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Award {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub year: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub amount: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortfolioData {
    pub experience: Vec<Experience>,
    pub skills: Skills,
    pub awards: Vec<Award>,
}

impl PortfolioData {
    pub fn from_json(raw: &str) -> Result<Self, PortfolioError> {
        Ok(serde_json::from_str(raw)?)
    }
}
