//! HTML fragments for the data-driven sections.
//!
//! Builders return the outer element's class list and its `innerHTML`; the
//! browser side creates the `div`, applies both, and appends it. All text
//! coming from the portfolio document is escaped.

use std::fmt::Write;

use crate::data::{Award, Experience, Skill};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub class_name: String,
    pub inner_html: String,
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// `base` plus the document-supplied modifier, skipping an empty one.
fn class_list(base: &str, modifier: &str) -> String {
    let modifier = modifier.trim();
    if modifier.is_empty() {
        base.to_string()
    } else {
        format!("{base} {}", escape_html(modifier))
    }
}

pub fn timeline_item(exp: &Experience) -> Fragment {
    let mut html = String::new();
    html.push_str(r#"<div class="timeline-marker"></div>"#);
    html.push_str(r#"<div class="timeline-content">"#);
    let _ = write!(
        html,
        concat!(
            r#"<div class="timeline-period">{}</div>"#,
            r#"<h3 class="timeline-title">{}</h3>"#,
            r#"<div class="timeline-role">{}</div>"#,
            r#"<p class="timeline-description">{}</p>"#,
        ),
        escape_html(&exp.period),
        escape_html(&exp.title),
        escape_html(&exp.role),
        escape_html(&exp.description),
    );
    if let Some(tags) = &exp.tags {
        html.push_str(r#"<div class="timeline-tags">"#);
        for tag in tags {
            let _ = write!(html, r#"<span class="tag">{}</span>"#, escape_html(tag));
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");

    Fragment {
        class_name: class_list("timeline-item", &exp.kind),
        inner_html: html,
    }
}

pub fn skill_bar(skill: &Skill) -> Fragment {
    let inner_html = format!(
        concat!(
            r#"<div class="skill-info">"#,
            r#"<span class="skill-name">{}</span>"#,
            r#"<span class="skill-category">{}</span>"#,
            "</div>",
            r#"<div class="skill-progress">"#,
            r#"<div class="skill-progress-fill" data-level="{}"></div>"#,
            "</div>",
        ),
        escape_html(&skill.name),
        escape_html(&skill.category),
        skill.level,
    );
    Fragment {
        class_name: "skill-bar".to_string(),
        inner_html,
    }
}

pub fn award_card(award: &Award) -> Fragment {
    let mut html = format!(
        concat!(
            r#"<div class="award-year">{}</div>"#,
            r#"<h3 class="award-title">{}</h3>"#,
            r#"<p class="award-description">{}</p>"#,
        ),
        escape_html(&award.year),
        escape_html(&award.title),
        escape_html(&award.description),
    );
    if let Some(amount) = &award.amount {
        let _ = write!(html, r#"<div class="award-amount">{}</div>"#, escape_html(amount));
    }
    Fragment {
        class_name: class_list("award-card", &award.kind),
        inner_html: html,
    }
}
