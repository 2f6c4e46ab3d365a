use crate::models::catalog::ProjectRecord;
use crate::models::locale::Locale;
use crate::render::effects::NodeRef;
use crate::render::markup::{escape_html, Fragment};
use crate::render::{EXPERIENCE_CONTAINER, REVEAL_CLASS};

pub const CARD_CLASS: &str = "timeline-card";
const BADGE_CLASS: &str = "project-badge";

/// Timeline items for every project, in catalog order.
pub fn experience_fragment(projects: &[ProjectRecord], locale: Locale) -> Fragment {
    let mut fragment = Fragment::default();
    for (index, project) in projects.iter().enumerate() {
        fragment.markup.push_str(&project_item(project, locale));
        fragment.reveal.push(NodeRef {
            container: EXPERIENCE_CONTAINER,
            class: REVEAL_CLASS,
            index,
        });
        fragment.tilt.push(NodeRef {
            container: EXPERIENCE_CONTAINER,
            class: CARD_CLASS,
            index,
        });
    }
    fragment
}

fn project_item(project: &ProjectRecord, locale: Locale) -> String {
    let badge_class = match project.badge_variant.as_deref() {
        Some(variant) if !variant.is_empty() => format!("{BADGE_CLASS} {}", escape_html(variant)),
        _ => BADGE_CLASS.to_string(),
    };
    let subtitle = match project.subtitle.as_deref() {
        Some(s) if !s.is_empty() => {
            format!(r#"<div class="project-subtitle">{}</div>"#, escape_html(s))
        }
        _ => String::new(),
    };
    let tech: String = project
        .technologies
        .iter()
        .map(|t| format!(r#"<span class="tech-tag">{}</span>"#, escape_html(t)))
        .collect();

    format!(
        concat!(
            r#"<div class="timeline-item {reveal}">"#,
            r#"<div class="timeline-dot"></div>"#,
            r#"<div class="timeline-date">{date}</div>"#,
            r#"<div class="{card} glass-card">"#,
            r#"<div class="project-header">"#,
            r#"<h3 class="project-name">{name}</h3>"#,
            r#"<span class="{badge_class}">{badge}</span>"#,
            r#"</div>"#,
            "{subtitle}",
            r#"<div class="project-meta">"#,
            r#"<span><i class="fas fa-users"></i> {members}</span>"#,
            r#"<span><i class="fas fa-chart-line"></i> {result}</span>"#,
            r#"</div>"#,
            r#"<p class="project-description">{description}</p>"#,
            r#"<div class="tech-stack">{tech}</div>"#,
            r#"</div>"#,
            r#"</div>"#,
        ),
        reveal = REVEAL_CLASS,
        card = CARD_CLASS,
        date = escape_html(&project.date_range),
        name = escape_html(&project.name),
        badge_class = badge_class,
        badge = escape_html(&project.badge),
        subtitle = subtitle,
        members = escape_html(project.members.get(locale)),
        result = escape_html(project.result.get(locale)),
        description = escape_html(project.description.get(locale)),
        tech = tech,
    )
}
