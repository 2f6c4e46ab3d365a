use crate::models::catalog::{ActivityRecord, EducationRecord};
use crate::models::locale::Locale;
use crate::render::effects::NodeRef;
use crate::render::markup::{escape_html, icon_list_items, Fragment};
use crate::render::{EDUCATION_CONTAINER, REVEAL_CLASS};

pub const EDUCATION_CARD_CLASS: &str = "edu-card";
pub const ACTIVITY_CARD_CLASS: &str = "activity-card";

/// Education cards followed by activity cards, each list in catalog order.
pub fn education_fragment(
    educations: &[EducationRecord],
    activities: &[ActivityRecord],
    locale: Locale,
) -> Fragment {
    let mut fragment = Fragment::default();

    for (index, edu) in educations.iter().enumerate() {
        let details =
            icon_list_items(edu.details.iter().map(|d| (d.icon.as_str(), d.text.get(locale))));
        fragment.markup.push_str(&format!(
            concat!(
                r#"<div class="{card} glass-card {reveal}">"#,
                r#"<div class="edu-icon"><i class="{icon}"></i></div>"#,
                "<h3>{title}</h3>",
                r#"<span class="edu-period">{period}</span>"#,
                r#"<ul class="edu-details">{details}</ul>"#,
                "</div>",
            ),
            card = EDUCATION_CARD_CLASS,
            reveal = REVEAL_CLASS,
            icon = escape_html(&edu.icon),
            title = escape_html(edu.title.get(locale)),
            period = escape_html(&edu.period),
            details = details,
        ));
        fragment.tilt.push(NodeRef {
            container: EDUCATION_CONTAINER,
            class: EDUCATION_CARD_CLASS,
            index,
        });
    }

    for (index, act) in activities.iter().enumerate() {
        let items =
            icon_list_items(act.items.iter().map(|i| (i.icon.as_str(), i.text.get(locale))));
        fragment.markup.push_str(&format!(
            concat!(
                r#"<div class="{card} glass-card {reveal}">"#,
                r#"<div class="edu-icon activity-icon"><i class="{icon}"></i></div>"#,
                "<h3>{title}</h3>",
                r#"<ul class="activity-list">{items}</ul>"#,
                "</div>",
            ),
            card = ACTIVITY_CARD_CLASS,
            reveal = REVEAL_CLASS,
            icon = escape_html(&act.icon),
            title = escape_html(act.title.get(locale)),
            items = items,
        ));
        fragment.tilt.push(NodeRef {
            container: EDUCATION_CONTAINER,
            class: ACTIVITY_CARD_CLASS,
            index,
        });
    }

    // Every card is also a reveal item, numbered across both lists.
    fragment.reveal = (0..educations.len() + activities.len())
        .map(|index| NodeRef {
            container: EDUCATION_CONTAINER,
            class: REVEAL_CLASS,
            index,
        })
        .collect();

    fragment
}
