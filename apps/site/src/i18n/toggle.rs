use tracing::debug;

use crate::dom::Dom;
use crate::models::locale::Locale;

pub const TOGGLE_ID: &str = "langToggle";
pub const DATA_LANG_ATTRIBUTE: &str = "data-lang";
pub const ACTIVE_CLASS: &str = "active";

pub fn option_id(locale: Locale) -> String {
    format!("lang-option-{}", locale.code())
}

/// Marks the current option `active` and moves the slider: the toggle
/// carries a class named after each non-default locale while it is current.
pub fn update_toggle(current: Locale, dom: &mut impl Dom) {
    for locale in Locale::ALL {
        let on = locale == current;
        if let Err(e) = dom.set_class(&option_id(locale), ACTIVE_CLASS, on) {
            debug!(code = e.code(), "Toggle option skipped: {e}");
        }
        if !locale.is_default() {
            if let Err(e) = dom.set_class(TOGGLE_ID, locale.code(), on) {
                debug!(code = e.code(), "Toggle slider skipped: {e}");
            }
        }
    }
}
