//! Single-task event loop: UI events in, transition timer out.
//!
//! The orchestrator is owned by this one task, so nothing is shared and
//! nothing is locked. At most one deadline is ever pending.

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, warn};

use crate::dom::Dom;
use crate::prefs::PreferenceStore;
use crate::render::effects::Effects;
use crate::switcher::orchestrator::SwitchOrchestrator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A locale option was clicked; carries its `data-lang` value.
    LocaleOptionClicked { data_lang: String },
}

/// Processes events until the channel closes, then finishes any in-flight
/// (and queued) transition and hands the orchestrator back.
pub async fn run<D, P, E>(
    mut orchestrator: SwitchOrchestrator<D, P, E>,
    mut events: mpsc::UnboundedReceiver<UiEvent>,
) -> SwitchOrchestrator<D, P, E>
where
    D: Dom,
    P: PreferenceStore,
    E: Effects,
{
    let mut open = true;

    loop {
        match orchestrator.deadline() {
            Some(deadline) => {
                tokio::select! {
                    _ = sleep_until(deadline) => {
                        orchestrator.on_timer(Instant::now());
                    }
                    event = events.recv(), if open => match event {
                        Some(event) => handle(&mut orchestrator, event),
                        None => open = false,
                    },
                }
            }
            None if open => match events.recv().await {
                Some(event) => handle(&mut orchestrator, event),
                None => open = false,
            },
            None => break,
        }
    }

    debug!("Event channel closed; loop finished in {}", orchestrator.current());
    orchestrator
}

fn handle<D, P, E>(orchestrator: &mut SwitchOrchestrator<D, P, E>, event: UiEvent)
where
    D: Dom,
    P: PreferenceStore,
    E: Effects,
{
    match event {
        UiEvent::LocaleOptionClicked { data_lang } => {
            match orchestrator.select_code(&data_lang, Instant::now()) {
                Ok(outcome) => debug!("Locale option {data_lang}: {outcome:?}"),
                Err(e) => warn!(code = e.code(), "Ignoring locale option: {e}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::time::sleep;

    use super::*;
    use crate::content::Catalog;
    use crate::dom::{Document, PAGE_BINDINGS};
    use crate::i18n::store::LocaleStore;
    use crate::i18n::toggle::{ACTIVE_CLASS, TOGGLE_ID};
    use crate::models::locale::Locale;
    use crate::prefs::{MemoryPreferenceStore, LOCALE_PREFERENCE_KEY};
    use crate::render::effects::EffectRegistry;
    use crate::render::EXPERIENCE_CONTAINER;
    use crate::state::SiteState;
    use crate::switcher::orchestrator::{Phase, SWITCHING_CLASS};

    fn boot() -> SwitchOrchestrator<Document, MemoryPreferenceStore, EffectRegistry> {
        let state = SiteState {
            catalog: Arc::new(Catalog::load().unwrap()),
            bindings: PAGE_BINDINGS,
            transition: Duration::from_millis(200),
        };
        let doc = Document::shell(state.bindings, &state.catalog.translations);
        SwitchOrchestrator::boot(
            &state,
            LocaleStore::open(MemoryPreferenceStore::new()),
            doc,
            EffectRegistry::default(),
        )
    }

    fn click(code: &str) -> UiEvent {
        UiEvent::LocaleOptionClicked {
            data_lang: code.to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_completes_after_transition_delay() {
        let (tx, rx) = mpsc::unbounded_channel();
        let started = Instant::now();
        tx.send(click("en")).unwrap();
        drop(tx);

        let o = run(boot(), rx).await;

        assert!(started.elapsed() >= Duration::from_millis(200));
        assert_eq!(o.phase(), Phase::Idle);
        assert_eq!(o.current(), Locale::En);
        assert!(o.dom().has_class("lang-option-en", ACTIVE_CLASS));
        assert!(o.dom().has_class(TOGGLE_ID, "en"));
        assert!(!o.dom().body_has_class(SWITCHING_CLASS));
        assert!(o
            .dom()
            .inner_html(EXPERIENCE_CONTAINER)
            .unwrap()
            .contains("Result: 8/10"));
        assert_eq!(
            o.locale_store()
                .prefs()
                .get(LOCALE_PREFERENCE_KEY)
                .unwrap()
                .as_deref(),
            Some("en")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_fade_marker_is_on_only_during_transition() {
        let (tx, rx) = mpsc::unbounded_channel();

        let probe = async {
            tx.send(click("en")).unwrap();
            sleep(Duration::from_millis(100)).await;
            tx.send(click("vi")).unwrap();
            drop(tx);
        };
        let (o, ()) = tokio::join!(run(boot(), rx), probe);

        // vi was queued behind en and ran second.
        assert_eq!(o.current(), Locale::Vi);
        assert!(!o.dom().body_has_class(SWITCHING_CLASS));
        assert!(o
            .dom()
            .inner_html(EXPERIENCE_CONTAINER)
            .unwrap()
            .contains("Kết quả: 8/10"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_clicking_current_locale_returns_immediately() {
        let (tx, rx) = mpsc::unbounded_channel();
        let started = Instant::now();
        tx.send(click("vi")).unwrap();
        drop(tx);

        let o = run(boot(), rx).await;

        assert_eq!(started.elapsed(), Duration::ZERO);
        assert_eq!(o.current(), Locale::Vi);
        assert_eq!(
            o.locale_store().prefs().get(LOCALE_PREFERENCE_KEY).unwrap(),
            None
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_option_is_ignored() {
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(click("xx")).unwrap();
        tx.send(click("en")).unwrap();
        drop(tx);

        let o = run(boot(), rx).await;
        assert_eq!(o.current(), Locale::En);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_clicks_never_overlap_timers() {
        let (tx, rx) = mpsc::unbounded_channel();
        let probe = async {
            for code in ["en", "vi", "en", "vi", "en"] {
                tx.send(click(code)).unwrap();
                sleep(Duration::from_millis(30)).await;
            }
            drop(tx);
        };
        let started = Instant::now();
        let (o, ()) = tokio::join!(run(boot(), rx), probe);

        // en runs first; the last queued request (en) equals it, so nothing
        // follows once it lands.
        assert_eq!(o.current(), Locale::En);
        assert_eq!(o.phase(), Phase::Idle);
        assert!(started.elapsed() < Duration::from_millis(400));
    }
}
