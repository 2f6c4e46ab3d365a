#![allow(dead_code)]

//! Switch orchestrator: one locale change as a two-phase transition.
//!
//! ```text
//!   Idle --select(L != current)--> Transitioning{L} --deadline--> Idle
//! ```
//!
//! Selecting starts the fade and updates the store and toggle at once; the
//! re-render and re-translate happen when the deadline passes. Requests made
//! while Transitioning go into a single slot (latest wins) and start once the
//! current transition has finished, so deadlines never overlap.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::config::css_duration;
use crate::content::coverage::compute_coverage_report;
use crate::dom::Dom;
use crate::errors::SiteError;
use crate::i18n::applier::TranslationApplier;
use crate::i18n::store::LocaleStore;
use crate::i18n::toggle::update_toggle;
use crate::models::locale::Locale;
use crate::prefs::PreferenceStore;
use crate::render::effects::Effects;
use crate::render::Renderer;
use crate::state::SiteState;

/// Body class that fades content out while a switch is in flight.
pub const SWITCHING_CLASS: &str = "lang-switching";
/// Root custom property carrying the transition duration to the stylesheet.
pub const TRANSITION_CSS_PROPERTY: &str = "--lang-transition";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning { target: Locale, deadline: Instant },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Already showing (or switching to) that locale.
    Unchanged,
    Started { deadline: Instant },
    /// Will start after the in-flight transition.
    Queued,
}

pub struct SwitchOrchestrator<D, P, E> {
    locale: LocaleStore<P>,
    renderer: Renderer,
    applier: TranslationApplier,
    dom: D,
    effects: E,
    transition: Duration,
    phase: Phase,
    queued: Option<Locale>,
}

impl<D, P, E> SwitchOrchestrator<D, P, E>
where
    D: Dom,
    P: PreferenceStore,
    E: Effects,
{
    /// Initial page load: renders both sections for the persisted locale and
    /// translates the shell when it is not the default (the shell already
    /// ships default-locale text).
    pub fn boot(state: &SiteState, locale: LocaleStore<P>, dom: D, effects: E) -> Self {
        let report = compute_coverage_report(state.bindings, &state.catalog);
        for missing in &report.missing_keys {
            warn!(
                locale = %missing.locale,
                kind = %missing.kind,
                "Translation key '{}' has no value; element will keep stale text",
                missing.key
            );
        }
        for empty in &report.empty_texts {
            warn!(locale = %empty.locale, "Catalog text {} is empty", empty.path);
        }

        let mut this = Self {
            locale,
            renderer: Renderer::new(Arc::clone(&state.catalog)),
            applier: TranslationApplier::new(state.bindings, Arc::clone(&state.catalog)),
            dom,
            effects,
            transition: state.transition,
            phase: Phase::Idle,
            queued: None,
        };

        this.dom
            .set_root_style(TRANSITION_CSS_PROPERTY, &css_duration(this.transition));

        let current = this.locale.current();
        this.renderer
            .render_experience(current, &mut this.dom, &mut this.effects);
        this.renderer
            .render_education(current, &mut this.dom, &mut this.effects);
        if !current.is_default() {
            this.applier.apply(current, &mut this.dom);
        }
        update_toggle(current, &mut this.dom);

        info!("Page booted in {current}");
        this
    }

    pub fn current(&self) -> Locale {
        self.locale.current()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn queued(&self) -> Option<Locale> {
        self.queued
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::Idle => None,
            Phase::Transitioning { deadline, .. } => Some(deadline),
        }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    pub fn locale_store(&self) -> &LocaleStore<P> {
        &self.locale
    }

    /// User picked a locale option.
    pub fn select(&mut self, locale: Locale, now: Instant) -> SelectOutcome {
        let current = self.current();
        match self.phase {
            Phase::Idle if locale == current => {
                debug!("{locale} already current; nothing to do");
                SelectOutcome::Unchanged
            }
            Phase::Idle => SelectOutcome::Started {
                deadline: self.begin(locale, now),
            },
            Phase::Transitioning { target, .. } if locale == target => {
                // Re-picking the in-flight target cancels any queued change.
                self.queued = None;
                SelectOutcome::Unchanged
            }
            Phase::Transitioning { target, .. } => {
                debug!("Queued {locale} behind in-flight switch to {target}");
                self.queued = Some(locale);
                SelectOutcome::Queued
            }
        }
    }

    /// `select` for the raw `data-lang` value of a clicked option.
    pub fn select_code(&mut self, code: &str, now: Instant) -> Result<SelectOutcome, SiteError> {
        let locale: Locale = code.parse()?;
        Ok(self.select(locale, now))
    }

    /// Runs the deferred step if its deadline has passed. Returns whether a
    /// transition completed. A queued locale starts a new transition right
    /// away, so `deadline()` may be `Some` again afterwards.
    pub fn on_timer(&mut self, now: Instant) -> bool {
        let Phase::Transitioning { target, deadline } = self.phase else {
            return false;
        };
        if now < deadline {
            return false;
        }

        self.finish(target);

        if let Some(next) = self.queued.take() {
            if next != self.current() {
                self.begin(next, now);
            }
        }
        true
    }

    fn begin(&mut self, locale: Locale, now: Instant) -> Instant {
        self.locale.set_current(locale);
        update_toggle(locale, &mut self.dom);
        self.dom.set_body_class(SWITCHING_CLASS, true);

        let deadline = now + self.transition;
        self.phase = Phase::Transitioning {
            target: locale,
            deadline,
        };
        info!("Switching locale to {locale}");
        deadline
    }

    fn finish(&mut self, target: Locale) {
        // Render first: the new fragments already carry the right locale, so
        // the applier only has the static shell left to walk.
        self.renderer
            .render_experience(target, &mut self.dom, &mut self.effects);
        self.renderer
            .render_education(target, &mut self.dom, &mut self.effects);
        let report = self.applier.apply(target, &mut self.dom);
        self.dom.set_body_class(SWITCHING_CLASS, false);
        self.phase = Phase::Idle;

        debug!(
            updated = report.updated,
            missing_keys = report.missing_keys,
            missing_elements = report.missing_elements,
            "Locale switch to {target} complete"
        );
    }

    pub fn into_parts(self) -> (LocaleStore<P>, D, E) {
        (self.locale, self.dom, self.effects)
    }
}
