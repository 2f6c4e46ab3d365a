mod config;
mod content;
mod dom;
mod errors;
mod i18n;
mod models;
mod prefs;
mod render;
mod state;
mod switcher;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::Catalog;
use crate::dom::{Document, PAGE_BINDINGS};
use crate::i18n::store::LocaleStore;
use crate::prefs::FilePreferenceStore;
use crate::render::effects::EffectRegistry;
use crate::state::SiteState;
use crate::switcher::{SwitchOrchestrator, UiEvent};

/// Headless preview host: runs the page core on one thread against the
/// in-memory document. Each stdin line is treated as a click on the locale
/// option with that `data-lang` value.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting site preview v{}", env!("CARGO_PKG_VERSION"));

    let catalog = Arc::new(Catalog::load().context("Embedded catalog is invalid")?);
    let state = SiteState {
        catalog,
        bindings: PAGE_BINDINGS,
        transition: config.transition,
    };

    let prefs = FilePreferenceStore::new(&config.preference_path);
    info!("Preferences at {}", prefs.path().display());

    let document = Document::shell(state.bindings, &state.catalog.translations);
    let orchestrator = SwitchOrchestrator::boot(
        &state,
        LocaleStore::open(prefs),
        document,
        EffectRegistry::default(),
    );

    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => {
                    let event = UiEvent::LocaleOptionClicked {
                        data_lang: line.trim().to_string(),
                    };
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("stdin read failed: {e}");
                    break;
                }
            }
        }
    });

    let orchestrator = switcher::run(orchestrator, rx).await;
    info!("Preview finished in {}", orchestrator.current());

    if let Some(path) = &config.snapshot_path {
        let (_, document, _) = orchestrator.into_parts();
        let json = serde_json::to_string_pretty(&document)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;
        info!("Document snapshot written to {}", path.display());
    }

    Ok(())
}
