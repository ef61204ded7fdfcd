use crate::domain::a001_equipment::cart::SharedSubmitter;
use crate::layout::global_context::ConsoleContext;
use crate::layout::Shell;
use crate::shared::api_utils::HttpSubmitter;
use crate::shared::config::{load_config, load_config_with_overrides, ConsoleConfig};
use crate::shared::loader::ViewSelection;
use leptos::prelude::*;
use std::sync::Arc;

/// Element holding page-level TOML overrides for the console configuration
pub const CONFIG_ELEMENT_ID: &str = "console-config";

fn page_overrides() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

fn page_config() -> ConsoleConfig {
    let loaded = match page_overrides() {
        Some(overrides) => load_config_with_overrides(&overrides),
        None => load_config(),
    };
    loaded.unwrap_or_else(|e| {
        log::warn!("falling back to built-in configuration: {}", e);
        ConsoleConfig::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    let config = page_config();
    let submitter = config.request.submit_path.clone().map(|path| {
        Arc::new(HttpSubmitter::new(config.api.clone(), path)) as SharedSubmitter
    });

    // Provide the console state to the whole app via context.
    let ctx = ConsoleContext::new(&config, submitter);
    provide_context(ctx);

    // Home is the landing view
    ctx.select_menu(ViewSelection::Home.label());
    on_cleanup(move || ctx.teardown());

    view! {
        <Shell />
    }
}
