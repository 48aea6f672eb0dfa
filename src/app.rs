//! Inventory Frontend App
//!
//! Navbar plus the page selected by the current route.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::{HomePage, InventoryTabs, MyInventoriesPage, Navbar};
use crate::config::{AppConfig, DataSourceKind};
use crate::context::{AppContext, Route, Session};
use crate::source::{HttpSource, InventorySource, SampleSource};

fn build_source(config: &AppConfig) -> Arc<dyn InventorySource> {
    match config.data_source {
        DataSourceKind::Http => Arc::new(HttpSource::new(ApiClient::new(config.api_url.clone()))),
        DataSourceKind::Sample => Arc::new(SampleSource::new()),
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let route = signal(Route::Home);
    let session = Session::new(config.user_id.clone());

    // Provide context to all children
    let ctx = AppContext::new(route, session, build_source(&config));
    provide_context(ctx.clone());

    let on_search = move |q: String| {
        if q.is_empty() {
            return;
        }
        log::info!("[NAV] search: {}", q);
    };

    view! {
        <Navbar on_search=on_search />
        <main class="container py-5">
            {move || match ctx.route.get() {
                Route::Home => view! { <HomePage /> }.into_any(),
                Route::MyInventories => view! { <MyInventoriesPage /> }.into_any(),
                Route::Inventory(id) => view! { <InventoryTabs inventory_id=id /> }.into_any(),
            }}
        </main>
    }
}
