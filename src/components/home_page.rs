//! Home Page
//!
//! Inventory dashboard: tag cloud, latest inventories and top 5.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::or_log;
use crate::components::{InventoriesTable, TagCloud};
use crate::context::use_app_context;
use crate::dashboard::with_tag;
use crate::store::{DashboardState, DashboardStateStoreFields};
use crate::cancel::CancelToken;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(DashboardState::default());
    provide_context(store);

    let token = CancelToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    // Three independent loads on mount
    Effect::new(move |_| {
        let source = ctx.source();
        let token = token.clone();
        spawn_local(async move {
            let (top5, all, tags) = futures::join!(source.top5(), source.all_inventories(), source.tags());
            if token.is_cancelled() {
                return;
            }
            *store.top5().write() = or_log("top5 inventories", top5);
            *store.inventories().write() = or_log("all inventories", all);
            *store.tags().write() = or_log("all tags", tags);
            log::info!("[HOME] dashboard loaded");
        });
    });

    let results = Memo::new(move |_| match store.active_tag().get() {
        Some(tag) => store.inventories().with(|all| with_tag(all, &tag)),
        None => Vec::new(),
    });

    view! {
        <div class="py-4">
            <div class="row mb-4 g-3 align-items-center">
                <div class="col-12 col-md-8">
                    <h1 class="h3 mb-1">"Inventory Dashboard"</h1>
                    <p class="text-body-secondary mb-0">"Latest inventories, most popular, and quick tag filters."</p>
                </div>
                <div class="col-12 col-md-4 text-md-end">
                    <Show when=move || store.active_tag().get().is_some()>
                        <button
                            class="btn btn-sm btn-outline-secondary"
                            on:click=move |_| *store.active_tag().write() = None
                        >
                            "Clear filter"
                        </button>
                    </Show>
                </div>
            </div>

            <TagCloud />
            <br />

            <div class="row g-4">
                <div class="col-12">
                    {move || match store.active_tag().get() {
                        Some(tag) => view! {
                            <InventoriesTable
                                title=format!("Results for tag: {}", tag)
                                right=Signal::derive(move || format!("{} result(s)", results.with(|r| r.len())))
                                inventories=results
                            />
                        }.into_any(),
                        None => view! {
                            <InventoriesTable
                                title="Latest inventories".to_string()
                                right=Signal::derive(move || store.inventories().with(|all| all.len()).to_string())
                                inventories=Signal::derive(move || store.inventories().get())
                            />
                        }.into_any(),
                    }}
                </div>
                <div class="col-12">
                    <InventoriesTable
                        title="Top 5 popular".to_string()
                        right="Top 5".to_string()
                        inventories=Signal::derive(move || store.top5().get())
                    />
                </div>
            </div>
        </div>
    }
}
