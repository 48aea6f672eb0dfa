//! Tag Cloud Component
//!
//! One pill per tag; clicking a pill filters the dashboard.

use leptos::prelude::*;

use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn TagCloud() -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <div class="card shadow-sm">
            <div class="card-header">
                <h2 class="h6 m-0">"Tag cloud"</h2>
            </div>
            <div class="card-body">
                <div class="d-flex flex-wrap gap-2">
                    <For
                        each=move || store.tags().get()
                        key=|tag| tag.clone()
                        children=move |tag| {
                            let label = tag.clone();
                            let is_active = {
                                let tag = tag.clone();
                                move || store.active_tag().get().as_deref() == Some(tag.as_str())
                            };
                            view! {
                                <button
                                    class=move || if is_active() {
                                        "btn btn-sm btn-secondary rounded-pill"
                                    } else {
                                        "btn btn-sm btn-outline-secondary rounded-pill"
                                    }
                                    on:click=move |_| *store.active_tag().write() = Some(tag.clone())
                                >
                                    {label}
                                </button>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
