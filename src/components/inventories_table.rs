//! Inventories Table Component
//!
//! Card with a table of inventories; names link to the inventory page.

use leptos::prelude::*;

use crate::context::{use_app_context, Route};
use crate::format::{initial, string_to_color};
use crate::models::Inventory;

/// Avatar, linked name and owner
#[component]
pub fn InventoryCell(inv: Inventory) -> impl IntoView {
    let ctx = use_app_context();
    let id = inv.id.clone();
    let avatar_style = format!("background-color: {};", string_to_color(&inv.name));

    view! {
        <div class="d-flex align-items-center">
            <span class="avatar me-3" style=avatar_style>{initial(&inv.name)}</span>
            <div>
                <a href="#" class="text-decoration-none" on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Route::Inventory(id.clone()));
                }>
                    {inv.name.clone()}
                </a>
                <div class="text-body-secondary small">"by " {inv.owner_name().to_string()}</div>
            </div>
        </div>
    }
}

#[component]
pub fn InventoriesTable(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] right: Signal<String>,
    #[prop(into)] inventories: Signal<Vec<Inventory>>,
) -> impl IntoView {
    view! {
        <div class="card shadow-sm h-100">
            <div class="card-header d-flex justify-content-between align-items-center">
                <h2 class="h6 m-0">{move || title.get()}</h2>
                <div class="text-body-secondary small">{move || right.get()}</div>
            </div>
            <div class="card-body p-0">
                <table class="table table-hover mb-0 align-middle">
                    <thead class="text-body-secondary small">
                        <tr>
                            <th>"Inventory"</th>
                            <th>"Description"</th>
                            <th class="text-end">"Items"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || inventories.with(|list| list.is_empty())>
                            <tr>
                                <td colspan="3" class="text-center py-4 text-body-secondary">"No data"</td>
                            </tr>
                        </Show>
                        <For
                            each=move || inventories.get()
                            key=|inv| inv.id.clone()
                            children=move |inv| {
                                let description = inv.description.clone().unwrap_or_default();
                                let count = inv.item_count();
                                view! {
                                    <tr>
                                        <td><InventoryCell inv=inv /></td>
                                        <td class="text-truncate" style="max-width: 320px;">{description}</td>
                                        <td class="text-end"><span class="badge bg-secondary">{count}</span></td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}
