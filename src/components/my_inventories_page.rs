//! My Inventories Page
//!
//! Inventories owned by the session user, with search/sort and a create modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::or_log;
use crate::cancel::CancelToken;
use crate::context::{use_app_context, Route};
use crate::format::format_date;
use crate::listing::{inventory_search_text, InventorySortKey, ListView, SortDirection};
use crate::models::{CreateInventory, Inventory};

/// Modal form for a new inventory
#[component]
fn CreateInventoryModal(
    show: ReadSignal<bool>,
    set_show: WriteSignal<bool>,
    #[prop(into)] on_created: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (form, set_form) = signal(CreateInventory::default());

    let clean = move || {
        set_form.set(CreateInventory::default());
        set_show.set(false);
    };

    let submit = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let data = CreateInventory {
            owner_id: ctx.session.user_id.clone(),
            ..form.get()
        };
        let source = ctx.source();
        spawn_local(async move {
            match source.create_inventory(&data).await {
                Ok(inv) => log::info!("[INVENTORIES] created {} ({})", inv.name, inv.id),
                Err(e) => log::error!("[INVENTORIES] create failed: {}", e),
            }
            set_show.set(false);
            on_created.run(());
        });
    };

    view! {
        <Show when=move || show.get()>
            <div class="modal d-block" tabindex="-1">
                <div class="modal-dialog modal-dialog-centered">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">"New Inventory"</h5>
                            <button type="button" class="btn-close" on:click=move |_| clean()></button>
                        </div>
                        <div class="modal-body">
                            <div class="mb-3">
                                <label class="form-label">"Name"</label>
                                <input
                                    class="form-control"
                                    placeholder="e.g. Cameras"
                                    prop:value=move || form.with(|f| f.name.clone())
                                    on:input=move |ev| set_form.update(|f| f.name = event_target_value(&ev))
                                />
                            </div>
                            <div class="mb-3">
                                <label class="form-label">"Code"</label>
                                <input
                                    class="form-control"
                                    placeholder="e.g. CAM"
                                    prop:value=move || form.with(|f| f.code.clone())
                                    on:input=move |ev| set_form.update(|f| f.code = event_target_value(&ev))
                                />
                            </div>
                            <div class="mb-3">
                                <label class="form-label">"Description"</label>
                                <textarea
                                    class="form-control"
                                    rows="3"
                                    prop:value=move || form.with(|f| f.description.clone())
                                    on:input=move |ev| set_form.update(|f| f.description = event_target_value(&ev))
                                ></textarea>
                            </div>
                            <div class="form-check">
                                <input
                                    type="checkbox"
                                    class="form-check-input"
                                    id="create-is-public"
                                    prop:checked=move || form.with(|f| f.is_public)
                                    on:change=move |ev| set_form.update(|f| f.is_public = event_target_checked(&ev))
                                />
                                <label class="form-check-label" for="create-is-public">"Is public?"</label>
                            </div>
                        </div>
                        <div class="modal-footer">
                            <button class="btn btn-outline-secondary" on:click=move |_| clean()>"Cancel"</button>
                            <button class="btn btn-primary" on:click=submit.clone()>"Create"</button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn MyInventoriesPage() -> impl IntoView {
    let ctx = use_app_context();
    let (inventories, set_inventories) = signal(Vec::<Inventory>::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (show_create, set_show_create) = signal(false);
    let view_state = RwSignal::new(
        ListView::<Inventory>::new(InventorySortKey::ALL.to_vec())
            .with_selector(inventory_search_text)
            .with_direction(SortDirection::Desc),
    );

    let token = CancelToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    // Load my inventories on mount and after every create
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            let _ = reload_trigger.get();
            let source = ctx.source();
            let user_id = ctx.session.user_id.clone();
            let token = token.clone();
            spawn_local(async move {
                let loaded = or_log("inventories from user", source.inventories_of(&user_id).await);
                if !token.is_cancelled() {
                    log::info!("[INVENTORIES] loaded {} owned inventories", loaded.len());
                    set_inventories.set(loaded);
                }
            });
        });
    }

    let rows = Memo::new(move |_| inventories.with(|all| view_state.with(|v| v.apply(all))));

    view! {
        <div class="py-4">
            <div class="row mb-4 g-3 align-items-center">
                <div class="col-12 col-md-8">
                    <h1 class="h3 mb-1">"My Inventories"</h1>
                    <div class="text-body-secondary">"Manage the inventories you own and those you can edit."</div>
                </div>
                <div class="col-12 col-md-4 text-md-end">
                    <button class="btn btn-primary" on:click=move |_| set_show_create.set(true)>"+ New Inventory"</button>
                </div>
            </div>

            <div class="card shadow-sm h-100">
                <div class="card-header d-flex gap-2 align-items-center justify-content-between flex-wrap">
                    <h2 class="h6 m-0">"Owned by me"</h2>
                    <div class="d-flex gap-2 flex-wrap">
                        <div class="input-group input-group-sm" style="min-width: 220px;">
                            <span class="input-group-text">"Search"</span>
                            <input
                                class="form-control"
                                placeholder="Name, code…"
                                prop:value=move || view_state.with(|v| v.query().to_string())
                                on:input=move |ev| view_state.update(|v| v.set_query(event_target_value(&ev)))
                            />
                        </div>
                        <select
                            class="form-select form-select-sm"
                            prop:value=move || view_state.with(|v| v.sort_key().map(|k| k.as_str()).unwrap_or_default())
                            on:change=move |ev| {
                                if let Some(key) = InventorySortKey::from_str(&event_target_value(&ev)) {
                                    view_state.update(|v| v.set_sort_key(key));
                                }
                            }
                        >
                            {InventorySortKey::ALL.iter().map(|key| view! {
                                <option value=key.as_str()>{key.label()}</option>
                            }).collect_view()}
                        </select>
                        <select
                            class="form-select form-select-sm"
                            prop:value=move || view_state.with(|v| v.direction().as_str())
                            on:change=move |ev| view_state.update(|v| v.set_direction(SortDirection::from_str(&event_target_value(&ev))))
                        >
                            <option value="desc">"Desc"</option>
                            <option value="asc">"Asc"</option>
                        </select>
                    </div>
                </div>
                <div class="card-body p-0">
                    <table class="table table-hover mb-0 align-middle">
                        <thead class="text-body-secondary small">
                            <tr>
                                <th>"Name"</th>
                                <th>"Description"</th>
                                <th>"Items"</th>
                                <th>"Updated"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || rows.get()
                                key=|inv| inv.id.clone()
                                children={
                                    let ctx = ctx.clone();
                                    move |inv| {
                                        let ctx = ctx.clone();
                                        let id = inv.id.clone();
                                        view! {
                                            <tr>
                                                <td>
                                                    <span class="badge bg-secondary me-2">{inv.code.clone()}</span>
                                                    <a href="#" on:click=move |ev| {
                                                        ev.prevent_default();
                                                        ctx.navigate(Route::Inventory(id.clone()));
                                                    }>{inv.name.clone()}</a>
                                                </td>
                                                <td class="text-truncate" style="max-width: 320px;">
                                                    {inv.description.clone().unwrap_or_default()}
                                                </td>
                                                <td>{inv.item_count()}</td>
                                                <td>{format_date(inv.updated_at)}</td>
                                            </tr>
                                        }
                                    }
                                }
                            />
                            <Show when=move || rows.with(|r| r.is_empty())>
                                <tr>
                                    <td colspan="4" class="text-center py-4 text-body-secondary">"No inventories"</td>
                                </tr>
                            </Show>
                        </tbody>
                    </table>
                </div>
            </div>

            <CreateInventoryModal
                show=show_create
                set_show=set_show_create
                on_created=move |_| set_reload_trigger.update(|v| *v += 1)
            />
        </div>
    }
}
