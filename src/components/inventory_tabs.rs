//! Inventory Tabs
//!
//! Per-inventory page. Fetches its four slices concurrently and mounts the
//! tabs once the inventory and its numbering are both in.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cancel::CancelToken;
use crate::components::{AccessTab, DiscussionTab, FieldsTab, GeneralSettingsTab, ItemsTab, NumberingTab};
use crate::context::use_app_context;
use crate::tab_loader::{load_inventory_tab, pump, reload_fields, TabShell, TabState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TabKey {
    Items,
    Fields,
    Discussion,
    General,
    Numbering,
    Access,
}

impl TabKey {
    const ALL: [TabKey; 6] = [
        TabKey::Items,
        TabKey::Fields,
        TabKey::Discussion,
        TabKey::General,
        TabKey::Numbering,
        TabKey::Access,
    ];

    fn title(&self) -> &'static str {
        match self {
            TabKey::Items => "Items",
            TabKey::Fields => "Fields",
            TabKey::Discussion => "Discussion",
            TabKey::General => "General settings",
            TabKey::Numbering => "Custom numbers",
            TabKey::Access => "Access",
        }
    }
}

#[component]
pub fn InventoryTabs(inventory_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(TabState::default());

    let token = CancelToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    // Inventory, numbering, fields and access, all at once
    {
        let ctx = ctx.clone();
        let id = inventory_id.clone();
        let token = token.clone();
        Effect::new(move |_| {
            let updates = load_inventory_tab(ctx.source(), id.clone());
            let token = token.clone();
            spawn_local(async move {
                pump(updates, &token, |update| set_state.update(|s| s.apply(update))).await;
            });
        });
    }

    let reload = {
        let ctx = ctx.clone();
        let id = inventory_id.clone();
        let token = token.clone();
        Callback::new(move |_: ()| {
            let load = reload_fields(ctx.source(), id.clone());
            let token = token.clone();
            spawn_local(async move {
                let update = load.await;
                if !token.is_cancelled() {
                    set_state.update(|s| s.apply(update));
                }
            });
        })
    };

    let shell = Memo::new(move |_| state.with(|s| s.shell()));
    let fields = Signal::derive(move || state.with(|s| s.fields.clone()));
    let access = Signal::derive(move || state.with(|s| s.access.clone()));

    move || match shell.get() {
        None => view! { <div class="py-4 text-body-secondary">"Loading…"</div> }.into_any(),
        Some(shell) => view! {
            <TabsBody
                inventory_id=inventory_id.clone()
                shell=shell
                fields=fields
                access=access
                reload=reload
            />
        }
        .into_any(),
    }
}

#[component]
fn TabsBody(
    inventory_id: String,
    shell: TabShell,
    fields: Signal<Vec<crate::models::Field>>,
    access: Signal<Vec<crate::models::AccessEntry>>,
    reload: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (active, set_active) = signal(TabKey::Items);
    let TabShell { inventory, numbering } = shell;
    let editable = ctx.session.can_edit(&inventory);

    let pane_display = move |key: TabKey| move || if active.get() == key { "block" } else { "none" };

    view! {
        <div class="py-4">
            <div class="d-flex align-items-center gap-2 mb-3">
                <button class="btn btn-sm btn-outline-secondary" on:click=move |_| ctx.back()>"← Back"</button>
                <h1 class="h4 m-0">{inventory.name.clone()}</h1>
                <span class="badge bg-secondary ms-2">{inventory.code.clone()}</span>
                <div class="ms-auto text-body-secondary small">
                    {if inventory.is_public { "Public" } else { "Restricted" }}
                </div>
            </div>

            <div class="card shadow-sm">
                <div class="card-body">
                    <ul class="nav nav-tabs flex-wrap">
                        {TabKey::ALL.iter().map(|key| {
                            let key = *key;
                            view! {
                                <li class="nav-item">
                                    <button
                                        class=move || if active.get() == key { "nav-link active" } else { "nav-link" }
                                        on:click=move |_| set_active.set(key)
                                    >
                                        {key.title()}
                                    </button>
                                </li>
                            }
                        }).collect_view()}
                    </ul>

                    <div style:display=pane_display(TabKey::Items)>
                        <ItemsTab inventory_id=inventory_id.clone() />
                    </div>
                    <div style:display=pane_display(TabKey::Fields)>
                        <FieldsTab inventory_id=inventory_id.clone() fields=fields editable=editable reload=reload />
                    </div>
                    <div style:display=pane_display(TabKey::Discussion)>
                        <DiscussionTab />
                    </div>
                    <div style:display=pane_display(TabKey::General)>
                        <GeneralSettingsTab inv=inventory.clone() editable=editable />
                    </div>
                    <div style:display=pane_display(TabKey::Numbering)>
                        <NumberingTab inv=inventory.clone() numbering=numbering editable=editable />
                    </div>
                    <div style:display=pane_display(TabKey::Access)>
                        <AccessTab inv=inventory.clone() users=access editable=editable />
                    </div>
                </div>
            </div>
        </div>
    }
}
