//! Items Tab

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::or_log;
use crate::cancel::CancelToken;
use crate::context::use_app_context;
use crate::format::format_date;
use crate::listing::{item_search_text, ItemSortKey, ListView};
use crate::models::Item;

#[component]
pub fn ItemsTab(inventory_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let (items, set_items) = signal(Vec::<Item>::new());
    let view_state = RwSignal::new(
        ListView::<Item>::new(vec![ItemSortKey::Created, ItemSortKey::Number])
            .with_selector(item_search_text)
            .unsorted(),
    );

    let token = CancelToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    Effect::new(move |_| {
        let source = ctx.source();
        let id = inventory_id.clone();
        let token = token.clone();
        spawn_local(async move {
            let loaded = or_log("items", source.items(&id).await);
            if !token.is_cancelled() {
                set_items.set(loaded);
            }
        });
    });

    let rows = Memo::new(move |_| items.with(|list| view_state.with(|v| v.apply(list))));

    view! {
        <div class="pt-3">
            <div class="d-flex gap-2 mb-2">
                <input
                    class="form-control form-control-sm"
                    style="max-width: 280px"
                    placeholder="Search items"
                    prop:value=move || view_state.with(|v| v.query().to_string())
                    on:input=move |ev| view_state.update(|v| v.set_query(event_target_value(&ev)))
                />
            </div>
            <div class="table-responsive">
                <table class="table table-sm align-middle">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Data"</th>
                            <th>"Created"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !rows.with(|r| r.is_empty())
                            fallback=|| view! { <tr><td colspan="3" class="text-center text-body-secondary">"No items"</td></tr> }
                        >
                            <For
                                each=move || rows.get()
                                key=|item| item.id.clone()
                                children=|item| {
                                    let data = serde_json::to_string(&item.data).unwrap_or_default();
                                    view! {
                                        <tr>
                                            <td class="font-monospace">{item.inv_number.clone()}</td>
                                            <td><code class="small">{data}</code></td>
                                            <td>{format_date(Some(item.created_at))}</td>
                                        </tr>
                                    }
                                }
                            />
                        </Show>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
