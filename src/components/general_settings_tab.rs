//! General Settings Tab

use leptos::prelude::*;

use crate::format::format_date;
use crate::models::Inventory;

#[component]
pub fn GeneralSettingsTab(inv: Inventory, editable: bool) -> impl IntoView {
    let (name, set_name) = signal(inv.name.clone());
    let (description, set_description) = signal(inv.description.clone().unwrap_or_default());
    let id = inv.id.clone();

    // No update endpoint yet; the edit is only logged
    let save = move |_: web_sys::MouseEvent| {
        log::info!(
            "[SETTINGS] save requested for {}: name={:?} description={:?}",
            id,
            name.get_untracked(),
            description.get_untracked()
        );
    };

    view! {
        <div class="pt-3" style="max-width: 640px">
            <div class="mb-3">
                <label class="form-label">"Name"</label>
                <input
                    class="form-control"
                    prop:disabled=!editable
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>
            <div class="mb-3">
                <label class="form-label">"Code"</label>
                <input class="form-control" prop:disabled=true prop:value=inv.code.clone() />
            </div>
            <div class="mb-3">
                <label class="form-label">"Updated"</label>
                <input class="form-control" prop:disabled=true prop:value=format_date(inv.updated_at) />
            </div>
            <div class="mb-3">
                <label class="form-label">"Description"</label>
                <textarea
                    class="form-control"
                    rows="4"
                    prop:disabled=!editable
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="mb-3 small text-body-secondary">
                {format!("Owner: {}", inv.owner_name())}
            </div>
            <Show when=move || editable>
                <button class="btn btn-primary" on:click=save.clone()>"Save"</button>
            </Show>
        </div>
    }
}
