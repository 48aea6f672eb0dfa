//! Access Tab

use leptos::prelude::*;

use crate::models::{AccessEntry, Inventory};

/// Comma separated user names for the write list
pub fn access_names(users: &[AccessEntry]) -> String {
    users.iter().map(|a| a.user.name.as_str()).collect::<Vec<_>>().join(", ")
}

#[component]
pub fn AccessTab(
    inv: Inventory,
    #[prop(into)] users: Signal<Vec<AccessEntry>>,
    editable: bool,
) -> impl IntoView {
    let (is_public, set_is_public) = signal(inv.is_public);
    let (names, set_names) = signal(String::new());

    // Access may arrive after the tab mounts
    Effect::new(move |_| set_names.set(users.with(|list| access_names(list))));

    let id = inv.id.clone();
    let save = move |_: web_sys::MouseEvent| {
        log::info!(
            "[ACCESS] save requested for {}: public={} users={:?}",
            id,
            is_public.get_untracked(),
            names.get_untracked()
        );
    };

    view! {
        <div class="pt-3" style="max-width: 640px">
            <div class="form-check">
                <input
                    type="radio"
                    class="form-check-input"
                    id="access-public"
                    name="access-mode"
                    prop:disabled=!editable
                    prop:checked=move || is_public.get()
                    on:change=move |_| set_is_public.set(true)
                />
                <label class="form-check-label" for="access-public">"Public (any signed in user can write)"</label>
            </div>
            <div class="form-check mb-3">
                <input
                    type="radio"
                    class="form-check-input"
                    id="access-restricted"
                    name="access-mode"
                    prop:disabled=!editable
                    prop:checked=move || !is_public.get()
                    on:change=move |_| set_is_public.set(false)
                />
                <label class="form-check-label" for="access-restricted">"Restricted"</label>
            </div>
            <div class="mb-3">
                <label class="form-label">"Users with write access"</label>
                <input
                    class="form-control"
                    placeholder="Comma separated names"
                    prop:disabled=move || !editable || is_public.get()
                    prop:value=move || names.get()
                    on:input=move |ev| set_names.set(event_target_value(&ev))
                />
            </div>
            <Show when=move || editable>
                <button class="btn btn-primary" on:click=save.clone()>"Save"</button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRef;

    #[test]
    fn test_access_names() {
        let entry = |name: &str| AccessEntry {
            user: UserRef { id: name.to_lowercase(), name: name.to_string() },
        };
        assert_eq!(access_names(&[entry("Alice"), entry("Bob")]), "Alice, Bob");
        assert_eq!(access_names(&[]), "");
    }
}
