//! Navbar Component
//!
//! Brand, page links, search box and the signed-in user.

use leptos::prelude::*;

use crate::context::{use_app_context, Route};

#[component]
pub fn Navbar(#[prop(into)] on_search: Callback<String>) -> impl IntoView {
    let ctx = use_app_context();
    let (query, set_query) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(query.get().trim().to_string());
    };

    let go_home = {
        let ctx = ctx.clone();
        move |_: web_sys::MouseEvent| ctx.navigate(Route::Home)
    };
    let go_mine = {
        let ctx = ctx.clone();
        move |_: web_sys::MouseEvent| ctx.navigate(Route::MyInventories)
    };
    let user_id = ctx.session.user_id.clone();

    view! {
        <nav class="navbar navbar-dark bg-dark fixed-top shadow-sm">
            <div class="container">
                <button class="navbar-brand btn btn-link" on:click=go_home>"Inventory Management"</button>
                <button class="nav-link btn btn-link me-auto" on:click=go_mine>"Inventory"</button>

                <form class="d-flex me-2" role="search" on:submit=submit>
                    <input
                        type="search"
                        class="form-control"
                        placeholder="Search…"
                        aria-label="Search"
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary">"Search"</button>
                </form>

                <span class="text-white-50 small" title=user_id.clone()>"Signed in"</span>
            </div>
        </nav>
    }
}
