//! Custom Numbers Tab
//!
//! Pattern editor with a live preview.

use chrono::Utc;
use leptos::prelude::*;

use crate::models::{Inventory, Numbering};
use crate::numbering::{pattern_tokens, render_inventory_number, NumberContext, PREVIEW_SEQUENCE};

#[component]
pub fn NumberingTab(inv: Inventory, numbering: Numbering, editable: bool) -> impl IntoView {
    let (pattern, set_pattern) = signal(numbering.pattern.clone());
    let code = inv.code.clone();

    let preview = Memo::new(move |_| {
        pattern.with(|p| {
            render_inventory_number(
                p,
                &NumberContext {
                    code: &code,
                    seq: PREVIEW_SEQUENCE,
                    now: Utc::now(),
                },
            )
        })
    });
    let tokens = Memo::new(move |_| pattern.with(|p| pattern_tokens(p)));

    // No update endpoint yet; the edit is only logged
    let numbering_id = numbering.id.clone();
    let save = move |_: web_sys::MouseEvent| {
        log::info!("[NUMBERING] save requested for {}: {}", numbering_id, pattern.get_untracked());
    };

    view! {
        <div class="pt-3" style="max-width: 640px">
            <div class="mb-3">
                <label class="form-label">"Pattern"</label>
                <input
                    class="form-control font-monospace"
                    prop:disabled=!editable
                    prop:value=move || pattern.get()
                    on:input=move |ev| set_pattern.set(event_target_value(&ev))
                />
                <div class="form-text">"Tokens: {CODE} {YYYY} {YY} {SEQ:n}"</div>
            </div>
            <div class="mb-3">
                <span class="text-body-secondary me-2">"Preview:"</span>
                <code>{move || preview.get()}</code>
            </div>
            <div class="mb-3 d-flex flex-wrap gap-1">
                {move || tokens.get().into_iter().map(|t| view! { <span class="badge bg-light text-dark border">{t}</span> }).collect_view()}
            </div>
            <div class="mb-3 small text-body-secondary">{format!("Counter: {}", numbering.counter)}</div>
            <Show when=move || editable>
                <button class="btn btn-primary" on:click=save.clone()>"Save"</button>
            </Show>
        </div>
    }
}
