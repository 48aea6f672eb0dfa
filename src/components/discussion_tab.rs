//! Discussion Tab
//!
//! Local-only message thread.

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::format::format_date;

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: usize,
    pub user: String,
    pub text: String,
    pub ts: DateTime<Utc>,
}

fn seed_messages(now: DateTime<Utc>) -> Vec<Message> {
    vec![
        Message {
            id: 1,
            user: "Alice".to_string(),
            text: "Welcome to the discussion!".to_string(),
            ts: now,
        },
        Message {
            id: 2,
            user: "Bob".to_string(),
            text: "Please keep item data consistent.".to_string(),
            ts: now,
        },
    ]
}

/// Append a message from the current user. Blank text is ignored.
pub fn post_message(messages: &mut Vec<Message>, text: &str, now: DateTime<Utc>) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }
    messages.push(Message {
        id: messages.len() + 1,
        user: "You".to_string(),
        text: text.to_string(),
        ts: now,
    });
    true
}

#[component]
pub fn DiscussionTab() -> impl IntoView {
    let (messages, set_messages) = signal(seed_messages(Utc::now()));
    let (draft, set_draft) = signal(String::new());

    let send = move || {
        let text = draft.get_untracked();
        let mut posted = false;
        set_messages.update(|list| posted = post_message(list, &text, Utc::now()));
        if posted {
            set_draft.set(String::new());
        }
    };

    view! {
        <div class="pt-3">
            <ul class="list-group mb-3">
                <For
                    each=move || messages.get()
                    key=|m| m.id
                    children=|m| view! {
                        <li class="list-group-item">
                            <div class="d-flex justify-content-between small text-body-secondary">
                                <strong>{m.user.clone()}</strong>
                                <span>{format_date(Some(m.ts))}</span>
                            </div>
                            <div>{m.text.clone()}</div>
                        </li>
                    }
                />
            </ul>
            <div class="d-flex gap-2">
                <input
                    class="form-control"
                    placeholder="Write a message"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button class="btn btn-primary" on:click=move |_| send()>"Send"</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_appends_as_you() {
        let now = Utc::now();
        let mut list = seed_messages(now);
        assert!(post_message(&mut list, "  hello  ", now));
        assert_eq!(list.len(), 3);
        assert_eq!(list[2].id, 3);
        assert_eq!(list[2].user, "You");
        assert_eq!(list[2].text, "hello");
    }

    #[test]
    fn test_blank_message_ignored() {
        let now = Utc::now();
        let mut list = seed_messages(now);
        assert!(!post_message(&mut list, "   ", now));
        assert_eq!(list.len(), 2);
    }
}
