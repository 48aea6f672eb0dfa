//! Fields Tab
//!
//! Editable field definitions. Saving only creates the rows that have no
//! id yet; persisted rows are shown read-only.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::{CreateField, Field, FieldType};

/// One editable row; `options_text` is the comma separated form of `field.options`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldRow {
    pub field: Field,
    pub options_text: String,
}

impl FieldRow {
    pub fn from_field(field: Field) -> Self {
        let options_text = field.options.join(", ");
        Self { field, options_text }
    }

    pub fn is_new(&self) -> bool {
        self.field.id.is_empty()
    }
}

/// Split "a, b,,c" into ["a", "b", "c"]
pub fn parse_options(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Create requests for unsaved rows; position is the row index
pub fn new_field_requests(rows: &[FieldRow], inventory_id: &str) -> Vec<CreateField> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.is_new())
        .map(|(index, row)| CreateField {
            name: row.field.name.trim().to_string(),
            inventory_id: inventory_id.to_string(),
            key: row.field.key.trim().to_string(),
            field_type: row.field.field_type,
            required: row.field.required,
            options: parse_options(&row.options_text),
            position: index as i32,
        })
        .collect()
}

#[component]
pub fn FieldsTab(
    inventory_id: String,
    #[prop(into)] fields: Signal<Vec<Field>>,
    editable: bool,
    reload: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let rows = RwSignal::new(Vec::<FieldRow>::new());
    let (saving, set_saving) = signal(false);

    // Re-sync whenever the loaded field list changes
    Effect::new(move |_| {
        let loaded = fields.get();
        rows.set(loaded.into_iter().map(FieldRow::from_field).collect());
    });

    let add_row = move |_: web_sys::MouseEvent| rows.update(|list| list.push(FieldRow::default()));

    let save = move |_: web_sys::MouseEvent| {
        let requests = rows.with_untracked(|list| new_field_requests(list, &inventory_id));
        if requests.is_empty() {
            log::debug!("[FIELDS] nothing to save");
            return;
        }
        let source = ctx.source();
        set_saving.set(true);
        spawn_local(async move {
            match source.create_fields(&requests).await {
                Ok(created) => log::info!("[FIELDS] created {} field(s)", created.len()),
                Err(e) => log::error!("[FIELDS] save failed: {}", e),
            }
            set_saving.set(false);
            reload.run(());
        });
    };

    let row_view = move |index: usize| {
        let row = move || rows.with(|list| list.get(index).cloned().unwrap_or_default());
        let locked = move || !editable || !row().is_new();
        let edit = move |f: &dyn Fn(&mut FieldRow)| {
            rows.update(|list| {
                if let Some(r) = list.get_mut(index) {
                    f(r);
                }
            })
        };
        view! {
            <tr>
                <td>
                    <input
                        class="form-control form-control-sm"
                        placeholder="key"
                        prop:disabled=locked
                        prop:value=move || row().field.key
                        on:input=move |ev| { let v = event_target_value(&ev); edit(&|r| r.field.key = v.clone()) }
                    />
                </td>
                <td>
                    <input
                        class="form-control form-control-sm"
                        placeholder="Name"
                        prop:disabled=locked
                        prop:value=move || row().field.name
                        on:input=move |ev| { let v = event_target_value(&ev); edit(&|r| r.field.name = v.clone()) }
                    />
                </td>
                <td>
                    <select
                        class="form-select form-select-sm"
                        prop:disabled=locked
                        prop:value=move || row().field.field_type.as_str()
                        on:change=move |ev| {
                            let t = FieldType::from_str(&event_target_value(&ev));
                            edit(&|r| r.field.field_type = t)
                        }
                    >
                        {FieldType::ALL.iter().map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> }).collect_view()}
                    </select>
                </td>
                <td class="text-center">
                    <input
                        type="checkbox"
                        class="form-check-input"
                        prop:disabled=locked
                        prop:checked=move || row().field.required
                        on:change=move |ev| { let v = event_target_checked(&ev); edit(&|r| r.field.required = v) }
                    />
                </td>
                <td>
                    <input
                        class="form-control form-control-sm"
                        placeholder="a, b, c"
                        prop:disabled=move || locked() || row().field.field_type != FieldType::Enum
                        prop:value=move || row().options_text
                        on:input=move |ev| { let v = event_target_value(&ev); edit(&|r| r.options_text = v.clone()) }
                    />
                </td>
            </tr>
        }
    };

    view! {
        <div class="pt-3">
            <div class="table-responsive">
                <table class="table table-sm align-middle">
                    <thead>
                        <tr>
                            <th>"Key"</th>
                            <th>"Name"</th>
                            <th>"Type"</th>
                            <th>"Required"</th>
                            <th>"Options"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || 0..rows.with(|list| list.len())
                            key=|index| *index
                            children=row_view
                        />
                    </tbody>
                </table>
            </div>
            <Show when=move || editable>
                <div class="d-flex gap-2">
                    <button class="btn btn-sm btn-outline-primary" on:click=add_row>"+ Add field"</button>
                    <button class="btn btn-sm btn-primary" prop:disabled=move || saving.get() on:click=save.clone()>
                        "Save"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persisted(key: &str, position: i32) -> FieldRow {
        FieldRow::from_field(Field {
            id: format!("f-{}", key),
            inventory_id: "1".to_string(),
            key: key.to_string(),
            name: key.to_uppercase(),
            position,
            ..Default::default()
        })
    }

    #[test]
    fn test_parse_options() {
        assert_eq!(parse_options(" red, green ,, blue "), vec!["red", "green", "blue"]);
        assert!(parse_options("  ").is_empty());
    }

    #[test]
    fn test_from_field_joins_options() {
        let row = FieldRow::from_field(Field {
            id: "x".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        });
        assert_eq!(row.options_text, "a, b");
        assert!(!row.is_new());
    }

    #[test]
    fn test_only_new_rows_are_requested() {
        let mut fresh = FieldRow::default();
        fresh.field.key = " color ".to_string();
        fresh.field.name = "Color".to_string();
        fresh.field.field_type = FieldType::Enum;
        fresh.options_text = "black, white".to_string();
        let rows = vec![persisted("brand", 0), persisted("model", 1), fresh];

        let requests = new_field_requests(&rows, "7");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].key, "color");
        assert_eq!(requests[0].inventory_id, "7");
        assert_eq!(requests[0].position, 2);
        assert_eq!(requests[0].options, vec!["black", "white"]);
    }

    #[test]
    fn test_nothing_new_nothing_requested() {
        assert!(new_field_requests(&[persisted("brand", 0)], "1").is_empty());
    }
}
