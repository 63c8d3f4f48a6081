//! Generic CRUD screen: fetch a list, filter it client-side, create/update
//! with required-field validation, delete behind a confirm prompt, reload
//! after every mutation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The original admin screens were near-identical copies of this pattern,
//! one per entity. They collapse here into a single component parameterized
//! by a static [`CrudSpec`]; each page file only supplies its table.

#[cfg(test)]
#[path = "crud_page_test.rs"]
mod crud_page_test;

use std::collections::HashMap;

use leptos::prelude::*;
use serde_json::Value;

use crate::net::crud;

/// Visible list column, keyed into each JSON row.
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Email,
    Password,
}

/// Form field for create/update.
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// Static description of one entity screen.
pub struct CrudSpec {
    pub title: &'static str,
    /// Collection path under the API base, e.g. `"/carreras"`.
    pub base_path: &'static str,
    pub columns: &'static [Column],
    /// Empty means the screen is read-only: list and filter, no form.
    pub fields: &'static [Field],
}

/// Scalar cell rendered as text; objects and arrays render empty. A dotted
/// key walks nested objects, e.g. `"tipoBeca.id"` on the join-table rows.
#[must_use]
pub fn cell_text(row: &Value, key: &str) -> String {
    let mut value = Some(row);
    for segment in key.split('.') {
        value = value.and_then(|v| v.get(segment));
    }
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Case-insensitive substring filter across the visible columns.
#[must_use]
pub fn filter_rows(rows: &[Value], columns: &[Column], term: &str) -> Vec<Value> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| {
            columns
                .iter()
                .any(|c| cell_text(row, c.key).to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Field-presence validation; the first missing required field wins.
///
/// # Errors
///
/// Returns the user-facing message for the first required field left blank.
pub fn validate_form(fields: &[Field], values: &HashMap<String, String>) -> Result<(), String> {
    for field in fields {
        if field.required && values.get(field.key).is_none_or(|v| v.trim().is_empty()) {
            return Err(format!("El campo {} es requerido", field.label));
        }
    }
    Ok(())
}

/// JSON payload for create/update. Numeric fields are parsed (integers kept
/// integral); blank values are omitted so optional columns stay null.
#[must_use]
pub fn build_payload(fields: &[Field], values: &HashMap<String, String>) -> Value {
    let mut map = serde_json::Map::new();
    for field in fields {
        let raw = values.get(field.key).map_or("", String::as_str).trim();
        if raw.is_empty() {
            continue;
        }
        let value = match field.kind {
            FieldKind::Number => raw
                .parse::<i64>()
                .map(Value::from)
                .or_else(|_| raw.parse::<f64>().map(Value::from))
                .unwrap_or_else(|_| Value::String(raw.to_owned())),
            _ => Value::String(raw.to_owned()),
        };
        map.insert(field.key.to_owned(), value);
    }
    Value::Object(map)
}

/// Pre-fill the edit form from an existing row.
#[must_use]
pub fn row_form_values(row: &Value, fields: &[Field]) -> HashMap<String, String> {
    fields
        .iter()
        .map(|f| (f.key.to_owned(), cell_text(row, f.key)))
        .collect()
}

/// HTML `type` attribute for a form field.
#[must_use]
pub fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "text",
        FieldKind::Number => "number",
        FieldKind::Date => "date",
        FieldKind::Email => "email",
        FieldKind::Password => "password",
    }
}

/// One entity screen driven by a static [`CrudSpec`].
#[component]
pub fn CrudPage(spec: &'static CrudSpec) -> impl IntoView {
    let rows = RwSignal::new(Vec::<Value>::new());
    let search = RwSignal::new(String::new());
    let form = RwSignal::new(HashMap::<String, String>::new());
    let editing = RwSignal::new(None::<i64>);
    let error = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crud::fetch_rows(spec.base_path).await {
                    Ok(list) => {
                        rows.set(list);
                        error.set(String::new());
                    }
                    Err(e) => {
                        log::warn!("list {} failed: {e}", spec.base_path);
                        error.set(format!("Error al cargar {}", spec.title));
                    }
                }
                loading.set(false);
            });
        }
    };
    load();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Err(msg) = validate_form(spec.fields, &form.get_untracked()) {
            error.set(msg);
            return;
        }
        let payload = build_payload(spec.fields, &form.get_untracked());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match editing.get_untracked() {
                Some(id) => crud::update_row(spec.base_path, id, &payload).await,
                None => crud::create_row(spec.base_path, &payload).await,
            };
            match result {
                Ok(()) => {
                    form.set(HashMap::new());
                    editing.set(None);
                    error.set(String::new());
                    load();
                }
                Err(e) => error.set(format!("Error al guardar: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    };

    let on_delete = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .is_some_and(|w| w.confirm_with_message("¿Eliminar este registro?").unwrap_or(false));
            if !confirmed {
                return;
            }
            leptos::task::spawn_local(async move {
                match crud::delete_row(spec.base_path, id).await {
                    Ok(()) => load(),
                    Err(e) => error.set(format!("Error al eliminar: {e}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    let on_cancel_edit = move |_| {
        editing.set(None);
        form.set(HashMap::new());
    };

    let can_edit = !spec.fields.is_empty();

    view! {
        <section class="crud-page">
            <header class="crud-page__header">
                <h1>{spec.title}</h1>
                <input
                    class="crud-page__search"
                    type="text"
                    placeholder="Buscar..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </header>

            <Show when=move || !error.get().is_empty()>
                <p class="crud-page__error">{move || error.get()}</p>
            </Show>

            {can_edit
                .then(|| {
                    view! {
                        <form class="crud-page__form" on:submit=on_submit>
                            {spec
                                .fields
                                .iter()
                                .map(|field| {
                                    let key = field.key;
                                    view! {
                                        <label class="crud-page__label">
                                            {field.label}
                                            <input
                                                class="crud-page__input"
                                                type=input_type(field.kind)
                                                prop:value=move || {
                                                    form.get().get(key).cloned().unwrap_or_default()
                                                }
                                                on:input=move |ev| {
                                                    form.update(|m| {
                                                        m.insert(key.to_owned(), event_target_value(&ev));
                                                    });
                                                }
                                            />
                                        </label>
                                    }
                                })
                                .collect::<Vec<_>>()}
                            <button class="btn btn--primary" type="submit">
                                {move || if editing.get().is_some() { "Actualizar" } else { "Crear" }}
                            </button>
                            <Show when=move || editing.get().is_some()>
                                <button class="btn" type="button" on:click=on_cancel_edit>
                                    "Cancelar"
                                </button>
                            </Show>
                        </form>
                    }
                })}

            <Show when=move || loading.get()>
                <p class="crud-page__loading">"Cargando..."</p>
            </Show>

            <table class="crud-page__table">
                <thead>
                    <tr>
                        {spec
                            .columns
                            .iter()
                            .map(|c| view! { <th>{c.label}</th> })
                            .collect::<Vec<_>>()}
                        {can_edit.then(|| view! { <th>"Acciones"</th> })}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        filter_rows(&rows.get(), spec.columns, &search.get())
                            .into_iter()
                            .map(|row| {
                                let id = crud::row_id(&row);
                                let edit_values = row_form_values(&row, spec.fields);
                                let cells = spec
                                    .columns
                                    .iter()
                                    .map(|c| view! { <td>{cell_text(&row, c.key)}</td> })
                                    .collect::<Vec<_>>();
                                view! {
                                    <tr>
                                        {cells}
                                        {can_edit
                                            .then(|| {
                                                view! {
                                                    <td class="crud-page__actions">
                                                        <button
                                                            class="btn"
                                                            on:click=move |_| {
                                                                if let Some(id) = id {
                                                                    editing.set(Some(id));
                                                                    form.set(edit_values.clone());
                                                                }
                                                            }
                                                        >
                                                            "Editar"
                                                        </button>
                                                        <button
                                                            class="btn btn--danger"
                                                            on:click=move |_| {
                                                                if let Some(id) = id {
                                                                    on_delete(id);
                                                                }
                                                            }
                                                        >
                                                            "Eliminar"
                                                        </button>
                                                    </td>
                                                }
                                            })}
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </section>
    }
}
