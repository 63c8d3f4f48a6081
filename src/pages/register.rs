//! Registration page.
//!
//! The backend accepts five role labels, but only `admin` and `estudiante`
//! are distinctly gated anywhere in the client; the rest see the universal
//! menu entries.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::api::RegisterRequest;

pub const ROLE_OPTIONS: &[&str] = &["estudiante", "profesor", "secretario", "rector", "admin"];

pub const DEFAULT_ROLE: &str = "estudiante";

/// Field-presence validation; `apellidos` is the only optional field.
fn validate_registration(form: &RegisterRequest) -> Result<(), &'static str> {
    if form.nombre.trim().is_empty() {
        return Err("El nombre es requerido");
    }
    if form.email.trim().is_empty() {
        return Err("El correo es requerido");
    }
    if form.username.trim().is_empty() {
        return Err("El usuario es requerido");
    }
    if form.password.trim().is_empty() {
        return Err("La contraseña es requerida");
    }
    if !ROLE_OPTIONS.contains(&form.role.as_str()) {
        return Err("El rol no es válido");
    }
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let nombre = RwSignal::new(String::new());
    let apellidos = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(DEFAULT_ROLE.to_owned());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = RegisterRequest {
            nombre: nombre.get().trim().to_owned(),
            apellidos: apellidos.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            username: username.get().trim().to_owned(),
            password: password.get(),
            role: role.get(),
        };
        if let Err(msg) = validate_registration(&form) {
            error.set(msg.to_owned());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&form).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
                Err(e) => {
                    log::warn!("register failed: {e}");
                    error.set("No se pudo completar el registro".to_owned());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Gestión de Becas"</h1>
                <p class="login-card__subtitle">"Crear cuenta"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Nombre"
                        prop:value=move || nombre.get()
                        on:input=move |ev| nombre.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Apellidos"
                        prop:value=move || apellidos.get()
                        on:input=move |ev| apellidos.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Correo"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Usuario"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        {ROLE_OPTIONS
                            .iter()
                            .map(|r| {
                                view! {
                                    <option value=*r selected=(*r == DEFAULT_ROLE)>
                                        {*r}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Registrarse"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message">{move || error.get()}</p>
                </Show>
                <a class="login-link" href="/login">
                    "¿Ya tienes cuenta? Inicia sesión"
                </a>
            </div>
        </div>
    }
}
