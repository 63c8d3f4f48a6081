//! Login page: identifier + password against `POST /auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::api::LoginRequest;

/// Field-presence validation with the user-facing messages.
fn validate_credentials(identifier: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err("El usuario o correo es requerido");
    }
    if password.trim().is_empty() {
        return Err("La contraseña es requerida");
    }
    Ok(LoginRequest {
        identifier: identifier.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&identifier.get(), &password.get()) {
            Ok(c) => c,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&credentials).await {
                Ok(resp) => {
                    let established = crate::auth::flow::establish_session(
                        &mut crate::state::session::BrowserSession,
                        &resp.access_token,
                        &resp.role,
                    );
                    match established {
                        Ok(_) => {
                            // Full reload so every guard re-reads storage.
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href("/dashboard");
                            }
                        }
                        Err(e) => {
                            log::warn!("login token rejected: {e}");
                            error.set("Credenciales inválidas".to_owned());
                            busy.set(false);
                        }
                    }
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    error.set("Credenciales inválidas".to_owned());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Gestión de Becas"</h1>
                <p class="login-card__subtitle">"Iniciar sesión"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Usuario o correo"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Ingresar"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message">{move || error.get()}</p>
                </Show>
                <a class="login-link" href="/register">
                    "¿No tienes cuenta? Regístrate"
                </a>
            </div>
        </div>
    }
}
