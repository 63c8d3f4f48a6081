//! Role-scoped sidebar navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The menu is a static declarative table filtered by the session role. It
//! is re-derived from storage on every completed navigation rather than
//! updated incrementally, so a logout in another tab is reflected no later
//! than the next navigation.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::auth::flow;
use crate::state::session::{BrowserSession, SessionStore as _};

pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    /// Roles allowed to see the entry; empty means every authenticated role.
    pub roles: &'static [&'static str],
}

/// Declaration order is display order.
pub const MENU: &[MenuItem] = &[
    MenuItem { label: "Dashboard", path: "/dashboard", icon: "🏠", roles: &[] },
    MenuItem { label: "Estudiantes", path: "/estudiantes", icon: "👥", roles: &["admin"] },
    MenuItem { label: "Carreras", path: "/carreras", icon: "🎓", roles: &["admin"] },
    MenuItem { label: "Áreas de Conocimiento", path: "/area-conocimiento", icon: "📚", roles: &["admin"] },
    MenuItem { label: "Requisitos", path: "/requisitos", icon: "📋", roles: &["admin"] },
    MenuItem { label: "Tipos de Beca", path: "/tipo-beca", icon: "🏷️", roles: &["admin"] },
    MenuItem { label: "Requisitos por Beca", path: "/detalle-requisitos-beca", icon: "🔗", roles: &["admin"] },
    MenuItem { label: "Periodos Académicos", path: "/periodo-academico", icon: "📅", roles: &["admin"] },
    MenuItem { label: "Solicitudes", path: "/solicitud-beca", icon: "📨", roles: &["admin"] },
    MenuItem { label: "Estados", path: "/estado", icon: "🔖", roles: &["admin"] },
    MenuItem { label: "Evaluaciones", path: "/evaluacion", icon: "📝", roles: &["admin"] },
    MenuItem { label: "Notificaciones", path: "/notificacion", icon: "🔔", roles: &["admin"] },
    MenuItem { label: "Auditoría", path: "/auditoria", icon: "🧾", roles: &["admin"] },
    MenuItem { label: "Becas Disponibles", path: "/becas-disponibles", icon: "🎯", roles: &["estudiante"] },
    MenuItem { label: "Mis Solicitudes", path: "/mis-solicitudes", icon: "🗂️", roles: &["estudiante"] },
];

/// Filter the static table by role, preserving declaration order.
#[must_use]
pub fn build_menu(role: &str) -> Vec<&'static MenuItem> {
    MENU.iter()
        .filter(|item| item.roles.is_empty() || item.roles.iter().any(|r| r.eq_ignore_ascii_case(role)))
        .collect()
}

/// The sidebar shows only on authenticated, non-auth routes.
#[must_use]
pub fn sidebar_visible(path: &str, authenticated: bool) -> bool {
    authenticated && path != "/login" && path != "/register"
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let collapsed = RwSignal::new(false);

    // Re-read storage per navigation; another tab may have logged out.
    let session = Memo::new(move |_| {
        pathname.track();
        BrowserSession.current()
    });

    let on_logout = move |_| {
        flow::logout(&mut BrowserSession);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <aside class="sidebar" class=("sidebar--collapsed", move || collapsed.get())>
            <button
                class="sidebar__toggle"
                on:click=move |_| collapsed.update(|c| *c = !*c)
            >
                "☰"
            </button>

            <div class="sidebar__user">
                <span class="sidebar__username">
                    {move || {
                        session
                            .get()
                            .map(|s| s.username)
                            .filter(|u| !u.is_empty())
                            .unwrap_or_else(|| "Usuario".to_owned())
                    }}
                </span>
                <span class="sidebar__role">
                    {move || session.get().map(|s| s.role).unwrap_or_default()}
                </span>
            </div>

            <nav class="sidebar__nav">
                {move || {
                    let role = session.get().map(|s| s.role).unwrap_or_default();
                    build_menu(&role)
                        .into_iter()
                        .map(|item| {
                            let active = move || pathname.get() == item.path;
                            view! {
                                <a
                                    class="sidebar__link"
                                    class=("sidebar__link--active", active)
                                    href=item.path
                                >
                                    <span class="sidebar__icon">{item.icon}</span>
                                    <span class="sidebar__label">{item.label}</span>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </nav>

            <button class="sidebar__logout" on:click=on_logout>
                "Cerrar sesión"
            </button>
        </aside>
    }
}
