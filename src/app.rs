//! Root application component: routing, navigation guards, and the
//! sidebar shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::auth::{guard, role};
use crate::components::sidebar::{Sidebar, sidebar_visible};
use crate::pages::admin::{
    AreasConocimientoPage, AuditoriaPage, CarrerasPage, DetalleRequisitosBecaPage, EstadosPage,
    EstudiantesPage, EvaluacionesPage, NotificacionesPage, PeriodosAcademicosPage, RequisitosPage,
    SolicitudesBecaPage, TiposBecaPage,
};
use crate::pages::dashboard::DashboardPage;
use crate::pages::estudiante::{BecasDisponiblesPage, MisSolicitudesPage};
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::state::session::{BrowserSession, SessionStore as _, now_secs};

const ADMIN: &[&str] = &["admin"];
const ESTUDIANTE: &[&str] = &["estudiante"];

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Guard wrapper for protected routes.
///
/// On every navigation it runs the auth gate (token present, decodable,
/// unexpired) and then the role gate against the route's declared roles;
/// a deny navigates to the gate's redirect target instead of rendering.
/// Evaluation is synchronous and re-runs per attempt — an earlier allow is
/// never reused because expiry is time-dependent.
#[component]
pub fn Guarded(
    /// Roles allowed for this view; empty means any authenticated role.
    #[prop(optional)]
    roles: &'static [&'static str],
    children: ChildrenFn,
) -> impl IntoView {
    let navigate = use_navigate();
    let pathname = use_location().pathname;
    let allowed = RwSignal::new(false);

    Effect::new(move || {
        let target = pathname.get();
        let mut store = BrowserSession;
        let mut outcome = guard::evaluate_auth(&mut store, now_secs(), &target);
        if outcome.is_allowed() {
            outcome = role::evaluate_role(roles, store.current().as_ref());
        }
        match outcome.redirect_to {
            Some(redirect) => {
                allowed.set(false);
                navigate(&redirect, NavigateOptions::default());
            }
            None => allowed.set(true),
        }
    });

    view! { <Show when=move || allowed.get()>{children()}</Show> }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/becas-client.css"/>
        <Title text="Gestión de Becas"/>

        <Router>
            <AppShell/>
        </Router>
    }
}

/// Sidebar + routed main area. The sidebar shows only for authenticated
/// sessions outside the login/register views, re-checked per navigation.
#[component]
fn AppShell() -> impl IntoView {
    let pathname = use_location().pathname;
    let show_sidebar = Memo::new(move |_| {
        sidebar_visible(&pathname.get(), BrowserSession.is_authenticated())
    });

    view! {
        <div class="app-shell">
            <Show when=move || show_sidebar.get()>
                <Sidebar/>
            </Show>
            <main
                class="app-shell__main"
                class=("app-shell__main--with-sidebar", move || show_sidebar.get())
            >
                <Routes fallback=|| "Página no encontrada.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Guarded><DashboardPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <Guarded><DashboardPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("estudiantes")
                        view=|| view! { <Guarded roles=ADMIN><EstudiantesPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("carreras")
                        view=|| view! { <Guarded roles=ADMIN><CarrerasPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("area-conocimiento")
                        view=|| view! { <Guarded roles=ADMIN><AreasConocimientoPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("requisitos")
                        view=|| view! { <Guarded roles=ADMIN><RequisitosPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("tipo-beca")
                        view=|| view! { <Guarded roles=ADMIN><TiposBecaPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("periodo-academico")
                        view=|| view! { <Guarded roles=ADMIN><PeriodosAcademicosPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("solicitud-beca")
                        view=|| view! { <Guarded roles=ADMIN><SolicitudesBecaPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("estado")
                        view=|| view! { <Guarded roles=ADMIN><EstadosPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("detalle-requisitos-beca")
                        view=|| view! { <Guarded roles=ADMIN><DetalleRequisitosBecaPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("evaluacion")
                        view=|| view! { <Guarded roles=ADMIN><EvaluacionesPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("notificacion")
                        view=|| view! { <Guarded roles=ADMIN><NotificacionesPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("auditoria")
                        view=|| view! { <Guarded roles=ADMIN><AuditoriaPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("becas-disponibles")
                        view=|| view! { <Guarded roles=ESTUDIANTE><BecasDisponiblesPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("mis-solicitudes")
                        view=|| view! { <Guarded roles=ESTUDIANTE><MisSolicitudesPage/></Guarded> }
                    />
                </Routes>
            </main>
        </div>
    }
}
