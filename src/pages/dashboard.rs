//! Dashboard: KPI cards plus client-side aggregation of the applications
//! list into status and monthly-trend summaries.
//!
//! The summaries are derived locally from the fetched rows; the backend has
//! no aggregate endpoints. Bars are plain styled divs, no charting library.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::state::session::{BrowserSession, SessionStore as _};

pub const MONTH_LABELS: &[&str] = &[
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub pendientes: u32,
    pub aprobadas: u32,
    pub rechazadas: u32,
}

fn normalized_estado(row: &Value) -> String {
    row.get("estadoNombre")
        .or_else(|| row.get("estado"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_lowercase()
}

/// Bucket applications by their (case-normalized) estado name. Unknown
/// estados are ignored rather than guessed.
#[must_use]
pub fn status_counts(rows: &[Value]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for row in rows {
        match normalized_estado(row).as_str() {
            "pendiente" => counts.pendientes += 1,
            "aprobada" | "aprobado" => counts.aprobadas += 1,
            "rechazada" | "rechazado" => counts.rechazadas += 1,
            _ => {}
        }
    }
    counts
}

/// Applications per calendar month, bucketed from the ISO `fechaSolicitud`
/// date prefix. Malformed dates are skipped.
#[must_use]
pub fn monthly_totals(rows: &[Value]) -> [u32; 12] {
    let mut totals = [0u32; 12];
    for row in rows {
        let Some(fecha) = row.get("fechaSolicitud").and_then(Value::as_str) else {
            continue;
        };
        if let Some(month) = fecha.get(5..7).and_then(|m| m.parse::<usize>().ok()) {
            if (1..=12).contains(&month) {
                totals[month - 1] += 1;
            }
        }
    }
    totals
}

/// Collection length as a KPI figure; saturates instead of truncating.
#[must_use]
pub fn kpi_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Bar width as a percentage of the largest bucket.
#[must_use]
pub fn bar_percent(value: u32, max: u32) -> String {
    if max == 0 {
        return "0%".to_owned();
    }
    format!("{}%", value * 100 / max)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let solicitudes = RwSignal::new(Vec::<Value>::new());
    let estudiantes_total = RwSignal::new(0usize);
    let becas_total = RwSignal::new(0usize);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::crud::fetch_rows("/solicitud-beca").await {
            Ok(rows) => solicitudes.set(rows),
            Err(e) => log::warn!("dashboard solicitudes failed: {e}"),
        }
        if let Ok(rows) = crate::net::crud::fetch_rows("/estudiantes").await {
            estudiantes_total.set(rows.len());
        }
        if let Ok(rows) = crate::net::crud::fetch_rows("/tipo-beca").await {
            becas_total.set(rows.len());
        }
    });

    let counts = Memo::new(move |_| status_counts(&solicitudes.get()));
    let trend = Memo::new(move |_| monthly_totals(&solicitudes.get()));

    let greeting = move || {
        let session = BrowserSession.current();
        let username = session
            .as_ref()
            .map(|s| s.username.clone())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| "Usuario".to_owned());
        let role = session.map(|s| s.role).unwrap_or_default();
        if role.is_empty() {
            format!("Bienvenido, {username}")
        } else {
            format!("Bienvenido, {username} ({role})")
        }
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1>"Dashboard"</h1>
                <p class="dashboard__greeting">{greeting}</p>
            </header>

            <div class="dashboard__kpis">
                <KpiCard icon="👥" label="Estudiantes Registrados" value=Signal::derive(move || kpi_count(estudiantes_total.get()))/>
                <KpiCard icon="📚" label="Becas Disponibles" value=Signal::derive(move || kpi_count(becas_total.get()))/>
                <KpiCard icon="⏳" label="Solicitudes Pendientes" value=Signal::derive(move || counts.get().pendientes)/>
                <KpiCard icon="✅" label="Solicitudes Aprobadas" value=Signal::derive(move || counts.get().aprobadas)/>
            </div>

            <section class="dashboard__panel">
                <h2>"Solicitudes por estado"</h2>
                <div class="dashboard__bars">
                    {move || {
                        let c = counts.get();
                        let max = c.pendientes.max(c.aprobadas).max(c.rechazadas);
                        [
                            ("Pendientes", c.pendientes),
                            ("Aprobadas", c.aprobadas),
                            ("Rechazadas", c.rechazadas),
                        ]
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="dashboard__bar-row">
                                        <span class="dashboard__bar-label">{label}</span>
                                        <div
                                            class="dashboard__bar"
                                            style:width=bar_percent(value, max)
                                        ></div>
                                        <span class="dashboard__bar-value">{value}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>

            <section class="dashboard__panel">
                <h2>"Tendencia mensual"</h2>
                <div class="dashboard__bars">
                    {move || {
                        let totals = trend.get();
                        let max = totals.iter().copied().max().unwrap_or(0);
                        totals
                            .into_iter()
                            .enumerate()
                            .map(|(i, value)| {
                                view! {
                                    <div class="dashboard__bar-row">
                                        <span class="dashboard__bar-label">{MONTH_LABELS[i]}</span>
                                        <div
                                            class="dashboard__bar"
                                            style:width=bar_percent(value, max)
                                        ></div>
                                        <span class="dashboard__bar-value">{value}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>
        </div>
    }
}

#[component]
fn KpiCard(icon: &'static str, label: &'static str, value: Signal<u32>) -> impl IntoView {
    view! {
        <div class="kpi-card">
            <span class="kpi-card__icon">{icon}</span>
            <span class="kpi-card__value">{move || value.get()}</span>
            <span class="kpi-card__label">{label}</span>
        </div>
    }
}
