//! Student screens: read-only lists over the same generic CRUD component.

use leptos::prelude::*;

use crate::components::crud_page::{Column, CrudPage, CrudSpec};

static BECAS_DISPONIBLES: CrudSpec = CrudSpec {
    title: "Becas Disponibles",
    base_path: "/tipo-beca",
    columns: &[
        Column { key: "nombre", label: "Beca" },
        Column { key: "descripcion", label: "Descripción" },
        Column { key: "monto", label: "Monto" },
    ],
    fields: &[],
};

static MIS_SOLICITUDES: CrudSpec = CrudSpec {
    title: "Mis Solicitudes",
    base_path: "/solicitud-beca/mis-solicitudes",
    columns: &[
        Column { key: "tipoBecaNombre", label: "Beca" },
        Column { key: "fechaSolicitud", label: "Fecha" },
        Column { key: "estadoNombre", label: "Estado" },
    ],
    fields: &[],
};

#[component]
pub fn BecasDisponiblesPage() -> impl IntoView {
    view! { <CrudPage spec=&BECAS_DISPONIBLES/> }
}

#[component]
pub fn MisSolicitudesPage() -> impl IntoView {
    view! { <CrudPage spec=&MIS_SOLICITUDES/> }
}
