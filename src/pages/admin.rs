//! Admin entity screens, one static [`CrudSpec`] per entity.
//!
//! Field sets follow the backend's wire shapes (camelCase foreign keys like
//! `estadoId`). Auditoría is read-only: the log is written server-side.

use leptos::prelude::*;

use crate::components::crud_page::{Column, CrudPage, CrudSpec, Field, FieldKind};

static ESTUDIANTES: CrudSpec = CrudSpec {
    title: "Estudiantes",
    base_path: "/estudiantes",
    columns: &[
        Column { key: "nombre", label: "Nombre" },
        Column { key: "apellidos", label: "Apellidos" },
        Column { key: "email", label: "Email" },
        Column { key: "username", label: "Usuario" },
        Column { key: "role", label: "Rol" },
    ],
    fields: &[
        Field { key: "nombre", label: "Nombre", kind: FieldKind::Text, required: true },
        Field { key: "apellidos", label: "Apellidos", kind: FieldKind::Text, required: false },
        Field { key: "email", label: "Email", kind: FieldKind::Email, required: true },
        Field { key: "username", label: "Usuario", kind: FieldKind::Text, required: true },
        Field { key: "password", label: "Contraseña", kind: FieldKind::Password, required: true },
        Field { key: "estadoId", label: "Estado", kind: FieldKind::Number, required: false },
        Field { key: "carreraId", label: "Carrera", kind: FieldKind::Number, required: false },
    ],
};

static CARRERAS: CrudSpec = CrudSpec {
    title: "Carreras",
    base_path: "/carreras",
    columns: &[
        Column { key: "nombre", label: "Nombre" },
        Column { key: "codigo", label: "Código" },
        Column { key: "duracion", label: "Duración (semestres)" },
        Column { key: "areaConocimientoNombre", label: "Área" },
    ],
    fields: &[
        Field { key: "nombre", label: "Nombre", kind: FieldKind::Text, required: true },
        Field { key: "codigo", label: "Código", kind: FieldKind::Text, required: true },
        Field { key: "duracion", label: "Duración", kind: FieldKind::Number, required: true },
        Field { key: "areaConocimientoId", label: "Área de Conocimiento", kind: FieldKind::Number, required: true },
    ],
};

static AREAS: CrudSpec = CrudSpec {
    title: "Áreas de Conocimiento",
    base_path: "/area-conocimiento",
    columns: &[
        Column { key: "nombre", label: "Nombre" },
        Column { key: "descripcion", label: "Descripción" },
    ],
    fields: &[
        Field { key: "nombre", label: "Nombre", kind: FieldKind::Text, required: true },
        Field { key: "descripcion", label: "Descripción", kind: FieldKind::Text, required: false },
    ],
};

static REQUISITOS: CrudSpec = CrudSpec {
    title: "Requisitos",
    base_path: "/requisitos",
    columns: &[
        Column { key: "descripcion", label: "Descripción" },
        Column { key: "estadoId", label: "Estado" },
    ],
    fields: &[
        Field { key: "descripcion", label: "Descripción", kind: FieldKind::Text, required: true },
        Field { key: "estadoId", label: "Estado", kind: FieldKind::Number, required: true },
    ],
};

static TIPOS_BECA: CrudSpec = CrudSpec {
    title: "Tipos de Beca",
    base_path: "/tipo-beca",
    columns: &[
        Column { key: "nombre", label: "Nombre" },
        Column { key: "descripcion", label: "Descripción" },
        Column { key: "monto", label: "Monto" },
    ],
    fields: &[
        Field { key: "nombre", label: "Nombre", kind: FieldKind::Text, required: true },
        Field { key: "descripcion", label: "Descripción", kind: FieldKind::Text, required: true },
        Field { key: "monto", label: "Monto", kind: FieldKind::Number, required: true },
        Field { key: "estadoId", label: "Estado", kind: FieldKind::Number, required: true },
    ],
};

static PERIODOS: CrudSpec = CrudSpec {
    title: "Periodos Académicos",
    base_path: "/periodo-academico",
    columns: &[
        Column { key: "nombre", label: "Nombre" },
        Column { key: "anioAcademico", label: "Año Académico" },
        Column { key: "fechaInicio", label: "Inicio" },
        Column { key: "fechaFin", label: "Fin" },
    ],
    fields: &[
        Field { key: "nombre", label: "Nombre", kind: FieldKind::Text, required: true },
        Field { key: "anioAcademico", label: "Año Académico", kind: FieldKind::Text, required: true },
        Field { key: "fechaInicio", label: "Fecha de Inicio", kind: FieldKind::Date, required: true },
        Field { key: "fechaFin", label: "Fecha de Fin", kind: FieldKind::Date, required: true },
        Field { key: "estadoId", label: "Estado", kind: FieldKind::Number, required: true },
    ],
};

static SOLICITUDES: CrudSpec = CrudSpec {
    title: "Solicitudes de Beca",
    base_path: "/solicitud-beca",
    columns: &[
        Column { key: "estudianteNombre", label: "Estudiante" },
        Column { key: "tipoBecaNombre", label: "Tipo de Beca" },
        Column { key: "fechaSolicitud", label: "Fecha" },
        Column { key: "estadoNombre", label: "Estado" },
    ],
    fields: &[
        Field { key: "estudianteId", label: "Estudiante", kind: FieldKind::Number, required: true },
        Field { key: "tipoBecaId", label: "Tipo de Beca", kind: FieldKind::Number, required: true },
        Field { key: "periodoAcademicoId", label: "Periodo Académico", kind: FieldKind::Number, required: true },
        Field { key: "fechaSolicitud", label: "Fecha de Solicitud", kind: FieldKind::Date, required: true },
        Field { key: "estadoId", label: "Estado", kind: FieldKind::Number, required: true },
    ],
};

// Join table between tipos de beca and requisitos. The backend keys rows on
// `id_detalle` and nests the referenced entities; the form sends the two
// foreign keys.
static DETALLE_REQUISITOS: CrudSpec = CrudSpec {
    title: "Requisitos por Beca",
    base_path: "/detalle-requisitos-beca",
    columns: &[
        Column { key: "id_detalle", label: "Detalle" },
        Column { key: "tipoBeca.id", label: "Tipo de Beca" },
        Column { key: "requisito.id", label: "Requisito" },
    ],
    fields: &[
        Field { key: "tipoBecaId", label: "Tipo de Beca", kind: FieldKind::Number, required: true },
        Field { key: "requisitoId", label: "Requisito", kind: FieldKind::Number, required: true },
    ],
};

static ESTADOS: CrudSpec = CrudSpec {
    title: "Estados",
    base_path: "/estado",
    columns: &[
        Column { key: "nombre", label: "Nombre" },
        Column { key: "descripcion", label: "Descripción" },
    ],
    fields: &[
        Field { key: "nombre", label: "Nombre", kind: FieldKind::Text, required: true },
        Field { key: "descripcion", label: "Descripción", kind: FieldKind::Text, required: false },
    ],
};

static EVALUACIONES: CrudSpec = CrudSpec {
    title: "Evaluaciones",
    base_path: "/evaluacion",
    columns: &[
        Column { key: "solicitudBecaId", label: "Solicitud" },
        Column { key: "puntaje", label: "Puntaje" },
        Column { key: "observaciones", label: "Observaciones" },
    ],
    fields: &[
        Field { key: "solicitudBecaId", label: "Solicitud", kind: FieldKind::Number, required: true },
        Field { key: "puntaje", label: "Puntaje", kind: FieldKind::Number, required: true },
        Field { key: "observaciones", label: "Observaciones", kind: FieldKind::Text, required: false },
    ],
};

static NOTIFICACIONES: CrudSpec = CrudSpec {
    title: "Notificaciones",
    base_path: "/notificacion",
    columns: &[
        Column { key: "estudianteNombre", label: "Estudiante" },
        Column { key: "mensaje", label: "Mensaje" },
        Column { key: "fechaEnvio", label: "Enviada" },
    ],
    fields: &[
        Field { key: "estudianteId", label: "Estudiante", kind: FieldKind::Number, required: true },
        Field { key: "mensaje", label: "Mensaje", kind: FieldKind::Text, required: true },
        Field { key: "fechaEnvio", label: "Fecha de Envío", kind: FieldKind::Date, required: false },
    ],
};

static AUDITORIA: CrudSpec = CrudSpec {
    title: "Auditoría",
    base_path: "/auditoria",
    columns: &[
        Column { key: "usuario", label: "Usuario" },
        Column { key: "accion", label: "Acción" },
        Column { key: "entidad", label: "Entidad" },
        Column { key: "fecha", label: "Fecha" },
    ],
    fields: &[],
};

#[component]
pub fn EstudiantesPage() -> impl IntoView {
    view! { <CrudPage spec=&ESTUDIANTES/> }
}

#[component]
pub fn CarrerasPage() -> impl IntoView {
    view! { <CrudPage spec=&CARRERAS/> }
}

#[component]
pub fn AreasConocimientoPage() -> impl IntoView {
    view! { <CrudPage spec=&AREAS/> }
}

#[component]
pub fn RequisitosPage() -> impl IntoView {
    view! { <CrudPage spec=&REQUISITOS/> }
}

#[component]
pub fn TiposBecaPage() -> impl IntoView {
    view! { <CrudPage spec=&TIPOS_BECA/> }
}

#[component]
pub fn PeriodosAcademicosPage() -> impl IntoView {
    view! { <CrudPage spec=&PERIODOS/> }
}

#[component]
pub fn SolicitudesBecaPage() -> impl IntoView {
    view! { <CrudPage spec=&SOLICITUDES/> }
}

#[component]
pub fn DetalleRequisitosBecaPage() -> impl IntoView {
    view! { <CrudPage spec=&DETALLE_REQUISITOS/> }
}

#[component]
pub fn EstadosPage() -> impl IntoView {
    view! { <CrudPage spec=&ESTADOS/> }
}

#[component]
pub fn EvaluacionesPage() -> impl IntoView {
    view! { <CrudPage spec=&EVALUACIONES/> }
}

#[component]
pub fn NotificacionesPage() -> impl IntoView {
    view! { <CrudPage spec=&NOTIFICACIONES/> }
}

#[component]
pub fn AuditoriaPage() -> impl IntoView {
    view! { <CrudPage spec=&AUDITORIA/> }
}
