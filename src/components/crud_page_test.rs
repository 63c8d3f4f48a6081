use super::*;

const COLUMNS: &[Column] = &[
    Column { key: "nombre", label: "Nombre" },
    Column { key: "codigo", label: "Código" },
];

const FIELDS: &[Field] = &[
    Field { key: "nombre", label: "Nombre", kind: FieldKind::Text, required: true },
    Field { key: "duracion", label: "Duración", kind: FieldKind::Number, required: true },
    Field { key: "descripcion", label: "Descripción", kind: FieldKind::Text, required: false },
];

fn rows() -> Vec<Value> {
    vec![
        serde_json::json!({ "id": 1, "nombre": "Ingeniería de Sistemas", "codigo": "SIS-01" }),
        serde_json::json!({ "id": 2, "nombre": "Medicina", "codigo": "MED-01" }),
        serde_json::json!({ "id": 3, "nombre": "Derecho", "codigo": "DER-01" }),
    ]
}

#[test]
fn blank_search_returns_all_rows() {
    assert_eq!(filter_rows(&rows(), COLUMNS, "").len(), 3);
    assert_eq!(filter_rows(&rows(), COLUMNS, "   ").len(), 3);
}

#[test]
fn filter_matches_substring_case_insensitively() {
    let hits = filter_rows(&rows(), COLUMNS, "MEDI");
    assert_eq!(hits.len(), 1);
    assert_eq!(cell_text(&hits[0], "nombre"), "Medicina");

    assert_eq!(filter_rows(&rows(), COLUMNS, "sis").len(), 1);
}

#[test]
fn filter_scans_only_visible_columns() {
    let rows = vec![serde_json::json!({ "nombre": "Medicina", "oculto": "derecho" })];
    assert!(filter_rows(&rows, COLUMNS, "derecho").is_empty());
}

#[test]
fn validate_reports_the_first_missing_required_field() {
    let values = HashMap::new();
    assert_eq!(
        validate_form(FIELDS, &values),
        Err("El campo Nombre es requerido".to_owned())
    );

    let mut values = HashMap::new();
    values.insert("nombre".to_owned(), "Ingeniería".to_owned());
    values.insert("duracion".to_owned(), "   ".to_owned());
    assert_eq!(
        validate_form(FIELDS, &values),
        Err("El campo Duración es requerido".to_owned())
    );
}

#[test]
fn optional_fields_may_stay_blank() {
    let mut values = HashMap::new();
    values.insert("nombre".to_owned(), "Ingeniería".to_owned());
    values.insert("duracion".to_owned(), "10".to_owned());
    assert_eq!(validate_form(FIELDS, &values), Ok(()));
}

#[test]
fn build_payload_parses_numeric_fields() {
    let mut values = HashMap::new();
    values.insert("nombre".to_owned(), "Ingeniería".to_owned());
    values.insert("duracion".to_owned(), "10".to_owned());

    let payload = build_payload(FIELDS, &values);
    assert_eq!(payload["nombre"], serde_json::json!("Ingeniería"));
    assert_eq!(payload["duracion"], serde_json::json!(10));
}

#[test]
fn build_payload_keeps_decimals_and_skips_blanks() {
    let fields = &[Field {
        key: "monto",
        label: "Monto",
        kind: FieldKind::Number,
        required: true,
    }];
    let mut values = HashMap::new();
    values.insert("monto".to_owned(), "1500.50".to_owned());

    let payload = build_payload(fields, &values);
    assert_eq!(payload["monto"], serde_json::json!(1500.5));

    let payload = build_payload(FIELDS, &HashMap::new());
    assert_eq!(payload, serde_json::json!({}));
}

#[test]
fn row_form_values_prefills_from_the_row() {
    let row = serde_json::json!({ "nombre": "Medicina", "duracion": 12 });
    let values = row_form_values(&row, FIELDS);
    assert_eq!(values.get("nombre").map(String::as_str), Some("Medicina"));
    assert_eq!(values.get("duracion").map(String::as_str), Some("12"));
    assert_eq!(values.get("descripcion").map(String::as_str), Some(""));
}

#[test]
fn cell_text_renders_scalars_and_blanks_composites() {
    let row = serde_json::json!({ "n": 5, "s": "x", "b": true, "o": {"k": 1} });
    assert_eq!(cell_text(&row, "n"), "5");
    assert_eq!(cell_text(&row, "s"), "x");
    assert_eq!(cell_text(&row, "b"), "true");
    assert_eq!(cell_text(&row, "o"), "");
    assert_eq!(cell_text(&row, "missing"), "");
}

#[test]
fn cell_text_walks_dotted_keys_into_nested_objects() {
    let row = serde_json::json!({
        "id_detalle": 4,
        "tipoBeca": { "id": 2, "nombre": "Excelencia" },
        "requisito": { "id": 7 },
    });
    assert_eq!(cell_text(&row, "tipoBeca.id"), "2");
    assert_eq!(cell_text(&row, "tipoBeca.nombre"), "Excelencia");
    assert_eq!(cell_text(&row, "requisito.id"), "7");
    assert_eq!(cell_text(&row, "requisito.nombre"), "");
    assert_eq!(cell_text(&row, "tipoBeca"), "", "objects still render blank");
}

#[test]
fn input_type_maps_every_kind() {
    assert_eq!(input_type(FieldKind::Text), "text");
    assert_eq!(input_type(FieldKind::Number), "number");
    assert_eq!(input_type(FieldKind::Date), "date");
    assert_eq!(input_type(FieldKind::Email), "email");
    assert_eq!(input_type(FieldKind::Password), "password");
}
