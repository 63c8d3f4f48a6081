use super::*;

fn valid_form() -> RegisterRequest {
    RegisterRequest {
        nombre: "María".to_owned(),
        apellidos: "Pérez".to_owned(),
        email: "maria@uni.edu".to_owned(),
        username: "maria".to_owned(),
        password: "secreta".to_owned(),
        role: "estudiante".to_owned(),
    }
}

#[test]
fn offers_five_role_labels_with_estudiante_default() {
    assert_eq!(ROLE_OPTIONS.len(), 5);
    assert!(ROLE_OPTIONS.contains(&"estudiante"));
    assert!(ROLE_OPTIONS.contains(&"admin"));
    assert_eq!(DEFAULT_ROLE, "estudiante");
}

#[test]
fn accepts_a_complete_form() {
    assert_eq!(validate_registration(&valid_form()), Ok(()));
}

#[test]
fn apellidos_is_optional() {
    let mut form = valid_form();
    form.apellidos = String::new();
    assert_eq!(validate_registration(&form), Ok(()));
}

#[test]
fn rejects_missing_required_fields() {
    let mut form = valid_form();
    form.nombre = String::new();
    assert_eq!(validate_registration(&form), Err("El nombre es requerido"));

    let mut form = valid_form();
    form.email = "  ".to_owned();
    assert_eq!(validate_registration(&form), Err("El correo es requerido"));

    let mut form = valid_form();
    form.username = String::new();
    assert_eq!(validate_registration(&form), Err("El usuario es requerido"));

    let mut form = valid_form();
    form.password = String::new();
    assert_eq!(validate_registration(&form), Err("La contraseña es requerida"));
}

#[test]
fn rejects_unknown_roles() {
    let mut form = valid_form();
    form.role = "superusuario".to_owned();
    assert_eq!(validate_registration(&form), Err("El rol no es válido"));
}
