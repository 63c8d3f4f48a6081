use super::*;

fn paths(menu: &[&'static MenuItem]) -> Vec<&'static str> {
    menu.iter().map(|item| item.path).collect()
}

#[test]
fn dashboard_is_visible_to_both_roles() {
    assert!(paths(&build_menu("admin")).contains(&"/dashboard"));
    assert!(paths(&build_menu("estudiante")).contains(&"/dashboard"));
}

#[test]
fn admin_and_student_menus_only_share_universal_entries() {
    let admin = paths(&build_menu("admin"));
    let student = paths(&build_menu("estudiante"));

    let shared: Vec<_> = admin.iter().filter(|p| student.contains(p)).collect();
    let universal: Vec<_> = MENU
        .iter()
        .filter(|item| item.roles.is_empty())
        .map(|item| &item.path)
        .collect();
    assert_eq!(shared, universal);

    assert!(!admin.contains(&"/mis-solicitudes"));
    assert!(!student.contains(&"/estudiantes"));
}

#[test]
fn menu_preserves_declaration_order() {
    let admin = paths(&build_menu("admin"));
    let expected: Vec<_> = MENU
        .iter()
        .filter(|item| item.roles.is_empty() || item.roles.contains(&"admin"))
        .map(|item| item.path)
        .collect();
    assert_eq!(admin, expected);
}

#[test]
fn requisitos_por_beca_is_an_admin_entry() {
    assert!(paths(&build_menu("admin")).contains(&"/detalle-requisitos-beca"));
    assert!(!paths(&build_menu("estudiante")).contains(&"/detalle-requisitos-beca"));
}

#[test]
fn role_filter_is_case_insensitive() {
    assert_eq!(paths(&build_menu("ADMIN")), paths(&build_menu("admin")));
    assert_eq!(paths(&build_menu("Estudiante")), paths(&build_menu("estudiante")));
}

#[test]
fn unknown_role_sees_only_universal_entries() {
    let menu = build_menu("profesor");
    assert!(menu.iter().all(|item| item.roles.is_empty()));
    assert!(paths(&menu).contains(&"/dashboard"));
}

#[test]
fn sidebar_hidden_on_auth_routes_even_when_authenticated() {
    assert!(!sidebar_visible("/login", true));
    assert!(!sidebar_visible("/register", true));
    assert!(sidebar_visible("/dashboard", true));
}

#[test]
fn sidebar_hidden_when_unauthenticated() {
    assert!(!sidebar_visible("/dashboard", false));
}
