// tests/app_logic_tests.rs - Routing, configuration and session wiring
//
// The App component itself needs a browser router, so these tests cover
// the values it is built from: configured paths, the session flag derived
// from configuration, and the texts the pages show.

use catalog_admin::web_app::components::EMPTY_MESSAGE;
use catalog_admin::web_app::config::{
    AdminConfig, ADMIN_PANEL_PATH, API_BASE_URL_VAR, ASSUME_LOGGED_IN_VAR, PRODUCTS_PATH,
    ROOT_PATH,
};
use catalog_admin::web_app::pages::products::PAGE_TITLE;
use catalog_admin::web_app::session::{MountAction, SessionState};

fn config_with(vars: &'static [(&'static str, &'static str)]) -> AdminConfig {
    AdminConfig::from_lookup(|key| {
        vars.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.to_string())
    })
}

#[test]
fn test_route_paths() {
    assert_eq!(ROOT_PATH, "/");
    assert_eq!(ADMIN_PANEL_PATH, "/admin-panel");
    assert_eq!(PRODUCTS_PATH, "/admin-panel/products");
    assert!(PRODUCTS_PATH.starts_with(ADMIN_PANEL_PATH));
}

#[test]
fn test_default_config_uses_route_paths() {
    let config = AdminConfig::default();

    assert_eq!(config.root_path, ROOT_PATH);
    assert_eq!(config.admin_panel_path, ADMIN_PANEL_PATH);
    assert_eq!(config.products_path, PRODUCTS_PATH);
    assert!(!config.assume_logged_in);
}

#[test]
fn test_default_session_redirects_to_root() {
    let config = config_with(&[]);
    let session = SessionState::new(config.assume_logged_in);

    assert_eq!(
        session.mount_action(&config.root_path),
        MountAction::Redirect("/".to_string())
    );
}

#[test]
fn test_assume_logged_in_loads() {
    let config = config_with(&[(ASSUME_LOGGED_IN_VAR, "true")]);
    let session = SessionState::new(config.assume_logged_in);

    assert_eq!(session.mount_action(&config.root_path), MountAction::Load);
}

#[test]
fn test_api_base_url_override() {
    let config = config_with(&[(API_BASE_URL_VAR, "https://shop.example/api/products")]);

    assert_eq!(config.api_base_url, "https://shop.example/api/products");
    assert_eq!(config.products_path, PRODUCTS_PATH);
}

#[test]
fn test_page_texts() {
    assert_eq!(PAGE_TITLE, "Product Manager");
    assert_eq!(EMPTY_MESSAGE, "No products available.");
}

#[test]
fn test_stylesheet_matches_output_name() {
    let stylesheet_path = format!("/pkg/{}.css", env!("CARGO_PKG_NAME"));
    assert_eq!(stylesheet_path, "/pkg/catalog_admin.css");
}
