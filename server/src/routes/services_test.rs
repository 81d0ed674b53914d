use super::*;

#[test]
fn catalog_error_to_status_maps_not_found() {
    let err = CatalogError::NotFound(Uuid::nil());
    assert_eq!(catalog_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn catalog_error_to_status_maps_invalid_slug() {
    let err = CatalogError::InvalidSlug(records::SlugError::Empty);
    assert_eq!(catalog_error_to_status(&err), StatusCode::BAD_REQUEST);
}

#[test]
fn create_body_defaults_fill_optional_fields() {
    let body: CreateServiceBody =
        serde_json::from_str(r#"{"slug":"cloud-labs","title":"Cloud Labs"}"#).expect("parse");
    let draft = body.into_draft();
    assert_eq!(draft.slug, "cloud-labs");
    assert_eq!(draft.title, "Cloud Labs");
    assert_eq!(draft.description, "");
    assert_eq!(draft.icon, "spark");
    assert!(draft.active);
    assert_eq!(draft.sort_order, 0);
}

#[test]
fn update_body_maps_only_supplied_fields() {
    let body: UpdateServiceBody =
        serde_json::from_str(r#"{"active":false,"sort_order":7}"#).expect("parse");
    let patch = body.into_patch();
    assert_eq!(patch.active, Some(false));
    assert_eq!(patch.sort_order, Some(7));
    assert!(patch.slug.is_none());
    assert!(patch.title.is_none());
    assert!(patch.description.is_none());
    assert!(patch.icon.is_none());
}
