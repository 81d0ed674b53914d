use super::*;

#[test]
fn detail_href_formats_service_route() {
    assert_eq!(detail_href("cloud-labs"), "/services/cloud-labs");
}

#[test]
fn detail_href_passes_slug_through_verbatim() {
    // Slugs are validated at write time; rendering does not re-validate.
    assert_eq!(detail_href("a-1"), "/services/a-1");
}
