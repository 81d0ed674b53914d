use super::*;

#[test]
fn services_endpoint_is_the_read_route() {
    assert_eq!(SERVICES_ENDPOINT, "/api/services");
}

#[test]
fn fetch_failed_message_formats_status() {
    assert_eq!(fetch_failed_message(500), "service list request failed: 500");
    assert_eq!(fetch_failed_message(404), "service list request failed: 404");
}

#[test]
fn service_rows_decode_from_api_json() {
    let body = r#"[
        {"id":"7f9","slug":"cloud-sandboxes","title":"Cloud Sandboxes",
         "description":"Disposable labs.","icon":"cloud","active":true,"sort_order":30}
    ]"#;
    let rows: Vec<ServiceRecord> = serde_json::from_str(body).expect("decode");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].slug, "cloud-sandboxes");
    assert_eq!(rows[0].sort_order, 30);
}
