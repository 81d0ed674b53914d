use super::*;

fn sample_row() -> ServiceRow {
    ServiceRow {
        id: Uuid::nil(),
        slug: "cloud-sandboxes".to_owned(),
        title: "Cloud Sandboxes".to_owned(),
        description: "Disposable lab environments.".to_owned(),
        icon: "cloud".to_owned(),
        active: true,
        sort_order: 30,
    }
}

#[test]
fn into_record_maps_every_column() {
    let record = sample_row().into_record();
    assert_eq!(record.id, Uuid::nil().to_string());
    assert_eq!(record.slug, "cloud-sandboxes");
    assert_eq!(record.title, "Cloud Sandboxes");
    assert_eq!(record.description, "Disposable lab environments.");
    assert_eq!(record.icon, "cloud");
    assert!(record.active);
    assert_eq!(record.sort_order, 30);
}

#[test]
fn service_patch_default_keeps_everything() {
    let patch = ServicePatch::default();
    assert!(patch.slug.is_none());
    assert!(patch.title.is_none());
    assert!(patch.description.is_none());
    assert!(patch.icon.is_none());
    assert!(patch.active.is_none());
    assert!(patch.sort_order.is_none());
}

// Live-database coverage. Requires DATABASE_URL pointing at a disposable
// Postgres and `--features live-db-tests`.
#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    async fn live_pool() -> sqlx::PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required for live tests");
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .expect("connect");
        sqlx::migrate!("src/db/migrations").run(&pool).await.expect("migrate");
        pool
    }

    fn draft(slug: &str, sort_order: i32, active: bool) -> NewService {
        NewService {
            slug: slug.to_owned(),
            title: format!("Service {slug}"),
            description: String::new(),
            icon: "cloud".to_owned(),
            active,
            sort_order,
        }
    }

    #[tokio::test]
    async fn list_active_filters_and_orders() {
        let pool = live_pool().await;
        let a = create_service(&pool, draft("live-test-b", 200, true)).await.expect("create");
        let b = create_service(&pool, draft("live-test-a", 100, true)).await.expect("create");
        let c = create_service(&pool, draft("live-test-c", 100, false)).await.expect("create");

        let rows = list_active(&pool).await.expect("list");
        let positions: Vec<Uuid> = rows
            .iter()
            .map(|r| r.id)
            .filter(|id| [a.id, b.id, c.id].contains(id))
            .collect();
        assert_eq!(positions, vec![b.id, a.id]);

        for id in [a.id, b.id, c.id] {
            delete_service(&pool, id).await.expect("cleanup");
        }
    }

    #[tokio::test]
    async fn update_service_patches_only_supplied_fields() {
        let pool = live_pool().await;
        let row = create_service(&pool, draft("live-test-patch", 300, true)).await.expect("create");

        let patched = update_service(
            &pool,
            row.id,
            ServicePatch { active: Some(false), ..ServicePatch::default() },
        )
        .await
        .expect("patch");

        assert!(!patched.active);
        assert_eq!(patched.slug, row.slug);
        assert_eq!(patched.sort_order, row.sort_order);

        delete_service(&pool, row.id).await.expect("cleanup");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let pool = live_pool().await;
        let missing = Uuid::new_v4();
        let err = update_service(&pool, missing, ServicePatch::default())
            .await
            .expect_err("should miss");
        assert!(matches!(err, CatalogError::NotFound(id) if id == missing));
    }
}
