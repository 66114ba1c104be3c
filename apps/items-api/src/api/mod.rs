use axum::Router;

pub mod health;
pub mod items;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/v1/items", items::router(state))
}

/// Router with the `/ready` endpoint, checked against the live database.
///
/// State is applied here so it can be merged into the stateless app router
/// from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::server::{create_router, health_router};
    use core_config::{app_info, cors::CorsConfig, server::ServerConfig};
    use database::postgres::PostgresConfig;
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn state(db: DatabaseConnection) -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                database: PostgresConfig::new("postgresql://localhost/items"),
                server: ServerConfig::default(),
                cors: CorsConfig::permissive(),
                environment: Environment::Development,
                run_migrations: false,
            },
            db,
        }
    }

    async fn app(db: DatabaseConnection) -> Router {
        let state = state(db);
        create_router::<crate::openapi::ApiDoc>(routes(&state), &state.config.cors)
            .await
            .unwrap()
            .merge(health_router(state.config.app.clone()))
            .merge(ready_router(state))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_items_mounted_under_api_v1() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<domain_items::entity::Model>::new()])
            .into_connection();

        let (status, body) = get(app(db).await, "/api/v1/items").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_bad_id_rejected_before_database() {
        // No mocked results: any query would fail with 500
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let (status, body) = get(app(db).await, "/api/v1/items/not-a-uuid").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "The provided ID is not a valid UUID.");
    }

    #[tokio::test]
    async fn test_database_failure_is_generic_500() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("relation \"items\" does not exist".to_string())])
            .into_connection();

        let (status, body) = get(app(db).await, "/api/v1/items").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "An internal server error occurred");
    }

    #[tokio::test]
    async fn test_health_reports_app_info() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let (status, body) = get(app(db).await, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "items_api");
    }

    #[tokio::test]
    async fn test_ready_reports_database_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let (status, body) = get(app(db).await, "/ready").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["database"], "disconnected");
    }
}
