mod integration_tests {
    use crate::schemas::{ErrorResponse, HealthResponse};
    use crate::test_utils::{fake_static_dir, setup_test_app};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::FormKind;

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app(&fake_static_dir("health"));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.api_base_url, "http://analytics.test:5000");
    }

    #[tokio::test]
    async fn test_dashboard_page_has_dom_contract() {
        let app = setup_test_app(&fake_static_dir("page"));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        let html = response.text();
        assert!(html.contains("data-api-base=\"http://analytics.test:5000\""));
        for kind in FormKind::ALL {
            assert!(html.contains(kind.form_id()), "missing {}", kind.form_id());
            assert!(html.contains(kind.result_id()), "missing {}", kind.result_id());
            assert!(html.contains(kind.chart_id()), "missing {}", kind.chart_id());
        }
    }

    #[tokio::test]
    async fn test_static_bundle_is_served() {
        let app = setup_test_app(&fake_static_dir("bundle"));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/static/pkg/frontend.js").await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("export default function init"));
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let app = setup_test_app(&fake_static_dir("missing"));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/predict/crop-yield").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert!(!body.success);
        assert_eq!(body.code, "NOT_FOUND");
        assert!(body.error.contains("/api/predict/crop-yield"));
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let app = setup_test_app(&fake_static_dir("openapi"));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api-docs/openapi.json").await;

        response.assert_status(StatusCode::OK);
        let doc: serde_json::Value = response.json();
        assert!(doc["paths"]["/health"].is_object());
        assert!(doc["paths"]["/"].is_object());
    }
}
