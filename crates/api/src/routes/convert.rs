//! Form page and conversion endpoint.

use axum::{
    Form, Router,
    extract::State,
    response::Html,
    routing::get,
};
use serde::Deserialize;
use tracing::info;

use cambio_core::conversion::ConversionRequest;

use crate::{AppState, pages};

/// Raw form fields as submitted. Validation happens in the core crate.
#[derive(Debug, Deserialize)]
pub struct ConvertForm {
    /// Amount field, free text.
    #[serde(default)]
    pub amount: String,
    /// Currency field, free text.
    #[serde(default)]
    pub currency: String,
}

/// GET `/` - Render the form page.
async fn show_form() -> Html<String> {
    Html(pages::render(None, None))
}

/// POST `/` - Validate, convert, and re-render the page.
///
/// Every outcome is HTTP 200: validation errors come back as an inline
/// message and remote-rate failures are absorbed by the resolver's fallback.
async fn handle_convert(
    State(state): State<AppState>,
    Form(form): Form<ConvertForm>,
) -> Html<String> {
    match ConversionRequest::parse(&form.amount, &form.currency) {
        Ok(request) => {
            let result = state.rates.convert(&request).await;
            info!(
                amount = %result.amount,
                currency = %result.to,
                converted = %result.converted,
                "conversion served"
            );
            Html(pages::render(Some(&result.to_string()), None))
        }
        Err(e) => Html(pages::render(None, Some(&e.to_string()))),
    }
}

/// Creates the form routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(show_form).post(handle_convert))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use tower::ServiceExt;

    use cambio_core::currency::{Currency, RateError, RateProvider, RateResolver};

    use crate::{AppState, create_router};

    struct FixedProvider(Decimal);

    #[async_trait]
    impl RateProvider for FixedProvider {
        async fn fetch_rate(&self, _from: &str, _to: Currency) -> Result<Decimal, RateError> {
            Ok(self.0)
        }
    }

    struct UnreachableProvider;

    #[async_trait]
    impl RateProvider for UnreachableProvider {
        async fn fetch_rate(&self, _from: &str, _to: Currency) -> Result<Decimal, RateError> {
            Err(RateError::Request("connection refused".into()))
        }
    }

    /// Provider that must never be called; used to prove validation
    /// failures make no outbound request.
    struct PanicProvider;

    #[async_trait]
    impl RateProvider for PanicProvider {
        async fn fetch_rate(&self, _from: &str, _to: Currency) -> Result<Decimal, RateError> {
            panic!("validation failure must not reach the provider");
        }
    }

    fn app(provider: Arc<dyn RateProvider>) -> axum::Router {
        create_router(AppState {
            rates: Arc::new(RateResolver::new(provider)),
        })
    }

    async fn post_form(app: axum::Router, body: &'static str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(
                        header::CONTENT_TYPE,
                        "application/x-www-form-urlencoded",
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_get_renders_form() {
        let response = app(Arc::new(PanicProvider))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("Currency Converter"));
        assert!(body.contains("name=\"currency\""));
    }

    #[tokio::test]
    async fn test_convert_with_remote_rate() {
        let (status, body) =
            post_form(app(Arc::new(FixedProvider(dec!(0.92)))), "amount=100&currency=EUR").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("100.0 USD = 92.00 EUR"));
    }

    #[tokio::test]
    async fn test_convert_remote_down_uses_fallback() {
        let (status, body) =
            post_form(app(Arc::new(UnreachableProvider)), "amount=100&currency=EUR").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("100.0 USD = 85.00 EUR"));
    }

    #[tokio::test]
    async fn test_invalid_amount_message() {
        let (status, body) =
            post_form(app(Arc::new(PanicProvider)), "amount=abc&currency=EUR").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Please enter a valid amount"));
    }

    #[tokio::test]
    async fn test_empty_fields_message() {
        let (status, body) = post_form(app(Arc::new(PanicProvider)), "amount=&currency=").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Please fill in all fields"));
    }

    #[tokio::test]
    async fn test_out_of_range_makes_no_network_call() {
        let (_, body) =
            post_form(app(Arc::new(PanicProvider)), "amount=1000001&currency=EUR").await;
        assert!(body.contains("Amount too large"));

        let (_, body) = post_form(app(Arc::new(PanicProvider)), "amount=-5&currency=EUR").await;
        assert!(body.contains("Amount must be positive"));
    }

    #[tokio::test]
    async fn test_unknown_currency_makes_no_network_call() {
        let (_, body) = post_form(app(Arc::new(PanicProvider)), "amount=100&currency=JPY").await;
        assert!(body.contains("Invalid currency selected"));
    }
}
