//! Property-based tests for the boundary boolean rule and path handling.

use std::sync::Arc;

use axum::body::Body;
use http::Request;
use proptest::prelude::*;
use tower::ServiceExt;

use catalog_config::EmptyFilterPolicy;
use catalog_store_memory::InMemoryItemRepository;
use catalog_transport_http::{build_router, coerce_flag, AppState};

proptest! {
    /// Only a case-insensitive spelling of `true` coerces to true.
    #[test]
    fn coerce_only_accepts_true(input in "\\PC{0,12}") {
        prop_assert_eq!(coerce_flag(&input), input.to_lowercase() == "true");
    }

    /// Any casing of `true` is accepted.
    #[test]
    fn coerce_accepts_any_casing(mask in prop::collection::vec(any::<bool>(), 4)) {
        let word: String = "true"
            .chars()
            .zip(mask)
            .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert!(coerce_flag(&word));
    }

    /// Arbitrary id segments never produce a server error.
    #[test]
    fn arbitrary_id_segment_never_500(segment in "[A-Za-z0-9_-]{1,24}") {
        let status = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("test: runtime")
            .block_on(async {
                let app = build_router(AppState {
                    repo: Arc::new(InMemoryItemRepository::new()),
                    empty_filter: EmptyFilterPolicy::Ok,
                });
                let req = Request::builder()
                    .uri(format!("/items/{segment}"))
                    .body(Body::empty())
                    .expect("test: req");
                app.oneshot(req).await.expect("test: resp").status()
            });
        prop_assert!(!status.is_server_error());
    }
}
