//! Resource routes: every supported path shape flows into one endpoint that
//! resolves the request against the application's route table. The body is
//! only read once a route has matched.

use axum::{
    extract::{FromRequest, Request, State},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::app::unmatched;
use crate::extractors::RequestParams;
use crate::routes::common::{not_found, welcome};
use crate::routes::RouteMatch;
use crate::state::AppState;

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/", any(entry))
        .route("/:resource", any(entry))
        .route("/:resource/:id", any(entry))
        .route("/:resource/:id/:sub", any(entry))
        .fallback(not_found)
        .with_state(state)
}

async fn entry(State(state): State<AppState>, req: Request) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let span = tracing::info_span!(
        "dispatch",
        request_id = %Uuid::new_v4(),
        method = %method,
        path = %path,
    );
    async move {
        let response = match state.app.resolve(&method, &path) {
            Some(RouteMatch::Resource(route)) => match RequestParams::from_request(req, &()).await {
                Ok(RequestParams(params)) => state.app.run(method, &path, route, params).await.into_response(),
                Err(rejection) => rejection,
            },
            Some(RouteMatch::Root) => welcome().into_response(),
            None => unmatched(&method, &path).into_response(),
        };
        tracing::info!(status = response.status().as_u16(), "request finished");
        response
    }
    .instrument(span)
    .await
}
