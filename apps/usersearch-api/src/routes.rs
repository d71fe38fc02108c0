use axum::{
	Json, Router,
	body::Body,
	extract::{Query, State, rejection::QueryRejection},
	http::{Request, StatusCode},
	middleware::{self, Next},
	response::{IntoResponse, Response},
	routing::get,
};

use usersearch_service::{Error, RawSearchParams, SearchResponse, access::ACCESS_TOKEN_HEADER};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	let search_routes = Router::new()
		.route("/", get(search))
		.route_layer(middleware::from_fn_with_state(state.clone(), access_token_middleware));

	Router::new().route("/health", get(health)).merge(search_routes).with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn search(
	State(state): State<AppState>,
	query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
	let Query(pairs) = query?;
	let params = RawSearchParams::from_pairs(pairs).validate()?;

	tracing::debug!(
		query = %params.query,
		order_field = params.order_field.as_str(),
		order_by = ?params.order_by,
		offset = params.offset,
		limit = params.limit,
		"Search requested."
	);

	let response = state.service.search(params).await?;

	Ok(Json(response))
}

async fn access_token_middleware(
	State(state): State<AppState>,
	req: Request<Body>,
	next: Next,
) -> Response {
	let token = req.headers().get(ACCESS_TOKEN_HEADER).and_then(|value| value.to_str().ok());

	if let Err(err) = state.service.authorize(token) {
		return ApiError::from(err).into_response();
	}

	next.run(req).await
}

/// Every failure is reported by status alone; the body is always empty.
#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
}
impl From<Error> for ApiError {
	fn from(err: Error) -> Self {
		let status = match &err {
			Error::Unauthorized => StatusCode::UNAUTHORIZED,
			Error::InvalidOrderField { .. } => StatusCode::BAD_REQUEST,
			Error::ReadDataset { .. } | Error::DecodeDataset { .. } =>
				StatusCode::INTERNAL_SERVER_ERROR,
		};

		if err.is_internal() {
			tracing::error!(error = ?err, "Search failed.");
		} else {
			tracing::warn!(error = %err, "Search rejected.");
		}

		Self { status }
	}
}

impl From<QueryRejection> for ApiError {
	fn from(err: QueryRejection) -> Self {
		tracing::warn!(error = %err, "Query string rejected.");

		Self { status: StatusCode::BAD_REQUEST }
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		self.status.into_response()
	}
}
