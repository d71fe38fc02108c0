use std::sync::Arc;

use usersearch_service::SearchService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<SearchService>,
}
impl AppState {
	pub fn new(config: usersearch_config::Config) -> Self {
		Self { service: Arc::new(SearchService::new(config)) }
	}
}
