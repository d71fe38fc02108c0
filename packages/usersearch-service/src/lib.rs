pub mod access;
pub mod dataset;
pub mod filter;
pub mod paginate;
pub mod query;
pub mod sort;

mod error;

pub use error::{Error, Result};
pub use paginate::Page;
pub use query::{OrderBy, OrderField, RawSearchParams, SearchParams, SortDirection};

use serde::Serialize;

use usersearch_config::Config;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
	#[serde(rename = "ID")]
	pub id: i64,
	/// First and last name joined by a space, with the ends trimmed.
	pub name: String,
	pub age: i64,
	pub about: String,
	pub gender: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResponse {
	pub users: Vec<User>,
	pub next_page: bool,
}
impl From<Page> for SearchResponse {
	fn from(page: Page) -> Self {
		Self { users: page.users, next_page: page.next_page }
	}
}

pub struct SearchService {
	pub cfg: Config,
}
impl SearchService {
	pub fn new(cfg: Config) -> Self {
		Self { cfg }
	}

	pub fn authorize(&self, presented: Option<&str>) -> Result<()> {
		if access::is_authorized(&self.cfg.security.access_token, presented) {
			Ok(())
		} else {
			Err(Error::Unauthorized)
		}
	}

	/// Loads the dataset from disk, then filters, sorts and paginates it.
	///
	/// The dataset is read on every call; nothing is retained between requests.
	pub async fn search(&self, params: SearchParams) -> Result<SearchResponse> {
		let users = dataset::load(&self.cfg.dataset.path).await?;
		let total = users.len();
		let mut matched = filter::filter_users(users, &params.query);

		if let Some(direction) = params.order_by.direction() {
			sort::sort_users(&mut matched, params.order_field, direction);
		}

		let matched_count = matched.len();
		let page = paginate::paginate(matched, params.offset, params.limit);

		tracing::debug!(
			total,
			matched = matched_count,
			returned = page.users.len(),
			next_page = page.next_page,
			"Search completed."
		);

		Ok(page.into())
	}
}
