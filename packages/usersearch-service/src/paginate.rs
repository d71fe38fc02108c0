use crate::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
	pub users: Vec<User>,
	/// More matches exist past the end of this page.
	pub next_page: bool,
}

pub fn paginate(mut users: Vec<User>, offset: usize, limit: usize) -> Page {
	let total = users.len();
	let start = offset.min(total);
	let end = start.saturating_add(limit).min(total);

	users.truncate(end);

	let page = users.split_off(start);

	Page { users: page, next_page: end < total }
}
