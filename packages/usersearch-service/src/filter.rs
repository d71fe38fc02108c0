use crate::User;

pub fn filter_users(users: Vec<User>, query: &str) -> Vec<User> {
	if query.is_empty() {
		return users;
	}

	let needle = query.to_lowercase();

	users.into_iter().filter(|user| matches_query(user, &needle)).collect()
}

/// `needle` must already be lowercase.
pub fn matches_query(user: &User, needle: &str) -> bool {
	[&user.name, &user.about, &user.gender]
		.into_iter()
		.any(|field| field.to_lowercase().contains(needle))
}
