use std::cmp::Ordering;

use crate::{OrderField, SortDirection, User};

/// Stable, so equal keys keep their filtered order in both directions.
pub fn sort_users(users: &mut [User], field: OrderField, direction: SortDirection) {
	users.sort_by(|a, b| {
		let ordering = compare_by(a, b, field);

		match direction {
			SortDirection::Asc => ordering,
			SortDirection::Desc => ordering.reverse(),
		}
	});
}

fn compare_by(a: &User, b: &User, field: OrderField) -> Ordering {
	match field {
		OrderField::Id => a.id.cmp(&b.id),
		OrderField::Age => a.age.cmp(&b.age),
		OrderField::Name => a.name.cmp(&b.name),
	}
}
