use crate::{Error, Result};

pub const ORDER_BY_ASC: i64 = 1;
pub const ORDER_BY_AS_IS: i64 = 0;
pub const ORDER_BY_DESC: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
	Id,
	Age,
	Name,
}
impl OrderField {
	/// Field names are matched exactly. An empty value selects `Name`.
	pub fn parse(raw: &str) -> Result<Self> {
		match raw {
			"Id" => Ok(Self::Id),
			"Age" => Ok(Self::Age),
			"Name" | "" => Ok(Self::Name),
			other => Err(Error::InvalidOrderField { value: other.to_string() }),
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Id => "Id",
			Self::Age => "Age",
			Self::Name => "Name",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
	Asc,
	Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBy {
	Asc,
	Desc,
	AsIs,
}
impl OrderBy {
	/// `1` sorts ascending and `-1` descending. Every other input, including an absent or
	/// non-numeric value, keeps the filtered order.
	pub fn parse(raw: Option<&str>) -> Self {
		match raw.and_then(|value| value.parse::<i64>().ok()) {
			Some(ORDER_BY_ASC) => Self::Asc,
			Some(ORDER_BY_DESC) => Self::Desc,
			_ => Self::AsIs,
		}
	}

	pub fn direction(self) -> Option<SortDirection> {
		match self {
			Self::Asc => Some(SortDirection::Asc),
			Self::Desc => Some(SortDirection::Desc),
			Self::AsIs => None,
		}
	}
}

/// Query string parameters exactly as received.
#[derive(Debug, Clone, Default)]
pub struct RawSearchParams {
	pub query: Option<String>,
	pub order_field: Option<String>,
	pub order_by: Option<String>,
	pub offset: Option<String>,
	pub limit: Option<String>,
}
impl RawSearchParams {
	/// Builds from decoded query pairs. When a key repeats, its first value wins; unknown keys
	/// are ignored.
	pub fn from_pairs<I>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (String, String)>,
	{
		let mut raw = Self::default();

		for (key, value) in pairs {
			let slot = match key.as_str() {
				"query" => &mut raw.query,
				"order_field" => &mut raw.order_field,
				"order_by" => &mut raw.order_by,
				"offset" => &mut raw.offset,
				"limit" => &mut raw.limit,
				_ => continue,
			};

			if slot.is_none() {
				*slot = Some(value);
			}
		}

		raw
	}

	pub fn validate(self) -> Result<SearchParams> {
		let order_field = OrderField::parse(self.order_field.as_deref().unwrap_or_default())?;

		Ok(SearchParams {
			query: self.query.unwrap_or_default(),
			order_field,
			order_by: OrderBy::parse(self.order_by.as_deref()),
			offset: parse_window_value(self.offset.as_deref()),
			limit: parse_window_value(self.limit.as_deref()),
		})
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
	pub query: String,
	pub order_field: OrderField,
	pub order_by: OrderBy,
	pub offset: usize,
	pub limit: usize,
}
impl Default for SearchParams {
	fn default() -> Self {
		Self {
			query: String::new(),
			order_field: OrderField::Name,
			order_by: OrderBy::AsIs,
			offset: 0,
			limit: 0,
		}
	}
}

/// Offsets and limits that are absent, negative or not numbers count as zero.
pub fn parse_window_value(raw: Option<&str>) -> usize {
	raw.and_then(|value| value.parse::<usize>().ok()).unwrap_or(0)
}
