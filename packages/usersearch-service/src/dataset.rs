//! Decoding of the XML user dataset.
//!
//! The document is a `<root>` element holding one `<row>` per user. Each row has more children
//! than a [`User`] needs; only `id`, `first_name`, `last_name`, `age`, `about` and `gender` are
//! read. A missing child decodes to its zero value. Element text is kept verbatim, except that
//! `id` and `age` are trimmed before parsing.

use std::path::Path;

use quick_xml::{Reader, events::Event};

use crate::{Error, Result, User};

const ROOT_ELEMENT: &[u8] = b"root";
const ROW_ELEMENT: &[u8] = b"row";
/// Depth of a row child: `root` > `row` > field.
const FIELD_DEPTH: usize = 3;

#[derive(Debug, Default)]
struct DatasetRow {
	id: i64,
	first_name: String,
	last_name: String,
	age: i64,
	about: String,
	gender: String,
}
impl DatasetRow {
	fn assign(&mut self, field: &[u8], text: &str) -> Result<()> {
		match field {
			b"id" => self.id = parse_integer("id", text)?,
			b"first_name" => self.first_name = text.to_string(),
			b"last_name" => self.last_name = text.to_string(),
			b"age" => self.age = parse_integer("age", text)?,
			b"about" => self.about = text.to_string(),
			b"gender" => self.gender = text.to_string(),
			_ => {},
		}

		Ok(())
	}
}
impl From<DatasetRow> for User {
	fn from(row: DatasetRow) -> Self {
		Self {
			id: row.id,
			name: display_name(&row.first_name, &row.last_name),
			age: row.age,
			about: row.about,
			gender: row.gender,
		}
	}
}

pub async fn load(path: &Path) -> Result<Vec<User>> {
	let raw = tokio::fs::read(path)
		.await
		.map_err(|err| Error::ReadDataset { path: path.to_path_buf(), source: err })?;

	decode(&raw)
}

pub fn decode(raw: &[u8]) -> Result<Vec<User>> {
	let mut reader = Reader::from_reader(raw);
	let mut buf = Vec::new();
	let mut open: Vec<Vec<u8>> = Vec::new();
	let mut text = String::new();
	let mut row: Option<DatasetRow> = None;
	let mut users = Vec::new();
	let mut saw_root = false;

	loop {
		match reader.read_event_into(&mut buf).map_err(decode_error)? {
			Event::Start(start) => {
				let name = start.name().into_inner().to_vec();

				if open.is_empty() {
					check_root(&name, saw_root)?;

					saw_root = true;
				} else if open.len() == 1 && name == ROW_ELEMENT {
					row = Some(DatasetRow::default());
				}

				open.push(name);
				text.clear();
			},
			Event::Empty(start) => {
				let name = start.name().into_inner();

				if open.is_empty() {
					check_root(name, saw_root)?;

					saw_root = true;
				} else if open.len() == 1 && name == ROW_ELEMENT {
					users.push(DatasetRow::default().into());
				} else if open.len() + 1 == FIELD_DEPTH
					&& let Some(row) = row.as_mut()
				{
					row.assign(name, "")?;
				}

				text.clear();
			},
			Event::Text(chunk) => text.push_str(&chunk.unescape().map_err(decode_error)?),
			Event::CData(chunk) =>
				text.push_str(std::str::from_utf8(&chunk).map_err(decode_error)?),
			Event::End(_) => {
				let depth = open.len();
				let name = open.pop().unwrap_or_default();

				if depth == FIELD_DEPTH
					&& let Some(row) = row.as_mut()
				{
					row.assign(&name, &text)?;
				} else if depth == 2
					&& name == ROW_ELEMENT
					&& let Some(done) = row.take()
				{
					users.push(done.into());
				}

				text.clear();
			},
			Event::Eof => break,
			_ => {},
		}

		buf.clear();
	}

	if !saw_root || !open.is_empty() {
		return Err(Error::DecodeDataset {
			message: "Dataset ended before the root element was closed.".to_string(),
		});
	}

	Ok(users)
}

/// Joins both name parts with one space and trims the ends only.
pub fn display_name(first_name: &str, last_name: &str) -> String {
	format!("{first_name} {last_name}").trim().to_string()
}

fn check_root(name: &[u8], saw_root: bool) -> Result<()> {
	if saw_root {
		return Err(Error::DecodeDataset {
			message: "Dataset must have a single root element.".to_string(),
		});
	}
	if name != ROOT_ELEMENT {
		return Err(Error::DecodeDataset {
			message: format!(
				"Expected root element <root>, found <{}>.",
				String::from_utf8_lossy(name)
			),
		});
	}

	Ok(())
}

fn parse_integer(field: &str, text: &str) -> Result<i64> {
	let trimmed = text.trim();

	if trimmed.is_empty() {
		return Ok(0);
	}

	trimmed.parse().map_err(|_| Error::DecodeDataset {
		message: format!("{field} must be an integer, found {trimmed:?}."),
	})
}

fn decode_error(err: impl std::fmt::Display) -> Error {
	Error::DecodeDataset { message: err.to_string() }
}
