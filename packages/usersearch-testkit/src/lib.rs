mod error;

pub use error::{Error, Result};

use std::{
	env, fs,
	path::{Path, PathBuf},
};

use uuid::Uuid;

pub const VALID_TOKEN: &str = "valid_token";

/// One `<row>` of the XML dataset.
#[derive(Debug, Clone)]
pub struct TestRow {
	pub id: i64,
	pub first_name: String,
	pub last_name: String,
	pub age: i64,
	pub about: String,
	pub gender: String,
}
impl TestRow {
	pub fn new(id: i64, first_name: &str, last_name: &str, age: i64) -> Self {
		Self {
			id,
			first_name: first_name.to_string(),
			last_name: last_name.to_string(),
			age,
			about: String::new(),
			gender: String::new(),
		}
	}

	pub fn about(mut self, about: &str) -> Self {
		self.about = about.to_string();

		self
	}

	pub fn gender(mut self, gender: &str) -> Self {
		self.gender = gender.to_string();

		self
	}

	fn to_xml(&self) -> String {
		// Extra children mirror the production dataset and must be ignored by the decoder.
		format!(
			"\t<row>\n\
			 \t\t<id>{id}</id>\n\
			 \t\t<guid>{guid}</guid>\n\
			 \t\t<isActive>true</isActive>\n\
			 \t\t<age>{age}</age>\n\
			 \t\t<eyeColor>green</eyeColor>\n\
			 \t\t<first_name>{first_name}</first_name>\n\
			 \t\t<last_name>{last_name}</last_name>\n\
			 \t\t<gender>{gender}</gender>\n\
			 \t\t<company>ACME</company>\n\
			 \t\t<about>{about}</about>\n\
			 \t\t<favoriteFruit>apple</favoriteFruit>\n\
			 \t</row>\n",
			id = self.id,
			guid = Uuid::new_v4(),
			age = self.age,
			first_name = escape(&self.first_name),
			last_name = escape(&self.last_name),
			gender = escape(&self.gender),
			about = escape(&self.about),
		)
	}
}

/// Alice (30), Bob (25) and Carol (40), in that order.
pub fn sample_rows() -> Vec<TestRow> {
	vec![
		TestRow::new(0, "Alice", "", 30)
			.about("Enjoys hiking and long walks.")
			.gender("female"),
		TestRow::new(1, "Bob", "", 25).about("Builds furniture on weekends.").gender("male"),
		TestRow::new(2, "Carol", "", 40).about("Plays the cello.").gender("female"),
	]
}

pub fn dataset_xml(rows: &[TestRow]) -> String {
	let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n<root>\n");

	for row in rows {
		xml.push_str(&row.to_xml());
	}

	xml.push_str("</root>\n");

	xml
}

/// A dataset written to a unique file in the temp directory, removed on cleanup or drop.
pub struct DatasetFile {
	path: PathBuf,
	cleaned: bool,
}
impl DatasetFile {
	pub fn new(contents: &str) -> Result<Self> {
		let path = env::temp_dir().join(format!("usersearch_test_{}.xml", Uuid::new_v4().simple()));

		fs::write(&path, contents).map_err(|err| {
			Error::Message(format!("Failed to write test dataset at {path:?}: {err}."))
		})?;

		Ok(Self { path, cleaned: false })
	}

	pub fn with_rows(rows: &[TestRow]) -> Result<Self> {
		Self::new(&dataset_xml(rows))
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn cleanup(mut self) -> Result<()> {
		self.cleaned = true;

		fs::remove_file(&self.path)?;

		Ok(())
	}
}
impl Drop for DatasetFile {
	fn drop(&mut self) {
		if self.cleaned {
			return;
		}
		if let Err(err) = fs::remove_file(&self.path) {
			eprintln!("Test dataset cleanup failed: {err}.");
		}
	}
}

fn escape(raw: &str) -> String {
	raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
