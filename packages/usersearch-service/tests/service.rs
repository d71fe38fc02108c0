use std::path::PathBuf;

use usersearch_config::{Config, Dataset, Security, Service};
use usersearch_service::{Error, RawSearchParams, SearchService};
use usersearch_testkit::{DatasetFile, TestRow, VALID_TOKEN, sample_rows};

fn test_config(path: PathBuf) -> Config {
	Config {
		service: Service { http_bind: "127.0.0.1:0".to_string(), log_level: "info".to_string() },
		dataset: Dataset { path },
		security: Security { bind_localhost_only: true, access_token: VALID_TOKEN.to_string() },
	}
}

fn params(pairs: &[(&str, &str)]) -> RawSearchParams {
	let mut raw = RawSearchParams::default();

	for (key, value) in pairs {
		let value = Some(value.to_string());

		match *key {
			"query" => raw.query = value,
			"order_field" => raw.order_field = value,
			"order_by" => raw.order_by = value,
			"offset" => raw.offset = value,
			"limit" => raw.limit = value,
			other => panic!("Unknown parameter {other}."),
		}
	}

	raw
}

fn names(response: &usersearch_service::SearchResponse) -> Vec<&str> {
	response.users.iter().map(|user| user.name.as_str()).collect()
}

#[test]
fn authorize_checks_the_configured_token() {
	let service = SearchService::new(test_config(PathBuf::from("unused.xml")));

	assert!(service.authorize(Some(VALID_TOKEN)).is_ok());
	assert!(matches!(service.authorize(Some("invalid_token")), Err(Error::Unauthorized)));
	assert!(matches!(service.authorize(None), Err(Error::Unauthorized)));
}

#[tokio::test]
async fn sorts_by_age_and_reports_next_page() {
	let dataset = DatasetFile::with_rows(&sample_rows()).expect("Failed to write dataset.");
	let service = SearchService::new(test_config(dataset.path().to_path_buf()));
	let request = params(&[
		("query", ""),
		("order_field", "Age"),
		("order_by", "1"),
		("offset", "0"),
		("limit", "2"),
	]);
	let response = service
		.search(request.validate().expect("Params must validate."))
		.await
		.expect("Search must succeed.");

	assert_eq!(names(&response), ["Bob", "Alice"]);
	assert_eq!(response.users[0].age, 25);
	assert_eq!(response.users[1].age, 30);
	assert!(response.next_page);

	dataset.cleanup().expect("Failed to cleanup dataset.");
}

#[tokio::test]
async fn query_narrows_to_matching_users() {
	let dataset = DatasetFile::with_rows(&sample_rows()).expect("Failed to write dataset.");
	let service = SearchService::new(test_config(dataset.path().to_path_buf()));
	let request = params(&[("query", "carol"), ("limit", "10")]);
	let response = service
		.search(request.validate().expect("Params must validate."))
		.await
		.expect("Search must succeed.");

	assert_eq!(names(&response), ["Carol"]);
	assert!(!response.next_page);

	dataset.cleanup().expect("Failed to cleanup dataset.");
}

#[tokio::test]
async fn as_is_order_keeps_source_order() {
	let rows = vec![
		TestRow::new(2, "Zed", "Young", 50),
		TestRow::new(0, "Amy", "Adams", 20),
		TestRow::new(1, "Kim", "Lee", 35),
	];
	let dataset = DatasetFile::with_rows(&rows).expect("Failed to write dataset.");
	let service = SearchService::new(test_config(dataset.path().to_path_buf()));

	for order_by in ["0", "abc", "7", ""] {
		let request = params(&[("order_field", "Id"), ("order_by", order_by), ("limit", "10")]);
		let response = service
			.search(request.validate().expect("Params must validate."))
			.await
			.expect("Search must succeed.");

		assert_eq!(names(&response), ["Zed Young", "Amy Adams", "Kim Lee"], "order_by={order_by:?}");
	}

	let request = params(&[("order_field", "Id"), ("order_by", "-1"), ("limit", "10")]);
	let response = service
		.search(request.validate().expect("Params must validate."))
		.await
		.expect("Search must succeed.");

	assert_eq!(names(&response), ["Zed Young", "Kim Lee", "Amy Adams"]);

	dataset.cleanup().expect("Failed to cleanup dataset.");
}

#[tokio::test]
async fn offset_past_the_end_yields_an_empty_page() {
	let dataset = DatasetFile::with_rows(&sample_rows()).expect("Failed to write dataset.");
	let service = SearchService::new(test_config(dataset.path().to_path_buf()));
	let request = params(&[("offset", "3"), ("limit", "5")]);
	let response = service
		.search(request.validate().expect("Params must validate."))
		.await
		.expect("Search must succeed.");

	assert!(response.users.is_empty());
	assert!(!response.next_page);

	dataset.cleanup().expect("Failed to cleanup dataset.");
}

#[tokio::test]
async fn dataset_is_reread_on_every_search() {
	let dataset = DatasetFile::with_rows(&sample_rows()).expect("Failed to write dataset.");
	let service = SearchService::new(test_config(dataset.path().to_path_buf()));
	let first = service
		.search(params(&[("limit", "10")]).validate().expect("Params must validate."))
		.await
		.expect("Search must succeed.");

	assert_eq!(first.users.len(), 3);

	std::fs::write(
		dataset.path(),
		usersearch_testkit::dataset_xml(&[TestRow::new(9, "Dave", "", 50)]),
	)
	.expect("Failed to rewrite dataset.");

	let second = service
		.search(params(&[("limit", "10")]).validate().expect("Params must validate."))
		.await
		.expect("Search must succeed.");

	assert_eq!(names(&second), ["Dave"]);

	dataset.cleanup().expect("Failed to cleanup dataset.");
}

#[tokio::test]
async fn missing_dataset_is_a_read_error() {
	let service =
		SearchService::new(test_config(PathBuf::from("/nonexistent/usersearch/dataset.xml")));
	let result = service.search(Default::default()).await;

	assert!(matches!(result, Err(Error::ReadDataset { .. })));
	assert!(result.err().is_some_and(|err| err.is_internal()));
}

#[tokio::test]
async fn malformed_dataset_is_a_decode_error() {
	let dataset = DatasetFile::new("<root><row>").expect("Failed to write dataset.");
	let service = SearchService::new(test_config(dataset.path().to_path_buf()));
	let result = service.search(Default::default()).await;

	assert!(matches!(result, Err(Error::DecodeDataset { .. })));

	dataset.cleanup().expect("Failed to cleanup dataset.");
}

#[test]
fn response_uses_public_field_names() {
	let response = usersearch_service::SearchResponse {
		users: vec![usersearch_service::User {
			id: 1,
			name: "Bob".to_string(),
			age: 25,
			about: "Builds furniture.".to_string(),
			gender: "male".to_string(),
		}],
		next_page: true,
	};
	let json = serde_json::to_value(&response).expect("Failed to serialize response.");

	assert_eq!(
		json,
		serde_json::json!({
			"Users": [{
				"ID": 1,
				"Name": "Bob",
				"Age": 25,
				"About": "Builds furniture.",
				"Gender": "male"
			}],
			"NextPage": true
		})
	);
}
