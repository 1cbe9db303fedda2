use rocket::serde::json::{json, Json, Value};
use rocket::State;

use crate::common::CameraId;
use crate::common::LogList;
use crate::config::DatasetConfig;


#[get("/")]
async fn list_logs(logs_state: &State<LogList>) -> Json<LogList> {
	Json(logs_state.inner().clone())
}

// A <camera_id> segment that does not parse as an integer never reaches this
// handler; routing falls through to the 404 catcher instead.
#[get("/<camera_id>")]
async fn logs_by_camera(camera_id: CameraId, logs_state: &State<LogList>) -> Json<LogList> {
	Json(logs_state.iter().filter(|entry| entry.camera_id == camera_id).cloned().collect())
}

#[catch(404)]
fn not_found() -> Value {
	json!({
		"status": "error",
		"reason": "Resource was not found."
	})
}



pub fn stage(dataset: DatasetConfig) -> rocket::fairing::AdHoc {
	rocket::fairing::AdHoc::on_ignite("Log query API", move |rocket| async move {
		rocket
			.manage(dataset.entries)
			.register("/", catchers![not_found])
			.mount("/logs", routes![list_logs, logs_by_camera])
	})
}


#[cfg(test)]
mod tests {
	use rocket::http::Status;
	use rocket::local::blocking::Client;
	use serde_json::Value;

	use super::*;

	fn client() -> Client {
		let rocket = rocket::build().attach(stage(DatasetConfig::default()));
		Client::tracked(rocket).expect("valid rocket instance")
	}

	#[test]
	fn lists_the_full_dataset_in_order() {
		let client = client();
		let response = client.get("/logs").dispatch();
		assert_eq!(response.status(), Status::Ok);

		let logs: LogList = response.into_json().unwrap();
		assert_eq!(logs.len(), 2);
		assert_eq!(logs[0].camera_id, 1);
		assert_eq!(logs[0].timestamp, "2024-09-04 10:00:00");
		assert_eq!(logs[0].event, "motion detected");
		assert_eq!(logs[1].camera_id, 2);
		assert_eq!(logs[1].timestamp, "2024-09-04 10:15:00");
		assert_eq!(logs[1].event, "no motion");
	}

	#[test]
	fn filters_by_camera_id() {
		let client = client();
		let logs: LogList = client.get("/logs/1").dispatch().into_json().unwrap();
		assert_eq!(logs.len(), 1);
		assert_eq!(logs[0].camera_id, 1);
		assert_eq!(logs[0].event, "motion detected");
	}

	#[test]
	fn absent_camera_id_yields_an_empty_array() {
		let client = client();
		let response = client.get("/logs/3").dispatch();
		assert_eq!(response.status(), Status::Ok);
		let logs: LogList = response.into_json().unwrap();
		assert!(logs.is_empty());
	}

	#[test]
	fn negative_camera_id_is_an_ordinary_miss() {
		let client = client();
		let response = client.get("/logs/-1").dispatch();
		assert_eq!(response.status(), Status::Ok);
		let logs: LogList = response.into_json().unwrap();
		assert!(logs.is_empty());
	}

	#[test]
	fn filtered_views_match_the_full_listing() {
		let client = client();
		let all: LogList = client.get("/logs").dispatch().into_json().unwrap();
		for entry in &all {
			let filtered: LogList = client
				.get(format!("/logs/{}", entry.camera_id))
				.dispatch()
				.into_json()
				.unwrap();
			let expected: LogList = all
				.iter()
				.filter(|e| e.camera_id == entry.camera_id)
				.cloned()
				.collect();
			assert_eq!(filtered, expected);
		}
	}

	#[test]
	fn non_integer_camera_id_is_rejected_in_routing() {
		let client = client();
		let response = client.get("/logs/front-door").dispatch();
		assert_eq!(response.status(), Status::NotFound);
		let body: Value = response.into_json().unwrap();
		assert_eq!(body["status"], "error");
	}

	#[test]
	fn repeated_requests_return_identical_bodies() {
		let client = client();
		let first = client.get("/logs").dispatch().into_string().unwrap();
		let second = client.get("/logs").dispatch().into_string().unwrap();
		assert_eq!(first, second);
	}
}
