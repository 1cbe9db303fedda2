use rocket::serde::json::{json, Json, Value};
use rocket::State;

use crate::common::CameraId;
use crate::common::CameraLogMap;
use crate::config::DatasetConfig;


// Fixed namespace identifying this service; clients discover it via GET /.
const target_namespace : &str = "vms.surveillance";

const no_log_fallback : &str = "No log for this camera";

#[derive(Debug)]
#[derive(Serialize, Deserialize)]
pub struct GetVideoLogRequest {
	pub camera_id: CameraId,
}

#[derive(Debug)]
#[derive(Serialize, Deserialize)]
pub struct GetVideoLogResponse {
	pub result: String,
}


#[get("/")]
fn describe() -> Value {
	json!({
		"namespace": target_namespace,
		"operations": ["get_video_log"]
	})
}

// Lookup misses are successful responses carrying the fallback string, never
// an error, whatever the integer.
#[post("/get_video_log", data = "<request>")]
async fn get_video_log(request: Json<GetVideoLogRequest>, summaries_state: &State<CameraLogMap>) -> Json<GetVideoLogResponse> {
	let result = summaries_state
		.get(&request.camera_id)
		.cloned()
		.unwrap_or_else(|| String::from(no_log_fallback));
	Json(GetVideoLogResponse { result })
}

#[catch(404)]
fn not_found() -> Value {
	json!({
		"status": "error",
		"reason": "No such operation."
	})
}



pub fn stage(dataset: DatasetConfig) -> rocket::fairing::AdHoc {
	rocket::fairing::AdHoc::on_ignite("Video log RPC", move |rocket| async move {
		rocket
			.manage(dataset.summaries)
			.register("/", catchers![not_found])
			.mount("/", routes![describe, get_video_log])
	})
}
