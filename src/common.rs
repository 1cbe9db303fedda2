use std::collections::HashMap;



// Identifiers are plain signed integers; ids outside the dataset are ordinary
// lookup misses, negative and zero included.
pub type CameraId = i64;
pub type LogList = Vec<LogEntry>;
pub type CameraLogMap = HashMap<CameraId, String>;

#[derive(Clone)]
#[derive(Debug)]
#[derive(PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct LogEntry {
	pub camera_id: CameraId,
	pub timestamp: String,
	pub event: String,
}
