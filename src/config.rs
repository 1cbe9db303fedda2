use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;

use log::warn;

use crate::common::{CameraLogMap, LogEntry, LogList};



const default_config_file_name : &str = "vms-logs.yaml";

#[derive(Clone)]
#[derive(Debug)]
#[derive(Serialize, Deserialize)]
pub struct DatasetConfig {
	#[serde(default = "default_log_entries")]
	pub entries: LogList,
	#[serde(default = "default_camera_summaries")]
	pub summaries: CameraLogMap,
}

impl Default for DatasetConfig {
	fn default() -> Self {
		DatasetConfig {
			entries: default_log_entries(),
			summaries: default_camera_summaries(),
		}
	}
}

fn default_log_entries() -> LogList {
	vec![
		LogEntry {
			camera_id: 1,
			timestamp: String::from("2024-09-04 10:00:00"),
			event: String::from("motion detected"),
		},
		LogEntry {
			camera_id: 2,
			timestamp: String::from("2024-09-04 10:15:00"),
			event: String::from("no motion"),
		},
	]
}

fn default_camera_summaries() -> CameraLogMap {
	CameraLogMap::from([
		(1, String::from("Motion detected at 10:00:00")),
		(2, String::from("No motion at 10:15:00")),
	])
}


#[derive(Clone)]
#[derive(Debug)]
pub struct ConfigManager {
	config: DatasetConfig,
}

impl ConfigManager {
	pub fn new() -> Self {
		ConfigManager {
			config: DatasetConfig::default(),
		}
	}

	// Each file replaces the dataset wholesale; sections a file omits fall
	// back to the built-in sample records.
	pub fn read_config(&mut self, filenames: Vec<&str>) -> anyhow::Result<()> {
		for filename in filenames {
			let file = File::open(Path::new(filename))
				.with_context(|| format!("Failed to open dataset file {}", filename))?;
			let buf_reader = BufReader::new(file);
			self.config = serde_yaml::from_reader(buf_reader)
				.with_context(|| format!("Failed to parse dataset file {}", filename))?;
		}
		Ok(())
	}

	pub fn read_default_config_files(&mut self) -> anyhow::Result<()> {
		if Path::new(default_config_file_name).exists() {
			self.read_config(vec![default_config_file_name])
		} else {
			// First time running (before a dataset file is created) we should encounter this, so not necessarily an error
			warn!("No dataset file at {}; using the built-in sample dataset", default_config_file_name);
			Ok(())
		}
	}

	pub fn config(&self) -> &DatasetConfig {
		&self.config
	}
}
