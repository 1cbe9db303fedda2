use clap::{Command, Arg, ArgAction};

use vms_log_services::config;
use vms_log_services::rest_api;


#[rocket::main]
async fn main() -> anyhow::Result<()> {
	let matches = Command::new("vms-log-rest")
		.version("0.0.1")
		.about("HTTP/JSON query service for video surveillance logs.")
		.arg(
			Arg::new("config")
				.action(ArgAction::Append)	// Allow argument to be specified multiple times
				.short('c')
				.long("config")
				.help("YAML file with the log dataset")
		)
		.get_matches();

	let mut config_manager = config::ConfigManager::new();
	let config_filename_matches = matches.get_many::<String>("config");
	match config_filename_matches {
		Some(filenames) => {
			config_manager.read_config(filenames.map(|v| v.as_str()).collect())?;
		},
		None => {
			// Use default file path
			config_manager.read_default_config_files()?;
		}
	};

	rocket::build()
		.attach(rest_api::stage(config_manager.config().clone()))
		.launch()
		.await?;

	anyhow::Ok(())
}
