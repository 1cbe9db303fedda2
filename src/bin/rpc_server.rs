use clap::{Command, Arg, ArgAction};

use vms_log_services::config;
use vms_log_services::rpc_api;


// Clients expect the RPC listener at this fixed address.
const bind_address : &str = "0.0.0.0";
const bind_port : u16 = 8000;

#[rocket::main]
async fn main() -> anyhow::Result<()> {
	let matches = Command::new("vms-log-rpc")
		.version("0.0.1")
		.about("RPC query service for video surveillance log summaries.")
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

	let figment = rocket::Config::figment()
		.merge(("address", bind_address))
		.merge(("port", bind_port));

	rocket::custom(figment)
		.attach(rpc_api::stage(config_manager.config().clone()))
		.launch()
		.await?;

	anyhow::Ok(())
}
