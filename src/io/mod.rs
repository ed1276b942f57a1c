pub mod config_io;
pub mod pipeline_io;

pub use config_io::{CONFIG_FILE, ConfigError, read_config, write_config};
pub use pipeline_io::{PipelineIoError, load_pipeline, save_pipeline};
