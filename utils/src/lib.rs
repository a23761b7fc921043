mod config_path;
mod file;
mod item_diff;
mod logging;

pub use config_path::{get_config_dir, get_config_path};
pub use file::read_key_value_store_data;
pub use item_diff::diff_items;
pub use logging::setup_logging;
