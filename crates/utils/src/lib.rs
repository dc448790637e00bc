mod display_report;
mod load_catalog;
mod load_config;
mod project_path;
mod properties_file;
mod report_store;

pub use display_report::display_report;
pub use load_catalog::load_catalog;
pub use load_config::{get_config_path, load_config};
pub use project_path::project_path;
pub use properties_file::{read_properties, write_properties};
pub use report_store::{save_report, take_report};
