mod config;
mod harmonize;
mod report;

pub use config::ConfigArgs;
pub use config::handle_config;
pub use harmonize::HarmonizeArgs;
pub use harmonize::handle_harmonize;
pub use harmonize::run_harmonize;
pub use report::ReportArgs;
pub use report::handle_report;
