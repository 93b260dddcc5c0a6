mod check;
mod config;
mod context;
mod init;
mod presets;

pub use check::run_check;
pub use config::run_config;
pub use init::{generate_config_template, run_init, run_init_impl};
pub use presets::{format_presets, run_presets};
