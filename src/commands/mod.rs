mod lint;
mod settings;

pub use lint::{exit_code, load_config, run_lint};
pub use settings::Settings;
