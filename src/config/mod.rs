mod settings;

pub use settings::{LogConfig, Settings, WizardConfig};
