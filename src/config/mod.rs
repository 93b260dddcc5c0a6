mod loader;
mod model;
pub mod presets;
mod resolve;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{
    CONFIG_VERSION, CheckSpec, Config, DEFAULT_LIMIT, DatasetConfig, ExpectedCount, RuleSpec,
    ThinField,
};
pub use presets::{AVAILABLE_PRESETS, Preset, load_preset, preset_for_path};
pub use resolve::ResolvedDataset;
pub use validation::{validate_config_semantics, validate_rule};
