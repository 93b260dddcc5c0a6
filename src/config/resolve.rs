use std::path::PathBuf;

use crate::error::Result;

use super::presets::load_preset;
use super::{DatasetConfig, RuleSpec};

const DEFAULT_ID_FIELD: &str = "id";

/// A dataset with its preset expanded: the full rule table in run order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDataset {
    pub name: String,
    pub path: PathBuf,
    pub id_field: String,
    pub require_records: bool,
    pub rules: Vec<RuleSpec>,
}

impl DatasetConfig {
    /// Preset rules first, then the dataset's own rules.
    ///
    /// # Errors
    /// Returns an error if the preset is unknown.
    pub fn resolve(&self) -> Result<ResolvedDataset> {
        let (preset_id_field, mut rules) = match &self.preset {
            Some(name) => {
                let preset = load_preset(name)?;
                (Some(preset.id_field), preset.rules)
            }
            None => (None, Vec::new()),
        };
        rules.extend(self.rules.iter().cloned());

        let id_field = self
            .id_field
            .clone()
            .or(preset_id_field)
            .unwrap_or_else(|| DEFAULT_ID_FIELD.to_string());

        Ok(ResolvedDataset {
            name: self.name.clone(),
            path: self.path.clone(),
            id_field,
            require_records: self.require_records,
            rules,
        })
    }
}
