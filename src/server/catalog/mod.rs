//! Event template catalog.
//!
//! The built-in catalog is embedded at compile time. Operators can replace it with their own
//! JSON file through `EVENT_TEMPLATES_PATH`. Either way the catalog is validated once on load
//! and is read-only afterwards.

use std::{collections::HashSet, path::Path};

use crate::server::{error::config::ConfigError, model::template::EventTemplate};

const BUILTIN_TEMPLATES: &str = include_str!("templates.json");

#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<EventTemplate>,
}

impl TemplateCatalog {
    /// Loads the catalog shipped with the binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN_TEMPLATES)
    }

    /// Parses and validates a catalog from a JSON array of templates.
    ///
    /// # Returns
    /// - `Ok(TemplateCatalog)` - Every template parsed and passed validation
    /// - `Err(ConfigError::TemplateParse)` - Document is not a valid template array
    /// - `Err(ConfigError::InvalidTemplate)` - Duplicate id or unusable template values
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let templates: Vec<EventTemplate> = serde_json::from_str(json)?;
        Self::from_templates(templates)
    }

    /// Reads the catalog from a JSON file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::TemplateFile {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(&json)
    }

    pub fn from_templates(templates: Vec<EventTemplate>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for template in &templates {
            if !seen.insert(template.id.as_str()) {
                return Err(ConfigError::InvalidTemplate {
                    template_id: template.id.clone(),
                    reason: "duplicate template id".to_string(),
                });
            }
            template.validate()?;
        }

        Ok(Self { templates })
    }

    pub fn get(&self, template_id: &str) -> Option<&EventTemplate> {
        self.templates
            .iter()
            .find(|template| template.id == template_id)
    }

    /// All templates in catalog order.
    pub fn all(&self) -> &[EventTemplate] {
        &self.templates
    }
}
