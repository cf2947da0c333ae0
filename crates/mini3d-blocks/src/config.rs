use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

/// One `[[blocks]]` entry from blocks.toml.
#[derive(Clone, Debug, Deserialize)]
pub struct BlockDef {
    pub name: String,
    pub id: u16,
    pub tile: u16,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct BlocksConfig {
    #[serde(default)]
    pub blocks: Vec<BlockDef>,
}

impl BlocksConfig {
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&text)?)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Block id for a configured name, for code that seeds worlds by name.
    pub fn id_by_name(&self, name: &str) -> Option<u16> {
        self.blocks.iter().find(|d| d.name == name).map(|d| d.id)
    }
}
