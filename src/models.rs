use serde::{Deserialize, Serialize};

/// List/gallery view of one Pokemon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub id: u32,
    pub name: String,
    /// Best available artwork URL
    pub sprite: Option<String>,
    /// Type names in slot order
    pub types: Vec<String>,
}

impl Summary {
    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t.eq_ignore_ascii_case(type_name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub value: u32,
}

/// Full view of one Pokemon, combining its record and species data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    #[serde(flatten)]
    pub summary: Summary,
    pub height: u32,
    pub weight: u32,
    pub base_experience: Option<u32>,
    pub abilities: Vec<Ability>,
    pub stats: Vec<Stat>,
    /// English Pokedex entry with line breaks flattened to spaces
    pub flavor_text: Option<String>,
    pub habitat: Option<String>,
    pub genus: Option<String>,
    pub is_legendary: bool,
    pub is_mythical: bool,
}

impl Detail {
    pub fn id(&self) -> u32 {
        self.summary.id
    }
}
