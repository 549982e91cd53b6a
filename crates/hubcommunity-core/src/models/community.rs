use serde::{Deserialize, Serialize};

use super::Tag;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Community {
    pub id: String,
    pub title: String,
    pub members_quantity: u32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Community {
    /// A community with only the fields the events query asks for.
    pub fn new(id: impl Into<String>, title: impl Into<String>, members_quantity: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            members_quantity,
            images: Vec::new(),
            short_description: None,
            tags: Vec::new(),
        }
    }

    pub fn display_members(&self) -> String {
        match self.members_quantity {
            1 => "1 member".to_string(),
            n => format!("{} members", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommunitiesResponse {
    pub data: Vec<Community>,
}
