use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RepId(pub i64);

/// A client engagement tracked against a rep. `status` is a free-form label
/// supplied by the backend, not an enum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub client_name: String,
    pub status: String,
}

/// A sales representative as delivered by the backend. Records are replaced
/// wholesale on re-fetch and never mutated field by field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRep {
    pub id: RepId,
    pub name: String,
    pub skills: Vec<String>,
    pub deals: Vec<Deal>,
}

impl SalesRep {
    pub fn deal_count(&self) -> usize {
        self.deals.len()
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|candidate| candidate == skill)
    }
}
