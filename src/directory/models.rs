use serde::Deserialize;
use serde_json::Value;

// One element of `GET {api}/lawyers`. The backend stores lawyers and firms
// side by side, so almost everything is optional and several fields have
// two spellings:
//
//  ├── full_name | name | firm_name
//  ├── experience_years | experience   (number or numeric string)
//  ├── is_verified | verified
//  ├── photo | image
//  ├── specialization                  (string or list)
//  └── profile extras                  (any JSON type; coerced, never fatal)

#[derive(Debug, Default, Deserialize)]
pub struct RawRecord {
    pub id: Option<RawId>,

    pub full_name: Option<String>,
    pub name: Option<String>,
    pub firm_name: Option<String>,
    pub user_type: Option<String>,

    pub specialization: Option<OneOrMany>,
    pub practice_areas: Option<Vec<String>>,

    pub city: Option<String>,
    pub state: Option<String>,

    pub experience_years: Option<Value>,
    pub experience: Option<Value>,

    pub is_verified: Option<bool>,
    pub verified: Option<bool>,

    pub photo: Option<String>,
    pub image: Option<String>,

    pub email: Option<Value>,
    pub phone: Option<Value>,
    pub website: Option<Value>,
    pub address: Option<Value>,
    #[serde(alias = "description")]
    pub bio: Option<Value>,
    pub rating: Option<Value>,
    pub consultation_fee: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    /// The id as a trimmed string, or `None` when it is blank.
    pub fn into_string(self) -> Option<String> {
        let id = match self {
            RawId::Text(s) => s.trim().to_string(),
            RawId::Number(n) => n.to_string(),
        };
        (!id.is_empty()).then_some(id)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}
