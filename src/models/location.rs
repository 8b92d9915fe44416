use serde::{Deserialize, Serialize};

/// A selectable city. `value` is the stable key, `label` is what users read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct QueryParams {
    pub limit: Option<u16>,
    pub search: Option<String>,
}
