//! Location hierarchy DTOs: province > district > municipality.
//! A district always belongs to a province, a municipality to a district;
//! the backend's scoped list endpoints enforce the containment.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Province {
    pub province_id: u32,
    pub province_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub district_id: u32,
    pub district_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Municipality {
    pub municipality_id: u32,
    pub municipality_name: String,
}
