use crate::shared::api_utils;
use contracts::domain::location::{District, Municipality, Province};

pub async fn fetch_provinces() -> Result<Vec<Province>, String> {
    api_utils::get_json("/api/location/provinces").await
}

pub async fn fetch_districts(province_id: u32) -> Result<Vec<District>, String> {
    api_utils::get_json(&format!(
        "/api/location/districts/by-province/{}",
        province_id
    ))
    .await
}

pub async fn fetch_municipalities(district_id: u32) -> Result<Vec<Municipality>, String> {
    api_utils::get_json(&format!(
        "/api/location/municipalities/by-district/{}",
        district_id
    ))
    .await
}
