use crate::shared::api_utils;
use contracts::domain::student::record::StudentRecord;

pub async fn fetch_by_id(id: i64) -> Result<StudentRecord, String> {
    api_utils::get_json(&format!("/api/registration/{}", id)).await
}
