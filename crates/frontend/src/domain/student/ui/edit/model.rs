use crate::shared::api_utils;
use crate::shared::date_utils::date_only;
use contracts::domain::student::record::StudentRecord;
use web_sys::FormData;

pub async fn fetch_by_id(id: i64) -> Result<StudentRecord, String> {
    api_utils::get_json(&format!("/api/registration/{}", id)).await
}

/// The backend returns ISO datetimes; native date inputs choke on the
/// time part, so strip it before handing the record to the form.
pub fn normalize_dates(record: &mut StudentRecord) {
    record.date_of_birth = date_only(&record.date_of_birth);
    record.citizenship_issue_date = date_only(&record.citizenship_issue_date);
    record.enrollment.enroll_date = date_only(&record.enrollment.enroll_date);
    record.date_of_application = date_only(&record.date_of_application);
}

pub async fn update(id: i64, form: &FormData) -> Result<(), String> {
    api_utils::send_multipart("PUT", &format!("/api/registration/update/{}", id), form).await
}
