use crate::shared::api_utils;
use contracts::domain::lookup::LookupItem;
use contracts::domain::student::encode::{award_certificate_key, encode_record, upload_file_key};
use contracts::domain::student::record::StudentRecord;
use send_wrapper::SendWrapper;
use web_sys::FormData;

pub async fn fetch_nationalities() -> Result<Vec<LookupItem>, String> {
    api_utils::get_json("/api/nationality").await
}

pub async fn fetch_blood_groups() -> Result<Vec<LookupItem>, String> {
    api_utils::get_json("/api/bloodGroup").await
}

pub async fn fetch_marital_statuses() -> Result<Vec<LookupItem>, String> {
    api_utils::get_json("/api/MaritalStatus").await
}

pub async fn fetch_disability_statuses() -> Result<Vec<LookupItem>, String> {
    api_utils::get_json("/api/DisabilityStatus").await
}

/// Assemble the multipart body: encoded scalar pairs plus the freshly
/// picked binaries. `documents` runs parallel to `record.files`,
/// `certificates` parallel to `record.awards`, so the part keys line up
/// with the encoded indexes.
pub fn build_form_data(
    record: &StudentRecord,
    documents: &[Option<SendWrapper<web_sys::File>>],
    certificates: &[Option<SendWrapper<web_sys::File>>],
) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("{e:?}"))?;
    for (key, value) in encode_record(record) {
        form.append_with_str(&key, &value)
            .map_err(|e| format!("{e:?}"))?;
    }
    for (i, slot) in documents.iter().enumerate() {
        if let Some(file) = slot {
            form.append_with_blob_and_filename(&upload_file_key(i), file, &file.name())
                .map_err(|e| format!("{e:?}"))?;
        }
    }
    for (i, slot) in certificates.iter().enumerate() {
        if let Some(file) = slot {
            form.append_with_blob_and_filename(&award_certificate_key(i), file, &file.name())
                .map_err(|e| format!("{e:?}"))?;
        }
    }
    Ok(form)
}

pub async fn register(form: &FormData) -> Result<(), String> {
    api_utils::send_multipart("POST", "/api/Registration/register", form).await
}
