//! The student record aggregate.
//!
//! Built up incrementally by the registration wizard, or reconstructed from
//! the backend's camelCase JSON when editing. Enum-typed fields are plain
//! strings validated against [`super::enums`]; numeric ids use `Option` so an
//! unselected dropdown is "absent", never `0`.

use serde::{Deserialize, Deserializer};

/// Backends serialize missing strings as `null`; fold that into `""`.
pub(crate) fn null_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub address_id: Option<i64>,
    #[serde(deserialize_with = "null_string")]
    pub address_type: String,
    pub province_id: Option<u32>,
    pub district_id: Option<u32>,
    pub municipality_id: Option<u32>,
    #[serde(deserialize_with = "null_string")]
    pub ward_number: String,
    #[serde(deserialize_with = "null_string")]
    pub street: String,
    #[serde(deserialize_with = "null_string")]
    pub house_number: String,
}

impl Address {
    pub fn permanent() -> Self {
        Self {
            address_type: "Permanent".to_string(),
            ..Self::default()
        }
    }

    pub fn temporary() -> Self {
        Self {
            address_type: "Temporary".to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Parent {
    pub parent_id: Option<i64>,
    #[serde(deserialize_with = "null_string")]
    pub parent_type: String,
    #[serde(deserialize_with = "null_string")]
    pub full_name: String,
    #[serde(deserialize_with = "null_string")]
    pub mobile_number: String,
    #[serde(deserialize_with = "null_string")]
    pub occupation: String,
    #[serde(deserialize_with = "null_string")]
    pub designation: String,
    #[serde(deserialize_with = "null_string")]
    pub organization: String,
    #[serde(deserialize_with = "null_string")]
    pub email: String,
    #[serde(deserialize_with = "null_string")]
    pub relation: String,
}

impl Default for Parent {
    fn default() -> Self {
        Self {
            parent_id: None,
            parent_type: "Father".to_string(),
            full_name: String::new(),
            mobile_number: String::new(),
            occupation: String::new(),
            designation: String::new(),
            organization: String::new(),
            email: String::new(),
            relation: String::new(),
        }
    }
}

impl Parent {
    /// A parent row the user never filled in. The type discriminant is
    /// seeded, so it does not count towards "touched".
    pub fn is_blank(&self) -> bool {
        self.parent_id.is_none()
            && self.full_name.is_empty()
            && self.mobile_number.is_empty()
            && self.occupation.is_empty()
            && self.designation.is_empty()
            && self.organization.is_empty()
            && self.email.is_empty()
            && self.relation.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AcademicRecord {
    pub academic_history_id: Option<i64>,
    #[serde(deserialize_with = "null_string")]
    pub qualification: String,
    #[serde(deserialize_with = "null_string")]
    pub board_university: String,
    #[serde(deserialize_with = "null_string")]
    pub institution: String,
    pub passed_year: Option<u32>,
    #[serde(rename = "divisionGPA", deserialize_with = "null_string")]
    pub division_gpa: String,
}

impl AcademicRecord {
    pub fn is_blank(&self) -> bool {
        self.academic_history_id.is_none()
            && self.qualification.is_empty()
            && self.board_university.is_empty()
            && self.institution.is_empty()
            && self.passed_year.is_none()
            && self.division_gpa.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Award {
    pub award_id: Option<i64>,
    #[serde(deserialize_with = "null_string")]
    pub title_of_award: String,
    #[serde(deserialize_with = "null_string")]
    pub issuing_organization: String,
    pub year_received: Option<u32>,
}

impl Award {
    pub fn is_blank(&self) -> bool {
        self.award_id.is_none()
            && self.title_of_award.is_empty()
            && self.issuing_organization.is_empty()
            && self.year_received.is_none()
    }
}

/// One document slot. The freshly picked binary lives in the frontend view
/// model (it is a browser `File` handle, not data); `file_path` is the
/// server-side path of an already uploaded document when editing.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadedFile {
    #[serde(deserialize_with = "null_string")]
    pub file_type: String,
    pub file_path: Option<String>,
}

impl UploadedFile {
    pub fn is_blank(&self) -> bool {
        self.file_type.is_empty() && self.file_path.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Enrollment {
    #[serde(deserialize_with = "null_string")]
    pub faculty: String,
    #[serde(deserialize_with = "null_string")]
    pub program: String,
    #[serde(deserialize_with = "null_string")]
    pub course_level: String,
    #[serde(deserialize_with = "null_string")]
    pub academic_year: String,
    #[serde(deserialize_with = "null_string")]
    pub semester_class: String,
    #[serde(deserialize_with = "null_string")]
    pub section: String,
    #[serde(deserialize_with = "null_string")]
    pub roll_number: String,
    #[serde(deserialize_with = "null_string")]
    pub registration_number: String,
    #[serde(deserialize_with = "null_string")]
    pub enroll_date: String,
    #[serde(deserialize_with = "null_string")]
    pub academic_status: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Financial {
    #[serde(deserialize_with = "null_string")]
    pub fee_category: String,
    #[serde(deserialize_with = "null_string")]
    pub scholarship_type: String,
    #[serde(deserialize_with = "null_string")]
    pub scholarship_provider: String,
    pub scholarship_amount: Option<f64>,
    #[serde(deserialize_with = "null_string")]
    pub account_holder_name: String,
    #[serde(deserialize_with = "null_string")]
    pub bank_name: String,
    #[serde(deserialize_with = "null_string")]
    pub account_number: String,
    #[serde(deserialize_with = "null_string")]
    pub branch: String,
}

/// Root aggregate for the registration wizard and the edit page.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentRecord {
    pub student_id: Option<i64>,

    #[serde(deserialize_with = "null_string")]
    pub first_name: String,
    #[serde(deserialize_with = "null_string")]
    pub middle_name: String,
    #[serde(deserialize_with = "null_string")]
    pub last_name: String,
    #[serde(deserialize_with = "null_string")]
    pub date_of_birth: String,
    #[serde(deserialize_with = "null_string")]
    pub place_of_birth: String,
    pub nationality_id: Option<u32>,
    #[serde(deserialize_with = "null_string")]
    pub citizenship_number: String,
    #[serde(deserialize_with = "null_string")]
    pub citizenship_issue_date: String,
    #[serde(deserialize_with = "null_string")]
    pub citizenship_issue_district: String,

    #[serde(deserialize_with = "null_string")]
    pub email: String,
    #[serde(deserialize_with = "null_string")]
    pub alternate_email: String,
    #[serde(deserialize_with = "null_string")]
    pub primary_mobile: String,
    #[serde(deserialize_with = "null_string")]
    pub secondary_mobile: String,

    #[serde(deserialize_with = "null_string")]
    pub emergency_contact_name: String,
    #[serde(deserialize_with = "null_string")]
    pub emergency_contact_relation: String,
    #[serde(deserialize_with = "null_string")]
    pub emergency_contact_number: String,

    #[serde(deserialize_with = "null_string")]
    pub gender: String,
    pub blood_group_id: Option<u32>,
    pub marital_status_id: Option<u32>,
    #[serde(deserialize_with = "null_string")]
    pub religion: String,
    #[serde(deserialize_with = "null_string")]
    pub ethnicity_caste: String,

    pub disability_status_id: Option<u32>,
    #[serde(deserialize_with = "null_string")]
    pub disability_type_specify: String,
    pub disability_percentage: Option<f64>,

    #[serde(deserialize_with = "null_string")]
    pub annual_family_income: String,
    #[serde(deserialize_with = "null_string")]
    pub residence_type: String,
    #[serde(deserialize_with = "null_string")]
    pub transportation_method: String,
    #[serde(deserialize_with = "null_string")]
    pub extracurricular_interests: String,

    pub addresses: Vec<Address>,
    pub parents: Vec<Parent>,
    pub previous_academics: Vec<AcademicRecord>,
    pub awards: Vec<Award>,
    pub files: Vec<UploadedFile>,
    pub enrollment: Enrollment,
    pub financial: Financial,

    pub declaration_accepted: bool,
    #[serde(deserialize_with = "null_string")]
    pub place: String,
    #[serde(deserialize_with = "null_string")]
    pub date_of_application: String,

    /// "Temporary address same as permanent", a client-side flag only.
    #[serde(skip)]
    pub addresses_same: bool,
}

impl StudentRecord {
    /// Fresh record for the registration wizard: two address slots
    /// (permanent + temporary), one blank parent, one blank academic row.
    pub fn new_registration() -> Self {
        Self {
            addresses: vec![Address::permanent(), Address::temporary()],
            parents: vec![Parent::default()],
            previous_academics: vec![AcademicRecord::default()],
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_seed_defaults() {
        let r = StudentRecord::new_registration();
        assert_eq!(r.addresses.len(), 2);
        assert_eq!(r.addresses[0].address_type, "Permanent");
        assert_eq!(r.addresses[1].address_type, "Temporary");
        assert_eq!(r.parents.len(), 1);
        assert_eq!(r.parents[0].parent_type, "Father");
        assert!(r.parents[0].is_blank());
        assert_eq!(r.previous_academics.len(), 1);
        assert!(r.awards.is_empty());
        assert!(r.files.is_empty());
        assert!(!r.declaration_accepted);
    }

    #[test]
    fn hydrates_from_backend_json_with_nulls() {
        let json = serde_json::json!({
            "studentId": 12,
            "firstName": "Sita",
            "middleName": null,
            "lastName": "Sharma",
            "email": "sita@example.com",
            "nationalityId": 1,
            "bloodGroupId": null,
            "addresses": [{
                "addressId": 5,
                "addressType": "Permanent",
                "provinceId": 3,
                "districtId": 27,
                "municipalityId": 301,
                "wardNumber": "12",
                "street": null,
                "houseNumber": null
            }],
            "parents": [{
                "parentId": 9,
                "parentType": "Mother",
                "fullName": "Gita Sharma",
                "mobileNumber": "9800000000",
                "email": null
            }],
            "previousAcademics": [{
                "academicHistoryId": 4,
                "qualification": "SEE",
                "boardUniversity": "NEB",
                "institution": "ABC School",
                "passedYear": 2018,
                "divisionGPA": "3.6"
            }],
            "files": [{ "fileType": "Citizenship", "filePath": "uploads/cit.pdf" }],
            "enrollment": { "faculty": "Science", "section": null },
            "financial": { "feeCategory": "Regular", "scholarshipAmount": null },
            "declarationAccepted": true
        });
        let r: StudentRecord = serde_json::from_value(json).unwrap();
        assert_eq!(r.student_id, Some(12));
        assert_eq!(r.middle_name, "");
        assert_eq!(r.addresses[0].district_id, Some(27));
        assert_eq!(r.addresses[0].street, "");
        assert!(!r.parents[0].is_blank());
        assert_eq!(r.previous_academics[0].passed_year, Some(2018));
        assert_eq!(r.files[0].file_path.as_deref(), Some("uploads/cit.pdf"));
        assert_eq!(r.enrollment.faculty, "Science");
        assert_eq!(r.financial.fee_category, "Regular");
        assert!(r.declaration_accepted);
    }
}
