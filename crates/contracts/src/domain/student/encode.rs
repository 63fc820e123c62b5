//! Flattening a [`StudentRecord`] into the backend's multipart wire format.
//!
//! Keys are PascalCase, dotted for the singular nested objects
//! (`Enrollment.Faculty`) and positionally indexed for repeated entities
//! (`Addresses[0].ProvinceId`). Empty values are omitted entirely since the
//! backend distinguishes "absent" from "empty". Booleans are the literal
//! strings `true`/`false`. The same encoding serves create and update; on
//! update the server-assigned entity ids and `Files[i].ExistingFilePath`
//! ride along so the backend can reconcile rows.
//!
//! Binary parts are attached by the caller (they are browser `File`
//! handles); [`upload_file_key`] and [`award_certificate_key`] keep the key
//! convention in one place.

use super::enums::FeeCategory;
use super::record::StudentRecord;

/// Ordered text parts of the multipart payload.
pub fn encode_record(record: &StudentRecord) -> Vec<(String, String)> {
    let mut parts: Vec<(String, String)> = Vec::new();

    text(&mut parts, "FirstName", &record.first_name);
    text(&mut parts, "MiddleName", &record.middle_name);
    text(&mut parts, "LastName", &record.last_name);
    text(&mut parts, "DateOfBirth", &record.date_of_birth);
    text(&mut parts, "PlaceOfBirth", &record.place_of_birth);
    id(&mut parts, "NationalityId", record.nationality_id);
    text(&mut parts, "CitizenshipNumber", &record.citizenship_number);
    text(&mut parts, "CitizenshipIssueDate", &record.citizenship_issue_date);
    text(&mut parts, "CitizenshipIssueDistrict", &record.citizenship_issue_district);
    text(&mut parts, "Email", &record.email);
    text(&mut parts, "AlternateEmail", &record.alternate_email);
    text(&mut parts, "PrimaryMobile", &record.primary_mobile);
    text(&mut parts, "SecondaryMobile", &record.secondary_mobile);
    text(&mut parts, "EmergencyContactName", &record.emergency_contact_name);
    text(&mut parts, "EmergencyContactRelation", &record.emergency_contact_relation);
    text(&mut parts, "EmergencyContactNumber", &record.emergency_contact_number);
    text(&mut parts, "Gender", &record.gender);
    id(&mut parts, "BloodGroupId", record.blood_group_id);
    id(&mut parts, "MaritalStatusId", record.marital_status_id);
    text(&mut parts, "Religion", &record.religion);
    text(&mut parts, "EthnicityCaste", &record.ethnicity_caste);
    id(&mut parts, "DisabilityStatusId", record.disability_status_id);
    text(&mut parts, "DisabilityTypeSpecify", &record.disability_type_specify);
    number(&mut parts, "DisabilityPercentage", record.disability_percentage);
    text(&mut parts, "AnnualFamilyIncome", &record.annual_family_income);
    text(&mut parts, "ResidenceType", &record.residence_type);
    text(&mut parts, "TransportationMethod", &record.transportation_method);
    text(&mut parts, "ExtracurricularInterests", &record.extracurricular_interests);
    boolean(&mut parts, "DeclarationAccepted", record.declaration_accepted);
    text(&mut parts, "Place", &record.place);
    text(&mut parts, "DateOfApplication", &record.date_of_application);

    for (i, address) in record.addresses.iter().enumerate() {
        server_id(&mut parts, &format!("Addresses[{}].AddressId", i), address.address_id);
        text(&mut parts, &format!("Addresses[{}].AddressType", i), &address.address_type);
        id(&mut parts, &format!("Addresses[{}].ProvinceId", i), address.province_id);
        id(&mut parts, &format!("Addresses[{}].DistrictId", i), address.district_id);
        id(&mut parts, &format!("Addresses[{}].MunicipalityId", i), address.municipality_id);
        text(&mut parts, &format!("Addresses[{}].WardNumber", i), &address.ward_number);
        text(&mut parts, &format!("Addresses[{}].Street", i), &address.street);
        text(&mut parts, &format!("Addresses[{}].HouseNumber", i), &address.house_number);
    }

    for (i, parent) in record.parents.iter().enumerate() {
        server_id(&mut parts, &format!("Parents[{}].ParentId", i), parent.parent_id);
        text(&mut parts, &format!("Parents[{}].ParentType", i), &parent.parent_type);
        text(&mut parts, &format!("Parents[{}].FullName", i), &parent.full_name);
        text(&mut parts, &format!("Parents[{}].MobileNumber", i), &parent.mobile_number);
        text(&mut parts, &format!("Parents[{}].Occupation", i), &parent.occupation);
        text(&mut parts, &format!("Parents[{}].Designation", i), &parent.designation);
        text(&mut parts, &format!("Parents[{}].Organization", i), &parent.organization);
        text(&mut parts, &format!("Parents[{}].Email", i), &parent.email);
        text(&mut parts, &format!("Parents[{}].Relation", i), &parent.relation);
    }

    for (i, academic) in record.previous_academics.iter().enumerate() {
        server_id(
            &mut parts,
            &format!("PreviousAcademics[{}].AcademicHistoryId", i),
            academic.academic_history_id,
        );
        text(&mut parts, &format!("PreviousAcademics[{}].Qualification", i), &academic.qualification);
        text(
            &mut parts,
            &format!("PreviousAcademics[{}].BoardUniversity", i),
            &academic.board_university,
        );
        text(&mut parts, &format!("PreviousAcademics[{}].Institution", i), &academic.institution);
        year(&mut parts, &format!("PreviousAcademics[{}].PassedYear", i), academic.passed_year);
        text(&mut parts, &format!("PreviousAcademics[{}].DivisionGPA", i), &academic.division_gpa);
    }

    for (i, award) in record.awards.iter().enumerate() {
        server_id(&mut parts, &format!("Awards[{}].AwardId", i), award.award_id);
        text(&mut parts, &format!("Awards[{}].TitleOfAward", i), &award.title_of_award);
        text(
            &mut parts,
            &format!("Awards[{}].IssuingOrganization", i),
            &award.issuing_organization,
        );
        year(&mut parts, &format!("Awards[{}].YearReceived", i), award.year_received);
    }

    for (i, file) in record.files.iter().enumerate() {
        text(&mut parts, &format!("Files[{}].FileType", i), &file.file_type);
        if let Some(path) = &file.file_path {
            text(&mut parts, &format!("Files[{}].ExistingFilePath", i), path);
        }
    }

    for field in ENROLLMENT_WIRE_FIELDS {
        let value = enrollment_value(record, field);
        text(&mut parts, &format!("Enrollment.{}", field), value);
    }

    text(&mut parts, "Financial.FeeCategory", &record.financial.fee_category);
    // Scholarship fields ride only under the Scholarship category; stale
    // values from a previously selected category must not leak.
    if record.financial.fee_category == FeeCategory::Scholarship.as_str() {
        text(&mut parts, "Financial.ScholarshipType", &record.financial.scholarship_type);
        text(
            &mut parts,
            "Financial.ScholarshipProvider",
            &record.financial.scholarship_provider,
        );
        number(&mut parts, "Financial.ScholarshipAmount", record.financial.scholarship_amount);
    }
    text(&mut parts, "Financial.AccountHolderName", &record.financial.account_holder_name);
    text(&mut parts, "Financial.BankName", &record.financial.bank_name);
    text(&mut parts, "Financial.AccountNumber", &record.financial.account_number);
    text(&mut parts, "Financial.Branch", &record.financial.branch);

    parts
}

/// Multipart key for the freshly picked document binary of `Files[index]`.
pub fn upload_file_key(index: usize) -> String {
    format!("Files[{}].File", index)
}

/// Multipart key for the certificate binary of `Awards[index]`.
pub fn award_certificate_key(index: usize) -> String {
    format!("Awards[{}].CertificateFile", index)
}

const ENROLLMENT_WIRE_FIELDS: &[&str] = &[
    "Faculty",
    "Program",
    "CourseLevel",
    "AcademicYear",
    "SemesterClass",
    "Section",
    "RollNumber",
    "RegistrationNumber",
    "EnrollDate",
    "AcademicStatus",
];

fn enrollment_value<'a>(record: &'a StudentRecord, field: &str) -> &'a str {
    let e = &record.enrollment;
    match field {
        "Faculty" => &e.faculty,
        "Program" => &e.program,
        "CourseLevel" => &e.course_level,
        "AcademicYear" => &e.academic_year,
        "SemesterClass" => &e.semester_class,
        "Section" => &e.section,
        "RollNumber" => &e.roll_number,
        "RegistrationNumber" => &e.registration_number,
        "EnrollDate" => &e.enroll_date,
        "AcademicStatus" => &e.academic_status,
        _ => "",
    }
}

fn text(parts: &mut Vec<(String, String)>, key: &str, value: &str) {
    if !value.is_empty() {
        parts.push((key.to_string(), value.to_string()));
    }
}

fn id(parts: &mut Vec<(String, String)>, key: &str, value: Option<u32>) {
    if let Some(v) = value {
        parts.push((key.to_string(), v.to_string()));
    }
}

fn year(parts: &mut Vec<(String, String)>, key: &str, value: Option<u32>) {
    id(parts, key, value);
}

fn server_id(parts: &mut Vec<(String, String)>, key: &str, value: Option<i64>) {
    if let Some(v) = value {
        parts.push((key.to_string(), v.to_string()));
    }
}

fn number(parts: &mut Vec<(String, String)>, key: &str, value: Option<f64>) {
    if let Some(v) = value {
        parts.push((key.to_string(), v.to_string()));
    }
}

fn boolean(parts: &mut Vec<(String, String)>, key: &str, value: bool) {
    parts.push((key.to_string(), if value { "true" } else { "false" }.to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::student::record::{Award, UploadedFile};

    fn value_of<'a>(parts: &'a [(String, String)], key: &str) -> Option<&'a str> {
        parts
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn empty_values_are_omitted_not_sent_blank() {
        let record = StudentRecord::default();
        let parts = encode_record(&record);
        assert!(value_of(&parts, "FirstName").is_none());
        assert!(value_of(&parts, "NationalityId").is_none());
        assert!(value_of(&parts, "Enrollment.Faculty").is_none());
        // Booleans are always present as literal strings.
        assert_eq!(value_of(&parts, "DeclarationAccepted"), Some("false"));
    }

    #[test]
    fn numbers_and_booleans_are_stringified() {
        let mut record = StudentRecord::default();
        record.nationality_id = Some(4);
        record.disability_percentage = Some(7.5);
        record.declaration_accepted = true;
        let parts = encode_record(&record);
        assert_eq!(value_of(&parts, "NationalityId"), Some("4"));
        assert_eq!(value_of(&parts, "DisabilityPercentage"), Some("7.5"));
        assert_eq!(value_of(&parts, "DeclarationAccepted"), Some("true"));
    }

    #[test]
    fn indexed_keys_follow_in_memory_order() {
        let mut record = StudentRecord::new_registration();
        record.addresses[0].province_id = Some(3);
        record.addresses[1].province_id = Some(5);
        record.awards = vec![
            Award {
                title_of_award: "Best Debater".into(),
                ..Award::default()
            },
            Award {
                title_of_award: "Science Fair".into(),
                year_received: Some(2021),
                ..Award::default()
            },
        ];
        let parts = encode_record(&record);
        assert_eq!(value_of(&parts, "Addresses[0].ProvinceId"), Some("3"));
        assert_eq!(value_of(&parts, "Addresses[1].ProvinceId"), Some("5"));
        assert_eq!(value_of(&parts, "Awards[0].TitleOfAward"), Some("Best Debater"));
        assert_eq!(value_of(&parts, "Awards[1].YearReceived"), Some("2021"));
    }

    #[test]
    fn scholarship_fields_only_under_scholarship_category() {
        let mut record = StudentRecord::default();
        record.financial.fee_category = "Scholarship".into();
        record.financial.scholarship_type = "Merit".into();
        record.financial.scholarship_provider = "University".into();
        let parts = encode_record(&record);
        assert_eq!(value_of(&parts, "Financial.ScholarshipType"), Some("Merit"));
        // Blank amount is omitted even under Scholarship.
        assert!(value_of(&parts, "Financial.ScholarshipAmount").is_none());

        // Switching away must not leak the stale in-memory values.
        record.financial.fee_category = "Regular".into();
        let parts = encode_record(&record);
        assert!(value_of(&parts, "Financial.ScholarshipType").is_none());
        assert!(value_of(&parts, "Financial.ScholarshipProvider").is_none());
        assert!(value_of(&parts, "Financial.ScholarshipAmount").is_none());
    }

    #[test]
    fn existing_file_path_rides_as_plain_field() {
        let mut record = StudentRecord::default();
        record.files = vec![
            UploadedFile {
                file_type: "Citizenship".into(),
                file_path: Some("uploads/cit.pdf".into()),
            },
            UploadedFile {
                file_type: "Transcript".into(),
                file_path: None,
            },
        ];
        let parts = encode_record(&record);
        assert_eq!(
            value_of(&parts, "Files[0].ExistingFilePath"),
            Some("uploads/cit.pdf")
        );
        assert!(value_of(&parts, "Files[1].ExistingFilePath").is_none());
        assert_eq!(value_of(&parts, "Files[1].FileType"), Some("Transcript"));
    }

    #[test]
    fn file_part_key_convention() {
        assert_eq!(upload_file_key(2), "Files[2].File");
        assert_eq!(award_certificate_key(0), "Awards[0].CertificateFile");
    }

    #[test]
    fn hydrate_then_encode_round_trips_scalars() {
        let json = serde_json::json!({
            "studentId": 7,
            "firstName": "Sita",
            "lastName": "Sharma",
            "email": "sita@example.com",
            "nationalityId": 1,
            "gender": "Female",
            "declarationAccepted": true,
            "addresses": [{
                "addressId": 5,
                "addressType": "Permanent",
                "provinceId": 3,
                "districtId": 27,
                "municipalityId": 301,
                "wardNumber": "12"
            }],
            "financial": { "feeCategory": "Regular", "bankName": "NIC" }
        });
        let record: StudentRecord = serde_json::from_value(json).unwrap();
        let parts = encode_record(&record);
        assert_eq!(value_of(&parts, "FirstName"), Some("Sita"));
        assert_eq!(value_of(&parts, "Email"), Some("sita@example.com"));
        assert_eq!(value_of(&parts, "Gender"), Some("Female"));
        assert_eq!(value_of(&parts, "Addresses[0].AddressId"), Some("5"));
        assert_eq!(value_of(&parts, "Addresses[0].MunicipalityId"), Some("301"));
        assert_eq!(value_of(&parts, "Financial.BankName"), Some("NIC"));
        // The record id travels in the URL, never in the body.
        assert!(parts.iter().all(|(k, _)| k != "StudentId"));
    }
}
