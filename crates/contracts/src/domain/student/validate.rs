//! Field-level rules and whole-record invariants for [`StudentRecord`].
//!
//! Rules are addressed by wire-format field path (`FirstName`,
//! `Addresses[0].ProvinceId`, `Enrollment.Faculty`). The step orchestrator
//! feeds paths one at a time through [`validate_field`]; submission runs
//! [`validate_record`], which adds the cross-field invariants that single
//! fields cannot express.

use std::collections::BTreeMap;

use super::enums::{
    AcademicStatus, AddressType, FeeCategory, Gender, ParentType, ResidenceType, TransportationType,
};
use super::record::{
    AcademicRecord, Address, Award, Enrollment, Financial, Parent, StudentRecord, UploadedFile,
};
use super::wizard;

/// Failure side of a validation run: field path -> human-readable message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(path.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.errors.get(path).map(String::as_str)
    }

    pub fn remove(&mut self, path: &str) {
        self.errors.remove(path);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

pub type ValidationResult = Result<(), ValidationErrors>;

// --- input coercion -------------------------------------------------------

/// Coerce raw select/input text to a numeric id. Empty and non-numeric
/// input become "absent" rather than 0, so id fields whose valid domain
/// excludes 0 cannot become spuriously valid.
pub fn coerce_id(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        trimmed.parse().ok()
    }
}

/// Same coercion for year inputs.
pub fn coerce_year(input: &str) -> Option<u32> {
    coerce_id(input)
}

/// Coerce a decimal amount; empty input is absent.
pub fn coerce_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        trimmed.parse().ok()
    }
}

// --- atomic checks --------------------------------------------------------

fn required(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(())
    }
}

fn required_id(value: Option<u32>, label: &str) -> Result<(), String> {
    match value {
        Some(v) if v >= 1 => Ok(()),
        _ => Err(format!("{} is required", label)),
    }
}

fn email_format(value: &str) -> bool {
    // Same lenient shape zod-style validators accept: local@domain.tld.
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

fn required_email(value: &str, label: &str) -> Result<(), String> {
    required(value, label)?;
    if email_format(value.trim()) {
        Ok(())
    } else {
        Err(format!("{} must be a valid email", label))
    }
}

fn optional_email(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Ok(())
    } else {
        required_email(value, label)
    }
}

fn required_choice(value: &str, label: &str, is_valid: fn(&str) -> bool) -> Result<(), String> {
    required(value, label)?;
    if is_valid(value) {
        Ok(())
    } else {
        Err(format!("{} has an invalid choice", label))
    }
}

fn optional_choice(value: &str, label: &str, is_valid: fn(&str) -> bool) -> Result<(), String> {
    if value.trim().is_empty() {
        Ok(())
    } else {
        required_choice(value, label, is_valid)
    }
}

fn required_year(value: Option<u32>, label: &str) -> Result<(), String> {
    match value {
        None => Err(format!("{} is required", label)),
        Some(y) if y < 1900 => Err(format!("{} must be 1900 or later", label)),
        Some(_) => Ok(()),
    }
}

// --- path dispatch --------------------------------------------------------

/// Split `Collection[index].Field` into its parts.
fn parse_indexed(path: &str) -> Option<(&str, usize, &str)> {
    let open = path.find('[')?;
    let close = path.find(']')?;
    let index: usize = path.get(open + 1..close)?.parse().ok()?;
    let field = path.get(close + 2..)?;
    if path.get(close + 1..close + 2)? != "." {
        return None;
    }
    Some((&path[..open], index, field))
}

/// Validate one field of the record by wire path. `Ok(())` for paths with no
/// declared rule (optional fields).
pub fn validate_field(record: &StudentRecord, path: &str) -> Result<(), String> {
    if let Some((collection, index, field)) = parse_indexed(path) {
        return match collection {
            "Addresses" => match record.addresses.get(index) {
                Some(a) => validate_address_field(a, field),
                None => Ok(()),
            },
            "Parents" => match record.parents.get(index) {
                Some(p) => validate_parent_field(p, field),
                None => Ok(()),
            },
            "PreviousAcademics" => match record.previous_academics.get(index) {
                Some(a) => validate_academic_field(a, field),
                None => Ok(()),
            },
            "Awards" => match record.awards.get(index) {
                Some(a) => validate_award_field(a, field),
                None => Ok(()),
            },
            "Files" => match record.files.get(index) {
                Some(f) => validate_file_field(f, field),
                None => Ok(()),
            },
            _ => Ok(()),
        };
    }
    if let Some(field) = path.strip_prefix("Enrollment.") {
        return validate_enrollment_field(&record.enrollment, field);
    }
    if let Some(field) = path.strip_prefix("Financial.") {
        return validate_financial_field(&record.financial, field);
    }
    validate_scalar_field(record, path)
}

fn validate_scalar_field(record: &StudentRecord, path: &str) -> Result<(), String> {
    match path {
        "FirstName" => required(&record.first_name, "First name"),
        "LastName" => required(&record.last_name, "Last name"),
        "DateOfBirth" => required(&record.date_of_birth, "Date of birth"),
        "NationalityId" => required_id(record.nationality_id, "Nationality"),
        "CitizenshipNumber" => required(&record.citizenship_number, "Citizenship number"),
        "CitizenshipIssueDate" => required(&record.citizenship_issue_date, "Citizenship issue date"),
        "CitizenshipIssueDistrict" => {
            required(&record.citizenship_issue_district, "Citizenship issue district")
        }
        "Email" => required_email(&record.email, "Email"),
        "AlternateEmail" => optional_email(&record.alternate_email, "Alternate email"),
        "PrimaryMobile" => required(&record.primary_mobile, "Primary mobile"),
        "EmergencyContactName" => required(&record.emergency_contact_name, "Emergency contact name"),
        "EmergencyContactRelation" => {
            required(&record.emergency_contact_relation, "Emergency contact relation")
        }
        "EmergencyContactNumber" => {
            required(&record.emergency_contact_number, "Emergency contact number")
        }
        "Gender" => required_choice(&record.gender, "Gender", Gender::is_valid),
        "EthnicityCaste" => required(&record.ethnicity_caste, "Ethnicity/caste"),
        "DisabilityStatusId" => required_id(record.disability_status_id, "Disability status"),
        "ResidenceType" => {
            required_choice(&record.residence_type, "Residence type", ResidenceType::is_valid)
        }
        "TransportationMethod" => optional_choice(
            &record.transportation_method,
            "Transportation method",
            TransportationType::is_valid,
        ),
        "Place" => required(&record.place, "Place"),
        "DeclarationAccepted" => {
            if record.declaration_accepted {
                Ok(())
            } else {
                Err("You must accept the declaration".to_string())
            }
        }
        _ => Ok(()),
    }
}

fn validate_address_field(address: &Address, field: &str) -> Result<(), String> {
    match field {
        "AddressType" => required_choice(&address.address_type, "Address type", AddressType::is_valid),
        "ProvinceId" => required_id(address.province_id, "Province"),
        "DistrictId" => required_id(address.district_id, "District"),
        "MunicipalityId" => required_id(address.municipality_id, "Municipality"),
        "WardNumber" => required(&address.ward_number, "Ward number"),
        _ => Ok(()),
    }
}

fn validate_parent_field(parent: &Parent, field: &str) -> Result<(), String> {
    match field {
        "ParentType" => required_choice(&parent.parent_type, "Parent type", ParentType::is_valid),
        "FullName" => required(&parent.full_name, "Full name"),
        "MobileNumber" => required(&parent.mobile_number, "Mobile number"),
        "Email" => optional_email(&parent.email, "Parent email"),
        _ => Ok(()),
    }
}

fn validate_academic_field(academic: &AcademicRecord, field: &str) -> Result<(), String> {
    match field {
        "Qualification" => required(&academic.qualification, "Qualification"),
        "BoardUniversity" => required(&academic.board_university, "Board/university"),
        "Institution" => required(&academic.institution, "Institution"),
        "PassedYear" => required_year(academic.passed_year, "Passed year"),
        "DivisionGPA" => required(&academic.division_gpa, "Division/GPA"),
        _ => Ok(()),
    }
}

fn validate_award_field(award: &Award, field: &str) -> Result<(), String> {
    match field {
        "TitleOfAward" => required(&award.title_of_award, "Title of award"),
        _ => Ok(()),
    }
}

fn validate_file_field(file: &UploadedFile, field: &str) -> Result<(), String> {
    match field {
        "FileType" => required(&file.file_type, "File type"),
        _ => Ok(()),
    }
}

fn validate_enrollment_field(enrollment: &Enrollment, field: &str) -> Result<(), String> {
    match field {
        "Faculty" => required(&enrollment.faculty, "Faculty"),
        "Program" => required(&enrollment.program, "Program"),
        "CourseLevel" => required(&enrollment.course_level, "Course level"),
        "AcademicYear" => required(&enrollment.academic_year, "Academic year"),
        "SemesterClass" => required(&enrollment.semester_class, "Semester/class"),
        "RollNumber" => required(&enrollment.roll_number, "Roll number"),
        "RegistrationNumber" => required(&enrollment.registration_number, "Registration number"),
        "EnrollDate" => required(&enrollment.enroll_date, "Enroll date"),
        "AcademicStatus" => required_choice(
            &enrollment.academic_status,
            "Academic status",
            AcademicStatus::is_valid,
        ),
        _ => Ok(()),
    }
}

fn validate_financial_field(financial: &Financial, field: &str) -> Result<(), String> {
    match field {
        "FeeCategory" => required_choice(&financial.fee_category, "Fee category", FeeCategory::is_valid),
        "AccountHolderName" => required(&financial.account_holder_name, "Account holder name"),
        "BankName" => required(&financial.bank_name, "Bank name"),
        "AccountNumber" => required(&financial.account_number, "Account number"),
        "Branch" => required(&financial.branch, "Branch"),
        // Scholarship fields are conditionally required; that is a
        // whole-record invariant, not an atomic rule.
        _ => Ok(()),
    }
}

// --- whole-record validation ----------------------------------------------

/// All atomic rules over every in-scope path, plus the invariants that
/// span fields: declaration accepted, at least one parent, at least one
/// academic record, and the scholarship-conditional requirement.
pub fn validate_record(record: &StudentRecord) -> ValidationResult {
    let mut errors = ValidationErrors::new();

    for path in wizard::record_field_paths(record) {
        if let Err(message) = validate_field(record, &path) {
            errors.insert(path, message);
        }
    }

    if !record.declaration_accepted {
        errors.insert("DeclarationAccepted", "You must accept the declaration");
    }
    if !record.parents.iter().any(|p| !p.is_blank()) {
        errors.insert("Parents", "At least one parent is required");
    }
    if !record.previous_academics.iter().any(|a| !a.is_blank()) {
        errors.insert("PreviousAcademics", "At least one academic record is required");
    }
    if record.financial.fee_category == FeeCategory::Scholarship.as_str() {
        if record.financial.scholarship_type.trim().is_empty() {
            errors.insert(
                "Financial.ScholarshipType",
                "Scholarship type is required for the scholarship fee category",
            );
        }
        if record.financial.scholarship_provider.trim().is_empty() {
            errors.insert(
                "Financial.ScholarshipProvider",
                "Scholarship provider is required for the scholarship fee category",
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_record() -> StudentRecord {
        let mut r = StudentRecord::new_registration();
        r.first_name = "Sita".into();
        r.last_name = "Sharma".into();
        r.date_of_birth = "2003-04-12".into();
        r.nationality_id = Some(1);
        r.citizenship_number = "12-34-56".into();
        r.citizenship_issue_date = "2019-01-01".into();
        r.citizenship_issue_district = "Kaski".into();
        r.email = "sita@example.com".into();
        r.primary_mobile = "9800000000".into();
        r.emergency_contact_name = "Gita Sharma".into();
        r.emergency_contact_relation = "Mother".into();
        r.emergency_contact_number = "9811111111".into();
        r.gender = "Female".into();
        r.ethnicity_caste = "Brahmin".into();
        r.disability_status_id = Some(1);
        r.residence_type = "DayScholar".into();
        for address in &mut r.addresses {
            address.province_id = Some(3);
            address.district_id = Some(27);
            address.municipality_id = Some(301);
            address.ward_number = "12".into();
        }
        r.parents[0].full_name = "Gita Sharma".into();
        r.parents[0].mobile_number = "9811111111".into();
        r.previous_academics[0] = AcademicRecord {
            qualification: "SEE".into(),
            board_university: "NEB".into(),
            institution: "ABC School".into(),
            passed_year: Some(2018),
            division_gpa: "3.6".into(),
            ..AcademicRecord::default()
        };
        r.enrollment = Enrollment {
            faculty: "Science".into(),
            program: "BSc".into(),
            course_level: "Bachelor".into(),
            academic_year: "2024".into(),
            semester_class: "1".into(),
            roll_number: "42".into(),
            registration_number: "REG-42".into(),
            enroll_date: "2024-06-01".into(),
            academic_status: "Active".into(),
            ..Enrollment::default()
        };
        r.financial = Financial {
            fee_category: "Regular".into(),
            account_holder_name: "Sita Sharma".into(),
            bank_name: "NIC".into(),
            account_number: "00123".into(),
            branch: "Pokhara".into(),
            ..Financial::default()
        };
        r.declaration_accepted = true;
        r.place = "Pokhara".into();
        r
    }

    #[test]
    fn coerce_treats_empty_and_garbage_as_absent() {
        assert_eq!(coerce_id(""), None);
        assert_eq!(coerce_id("  "), None);
        assert_eq!(coerce_id("abc"), None);
        assert_eq!(coerce_id("7"), Some(7));
        assert_eq!(coerce_amount(""), None);
        assert_eq!(coerce_amount("1200.5"), Some(1200.5));
    }

    #[test]
    fn zero_id_is_not_valid() {
        let mut r = StudentRecord::new_registration();
        r.nationality_id = Some(0);
        assert!(validate_field(&r, "NationalityId").is_err());
    }

    #[test]
    fn atomic_rules_by_path() {
        let r = filled_record();
        assert!(validate_field(&r, "FirstName").is_ok());
        assert!(validate_field(&r, "Addresses[0].ProvinceId").is_ok());
        assert!(validate_field(&r, "Enrollment.Faculty").is_ok());

        let mut bad = r.clone();
        bad.email = "not-an-email".into();
        let err = validate_field(&bad, "Email").unwrap_err();
        assert!(err.contains("valid email"));

        bad.gender = "Robot".into();
        let err = validate_field(&bad, "Gender").unwrap_err();
        assert!(err.contains("invalid choice"));
    }

    #[test]
    fn passed_year_range() {
        let mut r = filled_record();
        r.previous_academics[0].passed_year = Some(1850);
        assert!(validate_field(&r, "PreviousAcademics[0].PassedYear").is_err());
        r.previous_academics[0].passed_year = None;
        assert!(validate_field(&r, "PreviousAcademics[0].PassedYear").is_err());
    }

    #[test]
    fn whole_record_passes_when_filled() {
        assert_eq!(validate_record(&filled_record()), Ok(()));
    }

    #[test]
    fn declaration_must_be_accepted() {
        let mut r = filled_record();
        r.declaration_accepted = false;
        let errors = validate_record(&r).unwrap_err();
        assert!(errors.get("DeclarationAccepted").is_some());
    }

    #[test]
    fn at_least_one_parent_and_academic() {
        let mut r = filled_record();
        r.parents = vec![Parent::default()];
        r.previous_academics.clear();
        let errors = validate_record(&r).unwrap_err();
        assert_eq!(
            errors.get("Parents"),
            Some("At least one parent is required")
        );
        assert!(errors.get("PreviousAcademics").is_some());
    }

    #[test]
    fn scholarship_conditional_requirement() {
        let mut r = filled_record();
        r.financial.fee_category = "Scholarship".into();
        let errors = validate_record(&r).unwrap_err();
        assert!(errors.get("Financial.ScholarshipType").is_some());
        assert!(errors.get("Financial.ScholarshipProvider").is_some());
        // Amount stays optional even under Scholarship.
        assert!(errors.get("Financial.ScholarshipAmount").is_none());

        r.financial.scholarship_type = "Merit".into();
        r.financial.scholarship_provider = "University".into();
        assert_eq!(validate_record(&r), Ok(()));

        // Non-scholarship categories never require the scholarship fields.
        r.financial.fee_category = "Regular".into();
        r.financial.scholarship_type.clear();
        r.financial.scholarship_provider.clear();
        assert_eq!(validate_record(&r), Ok(()));
    }
}
