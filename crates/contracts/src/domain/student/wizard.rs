//! Step orchestration for the registration wizard.
//!
//! Ten strictly sequential steps, each owning a fixed slice of the record's
//! field paths. `try_next` gates on the current step's atomic rules only;
//! retreating is always allowed; whole-record invariants run at submit time
//! (see [`super::validate::validate_record`]).

use super::record::StudentRecord;
use super::validate::{validate_field, ValidationErrors, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    PersonalInfo,
    Address,
    Parents,
    Enrollment,
    Financials,
    Academics,
    Documents,
    Awards,
    Activities,
    Declaration,
}

impl Step {
    pub const ALL: &'static [Step] = &[
        Step::PersonalInfo,
        Step::Address,
        Step::Parents,
        Step::Enrollment,
        Step::Financials,
        Step::Academics,
        Step::Documents,
        Step::Awards,
        Step::Activities,
        Step::Declaration,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Step::PersonalInfo => "Personal Info",
            Step::Address => "Address",
            Step::Parents => "Parents",
            Step::Enrollment => "Enrollment",
            Step::Financials => "Financials",
            Step::Academics => "Academics",
            Step::Documents => "Documents",
            Step::Awards => "Awards",
            Step::Activities => "Activities",
            Step::Declaration => "Declaration",
        }
    }
}

const PERSONAL_FIELDS: &[&str] = &[
    "FirstName",
    "MiddleName",
    "LastName",
    "DateOfBirth",
    "PlaceOfBirth",
    "NationalityId",
    "CitizenshipNumber",
    "CitizenshipIssueDate",
    "CitizenshipIssueDistrict",
    "Email",
    "AlternateEmail",
    "PrimaryMobile",
    "SecondaryMobile",
    "EmergencyContactName",
    "EmergencyContactRelation",
    "EmergencyContactNumber",
    "Gender",
    "BloodGroupId",
    "MaritalStatusId",
    "Religion",
    "EthnicityCaste",
    "DisabilityStatusId",
    "DisabilityTypeSpecify",
    "DisabilityPercentage",
    "AnnualFamilyIncome",
    "ResidenceType",
    "TransportationMethod",
];

const ADDRESS_FIELDS: &[&str] = &[
    "AddressType",
    "ProvinceId",
    "DistrictId",
    "MunicipalityId",
    "WardNumber",
    "Street",
    "HouseNumber",
];

const PARENT_FIELDS: &[&str] = &["ParentType", "FullName", "MobileNumber", "Email"];

const ACADEMIC_FIELDS: &[&str] = &[
    "Qualification",
    "BoardUniversity",
    "Institution",
    "PassedYear",
    "DivisionGPA",
];

const ENROLLMENT_FIELDS: &[&str] = &[
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

const FINANCIAL_FIELDS: &[&str] = &[
    "FeeCategory",
    "AccountHolderName",
    "BankName",
    "AccountNumber",
    "Branch",
];

fn indexed(collection: &str, index: usize, fields: &[&str], out: &mut Vec<String>) {
    for field in fields {
        out.push(format!("{}[{}].{}", collection, index, field));
    }
}

/// The concrete field paths a step owns for the record's current shape.
/// Array-owned steps include only touched (non-blank) entries; an empty
/// unsubmitted row is not validated. The temporary address is excluded while
/// "same as permanent" is set.
pub fn step_field_paths(record: &StudentRecord, step: Step) -> Vec<String> {
    let mut paths = Vec::new();
    match step {
        Step::PersonalInfo => {
            paths.extend(PERSONAL_FIELDS.iter().map(|f| f.to_string()));
        }
        Step::Address => {
            for (i, _) in record.addresses.iter().enumerate() {
                if i == 1 && record.addresses_same {
                    continue;
                }
                indexed("Addresses", i, ADDRESS_FIELDS, &mut paths);
            }
        }
        Step::Parents => {
            for (i, parent) in record.parents.iter().enumerate() {
                if !parent.is_blank() {
                    indexed("Parents", i, PARENT_FIELDS, &mut paths);
                }
            }
        }
        Step::Enrollment => {
            paths.extend(ENROLLMENT_FIELDS.iter().map(|f| format!("Enrollment.{}", f)));
        }
        Step::Financials => {
            paths.extend(FINANCIAL_FIELDS.iter().map(|f| format!("Financial.{}", f)));
        }
        Step::Academics => {
            for (i, academic) in record.previous_academics.iter().enumerate() {
                if !academic.is_blank() {
                    indexed("PreviousAcademics", i, ACADEMIC_FIELDS, &mut paths);
                }
            }
        }
        Step::Documents => {
            for (i, file) in record.files.iter().enumerate() {
                if !file.is_blank() {
                    paths.push(format!("Files[{}].FileType", i));
                }
            }
        }
        Step::Awards => {
            for (i, award) in record.awards.iter().enumerate() {
                if !award.is_blank() {
                    paths.push(format!("Awards[{}].TitleOfAward", i));
                }
            }
        }
        Step::Activities => {
            paths.push("ExtracurricularInterests".to_string());
        }
        Step::Declaration => {
            paths.push("DeclarationAccepted".to_string());
            paths.push("Place".to_string());
            paths.push("DateOfApplication".to_string());
        }
    }
    paths
}

/// Every in-scope path across all steps; the whole-record validator walks this.
pub fn record_field_paths(record: &StudentRecord) -> Vec<String> {
    Step::ALL
        .iter()
        .flat_map(|step| step_field_paths(record, *step))
        .collect()
}

/// Run the atomic rules of one step against the record.
pub fn validate_step(record: &StudentRecord, step: Step) -> ValidationResult {
    let mut errors = ValidationErrors::new();
    for path in step_field_paths(record, step) {
        if let Err(message) = validate_field(record, &path) {
            errors.insert(path, message);
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// The wizard's position. Steps are strictly sequential: no jumping,
/// forward movement gated on the current step, backward always allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wizard {
    current: usize,
}

impl Wizard {
    pub fn new() -> Self {
        Self { current: 0 }
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn step(&self) -> Step {
        Step::ALL[self.current]
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == Step::ALL.len() - 1
    }

    /// Validate the current step and advance on success. On failure the
    /// position does not move and all failing paths are reported.
    pub fn try_next(&mut self, record: &StudentRecord) -> ValidationResult {
        validate_step(record, self.step())?;
        self.current = (self.current + 1).min(Step::ALL.len() - 1);
        Ok(())
    }

    /// Unconditional retreat, capped at the first step.
    pub fn prev(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::student::record::Parent;

    #[test]
    fn next_blocks_on_missing_required_fields() {
        let record = StudentRecord::new_registration();
        let mut wizard = Wizard::new();
        let errors = wizard.try_next(&record).unwrap_err();
        assert_eq!(wizard.index(), 0);
        assert!(errors.get("FirstName").is_some());
        assert!(errors.get("Gender").is_some());
        // Optional fields never block.
        assert!(errors.get("MiddleName").is_none());
        assert!(errors.get("Religion").is_none());
    }

    #[test]
    fn next_advances_one_step_at_a_time() {
        let mut record = StudentRecord::new_registration();
        record.first_name = "Ram".into();
        record.last_name = "Thapa".into();
        record.date_of_birth = "2002-01-01".into();
        record.nationality_id = Some(1);
        record.citizenship_number = "11-22".into();
        record.citizenship_issue_date = "2018-05-05".into();
        record.citizenship_issue_district = "Kaski".into();
        record.email = "ram@example.com".into();
        record.primary_mobile = "9800000001".into();
        record.emergency_contact_name = "Hari".into();
        record.emergency_contact_relation = "Uncle".into();
        record.emergency_contact_number = "9800000002".into();
        record.gender = "Male".into();
        record.ethnicity_caste = "Magar".into();
        record.disability_status_id = Some(1);
        record.residence_type = "Hosteller".into();

        let mut wizard = Wizard::new();
        assert!(wizard.try_next(&record).is_ok());
        assert_eq!(wizard.step(), Step::Address);
    }

    #[test]
    fn address_step_requires_full_hierarchy() {
        let mut record = StudentRecord::new_registration();
        record.addresses[0].province_id = Some(3);
        // District and municipality still unset.
        let errors = validate_step(&record, Step::Address).unwrap_err();
        assert!(errors.get("Addresses[0].ProvinceId").is_none());
        assert!(errors.get("Addresses[0].DistrictId").is_some());
        assert!(errors.get("Addresses[0].MunicipalityId").is_some());
        assert!(errors.get("Addresses[1].ProvinceId").is_some());
    }

    #[test]
    fn same_as_permanent_skips_temporary_address() {
        let mut record = StudentRecord::new_registration();
        record.addresses[0].province_id = Some(3);
        record.addresses[0].district_id = Some(27);
        record.addresses[0].municipality_id = Some(301);
        record.addresses[0].ward_number = "4".into();
        record.addresses_same = true;
        assert_eq!(validate_step(&record, Step::Address), Ok(()));
    }

    #[test]
    fn blank_array_rows_are_not_validated_at_step_time() {
        let record = StudentRecord::new_registration();
        // The seeded parent and academic rows are untouched.
        assert_eq!(validate_step(&record, Step::Parents), Ok(()));
        assert_eq!(validate_step(&record, Step::Academics), Ok(()));
    }

    #[test]
    fn touched_parent_row_is_validated() {
        let mut record = StudentRecord::new_registration();
        record.parents[0].full_name = "Gita".into();
        let errors = validate_step(&record, Step::Parents).unwrap_err();
        assert!(errors.get("Parents[0].MobileNumber").is_some());

        record.parents.push(Parent::default());
        record.parents[1].email = "bad-email".into();
        let errors = validate_step(&record, Step::Parents).unwrap_err();
        assert!(errors.get("Parents[1].Email").is_some());
    }

    #[test]
    fn prev_is_unconditional_and_capped() {
        let mut wizard = Wizard::new();
        wizard.prev();
        assert_eq!(wizard.index(), 0);
        wizard.current = 3;
        wizard.prev();
        assert_eq!(wizard.index(), 2);
    }

    #[test]
    fn declaration_step_owns_the_declaration() {
        let mut record = StudentRecord::new_registration();
        record.place = "Pokhara".into();
        let errors = validate_step(&record, Step::Declaration).unwrap_err();
        assert_eq!(
            errors.get("DeclarationAccepted"),
            Some("You must accept the declaration")
        );
        record.declaration_accepted = true;
        assert_eq!(validate_step(&record, Step::Declaration), Ok(()));
    }
}
