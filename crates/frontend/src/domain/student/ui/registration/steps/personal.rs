use super::{amount_input, amount_value, id_input, id_value, lookup_options, text_input, text_value};
use super::RegistrationVm;
use crate::shared::components::ui::{Input, Select};
use contracts::domain::student::enums::{Gender, ResidenceType, TransportationType};
use leptos::prelude::*;

#[component]
pub fn PersonalInfoStep(vm: RegistrationVm) -> impl IntoView {
    view! {
        <div class="form__grid">
            <Input
                label="First name"
                value=text_value(vm, |r| &r.first_name)
                on_input=text_input(vm, "FirstName", |r, v| r.first_name = v)
                error=vm.field_error("FirstName")
            />
            <Input
                label="Middle name"
                value=text_value(vm, |r| &r.middle_name)
                on_input=text_input(vm, "MiddleName", |r, v| r.middle_name = v)
                error=vm.field_error("MiddleName")
            />
            <Input
                label="Last name"
                value=text_value(vm, |r| &r.last_name)
                on_input=text_input(vm, "LastName", |r, v| r.last_name = v)
                error=vm.field_error("LastName")
            />
            <Input
                label="Date of birth"
                input_type="date"
                value=text_value(vm, |r| &r.date_of_birth)
                on_input=text_input(vm, "DateOfBirth", |r, v| r.date_of_birth = v)
                error=vm.field_error("DateOfBirth")
            />
            <Input
                label="Place of birth"
                value=text_value(vm, |r| &r.place_of_birth)
                on_input=text_input(vm, "PlaceOfBirth", |r, v| r.place_of_birth = v)
                error=vm.field_error("PlaceOfBirth")
            />
            <Select
                label="Nationality"
                placeholder="Select nationality"
                value=id_value(vm, |r| r.nationality_id)
                on_change=id_input(vm, "NationalityId", |r, v| r.nationality_id = v)
                options=lookup_options(vm.nationalities)
                error=vm.field_error("NationalityId")
            />
            <Input
                label="Citizenship number"
                value=text_value(vm, |r| &r.citizenship_number)
                on_input=text_input(vm, "CitizenshipNumber", |r, v| r.citizenship_number = v)
                error=vm.field_error("CitizenshipNumber")
            />
            <Input
                label="Citizenship issue date"
                input_type="date"
                value=text_value(vm, |r| &r.citizenship_issue_date)
                on_input=text_input(vm, "CitizenshipIssueDate", |r, v| {
                    r.citizenship_issue_date = v
                })
                error=vm.field_error("CitizenshipIssueDate")
            />
            <Input
                label="Citizenship issue district"
                value=text_value(vm, |r| &r.citizenship_issue_district)
                on_input=text_input(vm, "CitizenshipIssueDistrict", |r, v| {
                    r.citizenship_issue_district = v
                })
                error=vm.field_error("CitizenshipIssueDistrict")
            />

            <Input
                label="Email"
                input_type="email"
                value=text_value(vm, |r| &r.email)
                on_input=text_input(vm, "Email", |r, v| r.email = v)
                error=vm.field_error("Email")
            />
            <Input
                label="Alternate email"
                input_type="email"
                value=text_value(vm, |r| &r.alternate_email)
                on_input=text_input(vm, "AlternateEmail", |r, v| r.alternate_email = v)
                error=vm.field_error("AlternateEmail")
            />
            <Input
                label="Primary mobile"
                value=text_value(vm, |r| &r.primary_mobile)
                on_input=text_input(vm, "PrimaryMobile", |r, v| r.primary_mobile = v)
                error=vm.field_error("PrimaryMobile")
            />
            <Input
                label="Secondary mobile"
                value=text_value(vm, |r| &r.secondary_mobile)
                on_input=text_input(vm, "SecondaryMobile", |r, v| r.secondary_mobile = v)
                error=vm.field_error("SecondaryMobile")
            />

            <Input
                label="Emergency contact name"
                value=text_value(vm, |r| &r.emergency_contact_name)
                on_input=text_input(vm, "EmergencyContactName", |r, v| {
                    r.emergency_contact_name = v
                })
                error=vm.field_error("EmergencyContactName")
            />
            <Input
                label="Emergency contact relation"
                value=text_value(vm, |r| &r.emergency_contact_relation)
                on_input=text_input(vm, "EmergencyContactRelation", |r, v| {
                    r.emergency_contact_relation = v
                })
                error=vm.field_error("EmergencyContactRelation")
            />
            <Input
                label="Emergency contact number"
                value=text_value(vm, |r| &r.emergency_contact_number)
                on_input=text_input(vm, "EmergencyContactNumber", |r, v| {
                    r.emergency_contact_number = v
                })
                error=vm.field_error("EmergencyContactNumber")
            />

            <Select
                label="Gender"
                placeholder="Select gender"
                value=text_value(vm, |r| &r.gender)
                on_change=text_input(vm, "Gender", |r, v| r.gender = v)
                options=Gender::options()
                error=vm.field_error("Gender")
            />
            <Select
                label="Blood group"
                placeholder="Select blood group"
                value=id_value(vm, |r| r.blood_group_id)
                on_change=id_input(vm, "BloodGroupId", |r, v| r.blood_group_id = v)
                options=lookup_options(vm.blood_groups)
                error=vm.field_error("BloodGroupId")
            />
            <Select
                label="Marital status"
                placeholder="Select marital status"
                value=id_value(vm, |r| r.marital_status_id)
                on_change=id_input(vm, "MaritalStatusId", |r, v| r.marital_status_id = v)
                options=lookup_options(vm.marital_statuses)
                error=vm.field_error("MaritalStatusId")
            />
            <Input
                label="Religion"
                value=text_value(vm, |r| &r.religion)
                on_input=text_input(vm, "Religion", |r, v| r.religion = v)
                error=vm.field_error("Religion")
            />
            <Input
                label="Ethnicity / caste"
                value=text_value(vm, |r| &r.ethnicity_caste)
                on_input=text_input(vm, "EthnicityCaste", |r, v| r.ethnicity_caste = v)
                error=vm.field_error("EthnicityCaste")
            />

            <Select
                label="Disability status"
                placeholder="Select disability status"
                value=id_value(vm, |r| r.disability_status_id)
                on_change=id_input(vm, "DisabilityStatusId", |r, v| r.disability_status_id = v)
                options=lookup_options(vm.disability_statuses)
                error=vm.field_error("DisabilityStatusId")
            />
            <Input
                label="Disability type (specify)"
                value=text_value(vm, |r| &r.disability_type_specify)
                on_input=text_input(vm, "DisabilityTypeSpecify", |r, v| {
                    r.disability_type_specify = v
                })
                error=vm.field_error("DisabilityTypeSpecify")
            />
            <Input
                label="Disability percentage"
                input_type="number"
                value=amount_value(vm, |r| r.disability_percentage)
                on_input=amount_input(vm, "DisabilityPercentage", |r, v| {
                    r.disability_percentage = v
                })
                error=vm.field_error("DisabilityPercentage")
            />

            <Input
                label="Annual family income"
                value=text_value(vm, |r| &r.annual_family_income)
                on_input=text_input(vm, "AnnualFamilyIncome", |r, v| r.annual_family_income = v)
                error=vm.field_error("AnnualFamilyIncome")
            />
            <Select
                label="Residence type"
                placeholder="Select residence type"
                value=text_value(vm, |r| &r.residence_type)
                on_change=text_input(vm, "ResidenceType", |r, v| r.residence_type = v)
                options=ResidenceType::options()
                error=vm.field_error("ResidenceType")
            />
            <Select
                label="Transportation method"
                placeholder="Select transportation method"
                value=text_value(vm, |r| &r.transportation_method)
                on_change=text_input(vm, "TransportationMethod", |r, v| {
                    r.transportation_method = v
                })
                options=TransportationType::options()
                error=vm.field_error("TransportationMethod")
            />
        </div>
    }
}
