use super::{text_input, text_value, RegistrationVm};
use crate::shared::components::ui::{Input, Select};
use contracts::domain::student::enums::AcademicStatus;
use leptos::prelude::*;

#[component]
pub fn EnrollmentStep(vm: RegistrationVm) -> impl IntoView {
    view! {
        <div class="form__grid">
            <Input
                label="Faculty"
                value=text_value(vm, |r| &r.enrollment.faculty)
                on_input=text_input(vm, "Enrollment.Faculty", |r, v| r.enrollment.faculty = v)
                error=vm.field_error("Enrollment.Faculty")
            />
            <Input
                label="Program"
                value=text_value(vm, |r| &r.enrollment.program)
                on_input=text_input(vm, "Enrollment.Program", |r, v| r.enrollment.program = v)
                error=vm.field_error("Enrollment.Program")
            />
            <Input
                label="Course level"
                value=text_value(vm, |r| &r.enrollment.course_level)
                on_input=text_input(vm, "Enrollment.CourseLevel", |r, v| {
                    r.enrollment.course_level = v
                })
                error=vm.field_error("Enrollment.CourseLevel")
            />
            <Input
                label="Academic year"
                value=text_value(vm, |r| &r.enrollment.academic_year)
                on_input=text_input(vm, "Enrollment.AcademicYear", |r, v| {
                    r.enrollment.academic_year = v
                })
                error=vm.field_error("Enrollment.AcademicYear")
            />
            <Input
                label="Semester / class"
                value=text_value(vm, |r| &r.enrollment.semester_class)
                on_input=text_input(vm, "Enrollment.SemesterClass", |r, v| {
                    r.enrollment.semester_class = v
                })
                error=vm.field_error("Enrollment.SemesterClass")
            />
            <Input
                label="Section"
                value=text_value(vm, |r| &r.enrollment.section)
                on_input=text_input(vm, "Enrollment.Section", |r, v| r.enrollment.section = v)
                error=vm.field_error("Enrollment.Section")
            />
            <Input
                label="Roll number"
                value=text_value(vm, |r| &r.enrollment.roll_number)
                on_input=text_input(vm, "Enrollment.RollNumber", |r, v| {
                    r.enrollment.roll_number = v
                })
                error=vm.field_error("Enrollment.RollNumber")
            />
            <Input
                label="Registration number"
                value=text_value(vm, |r| &r.enrollment.registration_number)
                on_input=text_input(vm, "Enrollment.RegistrationNumber", |r, v| {
                    r.enrollment.registration_number = v
                })
                error=vm.field_error("Enrollment.RegistrationNumber")
            />
            <Input
                label="Enroll date"
                input_type="date"
                value=text_value(vm, |r| &r.enrollment.enroll_date)
                on_input=text_input(vm, "Enrollment.EnrollDate", |r, v| {
                    r.enrollment.enroll_date = v
                })
                error=vm.field_error("Enrollment.EnrollDate")
            />
            <Select
                label="Academic status"
                placeholder="Select status"
                value=text_value(vm, |r| &r.enrollment.academic_status)
                on_change=text_input(vm, "Enrollment.AcademicStatus", |r, v| {
                    r.enrollment.academic_status = v
                })
                options=AcademicStatus::options()
                error=vm.field_error("Enrollment.AcademicStatus")
            />
        </div>
    }
}
