use super::model;
use crate::shared::date_utils::format_date;
use contracts::domain::student::record::StudentRecord;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

fn field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="details__field">
            <span class="details__label">{label}</span>
            <span class="details__value">{if value.is_empty() { "-".to_string() } else { value }}</span>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn StudentDetails() -> impl IntoView {
    let params = use_params_map();
    let record = RwSignal::new(None::<StudentRecord>);
    let error = RwSignal::new(None::<String>);

    let id = params.with_untracked(|p| {
        p.get("id").and_then(|raw| raw.parse::<i64>().ok())
    });
    match id {
        Some(id) => wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(id).await {
                Ok(r) => record.set(Some(r)),
                Err(e) => error.set(Some(e)),
            }
        }),
        None => error.set(Some("Invalid student id".to_string())),
    }

    view! {
        <div class="page student-details">
            <div class="page__header">
                <h1 class="page__title">"Student"</h1>
                <A href="/students">"Back to list"</A>
                {move || id.map(|id| view! { <A href=format!("/students/{}/edit", id)>"Edit"</A> })}
            </div>

            {move || error.get().map(|e| view! { <p class="page__error">{e}</p> })}

            {move || record.get().map(|r| view! {
                <div class="details">
                    <h2>"Personal information"</h2>
                    <div class="details__grid">
                        {field("Name", format!("{} {} {}", r.first_name, r.middle_name, r.last_name))}
                        {field("Date of birth", format_date(&r.date_of_birth))}
                        {field("Place of birth", r.place_of_birth.clone())}
                        {field("Gender", r.gender.clone())}
                        {field("Citizenship number", r.citizenship_number.clone())}
                        {field("Citizenship issued", format_date(&r.citizenship_issue_date))}
                        {field("Email", r.email.clone())}
                        {field("Primary mobile", r.primary_mobile.clone())}
                        {field("Emergency contact", format!(
                            "{} ({})",
                            r.emergency_contact_name, r.emergency_contact_number
                        ))}
                        {field("Religion", r.religion.clone())}
                        {field("Residence type", r.residence_type.clone())}
                        {field("Transportation", r.transportation_method.clone())}
                    </div>

                    <h2>"Addresses"</h2>
                    {r.addresses.iter().map(|a| view! {
                        <div class="details__grid">
                            {field("Type", a.address_type.clone())}
                            {field("Ward", a.ward_number.clone())}
                            {field("Street", a.street.clone())}
                            {field("House number", a.house_number.clone())}
                        </div>
                    }).collect_view()}

                    <h2>"Parents / guardians"</h2>
                    {r.parents.iter().map(|p| view! {
                        <div class="details__grid">
                            {field("Type", p.parent_type.clone())}
                            {field("Name", p.full_name.clone())}
                            {field("Mobile", p.mobile_number.clone())}
                            {field("Email", p.email.clone())}
                        </div>
                    }).collect_view()}

                    <h2>"Enrollment"</h2>
                    <div class="details__grid">
                        {field("Faculty", r.enrollment.faculty.clone())}
                        {field("Program", r.enrollment.program.clone())}
                        {field("Course level", r.enrollment.course_level.clone())}
                        {field("Academic year", r.enrollment.academic_year.clone())}
                        {field("Roll number", r.enrollment.roll_number.clone())}
                        {field("Registration number", r.enrollment.registration_number.clone())}
                        {field("Enroll date", format_date(&r.enrollment.enroll_date))}
                        {field("Status", r.enrollment.academic_status.clone())}
                    </div>

                    <h2>"Financial"</h2>
                    <div class="details__grid">
                        {field("Fee category", r.financial.fee_category.clone())}
                        {field("Bank", r.financial.bank_name.clone())}
                        {field("Account number", r.financial.account_number.clone())}
                    </div>

                    <h2>"Academic history"</h2>
                    {r.previous_academics.iter().map(|a| view! {
                        <div class="details__grid">
                            {field("Qualification", a.qualification.clone())}
                            {field("Board / university", a.board_university.clone())}
                            {field("Institution", a.institution.clone())}
                            {field("Passed year", a.passed_year.map(|y| y.to_string()).unwrap_or_default())}
                            {field("Division / GPA", a.division_gpa.clone())}
                        </div>
                    }).collect_view()}

                    <h2>"Documents"</h2>
                    {r.files.iter().map(|f| view! {
                        <div class="details__grid">
                            {field("Type", f.file_type.clone())}
                            {field("Path", f.file_path.clone().unwrap_or_default())}
                        </div>
                    }).collect_view()}

                    <h2>"Declaration"</h2>
                    <div class="details__grid">
                        {field("Accepted", if r.declaration_accepted { "Yes" } else { "No" }.to_string())}
                        {field("Place", r.place.clone())}
                        {field("Date of application", format_date(&r.date_of_application))}
                    </div>
                </div>
            })}
        </div>
    }
}
