use super::RegistrationVm;
use crate::shared::components::ui::{Button, Input};
use contracts::domain::student::record::AcademicRecord;
use contracts::domain::student::validate::coerce_year;
use leptos::prelude::*;
use uuid::Uuid;

#[component]
pub fn AcademicsStep(vm: RegistrationVm) -> impl IntoView {
    view! {
        <div class="form__section">
            <For
                each=move || vm.academic_keys.get()
                key=|key| *key
                children=move |key| view! { <AcademicRow vm key /> }
            />
            <Button variant="secondary" on_click=Callback::new(move |_| vm.add_academic())>
                "Add academic record"
            </Button>
        </div>
    }
}

#[component]
fn AcademicRow(vm: RegistrationVm, key: Uuid) -> impl IntoView {
    let index = Memo::new(move |_| {
        vm.academic_keys
            .get()
            .iter()
            .position(|k| *k == key)
            .unwrap_or(0)
    });

    let text = move |get: fn(&AcademicRecord) -> &str| {
        Signal::derive(move || {
            vm.record.with(|r| {
                r.previous_academics
                    .get(index.get())
                    .map(|a| get(a).to_string())
                    .unwrap_or_default()
            })
        })
    };
    let set_text = move |field: &'static str, set: fn(&mut AcademicRecord, String)| {
        Callback::new(move |value: String| {
            let i = index.get_untracked();
            vm.record.update(|r| {
                if let Some(academic) = r.previous_academics.get_mut(i) {
                    set(academic, value);
                }
            });
            vm.touch(&format!("PreviousAcademics[{}].{}", i, field));
        })
    };
    let error = move |field: &'static str| {
        Signal::derive(move || {
            let path = format!("PreviousAcademics[{}].{}", index.get(), field);
            vm.errors.with(|e| e.get(&path).map(str::to_string))
        })
    };

    let passed_year = Signal::derive(move || {
        vm.record.with(|r| {
            r.previous_academics
                .get(index.get())
                .and_then(|a| a.passed_year)
                .map(|y| y.to_string())
                .unwrap_or_default()
        })
    });
    let set_passed_year = Callback::new(move |value: String| {
        let i = index.get_untracked();
        vm.record.update(|r| {
            if let Some(academic) = r.previous_academics.get_mut(i) {
                academic.passed_year = coerce_year(&value);
            }
        });
        vm.touch(&format!("PreviousAcademics[{}].PassedYear", i));
    });

    view! {
        <div class="form__row">
            <div class="form__grid">
                <Input
                    label="Qualification"
                    value=text(|a| &a.qualification)
                    on_input=set_text("Qualification", |a, v| a.qualification = v)
                    error=error("Qualification")
                />
                <Input
                    label="Board / university"
                    value=text(|a| &a.board_university)
                    on_input=set_text("BoardUniversity", |a, v| a.board_university = v)
                    error=error("BoardUniversity")
                />
                <Input
                    label="Institution"
                    value=text(|a| &a.institution)
                    on_input=set_text("Institution", |a, v| a.institution = v)
                    error=error("Institution")
                />
                <Input
                    label="Passed year"
                    input_type="number"
                    value=passed_year
                    on_input=set_passed_year
                    error=error("PassedYear")
                />
                <Input
                    label="Division / GPA"
                    value=text(|a| &a.division_gpa)
                    on_input=set_text("DivisionGPA", |a, v| a.division_gpa = v)
                    error=error("DivisionGPA")
                />
            </div>
            <Button
                variant="ghost"
                size="sm"
                on_click=Callback::new(move |_| vm.remove_academic(key))
            >
                "Remove"
            </Button>
        </div>
    }
}
