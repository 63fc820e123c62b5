use super::RegistrationVm;
use crate::shared::components::ui::{Button, Input, Select};
use contracts::domain::student::enums::ParentType;
use contracts::domain::student::record::Parent;
use leptos::prelude::*;
use uuid::Uuid;

#[component]
pub fn ParentsStep(vm: RegistrationVm) -> impl IntoView {
    view! {
        <div class="form__section">
            <For
                each=move || vm.parent_keys.get()
                key=|key| *key
                children=move |key| view! { <ParentRow vm key /> }
            />
            <Button variant="secondary" on_click=Callback::new(move |_| vm.add_parent())>
                "Add parent / guardian"
            </Button>
        </div>
    }
}

#[component]
fn ParentRow(vm: RegistrationVm, key: Uuid) -> impl IntoView {
    // The row's index shifts as rows are removed; resolve it by key.
    let index = Memo::new(move |_| {
        vm.parent_keys
            .get()
            .iter()
            .position(|k| *k == key)
            .unwrap_or(0)
    });

    let text = move |get: fn(&Parent) -> &str| {
        Signal::derive(move || {
            vm.record.with(|r| {
                r.parents
                    .get(index.get())
                    .map(|p| get(p).to_string())
                    .unwrap_or_default()
            })
        })
    };
    let set_text = move |field: &'static str, set: fn(&mut Parent, String)| {
        Callback::new(move |value: String| {
            let i = index.get_untracked();
            vm.record.update(|r| {
                if let Some(parent) = r.parents.get_mut(i) {
                    set(parent, value);
                }
            });
            vm.touch(&format!("Parents[{}].{}", i, field));
        })
    };
    let error = move |field: &'static str| {
        Signal::derive(move || {
            let path = format!("Parents[{}].{}", index.get(), field);
            vm.errors.with(|e| e.get(&path).map(str::to_string))
        })
    };

    view! {
        <div class="form__row">
            <div class="form__grid">
                <Select
                    label="Parent type"
                    value=text(|p| &p.parent_type)
                    on_change=set_text("ParentType", |p, v| p.parent_type = v)
                    options=ParentType::options()
                    error=error("ParentType")
                />
                <Input
                    label="Full name"
                    value=text(|p| &p.full_name)
                    on_input=set_text("FullName", |p, v| p.full_name = v)
                    error=error("FullName")
                />
                <Input
                    label="Mobile number"
                    value=text(|p| &p.mobile_number)
                    on_input=set_text("MobileNumber", |p, v| p.mobile_number = v)
                    error=error("MobileNumber")
                />
                <Input
                    label="Occupation"
                    value=text(|p| &p.occupation)
                    on_input=set_text("Occupation", |p, v| p.occupation = v)
                />
                <Input
                    label="Designation"
                    value=text(|p| &p.designation)
                    on_input=set_text("Designation", |p, v| p.designation = v)
                />
                <Input
                    label="Organization"
                    value=text(|p| &p.organization)
                    on_input=set_text("Organization", |p, v| p.organization = v)
                />
                <Input
                    label="Email"
                    input_type="email"
                    value=text(|p| &p.email)
                    on_input=set_text("Email", |p, v| p.email = v)
                    error=error("Email")
                />
                <Input
                    label="Relation"
                    value=text(|p| &p.relation)
                    on_input=set_text("Relation", |p, v| p.relation = v)
                />
            </div>
            <Button
                variant="ghost"
                size="sm"
                on_click=Callback::new(move |_| vm.remove_parent(key))
            >
                "Remove"
            </Button>
        </div>
    }
}
