use super::{text_input, text_value, RegistrationVm};
use crate::shared::components::ui::{Checkbox, Input};
use crate::shared::date_utils;
use leptos::prelude::*;

#[component]
pub fn DeclarationStep(vm: RegistrationVm) -> impl IntoView {
    // Seed the application date with today on first entry.
    if vm
        .record
        .with_untracked(|r| r.date_of_application.is_empty())
    {
        vm.record
            .update(|r| r.date_of_application = date_utils::today());
    }

    let accepted = Signal::derive(move || vm.record.with(|r| r.declaration_accepted));

    view! {
        <div class="form__section">
            <p class="form__declaration-text">
                "I hereby declare that the information provided in this form is true, \
                 complete and accurate to the best of my knowledge."
            </p>
            <Checkbox
                label="I accept the declaration"
                checked=accepted
                on_change=Callback::new(move |checked: bool| {
                    vm.record.update(|r| r.declaration_accepted = checked);
                    vm.touch("DeclarationAccepted");
                })
                error=vm.field_error("DeclarationAccepted")
            />
            <div class="form__grid">
                <Input
                    label="Place"
                    value=text_value(vm, |r| &r.place)
                    on_input=text_input(vm, "Place", |r, v| r.place = v)
                    error=vm.field_error("Place")
                />
                <Input
                    label="Date of application"
                    input_type="date"
                    value=text_value(vm, |r| &r.date_of_application)
                    on_input=text_input(vm, "DateOfApplication", |r, v| {
                        r.date_of_application = v
                    })
                    error=vm.field_error("DateOfApplication")
                />
            </div>
        </div>
    }
}
