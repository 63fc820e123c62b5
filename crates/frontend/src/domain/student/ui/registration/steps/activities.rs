use super::{text_input, text_value, RegistrationVm};
use crate::shared::components::ui::Textarea;
use leptos::prelude::*;

#[component]
pub fn ActivitiesStep(vm: RegistrationVm) -> impl IntoView {
    view! {
        <div class="form__section">
            <Textarea
                label="Extracurricular interests"
                placeholder="Sports, clubs, volunteering..."
                value=text_value(vm, |r| &r.extracurricular_interests)
                on_input=text_input(vm, "ExtracurricularInterests", |r, v| {
                    r.extracurricular_interests = v
                })
                rows=5
                error=vm.field_error("ExtracurricularInterests")
            />
        </div>
    }
}
