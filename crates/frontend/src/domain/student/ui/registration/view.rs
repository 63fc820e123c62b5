use super::steps::{
    AcademicsStep, ActivitiesStep, AddressStep, AwardsStep, DeclarationStep, DocumentsStep,
    EnrollmentStep, FinancialStep, ParentsStep, PersonalInfoStep,
};
use super::view_model::RegistrationVm;
use crate::shared::components::ui::Button;
use contracts::domain::student::wizard::Step;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn RegistrationPage() -> impl IntoView {
    let vm = RegistrationVm::new();
    vm.load_reference_data();

    view! {
        <div class="page registration-page">
            <h1 class="page__title">"Student Registration"</h1>
            <Show
                when=move || vm.success.get()
                fallback=move || view! { <WizardForm vm /> }
            >
                <div class="registration-page__success">
                    <h2>"Registration submitted"</h2>
                    <p>"The student record has been created."</p>
                    <Button on_click=Callback::new(move |_| vm.success.set(false))>
                        "Register another student"
                    </Button>
                    <A href="/students">"Go to student list"</A>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn WizardForm(vm: RegistrationVm) -> impl IntoView {
    let step = Signal::derive(move || vm.wizard.with(|w| w.step()));
    let index = Signal::derive(move || vm.wizard.with(|w| w.index()));
    let is_first = Signal::derive(move || vm.wizard.with(|w| w.is_first()));
    let is_last = Signal::derive(move || vm.wizard.with(|w| w.is_last()));
    let error_count = Signal::derive(move || vm.errors.with(|e| e.len()));
    let has_errors = Signal::derive(move || vm.errors.with(|e| !e.is_empty()));

    view! {
        <ol class="wizard__steps">
            {Step::ALL
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    let title = s.title();
                    view! {
                        <li class=move || {
                            if i == index.get() {
                                "wizard__step wizard__step--active"
                            } else if i < index.get() {
                                "wizard__step wizard__step--done"
                            } else {
                                "wizard__step"
                            }
                        }>
                            {title}
                        </li>
                    }
                })
                .collect_view()}
        </ol>

        <h2 class="wizard__title">{move || step.get().title()}</h2>

        <div class="wizard__body">
            {move || match step.get() {
                Step::PersonalInfo => view! { <PersonalInfoStep vm /> }.into_any(),
                Step::Address => view! { <AddressStep vm /> }.into_any(),
                Step::Parents => view! { <ParentsStep vm /> }.into_any(),
                Step::Enrollment => view! { <EnrollmentStep vm /> }.into_any(),
                Step::Financials => view! { <FinancialStep vm /> }.into_any(),
                Step::Academics => view! { <AcademicsStep vm /> }.into_any(),
                Step::Documents => view! { <DocumentsStep vm /> }.into_any(),
                Step::Awards => view! { <AwardsStep vm /> }.into_any(),
                Step::Activities => view! { <ActivitiesStep vm /> }.into_any(),
                Step::Declaration => view! { <DeclarationStep vm /> }.into_any(),
            }}
        </div>

        <Show when=move || has_errors.get()>
            <p class="wizard__error-summary">
                {move || format!("Please fix {} field(s) before continuing", error_count.get())}
            </p>
        </Show>
        {move || {
            vm.submit_error
                .get()
                .map(|e| view! { <p class="wizard__error-summary">{e}</p> })
        }}

        <div class="wizard__nav">
            <Button
                variant="secondary"
                on_click=Callback::new(move |_| vm.prev())
                disabled=Signal::derive(move || is_first.get() || vm.submitting.get())
            >
                "Back"
            </Button>
            <Show
                when=move || is_last.get()
                fallback=move || view! {
                    <Button on_click=Callback::new(move |_| vm.next())>"Next"</Button>
                }
            >
                <Button
                    on_click=Callback::new(move |_| vm.submit())
                    disabled=Signal::derive(move || vm.submitting.get())
                >
                    {move || if vm.submitting.get() { "Submitting..." } else { "Submit" }}
                </Button>
            </Show>
        </div>
    }
}
