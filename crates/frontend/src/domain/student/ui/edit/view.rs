use super::model;
use crate::domain::student::ui::registration::model::build_form_data;
use crate::domain::student::ui::registration::steps::{
    AcademicsStep, ActivitiesStep, AddressStep, AwardsStep, DeclarationStep, DocumentsStep,
    EnrollmentStep, FinancialStep, ParentsStep, PersonalInfoStep,
};
use crate::domain::student::ui::registration::RegistrationVm;
use crate::shared::components::ui::Button;
use contracts::domain::student::validate::validate_record;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

#[component]
#[allow(non_snake_case)]
pub fn StudentEdit() -> impl IntoView {
    let params = use_params_map();
    let vm = RegistrationVm::new();
    vm.load_reference_data();

    let loaded = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);

    let id = params.with_untracked(|p| {
        p.get("id").and_then(|raw| raw.parse::<i64>().ok())
    });
    match id {
        Some(id) => wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(id).await {
                Ok(mut record) => {
                    model::normalize_dates(&mut record);
                    vm.hydrate(record).await;
                    loaded.set(true);
                }
                Err(e) => load_error.set(Some(e)),
            }
        }),
        None => load_error.set(Some("Invalid student id".to_string())),
    }

    let save = move |_| {
        let Some(id) = id else { return };
        if vm.submitting.get_untracked() {
            return;
        }
        let record = vm.record.get_untracked();
        if let Err(errs) = validate_record(&record) {
            vm.errors.set(errs);
            return;
        }
        vm.submitting.set(true);
        vm.submit_error.set(None);

        let documents = vm.documents.get_untracked();
        let certificates = vm.certificates.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match build_form_data(&record, &documents, &certificates) {
                Ok(form) => model::update(id, &form).await,
                Err(e) => Err(e),
            };
            vm.submitting.set(false);
            match result {
                Ok(()) => vm.success.set(true),
                Err(e) => vm.submit_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="page student-edit">
            <div class="page__header">
                <h1 class="page__title">"Edit student"</h1>
                <A href="/students">"Back to list"</A>
            </div>

            {move || load_error.get().map(|e| view! { <p class="page__error">{e}</p> })}

            <Show when=move || loaded.get() fallback=|| view! { <p>"Loading..."</p> }>
                <div class="edit__sections">
                    <h2>"Personal information"</h2>
                    <PersonalInfoStep vm />
                    <h2>"Addresses"</h2>
                    <AddressStep vm />
                    <h2>"Parents / guardians"</h2>
                    <ParentsStep vm />
                    <h2>"Enrollment"</h2>
                    <EnrollmentStep vm />
                    <h2>"Financial"</h2>
                    <FinancialStep vm />
                    <h2>"Academic history"</h2>
                    <AcademicsStep vm />
                    <h2>"Documents"</h2>
                    <DocumentsStep vm />
                    <h2>"Awards"</h2>
                    <AwardsStep vm />
                    <h2>"Activities"</h2>
                    <ActivitiesStep vm />
                    <h2>"Declaration"</h2>
                    <DeclarationStep vm />
                </div>

                {move || {
                    vm.submit_error
                        .get()
                        .map(|e| view! { <p class="page__error">{e}</p> })
                }}
                <Show when=move || vm.success.get()>
                    <p class="page__success">"Changes saved."</p>
                </Show>
                <Show when=move || vm.errors.with(|e| !e.is_empty())>
                    <p class="page__error">
                        {move || format!("Please fix {} field(s)", vm.errors.with(|e| e.len()))}
                    </p>
                </Show>

                <div class="edit__actions">
                    <Button
                        on_click=Callback::new(save)
                        disabled=Signal::derive(move || vm.submitting.get())
                    >
                        {move || if vm.submitting.get() { "Saving..." } else { "Save changes" }}
                    </Button>
                </div>
            </Show>
        </div>
    }
}
