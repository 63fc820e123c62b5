//! One component per wizard step, plus the binding helpers they share.
//!
//! The helpers take plain `fn` accessors into [`StudentRecord`] so the
//! produced closures stay `Send + Sync`, which `Callback` requires.

mod academics;
mod activities;
mod address;
mod awards;
mod declaration;
mod documents;
mod enrollment;
mod financial;
mod parents;
mod personal;

pub use academics::AcademicsStep;
pub use activities::ActivitiesStep;
pub use address::AddressStep;
pub use awards::AwardsStep;
pub use declaration::DeclarationStep;
pub use documents::DocumentsStep;
pub use enrollment::EnrollmentStep;
pub use financial::FinancialStep;
pub use parents::ParentsStep;
pub use personal::PersonalInfoStep;

use super::view_model::RegistrationVm;
use contracts::domain::lookup::LookupItem;
use contracts::domain::student::record::StudentRecord;
use contracts::domain::student::validate::{coerce_amount, coerce_id};
use leptos::prelude::*;

pub(crate) fn text_value(vm: RegistrationVm, get: fn(&StudentRecord) -> &str) -> Signal<String> {
    Signal::derive(move || vm.record.with(|r| get(r).to_string()))
}

pub(crate) fn text_input(
    vm: RegistrationVm,
    path: &'static str,
    set: fn(&mut StudentRecord, String),
) -> Callback<String> {
    Callback::new(move |value: String| {
        vm.record.update(|r| set(r, value));
        vm.touch(path);
    })
}

pub(crate) fn id_value(
    vm: RegistrationVm,
    get: fn(&StudentRecord) -> Option<u32>,
) -> Signal<String> {
    Signal::derive(move || {
        vm.record
            .with(|r| get(r).map(|v| v.to_string()).unwrap_or_default())
    })
}

pub(crate) fn id_input(
    vm: RegistrationVm,
    path: &'static str,
    set: fn(&mut StudentRecord, Option<u32>),
) -> Callback<String> {
    Callback::new(move |value: String| {
        vm.record.update(|r| set(r, coerce_id(&value)));
        vm.touch(path);
    })
}

pub(crate) fn amount_value(
    vm: RegistrationVm,
    get: fn(&StudentRecord) -> Option<f64>,
) -> Signal<String> {
    Signal::derive(move || {
        vm.record
            .with(|r| get(r).map(|v| v.to_string()).unwrap_or_default())
    })
}

pub(crate) fn amount_input(
    vm: RegistrationVm,
    path: &'static str,
    set: fn(&mut StudentRecord, Option<f64>),
) -> Callback<String> {
    Callback::new(move |value: String| {
        vm.record.update(|r| set(r, coerce_amount(&value)));
        vm.touch(path);
    })
}

pub(crate) fn lookup_options(items: RwSignal<Vec<LookupItem>>) -> Signal<Vec<(String, String)>> {
    Signal::derive(move || {
        items
            .get()
            .iter()
            .map(|i| (i.id.to_string(), i.label.clone()))
            .collect()
    })
}

/// First file of a file input's selection, if any.
pub(crate) fn picked_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    event_target::<web_sys::HtmlInputElement>(ev)
        .files()
        .and_then(|list| list.get(0))
}
