use super::{picked_file, RegistrationVm};
use crate::shared::components::ui::{Button, Input};
use contracts::domain::student::record::Award;
use contracts::domain::student::validate::coerce_year;
use leptos::prelude::*;
use uuid::Uuid;

#[component]
pub fn AwardsStep(vm: RegistrationVm) -> impl IntoView {
    view! {
        <div class="form__section">
            <For
                each=move || vm.award_keys.get()
                key=|key| *key
                children=move |key| view! { <AwardRow vm key /> }
            />
            <Button variant="secondary" on_click=Callback::new(move |_| vm.add_award())>
                "Add award"
            </Button>
        </div>
    }
}

#[component]
fn AwardRow(vm: RegistrationVm, key: Uuid) -> impl IntoView {
    let index = Memo::new(move |_| {
        vm.award_keys
            .get()
            .iter()
            .position(|k| *k == key)
            .unwrap_or(0)
    });

    let text = move |get: fn(&Award) -> &str| {
        Signal::derive(move || {
            vm.record.with(|r| {
                r.awards
                    .get(index.get())
                    .map(|a| get(a).to_string())
                    .unwrap_or_default()
            })
        })
    };
    let set_text = move |field: &'static str, set: fn(&mut Award, String)| {
        Callback::new(move |value: String| {
            let i = index.get_untracked();
            vm.record.update(|r| {
                if let Some(award) = r.awards.get_mut(i) {
                    set(award, value);
                }
            });
            vm.touch(&format!("Awards[{}].{}", i, field));
        })
    };
    let title_error = Signal::derive(move || {
        let path = format!("Awards[{}].TitleOfAward", index.get());
        vm.errors.with(|e| e.get(&path).map(str::to_string))
    });

    let year = Signal::derive(move || {
        vm.record.with(|r| {
            r.awards
                .get(index.get())
                .and_then(|a| a.year_received)
                .map(|y| y.to_string())
                .unwrap_or_default()
        })
    });
    let set_year = Callback::new(move |value: String| {
        let i = index.get_untracked();
        vm.record.update(|r| {
            if let Some(award) = r.awards.get_mut(i) {
                award.year_received = coerce_year(&value);
            }
        });
    });

    view! {
        <div class="form__row">
            <div class="form__grid">
                <Input
                    label="Title of award"
                    value=text(|a| &a.title_of_award)
                    on_input=set_text("TitleOfAward", |a, v| a.title_of_award = v)
                    error=title_error
                />
                <Input
                    label="Issuing organization"
                    value=text(|a| &a.issuing_organization)
                    on_input=set_text("IssuingOrganization", |a, v| a.issuing_organization = v)
                />
                <Input
                    label="Year received"
                    input_type="number"
                    value=year
                    on_input=set_year
                />
                <div class="form__group">
                    <label class="form__label">"Certificate"</label>
                    <input
                        type="file"
                        class="form__input"
                        on:change=move |ev| vm.set_certificate(key, picked_file(&ev))
                    />
                </div>
            </div>
            <Button
                variant="ghost"
                size="sm"
                on_click=Callback::new(move |_| vm.remove_award(key))
            >
                "Remove"
            </Button>
        </div>
    }
}
