use super::RegistrationVm;
use crate::shared::components::ui::{Checkbox, Input, Select};
use leptos::prelude::*;
use uuid::Uuid;

#[component]
pub fn AddressStep(vm: RegistrationVm) -> impl IntoView {
    let same = Signal::derive(move || vm.record.with(|r| r.addresses_same));

    view! {
        <div class="form__section">
            <h3 class="form__section-title">"Permanent address"</h3>
            {move || {
                vm.address_keys
                    .get()
                    .first()
                    .copied()
                    .map(|key| view! { <AddressFields vm key index=0 mirrors_permanent=false /> })
            }}

            <Checkbox
                label="Temporary address same as permanent"
                checked=same
                on_change=Callback::new(move |checked: bool| vm.toggle_addresses_same(checked))
            />

            <h3 class="form__section-title">"Temporary address"</h3>
            {move || {
                vm.address_keys
                    .get()
                    .get(1)
                    .copied()
                    .map(|key| view! { <AddressFields vm key index=1 mirrors_permanent=true /> })
            }}
        </div>
    }
}

/// One address block. `key` pins the row's dropdown caches in the
/// resolver; `index` addresses its record slot and error paths.
#[component]
fn AddressFields(
    vm: RegistrationVm,
    key: Uuid,
    index: usize,
    mirrors_permanent: bool,
) -> impl IntoView {
    let locked = Signal::derive(move || {
        mirrors_permanent && vm.record.with(|r| r.addresses_same)
    });

    let province = Signal::derive(move || {
        vm.record.with(|r| {
            r.addresses
                .get(index)
                .and_then(|a| a.province_id)
                .map(|v| v.to_string())
                .unwrap_or_default()
        })
    });
    let district = Signal::derive(move || {
        vm.record.with(|r| {
            r.addresses
                .get(index)
                .and_then(|a| a.district_id)
                .map(|v| v.to_string())
                .unwrap_or_default()
        })
    });
    let municipality = Signal::derive(move || {
        vm.record.with(|r| {
            r.addresses
                .get(index)
                .and_then(|a| a.municipality_id)
                .map(|v| v.to_string())
                .unwrap_or_default()
        })
    });

    let district_locked =
        Signal::derive(move || locked.get() || province.with(|p| p.is_empty()));
    let municipality_locked =
        Signal::derive(move || locked.get() || district.with(|d| d.is_empty()));

    let ward = Signal::derive(move || {
        vm.record
            .with(|r| r.addresses.get(index).map(|a| a.ward_number.clone()).unwrap_or_default())
    });
    let street = Signal::derive(move || {
        vm.record
            .with(|r| r.addresses.get(index).map(|a| a.street.clone()).unwrap_or_default())
    });
    let house = Signal::derive(move || {
        vm.record
            .with(|r| r.addresses.get(index).map(|a| a.house_number.clone()).unwrap_or_default())
    });

    view! {
        <div class="form__grid">
            <Select
                label="Province"
                placeholder="Select province"
                value=province
                on_change=Callback::new(move |v: String| vm.on_province_change(key, v))
                options=Signal::derive(move || vm.resolver.province_options())
                disabled=locked
                error=vm.field_error(format!("Addresses[{}].ProvinceId", index))
            />
            <Select
                label="District"
                placeholder="Select district"
                value=district
                on_change=Callback::new(move |v: String| vm.on_district_change(key, v))
                options=Signal::derive(move || vm.resolver.district_options(key))
                disabled=district_locked
                error=vm.field_error(format!("Addresses[{}].DistrictId", index))
            />
            <Select
                label="Municipality"
                placeholder="Select municipality"
                value=municipality
                on_change=Callback::new(move |v: String| vm.on_municipality_change(key, v))
                options=Signal::derive(move || vm.resolver.municipality_options(key))
                disabled=municipality_locked
                error=vm.field_error(format!("Addresses[{}].MunicipalityId", index))
            />
            <Input
                label="Ward number"
                value=ward
                on_input=Callback::new(move |v: String| {
                    vm.set_address_text(key, "WardNumber", v, |a, v| a.ward_number = v)
                })
                disabled=locked
                error=vm.field_error(format!("Addresses[{}].WardNumber", index))
            />
            <Input
                label="Street"
                value=street
                on_input=Callback::new(move |v: String| {
                    vm.set_address_text(key, "Street", v, |a, v| a.street = v)
                })
                disabled=locked
                error=vm.field_error(format!("Addresses[{}].Street", index))
            />
            <Input
                label="House number"
                value=house
                on_input=Callback::new(move |v: String| {
                    vm.set_address_text(key, "HouseNumber", v, |a, v| a.house_number = v)
                })
                disabled=locked
                error=vm.field_error(format!("Addresses[{}].HouseNumber", index))
            />
        </div>
    }
}
