use super::{amount_input, amount_value, text_input, text_value, RegistrationVm};
use crate::shared::components::ui::{Input, Select};
use contracts::domain::student::enums::FeeCategory;
use leptos::prelude::*;

#[component]
pub fn FinancialStep(vm: RegistrationVm) -> impl IntoView {
    let scholarship = Signal::derive(move || {
        vm.record
            .with(|r| r.financial.fee_category == FeeCategory::Scholarship.as_str())
    });

    view! {
        <div class="form__section">
            <div class="form__grid">
                <Select
                    label="Fee category"
                    placeholder="Select fee category"
                    value=text_value(vm, |r| &r.financial.fee_category)
                    on_change=text_input(vm, "Financial.FeeCategory", |r, v| {
                        r.financial.fee_category = v
                    })
                    options=FeeCategory::options()
                    error=vm.field_error("Financial.FeeCategory")
                />
            </div>

            <Show when=move || scholarship.get()>
                <div class="form__grid">
                    <Input
                        label="Scholarship type"
                        value=text_value(vm, |r| &r.financial.scholarship_type)
                        on_input=text_input(vm, "Financial.ScholarshipType", |r, v| {
                            r.financial.scholarship_type = v
                        })
                        error=vm.field_error("Financial.ScholarshipType")
                    />
                    <Input
                        label="Scholarship provider"
                        value=text_value(vm, |r| &r.financial.scholarship_provider)
                        on_input=text_input(vm, "Financial.ScholarshipProvider", |r, v| {
                            r.financial.scholarship_provider = v
                        })
                        error=vm.field_error("Financial.ScholarshipProvider")
                    />
                    <Input
                        label="Scholarship amount"
                        input_type="number"
                        value=amount_value(vm, |r| r.financial.scholarship_amount)
                        on_input=amount_input(vm, "Financial.ScholarshipAmount", |r, v| {
                            r.financial.scholarship_amount = v
                        })
                        error=vm.field_error("Financial.ScholarshipAmount")
                    />
                </div>
            </Show>

            <div class="form__grid">
                <Input
                    label="Account holder name"
                    value=text_value(vm, |r| &r.financial.account_holder_name)
                    on_input=text_input(vm, "Financial.AccountHolderName", |r, v| {
                        r.financial.account_holder_name = v
                    })
                    error=vm.field_error("Financial.AccountHolderName")
                />
                <Input
                    label="Bank name"
                    value=text_value(vm, |r| &r.financial.bank_name)
                    on_input=text_input(vm, "Financial.BankName", |r, v| r.financial.bank_name = v)
                    error=vm.field_error("Financial.BankName")
                />
                <Input
                    label="Account number"
                    value=text_value(vm, |r| &r.financial.account_number)
                    on_input=text_input(vm, "Financial.AccountNumber", |r, v| {
                        r.financial.account_number = v
                    })
                    error=vm.field_error("Financial.AccountNumber")
                />
                <Input
                    label="Branch"
                    value=text_value(vm, |r| &r.financial.branch)
                    on_input=text_input(vm, "Financial.Branch", |r, v| r.financial.branch = v)
                    error=vm.field_error("Financial.Branch")
                />
            </div>
        </div>
    }
}
