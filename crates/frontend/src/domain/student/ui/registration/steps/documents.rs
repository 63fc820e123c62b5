use super::{picked_file, RegistrationVm};
use crate::shared::components::ui::{Button, Input};
use leptos::prelude::*;
use uuid::Uuid;

#[component]
pub fn DocumentsStep(vm: RegistrationVm) -> impl IntoView {
    view! {
        <div class="form__section">
            <For
                each=move || vm.file_keys.get()
                key=|key| *key
                children=move |key| view! { <DocumentRow vm key /> }
            />
            <Button variant="secondary" on_click=Callback::new(move |_| vm.add_file())>
                "Add document"
            </Button>
        </div>
    }
}

#[component]
fn DocumentRow(vm: RegistrationVm, key: Uuid) -> impl IntoView {
    let index = Memo::new(move |_| {
        vm.file_keys
            .get()
            .iter()
            .position(|k| *k == key)
            .unwrap_or(0)
    });

    let file_type = Signal::derive(move || {
        vm.record.with(|r| {
            r.files
                .get(index.get())
                .map(|f| f.file_type.clone())
                .unwrap_or_default()
        })
    });
    let set_file_type = Callback::new(move |value: String| {
        let i = index.get_untracked();
        vm.record.update(|r| {
            if let Some(file) = r.files.get_mut(i) {
                file.file_type = value;
            }
        });
        vm.touch(&format!("Files[{}].FileType", i));
    });
    let error = Signal::derive(move || {
        let path = format!("Files[{}].FileType", index.get());
        vm.errors.with(|e| e.get(&path).map(str::to_string))
    });

    // Server-side path of a document uploaded earlier (edit flow).
    let existing_path = Signal::derive(move || {
        vm.record
            .with(|r| r.files.get(index.get()).and_then(|f| f.file_path.clone()))
    });

    view! {
        <div class="form__row">
            <div class="form__grid">
                <Input
                    label="Document type"
                    value=file_type
                    on_input=set_file_type
                    error=error
                />
                <div class="form__group">
                    <label class="form__label">"File"</label>
                    <input
                        type="file"
                        class="form__input"
                        on:change=move |ev| vm.set_document(key, picked_file(&ev))
                    />
                    {move || existing_path.get().map(|path| view! {
                        <p class="form__hint">"Uploaded: " {path}</p>
                    })}
                </div>
            </div>
            <Button
                variant="ghost"
                size="sm"
                on_click=Callback::new(move |_| vm.remove_file(key))
            >
                "Remove"
            </Button>
        </div>
    }
}
