use crate::shared::api_utils;
use crate::shared::components::ui::Button;
use contracts::domain::student::summary::StudentSummary;
use leptos::prelude::*;
use leptos_router::components::A;

async fn fetch_students() -> Result<Vec<StudentSummary>, String> {
    api_utils::get_json("/api/registration/students").await
}

async fn delete_student(id: i64) -> Result<(), String> {
    api_utils::delete(&format!("/api/registration/{}", id)).await
}

#[component]
#[allow(non_snake_case)]
pub fn StudentList() -> impl IntoView {
    let items = RwSignal::new(Vec::<StudentSummary>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_students().await {
            Ok(list) => items.set(list),
            Err(e) => error.set(Some(e)),
        }
        loading.set(false);
    });

    let on_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this student?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match delete_student(id).await {
                Ok(()) => items.update(|list| list.retain(|s| s.student_id != id)),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="page student-list">
            <div class="page__header">
                <h1 class="page__title">"Students"</h1>
                <A href="/">"New registration"</A>
            </div>

            {move || error.get().map(|e| view! { <p class="page__error">{e}</p> })}

            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Mobile"</th>
                            <th>"Gender"</th>
                            <th>"Citizenship no."</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || items.get()
                            key=|s| s.student_id
                            children=move |student| {
                                let id = student.student_id;
                                view! {
                                    <tr>
                                        <td>{student.full_name()}</td>
                                        <td>{student.email.clone()}</td>
                                        <td>{student.primary_mobile.clone()}</td>
                                        <td>{student.gender.clone()}</td>
                                        <td>{student.citizenship_number.clone()}</td>
                                        <td class="table__actions">
                                            <A href=format!("/students/{}", id)>"View"</A>
                                            <A href=format!("/students/{}/edit", id)>"Edit"</A>
                                            <Button
                                                variant="ghost"
                                                size="sm"
                                                on_click=Callback::new(move |_| on_delete(id))
                                            >
                                                "Delete"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || items.with(|l| l.is_empty())>
                    <p class="page__empty">"No students registered yet."</p>
                </Show>
            </Show>
        </div>
    }
}
