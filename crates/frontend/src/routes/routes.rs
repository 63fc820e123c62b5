use crate::domain::student::ui::details::StudentDetails;
use crate::domain::student::ui::edit::StudentEdit;
use crate::domain::student::ui::list::StudentList;
use crate::domain::student::ui::registration::RegistrationPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <nav class="nav">
                <A href="/">"Registration"</A>
                <A href="/students">"Students"</A>
            </nav>
            <main class="main">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=RegistrationPage />
                    <Route path=path!("/students") view=StudentList />
                    <Route path=path!("/students/:id") view=StudentDetails />
                    <Route path=path!("/students/:id/edit") view=StudentEdit />
                </Routes>
            </main>
        </Router>
    }
}
