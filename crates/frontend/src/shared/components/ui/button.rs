use leptos::prelude::*;

/// Plain action button. Always `type="button"` so a stray Enter press
/// inside the wizard never triggers a native form submit.
#[component]
pub fn Button(
    /// "primary" (default), "secondary", or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// "md" (default) or "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        let variant = match variant.get().as_deref().unwrap_or("primary") {
            "secondary" => "button--secondary",
            "ghost" => "button--ghost",
            _ => "button--primary",
        };
        if size.get().as_deref() == Some("sm") {
            format!("button {} button--small", variant)
        } else {
            format!("button {}", variant)
        }
    };

    view! {
        <button
            type="button"
            class=class
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
