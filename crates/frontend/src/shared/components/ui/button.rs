use leptos::prelude::*;

/// Button with variants ("primary", "outline", "ghost", "light")
#[component]
pub fn Button(
    /// "primary" (default), "outline", "ghost" or "light"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Stretch to the container width
    #[prop(optional)]
    full_width: bool,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// `type` attribute, "button" by default
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "outline" => "button--outline",
        "ghost" => "button--ghost",
        "light" => "button--light",
        _ => "button--primary",
    };
    let width_class = if full_width { "button--block" } else { "" };
    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("button {} {} {}", variant_class(), width_class, additional_class())
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
