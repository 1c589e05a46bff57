use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Overlay dialog. Escape, the close button and a click on the backdrop all
/// call `on_close`.
#[component]
pub fn Modal(
    on_close: Callback<()>,
    /// Extra class on the dialog box
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    // keep the page behind the dialog from scrolling
    set_body_scroll_locked(true);
    on_cleanup(|| set_body_scroll_locked(false));

    let stop_propagation = move |ev: ev::MouseEvent| ev.stop_propagation();

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div
                class=move || format!("modal {}", class.get().unwrap_or_default())
                role="dialog"
                aria-modal="true"
                on:click=stop_propagation
            >
                <button
                    class="button button--icon modal__close"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    {icon("x")}
                </button>
                {children()}
            </div>
        </div>
    }
}

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    let _ = body.style().set_property("overflow", value);
}
