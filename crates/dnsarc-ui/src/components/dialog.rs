use leptos::prelude::*;

/// Modal shell; clicking the backdrop closes it.
#[component]
pub fn Dialog(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" class:open=move || open.get() on:click=move |_| open.set(false)>
            <div class="dialog card" on:click=|ev| ev.stop_propagation()>
                <div class="dialog-header">
                    <h2>{title}</h2>
                    {description.map(|text| view! { <p class="subtitle">{text}</p> })}
                </div>
                {children()}
            </div>
        </div>
    }
}
