use crate::layout::global_context::use_console;
use crate::shared::format::{avatar_initial, notification_badge};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_console();
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="top-header">
            <div class="top-header__title">"Employee"</div>
            <div class="top-header__actions">
                <span class="top-header__bell">
                    {move || {
                        notification_badge(ctx.notifications.get())
                            .map(|badge| view! { <span class="badge">{badge}</span> })
                    }}
                </span>
                <button
                    class="top-header__profile"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="avatar">
                        {move || avatar_initial(&ctx.employee_name.get())}
                    </span>
                    <span>{move || ctx.employee_name.get()}</span>
                </button>
                <Show when=move || menu_open.get()>
                    <div class="top-header__menu">
                        "Signed in as " <strong>{move || ctx.employee_name.get()}</strong>
                    </div>
                </Show>
            </div>
        </header>
    }
}
