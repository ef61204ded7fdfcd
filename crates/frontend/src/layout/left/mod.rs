use crate::layout::global_context::use_console;
use crate::shared::loader::ViewSelection;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_console();

    view! {
        <aside class="sidebar">
            <div class="sidebar__logo">"iREPLY"</div>
            <nav class="sidebar__menu">
                {ViewSelection::ALL
                    .into_iter()
                    .map(|selection| {
                        let is_active = move || ctx.state.with(|vc| vc.selection() == selection);
                        view! {
                            <button
                                class="sidebar__item"
                                class:active=is_active
                                on:click=move |_| ctx.select_menu(selection.label())
                            >
                                {selection.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
