mod home;
mod returned_items;
mod transactions;

use crate::layout::global_context::use_console;
use crate::layout::view_controller::ActiveView;
use crate::shared::loader::LoadState;
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum Screen {
    Loading,
    Failed,
    View(ActiveView),
}

/// Content area: loading and error screens, then the active render path.
/// The Pendings overlay is shown even while Transaction reloads.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_console();

    let screen = Memo::new(move |_| {
        ctx.state.with(|vc| match (vc.active_view(), vc.load_state()) {
            (ActiveView::Pendings, _) => Screen::View(ActiveView::Pendings),
            (_, LoadState::Loading) => Screen::Loading,
            (_, LoadState::Failed(_)) => Screen::Failed,
            (view, _) => Screen::View(view),
        })
    });

    view! {
        <main class="content">
            {move || match screen.get() {
                Screen::Loading => view! { <div class="content__loading">"Loading..."</div> }.into_any(),
                Screen::Failed => {
                    let message = ctx
                        .state
                        .with(|vc| vc.load_state().error().unwrap_or_default().to_string());
                    view! { <div class="content__error">{message}</div> }.into_any()
                }
                Screen::View(ActiveView::Home) => view! { <home::HomeView /> }.into_any(),
                Screen::View(ActiveView::Transaction) => {
                    view! { <transactions::TransactionView /> }.into_any()
                }
                Screen::View(ActiveView::Pendings) => {
                    view! { <transactions::PendingsView /> }.into_any()
                }
                Screen::View(ActiveView::ReturnedItems) => {
                    view! { <returned_items::ReturnedItemsView /> }.into_any()
                }
            }}
        </main>
    }
}
