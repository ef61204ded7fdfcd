use crate::layout::global_context::use_console;
use crate::shared::date_utils::format_us_date_or_na;
use leptos::prelude::*;

#[component]
pub fn ReturnedItemsView() -> impl IntoView {
    let ctx = use_console();
    let rows = move || ctx.state.with(|vc| vc.returned_items().to_vec());

    view! {
        <div class="returned-items">
            <h2>"Returned Items"</h2>
            {move || {
                let items = rows();
                if items.is_empty() {
                    return view! { <p class="empty">"No returned items to verify"</p> }.into_any();
                }
                items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <div class="table-row">
                                <span>{item.id}</span>
                                <span>{item.equipment_label().to_string()}</span>
                                <span>{item.employee_label().to_string()}</span>
                                <span>{format_us_date_or_na(item.returned_at.as_deref())}</span>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
