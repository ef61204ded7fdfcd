use crate::domain::a004_transaction::summary::TransactionRow;
use crate::layout::global_context::use_console;
use contracts::domain::a004_transaction::aggregate::{Transaction, TransactionStatus};
use leptos::prelude::*;

fn rows_view(rows: Vec<TransactionRow>, empty: &'static str) -> AnyView {
    if rows.is_empty() {
        return view! { <p class="empty">{empty}</p> }.into_any();
    }
    rows.into_iter()
        .map(|row| {
            view! {
                <div class="table-row">
                    <span>{row.id}</span>
                    <span>{row.date}</span>
                    <span>{row.equipment}</span>
                    <span class="status">{row.status}</span>
                </div>
            }
        })
        .collect_view()
        .into_any()
}

fn rows_with(transactions: &[Transaction], status: TransactionStatus) -> Vec<TransactionRow> {
    transactions
        .iter()
        .filter(|t| t.status == status)
        .map(TransactionRow::from)
        .collect()
}

#[component]
pub fn TransactionView() -> impl IntoView {
    let ctx = use_console();
    let stats = move || ctx.state.with(|vc| vc.transaction_stats());

    view! {
        <div class="transactions">
            <div class="stats">
                <div class="stats__card">"Pending " {move || stats().pending}</div>
                <div class="stats__card">"Approved " {move || stats().approved}</div>
                <div class="stats__card">"Denied " {move || stats().denied}</div>
                <div class="stats__card">"Returned " {move || stats().returned}</div>
                <div class="stats__card">"Total " {move || stats().total()}</div>
            </div>

            <section class="transactions__section">
                <div class="section-header">
                    <h2>"On Process"</h2>
                    <button class="link" on:click=move |_| ctx.open_pendings()>"View all"</button>
                </div>
                {move || {
                    let rows = ctx
                        .state
                        .with(|vc| rows_with(vc.transactions(), TransactionStatus::Pending));
                    rows_view(rows, "No requests in process")
                }}
            </section>

            <section class="transactions__section">
                <h2>"Approved"</h2>
                {move || {
                    let rows = ctx
                        .state
                        .with(|vc| rows_with(vc.transactions(), TransactionStatus::Approved));
                    rows_view(rows, "No approved requests")
                }}
            </section>
        </div>
    }
}

#[component]
pub fn PendingsView() -> impl IntoView {
    let ctx = use_console();
    let summary = move || ctx.state.with(|vc| vc.pendings_summary());

    view! {
        <div class="pendings">
            <button class="link" on:click=move |_| ctx.close_pendings()>"← Back to Transaction"</button>
            <h2>"Pendings"</h2>
            {move || {
                let rows = summary().pending.iter().map(TransactionRow::from).collect();
                rows_view(rows, "No pending requests")
            }}
            <aside class="pendings__denied">
                <h3>"Denied Request"</h3>
                <p>{move || summary().denied_count}</p>
            </aside>
        </div>
    }
}
