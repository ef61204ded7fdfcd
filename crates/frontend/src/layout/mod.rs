pub mod center;
pub mod global_context;
pub mod left;
pub mod top_header;
pub mod view_controller;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Logo   |          TopHeader             |
/// +------------------------------------------+
/// | Sidebar |          Content               |
/// | (Left)  |          (Center)              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <left::Sidebar />
            <div class="app-main">
                <TopHeader />
                <center::Center />
            </div>
        </div>
    }
}
