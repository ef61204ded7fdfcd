use crate::domain::a001_equipment::filter::CategorySelector;
use crate::layout::global_context::use_console;
use leptos::prelude::*;

#[component]
pub fn HomeView() -> impl IntoView {
    let ctx = use_console();

    let categories = move || {
        ctx.state.with(|vc| {
            vc.home()
                .map(|home| home.categories.clone())
                .unwrap_or_default()
        })
    };
    let equipment = move || ctx.state.with(|vc| vc.equipment_preview().to_vec());
    let cart_lines = move || ctx.state.with(|vc| vc.cart().lines().to_vec());

    view! {
        <div class="home">
            <h1 class="home__title">"Request Equipment"</h1>

            <section class="home__categories">
                <h2>"Item Categories"</h2>
                {move || {
                    let list = categories();
                    if list.is_empty() {
                        return view! { <p class="empty">"No categories found"</p> }.into_any();
                    }
                    list.into_iter()
                        .map(|category| {
                            let label = category.tile_label().to_string();
                            let highlighted = {
                                let category = category.clone();
                                move || ctx.state.with(|vc| vc.filter().is_selected(&category))
                            };
                            view! {
                                <button
                                    class="category-tile"
                                    class:selected=highlighted
                                    on:click=move |_| {
                                        ctx.select_category(CategorySelector::Category(category.clone()))
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </section>

            <section class="home__equipment">
                <h2>{move || ctx.state.with(|vc| vc.filter().inventory_title())}</h2>
                {move || {
                    ctx.state
                        .with(|vc| vc.inventory_error().map(str::to_string))
                        .map(|e| view! { <div class="warning-box">{e}</div> })
                }}
                <Show when=move || ctx.state.with(|vc| vc.inventory_loading())>
                    <div class="content__loading">"Loading..."</div>
                </Show>
                {move || {
                    let items = equipment();
                    if items.is_empty() {
                        let message = ctx.state.with(|vc| vc.filter().empty_inventory_message());
                        return view! { <p class="empty">{message}</p> }.into_any();
                    }
                    items
                        .into_iter()
                        .map(|item| {
                            let brand = item.brand_label().to_string();
                            let specs = item.specifications_label().to_string();
                            let category = item.category_name().map(str::to_string);
                            let stock = item.quantity;
                            view! {
                                <div class="equipment-card">
                                    <div class="equipment-card__brand">{brand}</div>
                                    {category.map(|name| view! { <div class="equipment-card__category">{name}</div> })}
                                    <div class="equipment-card__stock">{format!("Available: {}", stock)}</div>
                                    <div class="equipment-card__specs">{specs}</div>
                                    <button class="equipment-card__add" on:click=move |_| ctx.add_to_cart(&item)>
                                        "+"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </section>

            <section class="home__cart" id="items-section">
                <h2>"Items"</h2>
                {move || {
                    let lines = cart_lines();
                    if lines.is_empty() {
                        return view! { <p class="empty">"No items in your request yet"</p> }.into_any();
                    }
                    lines
                        .into_iter()
                        .map(|line| {
                            let id = line.id();
                            view! {
                                <div class="cart-line">
                                    <span class="cart-line__name">{line.display_name().to_string()}</span>
                                    <span class="cart-line__model">{line.item().model_label().to_string()}</span>
                                    <button on:click=move |_| ctx.decrement(id)>"-"</button>
                                    <span class="cart-line__qty">{line.quantity()}</span>
                                    <button on:click=move |_| ctx.increment(id)>"+"</button>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}

                <Show when=move || ctx.state.with(|vc| !vc.cart().is_empty())>
                    <div class="request-summary">
                        <h3>"Request Summary"</h3>
                        <p>{move || format!("Total items: {}", ctx.state.with(|vc| vc.cart().total_units()))}</p>
                        <ul>
                            {move || {
                                ctx.state.with(|vc| {
                                    vc.cart()
                                        .summary_lines()
                                        .map(|(name, qty)| (name.to_string(), qty))
                                        .collect::<Vec<_>>()
                                })
                                .into_iter()
                                .map(|(name, qty)| view! { <li>{format!("{} x{}", name, qty)}</li> })
                                .collect_view()
                            }}
                        </ul>
                        <button class="button button--secondary" on:click=move |_| ctx.cancel_request()>
                            "Cancel"
                        </button>
                        <button
                            class="button button--primary"
                            disabled=move || !ctx.can_submit() || ctx.state.with(|vc| vc.submitting())
                            on:click=move |_| ctx.submit_request()
                        >
                            {move || if ctx.state.with(|vc| vc.submitting()) { "Sending..." } else { "Request →" }}
                        </button>
                    </div>
                </Show>
            </section>
        </div>
    }
}
