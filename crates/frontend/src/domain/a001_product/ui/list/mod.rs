use contracts::domain::a001_product::{Product, ProductCategory, ProductStats};
use leptos::ev::{Event, MouseEvent, SubmitEvent};
use leptos::prelude::*;

use crate::shared::components::stat_card::StatCard;
use crate::shared::crud_page::CrudPageViewModel;
use crate::shared::format::{format_price, truncate};

const DESCRIPTION_PREVIEW_CHARS: usize = 50;

#[component]
pub fn ProductList(vm: CrudPageViewModel<Product>) -> impl IntoView {
    let state = vm.state;
    let search = vm.search;
    let stats = Memo::new(move |_| state.with(|s| ProductStats::from_items(&s.items)));

    let on_search = {
        let vm = vm.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.run_search();
        }
    };
    let on_clear = {
        let vm = vm.clone();
        move |_: MouseEvent| vm.clear_search()
    };
    let filter = vm.filter;
    let on_category = {
        let vm = vm.clone();
        move |ev: Event| {
            let value = event_target_value(&ev);
            match value.parse::<ProductCategory>() {
                Ok(category) => {
                    let service = vm.service().clone();
                    vm.apply_filter(value, async move { service.by_category(category).await });
                }
                Err(_) => vm.load(),
            }
        }
    };

    let rows = {
        let vm = vm.clone();
        move || {
            state
                .with(|s| s.items.clone())
                .into_iter()
                .map(|product| product_row(product, vm.clone()))
                .collect_view()
        }
    };

    view! {
        <div class="list-container">
            <div class="list-toolbar">
                <form class="list-toolbar__search" on:submit=on_search>
                    <input
                        type="search"
                        class="form-control"
                        placeholder="Search products by name"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-secondary">"Search"</button>
                    <button type="button" class="btn btn-secondary" on:click=on_clear>"Clear"</button>
                </form>
                <select
                    class="form-control list-toolbar__filter"
                    prop:value=move || filter.get()
                    on:change=on_category
                >
                    <option value="" selected=move || filter.get().is_empty()>"All categories"</option>
                    {ProductCategory::ALL
                        .iter()
                        .map(|c| {
                            let value = c.as_str();
                            view! {
                                <option value=value selected=move || filter.get() == value>
                                    {value}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <h2>{move || format!("Product List ({} products)", state.with(|s| s.items.len()))}</h2>

            {move || {
                let (loading, empty) = state.with(|s| (s.is_loading(), s.items.is_empty()));
                if loading && empty {
                    view! {
                        <div class="loading">
                            <div class="loading-spinner"></div>
                            <p>"Loading products..."</p>
                        </div>
                    }
                    .into_any()
                } else if empty {
                    view! {
                        <div class="alert alert-info">
                            "No products found. Add your first product using the form above."
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Name"</th>
                                    <th>"Price"</th>
                                    <th>"Category"</th>
                                    <th>"Stock"</th>
                                    <th>"Description"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>{rows.clone()}</tbody>
                        </table>
                    }
                    .into_any()
                }
            }}

            <Show when=move || stats.with(|s| s.total > 0)>
                <div class="stats-panel">
                    <h3>"Product Statistics"</h3>
                    <div class="stats-grid">
                        <StatCard
                            label="Total Products"
                            value=Signal::derive(move || stats.get().total.to_string())
                        />
                        <StatCard
                            label="Total Stock Items"
                            value=Signal::derive(move || stats.get().total_stock.to_string())
                        />
                        <StatCard
                            label="Low Stock Alert"
                            value=Signal::derive(move || stats.get().low_stock.to_string())
                            variant="stat-card--warning"
                        />
                        <StatCard
                            label="Categories"
                            value=Signal::derive(move || stats.get().categories.to_string())
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}

fn product_row(product: Product, vm: CrudPageViewModel<Product>) -> impl IntoView {
    let stock_class = if product.is_low_stock() {
        "stock stock--low"
    } else {
        "stock stock--ok"
    };
    let description = match product.description.as_deref().filter(|d| !d.trim().is_empty()) {
        Some(d) => view! {
            <span title=d.to_string()>{truncate(d, DESCRIPTION_PREVIEW_CHARS)}</span>
        }
        .into_any(),
        None => view! { <span class="muted">"No description"</span> }.into_any(),
    };

    let on_edit = {
        let vm = vm.clone();
        let product = product.clone();
        move |_: MouseEvent| vm.edit(product.clone())
    };
    let on_delete = {
        let product = product.clone();
        move |_: MouseEvent| vm.delete(product.clone())
    };

    view! {
        <tr>
            <td>{product.id}</td>
            <td><strong>{product.name.clone()}</strong></td>
            <td>{format_price(product.price)}</td>
            <td><span class="badge">{product.category.as_str()}</span></td>
            <td>
                <span class=stock_class>
                    {product.stock}
                    {product.is_low_stock().then_some(" ⚠")}
                </span>
            </td>
            <td class="cell--description">{description}</td>
            <td>
                <div class="table-actions">
                    <button class="btn btn-warning" title="Edit Product" on:click=on_edit>"Edit"</button>
                    <button class="btn btn-danger" title="Delete Product" on:click=on_delete>"Delete"</button>
                </div>
            </td>
        </tr>
    }
}
