use contracts::domain::a001_product::{Product, ProductCategory};
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

use crate::shared::crud_page::CrudPageViewModel;

/// Create / edit form. Edit mode is entered from the table.
#[component]
pub fn ProductDetails(vm: CrudPageViewModel<Product>) -> impl IntoView {
    let state = vm.state;
    let is_editing = move || state.with(|s| s.is_editing());

    let on_submit = {
        let vm = vm.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        }
    };
    let on_cancel = {
        let vm = vm.clone();
        move |_: MouseEvent| vm.cancel()
    };

    view! {
        <div class="form-container">
            <h2>{move || if is_editing() { "Edit Product" } else { "Add New Product" }}</h2>
            <form on:submit=on_submit>
                <div class="form-grid">
                    <div class="form-group">
                        <label for="name">"Product Name *"</label>
                        <input
                            type="text"
                            id="name"
                            class="form-control"
                            placeholder="Enter product name"
                            prop:value=move || state.with(|s| s.form.name.clone())
                            on:input=move |ev| state.update(|s| s.form.name = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="price">"Price (NZD) *"</label>
                        <input
                            type="number"
                            id="price"
                            class="form-control"
                            placeholder="0.00"
                            step="0.01"
                            min="0"
                            prop:value=move || state.with(|s| s.form.price.clone())
                            on:input=move |ev| state.update(|s| s.form.price = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="category">"Category *"</label>
                        <select
                            id="category"
                            class="form-control"
                            prop:value=move || state.with(|s| s.form.category.clone())
                            on:change=move |ev| state.update(|s| s.form.category = event_target_value(&ev))
                        >
                            <option value="">"Select Category"</option>
                            {ProductCategory::ALL
                                .iter()
                                .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="stock">"Stock Quantity *"</label>
                        <input
                            type="number"
                            id="stock"
                            class="form-control"
                            placeholder="0"
                            min="0"
                            prop:value=move || state.with(|s| s.form.stock.clone())
                            on:input=move |ev| state.update(|s| s.form.stock = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        class="form-control"
                        placeholder="Enter product description..."
                        rows="3"
                        prop:value=move || state.with(|s| s.form.description.clone())
                        on:input=move |ev| state.update(|s| s.form.description = event_target_value(&ev))
                    />
                </div>

                <div class="form-actions">
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || state.with(|s| s.is_submitting())
                    >
                        {move || if is_editing() { "Update Product" } else { "Add Product" }}
                    </button>
                    <Show when=is_editing>
                        <button type="button" class="btn btn-secondary" on:click=on_cancel.clone()>
                            "Cancel Edit"
                        </button>
                    </Show>
                </div>
            </form>
        </div>
    }
}
