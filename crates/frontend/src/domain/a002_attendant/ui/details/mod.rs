use contracts::domain::a002_attendant::Attendant;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

use crate::shared::crud_page::CrudPageViewModel;

#[component]
pub fn AttendantDetails(vm: CrudPageViewModel<Attendant>) -> impl IntoView {
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
            <h2>{move || if is_editing() { "Edit Attendant" } else { "Add New Attendant" }}</h2>
            <form on:submit=on_submit>
                <div class="form-grid">
                    <div class="form-group">
                        <label for="name">"Full Name *"</label>
                        <input
                            type="text"
                            id="name"
                            class="form-control"
                            placeholder="Enter attendant's full name"
                            prop:value=move || state.with(|s| s.form.name.clone())
                            on:input=move |ev| state.update(|s| s.form.name = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="mobile">"Mobile Number"</label>
                        <input
                            type="tel"
                            id="mobile"
                            class="form-control"
                            placeholder="e.g. +64 21 123 4567"
                            prop:value=move || state.with(|s| s.form.mobile.clone())
                            on:input=move |ev| state.update(|s| s.form.mobile = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="email">"Email Address"</label>
                        <input
                            type="email"
                            id="email"
                            class="form-control"
                            placeholder="name@example.com"
                            prop:value=move || state.with(|s| s.form.email.clone())
                            on:input=move |ev| state.update(|s| s.form.email = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="address">"Address"</label>
                        <input
                            type="text"
                            id="address"
                            class="form-control"
                            placeholder="Street, city"
                            prop:value=move || state.with(|s| s.form.address.clone())
                            on:input=move |ev| state.update(|s| s.form.address = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="comments">"Comments"</label>
                    <textarea
                        id="comments"
                        class="form-control"
                        placeholder="Additional notes..."
                        rows="3"
                        prop:value=move || state.with(|s| s.form.comments.clone())
                        on:input=move |ev| state.update(|s| s.form.comments = event_target_value(&ev))
                    />
                </div>

                <div class="form-actions">
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || state.with(|s| s.is_submitting())
                    >
                        {move || if is_editing() { "Update Attendant" } else { "Add Attendant" }}
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
