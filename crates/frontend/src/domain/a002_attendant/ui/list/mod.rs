use contracts::domain::a002_attendant::{quick_contacts, Attendant, AttendantStats};
use contracts::domain::common::has_text;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

use crate::shared::components::stat_card::StatCard;
use crate::shared::crud_page::CrudPageViewModel;
use crate::shared::format::{or_not_provided, truncate};

const COMMENT_PREVIEW_CHARS: usize = 50;

#[component]
pub fn AttendantList(vm: CrudPageViewModel<Attendant>) -> impl IntoView {
    let state = vm.state;
    let search = vm.search;
    let stats = Memo::new(move |_| state.with(|s| AttendantStats::from_items(&s.items)));

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

    let rows = {
        let vm = vm.clone();
        move || {
            state
                .with(|s| s.items.clone())
                .into_iter()
                .map(|attendant| attendant_row(attendant, vm.clone()))
                .collect_view()
        }
    };

    let contacts = move || {
        state.with(|s| {
            quick_contacts(&s.items)
                .into_iter()
                .map(|a| {
                    view! {
                        <div class="contact-card">
                            <strong>{a.name.clone()}</strong>
                            {has_text(&a.email).then(|| view! { <p>"✉ " {or_not_provided(&a.email)}</p> })}
                            {has_text(&a.mobile).then(|| view! { <p>"☎ " {or_not_provided(&a.mobile)}</p> })}
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="list-container">
            <div class="list-toolbar">
                <form class="list-toolbar__search" on:submit=on_search>
                    <input
                        type="search"
                        class="form-control"
                        placeholder="Search attendants by name"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-secondary">"Search"</button>
                    <button type="button" class="btn btn-secondary" on:click=on_clear>"Clear"</button>
                </form>
            </div>

            <h2>{move || format!("Attendant List ({} attendants)", state.with(|s| s.items.len()))}</h2>

            {move || {
                let (loading, empty) = state.with(|s| (s.is_loading(), s.items.is_empty()));
                if loading && empty {
                    view! {
                        <div class="loading">
                            <div class="loading-spinner"></div>
                            <p>"Loading attendants..."</p>
                        </div>
                    }
                    .into_any()
                } else if empty {
                    view! {
                        <div class="alert alert-info">
                            "No attendants found. Add your first attendant using the form above."
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
                                    <th>"Mobile"</th>
                                    <th>"Email"</th>
                                    <th>"Address"</th>
                                    <th>"Comments"</th>
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
                    <h3>"Attendant Statistics"</h3>
                    <div class="stats-grid">
                        <StatCard
                            label="Total Attendants"
                            value=Signal::derive(move || stats.get().total.to_string())
                        />
                        <StatCard
                            label="With Email"
                            value=Signal::derive(move || stats.get().with_email.to_string())
                        />
                        <StatCard
                            label="With Mobile"
                            value=Signal::derive(move || stats.get().with_mobile.to_string())
                        />
                        <StatCard
                            label="With Address"
                            value=Signal::derive(move || stats.get().with_address.to_string())
                        />
                    </div>
                </div>
                <div class="contacts-panel">
                    <h3>"Quick Contact List"</h3>
                    <div class="contacts-grid">{contacts}</div>
                </div>
            </Show>
        </div>
    }
}

fn attendant_row(attendant: Attendant, vm: CrudPageViewModel<Attendant>) -> impl IntoView {
    let comments = match attendant.comments.as_deref().filter(|c| !c.trim().is_empty()) {
        Some(c) => view! { <span title=c.to_string()>{truncate(c, COMMENT_PREVIEW_CHARS)}</span> }
            .into_any(),
        None => view! { <span class="muted">"-"</span> }.into_any(),
    };

    let on_edit = {
        let vm = vm.clone();
        let attendant = attendant.clone();
        move |_: MouseEvent| vm.edit(attendant.clone())
    };
    let on_delete = {
        let attendant = attendant.clone();
        move |_: MouseEvent| vm.delete(attendant.clone())
    };

    view! {
        <tr>
            <td>{attendant.id}</td>
            <td><strong>{attendant.name.clone()}</strong></td>
            <td>{or_not_provided(&attendant.mobile)}</td>
            <td>{or_not_provided(&attendant.email)}</td>
            <td>{or_not_provided(&attendant.address)}</td>
            <td class="cell--description">{comments}</td>
            <td>
                <div class="table-actions">
                    <button class="btn btn-warning" title="Edit Attendant" on:click=on_edit>"Edit"</button>
                    <button class="btn btn-danger" title="Delete Attendant" on:click=on_delete>"Delete"</button>
                </div>
            </td>
        </tr>
    }
}
