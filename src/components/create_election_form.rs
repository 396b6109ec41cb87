//! Admin form for creating an election with its ballot items.

use leptos::prelude::*;

use crate::config::ViewConfig;
use crate::state::admin::CreateElectionDraft;

#[component]
pub fn CreateElectionForm(config: ViewConfig) -> impl IntoView {
    let draft = RwSignal::new(CreateElectionDraft::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = draft.try_update(CreateElectionDraft::begin_submit).flatten() else {
            return;
        };

        log::info!(
            "{:?} creating election {:?} with {} ballot items",
            config.role,
            payload.name,
            payload.ballot_items.len()
        );
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::state::admin::CreateOutcome;

            let outcome = CreateOutcome::classify(
                crate::net::api::post_json(crate::config::CREATE_ELECTION_ENDPOINT, &payload).await,
            );
            let followup = outcome.followup();
            draft.update(|d| {
                d.finish(outcome);
            });
            crate::util::session::follow(&config, followup);
        });
    };

    let on_add = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        draft.update(|d| {
            d.add_ballot_item();
        });
    };

    // Rebuild rows only when rows are added or removed, not on every keystroke.
    let row_keys = Memo::new(move |_| {
        draft.with(|d| d.ballot_items.iter().map(|item| (item.key, item.field_name())).collect::<Vec<_>>())
    });

    let rows = move || {
        row_keys
            .get()
            .into_iter()
            .map(|(key, field_name)| {
                view! {
                    <li class="create-election__item">
                        <input
                            type="text"
                            name=field_name
                            prop:value=move || {
                                draft.with(|d| {
                                    d.ballot_items
                                        .iter()
                                        .find(|item| item.key == key)
                                        .map(|item| item.name.clone())
                                        .unwrap_or_default()
                                })
                            }
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.set_ballot_item_name(key, &value));
                            }
                        />
                        <button
                            class="btn"
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                ev.prevent_default();
                                draft.update(|d| d.remove_ballot_item(key));
                            }
                        >
                            "Delete"
                        </button>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <form id="create-election-form" class="create-election" on:submit=on_submit>
            <label for="create-election-name">"Election title"</label>
            <input
                id="create-election-name"
                type="text"
                name="name"
                prop:value=move || draft.with(|d| d.name.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.name = value);
                }
            />
            <ul id="ballot-items" class="create-election__items">{rows}</ul>
            <button id="add-ballot-item" class="btn" on:click=on_add>
                "Add ballot item"
            </button>
            <input type="submit" value="Create election" prop:disabled=move || draft.with(|d| d.busy)/>
            <p id="create-election-form-message" class="create-election__message">
                {move || draft.with(|d| d.message.clone().unwrap_or_default())}
            </p>
        </form>
    }
}
