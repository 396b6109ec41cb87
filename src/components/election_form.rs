//! One election's ballot form.
//!
//! DESIGN
//! ======
//! Each form owns its `VoteFormState` signal and its form `NodeRef`, so submit
//! handlers never look elements up by id and never touch a sibling form.
//! Element ids still come from `ElectionFormModel` for stable markup.

use leptos::prelude::*;

use crate::config::ViewConfig;
#[cfg(feature = "csr")]
use crate::net::types::VotePayload;
use crate::state::elections::{ELECTION_ID_FIELD, ElectionFormModel};
use crate::state::vote::VoteFormState;
#[cfg(feature = "csr")]
use crate::state::vote::{PayloadError, VoteOutcome, parse_vote_fields};

/// Label plus form for one election.
///
/// With voting disabled (admin overview) the radios are read-only and the
/// submit button and message line are omitted.
#[component]
pub fn ElectionForm(model: ElectionFormModel, config: ViewConfig) -> impl IntoView {
    let vote = RwSignal::new(VoteFormState::default());
    let form_ref = NodeRef::<leptos::html::Form>::new();
    let voting_enabled = config.voting_enabled;
    #[cfg(feature = "csr")]
    let radio_group = model.radio_group.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !voting_enabled {
            return;
        }
        #[cfg(feature = "csr")]
        submit_vote(vote, form_ref, &radio_group, config);
    };

    let group = model.radio_group.clone();
    let radios = model
        .items
        .into_iter()
        .map(|item| {
            let item_id = item.id;
            view! {
                <input
                    type="radio"
                    id=item.input_id.clone()
                    name=group.clone()
                    value=item.value
                    prop:checked=move || vote.with(|v| v.is_checked(item_id))
                    prop:disabled=move || !voting_enabled || vote.with(VoteFormState::radios_disabled)
                    on:change=move |_| vote.update(|v| v.select(item_id))
                />
                <label for=item.input_id>{item.label}</label>
                <br/>
            }
        })
        .collect::<Vec<_>>();

    let form_id = model.form_id;
    let label_for = form_id.clone();
    let submit_id = model.submit_id;
    let message_id = model.message_id;
    let controls = voting_enabled.then(move || {
        view! {
            <input
                id=submit_id
                type="submit"
                value="Submit"
                prop:disabled=move || !vote.with(VoteFormState::submit_enabled)
            />
            <p id=message_id class="election-form__message">
                {move || vote.with(|v| v.message.clone().unwrap_or_default())}
            </p>
        }
    });

    view! {
        <label class="election-form__name" for=label_for>{model.name}</label>
        <form id=form_id class="election-form" node_ref=form_ref on:submit=on_submit>
            {radios}
            <input
                type="hidden"
                name=ELECTION_ID_FIELD
                value=model.election_id.to_string()
                prop:disabled=move || vote.with(VoteFormState::is_terminal)
            />
            {controls}
        </form>
    }
}

/// Read the form fields, then post the vote.
///
/// Fields are read before entering `Submitting` because disabled controls
/// drop out of `FormData`.
#[cfg(feature = "csr")]
fn submit_vote(
    vote: RwSignal<VoteFormState>,
    form_ref: NodeRef<leptos::html::Form>,
    radio_group: &str,
    config: ViewConfig,
) {
    let fields = form_ref.get_untracked().map_or(Err(PayloadError::Missing(ELECTION_ID_FIELD)), |form| {
        parse_vote_fields(
            read_form_field(&form, ELECTION_ID_FIELD).as_deref(),
            read_form_field(&form, radio_group).as_deref(),
        )
    });

    if vote.try_update(VoteFormState::begin_submit) != Some(true) {
        return;
    }

    let payload: VotePayload = match fields {
        Ok(payload) => payload,
        Err(e) => {
            vote.update(|v| v.reject_fields(&e));
            return;
        }
    };

    log::info!("submitting vote for election {}", payload.election_id);
    leptos::task::spawn_local(async move {
        let outcome = VoteOutcome::classify(crate::net::api::post_json(config.vote_endpoint, &payload).await);
        // A redraw may have disposed this form; the redirect must still happen.
        let followup = outcome.followup();
        vote.update(|v| {
            v.finish(outcome);
        });
        crate::util::session::follow(&config, followup);
    });
}

#[cfg(feature = "csr")]
fn read_form_field(form: &web_sys::HtmlFormElement, name: &str) -> Option<String> {
    match web_sys::FormData::new_with_form(form) {
        Ok(data) => data.get(name).as_string(),
        Err(e) => {
            log::warn!("could not read form data: {e:?}");
            None
        }
    }
}
