//! Election list state and the election form renderer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The poller feeds each listing response through [`ListingOutcome::classify`]
//! and [`ElectionsState::apply`]. Components render straight from
//! [`ElectionFormModel`], which fixes every element id up front so repeated
//! redraws of the same snapshot produce identical markup.
//!
//! DESIGN
//! ======
//! A successful refresh replaces every form wholesale and bumps `redraws`;
//! failures only touch `error`. The list component keys its forms on `redraws`, so an
//! error never resets a half-filled ballot.

#[cfg(test)]
#[path = "elections_test.rs"]
mod elections_test;

use crate::net::api::{ApiError, HttpResponse};
use crate::net::types::{BallotItemId, Election, ElectionId, ElectionsSnapshot};
use crate::state::followup::Followup;
use crate::util::poll::PollHandle;

/// Shown when the listing request or its body fails outright.
pub const LOAD_FAILED_MESSAGE: &str = "Error: could not load election data.";

/// Name of the hidden field carrying the election id.
pub const ELECTION_ID_FIELD: &str = "election-id";

pub fn form_id(election_id: ElectionId) -> String {
    format!("election-{election_id}")
}

pub fn radio_group_name(election_id: ElectionId) -> String {
    format!("election-{election_id}-selected-ballot-item-id")
}

pub fn ballot_item_input_id(election_id: ElectionId, ballot_item_id: BallotItemId) -> String {
    format!("election-{election_id}-ballot-item-{ballot_item_id}")
}

pub fn submit_button_id(election_id: ElectionId) -> String {
    format!("election-{election_id}-submit")
}

pub fn message_id(election_id: ElectionId) -> String {
    format!("election-{election_id}-message")
}

/// One radio input and its label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BallotItemOption {
    pub id: BallotItemId,
    pub input_id: String,
    /// Radio `value`, the ballot item id as text.
    pub value: String,
    pub label: String,
}

/// Render-ready description of one election form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElectionFormModel {
    pub election_id: ElectionId,
    pub name: String,
    pub form_id: String,
    pub radio_group: String,
    pub submit_id: String,
    pub message_id: String,
    /// Ballot items in ascending id order.
    pub items: Vec<BallotItemOption>,
}

impl ElectionFormModel {
    pub fn render(election: &Election) -> Self {
        let items = election
            .ballot_items_by_id
            .values()
            .map(|item| BallotItemOption {
                id: item.id,
                input_id: ballot_item_input_id(election.id, item.id),
                value: item.id.to_string(),
                label: item.name.clone(),
            })
            .collect();
        Self {
            election_id: election.id,
            name: election.name.clone(),
            form_id: form_id(election.id),
            radio_group: radio_group_name(election.id),
            submit_id: submit_button_id(election.id),
            message_id: message_id(election.id),
            items,
        }
    }

    /// Hidden `election-id` field value.
    pub fn election_id_value(&self) -> String {
        self.election_id.to_string()
    }
}

/// Render one form per election in ascending id order.
pub fn render_snapshot(snapshot: &ElectionsSnapshot) -> Vec<ElectionFormModel> {
    snapshot.values().map(ElectionFormModel::render).collect()
}

/// Classified result of one `GET /elections` cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingOutcome {
    Loaded(ElectionsSnapshot),
    Unauthorized,
    UnexpectedStatus(u16),
    LoadFailed(String),
}

impl ListingOutcome {
    pub fn classify(result: Result<HttpResponse, ApiError>) -> Self {
        let resp = match result {
            Ok(resp) => resp,
            Err(e) => return Self::LoadFailed(e.to_string()),
        };
        if resp.is_success() {
            return match resp.json::<ElectionsSnapshot>() {
                Ok(snapshot) => Self::Loaded(snapshot),
                Err(e) => Self::LoadFailed(e.to_string()),
            };
        }
        if resp.status == 401 {
            return Self::Unauthorized;
        }
        Self::UnexpectedStatus(resp.status)
    }

    /// Navigation this outcome calls for, independent of any list state.
    pub fn followup(&self) -> Followup {
        match self {
            Self::Unauthorized => Followup::Login,
            _ => Followup::Stay,
        }
    }
}

/// Rendered election list plus the list-level error line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElectionsState {
    pub forms: Vec<ElectionFormModel>,
    pub error: Option<String>,
    /// Count of successful full redraws.
    pub redraws: u64,
}

impl ElectionsState {
    /// Apply one poll cycle's outcome.
    ///
    /// Only a successful load touches `forms`. The error line is left as-is on
    /// success; it reflects the most recent failure.
    pub fn apply(&mut self, outcome: ListingOutcome) -> Followup {
        let followup = outcome.followup();
        match outcome {
            ListingOutcome::Loaded(snapshot) => {
                self.forms = render_snapshot(&snapshot);
                self.redraws += 1;
            }
            ListingOutcome::Unauthorized => {}
            ListingOutcome::UnexpectedStatus(status) => {
                log::warn!("election listing returned {status}");
                self.error = Some(format!("Unexpected error: {status}"));
            }
            ListingOutcome::LoadFailed(reason) => {
                log::warn!("election listing failed: {reason}");
                self.error = Some(LOAD_FAILED_MESSAGE.to_owned());
            }
        }
        followup
    }
}

/// Navigation target after one listing cycle.
///
/// A 401 stops `handle` and yields `login_route`, but only for the cycle that
/// actually stopped it, so overlapping cycles redirect once.
pub fn redirect_after_listing(followup: Followup, handle: &PollHandle, login_route: &'static str) -> Option<&'static str> {
    (followup == Followup::Login && handle.stop()).then_some(login_route)
}
