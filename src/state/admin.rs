//! Admin create-election draft.
//!
//! DESIGN
//! ======
//! The draft owns its own key counter so ballot item rows keep stable keys
//! across add/remove without any page-global state. Keys are never reused
//! within one draft, including after a reset.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::api::{ApiError, HttpResponse};
use crate::net::types::CreateElectionPayload;
use crate::state::followup::Followup;

pub const CREATED_MESSAGE: &str = "Created election successfully.";
pub const CREATE_SEND_FAILED_MESSAGE: &str = "Error: could not create election.";

/// Reasons a draft cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Election title cannot be empty.")]
    EmptyTitle,
    #[error("Ballot item name cannot be empty.")]
    EmptyBallotItem,
}

/// One editable ballot item row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftBallotItem {
    pub key: u64,
    pub name: String,
}

impl DraftBallotItem {
    /// Form field name for this row.
    pub fn field_name(&self) -> String {
        format!("ballot-item-{}", self.key)
    }
}

/// Classified result of `POST /admin/create-election`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    Unauthorized,
    UnexpectedStatus(u16),
    SendFailed(String),
}

impl CreateOutcome {
    pub fn classify(result: Result<HttpResponse, ApiError>) -> Self {
        match result {
            Ok(resp) if resp.is_success() => Self::Created,
            Ok(resp) if resp.status == 401 => Self::Unauthorized,
            Ok(resp) => Self::UnexpectedStatus(resp.status),
            Err(e) => Self::SendFailed(e.to_string()),
        }
    }

    pub fn followup(&self) -> Followup {
        match self {
            Self::Unauthorized => Followup::Login,
            _ => Followup::Stay,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateElectionDraft {
    pub name: String,
    pub ballot_items: Vec<DraftBallotItem>,
    pub message: Option<String>,
    pub busy: bool,
    next_key: u64,
}

impl CreateElectionDraft {
    /// Append an empty ballot item row and return its key.
    pub fn add_ballot_item(&mut self) -> u64 {
        let key = self.next_key;
        self.next_key += 1;
        self.ballot_items.push(DraftBallotItem { key, name: String::new() });
        key
    }

    pub fn remove_ballot_item(&mut self, key: u64) {
        self.ballot_items.retain(|item| item.key != key);
    }

    pub fn set_ballot_item_name(&mut self, key: u64, name: &str) {
        if let Some(item) = self.ballot_items.iter_mut().find(|item| item.key == key) {
            name.clone_into(&mut item.name);
        }
    }

    /// Validate the draft into a request body.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::EmptyTitle`] before checking ballot items, then
    /// [`DraftError::EmptyBallotItem`] for the first empty row.
    pub fn payload(&self) -> Result<CreateElectionPayload, DraftError> {
        if self.name.is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.ballot_items.iter().any(|item| item.name.is_empty()) {
            return Err(DraftError::EmptyBallotItem);
        }
        Ok(CreateElectionPayload {
            name: self.name.clone(),
            ballot_items: self.ballot_items.iter().map(|item| item.name.clone()).collect(),
        })
    }

    /// Validate and mark a submission in flight.
    ///
    /// Returns `None` when a submission is already running or validation
    /// failed; validation errors are written to `message`.
    pub fn begin_submit(&mut self) -> Option<CreateElectionPayload> {
        if self.busy {
            return None;
        }
        match self.payload() {
            Ok(payload) => {
                self.busy = true;
                Some(payload)
            }
            Err(e) => {
                self.message = Some(format!("Error: {e}"));
                None
            }
        }
    }

    pub fn finish(&mut self, outcome: CreateOutcome) -> Followup {
        let followup = outcome.followup();
        self.busy = false;
        match outcome {
            CreateOutcome::Created => {
                self.name.clear();
                self.ballot_items.clear();
                self.message = Some(CREATED_MESSAGE.to_owned());
            }
            CreateOutcome::Unauthorized => {}
            CreateOutcome::UnexpectedStatus(status) => {
                log::warn!("create election returned {status}");
                self.message = Some(format!("Unexpected error: {status}"));
            }
            CreateOutcome::SendFailed(reason) => {
                log::warn!("create election request failed: {reason}");
                self.message = Some(CREATE_SEND_FAILED_MESSAGE.to_owned());
            }
        }
        followup
    }
}
