//! Per-form vote submission state machine.
//!
//! ```text
//! Unsubmitted(no selection) --select--> Unsubmitted(selected)
//! Unsubmitted(selected) --submit--> Submitting
//! Submitting --2xx--> Terminal(Accepted)
//! Submitting --403--> Terminal(Rejected)
//! Submitting --other--> Unsubmitted(selected)
//! ```
//!
//! Terminal forms have every input disabled for the life of the form.

#[cfg(test)]
#[path = "vote_test.rs"]
mod vote_test;

use crate::net::api::{ApiError, HttpResponse};
use crate::net::types::{BallotItemId, VotePayload};
use crate::state::followup::Followup;

pub const VOTE_SUCCESS_MESSAGE: &str = "Voting successful.";
pub const VOTE_SEND_FAILED_MESSAGE: &str = "Error: could not submit vote.";
pub const INVALID_SELECTION_MESSAGE: &str = "Error: invalid ballot selection.";

/// Statuses whose body text is shown to the voter verbatim.
const REPORTED_STATUSES: [u16; 3] = [403, 404, 500];

/// The form's hidden election id or checked radio value did not parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("missing form field `{0}`")]
    Missing(&'static str),
    #[error("form field `{field}` is not a number: {value:?}")]
    NotNumeric { field: &'static str, value: String },
}

fn parse_field(field: &'static str, value: Option<&str>) -> Result<u64, PayloadError> {
    let value = value.ok_or(PayloadError::Missing(field))?;
    value
        .trim()
        .parse()
        .map_err(|_| PayloadError::NotNumeric { field, value: value.to_owned() })
}

/// Build the vote payload from raw form field values.
///
/// # Errors
///
/// Returns a [`PayloadError`] if either field is absent or not an integer.
pub fn parse_vote_fields(election_id: Option<&str>, selected_ballot_item_id: Option<&str>) -> Result<VotePayload, PayloadError> {
    Ok(VotePayload {
        election_id: parse_field("election-id", election_id)?,
        selected_ballot_item_id: parse_field("selected-ballot-item-id", selected_ballot_item_id)?,
    })
}

/// Why a form reached its terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalReason {
    Accepted,
    /// The server answered 403: the vote is final but was refused.
    Rejected,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VotePhase {
    #[default]
    Unsubmitted,
    Submitting,
    Terminal(TerminalReason),
}

/// Classified result of `POST /elections/vote`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoteOutcome {
    Accepted,
    Unauthorized,
    /// 403, 404 or 500 with the server's explanation.
    Reported { status: u16, body: String },
    UnexpectedStatus(u16),
    SendFailed(String),
}

impl VoteOutcome {
    pub fn classify(result: Result<HttpResponse, ApiError>) -> Self {
        match result {
            Ok(resp) if resp.is_success() => Self::Accepted,
            Ok(resp) if resp.status == 401 => Self::Unauthorized,
            Ok(resp) if REPORTED_STATUSES.contains(&resp.status) => {
                Self::Reported { status: resp.status, body: resp.body }
            }
            Ok(resp) => Self::UnexpectedStatus(resp.status),
            Err(e) => Self::SendFailed(e.to_string()),
        }
    }

    /// Navigation this outcome calls for, independent of any form state.
    pub fn followup(&self) -> Followup {
        match self {
            Self::Unauthorized => Followup::Login,
            _ => Followup::Stay,
        }
    }

    /// Whether this outcome ends the form for good.
    fn terminal_reason(&self) -> Option<TerminalReason> {
        match self {
            Self::Accepted => Some(TerminalReason::Accepted),
            Self::Reported { status: 403, .. } => Some(TerminalReason::Rejected),
            _ => None,
        }
    }
}

/// Selection, phase, and message line of one rendered election form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoteFormState {
    pub selected: Option<BallotItemId>,
    pub phase: VotePhase,
    pub message: Option<String>,
}

impl VoteFormState {
    /// Record a radio change. Ignored once submitting or terminal.
    pub fn select(&mut self, ballot_item_id: BallotItemId) {
        if self.phase == VotePhase::Unsubmitted {
            self.selected = Some(ballot_item_id);
        }
    }

    pub fn is_checked(&self, ballot_item_id: BallotItemId) -> bool {
        self.selected == Some(ballot_item_id)
    }

    pub fn submit_enabled(&self) -> bool {
        self.phase == VotePhase::Unsubmitted && self.selected.is_some()
    }

    /// Radios are frozen while a vote is in flight and forever once terminal.
    pub fn radios_disabled(&self) -> bool {
        self.phase != VotePhase::Unsubmitted
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, VotePhase::Terminal(_))
    }

    /// Enter `Submitting` if a submission is currently allowed.
    ///
    /// Returns `false` when the form already has a vote in flight, is
    /// terminal, or has nothing selected.
    pub fn begin_submit(&mut self) -> bool {
        if !self.submit_enabled() {
            return false;
        }
        self.phase = VotePhase::Submitting;
        true
    }

    /// Report form fields that could not be turned into a payload.
    pub fn reject_fields(&mut self, err: &PayloadError) {
        log::warn!("vote form fields rejected: {err}");
        if self.phase == VotePhase::Submitting {
            self.phase = VotePhase::Unsubmitted;
        }
        self.message = Some(INVALID_SELECTION_MESSAGE.to_owned());
    }

    /// Apply the server's answer to the in-flight submission.
    pub fn finish(&mut self, outcome: VoteOutcome) -> Followup {
        let followup = outcome.followup();
        self.phase = match outcome.terminal_reason() {
            Some(reason) => VotePhase::Terminal(reason),
            None => VotePhase::Unsubmitted,
        };
        match outcome {
            VoteOutcome::Accepted => {
                self.message = Some(VOTE_SUCCESS_MESSAGE.to_owned());
            }
            VoteOutcome::Unauthorized => {}
            VoteOutcome::Reported { status, body } => {
                log::info!("vote rejected with {status}: {body}");
                self.message = Some(format!("Error: {body}"));
            }
            VoteOutcome::UnexpectedStatus(status) => {
                log::warn!("vote returned {status}");
                self.message = Some(format!("Unexpected error: {status}"));
            }
            VoteOutcome::SendFailed(reason) => {
                log::warn!("vote request failed: {reason}");
                self.message = Some(VOTE_SEND_FAILED_MESSAGE.to_owned());
            }
        }
        followup
    }
}
