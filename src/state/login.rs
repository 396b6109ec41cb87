//! Password login form state shared by participant and admin login pages.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::api::{ApiError, HttpResponse};
use crate::state::followup::Followup;

pub const WRONG_PASSWORD_MESSAGE: &str = "Wrong password.";
pub const UNREACHABLE_MESSAGE: &str = "Error: could not reach the server.";

/// Classified result of a credential submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    WrongPassword,
    UnexpectedStatus(u16),
    SendFailed(String),
}

impl LoginOutcome {
    pub fn classify(result: Result<HttpResponse, ApiError>) -> Self {
        match result {
            Ok(resp) if resp.status == 401 => Self::WrongPassword,
            Ok(resp) if !resp.is_success() => Self::UnexpectedStatus(resp.status),
            Ok(_) => Self::Accepted,
            Err(e) => Self::SendFailed(e.to_string()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub busy: bool,
    pub message: Option<String>,
}

impl LoginState {
    /// Mark a submission in flight. Returns `false` if one already is.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn finish(&mut self, outcome: LoginOutcome) -> Followup {
        self.busy = false;
        match outcome {
            LoginOutcome::Accepted => {
                self.message = None;
                return Followup::Home;
            }
            LoginOutcome::WrongPassword => {
                self.message = Some(WRONG_PASSWORD_MESSAGE.to_owned());
            }
            LoginOutcome::UnexpectedStatus(status) => {
                log::warn!("login returned {status}");
                self.message = Some(format!("Unexpected error: {status}"));
            }
            LoginOutcome::SendFailed(reason) => {
                log::warn!("login request failed: {reason}");
                self.message = Some(UNREACHABLE_MESSAGE.to_owned());
            }
        }
        Followup::Stay
    }
}
