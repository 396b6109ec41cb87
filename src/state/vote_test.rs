use super::*;

fn submitting() -> VoteFormState {
    let mut state = VoteFormState::default();
    state.select(3);
    assert!(state.begin_submit());
    state
}

fn finish_with(status: u16, body: &str) -> (VoteFormState, Followup) {
    let mut state = submitting();
    let followup = state.finish(VoteOutcome::classify(Ok(HttpResponse::new(status, body))));
    (state, followup)
}

// =============================================================
// Selection and submit enablement
// =============================================================

#[test]
fn fresh_form_has_submit_disabled() {
    let state = VoteFormState::default();
    assert!(!state.submit_enabled());
    assert!(!state.radios_disabled());
    assert_eq!(state.selected, None);
}

#[test]
fn selecting_a_ballot_item_enables_submit() {
    let mut state = VoteFormState::default();
    state.select(5);
    assert!(state.submit_enabled());
    assert!(state.is_checked(5));
    assert!(!state.is_checked(3));
}

#[test]
fn reselecting_moves_the_single_check() {
    let mut state = VoteFormState::default();
    state.select(5);
    state.select(3);
    assert!(state.is_checked(3));
    assert!(!state.is_checked(5));
}

#[test]
fn begin_submit_requires_selection() {
    let mut state = VoteFormState::default();
    assert!(!state.begin_submit());
    assert_eq!(state.phase, VotePhase::Unsubmitted);
}

#[test]
fn only_one_submission_in_flight() {
    let mut state = submitting();
    assert!(!state.submit_enabled());
    assert!(!state.begin_submit());
    assert_eq!(state.phase, VotePhase::Submitting);
}

#[test]
fn selection_is_frozen_while_submitting() {
    let mut state = submitting();
    state.select(9);
    assert!(state.is_checked(3));
    assert!(state.radios_disabled());
}

// =============================================================
// Field parsing
// =============================================================

#[test]
fn parse_vote_fields_reads_numbers() {
    assert_eq!(
        parse_vote_fields(Some("1"), Some("3")),
        Ok(VotePayload { election_id: 1, selected_ballot_item_id: 3 })
    );
}

#[test]
fn parse_vote_fields_rejects_missing_selection() {
    assert_eq!(
        parse_vote_fields(Some("1"), None),
        Err(PayloadError::Missing("selected-ballot-item-id"))
    );
}

#[test]
fn parse_vote_fields_rejects_non_numeric_id() {
    assert_eq!(
        parse_vote_fields(Some("abc"), Some("3")),
        Err(PayloadError::NotNumeric { field: "election-id", value: "abc".to_owned() })
    );
}

#[test]
fn rejected_fields_return_form_to_unsubmitted_with_message() {
    let mut state = submitting();
    state.reject_fields(&PayloadError::Missing("election-id"));
    assert_eq!(state.phase, VotePhase::Unsubmitted);
    assert_eq!(state.message.as_deref(), Some(INVALID_SELECTION_MESSAGE));
    assert!(state.submit_enabled());
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn success_is_terminal_with_success_message() {
    let (state, followup) = finish_with(200, "");
    assert_eq!(followup, Followup::Stay);
    assert_eq!(state.message.as_deref(), Some("Voting successful."));
    assert_eq!(state.phase, VotePhase::Terminal(TerminalReason::Accepted));
    assert!(state.radios_disabled());
    assert!(!state.submit_enabled());
}

#[test]
fn forbidden_is_terminal_and_shows_body() {
    let (state, followup) = finish_with(403, "already voted");
    assert_eq!(followup, Followup::Stay);
    assert_eq!(state.message.as_deref(), Some("Error: already voted"));
    assert_eq!(state.phase, VotePhase::Terminal(TerminalReason::Rejected));
    assert!(state.is_terminal());
}

#[test]
fn not_found_shows_body_and_keeps_inputs_enabled() {
    let (state, _) = finish_with(404, "not found");
    assert_eq!(state.message.as_deref(), Some("Error: not found"));
    assert!(!state.radios_disabled());
    assert!(state.submit_enabled());
}

#[test]
fn server_error_shows_body_and_keeps_inputs_enabled() {
    let (state, _) = finish_with(500, "Unexpected internal error.");
    assert_eq!(state.message.as_deref(), Some("Error: Unexpected internal error."));
    assert!(!state.is_terminal());
    assert!(state.submit_enabled());
}

#[test]
fn unauthorized_requests_login_without_message() {
    let (state, followup) = finish_with(401, "You need to log in first.");
    assert_eq!(followup, Followup::Login);
    assert_eq!(state.message, None);
    assert!(!state.is_terminal());
}

#[test]
fn unauthorized_outcome_asks_for_login_without_a_form() {
    let outcome = VoteOutcome::classify(Ok(HttpResponse::new(401, "You need to log in first.")));
    assert_eq!(outcome.followup(), Followup::Login);
    for status in [200, 403, 404, 500, 418] {
        assert_eq!(VoteOutcome::classify(Ok(HttpResponse::new(status, ""))).followup(), Followup::Stay);
    }
    assert_eq!(VoteOutcome::SendFailed("offline".to_owned()).followup(), Followup::Stay);
}

#[test]
fn other_status_shows_unexpected_error() {
    let (state, followup) = finish_with(418, "teapot");
    assert_eq!(followup, Followup::Stay);
    assert_eq!(state.message.as_deref(), Some("Unexpected error: 418"));
    assert!(state.submit_enabled());
}

#[test]
fn transport_failure_allows_retry() {
    let mut state = submitting();
    let outcome = VoteOutcome::classify(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(outcome, VoteOutcome::SendFailed("request failed: offline".to_owned()));
    state.finish(outcome);
    assert_eq!(state.message.as_deref(), Some(VOTE_SEND_FAILED_MESSAGE));
    assert!(state.begin_submit());
}

#[test]
fn retry_after_error_can_succeed() {
    let (mut state, _) = finish_with(404, "not found");
    state.select(4);
    assert!(state.begin_submit());
    state.finish(VoteOutcome::Accepted);
    assert_eq!(state.message.as_deref(), Some(VOTE_SUCCESS_MESSAGE));
    assert!(state.is_checked(4));
}

#[test]
fn terminal_form_accepts_no_further_submissions() {
    let (mut state, _) = finish_with(200, "");
    state.select(7);
    assert!(state.is_checked(3));
    assert!(!state.begin_submit());
}
