use super::*;

fn filled_draft() -> CreateElectionDraft {
    let mut draft = CreateElectionDraft::default();
    draft.name = "Board".to_owned();
    let a = draft.add_ballot_item();
    let b = draft.add_ballot_item();
    draft.set_ballot_item_name(a, "Alice");
    draft.set_ballot_item_name(b, "Bob");
    draft
}

// =============================================================
// Ballot item rows
// =============================================================

#[test]
fn add_assigns_increasing_keys() {
    let mut draft = CreateElectionDraft::default();
    assert_eq!(draft.add_ballot_item(), 0);
    assert_eq!(draft.add_ballot_item(), 1);
    assert_eq!(draft.ballot_items[1].field_name(), "ballot-item-1");
}

#[test]
fn removed_keys_are_not_reused() {
    let mut draft = CreateElectionDraft::default();
    let first = draft.add_ballot_item();
    draft.remove_ballot_item(first);
    assert!(draft.ballot_items.is_empty());
    assert_eq!(draft.add_ballot_item(), 1);
}

#[test]
fn remove_keeps_other_rows_in_order() {
    let mut draft = filled_draft();
    let c = draft.add_ballot_item();
    draft.set_ballot_item_name(c, "Carol");
    draft.remove_ballot_item(1);
    let names: Vec<_> = draft.ballot_items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Carol"]);
}

#[test]
fn renaming_unknown_key_is_ignored() {
    let mut draft = filled_draft();
    let before = draft.clone();
    draft.set_ballot_item_name(99, "Zed");
    assert_eq!(draft, before);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn payload_collects_names_in_row_order() {
    let payload = filled_draft().payload().expect("draft should validate");
    assert_eq!(payload.name, "Board");
    assert_eq!(payload.ballot_items, vec!["Alice".to_owned(), "Bob".to_owned()]);
}

#[test]
fn payload_allows_zero_ballot_items() {
    let mut draft = CreateElectionDraft::default();
    draft.name = "Open".to_owned();
    assert_eq!(draft.payload().map(|p| p.ballot_items.len()), Ok(0));
}

#[test]
fn empty_title_is_checked_first() {
    let mut draft = filled_draft();
    draft.name.clear();
    draft.set_ballot_item_name(0, "");
    assert_eq!(draft.payload(), Err(DraftError::EmptyTitle));
}

#[test]
fn empty_ballot_item_is_rejected() {
    let mut draft = filled_draft();
    draft.set_ballot_item_name(1, "");
    assert_eq!(draft.payload(), Err(DraftError::EmptyBallotItem));
}

#[test]
fn begin_submit_writes_validation_message() {
    let mut draft = CreateElectionDraft::default();
    assert_eq!(draft.begin_submit(), None);
    assert_eq!(draft.message.as_deref(), Some("Error: Election title cannot be empty."));
    assert!(!draft.busy);
}

#[test]
fn begin_submit_refuses_overlap() {
    let mut draft = filled_draft();
    assert!(draft.begin_submit().is_some());
    assert!(draft.begin_submit().is_none());
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn created_resets_draft_and_reports_success() {
    let mut draft = filled_draft();
    draft.begin_submit();
    assert_eq!(draft.finish(CreateOutcome::classify(Ok(HttpResponse::new(200, "")))), Followup::Stay);
    assert!(draft.name.is_empty());
    assert!(draft.ballot_items.is_empty());
    assert_eq!(draft.message.as_deref(), Some(CREATED_MESSAGE));
    assert_eq!(draft.add_ballot_item(), 2);
}

#[test]
fn unauthorized_requests_login_and_keeps_draft() {
    let mut draft = filled_draft();
    draft.begin_submit();
    let followup = draft.finish(CreateOutcome::classify(Ok(HttpResponse::new(401, ""))));
    assert_eq!(followup, Followup::Login);
    assert_eq!(draft.name, "Board");
}

#[test]
fn unauthorized_outcome_asks_for_login_without_a_draft() {
    assert_eq!(CreateOutcome::classify(Ok(HttpResponse::new(401, ""))).followup(), Followup::Login);
    assert_eq!(CreateOutcome::classify(Ok(HttpResponse::new(500, ""))).followup(), Followup::Stay);
}

#[test]
fn other_status_is_unexpected_error() {
    let mut draft = filled_draft();
    draft.begin_submit();
    draft.finish(CreateOutcome::classify(Ok(HttpResponse::new(400, ""))));
    assert_eq!(draft.message.as_deref(), Some("Unexpected error: 400"));
    assert_eq!(draft.ballot_items.len(), 2);
}

#[test]
fn transport_failure_keeps_draft_for_retry() {
    let mut draft = filled_draft();
    draft.begin_submit();
    draft.finish(CreateOutcome::classify(Err(ApiError::Transport("offline".to_owned()))));
    assert_eq!(draft.message.as_deref(), Some(CREATE_SEND_FAILED_MESSAGE));
    assert!(draft.begin_submit().is_some());
}
