//! Wire DTOs for the election API.
//!
//! DESIGN
//! ======
//! Field names mirror the server's camelCase JSON. Snapshots use `BTreeMap`
//! so iteration is already in ascending id order; the server sends ids as
//! JSON object keys (strings), which serde parses back into integers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub type ElectionId = u64;
pub type BallotItemId = u64;

/// One selectable option within an election.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotItem {
    pub id: BallotItemId,
    pub name: String,
}

/// A named vote with its ballot items keyed by id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Election {
    pub id: ElectionId,
    pub name: String,
    #[serde(default)]
    pub ballot_items_by_id: BTreeMap<BallotItemId, BallotItem>,
}

/// Root body of `GET /elections`.
pub type ElectionsSnapshot = BTreeMap<ElectionId, Election>;

/// Body of `POST /elections/vote`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotePayload {
    pub election_id: ElectionId,
    pub selected_ballot_item_id: BallotItemId,
}

/// Body of `POST /admin/create-election`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateElectionPayload {
    pub name: String,
    pub ballot_items: Vec<String>,
}

/// Body of the credential endpoints (`/participants/add`, `/admin/start-session`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPayload {
    pub password: String,
}
