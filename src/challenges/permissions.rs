//! Derived action permissions for a challenge.
//!
//! A pure projection: given the viewing user, a challenge snapshot, the
//! user's teams, and any acceptance requests, compute every capability the
//! presentation layer needs. The whole record is recomputed on every call;
//! nothing is cached, so the flags can never go stale.

use std::collections::HashSet;

use serde::Serialize;

use crate::challenges::types::{
    AcceptanceRequestStatus, Challenge, ChallengeAcceptanceRequest, ChallengeStatus,
};
use crate::teams::{Team, User};

/// Capability set for one (user, challenge) pair.
///
/// The default value is all-`false`/`None`: absent inputs fail closed.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengePermissions {
    /// The user originated the challenge.
    pub is_creator: bool,
    /// The user belongs to the issuing team.
    pub is_sender_member: bool,
    /// The user belongs to the directly challenged team.
    pub is_receiver_member: bool,
    /// The user belongs to the team whose request was approved first.
    pub is_acceptor_member: bool,
    /// May edit the challenge while it is still open or pending.
    pub can_modify: bool,
    /// May accept on behalf of the directly challenged team.
    pub can_accept_directly: bool,
    /// May decline on behalf of the directly challenged team.
    pub can_decline_directly: bool,
    /// May submit an acceptance request for an open challenge.
    pub can_request_accept: bool,
    /// May withdraw the user's own pending acceptance request.
    pub can_withdraw_request: bool,
    /// May approve or reject incoming acceptance requests.
    pub can_manage_requests: bool,
    /// May withdraw the challenge itself. Same condition as `can_modify`,
    /// kept as its own field for semantic naming at the call site.
    pub can_withdraw_challenge: bool,
    /// One of the user's teams has a request awaiting approval.
    pub user_has_pending_request: bool,
    /// Id of that pending request, for withdraw calls.
    pub user_pending_request_id: Option<String>,
}

/// Derives the full capability set for a challenge.
///
/// All fourteen values are recomputed together; callers re-invoke whenever
/// any input changes.
///
/// # Arguments
///
/// * `user` - The viewing user, if authenticated
/// * `challenge` - The challenge snapshot, if loaded
/// * `user_teams` - Teams the user belongs to
/// * `acceptance_requests` - Open requests against this challenge
///
/// # Returns
///
/// The derived [`ChallengePermissions`]; all-`false` when `user` or
/// `challenge` is absent.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "challenge_permissions", skip_all)
)]
pub fn evaluate_challenge_permissions(
    user: Option<&User>,
    challenge: Option<&Challenge>,
    user_teams: Option<&[Team]>,
    acceptance_requests: Option<&[ChallengeAcceptanceRequest]>,
) -> ChallengePermissions {
    let (Some(user), Some(challenge)) = (user, challenge) else {
        return ChallengePermissions::default();
    };

    let user_team_ids: HashSet<&str> = user_teams
        .unwrap_or_default()
        .iter()
        .map(|team| team.id.as_str())
        .collect();

    // the producer conflates a mutable display name with an immutable id;
    // neither field alone is trustworthy, so keep both checks
    let is_creator = challenge.created_by == user.name || challenge.sender_id == user.id;

    let is_sender_member = member_of(&user_team_ids, challenge.sender_team_id.as_deref());
    let is_receiver_member = member_of(&user_team_ids, challenge.receiver_team_id.as_deref());
    let is_acceptor_member = member_of(&user_team_ids, challenge.first_acceptor_team_id.as_deref());

    // first pending request raised by any of the user's teams, in input
    // order: arbitrary but stable for a fixed input list
    let user_pending_request = acceptance_requests
        .unwrap_or_default()
        .iter()
        .find(|request| {
            request.status == AcceptanceRequestStatus::PendingApproval
                && user_team_ids.contains(request.accepting_team_id.as_str())
        });

    let is_pending_or_open = match challenge.status {
        ChallengeStatus::Open | ChallengeStatus::Pending => true,
        ChallengeStatus::Accepted | ChallengeStatus::Declined | ChallengeStatus::Completed => false,
    };

    let can_modify = (is_creator || is_sender_member) && is_pending_or_open;
    let can_accept_directly = challenge.is_direct()
        && is_receiver_member
        && challenge.status == ChallengeStatus::Pending;
    let can_request_accept = !is_creator
        && !is_sender_member
        && !is_receiver_member
        && challenge.status == ChallengeStatus::Open
        && user_pending_request.is_none()
        && !user_team_ids.is_empty();
    let can_manage_requests =
        (is_creator || is_sender_member) && challenge.status == ChallengeStatus::Open;

    ChallengePermissions {
        is_creator,
        is_sender_member,
        is_receiver_member,
        is_acceptor_member,
        can_modify,
        can_accept_directly,
        can_decline_directly: can_accept_directly,
        can_request_accept,
        can_withdraw_request: user_pending_request.is_some(),
        can_manage_requests,
        can_withdraw_challenge: can_modify,
        user_has_pending_request: user_pending_request.is_some(),
        user_pending_request_id: user_pending_request.map(|request| request.id.clone()),
    }
}

fn member_of(user_team_ids: &HashSet<&str>, team_id: Option<&str>) -> bool {
    team_id.is_some_and(|id| user_team_ids.contains(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_owned(),
            name: name.to_owned(),
        }
    }

    fn team(id: &str) -> Team {
        Team {
            id: id.to_owned(),
            name: format!("Team {id}"),
            members: Vec::new(),
        }
    }

    fn challenge(status: ChallengeStatus) -> Challenge {
        Challenge {
            id: "c1".to_owned(),
            status,
            created_by: "Asha".to_owned(),
            sender_id: "u1".to_owned(),
            sender_team_id: Some("t1".to_owned()),
            receiver_team_id: None,
            first_acceptor_team_id: None,
            created_at: None,
            expires_at: None,
        }
    }

    fn request(id: &str, team_id: &str, status: AcceptanceRequestStatus) -> ChallengeAcceptanceRequest {
        ChallengeAcceptanceRequest {
            id: id.to_owned(),
            challenge_id: "c1".to_owned(),
            accepting_team_id: team_id.to_owned(),
            status,
        }
    }

    #[test]
    fn test_fail_closed_without_user() {
        let challenge = challenge(ChallengeStatus::Open);
        let perms = evaluate_challenge_permissions(None, Some(&challenge), None, None);
        assert_eq!(perms, ChallengePermissions::default());
    }

    #[test]
    fn test_fail_closed_without_challenge() {
        let viewer = user("u9", "Maya");
        let teams = [team("t9")];
        let perms = evaluate_challenge_permissions(Some(&viewer), None, Some(&teams), None);
        assert_eq!(perms, ChallengePermissions::default());
        assert!(perms.user_pending_request_id.is_none());
    }

    #[test]
    fn test_outsider_can_request_accept_on_open_challenge() {
        // scenario: open challenge, viewer unaffiliated with sender or
        // receiver, no pending request, has a team to bid with
        let viewer = user("u9", "Maya");
        let teams = [team("t9")];
        let challenge = challenge(ChallengeStatus::Open);

        let perms =
            evaluate_challenge_permissions(Some(&viewer), Some(&challenge), Some(&teams), None);

        assert!(perms.can_request_accept);
        assert!(!perms.is_creator);
        assert!(!perms.is_sender_member);
        assert!(!perms.can_modify);
        assert!(!perms.can_accept_directly);
        assert!(!perms.can_decline_directly);
        assert!(!perms.can_withdraw_request);
        assert!(!perms.can_manage_requests);
        assert!(!perms.can_withdraw_challenge);
        assert!(!perms.user_has_pending_request);
    }

    #[test]
    fn test_outsider_without_teams_cannot_request() {
        let viewer = user("u9", "Maya");
        let challenge = challenge(ChallengeStatus::Open);

        let perms = evaluate_challenge_permissions(Some(&viewer), Some(&challenge), None, None);

        assert!(!perms.can_request_accept);
    }

    #[test]
    fn test_receiver_member_can_accept_and_decline_direct_pending() {
        let viewer = user("u9", "Maya");
        let teams = [team("t2")];
        let mut challenge = challenge(ChallengeStatus::Pending);
        challenge.receiver_team_id = Some("t2".to_owned());

        let perms =
            evaluate_challenge_permissions(Some(&viewer), Some(&challenge), Some(&teams), None);

        assert!(perms.is_receiver_member);
        assert!(perms.can_accept_directly);
        assert!(perms.can_decline_directly);
        assert!(!perms.can_request_accept);
    }

    #[test]
    fn test_direct_accept_requires_pending_status() {
        let viewer = user("u9", "Maya");
        let teams = [team("t2")];
        let mut challenge = challenge(ChallengeStatus::Accepted);
        challenge.receiver_team_id = Some("t2".to_owned());

        let perms =
            evaluate_challenge_permissions(Some(&viewer), Some(&challenge), Some(&teams), None);

        assert!(perms.is_receiver_member);
        assert!(!perms.can_accept_directly);
        assert!(!perms.can_decline_directly);
    }

    #[test]
    fn test_creator_by_sender_id() {
        let viewer = user("u1", "Renamed User");
        let challenge = challenge(ChallengeStatus::Open);

        let perms = evaluate_challenge_permissions(Some(&viewer), Some(&challenge), None, None);

        assert!(perms.is_creator);
        assert!(perms.can_modify);
        assert!(perms.can_withdraw_challenge);
        assert!(perms.can_manage_requests);
        assert!(!perms.can_request_accept);
    }

    #[test]
    fn test_creator_by_display_name() {
        // the display-name check survives even when the id does not match
        let viewer = user("u7", "Asha");
        let challenge = challenge(ChallengeStatus::Open);

        let perms = evaluate_challenge_permissions(Some(&viewer), Some(&challenge), None, None);

        assert!(perms.is_creator);
    }

    #[test]
    fn test_sender_member_modify_window_closes_after_accept() {
        let viewer = user("u9", "Maya");
        let teams = [team("t1")];

        for (status, open_window) in [
            (ChallengeStatus::Open, true),
            (ChallengeStatus::Pending, true),
            (ChallengeStatus::Accepted, false),
            (ChallengeStatus::Declined, false),
            (ChallengeStatus::Completed, false),
        ] {
            let challenge = challenge(status);
            let perms =
                evaluate_challenge_permissions(Some(&viewer), Some(&challenge), Some(&teams), None);

            assert!(perms.is_sender_member);
            assert_eq!(perms.can_modify, open_window, "status {status:?}");
            assert_eq!(perms.can_withdraw_challenge, open_window);
        }
    }

    #[test]
    fn test_manage_requests_only_while_open() {
        let viewer = user("u1", "Asha");

        let open = challenge(ChallengeStatus::Open);
        let pending = challenge(ChallengeStatus::Pending);

        let on_open = evaluate_challenge_permissions(Some(&viewer), Some(&open), None, None);
        let on_pending = evaluate_challenge_permissions(Some(&viewer), Some(&pending), None, None);

        assert!(on_open.can_manage_requests);
        assert!(!on_pending.can_manage_requests);
        // modify window covers both
        assert!(on_open.can_modify);
        assert!(on_pending.can_modify);
    }

    #[test]
    fn test_pending_request_linkage() {
        let viewer = user("u9", "Maya");
        let teams = [team("t9")];
        let challenge = challenge(ChallengeStatus::Open);
        let requests = [
            request("r1", "t4", AcceptanceRequestStatus::PendingApproval),
            request("r2", "t9", AcceptanceRequestStatus::Rejected),
            request("r3", "t9", AcceptanceRequestStatus::PendingApproval),
        ];

        let perms = evaluate_challenge_permissions(
            Some(&viewer),
            Some(&challenge),
            Some(&teams),
            Some(&requests),
        );

        assert!(perms.user_has_pending_request);
        assert!(perms.can_withdraw_request);
        assert_eq!(perms.user_pending_request_id.as_deref(), Some("r3"));
        // an outstanding bid blocks a second one
        assert!(!perms.can_request_accept);
    }

    #[test]
    fn test_other_teams_pending_requests_do_not_link() {
        let viewer = user("u9", "Maya");
        let teams = [team("t9")];
        let challenge = challenge(ChallengeStatus::Open);
        let requests = [request("r1", "t4", AcceptanceRequestStatus::PendingApproval)];

        let perms = evaluate_challenge_permissions(
            Some(&viewer),
            Some(&challenge),
            Some(&teams),
            Some(&requests),
        );

        assert!(!perms.user_has_pending_request);
        assert!(perms.user_pending_request_id.is_none());
        assert!(perms.can_request_accept);
    }

    #[test]
    fn test_acceptor_member_flag() {
        let viewer = user("u9", "Maya");
        let teams = [team("t5")];
        let mut challenge = challenge(ChallengeStatus::Accepted);
        challenge.first_acceptor_team_id = Some("t5".to_owned());

        let perms =
            evaluate_challenge_permissions(Some(&viewer), Some(&challenge), Some(&teams), None);

        assert!(perms.is_acceptor_member);
    }

    #[test]
    fn test_request_accept_excludes_sender_members() {
        // requesting requires no sender affiliation, so the two can never
        // hold at once
        let viewer = user("u9", "Maya");
        let teams = [team("t1"), team("t9")];
        let challenge = challenge(ChallengeStatus::Open);

        let perms =
            evaluate_challenge_permissions(Some(&viewer), Some(&challenge), Some(&teams), None);

        assert!(perms.is_sender_member);
        assert!(!perms.can_request_accept);
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let viewer = user("u9", "Maya");
        let teams = [team("t9")];
        let challenge = challenge(ChallengeStatus::Open);
        let requests = [request("r1", "t9", AcceptanceRequestStatus::PendingApproval)];

        let first = evaluate_challenge_permissions(
            Some(&viewer),
            Some(&challenge),
            Some(&teams),
            Some(&requests),
        );
        let second = evaluate_challenge_permissions(
            Some(&viewer),
            Some(&challenge),
            Some(&teams),
            Some(&requests),
        );

        assert_eq!(first, second);
    }
}
