//! Friend Relationship State
//!
//! The viewer's relationship to a profile owner, resolved from the friend
//! list and the two pending-request lists.

use super::global::{FriendRequest, FriendUser};

/// The viewer's relationship to a profile owner
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FriendState {
    /// List fetches still in flight
    Checking,
    /// No relation
    None,
    /// Already friends
    Friends,
    /// The owner sent the viewer a request; the id is needed to respond
    Incoming { request_id: String },
    /// The viewer already sent the owner a request
    Outgoing,
}

/// Resolve the relationship to `target_id` from the three fetched lists.
///
/// Friendship takes precedence over pending requests; a request where the
/// target is the sender beats one where the target is the recipient.
pub fn resolve_friend_state(
    target_id: &str,
    friends: &[FriendUser],
    incoming: &[FriendRequest],
    outgoing: &[FriendRequest],
) -> FriendState {
    if friends.iter().any(|f| f.id == target_id) {
        return FriendState::Friends;
    }

    if let Some(request) = incoming.iter().find(|r| r.sender.id == target_id) {
        return FriendState::Incoming {
            request_id: request.id.clone(),
        };
    }

    if outgoing.iter().any(|r| r.recipient.id == target_id) {
        return FriendState::Outgoing;
    }

    FriendState::None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> FriendUser {
        FriendUser {
            id: id.to_string(),
            username: format!("user-{}", id),
            online: false,
        }
    }

    fn request(id: &str, sender: &str, recipient: &str) -> FriendRequest {
        FriendRequest {
            id: id.to_string(),
            sender: user(sender),
            recipient: user(recipient),
        }
    }

    #[test]
    fn test_no_relation() {
        let state = resolve_friend_state("u1", &[], &[], &[]);
        assert_eq!(state, FriendState::None);
    }

    #[test]
    fn test_friends() {
        let friends = vec![user("u1"), user("u2")];
        let state = resolve_friend_state("u1", &friends, &[], &[]);
        assert_eq!(state, FriendState::Friends);
    }

    #[test]
    fn test_friends_takes_precedence_over_requests() {
        // A stale request for an existing friend must not win
        let friends = vec![user("u1")];
        let incoming = vec![request("r1", "u1", "me")];
        let outgoing = vec![request("r2", "me", "u1")];
        let state = resolve_friend_state("u1", &friends, &incoming, &outgoing);
        assert_eq!(state, FriendState::Friends);
    }

    #[test]
    fn test_incoming_captures_request_id() {
        let incoming = vec![
            request("r1", "u9", "me"),
            request("r2", "u1", "me"),
        ];
        let state = resolve_friend_state("u1", &[], &incoming, &[]);
        assert_eq!(
            state,
            FriendState::Incoming {
                request_id: "r2".to_string()
            }
        );
    }

    #[test]
    fn test_outgoing() {
        let outgoing = vec![request("r1", "me", "u1")];
        let state = resolve_friend_state("u1", &[], &[], &outgoing);
        assert_eq!(state, FriendState::Outgoing);
    }

    #[test]
    fn test_incoming_beats_outgoing() {
        let incoming = vec![request("r1", "u1", "me")];
        let outgoing = vec![request("r2", "me", "u1")];
        let state = resolve_friend_state("u1", &[], &incoming, &outgoing);
        assert!(matches!(state, FriendState::Incoming { .. }));
    }
}
