//! # Ownership and Capability Predicates
//!
//! Who owns a batch, and who may list one on the marketplace.
//!
//! Ownership is a deliberately loose multi-key match: historic batch records
//! are inconsistently keyed, some carrying the owner's user id and others
//! only a name field that may hold an email or a username. Any one of the
//! three equality checks suffices. Do not tighten this to a single key
//! without confirming the backend data has been migrated.

use crate::dto::auth::ApiUser;
use crate::dto::batch::Batch;

/// Account type allowed to list batches on the marketplace.
pub const TYPE_COOPERATIVE: &str = "cooperative";
/// Account type that sees every batch on the dashboard.
pub const TYPE_ADMIN: &str = "admin";
/// Account type offered in the test-request laboratory picker.
pub const TYPE_LABORATORY: &str = "laboratory";

/// True iff `user` owns `batch` under the three-clause identity match:
/// recorded owner id equals the user's id, or the recorded owner name
/// equals the user's email or username.
pub fn is_owner(batch: &Batch, user: &ApiUser) -> bool {
    batch.user_id == user.id
        || batch.user_name == user.email
        || batch.user_name == user.username
}

/// Capability gate for marketplace listing: the user must own the batch
/// and be a cooperative account. Account type can change between sessions,
/// so callers must re-evaluate this on every render or request rather than
/// caching the answer.
pub fn can_list_on_marketplace(batch: &Batch, user: &ApiUser) -> bool {
    is_owner(batch, user) && user.account_type == TYPE_COOPERATIVE
}

/// Admins see all batches; everyone else only their own.
pub fn can_view_all_batches(user: &ApiUser) -> bool {
    user.account_type == TYPE_ADMIN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, username: &str, email: &str, account_type: &str) -> ApiUser {
        ApiUser {
            id: id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            account_type: account_type.to_string(),
            ..ApiUser::default()
        }
    }

    fn batch(user_id: &str, user_name: &str) -> Batch {
        Batch {
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            ..Batch::default()
        }
    }

    #[test]
    fn id_match_suffices_despite_differing_names() {
        let u = user("u1", "alice", "alice@coop.rw", TYPE_COOPERATIVE);
        let b = batch("u1", "somebody-else");
        assert!(is_owner(&b, &u));
    }

    #[test]
    fn email_match_suffices_despite_differing_ids() {
        let u = user("u1", "alice", "alice@coop.rw", TYPE_COOPERATIVE);
        let b = batch("u2", "alice@coop.rw");
        assert!(is_owner(&b, &u));
    }

    #[test]
    fn username_match_suffices() {
        let u = user("u1", "alice", "alice@coop.rw", TYPE_COOPERATIVE);
        let b = batch("u2", "alice");
        assert!(is_owner(&b, &u));
    }

    #[test]
    fn no_key_match_means_not_owner() {
        let u = user("u1", "alice", "alice@coop.rw", TYPE_COOPERATIVE);
        let b = batch("u2", "bob");
        assert!(!is_owner(&b, &u));
    }

    #[test]
    fn marketplace_requires_cooperative_type() {
        let b = batch("u1", "alice");
        let farmer = user("u1", "alice", "alice@coop.rw", "farmer");
        let coop = user("u1", "alice", "alice@coop.rw", TYPE_COOPERATIVE);
        assert!(is_owner(&b, &farmer));
        assert!(!can_list_on_marketplace(&b, &farmer));
        assert!(can_list_on_marketplace(&b, &coop));
    }

    #[test]
    fn marketplace_requires_ownership_even_for_cooperatives() {
        let b = batch("u2", "bob");
        let coop = user("u1", "alice", "alice@coop.rw", TYPE_COOPERATIVE);
        assert!(!can_list_on_marketplace(&b, &coop));
    }

    #[test]
    fn admin_sees_everything() {
        assert!(can_view_all_batches(&user("u1", "root", "root@x.rw", TYPE_ADMIN)));
        assert!(!can_view_all_batches(&user("u1", "alice", "a@x.rw", TYPE_COOPERATIVE)));
    }
}
