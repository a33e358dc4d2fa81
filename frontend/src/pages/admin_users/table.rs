use super::query::ListResult;
use crate::api::{ProfileChanges, Role, User};

/// Rows currently on screen plus the server's total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsersTable {
    pub users: Vec<User>,
    pub total_count: u64,
}

/// Local patches applied after a mutation succeeds, instead of refetching.
#[derive(Debug, Clone, PartialEq)]
pub enum UsersMutation {
    Removed { id: i64 },
    ProfileEdited { id: i64, changes: ProfileChanges },
    RolesReplaced { id: i64, role: Role },
}

impl UsersTable {
    pub fn replace_page(&mut self, result: ListResult) {
        self.users = result.users;
        self.total_count = result.total_count;
    }

    /// Returns `false` when no row has the mutated id.
    pub fn apply(&mut self, mutation: UsersMutation) -> bool {
        match mutation {
            UsersMutation::Removed { id } => {
                let before = self.users.len();
                self.users.retain(|user| user.id != id);
                let removed = before != self.users.len();
                if removed {
                    self.total_count = self.total_count.saturating_sub(1);
                }
                removed
            }
            UsersMutation::ProfileEdited { id, changes } => self
                .row_mut(id)
                .map(|user| changes.apply_to(user))
                .is_some(),
            UsersMutation::RolesReplaced { id, role } => self
                .row_mut(id)
                .map(|user| user.roles = vec![role.as_str().to_string()])
                .is_some(),
        }
    }

    fn row_mut(&mut self, id: i64) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.id == id)
    }
}
