//! User, team, and roster types shared by every evaluator.

mod types;

pub use types::{Team, TeamMembership, TeamRole, User};
