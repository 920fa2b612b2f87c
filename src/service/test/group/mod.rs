use crate::{
    error::AppError,
    model::{group::GroupKey, user::User},
    service::group::GroupService,
};
use test_utils::{builder::TestBuilder, factory};

mod membership;

/// Converts a factory-created user row into the domain model.
fn user_from(entity: entity::user::Model) -> User {
    User::from_entity(entity)
}
