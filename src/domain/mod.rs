//! Domain layer: the category aggregate, its validation and error model.

use std::fmt::Display;

use chrono::{NaiveDateTime, SubsecRound, Utc};

pub mod category;
pub mod category_validator;
pub mod errors;
pub mod pagination;
pub mod types;
pub mod validation;

/// Entity that owns its identity and is persisted as a unit.
pub trait AggregateRoot {
    type Id: Display;

    /// Name used in messages such as "Category with ID .. was not found".
    const NAME: &'static str;

    fn id(&self) -> &Self::Id;
}

/// Current UTC time at the precision the store keeps (microseconds).
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(6)
}
