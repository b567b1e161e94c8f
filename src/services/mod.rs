pub mod categories;
pub mod errors;

pub use errors::{ErrorKind, ServiceError, ServiceResult};
