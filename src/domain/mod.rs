//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{AddOrder, AddOrderOptions};
pub use response::{OrderStatus, Service, UserBalance};
pub use validation::ValidationError;
pub use value::{ApiKey, Host, OrderId, ServiceId};
