//! Resource sub-clients
//!
//! Each sub-client maps its operations onto one HTTP verb and path and
//! delegates to the shared [`BaseClient`](crate::http::BaseClient). Admin
//! variants address resources of any user of the account through the `/user`
//! scope; `*UserClient` variants act on behalf of the signed-in end user.

pub mod account;
pub mod calendar;
pub mod event;
pub mod health;
pub mod schedule;
pub mod service;
pub mod user;

pub use account::AccountClient;
pub use calendar::{CalendarClient, CalendarUserClient};
pub use event::{EventClient, EventUserClient};
pub use health::HealthClient;
pub use schedule::{ScheduleClient, ScheduleUserClient};
pub use service::{ServiceClient, ServiceUserClient};
pub use user::{UserClient, UserUserClient};
