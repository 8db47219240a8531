// Request and response bodies exchanged with the scheduler API

pub mod account;
pub mod calendar;
pub mod common;
pub mod event;
pub mod schedule;
pub mod service;
pub mod user;

pub use account::{
    AccountDto, AccountResponse, AccountSettings, AccountWebhookSettings, CreateAccountRequest,
    CreateAccountResponse, SetAccountPubKeyRequest, SetAccountWebhookRequest,
};
pub use calendar::{
    CalendarDto, CalendarEventsResponse, CalendarResponse, CalendarSettings,
    CreateCalendarRequest, EventWithInstances, UpdateCalendarSettingsRequest,
};
pub use common::{StatusResponse, TimespanQuery};
pub use event::{
    CalendarEventDto, CreateEventRequest, EventInstance, EventInstancesResponse, EventResponse,
    UpdateEventRequest,
};
pub use schedule::{
    CreateScheduleRequest, ScheduleDto, ScheduleResponse, ScheduleRule, ScheduleRuleInterval,
    ScheduleRuleVariant, Time, UpdateScheduleRequest,
};
pub use service::{
    AddServiceUserRequest, BookingSlot, BookingSlotsDate, BookingSlotsQuery,
    BookingSlotsResponse, RemoveServiceUsersRequest, ServiceDto, ServiceResource,
    ServiceResponse,
};
pub use user::{FreeBusyQuery, FreeBusyResponse, UserDto, UserResponse};
