//! Client factory and resource bundles
//!
//! A [`ClientFactory`] resolves the caller's credentials exactly once and
//! hands the resulting strategy, the config and the transport to every
//! sub-client it builds. [`NettuClient`] is the full admin surface,
//! [`NettuUserClient`] the end-user surface without account and health access.
//!
//! Missing credentials are not an error: they resolve to
//! [`Credentials::Empty`] and requests go out without auth headers. Callers
//! that need credentials can check [`ClientFactory::credentials`].

use std::sync::Arc;

use tracing::debug;

use crate::{
    api::{
        AccountClient, CalendarClient, CalendarUserClient, EventClient, EventUserClient,
        HealthClient, ScheduleClient, ScheduleUserClient, ServiceClient, ServiceUserClient,
        UserClient, UserUserClient,
    },
    config::{ClientConfig, TransportConfig},
    credentials::{Credentials, PartialCredentials},
    error::Result,
    http::{BaseClient, ReqwestTransport, Transport},
};

/// Builds bundles that share one credential strategy, config and transport
#[derive(Clone, Debug)]
pub struct ClientFactory {
    base: BaseClient,
}

impl ClientFactory {
    /// Create a factory using the default reqwest transport
    pub fn new(config: Arc<ClientConfig>, creds: Option<PartialCredentials>) -> Result<Self> {
        Self::with_transport_config(config, creds, &TransportConfig::default())
    }

    /// Create a factory using a reqwest transport with custom timeouts
    pub fn with_transport_config(
        config: Arc<ClientConfig>,
        creds: Option<PartialCredentials>,
        transport_config: &TransportConfig,
    ) -> Result<Self> {
        let transport = ReqwestTransport::new(transport_config)?;
        Ok(Self::with_transport(config, creds, Arc::new(transport)))
    }

    /// Create a factory on top of a caller supplied transport
    pub fn with_transport(
        config: Arc<ClientConfig>,
        creds: Option<PartialCredentials>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let credentials = Credentials::from_partial(creds.as_ref());
        debug!(
            "Creating client for {} with {} credentials",
            config.base_url,
            credentials_kind(&credentials)
        );

        Self {
            base: BaseClient::new(Arc::new(credentials), config, transport),
        }
    }

    pub fn credentials(&self) -> &Arc<Credentials> {
        self.base.credentials()
    }

    pub fn config(&self) -> &Arc<ClientConfig> {
        self.base.config()
    }

    /// Full admin bundle
    pub fn admin(&self) -> NettuClient {
        NettuClient {
            account: AccountClient::new(self.base.clone()),
            calendar: CalendarClient::new(self.base.clone()),
            events: EventClient::new(self.base.clone()),
            health: HealthClient::new(self.base.clone()),
            service: ServiceClient::new(self.base.clone()),
            schedule: ScheduleClient::new(self.base.clone()),
            user: UserClient::new(self.base.clone()),
        }
    }

    /// End-user bundle
    pub fn user(&self) -> NettuUserClient {
        NettuUserClient {
            calendar: CalendarUserClient::new(self.base.clone()),
            events: EventUserClient::new(self.base.clone()),
            service: ServiceUserClient::new(self.base.clone()),
            schedule: ScheduleUserClient::new(self.base.clone()),
            user: UserUserClient::new(self.base.clone()),
        }
    }
}

fn credentials_kind(credentials: &Credentials) -> &'static str {
    match credentials {
        Credentials::Account { .. } => "account",
        Credentials::User { .. } => "user",
        Credentials::Empty => "no",
    }
}

/// Admin client with access to every resource of the account
#[derive(Clone, Debug)]
pub struct NettuClient {
    account: AccountClient,
    calendar: CalendarClient,
    events: EventClient,
    health: HealthClient,
    service: ServiceClient,
    schedule: ScheduleClient,
    user: UserClient,
}

impl NettuClient {
    pub fn new(config: Arc<ClientConfig>, creds: Option<PartialCredentials>) -> Result<Self> {
        Ok(ClientFactory::new(config, creds)?.admin())
    }

    pub fn account(&self) -> &AccountClient {
        &self.account
    }

    pub fn calendar(&self) -> &CalendarClient {
        &self.calendar
    }

    pub fn events(&self) -> &EventClient {
        &self.events
    }

    pub fn health(&self) -> &HealthClient {
        &self.health
    }

    pub fn service(&self) -> &ServiceClient {
        &self.service
    }

    pub fn schedule(&self) -> &ScheduleClient {
        &self.schedule
    }

    pub fn user(&self) -> &UserClient {
        &self.user
    }
}

/// End-user client, acting on behalf of one user of an account
#[derive(Clone, Debug)]
pub struct NettuUserClient {
    calendar: CalendarUserClient,
    events: EventUserClient,
    service: ServiceUserClient,
    schedule: ScheduleUserClient,
    user: UserUserClient,
}

impl NettuUserClient {
    pub fn new(config: Arc<ClientConfig>, creds: Option<PartialCredentials>) -> Result<Self> {
        Ok(ClientFactory::new(config, creds)?.user())
    }

    pub fn calendar(&self) -> &CalendarUserClient {
        &self.calendar
    }

    pub fn events(&self) -> &EventUserClient {
        &self.events
    }

    pub fn service(&self) -> &ServiceUserClient {
        &self.service
    }

    pub fn schedule(&self) -> &ScheduleUserClient {
        &self.schedule
    }

    pub fn user(&self) -> &UserUserClient {
        &self.user
    }
}
