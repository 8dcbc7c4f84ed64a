//! Entry point bundling the clients and handing out facades.

use vigil_core::{Result, Session};

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::multipart::MultipartClient;
use crate::services::{
    AgentsService, AuthService, CommunitiesService, DashboardService, IncidentsService,
    MissionsService, ReferenceService, UsersService,
};

/// One API client context: a JSON client, an upload client and the session
/// they share.
///
/// # Example
///
/// ```no_run
/// use vigil_core::{Credentials, Session};
/// use vigil_http::{Backoffice, ClientConfig};
///
/// # async fn example() -> vigil_core::Result<()> {
/// let backoffice = Backoffice::new(ClientConfig::default(), Session::in_memory())?;
/// backoffice
///     .auth()
///     .login(&Credentials::new("admin@alphsecurite.ci", "secret"))
///     .await?;
/// let me = backoffice.auth().current_user().await?;
/// println!("{}", me.full_name());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Backoffice {
    client: ApiClient,
    uploads: MultipartClient,
    session: Session,
}

impl Backoffice {
    pub fn new(config: ClientConfig, session: Session) -> Result<Self> {
        let client = ApiClient::new(&config, session.clone())?;
        let uploads = MultipartClient::new(&config, session.clone())?;
        Ok(Self {
            client,
            uploads,
            session,
        })
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn uploads(&self) -> &MultipartClient {
        &self.uploads
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.client)
    }

    pub fn users(&self) -> UsersService<'_> {
        UsersService::new(&self.client)
    }

    pub fn agents(&self) -> AgentsService<'_> {
        AgentsService::new(&self.client, &self.uploads)
    }

    pub fn missions(&self) -> MissionsService<'_> {
        MissionsService::new(&self.client)
    }

    pub fn incidents(&self) -> IncidentsService<'_> {
        IncidentsService::new(&self.client)
    }

    pub fn communities(&self) -> CommunitiesService<'_> {
        CommunitiesService::new(&self.client)
    }

    pub fn reference(&self) -> ReferenceService<'_> {
        ReferenceService::new(&self.client)
    }

    pub fn dashboard(&self) -> DashboardService<'_> {
        DashboardService::new(&self.client)
    }
}
