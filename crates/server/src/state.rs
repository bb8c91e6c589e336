use std::{sync::Arc, time::Duration};

use configs::AppConfig;
use sea_orm::DatabaseConnection;
use service::contact::seaorm::SeaOrmContactRepository;
use service::facility::seaorm::SeaOrmFacilityRepository;
use service::gallery::seaorm::SeaOrmGalleryRepository;
use service::mail::{log::LogTransport, smtp::SmtpTransport, DispatchMode, MailTransport, Notifier};
use service::{ContactService, FacilityService, GalleryService};
use tracing::info;

use crate::errors::StartupError;

/// Services shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<ContactService>,
    pub facilities: Arc<FacilityService>,
    pub galleries: Arc<GalleryService>,
}

impl AppState {
    pub fn from_parts(contacts: ContactService, facilities: FacilityService, galleries: GalleryService) -> Self {
        Self { contacts: Arc::new(contacts), facilities: Arc::new(facilities), galleries: Arc::new(galleries) }
    }

    /// Wire the SeaORM repositories and the configured mail transport.
    pub fn with_database(db: DatabaseConnection, cfg: &AppConfig) -> Result<Self, StartupError> {
        let timeout = Duration::from_secs(cfg.database.operation_timeout_secs);
        let notifier = build_notifier(cfg)?;

        let contacts = ContactService::new(Arc::new(SeaOrmContactRepository { db: db.clone() }), notifier, timeout);
        let facilities = FacilityService::new(Arc::new(SeaOrmFacilityRepository { db: db.clone() }), timeout);
        let galleries = GalleryService::new(Arc::new(SeaOrmGalleryRepository { db }), timeout);
        Ok(Self::from_parts(contacts, facilities, galleries))
    }
}

fn build_notifier(cfg: &AppConfig) -> Result<Notifier, StartupError> {
    let mode: DispatchMode = cfg.mail.dispatch.parse().map_err(StartupError::InvalidConfig)?;
    let transport: Arc<dyn MailTransport> = if cfg.mail.enabled {
        let smtp = SmtpTransport::from_config(&cfg.mail).map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
        info!(host = %cfg.mail.host, port = cfg.mail.port, ?mode, "smtp_transport_ready");
        Arc::new(smtp)
    } else {
        info!("mail disabled; notifications are logged only");
        Arc::new(LogTransport)
    };
    Ok(Notifier::new(transport, Duration::from_secs(cfg.mail.timeout_secs), mode))
}
