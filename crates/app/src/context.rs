//! App Context

use std::sync::Arc;

use crate::{
    auth::{AdminGate, HttpIdentityProvider, IdentityProvider, IdentityProviderConfig},
    catalog::{CatalogService, SheetCatalogService},
    checkout::{CheckoutSubmitter, PaymentChannel, channels::default_channels},
    feedback::{FeedbackService, SheetFeedbackService},
    files::{DriveStorage, FileStorageConfig, ReceiptStorage},
    notifications::{EmailNotifier, EmailRelay, HttpMailRelay, MailRelayConfig, Notifications, ShopIdentity},
    orders::{OrdersService, SheetOrdersService},
    profiles::{ProfilesService, SheetProfilesService},
    store::{HttpSheetStore, SheetStore, SheetStoreConfig},
};

/// Everything the application needs to reach its collaborators.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub sheets: SheetStoreConfig,
    pub files: FileStorageConfig,
    pub mail: MailRelayConfig,
    pub identity: IdentityProviderConfig,

    /// From-address for every outgoing email.
    pub mail_sender: String,

    /// Recipients of new-order alerts.
    pub admin_notification_emails: Vec<String>,

    /// Comma-separated back-office allow-list.
    pub admin_allow_list: String,

    pub shop: ShopIdentity,
}

/// Shared service handles, wired once at startup and injected everywhere.
#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub orders: Arc<dyn OrdersService>,
    pub profiles: Arc<dyn ProfilesService>,
    pub feedback: Arc<dyn FeedbackService>,
    pub notifier: Arc<dyn Notifications>,
    pub identity: Arc<dyn IdentityProvider>,
    pub checkout: CheckoutSubmitter,
    pub admin_gate: AdminGate,
    pub channels: Vec<PaymentChannel>,
}

impl AppContext {
    /// Build the full context over the external HTTP collaborators.
    #[must_use]
    pub fn from_settings(settings: AppSettings) -> Self {
        let store: Arc<dyn SheetStore> = Arc::new(HttpSheetStore::new(settings.sheets));
        let receipts: Arc<dyn ReceiptStorage> = Arc::new(DriveStorage::new(settings.files));
        let relay: Arc<dyn EmailRelay> = Arc::new(HttpMailRelay::new(settings.mail));
        let identity: Arc<dyn IdentityProvider> =
            Arc::new(HttpIdentityProvider::new(settings.identity));

        let orders: Arc<dyn OrdersService> = Arc::new(SheetOrdersService::new(store.clone()));

        let notifier: Arc<dyn Notifications> = Arc::new(EmailNotifier::new(
            relay,
            settings.mail_sender,
            settings.admin_notification_emails,
            settings.shop,
        ));

        let checkout = CheckoutSubmitter::new(orders.clone(), receipts, notifier.clone());

        Self {
            catalog: Arc::new(SheetCatalogService::new(store.clone())),
            orders,
            profiles: Arc::new(SheetProfilesService::new(store.clone())),
            feedback: Arc::new(SheetFeedbackService::new(store)),
            notifier,
            identity,
            checkout,
            admin_gate: AdminGate::from_list(&settings.admin_allow_list),
            channels: default_channels(),
        }
    }
}
