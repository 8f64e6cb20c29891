//! Server configuration module

use clap::Parser;

use tindera_app::context::AppSettings;

use crate::config::{
    logging::LoggingConfig,
    server::ServerRuntimeConfig,
    services::{AdminArgs, FileStorageArgs, IdentityArgs, MailArgs, SheetStoreArgs, ShopArgs},
};

pub(crate) mod logging;
pub(crate) mod server;
pub(crate) mod services;

/// Tindera JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "tindera-json", about = "Tindera storefront API server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Sheet store settings.
    #[command(flatten)]
    pub sheets: SheetStoreArgs,

    /// Receipt file-storage settings.
    #[command(flatten)]
    pub files: FileStorageArgs,

    /// Mail relay settings.
    #[command(flatten)]
    pub mail: MailArgs,

    /// Identity provider settings.
    #[command(flatten)]
    pub identity: IdentityArgs,

    /// Back-office access settings.
    #[command(flatten)]
    pub admin: AdminArgs,

    /// Shop identity stamped into emails.
    #[command(flatten)]
    pub shop: ShopArgs,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Collaborator settings for the app context.
    #[must_use]
    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            sheets: self.sheets.to_config(),
            files: self.files.to_config(),
            mail: self.mail.to_config(),
            identity: self.identity.to_config(),
            mail_sender: self.mail.mail_sender.clone(),
            admin_notification_emails: self.mail.notification_recipients(),
            admin_allow_list: self.admin.admin_emails.clone(),
            shop: self.shop.to_identity(),
        }
    }
}
