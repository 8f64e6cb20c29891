//! External collaborator settings.

use clap::Args;

use tindera_app::{
    auth::IdentityProviderConfig,
    files::FileStorageConfig,
    notifications::{MailRelayConfig, ShopIdentity},
    store::SheetStoreConfig,
};

/// Sheet service settings.
#[derive(Debug, Args)]
pub struct SheetStoreArgs {
    /// Sheet service address
    #[arg(long, env = "SHEETS_BASE_URL", default_value = "http://localhost:9400")]
    pub sheets_base_url: String,

    /// Spreadsheet holding the shop's sheets
    #[arg(long, env = "SHEETS_SPREADSHEET_ID", default_value = "tindera")]
    pub sheets_spreadsheet_id: String,

    /// Service-account bearer token
    #[arg(long, env = "SHEETS_TOKEN", default_value = "", hide_env_values = true)]
    pub sheets_token: String,
}

impl SheetStoreArgs {
    pub(crate) fn to_config(&self) -> SheetStoreConfig {
        SheetStoreConfig {
            base_url: self.sheets_base_url.clone(),
            spreadsheet_id: self.sheets_spreadsheet_id.clone(),
            token: self.sheets_token.clone(),
        }
    }
}

/// Receipt file-storage settings.
#[derive(Debug, Args)]
pub struct FileStorageArgs {
    /// File-storage service address
    #[arg(long, env = "FILES_BASE_URL", default_value = "http://localhost:9500")]
    pub files_base_url: String,

    /// Folder receiving receipt uploads
    #[arg(long, env = "FILES_FOLDER", default_value = "Receipt Uploads")]
    pub files_folder: String,

    /// Service-account bearer token
    #[arg(long, env = "FILES_TOKEN", default_value = "", hide_env_values = true)]
    pub files_token: String,
}

impl FileStorageArgs {
    pub(crate) fn to_config(&self) -> FileStorageConfig {
        FileStorageConfig {
            base_url: self.files_base_url.clone(),
            folder: self.files_folder.clone(),
            token: self.files_token.clone(),
        }
    }
}

/// Mail relay settings.
#[derive(Debug, Args)]
pub struct MailArgs {
    /// Mail relay address
    #[arg(long, env = "MAIL_BASE_URL", default_value = "http://localhost:9600")]
    pub mail_base_url: String,

    /// Relay bearer token
    #[arg(long, env = "MAIL_TOKEN", default_value = "", hide_env_values = true)]
    pub mail_token: String,

    /// From-address for every outgoing email
    #[arg(long, env = "MAIL_SENDER", default_value = "orders@tindera.example")]
    pub mail_sender: String,

    /// Comma-separated recipients of new-order alerts
    #[arg(long, env = "ADMIN_NOTIFICATION_EMAILS", default_value = "")]
    pub admin_notification_emails: String,
}

impl MailArgs {
    pub(crate) fn to_config(&self) -> MailRelayConfig {
        MailRelayConfig {
            base_url: self.mail_base_url.clone(),
            token: self.mail_token.clone(),
        }
    }

    pub(crate) fn notification_recipients(&self) -> Vec<String> {
        self.admin_notification_emails
            .split(',')
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Identity provider settings.
#[derive(Debug, Args)]
pub struct IdentityArgs {
    /// Identity provider address
    #[arg(long, env = "IDENTITY_BASE_URL", default_value = "http://localhost:9700")]
    pub identity_base_url: String,
}

impl IdentityArgs {
    pub(crate) fn to_config(&self) -> IdentityProviderConfig {
        IdentityProviderConfig {
            base_url: self.identity_base_url.clone(),
        }
    }
}

/// Back-office access settings.
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Comma-separated emails allowed into the back office
    #[arg(long, env = "ADMIN_EMAILS", default_value = "")]
    pub admin_emails: String,
}

/// Shop identity stamped into emails.
#[derive(Debug, Args)]
pub struct ShopArgs {
    /// Shop display name
    #[arg(long, env = "SHOP_NAME", default_value = "Tindera")]
    pub shop_name: String,

    /// Support email shown in customer mail
    #[arg(long, env = "SHOP_SUPPORT_EMAIL", default_value = "support@tindera.example")]
    pub shop_support_email: String,

    /// Support phone shown in customer mail
    #[arg(long, env = "SHOP_SUPPORT_PHONE", default_value = "+63 (2) 8000 0000")]
    pub shop_support_phone: String,
}

impl ShopArgs {
    pub(crate) fn to_identity(&self) -> ShopIdentity {
        ShopIdentity {
            name: self.shop_name.clone(),
            support_email: self.shop_support_email.clone(),
            support_phone: self.shop_support_phone.clone(),
        }
    }
}
