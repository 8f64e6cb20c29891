//! Manual-payment channels.

use serde::{Deserialize, Serialize};

/// A receiving account the customer can transfer to, with its QR image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentChannel {
    pub id: String,
    pub name: String,
    pub account_name: String,
    pub account_number: String,
    pub qr_image: String,
}

/// The shop's stock channel set. Deployments override via configuration.
#[must_use]
pub fn default_channels() -> Vec<PaymentChannel> {
    vec![
        PaymentChannel {
            id: "gcash".to_string(),
            name: "GCash".to_string(),
            account_name: "Tindera Shop".to_string(),
            account_number: "09123456789".to_string(),
            qr_image: "/images/gcash-qr.png".to_string(),
        },
        PaymentChannel {
            id: "maya".to_string(),
            name: "Maya".to_string(),
            account_name: "Tindera Shop".to_string(),
            account_number: "09123456789".to_string(),
            qr_image: "/images/maya-qr.png".to_string(),
        },
    ]
}
