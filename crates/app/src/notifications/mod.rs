//! Notification dispatcher.
//!
//! Fire-and-forget transactional email. Callers decide whether a failure
//! blocks anything; nothing here retries.

pub mod relay;
mod templates;

pub use relay::{EmailRelay, EmailMessage, HttpMailRelay, MailRelayConfig, RelayError};

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;
use tracing::info;

use crate::orders::models::Order;

/// Shop details stamped into email bodies.
#[derive(Debug, Clone)]
pub struct ShopIdentity {
    pub name: String,
    pub support_email: String,
    pub support_phone: String,
}

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("order has no customer email")]
    NoRecipient,

    #[error("relay error")]
    Relay(#[from] RelayError),
}

#[automock]
#[async_trait]
pub trait Notifications: Send + Sync {
    /// Order summary to the customer right after checkout.
    async fn order_confirmation(&self, order: &Order) -> Result<(), NotificationError>;

    /// New-order alert to the configured admin recipients.
    async fn admin_new_order(&self, order: &Order) -> Result<(), NotificationError>;

    /// Itemised invoice to the customer, resendable from the back office.
    async fn invoice(&self, order: &Order) -> Result<(), NotificationError>;

    /// Thank-you letter to the customer, resendable from the back office.
    async fn thank_you(&self, order: &Order) -> Result<(), NotificationError>;
}

#[derive(Clone)]
pub struct EmailNotifier {
    relay: Arc<dyn EmailRelay>,
    sender: String,
    admin_recipients: Vec<String>,
    shop: ShopIdentity,
}

impl EmailNotifier {
    #[must_use]
    pub fn new(
        relay: Arc<dyn EmailRelay>,
        sender: String,
        admin_recipients: Vec<String>,
        shop: ShopIdentity,
    ) -> Self {
        Self {
            relay,
            sender,
            admin_recipients,
            shop,
        }
    }

    fn customer_email<'o>(order: &'o Order) -> Result<&'o str, NotificationError> {
        order.email.as_deref().ok_or(NotificationError::NoRecipient)
    }

    async fn send(&self, to: &str, subject: String, html: String) -> Result<(), NotificationError> {
        self.relay
            .send(EmailMessage {
                from: self.sender.clone(),
                to: to.to_string(),
                subject,
                html,
            })
            .await?;

        Ok(())
    }
}

#[async_trait]
impl Notifications for EmailNotifier {
    async fn order_confirmation(&self, order: &Order) -> Result<(), NotificationError> {
        let to = Self::customer_email(order)?;

        self.send(
            to,
            format!("Order Confirmation #{}", order.id),
            templates::confirmation_html(order),
        )
        .await?;

        info!("sent order confirmation for {}", order.id);

        Ok(())
    }

    async fn admin_new_order(&self, order: &Order) -> Result<(), NotificationError> {
        for recipient in &self.admin_recipients {
            self.send(
                recipient,
                format!("New order #{}", order.id),
                templates::admin_new_order_html(order),
            )
            .await?;
        }

        Ok(())
    }

    async fn invoice(&self, order: &Order) -> Result<(), NotificationError> {
        let to = Self::customer_email(order)?;

        self.send(
            to,
            format!("Order Invoice #{}", order.id),
            templates::invoice_html(order, &self.shop),
        )
        .await?;

        info!("sent invoice for {}", order.id);

        Ok(())
    }

    async fn thank_you(&self, order: &Order) -> Result<(), NotificationError> {
        let to = Self::customer_email(order)?;

        self.send(
            to,
            format!("Thank you for your order, {}!", order.customer_name),
            templates::thank_you_html(order, &self.shop),
        )
        .await?;

        info!("sent thank-you for {}", order.id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use tokio::sync::Mutex;
    use uuid::Uuid;

    use crate::orders::models::{OrderItem, OrderStatus};

    use super::*;

    /// Relay double that records what would have been sent.
    #[derive(Default)]
    struct RecordingRelay {
        sent: Mutex<Vec<EmailMessage>>,
    }

    #[async_trait]
    impl EmailRelay for RecordingRelay {
        async fn send(&self, message: EmailMessage) -> Result<(), RelayError> {
            self.sent.lock().await.push(message);

            Ok(())
        }
    }

    fn shop() -> ShopIdentity {
        ShopIdentity {
            name: "Tindera".to_string(),
            support_email: "support@tindera.example".to_string(),
            support_phone: "+63 (2) 8000 0000".to_string(),
        }
    }

    fn order(email: Option<&str>) -> Order {
        Order {
            id: Uuid::now_v7(),
            date: Timestamp::now(),
            customer_name: "Maria Clara".to_string(),
            email: email.map(str::to_string),
            contact_number: "09171234567".to_string(),
            address: "123 Rizal St".to_string(),
            payment_method: "gcash".to_string(),
            items: vec![OrderItem {
                id: "p-1".to_string(),
                name: "Bucket Hat".to_string(),
                price: 499_00,
                quantity: 2,
            }],
            total_amount: 998_00,
            status: OrderStatus::Paid,
            receipt_url: None,
        }
    }

    fn notifier(relay: Arc<RecordingRelay>) -> EmailNotifier {
        EmailNotifier::new(
            relay,
            "orders@tindera.example".to_string(),
            vec![
                "admin1@tindera.example".to_string(),
                "admin2@tindera.example".to_string(),
            ],
            shop(),
        )
    }

    #[tokio::test]
    async fn invoice_goes_to_the_customer() {
        let relay = Arc::new(RecordingRelay::default());
        let order = order(Some("maria@example.com"));

        notifier(relay.clone())
            .invoice(&order)
            .await
            .expect("send should succeed");

        let sent = relay.sent.lock().await;

        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "maria@example.com");
        assert!(sent[0].subject.contains(&order.id.to_string()));
        assert!(sent[0].html.contains("Bucket Hat"));
    }

    #[tokio::test]
    async fn customer_mail_without_an_email_is_rejected() {
        let relay = Arc::new(RecordingRelay::default());

        let result = notifier(relay.clone()).invoice(&order(None)).await;

        assert!(
            matches!(result, Err(NotificationError::NoRecipient)),
            "expected NoRecipient, got {result:?}"
        );
        assert!(relay.sent.lock().await.is_empty());
    }

    #[tokio::test]
    async fn admin_alert_fans_out_to_every_recipient() {
        let relay = Arc::new(RecordingRelay::default());

        notifier(relay.clone())
            .admin_new_order(&order(None))
            .await
            .expect("send should succeed");

        let sent = relay.sent.lock().await;

        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "admin1@tindera.example");
        assert_eq!(sent[1].to, "admin2@tindera.example");
    }
}
