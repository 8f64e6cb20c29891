//! Checkout submission.
//!
//! The final step runs as a sequence of independent network calls with no
//! transactional wrapping. The order row itself is the saga cursor: a
//! Pending order with an empty receipt cell is an interrupted submission
//! that [`CheckoutSubmitter::resume_receipt`] can complete.

use std::sync::Arc;

use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::{
    carts::{ledger::CartLedger, models::CartItem},
    checkout::{
        errors::CheckoutError,
        fees,
        flow::{self, CheckoutFlow},
    },
    files::{FileStorageError, ReceiptStorage, ReceiptUpload},
    notifications::Notifications,
    orders::{
        OrdersService,
        errors::OrdersServiceError,
        models::{NewOrder, Order, OrderItem},
    },
};

/// What the submission sequence achieved.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Order recorded, receipt stored and linked, cart cleared.
    Completed { order: Order },

    /// The order exists but the receipt step failed. The cart is untouched
    /// and the flow can be completed later with
    /// [`CheckoutSubmitter::resume_receipt`].
    ReceiptPending { order: Order },
}

#[derive(Clone)]
pub struct CheckoutSubmitter {
    orders: Arc<dyn OrdersService>,
    receipts: Arc<dyn ReceiptStorage>,
    notifier: Arc<dyn Notifications>,
}

impl CheckoutSubmitter {
    #[must_use]
    pub fn new(
        orders: Arc<dyn OrdersService>,
        receipts: Arc<dyn ReceiptStorage>,
        notifier: Arc<dyn Notifications>,
    ) -> Self {
        Self {
            orders,
            receipts,
            notifier,
        }
    }

    /// Run the submission sequence for a completed flow.
    ///
    /// Order creation failure aborts with nothing recorded, so the user can
    /// retry from the same step. After the order exists, receipt failures
    /// downgrade to [`SubmissionOutcome::ReceiptPending`] rather than
    /// pretending the order away. Notifications are best-effort.
    ///
    /// # Errors
    ///
    /// Returns an error when a step gate fails or the order cannot be
    /// created.
    pub async fn submit(
        &self,
        checkout: &CheckoutFlow,
        cart: &mut CartLedger,
    ) -> Result<SubmissionOutcome, CheckoutError> {
        let (channel, billing, receipt) = checkout.ready_for_submission()?;

        if cart.is_empty() {
            return Err(crate::checkout::errors::CheckoutFlowError::EmptyBag.into());
        }

        let subtotal = cart.subtotal();

        let order = self
            .orders
            .create_order(NewOrder {
                customer_name: billing.name.clone(),
                email: billing.email.clone(),
                contact_number: billing.contact_number.clone(),
                address: billing.address.clone(),
                payment_method: channel.id.clone(),
                items: cart.items().iter().map(line_item).collect(),
                total_amount: fees::order_total(subtotal),
            })
            .await
            .map_err(CheckoutError::Orders)?;

        match self.store_receipt(&order, receipt.clone()).await {
            Ok(order) => {
                self.notify(&order).await;
                cart.clear().await;

                Ok(SubmissionOutcome::Completed { order })
            }
            Err(error) => {
                warn!(
                    "order {} left pending awaiting its receipt: {error}",
                    order.id
                );

                Ok(SubmissionOutcome::ReceiptPending { order })
            }
        }
    }

    /// Complete an interrupted submission by uploading and linking the
    /// receipt. Idempotent: an order that already carries a receipt is
    /// returned as-is.
    ///
    /// # Errors
    ///
    /// Returns an error when the upload is invalid, the order does not
    /// exist, or a storage step fails.
    pub async fn resume_receipt(
        &self,
        order_id: Uuid,
        upload: ReceiptUpload,
    ) -> Result<Order, CheckoutError> {
        flow::validate_receipt(&upload)
            .map_err(crate::checkout::errors::CheckoutFlowError::Receipt)?;

        let order = self
            .orders
            .get_order(order_id)
            .await
            .map_err(CheckoutError::Orders)?;

        if order.receipt_url.is_some() {
            return Ok(order);
        }

        let order = self.store_receipt(&order, upload).await.map_err(|error| {
            match error {
                ReceiptStepError::Storage(source) => CheckoutError::Storage(source),
                ReceiptStepError::Orders(source) => CheckoutError::Orders(source),
            }
        })?;

        self.notify(&order).await;

        Ok(order)
    }

    async fn store_receipt(
        &self,
        order: &Order,
        mut upload: ReceiptUpload,
    ) -> Result<Order, ReceiptStepError> {
        upload.filename = format!("receipt-{}-{}", order.id, upload.filename);

        let stored = self.receipts.upload(upload).await?;

        let order = self.orders.attach_receipt(order.id, &stored.url).await?;

        Ok(order)
    }

    async fn notify(&self, order: &Order) {
        if let Err(error) = self.notifier.admin_new_order(order).await {
            warn!("failed to notify admins of order {}: {error}", order.id);
        }

        if order.email.is_some() {
            if let Err(error) = self.notifier.order_confirmation(order).await {
                warn!("failed to send confirmation for {}: {error}", order.id);
            }
        }
    }
}

#[derive(Debug, Error)]
enum ReceiptStepError {
    #[error("receipt upload failed: {0}")]
    Storage(#[from] FileStorageError),

    #[error("receipt could not be linked: {0}")]
    Orders(#[from] OrdersServiceError),
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        carts::{CartPersistence, MemoryCartStore},
        catalog::models::Product,
        checkout::{
            channels::default_channels,
            errors::CheckoutFlowError,
            flow::BillingDetails,
        },
        files::{MockReceiptStorage, StoredReceipt},
        notifications::MockNotifications,
        orders::{SheetOrdersService, models::OrderStatus},
        store::MemorySheetStore,
    };

    use super::*;

    fn product(id: &str, price: u64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            price,
            discounted_price: None,
            image: String::new(),
            gallery: Vec::new(),
            category: "misc".to_string(),
            product_type: "misc".to_string(),
            active: true,
            rating: 0,
            description: None,
            badges: Vec::new(),
            color: None,
            stock: 10,
            created_at: jiff::Timestamp::UNIX_EPOCH,
            updated_at: jiff::Timestamp::UNIX_EPOCH,
        }
    }

    fn cart() -> CartLedger {
        CartLedger::new(CartPersistence::new(vec![Box::new(MemoryCartStore::new())]))
    }

    fn receipt() -> ReceiptUpload {
        ReceiptUpload {
            filename: "gcash.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0_u8; 64],
        }
    }

    fn completed_flow() -> CheckoutFlow {
        let mut flow = CheckoutFlow::new(default_channels());

        flow.select_channel("gcash").expect("channel exists");
        flow.set_billing(BillingDetails {
            name: "Maria Clara".to_string(),
            email: Some("maria@example.com".to_string()),
            address: "123 Rizal St".to_string(),
            contact_number: "09171234567".to_string(),
        });
        flow.set_receipt(receipt()).expect("valid receipt");

        flow
    }

    fn storage_returning(url: &str) -> MockReceiptStorage {
        let url = url.to_string();
        let mut storage = MockReceiptStorage::new();

        storage.expect_upload().times(1).returning(move |upload| {
            assert!(
                upload.filename.starts_with("receipt-"),
                "stored name should carry the order id prefix"
            );

            Ok(StoredReceipt {
                file_id: "f-1".to_string(),
                url: url.clone(),
            })
        });

        storage
    }

    fn quiet_notifier() -> MockNotifications {
        let mut notifier = MockNotifications::new();

        notifier.expect_admin_new_order().returning(|_| Ok(()));
        notifier.expect_order_confirmation().returning(|_| Ok(()));

        notifier
    }

    #[tokio::test]
    async fn full_submission_records_pays_and_clears() -> TestResult {
        let orders = Arc::new(SheetOrdersService::new(Arc::new(MemorySheetStore::new())));

        let submitter = CheckoutSubmitter::new(
            orders.clone(),
            Arc::new(storage_returning("https://files.example.com/r1.png")),
            Arc::new(quiet_notifier()),
        );

        let mut cart = cart();
        cart.add_item(&product("p-1", 300_00)).await;
        cart.add_item(&product("p-2", 250_00)).await;
        cart.update_quantity("p-2", 2).await;

        let outcome = submitter.submit(&completed_flow(), &mut cart).await?;

        let order = match outcome {
            SubmissionOutcome::Completed { order } => order,
            other => panic!("expected Completed, got {other:?}"),
        };

        // 300 + 2 x 250 = 800, free shipping at the threshold.
        assert_eq!(order.total_amount, 800_00);
        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(
            order.receipt_url.as_deref(),
            Some("https://files.example.com/r1.png")
        );
        assert!(cart.is_empty(), "cart clears after success");

        let stored = orders.get_order(order.id).await?;

        assert_eq!(stored.status, OrderStatus::Paid);

        Ok(())
    }

    #[tokio::test]
    async fn small_order_pays_the_flat_fee() -> TestResult {
        let orders = Arc::new(SheetOrdersService::new(Arc::new(MemorySheetStore::new())));

        let submitter = CheckoutSubmitter::new(
            orders,
            Arc::new(storage_returning("https://files.example.com/r2.png")),
            Arc::new(quiet_notifier()),
        );

        let mut cart = cart();
        cart.add_item(&product("p-1", 100_00)).await;

        let outcome = submitter.submit(&completed_flow(), &mut cart).await?;

        let order = match outcome {
            SubmissionOutcome::Completed { order } => order,
            other => panic!("expected Completed, got {other:?}"),
        };

        assert_eq!(order.total_amount, 175_00);

        Ok(())
    }

    #[tokio::test]
    async fn empty_bag_cannot_be_submitted() {
        let orders = Arc::new(SheetOrdersService::new(Arc::new(MemorySheetStore::new())));

        let mut storage = MockReceiptStorage::new();
        storage.expect_upload().never();

        let submitter =
            CheckoutSubmitter::new(orders, Arc::new(storage), Arc::new(MockNotifications::new()));

        let mut cart = cart();

        let result = submitter.submit(&completed_flow(), &mut cart).await;

        assert!(
            matches!(
                result,
                Err(CheckoutError::Flow(CheckoutFlowError::EmptyBag))
            ),
            "expected EmptyBag, got {result:?}"
        );
    }

    #[tokio::test]
    async fn receipt_failure_leaves_a_resumable_pending_order() -> TestResult {
        let orders = Arc::new(SheetOrdersService::new(Arc::new(MemorySheetStore::new())));

        let mut storage = MockReceiptStorage::new();
        storage.expect_upload().times(1).returning(|_| {
            Err(crate::files::FileStorageError::UnexpectedResponse(
                "storage down".to_string(),
            ))
        });

        let mut notifier = MockNotifications::new();
        notifier.expect_admin_new_order().never();
        notifier.expect_order_confirmation().never();

        let submitter =
            CheckoutSubmitter::new(orders.clone(), Arc::new(storage), Arc::new(notifier));

        let mut cart = cart();
        cart.add_item(&product("p-1", 100_00)).await;

        let outcome = submitter.submit(&completed_flow(), &mut cart).await?;

        let order = match outcome {
            SubmissionOutcome::ReceiptPending { order } => order,
            other => panic!("expected ReceiptPending, got {other:?}"),
        };

        assert!(!cart.is_empty(), "cart survives a failed receipt step");

        let stored = orders.get_order(order.id).await?;

        assert_eq!(stored.status, OrderStatus::Pending);
        assert_eq!(stored.receipt_url, None);

        // The row is the saga cursor; resuming completes the flow.
        let resumed = CheckoutSubmitter::new(
            orders.clone(),
            Arc::new(storage_returning("https://files.example.com/r3.png")),
            Arc::new(quiet_notifier()),
        )
        .resume_receipt(order.id, receipt())
        .await?;

        assert_eq!(resumed.status, OrderStatus::Paid);

        Ok(())
    }

    #[tokio::test]
    async fn resume_is_idempotent_once_a_receipt_is_linked() -> TestResult {
        let orders = Arc::new(SheetOrdersService::new(Arc::new(MemorySheetStore::new())));

        let submitter = CheckoutSubmitter::new(
            orders.clone(),
            Arc::new(storage_returning("https://files.example.com/r4.png")),
            Arc::new(quiet_notifier()),
        );

        let mut cart = cart();
        cart.add_item(&product("p-1", 100_00)).await;

        let outcome = submitter.submit(&completed_flow(), &mut cart).await?;

        let order = match outcome {
            SubmissionOutcome::Completed { order } => order,
            other => panic!("expected Completed, got {other:?}"),
        };

        // A second upload attempt must not touch storage again.
        let mut storage = MockReceiptStorage::new();
        storage.expect_upload().never();

        let resumed = CheckoutSubmitter::new(
            orders,
            Arc::new(storage),
            Arc::new(MockNotifications::new()),
        )
        .resume_receipt(order.id, receipt())
        .await?;

        assert_eq!(
            resumed.receipt_url.as_deref(),
            Some("https://files.example.com/r4.png")
        );

        Ok(())
    }

    #[tokio::test]
    async fn resume_on_an_unknown_order_is_not_found() {
        let orders = Arc::new(SheetOrdersService::new(Arc::new(MemorySheetStore::new())));

        let mut storage = MockReceiptStorage::new();
        storage.expect_upload().never();

        let submitter =
            CheckoutSubmitter::new(orders, Arc::new(storage), Arc::new(MockNotifications::new()));

        let result = submitter.resume_receipt(Uuid::now_v7(), receipt()).await;

        assert!(
            matches!(
                result,
                Err(CheckoutError::Orders(OrdersServiceError::NotFound))
            ),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn notification_failures_do_not_block_success() -> TestResult {
        let orders = Arc::new(SheetOrdersService::new(Arc::new(MemorySheetStore::new())));

        let mut notifier = MockNotifications::new();
        notifier.expect_admin_new_order().returning(|_| {
            Err(crate::notifications::NotificationError::NoRecipient)
        });
        notifier.expect_order_confirmation().returning(|_| {
            Err(crate::notifications::NotificationError::NoRecipient)
        });

        let submitter = CheckoutSubmitter::new(
            orders,
            Arc::new(storage_returning("https://files.example.com/r5.png")),
            Arc::new(notifier),
        );

        let mut cart = cart();
        cart.add_item(&product("p-1", 100_00)).await;

        let outcome = submitter.submit(&completed_flow(), &mut cart).await?;

        assert!(
            matches!(outcome, SubmissionOutcome::Completed { .. }),
            "notification failure must not block the order"
        );

        Ok(())
    }
}

fn line_item(item: &CartItem) -> OrderItem {
    OrderItem {
        id: item.product_id.clone(),
        name: item.name.clone(),
        price: item.price,
        quantity: item.quantity,
    }
}
