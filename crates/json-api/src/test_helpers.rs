//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use tindera_app::{
    auth::{AdminGate, Identity, MockIdentityProvider},
    catalog::MockCatalogService,
    checkout::{CheckoutSubmitter, channels::default_channels},
    context::AppContext,
    feedback::MockFeedbackService,
    files::MockReceiptStorage,
    notifications::{MockNotifications, Notifications},
    orders::{
        MockOrdersService, OrdersService,
        models::{Order, OrderItem, OrderStatus},
    },
    profiles::{MockProfilesService, ProfilesService},
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_EMAIL: &str = "maria@example.com";

pub(crate) fn test_identity() -> Identity {
    Identity {
        user_id: "user-test".to_string(),
        email: TEST_USER_EMAIL.to_string(),
    }
}

/// Stand-in for the authentication middleware.
#[salvo::handler]
pub(crate) async fn inject_identity(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_identity(test_identity());
    ctrl.call_next(req, depot, res).await;
}

/// Mock set for one handler test; unused services stay strict-by-panic.
pub(crate) struct TestApp {
    pub catalog: MockCatalogService,
    pub orders: MockOrdersService,
    pub profiles: MockProfilesService,
    pub feedback: MockFeedbackService,
    pub notifier: MockNotifications,
    pub receipts: MockReceiptStorage,
    pub identity: MockIdentityProvider,
    pub admin_emails: String,
}

impl Default for TestApp {
    fn default() -> Self {
        Self {
            catalog: MockCatalogService::new(),
            orders: MockOrdersService::new(),
            profiles: MockProfilesService::new(),
            feedback: MockFeedbackService::new(),
            notifier: MockNotifications::new(),
            receipts: MockReceiptStorage::new(),
            identity: MockIdentityProvider::new(),
            admin_emails: "admin@tindera.example".to_string(),
        }
    }
}

impl TestApp {
    pub(crate) fn into_context(self) -> AppContext {
        let orders: Arc<dyn OrdersService> = Arc::new(self.orders);
        let notifier: Arc<dyn Notifications> = Arc::new(self.notifier);
        let profiles: Arc<dyn ProfilesService> = Arc::new(self.profiles);

        let checkout =
            CheckoutSubmitter::new(orders.clone(), Arc::new(self.receipts), notifier.clone());

        AppContext {
            catalog: Arc::new(self.catalog),
            orders,
            profiles,
            feedback: Arc::new(self.feedback),
            notifier,
            identity: Arc::new(self.identity),
            checkout,
            admin_gate: AdminGate::from_list(&self.admin_emails),
            channels: default_channels(),
        }
    }

    /// Route served behind the app state, unauthenticated.
    pub(crate) fn service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(State::from_app_context(self.into_context())))
                .push(route),
        )
    }

    /// Route served as the authenticated test user.
    pub(crate) fn authed_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(State::from_app_context(self.into_context())))
                .hoop(inject_identity)
                .push(route),
        )
    }
}

pub(crate) fn make_order(id: Uuid) -> Order {
    Order {
        id,
        date: Timestamp::now(),
        customer_name: "Maria Clara".to_string(),
        email: Some(TEST_USER_EMAIL.to_string()),
        contact_number: "09171234567".to_string(),
        address: "123 Rizal St".to_string(),
        payment_method: "gcash".to_string(),
        items: vec![OrderItem {
            id: "p-1".to_string(),
            name: "Enamel Pin".to_string(),
            price: 100_00,
            quantity: 1,
        }],
        total_amount: 175_00,
        status: OrderStatus::Pending,
        receipt_url: None,
    }
}
