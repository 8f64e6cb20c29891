//! App Router

use salvo::Router;

use crate::{admin, auth, feedback, healthcheck, orders, products, profile};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{id}").get(products::get::handler)),
        )
        .push(
            Router::with_path("orders")
                .post(orders::create::handler)
                .push(
                    Router::with_path("{id}")
                        .push(Router::with_path("status").get(orders::status::handler))
                        .push(Router::with_path("receipt").post(orders::receipt::handler)),
                ),
        )
        .push(Router::with_path("feedback").post(feedback::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::authenticate)
                .push(
                    Router::with_path("profile")
                        .get(profile::get::handler)
                        .put(profile::update::handler)
                        .push(Router::with_path("orders").get(profile::orders::handler)),
                )
                .push(
                    Router::with_path("admin")
                        .hoop(auth::middleware::require_admin)
                        .push(
                            Router::with_path("orders")
                                .get(admin::index::handler)
                                .push(
                                    Router::with_path("{id}")
                                        .get(admin::get::handler)
                                        .push(
                                            Router::with_path("status")
                                                .put(admin::update_status::handler),
                                        )
                                        .push(
                                            Router::with_path("send-invoice")
                                                .post(admin::send_invoice::handler),
                                        )
                                        .push(
                                            Router::with_path("send-thank-you")
                                                .post(admin::send_thank_you::handler),
                                        ),
                                ),
                        ),
                ),
        )
}
