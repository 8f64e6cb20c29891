//! Transactional email bodies.

use std::fmt::Write as _;

use crate::{money::format_amount, notifications::ShopIdentity, orders::models::Order};

fn peso(centavos: u64) -> String {
    format!("₱{}", format_amount(centavos))
}

fn items_table(order: &Order) -> String {
    let mut rows = String::new();

    for item in &order.items {
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            item.name,
            item.quantity,
            peso(item.price),
            peso(item.price * u64::from(item.quantity)),
        );
    }

    format!(
        "<table>\
           <thead><tr><th>Item</th><th>Quantity</th><th>Price</th><th>Total</th></tr></thead>\
           <tbody>{rows}</tbody>\
         </table>"
    )
}

pub(super) fn confirmation_html(order: &Order) -> String {
    let mut items = String::new();

    for item in &order.items {
        let _ = write!(
            items,
            "<li>{} x {} - {}</li>",
            item.name,
            item.quantity,
            peso(item.price * u64::from(item.quantity)),
        );
    }

    format!(
        "<h1>Thank you for your order!</h1>\
         <p>Order ID: {}</p>\
         <p>Total: {}</p>\
         <h2>Items:</h2>\
         <ul>{items}</ul>\
         <p>We'll keep you updated on your order status.</p>",
        order.id,
        peso(order.total_amount),
    )
}

pub(super) fn admin_new_order_html(order: &Order) -> String {
    format!(
        "<h1>New order received</h1>\
         <p>Order #{} from {}</p>\
         <p>Contact: {} / {}</p>\
         <p>Deliver to: {}</p>\
         <p>Payment via {}</p>\
         {}\
         <p><strong>Total: {}</strong></p>",
        order.id,
        order.customer_name,
        order.contact_number,
        order.email.as_deref().unwrap_or("no email"),
        order.address,
        order.payment_method,
        items_table(order),
        peso(order.total_amount),
    )
}

pub(super) fn invoice_html(order: &Order, shop: &ShopIdentity) -> String {
    format!(
        "<div class=\"container\">\
           <div class=\"header\"><h1>Order Invoice</h1><p>Order #{}</p><p>{}</p></div>\
           <div class=\"order-details\">\
             <h2>Customer Details</h2>\
             <p><strong>Name:</strong> {}</p>\
             <p><strong>Email:</strong> {}</p>\
             <p><strong>Address:</strong> {}</p>\
             <p><strong>Contact:</strong> {}</p>\
           </div>\
           <div class=\"items\"><h2>Order Items</h2>{}</div>\
           <p class=\"total\">Total: {}</p>\
           <p class=\"footer\">{}</p>\
         </div>",
        order.id,
        order.date,
        order.customer_name,
        order.email.as_deref().unwrap_or("N/A"),
        order.address,
        order.contact_number,
        items_table(order),
        peso(order.total_amount),
        shop.name,
    )
}

pub(super) fn thank_you_html(order: &Order, shop: &ShopIdentity) -> String {
    format!(
        "<div class=\"container\">\
           <div class=\"header\"><h1>Thank You for Your Purchase!</h1></div>\
           <div class=\"content\">\
             <p>Dear {},</p>\
             <p>Thank you for shopping with {}! We truly appreciate your \
              business and trust in our products.</p>\
             <p>Your order (#{}) has been received and is being processed. \
              We'll make sure to keep you updated on its status.</p>\
             <p>If you have any questions about your order, feel free to contact us:</p>\
             <ul><li>Email: {}</li><li>Phone: {}</li></ul>\
             <p>We hope you'll love your new items!</p>\
           </div>\
         </div>",
        order.customer_name,
        shop.name,
        order.id,
        shop.support_email,
        shop.support_phone,
    )
}
