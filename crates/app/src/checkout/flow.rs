//! Checkout flow state machine.
//!
//! Four client-driven steps, each gated by validation before advancing.
//! Back-navigation never drops entered data.

use crate::{
    carts::models::CartItem,
    checkout::{
        channels::PaymentChannel,
        errors::{CheckoutFlowError, MAX_RECEIPT_BYTES, ReceiptValidationError},
        fees,
    },
    files::ReceiptUpload,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    PaymentMethod,
    Billing,
    Summary,
    Payment,
}

impl CheckoutStep {
    fn next(self) -> Self {
        match self {
            Self::PaymentMethod => Self::Billing,
            Self::Billing => Self::Summary,
            Self::Summary | Self::Payment => Self::Payment,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::PaymentMethod | Self::Billing => Self::PaymentMethod,
            Self::Summary => Self::Billing,
            Self::Payment => Self::Summary,
        }
    }
}

/// Billing details collected on the second step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingDetails {
    pub name: String,
    pub email: Option<String>,
    pub address: String,
    pub contact_number: String,
}

/// Read-only recap shown on the Summary step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub items: Vec<CartItem>,
    pub subtotal: u64,
    pub shipping_fee: u64,
    pub total: u64,
    pub payment_method: Option<String>,
    pub billing: BillingDetails,
}

#[derive(Debug)]
pub struct CheckoutFlow {
    channels: Vec<PaymentChannel>,
    step: CheckoutStep,
    selected_channel: Option<String>,
    billing: BillingDetails,
    receipt: Option<ReceiptUpload>,
}

impl CheckoutFlow {
    #[must_use]
    pub fn new(channels: Vec<PaymentChannel>) -> Self {
        Self {
            channels,
            step: CheckoutStep::PaymentMethod,
            selected_channel: None,
            billing: BillingDetails::default(),
            receipt: None,
        }
    }

    #[must_use]
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    #[must_use]
    pub fn channels(&self) -> &[PaymentChannel] {
        &self.channels
    }

    #[must_use]
    pub fn selected_channel(&self) -> Option<&PaymentChannel> {
        let selected = self.selected_channel.as_deref()?;

        self.channels.iter().find(|channel| channel.id == selected)
    }

    /// Pick one of the configured channels.
    ///
    /// # Errors
    ///
    /// Returns an error when the id is not in the configured set.
    pub fn select_channel(&mut self, id: &str) -> Result<(), CheckoutFlowError> {
        if !self.channels.iter().any(|channel| channel.id == id) {
            return Err(CheckoutFlowError::UnknownChannel(id.to_string()));
        }

        self.selected_channel = Some(id.to_string());

        Ok(())
    }

    pub fn set_billing(&mut self, billing: BillingDetails) {
        self.billing = billing;
    }

    #[must_use]
    pub fn billing(&self) -> &BillingDetails {
        &self.billing
    }

    /// Attach the proof-of-payment image.
    ///
    /// # Errors
    ///
    /// Returns an error when the upload is not an image or exceeds the size
    /// limit; the flow keeps any previously attached receipt.
    pub fn set_receipt(&mut self, upload: ReceiptUpload) -> Result<(), ReceiptValidationError> {
        validate_receipt(&upload)?;

        self.receipt = Some(upload);

        Ok(())
    }

    /// Move to the next step if the current step's gate passes.
    ///
    /// # Errors
    ///
    /// Returns the gate failure; the flow stays on the current step.
    pub fn advance(&mut self) -> Result<CheckoutStep, CheckoutFlowError> {
        match self.step {
            CheckoutStep::PaymentMethod => {
                if self.selected_channel.is_none() {
                    return Err(CheckoutFlowError::NoPaymentMethod);
                }
            }
            CheckoutStep::Billing => {
                self.validate_billing()?;
            }
            // Summary is informational; Payment is the last step.
            CheckoutStep::Summary | CheckoutStep::Payment => {}
        }

        self.step = self.step.next();

        Ok(self.step)
    }

    /// Return to the previous step, keeping all entered data.
    pub fn back(&mut self) -> CheckoutStep {
        self.step = self.step.previous();

        self.step
    }

    /// Recap for the Summary step.
    #[must_use]
    pub fn summary(&self, items: &[CartItem]) -> CheckoutSummary {
        let subtotal = items.iter().map(CartItem::line_total).sum();

        CheckoutSummary {
            items: items.to_vec(),
            subtotal,
            shipping_fee: fees::shipping_fee(subtotal),
            total: fees::order_total(subtotal),
            payment_method: self.selected_channel().map(|channel| channel.name.clone()),
            billing: self.billing.clone(),
        }
    }

    /// Everything the final submission needs, re-checking every gate.
    pub(crate) fn ready_for_submission(
        &self,
    ) -> Result<(&PaymentChannel, &BillingDetails, &ReceiptUpload), CheckoutFlowError> {
        let channel = self
            .selected_channel()
            .ok_or(CheckoutFlowError::NoPaymentMethod)?;

        self.validate_billing()?;

        let receipt = self
            .receipt
            .as_ref()
            .ok_or(CheckoutFlowError::MissingReceipt)?;

        Ok((channel, &self.billing, receipt))
    }

    fn validate_billing(&self) -> Result<(), CheckoutFlowError> {
        let require = |cell: &str, field: &'static str| {
            if cell.trim().is_empty() {
                Err(CheckoutFlowError::MissingBillingField(field))
            } else {
                Ok(())
            }
        };

        require(&self.billing.name, "name")?;
        require(&self.billing.address, "address")?;
        require(&self.billing.contact_number, "contactNumber")?;

        Ok(())
    }
}

pub(crate) fn validate_receipt(upload: &ReceiptUpload) -> Result<(), ReceiptValidationError> {
    if !upload.content_type.starts_with("image/") {
        return Err(ReceiptValidationError::NotAnImage(
            upload.content_type.clone(),
        ));
    }

    if upload.bytes.len() > MAX_RECEIPT_BYTES {
        return Err(ReceiptValidationError::TooLarge(upload.bytes.len()));
    }

    Ok(())
}
