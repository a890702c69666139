//! Native payment SDK method set.
//!
//! One method per native entry point. Arguments have already been validated
//! by the facade; implementations forward them to the SDK untouched and
//! surface SDK failures as [`BridgeError::Native`](crate::error::BridgeError::Native).

use async_trait::async_trait;
use serde_json::Value;

use crate::codes::ErrorCodes;
use crate::error::Result;

/// Device and wallet capability checks.
#[async_trait]
pub trait CapabilitiesQuery: Send + Sync {
    /// Whether the device hardware and OS version support Apple Pay.
    async fn device_supports_apple_pay(&self) -> Result<bool>;

    /// Whether the wallet holds a card on one of `options.networks`.
    async fn can_make_apple_pay_payments(&self, options: Value) -> Result<bool>;

    /// Whether Google Play services expose Android Pay on this device.
    async fn device_supports_android_pay(&self) -> Result<bool>;

    async fn can_make_android_pay_payments(&self) -> Result<bool>;
}

/// Payment sheet presentation and teardown.
///
/// Android has no counterpart for completing, cancelling or provisioning; the
/// facade resolves those locally on that platform.
#[async_trait]
pub trait PaymentRequestLifecycle: Send + Sync {
    /// Present the Apple Pay sheet for `items` and resolve with the token
    /// once the user authorizes.
    async fn payment_request_with_apple_pay(&self, items: Value, options: Value)
        -> Result<Value>;

    /// Dismiss the sheet with a success state after the token was charged.
    async fn complete_apple_pay_request(&self) -> Result<()>;

    /// Dismiss the sheet with a failure state.
    async fn cancel_apple_pay_request(&self) -> Result<()>;

    /// Deep link to the Wallet card provisioning UI.
    async fn open_apple_pay_setup(&self) -> Result<()>;

    async fn payment_request_with_android_pay(&self, options: Value) -> Result<Value>;
}

/// Card form and token / source creation.
#[async_trait]
pub trait Tokenization: Send + Sync {
    /// Present the SDK card entry form. `options.theme` is always present and
    /// fully populated.
    async fn payment_request_with_card_form(&self, options: Value) -> Result<Value>;

    async fn create_token_with_card(&self, params: Value) -> Result<Value>;

    async fn create_token_with_bank_account(&self, params: Value) -> Result<Value>;

    async fn create_source_with_params(&self, params: Value) -> Result<Value>;
}

/// Complete native module contract.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::payments::PaymentBridge;
/// use serde_json::json;
///
/// async fn configure(bridge: &dyn PaymentBridge) -> bridge_traits::error::Result<()> {
///     bridge.init(json!({ "publishableKey": "pk_test_123" })).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait PaymentBridge: CapabilitiesQuery + PaymentRequestLifecycle + Tokenization {
    /// Configure the SDK with credentials (publishable key, merchant id).
    async fn init(&self, options: Value) -> Result<Value>;

    /// Error domain and codes exported by the native module.
    fn error_codes(&self) -> ErrorCodes;
}
