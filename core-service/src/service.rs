//! # Payment Facade
//!
//! [`PaymentService`] is the single entry point host applications call. Each
//! operation runs the same pipeline:
//!
//! 1. check the `set_options` precondition (gated operations only)
//! 2. validate every options/params argument against its declared schema
//! 3. pick the native branch for the host ([`NativePay`])
//! 4. forward the validated value to the [`PaymentBridge`] unchanged and
//!    return whatever the bridge resolves with
//!
//! Local failures (steps 1-3) never reach the bridge. Bridge failures are
//! surfaced as [`PaymentError::Native`] without retry or reinterpretation.
//!
//! ## Usage
//!
//! ```ignore
//! use core_service::{options::{CardParams, SetOptions}, PaymentService};
//! use bridge_traits::HostPlatform;
//!
//! let service = PaymentService::with_bridge(bridge, HostPlatform::Ios);
//! service.set_options(&SetOptions::new("pk_test_123")).await?;
//!
//! let token = service
//!     .create_token_with_card(&CardParams::new("4242424242424242", 12, 2030))
//!     .await?;
//! ```

use bridge_traits::{ErrorCodes, HostPlatform, PaymentBridge};
use core_runtime::config::PaymentsConfig;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::error::{PaymentError, Result};
use crate::options::{
    AndroidPayOptions, ApplePayItem, ApplePayOptions, BankAccountParams,
    CanMakeApplePayPaymentsOptions, CardFormOptions, CardParams, SetOptions, SourceParams,
};
use crate::schema::{check_field, Schema};
use crate::theme::normalize_theme;

/// Public method names as they appear in error messages.
pub mod method {
    pub const SET_OPTIONS: &str = "Stripe.setOptions";
    pub const DEVICE_SUPPORTS_NATIVE_PAY: &str = "Stripe.deviceSupportsNativePay";
    pub const CAN_MAKE_NATIVE_PAY_PAYMENTS: &str = "Stripe.canMakeNativePayPayments";
    pub const PAYMENT_REQUEST_WITH_NATIVE_PAY: &str = "Stripe.paymentRequestWithNativePay";
    pub const COMPLETE_NATIVE_PAY_REQUEST: &str = "Stripe.completeNativePayRequest";
    pub const CANCEL_NATIVE_PAY_REQUEST: &str = "Stripe.cancelNativePayRequest";
    pub const OPEN_NATIVE_PAY_SETUP: &str = "Stripe.openNativePaySetup";
    pub const DEVICE_SUPPORTS_APPLE_PAY: &str = "Stripe.deviceSupportsApplePay";
    pub const DEVICE_SUPPORTS_ANDROID_PAY: &str = "Stripe.deviceSupportsAndroidPay";
    pub const CAN_MAKE_APPLE_PAY_PAYMENTS: &str = "Stripe.canMakeApplePayPayments";
    pub const CAN_MAKE_ANDROID_PAY_PAYMENTS: &str = "Stripe.canMakeAndroidPayPayments";
    pub const PAYMENT_REQUEST_WITH_APPLE_PAY: &str = "Stripe.paymentRequestWithApplePay";
    pub const PAYMENT_REQUEST_WITH_ANDROID_PAY: &str = "Stripe.paymentRequestWithAndroidPay";
    pub const COMPLETE_APPLE_PAY_REQUEST: &str = "Stripe.completeApplePayRequest";
    pub const CANCEL_APPLE_PAY_REQUEST: &str = "Stripe.cancelApplePayRequest";
    pub const OPEN_APPLE_PAY_SETUP: &str = "Stripe.openApplePaySetup";
    pub const PAYMENT_REQUEST_WITH_CARD_FORM: &str = "Stripe.paymentRequestWithCardForm";
    pub const CREATE_TOKEN_WITH_CARD: &str = "Stripe.createTokenWithCard";
    pub const CREATE_TOKEN_WITH_BANK_ACCOUNT: &str = "Stripe.createTokenWithBankAccount";
    pub const CREATE_SOURCE_WITH_PARAMS: &str = "Stripe.createSourceWithParams";
}

/// Native wallet the `*_native_pay*` operations dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativePay {
    ApplePay,
    AndroidPay,
}

impl NativePay {
    /// Wallet available on `platform`, if any.
    pub fn for_platform(platform: &HostPlatform) -> Option<Self> {
        match platform {
            HostPlatform::Ios => Some(Self::ApplePay),
            HostPlatform::Android => Some(Self::AndroidPay),
            HostPlatform::Other(_) => None,
        }
    }
}

impl fmt::Display for NativePay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApplePay => f.write_str("ApplePay"),
            Self::AndroidPay => f.write_str("AndroidPay"),
        }
    }
}

/// Argument-validating facade over the native payment bridge.
///
/// Cheap to share: wrap in an `Arc` and call from any task.
pub struct PaymentService {
    bridge: Arc<dyn PaymentBridge>,
    platform: HostPlatform,
    native_pay: Option<NativePay>,
    error_codes: ErrorCodes,
    initialized: AtomicBool,
}

impl PaymentService {
    /// Create the facade from a validated configuration.
    pub fn new(config: PaymentsConfig) -> Self {
        Self::with_bridge(config.bridge, config.platform)
    }

    /// Create the facade directly from a bridge handle.
    ///
    /// Error codes are read from the bridge once, here.
    pub fn with_bridge(bridge: Arc<dyn PaymentBridge>, platform: HostPlatform) -> Self {
        let error_codes = bridge.error_codes();
        let native_pay = NativePay::for_platform(&platform);

        debug!(%platform, native_pay = ?native_pay, "Payment facade created");

        Self {
            bridge,
            platform,
            native_pay,
            error_codes,
            initialized: AtomicBool::new(false),
        }
    }

    /// Error domain and codes published by the native module, verbatim.
    pub fn error_codes(&self) -> &ErrorCodes {
        &self.error_codes
    }

    pub fn platform(&self) -> &HostPlatform {
        &self.platform
    }

    /// Native wallet this host dispatches to, `None` on unsupported hosts.
    pub fn native_pay(&self) -> Option<NativePay> {
        self.native_pay
    }

    /// Whether `set_options` has accepted options.
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    // ---------------------------------------------------------------------
    // Initialization
    // ---------------------------------------------------------------------

    /// Configure the SDK (publishable key, Apple Pay merchant id, Android Pay
    /// environment) and unlock the gated operations.
    #[instrument(skip_all, fields(platform = %self.platform))]
    pub async fn set_options<O>(&self, options: &O) -> Result<Value>
    where
        O: Serialize + ?Sized,
    {
        let options = validated(&SetOptions::SCHEMA, options, "options", method::SET_OPTIONS)?;

        self.initialized.store(true, Ordering::Release);
        info!("Payment SDK initialized");

        forwarding(method::SET_OPTIONS);
        Ok(self.bridge.init(options).await?)
    }

    // ---------------------------------------------------------------------
    // Cross-platform wallet operations
    // ---------------------------------------------------------------------

    #[instrument(skip_all, fields(platform = %self.platform))]
    pub async fn device_supports_native_pay(&self) -> Result<bool> {
        match self.native_pay_for(method::DEVICE_SUPPORTS_NATIVE_PAY)? {
            NativePay::ApplePay => self.apple_pay_supported(method::DEVICE_SUPPORTS_NATIVE_PAY).await,
            NativePay::AndroidPay => {
                self.android_pay_supported(method::DEVICE_SUPPORTS_NATIVE_PAY)
                    .await
            }
        }
    }

    /// On Android the options are ignored; Google Pay has no network filter
    /// at this stage.
    #[instrument(skip_all, fields(platform = %self.platform))]
    pub async fn can_make_native_pay_payments<O>(&self, options: &O) -> Result<bool>
    where
        O: Serialize + ?Sized,
    {
        let name = method::CAN_MAKE_NATIVE_PAY_PAYMENTS;
        match self.native_pay_for(name)? {
            NativePay::ApplePay => self.can_make_apple_pay(options, name).await,
            NativePay::AndroidPay => self.can_make_android_pay(name).await,
        }
    }

    /// Present the wallet sheet. `items` is only read on iOS.
    #[instrument(skip_all, fields(platform = %self.platform))]
    pub async fn payment_request_with_native_pay<O, I>(&self, options: &O, items: &I) -> Result<Value>
    where
        O: Serialize + ?Sized,
        I: Serialize + ?Sized,
    {
        let name = method::PAYMENT_REQUEST_WITH_NATIVE_PAY;
        match self.native_pay_for(name)? {
            NativePay::ApplePay => self.apple_pay_request(items, options, name).await,
            NativePay::AndroidPay => self.android_pay_request(options, name).await,
        }
    }

    /// Resolves immediately on Android.
    #[instrument(skip_all, fields(platform = %self.platform))]
    pub async fn complete_native_pay_request(&self) -> Result<()> {
        let name = method::COMPLETE_NATIVE_PAY_REQUEST;
        match self.native_pay_for(name)? {
            NativePay::ApplePay => self.complete_apple_pay(name).await,
            NativePay::AndroidPay => Ok(()),
        }
    }

    /// Resolves immediately on Android.
    #[instrument(skip_all, fields(platform = %self.platform))]
    pub async fn cancel_native_pay_request(&self) -> Result<()> {
        let name = method::CANCEL_NATIVE_PAY_REQUEST;
        match self.native_pay_for(name)? {
            NativePay::ApplePay => self.cancel_apple_pay(name).await,
            NativePay::AndroidPay => Ok(()),
        }
    }

    /// Resolves immediately on Android.
    #[instrument(skip_all, fields(platform = %self.platform))]
    pub async fn open_native_pay_setup(&self) -> Result<()> {
        let name = method::OPEN_NATIVE_PAY_SETUP;
        match self.native_pay_for(name)? {
            NativePay::ApplePay => self.open_apple_pay(name).await,
            NativePay::AndroidPay => Ok(()),
        }
    }

    // ---------------------------------------------------------------------
    // Direct platform operations
    // ---------------------------------------------------------------------

    #[deprecated(note = "use `device_supports_native_pay`")]
    #[instrument(skip_all, fields(platform = %self.platform))]
    pub async fn device_supports_apple_pay(&self) -> Result<bool> {
        self.apple_pay_supported(method::DEVICE_SUPPORTS_APPLE_PAY)
            .await
    }

    #[deprecated(note = "use `device_supports_native_pay`")]
    #[instrument(skip_all, fields(platform = %self.platform))]
    pub async fn device_supports_android_pay(&self) -> Result<bool> {
        self.android_pay_supported(method::DEVICE_SUPPORTS_ANDROID_PAY)
            .await
    }

    #[deprecated(note = "use `can_make_native_pay_payments`")]
    #[instrument(skip_all, fields(platform = %self.platform))]
    pub async fn can_make_apple_pay_payments<O>(&self, options: &O) -> Result<bool>
    where
        O: Serialize + ?Sized,
    {
        self.can_make_apple_pay(options, method::CAN_MAKE_APPLE_PAY_PAYMENTS)
            .await
    }

    #[deprecated(note = "use `can_make_native_pay_payments`")]
    #[instrument(skip_all, fields(platform = %self.platform))]
    pub async fn can_make_android_pay_payments(&self) -> Result<bool> {
        self.can_make_android_pay(method::CAN_MAKE_ANDROID_PAY_PAYMENTS)
            .await
    }

    #[deprecated(note = "use `payment_request_with_native_pay`")]
    #[instrument(skip_all, fields(platform = %self.platform))]
    pub async fn payment_request_with_apple_pay<I, O>(&self, items: &I, options: &O) -> Result<Value>
    where
        I: Serialize + ?Sized,
        O: Serialize + ?Sized,
    {
        self.apple_pay_request(items, options, method::PAYMENT_REQUEST_WITH_APPLE_PAY)
            .await
    }

    #[deprecated(note = "use `payment_request_with_native_pay`")]
    #[instrument(skip_all, fields(platform = %self.platform))]
    pub async fn payment_request_with_android_pay<O>(&self, options: &O) -> Result<Value>
    where
        O: Serialize + ?Sized,
    {
        self.android_pay_request(options, method::PAYMENT_REQUEST_WITH_ANDROID_PAY)
            .await
    }

    #[deprecated(note = "use `complete_native_pay_request`")]
    #[instrument(skip_all, fields(platform = %self.platform))]
    pub async fn complete_apple_pay_request(&self) -> Result<()> {
        self.complete_apple_pay(method::COMPLETE_APPLE_PAY_REQUEST)
            .await
    }

    #[deprecated(note = "use `cancel_native_pay_request`")]
    #[instrument(skip_all, fields(platform = %self.platform))]
    pub async fn cancel_apple_pay_request(&self) -> Result<()> {
        self.cancel_apple_pay(method::CANCEL_APPLE_PAY_REQUEST)
            .await
    }

    #[deprecated(note = "use `open_native_pay_setup`")]
    #[instrument(skip_all, fields(platform = %self.platform))]
    pub async fn open_apple_pay_setup(&self) -> Result<()> {
        self.open_apple_pay(method::OPEN_APPLE_PAY_SETUP).await
    }

    // ---------------------------------------------------------------------
    // Card form and tokenization
    // ---------------------------------------------------------------------

    /// Present the SDK card form. The forwarded options always carry a
    /// complete `theme` of ARGB colors.
    #[instrument(skip_all, fields(platform = %self.platform))]
    pub async fn payment_request_with_card_form<O>(&self, options: &O) -> Result<Value>
    where
        O: Serialize + ?Sized,
    {
        let name = method::PAYMENT_REQUEST_WITH_CARD_FORM;
        self.ensure_initialized(name)?;
        let options = validated(&CardFormOptions::SCHEMA, options, "options", name)?;

        let mut options = match options {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let theme = normalize_theme(options.get("theme"), name).inspect_err(rejected)?;
        options.insert("theme".to_string(), theme);

        forwarding(name);
        Ok(self
            .bridge
            .payment_request_with_card_form(Value::Object(options))
            .await?)
    }

    #[instrument(skip_all, fields(platform = %self.platform))]
    pub async fn create_token_with_card<P>(&self, params: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        let name = method::CREATE_TOKEN_WITH_CARD;
        self.ensure_initialized(name)?;
        let params = validated(&CardParams::SCHEMA, params, "params", name)?;

        forwarding(name);
        Ok(self.bridge.create_token_with_card(params).await?)
    }

    #[instrument(skip_all, fields(platform = %self.platform))]
    pub async fn create_token_with_bank_account<P>(&self, params: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        let name = method::CREATE_TOKEN_WITH_BANK_ACCOUNT;
        self.ensure_initialized(name)?;
        let params = validated(&BankAccountParams::SCHEMA, params, "params", name)?;

        forwarding(name);
        Ok(self.bridge.create_token_with_bank_account(params).await?)
    }

    #[instrument(skip_all, fields(platform = %self.platform))]
    pub async fn create_source_with_params<P>(&self, params: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        let name = method::CREATE_SOURCE_WITH_PARAMS;
        self.ensure_initialized(name)?;
        let params = validated(&SourceParams::SCHEMA, params, "params", name)?;

        forwarding(name);
        Ok(self.bridge.create_source_with_params(params).await?)
    }

    // ---------------------------------------------------------------------
    // Platform branches
    // ---------------------------------------------------------------------

    async fn apple_pay_supported(&self, name: &str) -> Result<bool> {
        forwarding(name);
        Ok(self.bridge.device_supports_apple_pay().await?)
    }

    async fn android_pay_supported(&self, name: &str) -> Result<bool> {
        forwarding(name);
        Ok(self.bridge.device_supports_android_pay().await?)
    }

    async fn can_make_apple_pay<O>(&self, options: &O, name: &str) -> Result<bool>
    where
        O: Serialize + ?Sized,
    {
        let options = validated(&CanMakeApplePayPaymentsOptions::SCHEMA, options, "options", name)?;

        forwarding(name);
        Ok(self.bridge.can_make_apple_pay_payments(options).await?)
    }

    async fn can_make_android_pay(&self, name: &str) -> Result<bool> {
        forwarding(name);
        Ok(self.bridge.can_make_android_pay_payments().await?)
    }

    async fn apple_pay_request<I, O>(&self, items: &I, options: &O, name: &str) -> Result<Value>
    where
        I: Serialize + ?Sized,
        O: Serialize + ?Sized,
    {
        self.ensure_initialized(name)?;

        let items = to_value(items, "items", name)?;
        check_field(&ApplePayItem::LIST, Some(&items), "items", name).inspect_err(rejected)?;
        let options = validated(&ApplePayOptions::SCHEMA, options, "options", name)?;

        forwarding(name);
        Ok(self
            .bridge
            .payment_request_with_apple_pay(items, options)
            .await?)
    }

    async fn android_pay_request<O>(&self, options: &O, name: &str) -> Result<Value>
    where
        O: Serialize + ?Sized,
    {
        self.ensure_initialized(name)?;
        let options = validated(&AndroidPayOptions::SCHEMA, options, "options", name)?;

        forwarding(name);
        Ok(self.bridge.payment_request_with_android_pay(options).await?)
    }

    async fn complete_apple_pay(&self, name: &str) -> Result<()> {
        self.ensure_initialized(name)?;

        forwarding(name);
        Ok(self.bridge.complete_apple_pay_request().await?)
    }

    async fn cancel_apple_pay(&self, name: &str) -> Result<()> {
        self.ensure_initialized(name)?;

        forwarding(name);
        Ok(self.bridge.cancel_apple_pay_request().await?)
    }

    async fn open_apple_pay(&self, name: &str) -> Result<()> {
        self.ensure_initialized(name)?;

        forwarding(name);
        Ok(self.bridge.open_apple_pay_setup().await?)
    }

    // ---------------------------------------------------------------------
    // Preconditions
    // ---------------------------------------------------------------------

    fn ensure_initialized(&self, name: &str) -> Result<()> {
        if self.is_initialized() {
            return Ok(());
        }

        let err = PaymentError::NotInitialized {
            method: name.to_string(),
        };
        rejected(&err);
        Err(err)
    }

    fn native_pay_for(&self, name: &str) -> Result<NativePay> {
        self.native_pay.ok_or_else(|| {
            let err = PaymentError::UnsupportedPlatform {
                method: name.to_string(),
                platform: self.platform.clone(),
            };
            rejected(&err);
            err
        })
    }
}

impl fmt::Debug for PaymentService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentService")
            .field("bridge", &"PaymentBridge { ... }")
            .field("platform", &self.platform)
            .field("native_pay", &self.native_pay)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

/// Serialize `arg` and check it against `schema`.
fn validated<T>(schema: &Schema, arg: &T, arg_name: &str, name: &str) -> Result<Value>
where
    T: Serialize + ?Sized,
{
    let value = to_value(arg, arg_name, name)?;
    schema.check(&value, arg_name, name).inspect_err(rejected)?;
    Ok(value)
}

fn to_value<T>(arg: &T, arg_name: &str, name: &str) -> Result<Value>
where
    T: Serialize + ?Sized,
{
    serde_json::to_value(arg).map_err(|_| {
        let err = PaymentError::SchemaValidation {
            method: name.to_string(),
            field: arg_name.to_string(),
            expected: "a JSON-serializable value".to_string(),
            found: "unserializable value".to_string(),
        };
        rejected(&err);
        err
    })
}

fn forwarding(name: &str) {
    debug!(method = name, "Forwarding to native bridge");
}

fn rejected(err: &PaymentError) {
    warn!(error = %err, "Payment call rejected before reaching the bridge");
}
