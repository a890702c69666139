//! `mockall` double of the full [`PaymentBridge`] contract.
//!
//! Enabled for this crate's tests and, through the `mock` feature, for the
//! tests of crates that drive a bridge.
//!
//! ```ignore
//! use bridge_traits::mock::MockBridge;
//!
//! let mut bridge = MockBridge::new();
//! bridge.expect_device_supports_apple_pay().returning(|| Ok(true));
//! ```

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use crate::codes::ErrorCodes;
use crate::error::Result;
use crate::payments::{CapabilitiesQuery, PaymentBridge, PaymentRequestLifecycle, Tokenization};

mock! {
    pub Bridge {}

    #[async_trait]
    impl CapabilitiesQuery for Bridge {
        async fn device_supports_apple_pay(&self) -> Result<bool>;
        async fn can_make_apple_pay_payments(&self, options: Value) -> Result<bool>;
        async fn device_supports_android_pay(&self) -> Result<bool>;
        async fn can_make_android_pay_payments(&self) -> Result<bool>;
    }

    #[async_trait]
    impl PaymentRequestLifecycle for Bridge {
        async fn payment_request_with_apple_pay(&self, items: Value, options: Value) -> Result<Value>;
        async fn complete_apple_pay_request(&self) -> Result<()>;
        async fn cancel_apple_pay_request(&self) -> Result<()>;
        async fn open_apple_pay_setup(&self) -> Result<()>;
        async fn payment_request_with_android_pay(&self, options: Value) -> Result<Value>;
    }

    #[async_trait]
    impl Tokenization for Bridge {
        async fn payment_request_with_card_form(&self, options: Value) -> Result<Value>;
        async fn create_token_with_card(&self, params: Value) -> Result<Value>;
        async fn create_token_with_bank_account(&self, params: Value) -> Result<Value>;
        async fn create_source_with_params(&self, params: Value) -> Result<Value>;
    }

    #[async_trait]
    impl PaymentBridge for Bridge {
        async fn init(&self, options: Value) -> Result<Value>;
        fn error_codes(&self) -> ErrorCodes;
    }
}
