//! Typed options and params for every facade method.
//!
//! Each struct serializes to exactly the keys the native module reads and
//! carries the [`Schema`] the facade validates that argument against. Callers
//! may pass these structs or any other `Serialize` value (typically
//! `serde_json::json!`); validation runs on the serialized form either way.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::theme::Theme;

pub const APPLE_PAY_NETWORKS: &[&str] = &["american_express", "discover", "master_card", "visa"];
pub const APPLE_PAY_ADDRESS_FIELDS: &[&str] = &["all", "name", "email", "phone", "postal_address"];
pub const APPLE_PAY_SHIPPING_TYPES: &[&str] =
    &["shipping", "delivery", "store_pickup", "service_pickup"];
pub const APPLE_PAY_ITEM_TYPES: &[&str] = &["final", "pending"];
pub const ANDROID_PAY_MODES: &[&str] = &["test", "production"];
pub const CARD_FORM_BILLING_ADDRESS_FIELDS: &[&str] = &["full", "zip"];
pub const ACCOUNT_HOLDER_TYPES: &[&str] = &["company", "individual"];
pub const SOURCE_TYPES: &[&str] = &[
    "bancontact",
    "bitcoin",
    "giropay",
    "ideal",
    "sepaDebit",
    "sofort",
    "threeDSecure",
    "alipay",
];

// ---------------------------------------------------------------------------
// setOptions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AndroidPayMode {
    Test,
    Production,
}

/// SDK credentials passed to `set_options`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publishable_key: Option<String>,
    /// Apple Pay merchant identifier (`merchant.com.example`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_pay_mode: Option<AndroidPayMode>,
}

impl SetOptions {
    pub const SCHEMA: Schema = Schema::new(&[
        FieldSpec::optional("publishableKey", FieldKind::String),
        FieldSpec::optional("merchantId", FieldKind::String),
        FieldSpec::optional("androidPayMode", FieldKind::OneOf(ANDROID_PAY_MODES)),
    ]);

    pub fn new(publishable_key: impl Into<String>) -> Self {
        Self {
            publishable_key: Some(publishable_key.into()),
            ..Self::default()
        }
    }

    pub fn with_merchant_id(mut self, merchant_id: impl Into<String>) -> Self {
        self.merchant_id = Some(merchant_id.into());
        self
    }

    pub fn with_android_pay_mode(mut self, mode: AndroidPayMode) -> Self {
        self.android_pay_mode = Some(mode);
        self
    }
}

impl fmt::Debug for SetOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetOptions")
            .field(
                "publishable_key",
                &self.publishable_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("merchant_id", &self.merchant_id)
            .field("android_pay_mode", &self.android_pay_mode)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Apple Pay
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplePayNetwork {
    AmericanExpress,
    Discover,
    MasterCard,
    Visa,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanMakeApplePayPaymentsOptions {
    /// Card networks the merchant accepts; the wallet must hold one of them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networks: Option<Vec<ApplePayNetwork>>,
}

impl CanMakeApplePayPaymentsOptions {
    pub const SCHEMA: Schema = Schema::new(&[FieldSpec::optional(
        "networks",
        FieldKind::ArrayOf(&FieldKind::OneOf(APPLE_PAY_NETWORKS)),
    )]);

    pub fn networks(networks: impl IntoIterator<Item = ApplePayNetwork>) -> Self {
        Self {
            networks: Some(networks.into_iter().collect()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplePayItemType {
    Final,
    Pending,
}

/// One summary line on the Apple Pay sheet. The last item is the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplePayItem {
    pub label: String,
    /// Decimal amount as a string (`"10.00"`), as PassKit expects.
    pub amount: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ApplePayItemType>,
}

impl ApplePayItem {
    pub const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("label", FieldKind::String),
        FieldSpec::required("amount", FieldKind::String),
        FieldSpec::optional("type", FieldKind::OneOf(APPLE_PAY_ITEM_TYPES)),
    ];

    /// The `items` argument of an Apple Pay request.
    pub const LIST: FieldSpec =
        FieldSpec::required("items", FieldKind::ArrayOf(&FieldKind::Shape(Self::FIELDS)));

    pub fn new(label: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            amount: amount.into(),
            item_type: None,
        }
    }

    pub fn pending(mut self) -> Self {
        self.item_type = Some(ApplePayItemType::Pending);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplePayAddressField {
    All,
    Name,
    Email,
    Phone,
    PostalAddress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplePayShippingType {
    Shipping,
    Delivery,
    StorePickup,
    ServicePickup,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingMethod {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub amount: String,
}

impl ShippingMethod {
    pub const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("id", FieldKind::String),
        FieldSpec::required("label", FieldKind::String),
        FieldSpec::optional("detail", FieldKind::String),
        FieldSpec::required("amount", FieldKind::String),
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_billing_address_fields: Option<Vec<ApplePayAddressField>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_shipping_address_fields: Option<Vec<ApplePayAddressField>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_methods: Option<Vec<ShippingMethod>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_type: Option<ApplePayShippingType>,
}

impl ApplePayOptions {
    pub const SCHEMA: Schema = Schema::new(&[
        FieldSpec::optional("currencyCode", FieldKind::String),
        FieldSpec::optional("countryCode", FieldKind::String),
        FieldSpec::optional(
            "requiredBillingAddressFields",
            FieldKind::ArrayOf(&FieldKind::OneOf(APPLE_PAY_ADDRESS_FIELDS)),
        ),
        FieldSpec::optional(
            "requiredShippingAddressFields",
            FieldKind::ArrayOf(&FieldKind::OneOf(APPLE_PAY_ADDRESS_FIELDS)),
        ),
        FieldSpec::optional(
            "shippingMethods",
            FieldKind::ArrayOf(&FieldKind::Shape(ShippingMethod::FIELDS)),
        ),
        FieldSpec::optional("shippingType", FieldKind::OneOf(APPLE_PAY_SHIPPING_TYPES)),
    ]);
}

// ---------------------------------------------------------------------------
// Android Pay
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidPayLineItem {
    pub currency_code: String,
    pub description: String,
    pub total_price: String,
    pub unit_price: String,
    pub quantity: String,
}

impl AndroidPayLineItem {
    pub const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("currency_code", FieldKind::String),
        FieldSpec::required("description", FieldKind::String),
        FieldSpec::required("total_price", FieldKind::String),
        FieldSpec::required("unit_price", FieldKind::String),
        FieldSpec::required("quantity", FieldKind::String),
    ];
}

/// Options for an Android Pay request. Keys are snake_case on this platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidPayOptions {
    pub total_price: String,
    pub currency_code: String,
    pub line_items: Vec<AndroidPayLineItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_required: Option<bool>,
}

impl AndroidPayOptions {
    pub const SCHEMA: Schema = Schema::new(&[
        FieldSpec::required("total_price", FieldKind::String),
        FieldSpec::required("currency_code", FieldKind::String),
        FieldSpec::required(
            "line_items",
            FieldKind::ArrayOf(&FieldKind::Shape(AndroidPayLineItem::FIELDS)),
        ),
        FieldSpec::optional("shipping_address_required", FieldKind::Bool),
        FieldSpec::optional("billing_address_required", FieldKind::Bool),
    ]);
}

// ---------------------------------------------------------------------------
// Card form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingAddressFields {
    Full,
    Zip,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl BillingAddress {
    pub const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::optional("name", FieldKind::String),
        FieldSpec::optional("line1", FieldKind::String),
        FieldSpec::optional("line2", FieldKind::String),
        FieldSpec::optional("city", FieldKind::String),
        FieldSpec::optional("state", FieldKind::String),
        FieldSpec::optional("postalCode", FieldKind::String),
        FieldSpec::optional("country", FieldKind::String),
        FieldSpec::optional("phone", FieldKind::String),
        FieldSpec::optional("email", FieldKind::String),
    ];
}

/// Values pre-filled into the card form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefilledInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<BillingAddress>,
}

impl PrefilledInformation {
    pub const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::optional("email", FieldKind::String),
        FieldSpec::optional("phone", FieldKind::String),
        FieldSpec::optional("billingAddress", FieldKind::Shape(BillingAddress::FIELDS)),
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardFormOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_billing_address_fields: Option<BillingAddressFields>,
    /// Currency of the connected account, for debit-card payouts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_account_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_autofill_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefilled_information: Option<PrefilledInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl CardFormOptions {
    pub const SCHEMA: Schema = Schema::new(&[
        FieldSpec::optional(
            "requiredBillingAddressFields",
            FieldKind::OneOf(CARD_FORM_BILLING_ADDRESS_FIELDS),
        ),
        FieldSpec::optional("managedAccountCurrency", FieldKind::String),
        FieldSpec::optional("smsAutofillDisabled", FieldKind::Bool),
        FieldSpec::optional(
            "prefilledInformation",
            FieldKind::Shape(PrefilledInformation::FIELDS),
        ),
        FieldSpec::optional("theme", FieldKind::Shape(Theme::FIELDS)),
    ]);
}

// ---------------------------------------------------------------------------
// Tokens and sources
// ---------------------------------------------------------------------------

/// Raw card details for `create_token_with_card`.
///
/// `Debug` masks the number and hides the CVC.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardParams {
    pub number: String,
    pub exp_month: u32,
    pub exp_year: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    // Android only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding: Option<String>,
}

impl CardParams {
    pub const SCHEMA: Schema = Schema::new(&[
        FieldSpec::required("number", FieldKind::String),
        FieldSpec::required("expMonth", FieldKind::Number),
        FieldSpec::required("expYear", FieldKind::Number),
        FieldSpec::optional("cvc", FieldKind::String),
        FieldSpec::optional("name", FieldKind::String),
        FieldSpec::optional("addressLine1", FieldKind::String),
        FieldSpec::optional("addressLine2", FieldKind::String),
        FieldSpec::optional("addressCity", FieldKind::String),
        FieldSpec::optional("addressState", FieldKind::String),
        FieldSpec::optional("addressZip", FieldKind::String),
        FieldSpec::optional("addressCountry", FieldKind::String),
        FieldSpec::optional("country", FieldKind::String),
        FieldSpec::optional("currency", FieldKind::String),
        FieldSpec::optional("brand", FieldKind::String),
        FieldSpec::optional("last4", FieldKind::String),
        FieldSpec::optional("fingerprint", FieldKind::String),
        FieldSpec::optional("funding", FieldKind::String),
    ]);

    pub fn new(number: impl Into<String>, exp_month: u32, exp_year: u32) -> Self {
        Self {
            number: number.into(),
            exp_month,
            exp_year,
            ..Self::default()
        }
    }

    pub fn with_cvc(mut self, cvc: impl Into<String>) -> Self {
        self.cvc = Some(cvc.into());
        self
    }
}

impl fmt::Debug for CardParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardParams")
            .field(
                "number",
                &core_runtime::logging::mask_card_number(&self.number),
            )
            .field("exp_month", &self.exp_month)
            .field("exp_year", &self.exp_year)
            .field("cvc", &self.cvc.as_ref().map(|_| "[REDACTED]"))
            .field("name", &self.name)
            .field("address_country", &self.address_country)
            .field("currency", &self.currency)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountHolderType {
    Company,
    Individual,
}

/// Bank account details for `create_token_with_bank_account`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountParams {
    pub account_number: String,
    pub country_code: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_type: Option<AccountHolderType>,
}

impl BankAccountParams {
    pub const SCHEMA: Schema = Schema::new(&[
        FieldSpec::required("accountNumber", FieldKind::String),
        FieldSpec::required("countryCode", FieldKind::String),
        FieldSpec::required("currency", FieldKind::String),
        FieldSpec::optional("routingNumber", FieldKind::String),
        FieldSpec::optional("accountHolderName", FieldKind::String),
        FieldSpec::optional("accountHolderType", FieldKind::OneOf(ACCOUNT_HOLDER_TYPES)),
    ]);
}

impl fmt::Debug for BankAccountParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BankAccountParams")
            .field(
                "account_number",
                &core_runtime::logging::mask_card_number(&self.account_number),
            )
            .field("country_code", &self.country_code)
            .field("currency", &self.currency)
            .field("routing_number", &self.routing_number.as_ref().map(|_| "[REDACTED]"))
            .field("account_holder_name", &self.account_holder_name)
            .field("account_holder_type", &self.account_holder_type)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceType {
    Bancontact,
    Bitcoin,
    Giropay,
    Ideal,
    SepaDebit,
    Sofort,
    ThreeDSecure,
    Alipay,
}

/// Params for `create_source_with_params`. Which optional fields are needed
/// depends on `source_type` (e.g. `iban` for SEPA debit, `card` for 3DS).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceParams {
    #[serde(rename = "type")]
    pub source_type: SourceType,
    /// Amount in the smallest currency unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "returnURL", skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Card source id, for `threeDSecure`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
}

impl SourceParams {
    pub const SCHEMA: Schema = Schema::new(&[
        FieldSpec::required("type", FieldKind::OneOf(SOURCE_TYPES)),
        FieldSpec::optional("amount", FieldKind::Number),
        FieldSpec::optional("name", FieldKind::String),
        FieldSpec::optional("returnURL", FieldKind::String),
        FieldSpec::optional("statementDescriptor", FieldKind::String),
        FieldSpec::optional("currency", FieldKind::String),
        FieldSpec::optional("email", FieldKind::String),
        FieldSpec::optional("bank", FieldKind::String),
        FieldSpec::optional("iban", FieldKind::String),
        FieldSpec::optional("addressLine1", FieldKind::String),
        FieldSpec::optional("city", FieldKind::String),
        FieldSpec::optional("postalCode", FieldKind::String),
        FieldSpec::optional("country", FieldKind::String),
        FieldSpec::optional("card", FieldKind::String),
    ]);

    pub fn new(source_type: SourceType) -> Self {
        Self {
            source_type,
            amount: None,
            name: None,
            return_url: None,
            statement_descriptor: None,
            currency: None,
            email: None,
            bank: None,
            iban: None,
            address_line1: None,
            city: None,
            postal_code: None,
            country: None,
            card: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use serde_json::{json, Value};

    fn check(schema: &Schema, value: &impl Serialize) -> bool {
        let value = serde_json::to_value(value).unwrap();
        schema.check(&value, "options", "Test.typed").is_ok()
    }

    #[test]
    fn test_typed_structs_satisfy_their_schemas() {
        assert!(check(
            &SetOptions::SCHEMA,
            &SetOptions::new("pk_test_123")
                .with_merchant_id("merchant.com.example")
                .with_android_pay_mode(AndroidPayMode::Test)
        ));

        assert!(check(
            &CanMakeApplePayPaymentsOptions::SCHEMA,
            &CanMakeApplePayPaymentsOptions::networks([
                ApplePayNetwork::AmericanExpress,
                ApplePayNetwork::MasterCard,
            ])
        ));

        assert!(check(
            &ApplePayOptions::SCHEMA,
            &ApplePayOptions {
                currency_code: Some("USD".into()),
                required_billing_address_fields: Some(vec![ApplePayAddressField::PostalAddress]),
                shipping_methods: Some(vec![ShippingMethod {
                    id: "fedex".into(),
                    label: "FedEx".into(),
                    detail: None,
                    amount: "10.00".into(),
                }]),
                shipping_type: Some(ApplePayShippingType::StorePickup),
                ..ApplePayOptions::default()
            }
        ));

        assert!(check(
            &AndroidPayOptions::SCHEMA,
            &AndroidPayOptions {
                total_price: "10.00".into(),
                currency_code: "USD".into(),
                line_items: vec![AndroidPayLineItem {
                    currency_code: "USD".into(),
                    description: "Whisky".into(),
                    total_price: "10.00".into(),
                    unit_price: "10.00".into(),
                    quantity: "1".into(),
                }],
                shipping_address_required: Some(true),
                billing_address_required: None,
            }
        ));

        assert!(check(
            &CardFormOptions::SCHEMA,
            &CardFormOptions {
                required_billing_address_fields: Some(BillingAddressFields::Zip),
                prefilled_information: Some(PrefilledInformation {
                    email: Some("jenny@example.com".into()),
                    billing_address: Some(BillingAddress {
                        postal_code: Some("94107".into()),
                        ..BillingAddress::default()
                    }),
                    ..PrefilledInformation::default()
                }),
                theme: Some(Theme {
                    accent_color: Some("#ff0000".into()),
                    ..Theme::default()
                }),
                ..CardFormOptions::default()
            }
        ));

        assert!(check(
            &CardParams::SCHEMA,
            &CardParams::new("4242424242424242", 12, 2030).with_cvc("123")
        ));

        assert!(check(
            &BankAccountParams::SCHEMA,
            &BankAccountParams {
                account_number: "000123456789".into(),
                country_code: "US".into(),
                currency: "usd".into(),
                routing_number: Some("110000000".into()),
                account_holder_name: None,
                account_holder_type: Some(AccountHolderType::Individual),
            }
        ));

        let mut source = SourceParams::new(SourceType::ThreeDSecure);
        source.amount = Some(1099);
        source.card = Some("src_123".into());
        source.return_url = Some("example://stripe-redirect".into());
        assert!(check(&SourceParams::SCHEMA, &source));
    }

    #[test]
    fn test_wire_key_names() {
        let value = serde_json::to_value(CardParams::new("4242424242424242", 1, 2030)).unwrap();
        assert_eq!(value["expMonth"], 1);
        assert_eq!(value["expYear"], 2030);
        assert!(value.get("cvc").is_none());

        let mut source = SourceParams::new(SourceType::SepaDebit);
        source.return_url = Some("app://back".into());
        let value = serde_json::to_value(&source).unwrap();
        assert_eq!(value["type"], "sepaDebit");
        assert_eq!(value["returnURL"], "app://back");

        let item = serde_json::to_value(ApplePayItem::new("Total", "9.99").pending()).unwrap();
        assert_eq!(item, json!({ "label": "Total", "amount": "9.99", "type": "pending" }));
    }

    #[test]
    fn test_enum_wire_values_match_declared_enumerations() {
        let networks = serde_json::to_value([
            ApplePayNetwork::AmericanExpress,
            ApplePayNetwork::Discover,
            ApplePayNetwork::MasterCard,
            ApplePayNetwork::Visa,
        ])
        .unwrap();
        let expected: Vec<Value> = APPLE_PAY_NETWORKS.iter().map(|n| json!(n)).collect();
        assert_eq!(networks, Value::Array(expected));

        let types = serde_json::to_value([
            SourceType::Bancontact,
            SourceType::Bitcoin,
            SourceType::Giropay,
            SourceType::Ideal,
            SourceType::SepaDebit,
            SourceType::Sofort,
            SourceType::ThreeDSecure,
            SourceType::Alipay,
        ])
        .unwrap();
        let expected: Vec<Value> = SOURCE_TYPES.iter().map(|t| json!(t)).collect();
        assert_eq!(types, Value::Array(expected));
    }

    #[test]
    fn test_debug_hides_card_data() {
        let card = CardParams::new("4242424242424242", 12, 2030).with_cvc("987");
        let rendered = format!("{:?}", card);

        assert!(rendered.contains("**** 4242"));
        assert!(!rendered.contains("4242424242424242"));
        assert!(!rendered.contains("987"));

        let options = SetOptions::new("pk_live_secret");
        assert!(!format!("{:?}", options).contains("pk_live_secret"));
    }

    #[test]
    fn test_apple_pay_items_list() {
        let items = serde_json::to_value(vec![
            ApplePayItem::new("Subtotal", "9.00"),
            ApplePayItem::new("Total", "9.99"),
        ])
        .unwrap();

        assert!(crate::schema::check_field(&ApplePayItem::LIST, Some(&items), "items", "Test").is_ok());
    }
}
