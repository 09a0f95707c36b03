//! Fixture template store.
//!
//! Templates carry the hand-authored business-rule surface of each entity
//! type: category catalogs, status workflows, pricing tiers, payment and
//! shipping catalogs, tax rates. They are embedded JSON documents parsed
//! once per process and never mutated. Unknown JSON fields are ignored so
//! templates stay forward compatible; missing required fields fail at load.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Error type for template operations.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// No template is registered for the given entity type.
    #[error("template not found: {0}")]
    NotFound(String),

    /// A registered template document failed to parse.
    #[error("invalid template for '{module}': {source}")]
    Invalid {
        module: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// An inclusive numeric band, used for pricing tiers and randomized settings.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

/// An inclusive integer band.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IntBand {
    pub min: i64,
    pub max: i64,
}

// ============================================================================
// Users
// ============================================================================

/// A user role in the role catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleSpec {
    pub id: String,
    pub name: String,
}

/// Business-rule template for the users module.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersTemplate {
    pub roles: Vec<RoleSpec>,
    pub status_options: Vec<String>,
    pub languages: Vec<String>,
    pub signup_sources: Vec<String>,
}

// ============================================================================
// Products
// ============================================================================

/// A product category with the specification fields generated for it.
#[derive(Debug, Clone, Deserialize)]
pub struct CategorySpec {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specifications: Vec<String>,
}

/// Inventory defaults applied to every generated product.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySettings {
    pub low_stock_threshold: u32,
    pub out_of_stock_threshold: u32,
    pub auto_reorder: bool,
}

/// Word pools used to compose product names.
#[derive(Debug, Clone, Deserialize)]
pub struct NamePools {
    pub adjectives: Vec<String>,
    pub materials: Vec<String>,
    pub nouns: Vec<String>,
}

/// Business-rule template for the products module.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsTemplate {
    pub categories: Vec<CategorySpec>,
    pub status_options: Vec<String>,
    /// Named price bands in dollars, e.g. "budget" or "premium".
    pub pricing_tiers: BTreeMap<String, Band>,
    pub inventory_settings: InventorySettings,
    pub name_pools: NamePools,
    pub tags: Vec<String>,
}

// ============================================================================
// Orders
// ============================================================================

/// One step of the order status workflow.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusStep {
    pub status: String,
    pub description: String,
}

/// A payment method in the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
}

/// A shipping option with its flat cost in dollars.
#[derive(Debug, Clone, Deserialize)]
pub struct ShippingOption {
    pub id: String,
    pub name: String,
    pub cost: f64,
}

/// Tax rates applied to order subtotals.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxRates {
    pub default: f64,
}

/// Bounds on generated line items.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemBounds {
    pub min_per_order: u32,
    pub max_per_order: u32,
    pub max_quantity: u32,
}

/// Business-rule template for the orders module.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersTemplate {
    /// Ordered workflow; generated status history follows this sequence.
    pub status_workflow: Vec<StatusStep>,
    pub payment_methods: Vec<PaymentMethod>,
    pub shipping_options: Vec<ShippingOption>,
    pub tax_rates: TaxRates,
    pub line_items: LineItemBounds,
}

// ============================================================================
// Config
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    pub supported_languages: Vec<String>,
    pub timezones: Vec<String>,
    pub currencies: Vec<String>,
    pub default_page_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSettings {
    pub requests_per_minute: IntBand,
    pub burst_limit: IntBand,
    pub timeout_seconds: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSettings {
    pub smtp_ports: Vec<u16>,
    pub from_address: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    pub password_min_length: IntBand,
    pub session_timeout_seconds: IntBand,
    pub max_login_attempts: IntBand,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceMode {
    /// Probability that a generated config document enables maintenance mode.
    pub enabled_probability: f64,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationPools {
    pub payment_providers: Vec<String>,
    pub email_providers: Vec<String>,
    pub analytics_providers: Vec<String>,
    pub cdn_providers: Vec<String>,
}

/// Business-rule template for the config module.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigTemplate {
    pub feature_flags: BTreeMap<String, bool>,
    pub system_settings: SystemSettings,
    pub api_settings: ApiSettings,
    pub email_settings: EmailSettings,
    pub security_settings: SecuritySettings,
    pub maintenance_mode: MaintenanceMode,
    pub integrations: IntegrationPools,
    pub environments: Vec<String>,
}

// ============================================================================
// Store
// ============================================================================

/// A typed view over one entity type's template.
#[derive(Debug, Clone, Copy)]
pub enum EntityTemplate<'a> {
    Users(&'a UsersTemplate),
    Products(&'a ProductsTemplate),
    Orders(&'a OrdersTemplate),
    Config(&'a ConfigTemplate),
}

/// Read-only store of all registered fixture templates.
///
/// Loading is idempotent and side-effect free; the store performs no
/// network or database access.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    users: UsersTemplate,
    products: ProductsTemplate,
    orders: OrdersTemplate,
    config: ConfigTemplate,
}

impl TemplateStore {
    /// Parse the embedded template documents.
    pub fn builtin() -> Result<Self, TemplateError> {
        Ok(Self {
            users: parse("users", include_str!("../templates/users.json"))?,
            products: parse("products", include_str!("../templates/products.json"))?,
            orders: parse("orders", include_str!("../templates/orders.json"))?,
            config: parse("config", include_str!("../templates/config.json"))?,
        })
    }

    /// Look up the template for an entity type by name.
    pub fn load(&self, module: &str) -> Result<EntityTemplate<'_>, TemplateError> {
        match module {
            "users" => Ok(EntityTemplate::Users(&self.users)),
            "products" => Ok(EntityTemplate::Products(&self.products)),
            "orders" => Ok(EntityTemplate::Orders(&self.orders)),
            "config" => Ok(EntityTemplate::Config(&self.config)),
            other => Err(TemplateError::NotFound(other.to_string())),
        }
    }

    pub fn users(&self) -> &UsersTemplate {
        &self.users
    }

    pub fn products(&self) -> &ProductsTemplate {
        &self.products
    }

    pub fn orders(&self) -> &OrdersTemplate {
        &self.orders
    }

    pub fn config(&self) -> &ConfigTemplate {
        &self.config
    }
}

fn parse<T: serde::de::DeserializeOwned>(
    module: &'static str,
    raw: &str,
) -> Result<T, TemplateError> {
    serde_json::from_str(raw).map_err(|source| TemplateError::Invalid { module, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_templates_parse() {
        let store = TemplateStore::builtin().unwrap();

        assert!(!store.users().roles.is_empty());
        assert!(!store.products().pricing_tiers.is_empty());
        assert!(store.orders().tax_rates.default > 0.0);
        assert!(!store.config().environments.is_empty());
    }

    #[test]
    fn test_load_by_name() {
        let store = TemplateStore::builtin().unwrap();
        assert!(matches!(
            store.load("orders"),
            Ok(EntityTemplate::Orders(_))
        ));
    }

    #[test]
    fn test_load_unknown_module() {
        let store = TemplateStore::builtin().unwrap();
        let err = store.load("invoices").unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(name) if name == "invoices"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        // Forward compatibility: extra fields must not break parsing.
        let raw = r#"{
            "statusWorkflow": [{"status": "pending", "description": "Order placed"}],
            "paymentMethods": [{"id": "card", "name": "Card"}],
            "shippingOptions": [{"id": "std", "name": "Standard", "cost": 5.0}],
            "taxRates": {"default": 0.08, "reduced": 0.05},
            "lineItems": {"minPerOrder": 1, "maxPerOrder": 5, "maxQuantity": 5},
            "futureField": {"nested": true}
        }"#;
        let template: OrdersTemplate = parse("orders", raw).unwrap();
        assert_eq!(template.status_workflow.len(), 1);
    }

    #[test]
    fn test_missing_required_field_fails() {
        let raw = r#"{"paymentMethods": []}"#;
        let err = parse::<OrdersTemplate>("orders", raw).unwrap_err();
        assert!(matches!(err, TemplateError::Invalid { module: "orders", .. }));
    }

    #[test]
    fn test_orders_workflow_starts_pending() {
        // The status history generator assumes the workflow begins with the
        // initial "order placed" step.
        let store = TemplateStore::builtin().unwrap();
        assert_eq!(store.orders().status_workflow[0].status, "pending");
    }
}
