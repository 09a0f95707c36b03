//! Built-in entity seeders, one per destination collection.

pub mod config;
pub mod orders;
pub mod products;
pub mod users;

pub use config::ConfigSeeder;
pub use orders::OrdersSeeder;
pub use products::ProductsSeeder;
pub use users::UsersSeeder;

use seed_gateway::FieldMap;

/// Unwrap a `json!` object literal into a field map.
pub(crate) fn into_fields(value: serde_json::Value) -> FieldMap {
    match value {
        serde_json::Value::Object(map) => map,
        other => unreachable!("seeders always build JSON objects, got {other:?}"),
    }
}
