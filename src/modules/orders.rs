//! Orders seed module.
//!
//! The only dependent module: each order samples a buyer from the users
//! pool and its line items from the products pool. When a parent pool is
//! empty the foreign key is written as null rather than failing the pass.
//!
//! All pricing math runs in integer cents so the persisted breakdown is
//! exact: `total = subtotal + taxAmount + shippingCost`, with
//! `taxAmount = subtotal * taxRate` rounded to the cent.

use crate::error::SeedError;
use crate::resolver::PoolSet;
use crate::seeder::{Dependency, EntitySeeder};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use seed_core::TemplateStore;
use seed_gateway::FieldMap;
use seed_generator::{datetime, money, pick, scalar, text};
use serde_json::{json, Value};

const DEPENDENCIES: &[Dependency] = &[
    Dependency {
        collection: "users",
        limit: 50,
    },
    Dependency {
        collection: "products",
        limit: 100,
    },
];

pub struct OrdersSeeder;

impl EntitySeeder for OrdersSeeder {
    fn module(&self) -> &'static str {
        "orders"
    }

    fn dependencies(&self) -> &'static [Dependency] {
        DEPENDENCIES
    }

    fn generate(
        &self,
        rng: &mut StdRng,
        templates: &TemplateStore,
        pools: &PoolSet,
        _index: u64,
    ) -> Result<FieldMap, SeedError> {
        let template = templates.orders();

        let order_date = datetime::recent(rng, 30)?;
        let payment = pick::pick(rng, &template.payment_methods)?;
        let shipping = pick::pick(rng, &template.shipping_options)?;

        // Buyer: a real user id from the snapshot, or null when none exist.
        let user_id = pools
            .sample_id(rng, "users")
            .map_or(Value::Null, |id| json!(id.as_str()));

        // Line items reference previously persisted products, never
        // siblings from this pass.
        let bounds = &template.line_items;
        let item_count =
            scalar::int_in_range(rng, bounds.min_per_order as i64, bounds.max_per_order as i64)?;
        let mut line_items = Vec::with_capacity(item_count as usize);
        let mut subtotal_cents = 0i64;
        for _ in 0..item_count {
            let item = line_item(rng, templates, pools, bounds.max_quantity)?;
            subtotal_cents += item.total_cents;
            line_items.push(item.value);
        }

        let tax_rate = template.tax_rates.default;
        let tax_cents = money::tax_cents(subtotal_cents, tax_rate);
        let shipping_cents = money::to_cents(shipping.cost);
        let total_cents = subtotal_cents + tax_cents + shipping_cents;

        // Current status is a random position in the workflow; the history
        // covers every step up to it with increasing timestamps.
        let workflow = &template.status_workflow;
        let status_index = scalar::int_in_range(rng, 0, workflow.len() as i64 - 1)? as usize;
        let status = &workflow[status_index];
        let status_history = history(rng, templates, order_date, status_index)?;

        let doc = json!({
            "orderNumber": scalar::alphanumeric_upper(rng, 8),
            "createdAt": order_date.to_rfc3339(),
            "updatedAt": Utc::now().to_rfc3339(),

            "status": status.status,
            "statusDescription": status.description,
            "statusHistory": status_history,
            "paymentMethod": payment.id,
            "paymentMethodName": payment.name,
            "shippingOption": shipping.id,
            "shippingOptionName": shipping.name,

            "userId": user_id,
            "lineItems": line_items,

            "pricing": {
                "subtotal": money::to_dollars(subtotal_cents),
                "taxRate": tax_rate,
                "taxAmount": money::to_dollars(tax_cents),
                "shippingCost": money::to_dollars(shipping_cents),
                "total": money::to_dollars(total_cents),
            },

            "shipping": {
                "address": {
                    "street": text::street_address(rng),
                    "city": text::city(rng),
                    "state": text::state(rng),
                    "zipCode": text::zip_code(rng),
                    "country": text::country(rng),
                },
                "trackingNumber": scalar::alphanumeric_upper(rng, 12),
                "estimatedDelivery": datetime::future(rng, 7)?.to_rfc3339(),
            },

            "notes": optional(rng, |rng| Ok(json!(text::sentence(rng))))?,
            "discountCode": optional(rng, |rng| Ok(json!(scalar::alphanumeric_upper(rng, 6))))?,
            // Advisory only; the pricing breakdown does not subtract it.
            "discountAmount": money::to_dollars(money::money_in_range(rng, 0, 5_000)?),
        });

        Ok(super::into_fields(doc))
    }
}

struct LineItem {
    value: Value,
    total_cents: i64,
}

/// Build one line item from a sampled product, or from generated values
/// when the products pool is empty.
fn line_item(
    rng: &mut StdRng,
    templates: &TemplateStore,
    pools: &PoolSet,
    max_quantity: u32,
) -> Result<LineItem, SeedError> {
    let quantity = scalar::int_in_range(rng, 1, max_quantity as i64)?;

    let (product_id, product_name, price_cents) = match pools.sample(rng, "products") {
        Some(product) => {
            let price_cents = product
                .f64_field("price")
                .map(money::to_cents)
                .unwrap_or(money::money_in_range(rng, 1_000, 50_000)?);
            let name = product
                .str_field("name")
                .map(str::to_string)
                .unwrap_or_else(|| fallback_product_name(rng, templates));
            (json!(product.id.as_str()), name, price_cents)
        }
        None => (
            Value::Null,
            fallback_product_name(rng, templates),
            money::money_in_range(rng, 1_000, 50_000)?,
        ),
    };

    let total_cents = price_cents * quantity;

    Ok(LineItem {
        value: json!({
            "productId": product_id,
            "productName": product_name,
            "quantity": quantity,
            "price": money::to_dollars(price_cents),
            "lineTotal": money::to_dollars(total_cents),
        }),
        total_cents,
    })
}

fn fallback_product_name(rng: &mut StdRng, templates: &TemplateStore) -> String {
    let pools = &templates.products().name_pools;
    match (
        pick::pick(rng, &pools.adjectives),
        pick::pick(rng, &pools.nouns),
    ) {
        (Ok(adjective), Ok(noun)) => format!("{adjective} {noun}"),
        _ => "Sample Product".to_string(),
    }
}

/// Status history entries for workflow steps `0..=through`, with
/// monotonically increasing timestamps starting at the order date.
fn history(
    rng: &mut StdRng,
    templates: &TemplateStore,
    order_date: DateTime<Utc>,
    through: usize,
) -> Result<Vec<Value>, SeedError> {
    let workflow = &templates.orders().status_workflow;
    let mut at = order_date;
    let mut entries = Vec::with_capacity(through + 1);

    for step in &workflow[..=through] {
        entries.push(json!({
            "status": step.status,
            "timestamp": at.to_rfc3339(),
            "note": step.description,
        }));
        at += Duration::hours(scalar::int_in_range(rng, 1, 48)?);
    }

    Ok(entries)
}

fn optional(
    rng: &mut StdRng,
    build: impl FnOnce(&mut StdRng) -> Result<Value, SeedError>,
) -> Result<Value, SeedError> {
    if scalar::bool_with_probability(rng, 0.5)? {
        build(rng)
    } else {
        Ok(Value::Null)
    }
}
