//! Products seed module.
//!
//! Prices come from the template's named pricing tiers, inventory defaults
//! and category-specific specification fields from the template, and the
//! rest from the value generator.

use crate::error::SeedError;
use crate::resolver::PoolSet;
use crate::seeder::EntitySeeder;
use rand::rngs::StdRng;
use seed_core::{CategorySpec, TemplateStore};
use seed_gateway::FieldMap;
use seed_generator::{money, pick, scalar, text};
use serde_json::{json, Value};

pub struct ProductsSeeder;

impl EntitySeeder for ProductsSeeder {
    fn module(&self) -> &'static str {
        "products"
    }

    fn generate(
        &self,
        rng: &mut StdRng,
        templates: &TemplateStore,
        _pools: &PoolSet,
        _index: u64,
    ) -> Result<FieldMap, SeedError> {
        let template = templates.products();

        let category = pick::pick(rng, &template.categories)?;
        let status = pick::pick(rng, &template.status_options)?;

        let tier_names: Vec<&String> = template.pricing_tiers.keys().collect();
        let tier = *pick::pick(rng, &tier_names)?;
        let band = &template.pricing_tiers[tier];
        let price_cents =
            money::money_in_range(rng, money::to_cents(band.min), money::to_cents(band.max))?;

        let pools = &template.name_pools;
        let name = format!(
            "{} {} {}",
            pick::pick(rng, &pools.adjectives)?,
            pick::pick(rng, &pools.materials)?,
            pick::pick(rng, &pools.nouns)?
        );

        let sku = scalar::alphanumeric_upper(rng, 8);
        let settings = &template.inventory_settings;

        let doc = json!({
            "name": name,
            "description": text::sentence(rng),
            "sku": sku,
            "price": money::to_dollars(price_cents),
            "imageUrl": format!("https://images.demo-project.test/{}.jpg", sku.to_lowercase()),

            "category": category.id,
            "categoryName": category.name,
            "status": status,
            "pricingTier": tier,

            "inventory": {
                "quantity": scalar::int_in_range(rng, 0, 1000)?,
                "lowStockThreshold": settings.low_stock_threshold,
                "outOfStockThreshold": settings.out_of_stock_threshold,
                "autoReorder": settings.auto_reorder,
            },

            "specifications": specifications(rng, category)?,

            "brand": text::company_name(rng),
            "weight": scalar::float_in_range(rng, 0.1, 50.0, 2)?,
            "dimensions": {
                "length": scalar::float_in_range(rng, 1.0, 100.0, 1)?,
                "width": scalar::float_in_range(rng, 1.0, 100.0, 1)?,
                "height": scalar::float_in_range(rng, 1.0, 100.0, 1)?,
            },
            "tags": pick::subset(rng, &template.tags, 1, 3)?,
            "rating": scalar::float_in_range(rng, 1.0, 5.0, 1)?,
            "reviewCount": scalar::int_in_range(rng, 0, 500)?,
        });

        Ok(super::into_fields(doc))
    }
}

/// Build the category-specific specification block.
fn specifications(rng: &mut StdRng, category: &CategorySpec) -> Result<Value, SeedError> {
    let mut specs = serde_json::Map::new();
    for name in &category.specifications {
        specs.insert(camel_case(name), specification_value(rng, name)?);
    }
    Ok(Value::Object(specs))
}

fn specification_value(rng: &mut StdRng, spec: &str) -> Result<Value, SeedError> {
    let value = match spec {
        "brand" => json!(text::company_name(rng)),
        "model" => json!(scalar::alphanumeric_upper(rng, 6)),
        "warranty" => json!(pick::pick(rng, &["1 year", "2 years", "3 years", "5 years"])?),
        "power_consumption" => json!(format!("{}W", scalar::int_in_range(rng, 10, 500)?)),
        "author" => json!(text::full_name(rng)),
        "publisher" => json!(text::company_name(rng)),
        "isbn" => json!(scalar::digits(rng, 13)),
        "pages" => json!(scalar::int_in_range(rng, 50, 1000)?),
        "language" => json!(pick::pick(rng, &["English", "Spanish", "French", "German"])?),
        "size" => json!(pick::pick(rng, &["XS", "S", "M", "L", "XL", "XXL"])?),
        "color" => json!(pick::pick(rng, &["Black", "White", "Red", "Blue", "Green", "Gray"])?),
        "material" => json!(pick::pick(
            rng,
            &["Cotton", "Polyester", "Wool", "Leather", "Metal", "Plastic"]
        )?),
        "care_instructions" => json!(pick::pick(
            rng,
            &["Machine wash", "Hand wash", "Dry clean only", "Air dry"]
        )?),
        "dimensions" => json!(format!(
            "{}\" x {}\"",
            scalar::int_in_range(rng, 1, 100)?,
            scalar::int_in_range(rng, 1, 100)?
        )),
        "assembly_required" => json!(scalar::bool_with_probability(rng, 0.5)?),
        // Template may introduce specification fields this module does not
        // know yet; fill them with a plausible word.
        _ => json!(text::word(rng)),
    };
    Ok(value)
}

/// "power_consumption" -> "powerConsumption"
fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;
    for c in snake.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_generator::rng::seed_rng;

    #[test]
    fn test_price_stays_within_tier_band() {
        let templates = TemplateStore::builtin().unwrap();
        let mut rng = seed_rng(Some(42));
        let pools = PoolSet::default();

        for index in 0..50 {
            let fields = ProductsSeeder
                .generate(&mut rng, &templates, &pools, index)
                .unwrap();

            let tier = fields["pricingTier"].as_str().unwrap();
            let band = &templates.products().pricing_tiers[tier];
            let price = fields["price"].as_f64().unwrap();
            assert!(
                price >= band.min && price <= band.max,
                "price {price} outside tier '{tier}'"
            );
        }
    }

    #[test]
    fn test_specifications_follow_category() {
        let templates = TemplateStore::builtin().unwrap();
        let mut rng = seed_rng(Some(42));
        let pools = PoolSet::default();

        let fields = ProductsSeeder
            .generate(&mut rng, &templates, &pools, 0)
            .unwrap();

        let category_id = fields["category"].as_str().unwrap();
        let category = templates
            .products()
            .categories
            .iter()
            .find(|c| c.id == category_id)
            .unwrap();

        let specs = fields["specifications"].as_object().unwrap();
        assert_eq!(specs.len(), category.specifications.len());
        for name in &category.specifications {
            assert!(specs.contains_key(&camel_case(name)), "missing {name}");
        }
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("power_consumption"), "powerConsumption");
        assert_eq!(camel_case("isbn"), "isbn");
        assert_eq!(camel_case("care_instructions"), "careInstructions");
    }
}
