//! Users seed module.
//!
//! Generates account documents: identity from the value generator,
//! role/status/language catalogs from the users template.

use crate::error::SeedError;
use crate::resolver::PoolSet;
use crate::seeder::EntitySeeder;
use rand::rngs::StdRng;
use seed_core::TemplateStore;
use seed_gateway::FieldMap;
use seed_generator::{datetime, pick, scalar, text};
use serde_json::json;

pub struct UsersSeeder;

impl EntitySeeder for UsersSeeder {
    fn module(&self) -> &'static str {
        "users"
    }

    fn generate(
        &self,
        rng: &mut StdRng,
        templates: &TemplateStore,
        _pools: &PoolSet,
        _index: u64,
    ) -> Result<FieldMap, SeedError> {
        let template = templates.users();

        let role = pick::pick(rng, &template.roles)?;
        let status = pick::pick(rng, &template.status_options)?;
        let language = pick::pick(rng, &template.languages)?;
        let signup_source = pick::pick(rng, &template.signup_sources)?;

        let display_name = text::full_name(rng);
        let email = text::email_for(rng, &display_name);

        let created_at = datetime::recent(rng, 365)?;
        // Last login falls between signup and now
        let last_login_at = datetime::datetime_in_range(rng, created_at, chrono::Utc::now())?;

        let doc = json!({
            "displayName": display_name,
            "email": email,
            "emailVerified": scalar::bool_with_probability(rng, 0.8)?,

            "role": role.id,
            "roleName": role.name,
            "status": status,
            "signupSource": signup_source,

            "address": {
                "street": text::street_address(rng),
                "city": text::city(rng),
                "state": text::state(rng),
                "zipCode": text::zip_code(rng),
                "country": text::country(rng),
            },

            "preferences": {
                "language": language,
                "marketingOptIn": scalar::bool_with_probability(rng, 0.5)?,
            },

            "createdAt": created_at.to_rfc3339(),
            "lastLoginAt": last_login_at.to_rfc3339(),
        });

        Ok(super::into_fields(doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_generator::rng::seed_rng;

    #[test]
    fn test_generated_user_shape() {
        let templates = TemplateStore::builtin().unwrap();
        let mut rng = seed_rng(Some(42));
        let pools = PoolSet::default();

        let fields = UsersSeeder
            .generate(&mut rng, &templates, &pools, 0)
            .unwrap();

        assert!(fields["email"].as_str().unwrap().contains('@'));
        assert!(fields["address"]["city"].is_string());

        let role = fields["role"].as_str().unwrap();
        assert!(templates.users().roles.iter().any(|r| r.id == role));

        let status = fields["status"].as_str().unwrap();
        assert!(templates.users().status_options.iter().any(|s| s == status));
    }

    #[test]
    fn test_last_login_not_before_signup() {
        let templates = TemplateStore::builtin().unwrap();
        let mut rng = seed_rng(Some(7));
        let pools = PoolSet::default();

        for index in 0..20 {
            let fields = UsersSeeder
                .generate(&mut rng, &templates, &pools, index)
                .unwrap();
            let created = fields["createdAt"].as_str().unwrap();
            let last_login = fields["lastLoginAt"].as_str().unwrap();
            assert!(last_login >= created, "{last_login} < {created}");
        }
    }
}
