//! Config seed module.
//!
//! Application configuration documents are mostly template data with
//! light randomization, and the module default is a single document.

use crate::error::SeedError;
use crate::resolver::PoolSet;
use crate::seeder::EntitySeeder;
use chrono::Utc;
use rand::rngs::StdRng;
use seed_core::TemplateStore;
use seed_gateway::FieldMap;
use seed_generator::{pick, scalar, text};
use serde_json::json;

pub struct ConfigSeeder;

impl EntitySeeder for ConfigSeeder {
    fn module(&self) -> &'static str {
        "config"
    }

    fn default_count(&self) -> u64 {
        1
    }

    fn generate(
        &self,
        rng: &mut StdRng,
        templates: &TemplateStore,
        _pools: &PoolSet,
        _index: u64,
    ) -> Result<FieldMap, SeedError> {
        let template = templates.config();

        let mut feature_flags = template.feature_flags.clone();
        // Demo-only toggles vary run to run
        feature_flags.insert("enableAnalytics".to_string(), scalar::bool_with_probability(rng, 0.5)?);
        feature_flags.insert("enableBetaFeatures".to_string(), scalar::bool_with_probability(rng, 0.5)?);

        let system = &template.system_settings;
        let api = &template.api_settings;
        let email = &template.email_settings;
        let security = &template.security_settings;
        let maintenance = &template.maintenance_mode;
        let integrations = &template.integrations;

        let doc = json!({
            "featureFlags": feature_flags,

            "systemSettings": {
                "defaultLanguage": pick::pick(rng, &system.supported_languages)?,
                "supportedLanguages": system.supported_languages,
                "timezone": pick::pick(rng, &system.timezones)?,
                "currency": pick::pick(rng, &system.currencies)?,
                "defaultPageSize": system.default_page_size,
            },

            "apiSettings": {
                "rateLimit": {
                    "requestsPerMinute": scalar::int_in_range(
                        rng,
                        api.requests_per_minute.min,
                        api.requests_per_minute.max,
                    )?,
                    "burstLimit": scalar::int_in_range(rng, api.burst_limit.min, api.burst_limit.max)?,
                },
                "timeoutSeconds": api.timeout_seconds,
            },

            "emailSettings": {
                "fromAddress": email.from_address,
                "smtpPort": pick::pick(rng, &email.smtp_ports)?,
                "smtpSecure": scalar::bool_with_probability(rng, 0.5)?,
            },

            "securitySettings": {
                "passwordMinLength": scalar::int_in_range(
                    rng,
                    security.password_min_length.min,
                    security.password_min_length.max,
                )?,
                "sessionTimeout": scalar::int_in_range(
                    rng,
                    security.session_timeout_seconds.min,
                    security.session_timeout_seconds.max,
                )?,
                "maxLoginAttempts": scalar::int_in_range(
                    rng,
                    security.max_login_attempts.min,
                    security.max_login_attempts.max,
                )?,
            },

            "maintenanceMode": {
                "enabled": scalar::bool_with_probability(rng, maintenance.enabled_probability)?,
                "message": maintenance.message,
            },

            "integrations": {
                "paymentProvider": pick::pick(rng, &integrations.payment_providers)?,
                "emailProvider": pick::pick(rng, &integrations.email_providers)?,
                "analyticsProvider": pick::pick(rng, &integrations.analytics_providers)?,
                "cdnProvider": pick::pick(rng, &integrations.cdn_providers)?,
            },

            "version": text::semver(rng),
            "environment": pick::pick(rng, &template.environments)?,
            "updatedBy": text::full_name(rng),
            "lastUpdated": Utc::now().to_rfc3339(),
        });

        Ok(super::into_fields(doc))
    }
}
