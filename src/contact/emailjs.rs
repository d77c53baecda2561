use serde::Serialize;

#[cfg(feature = "hydrate")]
use super::{ContactPayload, Delivery, DeliveryError};

const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS account settings. Values can be swapped at build time through the
/// `EMAILJS_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub endpoint: String,
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
    pub to_name: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: option_env!("EMAILJS_ENDPOINT")
                .unwrap_or(DEFAULT_ENDPOINT)
                .to_string(),
            public_key: option_env!("EMAILJS_PUBLIC_KEY")
                .unwrap_or("VeCH3SUBln5UYpdrt")
                .to_string(),
            service_id: option_env!("EMAILJS_SERVICE_ID")
                .unwrap_or("service_wew8q54")
                .to_string(),
            template_id: option_env!("EMAILJS_TEMPLATE_ID")
                .unwrap_or("template_vuszjuf")
                .to_string(),
            to_name: crate::content::PROFILE.full_name.to_string(),
        }
    }
}

impl EmailJsConfig {
    pub fn check(&self) -> Result<(), String> {
        let missing = [
            ("endpoint", &self.endpoint),
            ("public key", &self.public_key),
            ("service id", &self.service_id),
            ("template id", &self.template_id),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect::<Vec<_>>();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("missing {}", missing.join(", ")))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_name: String,
}

/// Body of the EmailJS `email/send` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailJsRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl EmailJsRequest {
    pub fn new(config: &EmailJsConfig, payload: super::ContactPayload) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: TemplateParams {
                from_name: payload.from_name,
                from_email: payload.from_email,
                message: payload.message,
                to_name: config.to_name.clone(),
            },
        }
    }
}

#[cfg(feature = "hydrate")]
pub struct EmailJs {
    client: reqwest::Client,
    config: EmailJsConfig,
}

#[cfg(feature = "hydrate")]
impl EmailJs {
    pub fn new(config: EmailJsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[cfg(feature = "hydrate")]
impl Delivery for EmailJs {
    async fn deliver(&self, payload: ContactPayload) -> Result<(), DeliveryError> {
        self.config.check().map_err(DeliveryError::Config)?;
        let body = EmailJsRequest::new(&self.config, payload);
        let res = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;
        let status = res.status();
        if status.is_success() {
            return Ok(());
        }
        let body = res.text().await.unwrap_or_default();
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactPayload;

    #[test]
    fn test_request_body_shape() {
        let config = EmailJsConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            public_key: "pk".to_string(),
            service_id: "svc".to_string(),
            template_id: "tpl".to_string(),
            to_name: "Prateek Banda".to_string(),
        };
        let payload = ContactPayload {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            message: "Hi".to_string(),
        };
        let json = serde_json::to_value(EmailJsRequest::new(&config, payload))
            .expect("request should serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "pk",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "message": "Hi",
                    "to_name": "Prateek Banda",
                }
            })
        );
    }

    #[test]
    fn test_default_config_is_complete() {
        let config = EmailJsConfig::default();
        assert_eq!(config.check(), Ok(()));
        assert!(config.endpoint.starts_with("https://"));
        assert!(!config.to_name.is_empty());
    }

    #[test]
    fn test_check_lists_missing_values() {
        let config = EmailJsConfig {
            service_id: String::new(),
            template_id: " ".to_string(),
            ..EmailJsConfig::default()
        };
        assert_eq!(
            config.check(),
            Err("missing service id, template id".to_string())
        );
    }
}
