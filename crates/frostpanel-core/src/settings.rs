//! Site configuration and authenticated user records.
//!
//! Both are rendered into the page by the server as globals
//! (`window.SiteConfiguration`, `window.PterodactylUser`) and decoded once at
//! start-up.

use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecaptchaSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub site_key: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SiteConfiguration {
    pub name: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub recaptcha: RecaptchaSettings,
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for SiteConfiguration {
    fn default() -> Self {
        Self {
            name: "Pterodactyl".to_string(),
            locale: default_locale(),
            recaptcha: RecaptchaSettings::default(),
        }
    }
}

impl SiteConfiguration {
    /// Site key handed to reCAPTCHA; a placeholder keeps the widget from
    /// rejecting an empty key outright.
    pub fn recaptcha_site_key(&self) -> &str {
        if self.recaptcha.site_key.is_empty() {
            "_invalid_key"
        } else {
            &self.recaptcha.site_key
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserData {
    pub uuid: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub root_admin: bool,
    #[serde(default)]
    pub use_totp: bool,
    #[serde(default)]
    pub language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_configuration() {
        let json = r#"{"name":"Frost","locale":"de","recaptcha":{"enabled":true,"siteKey":"6Lc"}}"#;
        let config: SiteConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(config.name, "Frost");
        assert!(config.recaptcha.enabled);
        assert_eq!(config.recaptcha_site_key(), "6Lc");
    }

    #[test]
    fn test_site_configuration_defaults() {
        let config: SiteConfiguration = serde_json::from_str(r#"{"name":"Frost"}"#).unwrap();
        assert_eq!(config.locale, "en");
        assert!(!config.recaptcha.enabled);
        assert_eq!(config.recaptcha_site_key(), "_invalid_key");
    }

    #[test]
    fn test_user_data() {
        let json = r#"{"uuid":"u-1","username":"admin","email":"a@example.com","root_admin":true,"use_totp":false}"#;
        let user: UserData = serde_json::from_str(json).unwrap();
        assert!(user.root_admin);
        assert_eq!(user.language, None);
    }
}
