use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use url::Url;

/// Portal support line used when no config is supplied.
pub const DEFAULT_CONTACT_PHONE: &str = "+55 (11) 99999-0000";
const WHATSAPP_BASE_URL: &str = "https://wa.me/";

#[derive(Debug, thiserror::Error)]
pub enum ContactConfigError {
    #[error("invalid contact config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("contact phone {0:?} contains no digits")]
    EmptyPhone(String),

    #[error("failed to build contact link: {0}")]
    Url(#[from] url::ParseError),
}

/// Where the floating contact button points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: DEFAULT_CONTACT_PHONE.to_string(),
            message: None,
        }
    }
}

impl ContactConfig {
    pub fn from_json(raw: &str) -> Result<Self, ContactConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.phone_digits().is_empty() {
            return Err(ContactConfigError::EmptyPhone(config.phone));
        }
        Ok(config)
    }

    /// Phone number reduced to digits, the form wa.me expects.
    pub fn phone_digits(&self) -> String {
        self.phone.chars().filter(char::is_ascii_digit).collect()
    }

    pub fn link(&self) -> Result<Url, ContactConfigError> {
        let digits = self.phone_digits();
        if digits.is_empty() {
            return Err(ContactConfigError::EmptyPhone(self.phone.clone()));
        }

        let base = format!("{WHATSAPP_BASE_URL}{digits}");
        let url = match self.message.as_deref().map(str::trim) {
            Some(message) if !message.is_empty() => {
                Url::parse_with_params(&base, &[("text", message)])?
            }
            _ => Url::parse(&base)?,
        };
        Ok(url)
    }
}

#[component]
pub fn FloatingContactButton(
    #[props(default)] config: ContactConfig,
    #[props(default)] class: String,
) -> Element {
    let href = match config.link() {
        Ok(url) => url.to_string(),
        Err(e) => {
            dioxus_logger::tracing::warn!("contact button hidden: {}", e);
            return rsx! {};
        }
    };
    let class_list = if class.trim().is_empty() {
        "floating-contact".to_string()
    } else {
        format!("floating-contact {}", class.trim())
    };

    rsx! {
        a {
            class: "{class_list}",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            aria_label: "Contact us on WhatsApp",
            title: "Contact us on WhatsApp",
            style: "position: fixed; bottom: 1.5rem; right: 1.5rem; z-index: 50; width: 3.5rem; height: 3.5rem; border-radius: 9999px; background: #25d366; color: white; display: flex; align-items: center; justify-content: center; box-shadow: 0 10px 15px -3px rgba(0,0,0,0.3);",
            svg {
                width: "28",
                height: "28",
                view_box: "0 0 24 24",
                fill: "currentColor",
                path {
                    d: "M12.04 2C6.58 2 2.13 6.45 2.13 11.91c0 1.75.46 3.45 1.32 4.95L2.05 22l5.25-1.38a9.9 9.9 0 0 0 4.74 1.21c5.46 0 9.91-4.45 9.91-9.91C21.95 6.45 17.5 2 12.04 2zm5.8 14.01c-.24.68-1.42 1.3-1.96 1.35-.5.05-1.13.07-1.82-.11-.42-.13-.96-.31-1.65-.61-2.9-1.25-4.79-4.17-4.94-4.36-.14-.19-1.18-1.57-1.18-3 0-1.43.75-2.13 1.02-2.42.26-.29.58-.36.77-.36h.55c.18 0 .42-.07.65.5.24.58.82 2 .89 2.15.07.14.12.31.02.5-.1.19-.14.31-.29.48-.14.17-.3.37-.43.5-.14.14-.29.3-.13.58.17.29.74 1.22 1.59 1.97 1.09.97 2.01 1.27 2.29 1.42.29.14.46.12.62-.07.17-.19.72-.84.91-1.13.19-.29.38-.24.65-.14.26.1 1.68.79 1.97.94.29.14.48.22.55.34.07.12.07.7-.17 1.37z",
                }
            }
        }
    }
}
