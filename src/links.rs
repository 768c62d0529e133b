//! External links: opening URLs in the system browser and WhatsApp hand-off.

use anyhow::{Context, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Open a URL with the platform's default handler
pub fn open_url(url: &str) -> Result<()> {
    tracing::info!("Opening link {}", url);
    open::that_detached(url).context(format!("Failed to open {}", url))
}

/// Chat link for a digits-only phone number
pub fn whatsapp_url(number: &str) -> String {
    format!("https://wa.me/{}", number)
}

/// Format "923043923901" as "+92 304 3923901"; other shapes pass through
pub fn format_phone(number: &str) -> String {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    let re = PHONE.get_or_init(|| {
        Regex::new(r"^(\d{2})(\d{3})(\d{7})$").expect("phone pattern is valid")
    });
    re.replace(number, "+$1 $2 $3").into_owned()
}
