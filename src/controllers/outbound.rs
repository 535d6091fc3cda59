use log::{info, warn};

use crate::config;

const WHATSAPP_HOST: &str = "https://wa.me";

/// `https://wa.me/<recipient>?text=<message>` with the message percent-encoded.
pub fn whatsapp_url(recipient: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        WHATSAPP_HOST,
        recipient,
        urlencoding::encode(message)
    )
}

pub fn default_whatsapp_url() -> String {
    whatsapp_url(config::WHATSAPP_NUMBER, config::WHATSAPP_MESSAGE)
}

/// Opens the WhatsApp chat in a new tab. Blocked popups are only logged.
pub fn open_whatsapp() {
    let url = default_whatsapp_url();
    match web_sys::window() {
        Some(window) => match window.open_with_url_and_target(&url, "_blank") {
            Ok(_) => info!("Opened WhatsApp chat"),
            Err(e) => warn!("Failed to open WhatsApp link: {:?}", e),
        },
        None => warn!("No window available to open WhatsApp link"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_configured_message() {
        assert_eq!(
            default_whatsapp_url(),
            "https://wa.me/554792104490?text=Ol%C3%A1%21%20Gostaria%20de%20saber%20mais%20sobre%20os%20servi%C3%A7os%20da%20FIXFIT."
        );
    }

    #[test]
    fn reserved_characters_do_not_leak_into_query() {
        let url = whatsapp_url("123", "a&b=c?d#e");
        assert_eq!(url, "https://wa.me/123?text=a%26b%3Dc%3Fd%23e");
    }

    #[test]
    fn empty_message_yields_empty_text_param() {
        assert_eq!(whatsapp_url("123", ""), "https://wa.me/123?text=");
    }
}
