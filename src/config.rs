use log::Level;

const RELAY_ENDPOINT: &str = match option_env!("FORM_RELAY_URL") {
    Some(url) => url,
    #[cfg(debug_assertions)]
    None => "http://localhost:8787/f/voxline-dev", // Local relay stub when running trunk serve
    #[cfg(not(debug_assertions))]
    None => "https://formspree.io/f/xvoxline",
};

const CONTACT_EMAIL: &str = match option_env!("CONTACT_EMAIL") {
    Some(email) => email,
    None => "hello@voxline.ai",
};

const BOOKING_URL: &str = match option_env!("BOOKING_URL") {
    Some(url) => url,
    None => "https://calendly.com/voxline/discovery-call",
};

/// Endpoint the contact form posts to. Fixed at build time.
pub fn relay_endpoint() -> &'static str {
    RELAY_ENDPOINT
}

pub fn contact_email() -> &'static str {
    CONTACT_EMAIL
}

/// External scheduling page behind every "Request Demo" link.
pub fn booking_url() -> &'static str {
    BOOKING_URL
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_endpoint_is_an_http_url() {
        let endpoint = relay_endpoint();
        assert!(endpoint.starts_with("http://") || endpoint.starts_with("https://"));
    }

    #[test]
    fn booking_url_is_an_external_https_link() {
        assert!(booking_url().starts_with("https://"));
    }

    #[test]
    fn contact_email_looks_like_an_address() {
        assert!(contact_email().contains('@'));
    }
}
