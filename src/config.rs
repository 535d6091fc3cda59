use log::Level;

pub const BRAND_NAME: &str = "FIXFIT";

pub const WHATSAPP_NUMBER: &str = "554792104490";
pub const WHATSAPP_MESSAGE: &str = "Olá! Gostaria de saber mais sobre os serviços da FIXFIT.";

pub const CONTACT_PHONE: &str = "+55 47 9210-4490";
pub const CONTACT_EMAIL: &str = "vcctecnologia@gmail.com";
pub const SERVICE_AREA: &str = "Balneário Camboriú e região";

// shadcn-style toaster: one toast on screen at a time
pub const TOAST_LIMIT: usize = 1;
pub const TOAST_DURATION_MS: u32 = 5_000;

pub const HEADER_SCROLL_THRESHOLD: f64 = 80.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
