use log::Level;

pub const BRAND_NAME: &str = "web.kraft";
pub const CONTACT_EMAIL: &str = "yashasshettyk@gmail.com";
/// WhatsApp number in wa.me format: country code followed by the number, digits only.
pub const WHATSAPP_NUMBER: &str = "916238816702";
pub const WHATSAPP_DISPLAY: &str = "+91 62388 16702";

/// Offsets from loader mount at which Shake, Burst, Exit and Done begin.
pub const LOADER_STEP_OFFSETS_MS: [u32; 4] = [300, 700, 1100, 1500];

pub const PARTICLE_COUNT: usize = 60;
pub const PARTICLE_RGB: (u8, u8, u8) = (108, 99, 255);

/// Spinner time before the quote link opens.
pub const SUBMIT_DELAY_MS: u32 = 600;
/// Lets the mobile menu collapse before the page starts scrolling.
pub const NAV_SCROLL_DELAY_MS: u32 = 250;
pub const NAVBAR_HEIGHT_PX: f64 = 80.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
