use time::OffsetDateTime;

pub const APP_NAME: &str = "JapWorld";
pub const APP_TAGLINE: &str = "Premium Japanese Vehicle Imports";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

pub const CONTACT_EMAIL: &str = "info@japworld.com";
pub const CONTACT_PHONE_DISPLAY: &str = "+1 (234) 567-8900";
pub const CONTACT_PHONE_HREF: &str = "tel:+12345678900";
pub const OFFICES: &[&str] = &["Tokyo, Japan", "London, UK", "Los Angeles, USA"];
pub const BUSINESS_HOURS: &[(&str, &str)] = &[
    ("Monday - Friday", "9:00 AM - 6:00 PM"),
    ("Saturday", "10:00 AM - 4:00 PM"),
    ("Sunday", "Closed"),
];

pub fn version_label() -> String {
    label_for(GIT_TAG, APP_VERSION)
}

fn label_for(tag: Option<&str>, version: &str) -> String {
    match tag {
        Some(tag) => tag.to_string(),
        None => format!("v{version}"),
    }
}

pub fn copyright_line() -> String {
    let year = OffsetDateTime::now_utc().year();
    format!("© {year} {APP_NAME}. All rights reserved.")
}
