pub const APP_NAME: &str = "Property Tax Challenger";
pub const APP_AUTHOR: &str = "Abode";
pub const APP_HOMEPAGE: &str = "https://joinabode.ai";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

pub fn user_agent() -> String {
    format!("property-tax-challenger/{} (+{})", version_label(), APP_HOMEPAGE)
}
