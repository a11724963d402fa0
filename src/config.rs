use log::Level;

// Build-time settings, e.g. `PORTFOLIO_SANITY_PROJECT_ID=abc123 trunk build --release`.

#[cfg(debug_assertions)]
pub fn use_content_cdn() -> bool {
    false // Live API while developing so edits in the studio show up at once
}

#[cfg(not(debug_assertions))]
pub fn use_content_cdn() -> bool {
    true
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn sanity_project_id() -> Option<&'static str> {
    non_empty(option_env!("PORTFOLIO_SANITY_PROJECT_ID"))
}

pub fn sanity_dataset() -> &'static str {
    non_empty(option_env!("PORTFOLIO_SANITY_DATASET")).unwrap_or("production")
}

pub fn sanity_api_version() -> &'static str {
    non_empty(option_env!("PORTFOLIO_SANITY_API_VERSION")).unwrap_or("2024-01-01")
}

pub fn web3forms_key() -> Option<&'static str> {
    non_empty(option_env!("PORTFOLIO_WEB3FORMS_KEY"))
}

pub fn relay_endpoint() -> &'static str {
    "https://api.web3forms.com/submit"
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
