use crate::app::env::Envy;

/// Builds the shared outbound client. The timeout bounds every upstream call,
/// connect and body included.
pub fn build_client(envy: &Envy) -> Result<reqwest::Client, reqwest::Error> {
    return reqwest::Client::builder()
        .timeout(envy.openai_timeout())
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build();
}
