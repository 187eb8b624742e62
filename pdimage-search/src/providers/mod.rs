//! Archive adapter implementations.
//!
//! Each module provides a struct implementing
//! [`crate::provider::ProviderAdapter`] for one upstream archive, plus the
//! typed response schema and the pure parse/map functions behind it.

mod lenient;
pub mod loc;
pub mod wikimedia;

pub use loc::LocAdapter;
pub use wikimedia::WikimediaAdapter;

use std::sync::Arc;

use crate::config::SearchConfig;
use crate::provider::ProviderAdapter;
use crate::types::Provider;

/// Link used when an archive does not report a landing page.
pub const FALLBACK_LINK: &str = "#";

/// Build one adapter per entry in `config.providers`, in that order.
///
/// All adapters share `client`.
pub fn build_adapters(
    config: &SearchConfig,
    client: &reqwest::Client,
) -> Vec<Arc<dyn ProviderAdapter>> {
    config
        .providers
        .iter()
        .map(|provider| -> Arc<dyn ProviderAdapter> {
            match provider {
                Provider::LibraryOfCongress => {
                    Arc::new(LocAdapter::new(client.clone(), config.loc.base_url.clone()))
                }
                Provider::WikimediaCommons => Arc::new(WikimediaAdapter::new(
                    client.clone(),
                    config.wikimedia.clone(),
                )),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapters_follow_configured_order() {
        let config = SearchConfig {
            providers: vec![Provider::WikimediaCommons, Provider::LibraryOfCongress],
            ..Default::default()
        };
        let adapters = build_adapters(&config, &reqwest::Client::new());
        let order: Vec<Provider> = adapters.iter().map(|a| a.provider()).collect();
        assert_eq!(
            order,
            vec![Provider::WikimediaCommons, Provider::LibraryOfCongress]
        );
    }

    #[test]
    fn duplicate_providers_are_kept() {
        let config = SearchConfig {
            providers: vec![Provider::LibraryOfCongress, Provider::LibraryOfCongress],
            ..Default::default()
        };
        assert_eq!(build_adapters(&config, &reqwest::Client::new()).len(), 2);
    }
}
