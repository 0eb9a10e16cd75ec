use crate::error::SitesError;
use fxhash::FxHashSet;
use ghub_domain::config::SitesConfig;
use ghub_domain::site::{Site, SiteId};
use ghub_kernel::host::host_candidate;
use tracing::warn;

#[derive(Clone)]
struct Entry {
    site: Site,
    /// Lowercased host candidate of the site's domain, when one exists.
    host: Option<String>,
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry").field("site", &self.site.id).field("host", &self.host).finish()
    }
}

/// The validated network of sites for this deployment.
///
/// Built once from configuration at slice init; lookups are linear scans over
/// a handful of partner sites.
#[derive(Debug, Clone)]
pub struct SiteRegistry {
    entries: Vec<Entry>,
    default_index: usize,
}

impl SiteRegistry {
    /// Validates the configured site list and builds the registry.
    ///
    /// # Errors
    /// Returns an error if the site list is empty, contains duplicate ids,
    /// the default id does not name a configured site, or the default site's
    /// domain cannot anchor a redirect URL.
    pub fn from_config(config: &SitesConfig) -> Result<Self, SitesError> {
        if config.sites.is_empty() {
            return Err(SitesError::Config {
                message: "at least one site must be configured".into(),
                context: None,
            });
        }

        let mut seen = FxHashSet::default();
        let mut entries = Vec::with_capacity(config.sites.len());
        for site in &config.sites {
            if !seen.insert(site.id) {
                return Err(SitesError::Config {
                    message: format!("duplicate site id {}", site.id).into(),
                    context: None,
                });
            }

            let host = host_candidate(&site.domain).map(|host| host.to_lowercase());
            if host.is_none() {
                warn!(site = %site.id, domain = %site.domain, "Site domain has no extractable host");
            }
            entries.push(Entry { site: site.clone(), host });
        }

        let default_index = entries
            .iter()
            .position(|entry| entry.site.id == config.default)
            .ok_or_else(|| SitesError::Config {
                message: format!("default site id {} is not configured", config.default).into(),
                context: None,
            })?;

        if entries[default_index].host.is_none() {
            return Err(SitesError::Config {
                message: format!(
                    "default site domain {:?} cannot anchor a redirect URL",
                    entries[default_index].site.domain
                )
                .into(),
                context: None,
            });
        }

        Ok(Self { entries, default_index })
    }

    #[must_use]
    pub fn get(&self, id: SiteId) -> Option<&Site> {
        self.entries.iter().find(|entry| entry.site.id == id).map(|entry| &entry.site)
    }

    /// Looks up a site whose domain resolves to the given host
    /// (case-insensitive).
    #[must_use]
    pub fn by_host(&self, host: &str) -> Option<&Site> {
        let host = host.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.host.as_deref() == Some(host.as_str()))
            .map(|entry| &entry.site)
    }

    #[must_use]
    pub fn default(&self) -> &Site {
        &self.entries[self.default_index].site
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Site> {
        self.entries.iter().map(|entry| &entry.site)
    }
}
