//! Skills bundled with SkillHost

pub mod echo;
pub mod management_summary;
pub mod web_search;

pub use echo::EchoSkill;
pub use management_summary::ManagementSummarySkill;
pub use web_search::WebSearchSkill;

use skillhost_search::SearchSettings;

/// Options for the bundled skill set
#[derive(Debug, Clone)]
pub struct BuiltinOptions {
    /// Results requested per web search
    pub max_results: usize,
    /// Bullets per management summary
    pub max_items: usize,
    /// Settings for the lazily built default search client
    pub search: SearchSettings,
}

impl Default for BuiltinOptions {
    fn default() -> Self {
        Self {
            max_results: web_search::DEFAULT_MAX_RESULTS,
            max_items: management_summary::DEFAULT_MAX_ITEMS,
            search: SearchSettings::default(),
        }
    }
}
