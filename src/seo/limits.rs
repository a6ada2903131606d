/// Length limits for SEO text fields, in characters.
///
/// Defaults follow common search-engine display limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoLimits {
    pub title_min: usize,
    pub title_max: usize,
    pub description_min: usize,
    pub description_max: usize,
    pub keywords_max: usize,
    /// Title length in generated Open-Graph image URLs
    pub og_title_max: usize,
    /// Subtitle length in generated Open-Graph image URLs
    pub og_subtitle_max: usize,
}

impl Default for SeoLimits {
    fn default() -> Self {
        Self {
            title_min: 30,
            title_max: 60,
            description_min: 70,
            description_max: 160,
            keywords_max: 10,
            og_title_max: 50,
            og_subtitle_max: 80,
        }
    }
}
