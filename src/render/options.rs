//! Rendering options and configuration.

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Maximum frame nesting depth before conversion fails
    pub max_depth: usize,

    /// Escape markup-significant characters
    pub escape_special_chars: bool,

    /// Rewrite leading bullet/number conventions into wiki list markers
    pub rewrite_list_prefixes: bool,

    /// Collect conversion statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum frame nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Enable or disable escaping of markup-significant characters.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Enable or disable list-prefix rewriting.
    pub fn with_list_rewrites(mut self, rewrite: bool) -> Self {
        self.rewrite_list_prefixes = rewrite;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            escape_special_chars: true,
            rewrite_list_prefixes: true,
            collect_stats: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.max_depth, 64);
        assert!(options.escape_special_chars);
        assert!(options.rewrite_list_prefixes);
        assert!(!options.collect_stats);
    }

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_max_depth(8)
            .with_escaping(false)
            .with_list_rewrites(false)
            .with_stats(true);

        assert_eq!(options.max_depth, 8);
        assert!(!options.escape_special_chars);
        assert!(!options.rewrite_list_prefixes);
        assert!(options.collect_stats);
    }
}
