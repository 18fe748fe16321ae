//! Scanner options.

/// Options controlling which lexemes the scanner assembles.
///
/// The default scans the base Quirk lexicon: every operator character is its own
/// token and every run of letters is an identifier. The two-character operator and
/// keyword kinds are then never produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Merge `=`, `>` and `<` with a following `=` into `==`, `>=` and `<=`.
    pub combine_operators: bool,
    /// Report reserved words (`fn`, `var`, `if`, `else`, `return`, `loop`) as keyword kinds.
    pub reserve_keywords: bool,
}

impl ScanConfig {
    /// All lexeme extensions enabled.
    pub const fn full() -> Self {
        ScanConfig {
            combine_operators: true,
            reserve_keywords: true,
        }
    }

    pub const fn with_combined_operators(mut self, enabled: bool) -> Self {
        self.combine_operators = enabled;
        self
    }

    pub const fn with_reserved_keywords(mut self, enabled: bool) -> Self {
        self.reserve_keywords = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_base_lexicon() {
        let config = ScanConfig::default();
        assert!(!config.combine_operators);
        assert!(!config.reserve_keywords);
    }

    #[test]
    fn builders() {
        let config = ScanConfig::default().with_reserved_keywords(true);
        assert!(config.reserve_keywords);
        assert!(!config.combine_operators);
        assert_eq!(
            config.with_combined_operators(true),
            ScanConfig::full(),
        );
    }
}
