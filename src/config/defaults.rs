//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn url() -> String {
        "https://lumixpert.de".into()
    }

    pub fn title() -> String {
        "LumiXpert".into()
    }

    pub fn language() -> String {
        "de".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn storage() -> PathBuf {
        ".lumi/storage".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }
}

// ============================================================================
// [sitemap] Section Defaults
// ============================================================================

pub mod sitemap {
    use crate::generator::ChangeFreq;

    pub fn changefreq() -> ChangeFreq {
        ChangeFreq::Weekly
    }

    pub fn priority() -> f64 {
        0.5
    }

    pub fn languages() -> Vec<String> {
        vec!["de".into()]
    }
}

// ============================================================================
// [admin] Section Defaults
// ============================================================================

pub mod admin {
    pub fn password() -> Option<String> {
        Some("lumixpert2025".into())
    }
}

// ============================================================================
// [ping] Section Defaults
// ============================================================================

pub mod ping {
    pub fn timeout_secs() -> u64 {
        10
    }
}
