//! Known product identifiers.

/// Products whose storages this crate knows how to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    /// Heroes of the Storm (alpha builds)
    HeroesOfTheStorm,
    /// Diablo III (beta 2.2.0)
    Diablo3,
    /// Overwatch (beta, since build 24919)
    Overwatch,
}

/// Product identifiers as they appear in the `build-product` field.
const PRODUCT_IDS: &[(&str, Product)] = &[
    ("Hero", Product::HeroesOfTheStorm),
    ("Diablo3", Product::Diablo3),
    ("Prometheus", Product::Overwatch),
];

impl Product {
    /// Look up a product by its `build-product` identifier: full-length,
    /// ASCII case-insensitive match against the known set.
    pub fn from_identifier(ident: &str) -> Option<Self> {
        PRODUCT_IDS
            .iter()
            .find(|(tag, _)| tag.eq_ignore_ascii_case(ident))
            .map(|(_, product)| *product)
    }
}
