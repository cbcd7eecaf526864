//! Artifact kinds and their naming registrations.

use std::{fmt, str::FromStr};

use serde::Serialize;

/// How a kind gets its canonical names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The upstream generator names things correctly once `type` is forced.
    Simple,
    /// Needs symbol-suffix correction and a file rename after generation.
    Complex,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Simple => write!(f, "simple"),
            Classification::Complex => write!(f, "complex"),
        }
    }
}

/// Naming registration for one artifact kind.
#[derive(Debug, Clone, Copy)]
pub struct KindSpec {
    /// Schematic name, e.g. `pipe`
    pub name: &'static str,
    /// Lowercase token used in file names, e.g. `pipe`
    pub file_suffix: &'static str,
    /// Capitalized token appended to symbol names, e.g. `Pipe`
    pub symbol_suffix: &'static str,
    pub classification: Classification,
    /// Whether the kind has a selector that takes the project prefix
    pub selector_prefix: bool,
}

const fn simple(name: &'static str, symbol_suffix: &'static str, prefix: bool) -> KindSpec {
    KindSpec {
        name,
        file_suffix: name,
        symbol_suffix,
        classification: Classification::Simple,
        selector_prefix: prefix,
    }
}

const fn complex(name: &'static str, symbol_suffix: &'static str) -> KindSpec {
    KindSpec {
        name,
        file_suffix: name,
        symbol_suffix,
        classification: Classification::Complex,
        selector_prefix: false,
    }
}

const COMPONENT: KindSpec = simple("component", "Component", true);
const DIRECTIVE: KindSpec = simple("directive", "Directive", true);
const SERVICE: KindSpec = simple("service", "Service", false);
const PIPE: KindSpec = complex("pipe", "Pipe");
const GUARD: KindSpec = complex("guard", "Guard");
const INTERCEPTOR: KindSpec = complex("interceptor", "Interceptor");
const RESOLVER: KindSpec = complex("resolver", "Resolver");

/// The fixed set of artifact kinds this collection wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Component,
    Directive,
    Pipe,
    Guard,
    Interceptor,
    Resolver,
    Service,
}

impl ArtifactKind {
    /// Every kind, in registration order.
    pub const ALL: [ArtifactKind; 7] = [
        ArtifactKind::Component,
        ArtifactKind::Directive,
        ArtifactKind::Service,
        ArtifactKind::Pipe,
        ArtifactKind::Guard,
        ArtifactKind::Interceptor,
        ArtifactKind::Resolver,
    ];

    /// The naming registration for this kind.
    pub fn spec(&self) -> &'static KindSpec {
        match self {
            ArtifactKind::Component => &COMPONENT,
            ArtifactKind::Directive => &DIRECTIVE,
            ArtifactKind::Service => &SERVICE,
            ArtifactKind::Pipe => &PIPE,
            ArtifactKind::Guard => &GUARD,
            ArtifactKind::Interceptor => &INTERCEPTOR,
            ArtifactKind::Resolver => &RESOLVER,
        }
    }

    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    pub fn file_suffix(&self) -> &'static str {
        self.spec().file_suffix
    }

    pub fn symbol_suffix(&self) -> &'static str {
        self.spec().symbol_suffix
    }

    pub fn classification(&self) -> Classification {
        self.spec().classification
    }

    /// Returns true if the kind needs the post-generation rename pipeline.
    pub fn is_complex(&self) -> bool {
        self.classification() == Classification::Complex
    }

    pub fn has_selector_prefix(&self) -> bool {
        self.spec().selector_prefix
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ArtifactKind::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| {
                let names: Vec<&str> = ArtifactKind::ALL.iter().map(|k| k.name()).collect();
                format!("unknown kind '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(!ArtifactKind::Component.is_complex());
        assert!(!ArtifactKind::Directive.is_complex());
        assert!(!ArtifactKind::Service.is_complex());
        assert!(ArtifactKind::Pipe.is_complex());
        assert!(ArtifactKind::Guard.is_complex());
        assert!(ArtifactKind::Interceptor.is_complex());
        assert!(ArtifactKind::Resolver.is_complex());
    }

    #[test]
    fn test_suffix_tokens() {
        for kind in ArtifactKind::ALL {
            assert_eq!(kind.file_suffix(), kind.file_suffix().to_lowercase());
            assert_eq!(kind.symbol_suffix().to_lowercase(), kind.file_suffix());
        }
        assert_eq!(ArtifactKind::Interceptor.symbol_suffix(), "Interceptor");
    }

    #[test]
    fn test_selector_prefix() {
        assert!(ArtifactKind::Component.has_selector_prefix());
        assert!(ArtifactKind::Directive.has_selector_prefix());
        assert!(!ArtifactKind::Pipe.has_selector_prefix());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(ArtifactKind::from_str("guard").unwrap(), ArtifactKind::Guard);
        assert_eq!(ArtifactKind::from_str("Pipe").unwrap(), ArtifactKind::Pipe);
        assert!(ArtifactKind::from_str("module").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ArtifactKind::Resolver.to_string(), "resolver");
        assert_eq!(Classification::Complex.to_string(), "complex");
    }
}
