//! Angular naming conventions for generated artifacts.

use ngsuffix_core::{join_path, to_camel_case, to_kebab_case, to_pascal_case};
use ngsuffix_schematics::{
    ArtifactKind, EffectiveOptions, LogicalName, paths::DEFAULT_ROOT, suffix::canonical_symbol,
};

/// File and symbol names of one artifact, as upstream Angular derives them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactNames {
    /// Directory the files are written to
    pub dir: String,
    /// Hyphen-cased base name, e.g. `user-item2`
    pub file_name: String,
    /// File stem shared by all files of the artifact, e.g. `card.component`
    pub stem: String,
    /// Exported class name, e.g. `CardComponent`
    pub class_name: String,
    /// Exported function-style name, e.g. `roleGuard`
    pub fn_name: String,
}

impl ArtifactNames {
    /// Derive names for `kind` from the effective options.
    ///
    /// Component, directive and service take their file and class suffix from
    /// the `type` option and have none without it. Every other kind uses a
    /// hyphen-joined stem (`role-guard`) and suffixes its symbol unless the
    /// base name already ends with the suffix.
    pub fn new(kind: ArtifactKind, name: &str, options: &EffectiveOptions) -> Self {
        let logical = LogicalName::parse(name);
        let file_name = to_kebab_case(logical.base_name);
        let pascal = to_pascal_case(logical.base_name);
        let camel = to_camel_case(logical.base_name);

        let mut dir = join_path(options.path().unwrap_or(DEFAULT_ROOT), logical.path_prefix);
        if !options.flat() {
            dir = join_path(&dir, &file_name);
        }

        let (stem, symbol_suffix) = if kind.is_complex() {
            (
                format!("{}-{}", file_name, kind.file_suffix()),
                kind.symbol_suffix().to_string(),
            )
        } else {
            match options.str("type").filter(|t| !t.is_empty()) {
                Some(ty) => (
                    format!("{}.{}", file_name, to_kebab_case(ty)),
                    to_pascal_case(ty),
                ),
                None => (file_name.clone(), String::new()),
            }
        };

        Self {
            dir,
            stem,
            class_name: canonical_symbol(&pascal, &symbol_suffix),
            fn_name: canonical_symbol(&camel, &symbol_suffix),
            file_name,
        }
    }

    /// Path of a file of this artifact with the given extension.
    pub fn file(&self, extension: &str) -> String {
        join_path(&self.dir, &format!("{}{}", self.stem, extension))
    }

    /// Relative import specifier of the main file, e.g. `./card.component`.
    pub fn import_path(&self) -> String {
        format!("./{}", self.stem)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn options(value: serde_json::Value) -> EffectiveOptions {
        EffectiveOptions::new(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_simple_kind_with_type() {
        let names = ArtifactNames::new(
            ArtifactKind::Component,
            "features/admin/dashboard",
            &options(json!({ "type": "Component" })),
        );

        assert_eq!(names.dir, "src/app/features/admin/dashboard");
        assert_eq!(names.stem, "dashboard.component");
        assert_eq!(names.class_name, "DashboardComponent");
        assert_eq!(
            names.file(".ts"),
            "src/app/features/admin/dashboard/dashboard.component.ts"
        );
        assert_eq!(names.import_path(), "./dashboard.component");
    }

    #[test]
    fn test_simple_kind_without_type() {
        let names = ArtifactNames::new(ArtifactKind::Service, "cart", &options(json!({})));
        assert_eq!(names.stem, "cart");
        assert_eq!(names.class_name, "Cart");
    }

    #[test]
    fn test_complex_kind() {
        let names = ArtifactNames::new(
            ArtifactKind::Guard,
            "role",
            &options(json!({ "flat": true, "path": "libs/auth" })),
        );

        assert_eq!(names.dir, "libs/auth");
        assert_eq!(names.stem, "role-guard");
        assert_eq!(names.class_name, "RoleGuard");
        assert_eq!(names.fn_name, "roleGuard");
    }

    #[test]
    fn test_already_suffixed_name_is_not_doubled() {
        let names = ArtifactNames::new(ArtifactKind::Pipe, "my-pipe", &options(json!({})));
        assert_eq!(names.stem, "my-pipe-pipe");
        assert_eq!(names.class_name, "MyPipe");
        assert_eq!(names.fn_name, "myPipe");
    }

    #[test]
    fn test_spellings_agree() {
        let a = ArtifactNames::new(ArtifactKind::Resolver, "user_item2", &options(json!({})));
        let b = ArtifactNames::new(ArtifactKind::Resolver, "UserItem2", &options(json!({})));
        assert_eq!(a, b);
        assert_eq!(a.fn_name, "userItem2Resolver");
    }
}
