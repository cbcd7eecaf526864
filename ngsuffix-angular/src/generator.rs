//! Reference generator producing Angular's stock layout.

use eyre::{Result, bail, eyre};
use ngsuffix_core::Tree;
use ngsuffix_manifest::UPSTREAM_COLLECTION;
use ngsuffix_schematics::{ArtifactKind, EffectiveOptions, ExternalGenerator};
use tracing::debug;

use crate::{
    ArtifactNames,
    files::{
        ComponentOptions, ComponentSpec, ComponentStyle, ComponentTemplate, ComponentTs,
        DirectiveSpec, DirectiveTs, GeneratedFile, GuardInterface, GuardSpec, GuardTs,
        InterceptorSpec, InterceptorTs, PipeSpec, PipeTs, ResolverSpec, ResolverTs, ServiceSpec,
        ServiceTs,
    },
};

/// Writes the files the upstream `@schematics/angular` collection would.
///
/// Output follows current Angular conventions: pipes, guards, interceptors
/// and resolvers get a hyphenated stem (`role-guard.ts`) and a suffixed
/// symbol, component, directive and service follow the `type` option.
#[derive(Debug, Default, Clone, Copy)]
pub struct Generator;

impl Generator {
    pub fn new() -> Self {
        Self
    }

    /// Render every file of one artifact as `(path, content)` pairs.
    pub fn render(
        &self,
        kind: ArtifactKind,
        options: &EffectiveOptions,
    ) -> Result<Vec<(String, String)>> {
        let Some(name) = options.name().filter(|n| !n.trim().is_empty()) else {
            bail!("option `name` is required to generate a {}", kind);
        };
        let names = ArtifactNames::new(kind, name, options);
        let tests = !options.skip_tests();
        let standalone = options.bool("standalone").unwrap_or(true);
        let functional = options.bool("functional").unwrap_or(true);

        let mut files = Vec::new();
        let mut emit = |file: &dyn GeneratedFile| files.push((file.path(), file.render()));

        match kind {
            ArtifactKind::Component => {
                let component = ComponentOptions::from_options(&names, options)?;
                emit(&ComponentTs {
                    names: &names,
                    options: &component,
                });
                if !component.inline_template {
                    emit(&ComponentTemplate { names: &names });
                }
                if let Some(style) = ComponentStyle::for_options(&names, &component) {
                    emit(&style);
                }
                if tests {
                    emit(&ComponentSpec {
                        names: &names,
                        standalone: component.standalone,
                    });
                }
            }
            ArtifactKind::Directive => {
                emit(&DirectiveTs::new(&names, options));
                if tests {
                    emit(&DirectiveSpec { names: &names });
                }
            }
            ArtifactKind::Service => {
                emit(&ServiceTs { names: &names });
                if tests {
                    emit(&ServiceSpec { names: &names });
                }
            }
            ArtifactKind::Pipe => {
                emit(&PipeTs {
                    names: &names,
                    standalone,
                });
                if tests {
                    emit(&PipeSpec { names: &names });
                }
            }
            ArtifactKind::Guard => {
                let interfaces = GuardInterface::from_options(options)?;
                let interface = interfaces[0];
                emit(&GuardTs {
                    names: &names,
                    functional,
                    interfaces,
                });
                if tests {
                    emit(&GuardSpec {
                        names: &names,
                        functional,
                        interface,
                    });
                }
            }
            ArtifactKind::Interceptor => {
                emit(&InterceptorTs {
                    names: &names,
                    functional,
                });
                if tests {
                    emit(&InterceptorSpec {
                        names: &names,
                        functional,
                    });
                }
            }
            ArtifactKind::Resolver => {
                emit(&ResolverTs {
                    names: &names,
                    functional,
                });
                if tests {
                    emit(&ResolverSpec {
                        names: &names,
                        functional,
                    });
                }
            }
        }

        Ok(files)
    }
}

impl ExternalGenerator for Generator {
    fn generate(
        &self,
        tree: &mut Tree,
        collection: &str,
        kind: &str,
        options: &EffectiveOptions,
    ) -> Result<()> {
        if collection != UPSTREAM_COLLECTION {
            bail!("unsupported collection '{}'", collection);
        }
        let kind: ArtifactKind = kind.parse().map_err(|e: String| eyre!(e))?;

        for (path, content) in self.render(kind, options)? {
            debug!(%path, "creating file");
            tree.create(&path, content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn options(value: serde_json::Value) -> EffectiveOptions {
        EffectiveOptions::new(serde_json::from_value(value).unwrap())
    }

    fn paths(kind: ArtifactKind, value: serde_json::Value) -> Vec<String> {
        Generator
            .render(kind, &options(value))
            .unwrap()
            .into_iter()
            .map(|(path, _)| path)
            .collect()
    }

    #[test]
    fn test_component_files() {
        assert_eq!(
            paths(
                ArtifactKind::Component,
                json!({ "name": "card", "type": "Component" })
            ),
            vec![
                "src/app/card/card.component.ts",
                "src/app/card/card.component.html",
                "src/app/card/card.component.css",
                "src/app/card/card.component.spec.ts",
            ]
        );
    }

    #[test]
    fn test_inline_component_skips_tests() {
        assert_eq!(
            paths(
                ArtifactKind::Component,
                json!({
                    "name": "badge",
                    "type": "Component",
                    "inlineTemplate": true,
                    "inlineStyle": true,
                    "skipTests": true
                })
            ),
            vec!["src/app/badge/badge.component.ts"]
        );
    }

    #[test]
    fn test_complex_kind_layout() {
        assert_eq!(
            paths(ArtifactKind::Guard, json!({ "name": "role", "flat": true })),
            vec!["src/app/role-guard.ts", "src/app/role-guard.spec.ts"]
        );
    }

    #[test]
    fn test_missing_name() {
        let err = Generator
            .render(ArtifactKind::Pipe, &options(json!({})))
            .unwrap_err();
        assert_eq!(err.to_string(), "option `name` is required to generate a pipe");
    }

    #[test]
    fn test_generate_into_tree() {
        let mut tree = Tree::empty();
        Generator
            .generate(
                &mut tree,
                UPSTREAM_COLLECTION,
                "interceptor",
                &options(json!({ "name": "auth", "skipTests": true })),
            )
            .unwrap();

        assert_eq!(tree.files(), vec!["src/app/auth/auth-interceptor.ts"]);
    }

    #[test]
    fn test_rejects_unknown_kind_and_collection() {
        let mut tree = Tree::empty();
        let opts = options(json!({ "name": "x" }));

        assert!(
            Generator
                .generate(&mut tree, UPSTREAM_COLLECTION, "module", &opts)
                .is_err()
        );
        assert!(
            Generator
                .generate(&mut tree, "@other/schematics", "pipe", &opts)
                .is_err()
        );
        assert!(tree.files().is_empty());
    }
}
