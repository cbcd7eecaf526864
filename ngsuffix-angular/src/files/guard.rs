//! Route guards, functional or class based.

use std::{collections::BTreeSet, str::FromStr};

use eyre::{Result, bail};
use ngsuffix_schematics::EffectiveOptions;
use serde_json::Value;

use super::{GeneratedFile, class_block, functional_spec, injectable_spec};
use crate::{
    ArtifactNames, CodeFile,
    ast::{Decorator, Import, JsObject},
};

/// Router guard interfaces a guard can implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GuardInterface {
    CanActivate,
    CanActivateChild,
    CanDeactivate,
    CanMatch,
}

impl GuardInterface {
    /// Function type used by functional guards.
    pub fn fn_type(&self) -> &'static str {
        match self {
            GuardInterface::CanActivate => "CanActivateFn",
            GuardInterface::CanActivateChild => "CanActivateChildFn",
            GuardInterface::CanDeactivate => "CanDeactivateFn<unknown>",
            GuardInterface::CanMatch => "CanMatchFn",
        }
    }

    fn fn_params(&self) -> &'static str {
        match self {
            GuardInterface::CanActivate => "route, state",
            GuardInterface::CanActivateChild => "childRoute, state",
            GuardInterface::CanDeactivate => "component, currentRoute, currentState, nextState",
            GuardInterface::CanMatch => "route, segments",
        }
    }

    fn interface(&self) -> &'static str {
        match self {
            GuardInterface::CanActivate => "CanActivate",
            GuardInterface::CanActivateChild => "CanActivateChild",
            GuardInterface::CanDeactivate => "CanDeactivate<unknown>",
            GuardInterface::CanMatch => "CanMatch",
        }
    }

    fn method(&self) -> &'static str {
        match self {
            GuardInterface::CanActivate => {
                "canActivate(\n  route: ActivatedRouteSnapshot,\n  state: RouterStateSnapshot): MaybeAsync<GuardResult> {\n  return true;\n}"
            }
            GuardInterface::CanActivateChild => {
                "canActivateChild(\n  childRoute: ActivatedRouteSnapshot,\n  state: RouterStateSnapshot): MaybeAsync<GuardResult> {\n  return true;\n}"
            }
            GuardInterface::CanDeactivate => {
                "canDeactivate(\n  component: unknown,\n  currentRoute: ActivatedRouteSnapshot,\n  currentState: RouterStateSnapshot,\n  nextState: RouterStateSnapshot): MaybeAsync<GuardResult> {\n  return true;\n}"
            }
            GuardInterface::CanMatch => {
                "canMatch(\n  route: Route,\n  segments: UrlSegment[]): MaybeAsync<GuardResult> {\n  return true;\n}"
            }
        }
    }

    /// Router symbols the class method signature needs.
    fn signature_imports(&self) -> &'static [&'static str] {
        match self {
            GuardInterface::CanMatch => &["Route", "UrlSegment"],
            _ => &["ActivatedRouteSnapshot", "RouterStateSnapshot"],
        }
    }

    /// Parse the `implements` option, defaulting to `CanActivate`.
    pub fn from_options(options: &EffectiveOptions) -> Result<Vec<Self>> {
        let interfaces = match options.get("implements") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::String(s)) => vec![s.parse()?],
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item.as_str() {
                    Some(s) => s.parse(),
                    None => bail!("guard `implements` entries must be strings"),
                })
                .collect::<Result<_>>()?,
            Some(other) => bail!("invalid guard `implements` value: {}", other),
        };

        if interfaces.is_empty() {
            Ok(vec![GuardInterface::CanActivate])
        } else {
            Ok(interfaces)
        }
    }
}

impl FromStr for GuardInterface {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "CanActivate" => Ok(GuardInterface::CanActivate),
            "CanActivateChild" => Ok(GuardInterface::CanActivateChild),
            "CanDeactivate" => Ok(GuardInterface::CanDeactivate),
            "CanMatch" => Ok(GuardInterface::CanMatch),
            other => bail!("unknown guard interface '{}'", other),
        }
    }
}

/// The guard source file.
///
/// Functional guards implement only the first requested interface.
pub struct GuardTs<'a> {
    pub names: &'a ArtifactNames,
    pub functional: bool,
    pub interfaces: Vec<GuardInterface>,
}

impl GuardTs<'_> {
    fn render_functional(&self) -> String {
        let guard = self.interfaces[0];
        let type_name = guard.fn_type().split('<').next().unwrap_or_default();

        CodeFile::new()
            .import(Import::new("@angular/router").named(type_name))
            .add(format!(
                "export const {}: {} = ({}) => {{\n  return true;\n}};",
                self.names.fn_name,
                guard.fn_type(),
                guard.fn_params()
            ))
            .render()
    }

    fn render_class(&self) -> String {
        let mut router: BTreeSet<&str> = ["GuardResult", "MaybeAsync"].into_iter().collect();
        for guard in &self.interfaces {
            router.insert(guard.interface().split('<').next().unwrap_or_default());
            router.extend(guard.signature_imports());
        }

        let implements: Vec<&str> = self.interfaces.iter().map(|g| g.interface()).collect();
        let methods: Vec<&str> = self.interfaces.iter().map(|g| g.method()).collect();

        let decorator =
            Decorator::new("Injectable").metadata(JsObject::new().string("providedIn", "root"));
        let class = class_block(
            &format!(
                "export class {} implements {}",
                self.names.class_name,
                implements.join(", ")
            ),
            &methods,
        );

        CodeFile::new()
            .import(Import::new("@angular/core").named("Injectable"))
            .import(
                router
                    .into_iter()
                    .fold(Import::new("@angular/router"), |import, name| {
                        import.named(name)
                    }),
            )
            .add(format!("{}\n{}", decorator.build(), class))
            .render()
    }
}

impl GeneratedFile for GuardTs<'_> {
    fn path(&self) -> String {
        self.names.file(".ts")
    }

    fn render(&self) -> String {
        if self.functional && !self.interfaces.is_empty() {
            self.render_functional()
        } else {
            self.render_class()
        }
    }
}

pub struct GuardSpec<'a> {
    pub names: &'a ArtifactNames,
    pub functional: bool,
    pub interface: GuardInterface,
}

impl GeneratedFile for GuardSpec<'_> {
    fn path(&self) -> String {
        self.names.file(".spec.ts")
    }

    fn render(&self) -> String {
        if self.functional {
            functional_spec(
                self.names,
                self.interface.fn_type(),
                "@angular/router",
                "executeGuard",
            )
        } else {
            injectable_spec(self.names, "guard", false)
        }
    }
}

#[cfg(test)]
mod tests {
    use ngsuffix_schematics::ArtifactKind;
    use serde_json::json;

    use super::*;

    fn options(value: Value) -> EffectiveOptions {
        EffectiveOptions::new(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_functional_guard() {
        let names = ArtifactNames::new(ArtifactKind::Guard, "role", &options(json!({})));
        let guard = GuardTs {
            names: &names,
            functional: true,
            interfaces: vec![GuardInterface::CanActivate],
        };

        assert_eq!(guard.path(), "src/app/role/role-guard.ts");
        insta::assert_snapshot!(guard.render(), @r"
        import { CanActivateFn } from '@angular/router';

        export const roleGuard: CanActivateFn = (route, state) => {
          return true;
        };
        ");
    }

    #[test]
    fn test_class_guard() {
        let names = ArtifactNames::new(ArtifactKind::Guard, "role", &options(json!({})));
        let guard = GuardTs {
            names: &names,
            functional: false,
            interfaces: vec![GuardInterface::CanActivate, GuardInterface::CanMatch],
        };

        let code = guard.render();
        assert!(code.contains(
            "import { ActivatedRouteSnapshot, CanActivate, CanMatch, GuardResult, MaybeAsync, Route, RouterStateSnapshot, UrlSegment } from '@angular/router';"
        ));
        assert!(code.contains("export class RoleGuard implements CanActivate, CanMatch {"));
        assert!(code.contains("  canMatch(\n    route: Route,"));
    }

    #[test]
    fn test_implements_option() {
        assert_eq!(
            GuardInterface::from_options(&options(json!({}))).unwrap(),
            vec![GuardInterface::CanActivate]
        );
        assert_eq!(
            GuardInterface::from_options(&options(json!({ "implements": ["CanDeactivate"] })))
                .unwrap(),
            vec![GuardInterface::CanDeactivate]
        );
        assert_eq!(
            GuardInterface::from_options(&options(json!({ "implements": "CanMatch" }))).unwrap(),
            vec![GuardInterface::CanMatch]
        );
        assert!(GuardInterface::from_options(&options(json!({ "implements": ["CanLoad"] }))).is_err());
    }

    #[test]
    fn test_functional_guard_spec() {
        let names = ArtifactNames::new(ArtifactKind::Guard, "leave", &options(json!({})));
        let code = GuardSpec {
            names: &names,
            functional: true,
            interface: GuardInterface::CanDeactivate,
        }
        .render();

        assert!(code.contains("import { CanDeactivateFn } from '@angular/router';"));
        assert!(code.contains("import { leaveGuard } from './leave-guard';"));
        assert!(code.contains("const executeGuard: CanDeactivateFn<unknown> = (...parameters) =>"));
    }

    #[test]
    fn test_class_guard_spec() {
        let names = ArtifactNames::new(ArtifactKind::Guard, "role", &options(json!({})));
        let code = GuardSpec {
            names: &names,
            functional: false,
            interface: GuardInterface::CanActivate,
        }
        .render();

        assert!(code.contains("guard = TestBed.inject(RoleGuard);"));
    }
}
