//! Route data resolvers, functional or class based.

use super::{GeneratedFile, class_block, functional_spec, injectable_spec};
use crate::{
    ArtifactNames, CodeFile,
    ast::{Decorator, Import, JsObject},
};

const FN_TYPE: &str = "ResolveFn<boolean>";

pub struct ResolverTs<'a> {
    pub names: &'a ArtifactNames,
    pub functional: bool,
}

impl GeneratedFile for ResolverTs<'_> {
    fn path(&self) -> String {
        self.names.file(".ts")
    }

    fn render(&self) -> String {
        if self.functional {
            return CodeFile::new()
                .import(Import::new("@angular/router").named("ResolveFn"))
                .add(format!(
                    "export const {}: {} = (route, state) => {{\n  return true;\n}};",
                    self.names.fn_name, FN_TYPE
                ))
                .render();
        }

        let decorator =
            Decorator::new("Injectable").metadata(JsObject::new().string("providedIn", "root"));
        let class = class_block(
            &format!(
                "export class {} implements Resolve<boolean>",
                self.names.class_name
            ),
            &["resolve(route: ActivatedRouteSnapshot, state: RouterStateSnapshot): Observable<boolean> {\n  return of(true);\n}"],
        );

        CodeFile::new()
            .import(Import::new("@angular/core").named("Injectable"))
            .import(
                Import::new("@angular/router")
                    .named("Resolve")
                    .named("RouterStateSnapshot")
                    .named("ActivatedRouteSnapshot"),
            )
            .import(Import::new("rxjs").named("Observable").named("of"))
            .add(format!("{}\n{}", decorator.build(), class))
            .render()
    }
}

pub struct ResolverSpec<'a> {
    pub names: &'a ArtifactNames,
    pub functional: bool,
}

impl GeneratedFile for ResolverSpec<'_> {
    fn path(&self) -> String {
        self.names.file(".spec.ts")
    }

    fn render(&self) -> String {
        if self.functional {
            functional_spec(self.names, FN_TYPE, "@angular/router", "executeResolver")
        } else {
            injectable_spec(self.names, "resolver", false)
        }
    }
}
