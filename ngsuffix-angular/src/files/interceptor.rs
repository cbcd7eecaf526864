//! HTTP interceptors, functional or class based.

use super::{GeneratedFile, class_block, functional_spec, injectable_spec};
use crate::{
    ArtifactNames, CodeFile,
    ast::{Decorator, Import},
};

const FN_TYPE: &str = "HttpInterceptorFn";
const HTTP: &str = "@angular/common/http";

pub struct InterceptorTs<'a> {
    pub names: &'a ArtifactNames,
    pub functional: bool,
}

impl GeneratedFile for InterceptorTs<'_> {
    fn path(&self) -> String {
        self.names.file(".ts")
    }

    fn render(&self) -> String {
        if self.functional {
            return CodeFile::new()
                .import(Import::new(HTTP).named(FN_TYPE))
                .add(format!(
                    "export const {}: {} = (req, next) => {{\n  return next(req);\n}};",
                    self.names.fn_name, FN_TYPE
                ))
                .render();
        }

        let class = class_block(
            &format!(
                "export class {} implements HttpInterceptor",
                self.names.class_name
            ),
            &[
                "constructor() {}",
                "intercept(request: HttpRequest<unknown>, next: HttpHandler): Observable<HttpEvent<unknown>> {\n  return next.handle(request);\n}",
            ],
        );

        CodeFile::new()
            .import(Import::new("@angular/core").named("Injectable"))
            .import(
                Import::new(HTTP)
                    .named("HttpRequest")
                    .named("HttpHandler")
                    .named("HttpEvent")
                    .named("HttpInterceptor"),
            )
            .import(Import::new("rxjs").named("Observable"))
            .add(format!("{}\n{}", Decorator::new("Injectable").build(), class))
            .render()
    }
}

pub struct InterceptorSpec<'a> {
    pub names: &'a ArtifactNames,
    pub functional: bool,
}

impl GeneratedFile for InterceptorSpec<'_> {
    fn path(&self) -> String {
        self.names.file(".spec.ts")
    }

    fn render(&self) -> String {
        if self.functional {
            functional_spec(self.names, FN_TYPE, HTTP, "interceptor")
        } else {
            injectable_spec(self.names, "interceptor", true)
        }
    }
}
