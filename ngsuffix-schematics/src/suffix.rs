//! Symbol suffix normalization.
//!
//! Upstream generators name some artifacts after the bare base name
//! (`export class Role`) instead of carrying the kind suffix
//! (`export class RoleGuard`). The rewrite here is textual: exported
//! declarations are matched with an identifier boundary so that `User`
//! never matches inside `UserService`.

use std::borrow::Cow;

use eyre::Result;
use ngsuffix_core::{Tree, to_camel_case, to_pascal_case};
use regex::{Captures, Regex};
use tracing::{debug, info};

/// Characters that may not follow a matched identifier.
const BOUNDARY: &str = r"([^A-Za-z0-9_$]|$)";

/// The canonical symbol for `name` with `suffix` appended once.
///
/// A name that already ends with the suffix is returned as is.
///
/// # Examples
///
/// ```
/// use ngsuffix_schematics::suffix::canonical_symbol;
///
/// assert_eq!(canonical_symbol("Role", "Guard"), "RoleGuard");
/// assert_eq!(canonical_symbol("MyPipe", "Pipe"), "MyPipe");
/// ```
pub fn canonical_symbol(name: &str, suffix: &str) -> String {
    if name.len() > suffix.len() && name.ends_with(suffix) {
        name.to_string()
    } else {
        format!("{}{}", name, suffix)
    }
}

/// Ensure the exported symbol for `base_name` carries `suffix` exactly once.
///
/// Both `export class <Pascal>` and `export const <camel>` declarations are
/// handled. Content that already declares the suffixed symbol, or declares
/// neither form, is returned unchanged.
pub fn ensure_symbol_suffix<'a>(
    content: &'a str,
    base_name: &str,
    suffix: &str,
) -> Result<Cow<'a, str>> {
    let class = to_pascal_case(base_name);
    let constant = to_camel_case(base_name);

    let mut result = Cow::Borrowed(content);
    if let Some(rewritten) = rewrite_declaration(&result, "class", &class, suffix)? {
        result = Cow::Owned(rewritten);
    }
    if let Some(rewritten) = rewrite_declaration(&result, "const", &constant, suffix)? {
        result = Cow::Owned(rewritten);
    }
    Ok(result)
}

/// Rewrite `export <keyword> <name>` to the suffixed symbol.
///
/// Returns `None` when nothing needs to change.
fn rewrite_declaration(
    content: &str,
    keyword: &str,
    name: &str,
    suffix: &str,
) -> Result<Option<String>> {
    if name.is_empty() {
        return Ok(None);
    }

    let canonical = canonical_symbol(name, suffix);
    if canonical == name {
        return Ok(None);
    }

    let already = declaration(keyword, &canonical)?;
    if already.is_match(content) {
        return Ok(None);
    }

    let bare = declaration(keyword, name)?;
    if !bare.is_match(content) {
        return Ok(None);
    }

    let rewritten = bare.replace_all(content, |caps: &Captures<'_>| {
        format!("export {} {}{}", keyword, canonical, &caps[1])
    });
    debug!(from = name, to = %canonical, "renamed exported {}", keyword);
    Ok(Some(rewritten.into_owned()))
}

fn declaration(keyword: &str, name: &str) -> Result<Regex> {
    let pattern = format!(r"export\s+{}\s+{}{}", keyword, regex::escape(name), BOUNDARY);
    Ok(Regex::new(&pattern)?)
}

/// Apply [`ensure_symbol_suffix`] to the file at `path` in `tree`.
///
/// The file is only overwritten when its content changes. A missing file is
/// a no-op. Returns whether the file was rewritten.
pub fn ensure_class_suffix(
    tree: &mut Tree,
    path: &str,
    base_name: &str,
    suffix: &str,
) -> Result<bool> {
    let Some(content) = tree.read(path)? else {
        debug!(path, "no generated file to normalize");
        return Ok(false);
    };

    let updated = match ensure_symbol_suffix(&content, base_name, suffix)? {
        Cow::Borrowed(_) => return Ok(false),
        Cow::Owned(updated) => updated,
    };

    tree.overwrite(path, updated)?;
    info!(path, "added {} suffix", suffix);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ensure(content: &str, base: &str, suffix: &str) -> String {
        ensure_symbol_suffix(content, base, suffix)
            .unwrap()
            .into_owned()
    }

    #[test]
    fn test_adds_suffix_to_class() {
        let content = "@Pipe({ name: 'fmt' })\nexport class Fmt implements PipeTransform {}\n";
        assert_eq!(
            ensure(content, "fmt", "Pipe"),
            "@Pipe({ name: 'fmt' })\nexport class FmtPipe implements PipeTransform {}\n"
        );
    }

    #[test]
    fn test_class_at_end_of_content() {
        assert_eq!(ensure("export class Role", "role", "Guard"), "export class RoleGuard");
    }

    #[test]
    fn test_extra_whitespace_collapsed() {
        assert_eq!(
            ensure("export   class\tRole {}", "role", "Guard"),
            "export class RoleGuard {}"
        );
    }

    #[test]
    fn test_extends_clause() {
        assert_eq!(
            ensure("export class Auth extends Base {}", "auth", "Interceptor"),
            "export class AuthInterceptor extends Base {}"
        );
    }

    #[test]
    fn test_every_declaration_rewritten() {
        let content = "export class Role {}\nexport class Role<T> {}\n";
        assert_eq!(
            ensure(content, "role", "Guard"),
            "export class RoleGuard {}\nexport class RoleGuard<T> {}\n"
        );
    }

    #[test]
    fn test_already_suffixed_unchanged() {
        let content = "export class RoleGuard implements CanActivate {}";
        let result = ensure_symbol_suffix(content, "role", "Guard").unwrap();
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_identifier_boundary() {
        let content = "export class UserService {}";
        assert_eq!(ensure(content, "user", "Pipe"), content);

        let content = "export class User2 {}";
        assert_eq!(ensure(content, "user", "Pipe"), content);

        let content = "export class User_ {}";
        assert_eq!(ensure(content, "user", "Pipe"), content);
    }

    #[test]
    fn test_non_exported_class_unchanged() {
        let content = "class Role {}";
        assert_eq!(ensure(content, "role", "Guard"), content);
    }

    #[test]
    fn test_no_double_suffix() {
        let content = "export class MyPipe implements PipeTransform {}";
        assert_eq!(ensure(content, "my-pipe", "Pipe"), content);

        let content = "export const authGuard: CanActivateFn = () => true;";
        assert_eq!(ensure(content, "auth-guard", "Guard"), content);
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "export class Role {}",
            "export const role: CanActivateFn = () => true;",
            "export class RoleGuard {}",
            "nothing here",
        ];
        for input in inputs {
            let once = ensure(input, "role", "Guard");
            let twice = ensure(&once, "role", "Guard");
            assert_eq!(once, twice, "{input}");
        }
    }

    #[test]
    fn test_functional_const() {
        assert_eq!(
            ensure(
                "export const userItem2: ResolveFn<boolean> = (route, state) => true;",
                "user_item2",
                "Resolver"
            ),
            "export const userItem2Resolver: ResolveFn<boolean> = (route, state) => true;"
        );
    }

    #[test]
    fn test_spellings_give_same_symbol() {
        for base in ["user_item2", "UserItem2", "user-item2"] {
            assert_eq!(
                ensure("export class UserItem2 {}", base, "Pipe"),
                "export class UserItem2Pipe {}",
                "{base}"
            );
        }
    }

    #[test]
    fn test_empty_base_name() {
        assert_eq!(ensure("export class X {}", "", "Pipe"), "export class X {}");
    }

    #[test]
    fn test_canonical_symbol() {
        assert_eq!(canonical_symbol("Pipe", "Pipe"), "PipePipe");
        assert_eq!(canonical_symbol("roleGuard", "Guard"), "roleGuard");
    }

    #[test]
    fn test_ensure_class_suffix_in_tree() {
        let mut tree = Tree::empty();
        tree.create("src/app/fmt/fmt-pipe.ts", "export class Fmt {}")
            .unwrap();

        assert!(ensure_class_suffix(&mut tree, "src/app/fmt/fmt-pipe.ts", "fmt", "Pipe").unwrap());
        assert_eq!(
            tree.read("src/app/fmt/fmt-pipe.ts").unwrap().as_deref(),
            Some("export class FmtPipe {}")
        );

        // second pass leaves the file alone
        assert!(!ensure_class_suffix(&mut tree, "src/app/fmt/fmt-pipe.ts", "fmt", "Pipe").unwrap());
    }

    #[test]
    fn test_ensure_class_suffix_missing_file() {
        let mut tree = Tree::empty();
        assert!(!ensure_class_suffix(&mut tree, "src/app/none.ts", "none", "Pipe").unwrap());
        assert!(tree.actions().is_empty());
    }
}
