//! Shared string and path utilities.

use heck::{ToKebabCase, ToLowerCamelCase, ToUpperCamelCase};

/// Convert a string to kebab-case (e.g., "UserItem2" -> "user-item2")
///
/// Mixed case, underscores and hyphens all collapse to the same spelling,
/// so `user_item2`, `UserItem2` and `user-item2` are interchangeable.
pub fn to_kebab_case(s: &str) -> String {
    s.to_kebab_case()
}

/// Convert a string to PascalCase (e.g., "user-item2" -> "UserItem2")
///
/// The input is kebab-cased first so that every spelling of a name
/// produces the same type name.
pub fn to_pascal_case(s: &str) -> String {
    to_kebab_case(s).to_upper_camel_case()
}

/// Convert a string to camelCase (e.g., "user-item2" -> "userItem2")
pub fn to_camel_case(s: &str) -> String {
    to_kebab_case(s).to_lower_camel_case()
}

/// Normalize a tree path to forward slashes without a leading `/`.
///
/// Empty and `.` segments are dropped and `..` pops the previous segment.
pub fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    segments.join("/")
}

/// Join two tree paths and normalize the result.
pub fn join_path(base: &str, rest: &str) -> String {
    normalize_path(&format!("{}/{}", base, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("MyComponent"), "my-component");
        assert_eq!(to_kebab_case("user_item2"), "user-item2");
        assert_eq!(to_kebab_case("UserItem2"), "user-item2");
        assert_eq!(to_kebab_case("user-item2"), "user-item2");
        assert_eq!(to_kebab_case("myHTTPService"), "my-http-service");
        assert_eq!(to_kebab_case(""), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("my-pipe"), "MyPipe");
        assert_eq!(to_pascal_case("auto_focus"), "AutoFocus");
        assert_eq!(to_pascal_case("user_item2"), "UserItem2");
        assert_eq!(to_pascal_case("MyCustom"), "MyCustom");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("role"), "role");
        assert_eq!(to_camel_case("my-custom"), "myCustom");
        assert_eq!(to_camel_case("MyCustom"), "myCustom");
        assert_eq!(to_camel_case("app-highlight"), "appHighlight");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/src/app/"), "src/app");
        assert_eq!(normalize_path("./src//app"), "src/app");
        assert_eq!(normalize_path("src\\app\\core"), "src/app/core");
        assert_eq!(normalize_path("src/app/../lib"), "src/lib");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("src/app", "features/admin"), "src/app/features/admin");
        assert_eq!(join_path("/src/app/", ""), "src/app");
    }
}
