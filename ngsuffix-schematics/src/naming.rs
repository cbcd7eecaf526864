//! Logical name decomposition.

/// A slash-delimited logical name split into its path prefix and base name.
///
/// Decomposition is purely structural: no casing is changed, so the original
/// spelling can always be reassembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalName<'a> {
    /// The last segment (e.g. `dashboard`)
    pub base_name: &'a str,
    /// Preceding segments joined with `/` (e.g. `features/admin`), or empty
    pub path_prefix: &'a str,
}

impl<'a> LogicalName<'a> {
    /// Split `name` on its last `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ngsuffix_schematics::LogicalName;
    ///
    /// let name = LogicalName::parse("features/admin/dashboard");
    /// assert_eq!(name.base_name, "dashboard");
    /// assert_eq!(name.path_prefix, "features/admin");
    /// ```
    pub fn parse(name: &'a str) -> Self {
        match name.rsplit_once('/') {
            Some((prefix, base)) => Self {
                base_name: base,
                path_prefix: prefix,
            },
            None => Self {
                base_name: name,
                path_prefix: "",
            },
        }
    }

    /// Returns true if the name has directory segments before the base name.
    pub fn has_prefix(&self) -> bool {
        !self.path_prefix.is_empty()
    }
}

/// Split a logical name into `(base_name, path_prefix)`.
pub fn decompose(name: &str) -> (&str, &str) {
    let parsed = LogicalName::parse(name);
    (parsed.base_name, parsed.path_prefix)
}

/// The last segment of a logical name.
pub fn extract_base_name(name: &str) -> &str {
    LogicalName::parse(name).base_name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(decompose("my-component"), ("my-component", ""));
        assert!(!LogicalName::parse("my-component").has_prefix());
    }

    #[test]
    fn test_nested_name() {
        assert_eq!(
            decompose("features/admin/my-component"),
            ("my-component", "features/admin")
        );
        assert_eq!(decompose("shared/my-service"), ("my-service", "shared"));
        assert_eq!(
            decompose("app/core/services/auth/user"),
            ("user", "app/core/services/auth")
        );
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(decompose(""), ("", ""));
    }

    #[test]
    fn test_casing_preserved() {
        assert_eq!(extract_base_name("my-special_component"), "my-special_component");
        assert_eq!(decompose("Shared/UserItem2"), ("UserItem2", "Shared"));
    }

    #[test]
    fn test_segments_property() {
        let inputs = ["a", "a/b", "a/b/c", "x/y/z/w/v", "a//b", "a/b/"];
        for input in inputs {
            let segments: Vec<&str> = input.split('/').collect();
            let (base, prefix) = decompose(input);

            assert_eq!(base, *segments.last().unwrap(), "base of {input}");
            assert_eq!(
                prefix,
                segments[..segments.len() - 1].join("/"),
                "prefix of {input}"
            );
        }
    }
}
