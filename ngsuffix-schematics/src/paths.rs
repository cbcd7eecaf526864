//! File path derivation for generated artifacts.
//!
//! The upstream generator writes COMPLEX kinds to hyphen-joined stems
//! (`role-guard.ts`); the canonical layout uses dot-joined stems
//! (`role.guard.ts`). Both are derived here from the same inputs so the
//! rename step knows exactly which file to look for.

use ngsuffix_core::{join_path, normalize_path, to_kebab_case};
use serde::Serialize;

use crate::naming::LogicalName;

/// Root directory used when no `path` option is given.
pub const DEFAULT_ROOT: &str = "src/app";

/// Extension of generated source files.
pub const SOURCE_EXT: &str = "ts";

/// Build the path the upstream generator writes for `name`.
///
/// The base name is hyphen-cased; the path prefix is appended to `root`
/// unchanged. With `flat` the file sits directly in that directory,
/// otherwise in a sub-folder named after the base name.
///
/// # Examples
///
/// ```
/// use ngsuffix_schematics::paths::build_path;
///
/// assert_eq!(
///     build_path("shared/UserItem2", None, "pipe", false),
///     "src/app/shared/user-item2/user-item2-pipe.ts"
/// );
/// assert_eq!(
///     build_path("role", Some("libs/auth"), "guard", true),
///     "libs/auth/role-guard.ts"
/// );
/// ```
pub fn build_path(name: &str, root: Option<&str>, suffix: &str, flat: bool) -> String {
    let name = LogicalName::parse(name);
    let dir = artifact_dir(&name, root, flat);
    join_path(
        &dir,
        &format!("{}-{}.{}", to_kebab_case(name.base_name), suffix, SOURCE_EXT),
    )
}

fn artifact_dir(name: &LogicalName<'_>, root: Option<&str>, flat: bool) -> String {
    let root = root.unwrap_or(DEFAULT_ROOT);
    let dir = join_path(root, name.path_prefix);
    if flat {
        dir
    } else {
        join_path(&dir, &to_kebab_case(name.base_name))
    }
}

/// File stems for one artifact, before and after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stems {
    /// `<hyphen-name>-<suffix>`, as written by the upstream generator
    pub generated: String,
    /// `<hyphen-name>.<suffix>`
    pub canonical: String,
}

impl Stems {
    pub fn new(base_name: &str, suffix: &str) -> Self {
        let hyphen = to_kebab_case(base_name);
        Self {
            generated: format!("{}-{}", hyphen, suffix),
            canonical: format!("{}.{}", hyphen, suffix),
        }
    }
}

/// The paths one generation run touches, computed once before the generator
/// runs and reused afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifactPaths {
    /// Directory holding the artifact
    pub directory: String,
    /// Main file as written by the generator
    pub main_file: String,
    /// Companion spec file as written by the generator
    pub spec_file: String,
    /// Main file after renaming
    pub canonical_main_file: String,
    /// Spec file after renaming
    pub canonical_spec_file: String,
}

impl GeneratedArtifactPaths {
    /// Derive all paths for `name` of a kind with file suffix `suffix`.
    pub fn new(name: &str, root: Option<&str>, suffix: &str, flat: bool) -> Self {
        let logical = LogicalName::parse(name);
        let directory = artifact_dir(&logical, root, flat);
        let stems = Stems::new(logical.base_name, suffix);

        Self::from_parts(directory, &stems)
    }

    /// Paths for a generated main file already located on disk.
    pub fn from_main_file(main_file: &str, base_name: &str, suffix: &str) -> Self {
        let main_file = normalize_path(main_file);
        let directory = match main_file.rsplit_once('/') {
            Some((dir, _)) => dir.to_string(),
            None => String::new(),
        };
        Self::from_parts(directory, &Stems::new(base_name, suffix))
    }

    fn from_parts(directory: String, stems: &Stems) -> Self {
        let file = |stem: &str, ext: &str| join_path(&directory, &format!("{}{}", stem, ext));
        Self {
            main_file: file(&stems.generated, ".ts"),
            spec_file: file(&stems.generated, ".spec.ts"),
            canonical_main_file: file(&stems.canonical, ".ts"),
            canonical_spec_file: file(&stems.canonical, ".spec.ts"),
            directory,
        }
    }
}
