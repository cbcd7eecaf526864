//! Hyphen-joined to dot-joined file renames.

use eyre::{Result, WrapErr};
use ngsuffix_core::Tree;
use serde::Serialize;
use tracing::{debug, info};

use crate::paths::{GeneratedArtifactPaths, Stems};

/// A file moved by [`rename_to_canonical`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rename {
    pub from: String,
    pub to: String,
}

/// Move the generated main and spec files to their canonical names.
///
/// `generated_path` is the main file as written by the generator
/// (`<dir>/<hyphen>-<suffix>.ts`); only its directory is used, the stems are
/// rebuilt from `base_name` and `suffix`. Each move creates the new path and
/// then deletes the old one. Inside the spec file, every `./<old stem>`
/// reference is rewritten to `./<new stem>`.
///
/// Missing files are skipped, so running this on an already canonical tree
/// changes nothing.
pub fn rename_to_canonical(
    tree: &mut Tree,
    generated_path: &str,
    base_name: &str,
    suffix: &str,
) -> Result<Vec<Rename>> {
    let paths = GeneratedArtifactPaths::from_main_file(generated_path, base_name, suffix);
    let stems = Stems::new(base_name, suffix);
    let mut renames = Vec::new();

    if let Some(content) = tree.read(&paths.main_file)? {
        renames.push(move_file(
            tree,
            &paths.main_file,
            &paths.canonical_main_file,
            content,
        )?);
    } else {
        debug!(path = %paths.main_file, "no main file to rename");
    }

    if let Some(content) = tree.read(&paths.spec_file)? {
        let content = rewrite_relative_imports(&content, &stems);
        renames.push(move_file(
            tree,
            &paths.spec_file,
            &paths.canonical_spec_file,
            content,
        )?);
    }

    Ok(renames)
}

fn move_file(tree: &mut Tree, from: &str, to: &str, content: String) -> Result<Rename> {
    tree.create(to, content)
        .wrap_err_with(|| format!("failed to rename {} to {}", from, to))?;
    tree.delete(from)?;
    info!(from, to, "renamed");

    Ok(Rename {
        from: from.to_string(),
        to: to.to_string(),
    })
}

/// Replace every `./<generated stem>` with `./<canonical stem>`.
pub fn rewrite_relative_imports(content: &str, stems: &Stems) -> String {
    content.replace(
        &format!("./{}", stems.generated),
        &format!("./{}", stems.canonical),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAIN: &str = "src/app/my-pipe/my-pipe-pipe.ts";
    const SPEC: &str = "src/app/my-pipe/my-pipe-pipe.spec.ts";

    #[test]
    fn test_renames_main_file() {
        let mut tree = Tree::empty();
        tree.create(MAIN, "export class MyPipe {}").unwrap();

        let renames = rename_to_canonical(&mut tree, MAIN, "my-pipe", "pipe").unwrap();

        assert!(tree.exists("src/app/my-pipe/my-pipe.pipe.ts"));
        assert!(!tree.exists(MAIN));
        assert_eq!(
            renames,
            vec![Rename {
                from: MAIN.to_string(),
                to: "src/app/my-pipe/my-pipe.pipe.ts".to_string(),
            }]
        );
    }

    #[test]
    fn test_renames_spec_and_rewrites_imports() {
        let mut tree = Tree::empty();
        tree.create(MAIN, "export class MyPipe {}").unwrap();
        tree.create(
            SPEC,
            "import { MyPipe } from './my-pipe-pipe';\n\ndescribe('MyPipe', () => {});\n",
        )
        .unwrap();

        rename_to_canonical(&mut tree, MAIN, "my-pipe", "pipe").unwrap();

        assert!(!tree.exists(SPEC));
        let spec = tree
            .read("src/app/my-pipe/my-pipe.pipe.spec.ts")
            .unwrap()
            .unwrap();
        assert!(spec.contains("from './my-pipe.pipe'"));
        assert!(!spec.contains("./my-pipe-pipe"));
    }

    #[test]
    fn test_missing_files_noop() {
        let mut tree = Tree::empty();
        let renames = rename_to_canonical(
            &mut tree,
            "src/app/non-existent/non-existent-pipe.ts",
            "non-existent",
            "pipe",
        )
        .unwrap();

        assert!(renames.is_empty());
        assert!(!tree.exists("src/app/non-existent/non-existent.pipe.ts"));
        assert!(tree.actions().is_empty());
    }

    #[test]
    fn test_spec_without_main() {
        let mut tree = Tree::empty();
        tree.create(SPEC, "test content").unwrap();

        let renames = rename_to_canonical(&mut tree, MAIN, "my-pipe", "pipe").unwrap();

        assert_eq!(renames.len(), 1);
        assert!(tree.exists("src/app/my-pipe/my-pipe.pipe.spec.ts"));
    }

    #[test]
    fn test_mixed_case_base_name() {
        let mut tree = Tree::empty();
        tree.create(
            "src/app/my-custom/my-custom-guard.ts",
            "export const myCustomGuard = () => true;",
        )
        .unwrap();

        rename_to_canonical(
            &mut tree,
            "src/app/my-custom/my-custom-guard.ts",
            "MyCustom",
            "guard",
        )
        .unwrap();

        assert!(tree.exists("src/app/my-custom/my-custom.guard.ts"));
    }

    #[test]
    fn test_idempotent() {
        let mut tree = Tree::empty();
        tree.create(MAIN, "export class MyPipe {}").unwrap();
        tree.create(SPEC, "import { MyPipe } from './my-pipe-pipe';").unwrap();

        rename_to_canonical(&mut tree, MAIN, "my-pipe", "pipe").unwrap();
        let files = tree.files();

        let second = rename_to_canonical(&mut tree, MAIN, "my-pipe", "pipe").unwrap();

        assert!(second.is_empty());
        assert_eq!(tree.files(), files);
    }

    #[test]
    fn test_existing_target_is_an_error() {
        let mut tree = Tree::empty();
        tree.create(MAIN, "new").unwrap();
        tree.create("src/app/my-pipe/my-pipe.pipe.ts", "old").unwrap();

        let err = rename_to_canonical(&mut tree, MAIN, "my-pipe", "pipe").unwrap_err();
        assert!(err.to_string().contains("failed to rename"));
    }

    #[test]
    fn test_rewrite_relative_imports() {
        let stems = Stems::new("role", "guard");
        let content = "import { roleGuard } from './role-guard';\njest.mock('./role-guard');\n";
        assert_eq!(
            rewrite_relative_imports(content, &stems),
            "import { roleGuard } from './role.guard';\njest.mock('./role.guard');\n"
        );
    }
}
