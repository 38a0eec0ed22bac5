//! Checks that the unit test tree mirrors the public module tree of the crate

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::{Path, PathBuf};

    /// A module declared with `pub mod` somewhere below `src/lib.rs`
    struct Module {
        /// Path segments from the crate root, e.g. `["spatial", "grid"]`
        segments: Vec<String>,
        /// File holding the module body
        source: PathBuf,
        /// Whether the module is a directory with its own `mod.rs`
        branch: bool,
    }

    impl Module {
        fn rust_path(&self) -> String {
            self.segments.join("::")
        }

        fn unit_file(&self) -> PathBuf {
            let mut path = PathBuf::from("tests/unit");
            path.extend(&self.segments);
            if self.branch {
                path.push("mod.rs");
            } else {
                path.set_extension("rs");
            }
            path
        }
    }

    fn read(path: &Path) -> String {
        match fs::read_to_string(path) {
            Ok(text) => text,
            Err(error) => panic!("Failed to read {}: {error}", path.display()),
        }
    }

    /// Names declared with `<keyword> name;` at the top level of a file
    fn declared_modules(text: &str, keyword: &str) -> BTreeSet<String> {
        text.lines()
            .filter_map(|line| line.strip_prefix(keyword))
            .filter_map(|rest| rest.trim().strip_suffix(';'))
            .map(str::to_owned)
            .collect()
    }

    fn collect_modules(dir: &Path, file: &Path, prefix: &[String], modules: &mut Vec<Module>) {
        for name in declared_modules(&read(file), "pub mod ") {
            let mut segments = prefix.to_vec();
            segments.push(name.clone());
            let nested = dir.join(&name).join("mod.rs");
            if nested.exists() {
                collect_modules(&dir.join(&name), &nested, &segments, modules);
                modules.push(Module {
                    segments,
                    source: nested,
                    branch: true,
                });
            } else {
                modules.push(Module {
                    segments,
                    source: dir.join(format!("{name}.rs")),
                    branch: false,
                });
            }
        }
    }

    fn public_modules() -> Vec<Module> {
        let mut modules = Vec::new();
        collect_modules(Path::new("src"), Path::new("src/lib.rs"), &[], &mut modules);
        assert!(!modules.is_empty(), "src/lib.rs declares no public modules");
        modules
    }

    fn unit_files(dir: &Path, found: &mut BTreeSet<PathBuf>) {
        let Ok(entries) = fs::read_dir(dir) else {
            panic!("Failed to read {}", dir.display());
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                unit_files(&path, found);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                found.insert(path);
            }
        }
    }

    /// True when `text` names `path` as a whole path prefix, not as part of a longer segment
    fn mentions_path(text: &str, path: &str) -> bool {
        text.match_indices(path).any(|(start, matched)| {
            text[start + matched.len()..]
                .chars()
                .next()
                .is_none_or(|next| !(next.is_alphanumeric() || next == '_'))
        })
    }

    /// False for modules made only of `impl` blocks on types defined elsewhere
    fn defines_public_items(source: &str) -> bool {
        source.lines().any(|line| {
            line.starts_with("pub ") && !line.starts_with("pub mod ") && !line.starts_with("pub use ")
        })
    }

    // Tests every public leaf module against the unit tree
    // Verified by looking for `tests/unit/<module path>.rs`
    #[test]
    fn test_every_public_module_has_a_unit_file() {
        let missing: Vec<String> = public_modules()
            .iter()
            .filter(|module| !module.branch && !module.unit_file().exists())
            .map(|module| format!("{} ({})", module.rust_path(), module.unit_file().display()))
            .collect();

        assert!(missing.is_empty(), "Modules without unit tests:\n{}", missing.join("\n"));
    }

    // Tests the unit tree has no files for modules that no longer exist
    // Verified by mapping every unit file back to a declared module
    #[test]
    fn test_every_unit_file_mirrors_a_module() {
        let expected: BTreeSet<PathBuf> = public_modules().iter().map(Module::unit_file).collect();
        let mut found = BTreeSet::new();
        unit_files(Path::new("tests/unit"), &mut found);
        found.remove(Path::new("tests/unit/main.rs"));

        let orphans: Vec<String> = found
            .difference(&expected)
            .map(|path| path.display().to_string())
            .collect();

        assert!(orphans.is_empty(), "Unit files without a source module:\n{}", orphans.join("\n"));
    }

    // Tests each unit file runs tests against its own module
    // Verified by requiring #[test] and an import through `slotgrid::<module path>`
    #[test]
    fn test_unit_files_exercise_their_module() {
        let mut failures = Vec::new();

        for module in public_modules().iter().filter(|module| !module.branch) {
            let unit = module.unit_file();
            if !unit.exists() {
                continue;
            }
            let text = read(&unit);
            if !text.contains("#[test]") {
                failures.push(format!("{}: no #[test] functions", unit.display()));
            }

            let own_path = format!("slotgrid::{}", module.rust_path());
            let parent_path = format!("slotgrid::{}", module.segments[..module.segments.len() - 1].join("::"));
            let reaches_module = mentions_path(&text, &own_path)
                || (!defines_public_items(&read(&module.source)) && mentions_path(&text, &parent_path));
            if !reaches_module {
                failures.push(format!("{}: does not import {own_path}", unit.display()));
            }
        }

        assert!(failures.is_empty(), "Unit files not exercising their module:\n{}", failures.join("\n"));
    }

    // Tests the unit tree declares the same children as the source tree
    // Verified by comparing `mod` lines of main.rs and each mod.rs with `pub mod` lines in src
    #[test]
    fn test_unit_tree_declares_source_modules() {
        let mut branches = vec![(PathBuf::from("src/lib.rs"), PathBuf::from("tests/unit/main.rs"))];
        branches.extend(
            public_modules()
                .iter()
                .filter(|module| module.branch)
                .map(|module| (module.source.clone(), module.unit_file())),
        );

        for (source, unit) in branches {
            assert!(unit.exists(), "Missing {} for {}", unit.display(), source.display());
            let declared = declared_modules(&read(&source), "pub mod ");
            let mirrored = declared_modules(&read(&unit), "mod ");
            assert_eq!(
                declared,
                mirrored,
                "{} and {} declare different modules",
                source.display(),
                unit.display()
            );
        }
    }

    // Tests integration test files beside the unit tree
    // Verified by requiring at least one #[test] in each tests/*.rs
    #[test]
    fn test_integration_files_have_tests() {
        let Ok(entries) = fs::read_dir("tests") else {
            panic!("Failed to read tests directory");
        };
        let empty: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
            .filter(|path| !read(path).contains("#[test]"))
            .map(|path| path.display().to_string())
            .collect();

        assert!(empty.is_empty(), "Integration files without tests:\n{}", empty.join("\n"));
    }
}
