//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{path::Path, process::Command};

use eyre::{Result, eyre};

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Verifies that generated code type-checks.
pub trait CompileChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// TypeScript checker running `tsc --noEmit` over every `.ts` file in the
/// directory tree (no `tsconfig.json` required).
pub struct TypeScriptChecker;

impl CompileChecker for TypeScriptChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let mut files = Vec::new();
        collect_ts_files(dir, dir, &mut files).map_err(|e| CompileError {
            message: format!("Failed to list generated files: {}", e),
            output: String::new(),
        })?;

        let output = Command::new("npx")
            .args(["tsc", "--noEmit", "--strict", "--skipLibCheck"])
            .args(&files)
            .current_dir(dir)
            .output()
            .map_err(|e| CompileError {
                message: format!("Failed to run tsc: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            Err(CompileError {
                message: "tsc --noEmit failed".to_string(),
                output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
            })
        }
    }
}

fn collect_ts_files(root: &Path, dir: &Path, files: &mut Vec<String>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_ts_files(root, &path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "ts") {
            let relative = path.strip_prefix(root).unwrap_or(&path);
            files.push(relative.display().to_string());
        }
    }
    files.sort();
    Ok(())
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        if diff.is_empty() {
            diff.push_str("  (trailing newline differs)\n");
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Generate code into a temporary directory and return it.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

/// Run a generator into a temporary directory and type-check the result.
pub fn assert_generates_valid_code<C>(
    generate: impl FnOnce(&Path) -> Result<()>,
    checker: &C,
) -> Result<()>
where
    C: CompileChecker,
{
    let temp_dir = generate_to_temp(generate)?;

    checker.check(temp_dir.path()).map_err(|e| {
        eprintln!("Generated files in {}:", temp_dir.path().display());
        let mut files = Vec::new();
        if collect_ts_files(temp_dir.path(), temp_dir.path(), &mut files).is_ok() {
            for file in files {
                eprintln!("  {}", file);
            }
        }
        eyre!("Compile check failed: {}", e)
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_assert_content_eq_passes() {
        assert_content_eq("a\nb\n", "a\nb\n");
    }

    #[test]
    #[should_panic(expected = "Line 2")]
    fn test_assert_content_eq_reports_line() {
        assert_content_eq("a\nb\n", "a\nc\n");
    }

    #[test]
    fn test_generate_to_temp_and_collect() {
        let dir = generate_to_temp(|path| {
            fs::create_dir_all(path.join("enums"))?;
            fs::write(path.join("item.ts"), "export interface Item {}\n")?;
            fs::write(path.join("enums/color.ts"), "export enum Color {}\n")?;
            fs::write(path.join("notes.txt"), "")?;
            Ok(())
        })
        .unwrap();

        let mut files = Vec::new();
        collect_ts_files(dir.path(), dir.path(), &mut files).unwrap();
        assert_eq!(files, vec!["enums/color.ts", "item.ts"]);
    }
}
