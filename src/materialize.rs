use std::path::{Path, PathBuf};

use anyhow::{anyhow, ensure, Context, Result};
use derive_builder::Builder;
use fs_extra::dir::CopyOptions;
use inquire::{Confirm, InquireError};

use crate::{package_manager::PackageManager, project::ProjectName, registry::Template};

/// Everything the creation flow needs, resolved up-front by the front
/// controller. Nothing below this point reads argv or the environment.
#[derive(Builder)]
pub struct CreateOptions {
    pub name: ProjectName,
    pub template: &'static Template,
    /// Skip the confirmation when the destination already exists.
    pub overwrite: bool,
    pub package_manager: PackageManager,
    /// Root holding one directory per template identifier.
    pub templates_root: PathBuf,
    /// Destination directory, `<cwd>/<name>`.
    pub dest: PathBuf,
}

impl CreateOptions {
    /// Create a new [`CreateOptions`] builder
    #[must_use]
    pub fn builder() -> CreateOptionsBuilder {
        CreateOptionsBuilder::create_empty()
    }
}

/// Result of a materialization attempt that did not error.
#[derive(Debug, PartialEq, Eq)]
pub enum Materialized {
    Created,
    /// The user declined (or cancelled) the overwrite confirmation. Nothing
    /// on disk was touched.
    Aborted,
}

/// Copy the resolved template into the destination and customize it.
///
/// The destructive steps only run once the existence check has resolved:
/// a pre-existing destination is either confirmed away interactively or
/// waved through by `overwrite`. Past that point any failure surfaces as an
/// error and the destination may be left partially populated.
///
/// # Errors
///
/// Returns an [`Err`] if the template source tree cannot be copied, or the
/// manifest or README cannot be rewritten.
pub fn materialize(opts: &CreateOptions) -> Result<Materialized> {
    materialize_with(opts, confirm_overwrite)
}

/// Ask before clobbering a pre-existing destination. Decline and cancel
/// both answer "no".
fn confirm_overwrite(dest: &Path) -> Result<bool> {
    let confirmed = Confirm::new(&format!(
        "Directory {} already exists. Remove it and continue?",
        dest.display()
    ))
    .with_default(false)
    .prompt();

    match confirmed {
        Ok(answer) => Ok(answer),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// [`materialize`] with the overwrite confirmation injected. `confirm` runs
/// only when the destination already exists and `overwrite` was not passed;
/// a "no" answer aborts before any filesystem mutation.
pub fn materialize_with(
    opts: &CreateOptions,
    confirm: impl FnOnce(&Path) -> Result<bool>,
) -> Result<Materialized> {
    if opts.dest.exists() && !opts.overwrite && !confirm(&opts.dest)? {
        return Ok(Materialized::Aborted);
    }

    reset_dest(&opts.dest)?;

    copy_template(&opts.templates_root.join(opts.template.value), &opts.dest)?;

    if let Some(manifest) = opts.template.manifest {
        rewrite_manifest(&opts.dest.join(manifest), opts.name.as_str())
            .with_context(|| format!("failed to rewrite {manifest} for {}", opts.name))?;
    }

    write_readme(opts)?;

    Ok(Materialized::Created)
}

/// Remove the destination (a missing path is a no-op) and recreate it empty.
///
/// # Errors
///
/// Returns an [`Err`] if any IO error occurs beyond the path not existing.
pub fn reset_dest(dest: &Path) -> Result<()> {
    match std::fs::remove_dir_all(dest) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_context(|| format!("failed to remove {}", dest.display()))
        }
    }

    std::fs::create_dir_all(dest)
        .with_context(|| format!("failed to create {}", dest.display()))
}

/// Recursively copy the template source tree into the destination,
/// byte-for-byte.
///
/// # Errors
///
/// Returns an [`Err`] if the source is not a directory or the copy fails
/// part-way. The destination may be left partially populated.
pub fn copy_template(source: &Path, dest: &Path) -> Result<()> {
    ensure!(
        source.is_dir(),
        "template source {} is not a directory",
        source.display()
    );

    let options = CopyOptions::new().content_only(true).overwrite(true);

    fs_extra::dir::copy(source, dest, &options)
        .with_context(|| format!("failed to copy template from {}", source.display()))?;

    Ok(())
}

/// Overwrite the manifest's `name` field, leaving every other field and the
/// key order untouched. Output uses 2-space indentation and a trailing
/// newline.
///
/// # Errors
///
/// Returns an [`Err`] if the manifest cannot be read, is not a JSON object,
/// or cannot be written back.
pub fn rewrite_manifest(path: &Path, name: &str) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut manifest: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    manifest
        .as_object_mut()
        .with_context(|| format!("{} is not a JSON object", path.display()))?
        .insert("name".to_string(), serde_json::Value::String(name.to_string()));

    let mut out = serde_json::to_string_pretty(&manifest)?;
    out.push('\n');

    std::fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))
}

/// Render the template's README narrative for the detected package manager
/// and write it into the destination.
///
/// # Errors
///
/// Returns an [`Err`] if rendering or the write fails.
pub fn write_readme(opts: &CreateOptions) -> Result<()> {
    let mut context = tera::Context::new();
    context.insert("project", opts.name.as_str());
    context.insert(
        "install",
        opts.package_manager.install_command().unwrap_or_default(),
    );
    context.insert("run", &opts.package_manager.run_command("dev"));

    let rendered = tera::Tera::one_off(opts.template.readme, &context, false)
        .map_err(|e| anyhow!("failed to render README for {}: {e}", opts.name))?;

    std::fs::write(opts.dest.join("README.md"), rendered)
        .with_context(|| format!("failed to write README.md for {}", opts.name))
}

#[cfg(test)]
mod tests {
    use super::{copy_template, reset_dest, rewrite_manifest};

    #[test]
    fn reset_tolerates_a_missing_destination() {
        let scratch = tempfile::tempdir().unwrap();
        let dest = scratch.path().join("fresh");

        reset_dest(&dest).unwrap();

        assert!(dest.is_dir());
        assert_eq!(dest.read_dir().unwrap().count(), 0);
    }

    #[test]
    fn reset_empties_an_existing_destination() {
        let scratch = tempfile::tempdir().unwrap();
        let dest = scratch.path().join("stale");
        std::fs::create_dir_all(dest.join("nested")).unwrap();
        std::fs::write(dest.join("nested/leftover.txt"), "old").unwrap();

        reset_dest(&dest).unwrap();

        assert!(dest.is_dir());
        assert_eq!(dest.read_dir().unwrap().count(), 0);
    }

    #[test]
    fn copy_from_a_missing_source_is_an_error() {
        let scratch = tempfile::tempdir().unwrap();
        let dest = scratch.path().join("dest");
        reset_dest(&dest).unwrap();

        let err = copy_template(&scratch.path().join("nope"), &dest).unwrap_err();

        assert!(err.to_string().contains("not a directory"), "{err}");
    }

    #[test]
    fn manifest_rewrite_touches_only_the_name() {
        let scratch = tempfile::tempdir().unwrap();
        let path = scratch.path().join("package.json");
        std::fs::write(
            &path,
            r#"{
  "name": "starter",
  "private": true,
  "version": "0.0.0",
  "scripts": {
    "dev": "node --watch index.js"
  }
}
"#,
        )
        .unwrap();

        rewrite_manifest(&path, "my-app").unwrap();

        let out = std::fs::read_to_string(&path).unwrap();
        let manifest: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(manifest["name"], "my-app");
        assert_eq!(manifest["private"], true);
        assert_eq!(manifest["version"], "0.0.0");
        assert_eq!(manifest["scripts"]["dev"], "node --watch index.js");

        // Key order survives the round trip, name first.
        let keys: Vec<_> = manifest.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "private", "version", "scripts"]);

        assert!(out.ends_with('\n'));
        assert!(out.contains("  \"private\""), "2-space indentation:\n{out}");
    }

    #[test]
    fn manifest_rewrite_rejects_non_objects() {
        let scratch = tempfile::tempdir().unwrap();
        let path = scratch.path().join("package.json");
        std::fs::write(&path, "[1, 2, 3]\n").unwrap();

        assert!(rewrite_manifest(&path, "my-app").is_err());
    }
}
