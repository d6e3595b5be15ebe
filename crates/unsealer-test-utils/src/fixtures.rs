// SPDX-FileCopyrightText: 2026 Unsealer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! On-disk fixtures: key files and a fake vault CLI.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory holding a key file.
///
/// The directory is removed when the fixture is dropped.
pub struct KeyFileFixture {
    dir: TempDir,
    path: PathBuf,
}

impl KeyFileFixture {
    /// Write `contents` verbatim to `keys.txt`.
    pub fn with_contents(contents: &str) -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("keys.txt");
        std::fs::write(&path, contents)?;
        Ok(Self { dir, path })
    }

    /// Write one `Unseal Key <n>: <value>` line per key, as `vault operator init` prints them.
    pub fn with_keys(keys: &[&str]) -> std::io::Result<Self> {
        Self::with_contents(&init_output(keys))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

/// Render key shares the way `vault operator init` does, root token included.
pub fn init_output(keys: &[&str]) -> String {
    let mut out = String::new();
    for (i, key) in keys.iter().enumerate() {
        out.push_str(&format!("Unseal Key {}: {key}\n", i + 1));
    }
    out.push_str("\nInitial Root Token: hvs.test-root-token\n\n");
    out.push_str(&format!(
        "Vault initialized with {} key shares and a key threshold of 3.\n",
        keys.len()
    ));
    out
}

/// Write an executable fake vault CLI into `dir`.
///
/// The script appends every argument list to `calls.log` in the same
/// directory. `operator unseal <key>` exits 0 when `<key>` is in `accepted`;
/// otherwise it prints `sealed: too few keys` to stderr and exits 2.
#[cfg(unix)]
pub fn fake_vault(dir: &Path, accepted: &[&str]) -> std::io::Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let script_path = dir.join("vault");
    let log_path = calls_log(dir);
    let cases: String = accepted
        .iter()
        .map(|k| format!("    {k}) exit 0 ;;\n"))
        .collect();

    let script = format!(
        "#!/bin/sh\n\
         echo \"$@\" >> '{log}'\n\
         if [ \"$1\" != operator ] || [ \"$2\" != unseal ]; then\n\
         \x20   echo \"unexpected command: $*\" >&2\n\
         \x20   exit 64\n\
         fi\n\
         case \"$3\" in\n\
         {cases}\
         esac\n\
         echo 'sealed: too few keys' >&2\n\
         exit 2\n",
        log = log_path.display(),
    );

    std::fs::write(&script_path, script)?;
    std::fs::set_permissions(&script_path, std::fs::Permissions::from_mode(0o755))?;
    Ok(script_path)
}

/// Path of the call log written by [`fake_vault`].
pub fn calls_log(dir: &Path) -> PathBuf {
    dir.join("calls.log")
}

/// Argument lines recorded by [`fake_vault`], or empty if it never ran.
pub fn recorded_calls(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(calls_log(dir))
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
