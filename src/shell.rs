//! Shell integration: the wrapper function and its profile installation.
//!
//! `kjx` cannot export `KUBECONFIG` into the invoking shell, so a shell
//! function wraps the binary, passes `--output-config` pointing at a temp
//! file, and exports whatever path the binary wrote there.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Marker comment used to detect an existing install in a profile file.
pub const MARKER: &str = "kjx shell function";

/// Renders the wrapper function around the given binary path.
pub fn integration_script(binary_path: &str) -> String {
    format!(
        r#"# {marker}
kjx() {{
    local temp_file=$(mktemp)
    local kjx_binary="{binary}"

    # Run kjx with output-config and pass all arguments
    if command "$kjx_binary" --output-config "$temp_file" "$@"; then
        if [ -f "$temp_file" ] && [ -s "$temp_file" ]; then
            local new_kubeconfig=$(cat "$temp_file")
            if [ -n "$new_kubeconfig" ]; then
                export KUBECONFIG="$new_kubeconfig"
                echo "KUBECONFIG exported: $KUBECONFIG"
            fi
        fi
    fi

    rm -f "$temp_file" 2>/dev/null
}}"#,
        marker = MARKER,
        binary = binary_path,
    )
}

/// Picks the profile file for a `$SHELL` value. Only bash and zsh are
/// supported; anything else gets a manual-install message instead.
pub fn profile_path(shell: &str, home: &Path) -> Option<PathBuf> {
    if shell.contains("zsh") {
        Some(home.join(".zshrc"))
    } else if shell.contains("bash") {
        Some(home.join(".bashrc"))
    } else {
        None
    }
}

/// Resolves the profile file from the environment.
pub fn detect_profile() -> Result<PathBuf> {
    let shell = env::var("SHELL").unwrap_or_default();
    let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
    profile_path(&shell, &home).ok_or(Error::UnsupportedShell)
}

/// Outcome of a profile install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    AlreadyInstalled,
}

/// Appends the wrapper function to `profile`, creating the file if needed.
/// Idempotent: a profile already containing [`MARKER`] is left alone.
pub fn install_into(profile: &Path, script: &str) -> Result<InstallOutcome> {
    if profile.exists() {
        let content = fs::read_to_string(profile).map_err(|e| Error::io(profile, e))?;
        if content.contains(MARKER) {
            return Ok(InstallOutcome::AlreadyInstalled);
        }
    }

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(profile)
        .map_err(|e| Error::io(profile, e))?;
    writeln!(file, "\n{}", script).map_err(|e| Error::io(profile, e))?;

    Ok(InstallOutcome::Installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_embeds_binary_and_marker() {
        let script = integration_script("/usr/local/bin/kjx");
        assert!(script.contains(MARKER));
        assert!(script.contains(r#"kjx_binary="/usr/local/bin/kjx""#));
        assert!(script.contains("--output-config"));
        assert!(script.contains("export KUBECONFIG"));
    }

    #[test]
    fn test_profile_path_per_shell() {
        let home = Path::new("/home/u");
        assert_eq!(
            profile_path("/bin/zsh", home),
            Some(PathBuf::from("/home/u/.zshrc"))
        );
        assert_eq!(
            profile_path("/usr/bin/bash", home),
            Some(PathBuf::from("/home/u/.bashrc"))
        );
        assert_eq!(profile_path("/bin/fish", home), None);
    }

    #[test]
    fn test_install_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join(".bashrc");
        let script = integration_script("kjx");

        assert_eq!(
            install_into(&profile, &script).unwrap(),
            InstallOutcome::Installed
        );
        let first = fs::read_to_string(&profile).unwrap();
        assert!(first.contains(MARKER));

        assert_eq!(
            install_into(&profile, &script).unwrap(),
            InstallOutcome::AlreadyInstalled
        );
        assert_eq!(fs::read_to_string(&profile).unwrap(), first);
    }

    #[test]
    fn test_install_appends_to_existing_profile() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join(".zshrc");
        fs::write(&profile, "export EDITOR=vi\n").unwrap();

        install_into(&profile, &integration_script("kjx")).unwrap();

        let content = fs::read_to_string(&profile).unwrap();
        assert!(content.starts_with("export EDITOR=vi\n"));
        assert!(content.contains(MARKER));
    }
}
