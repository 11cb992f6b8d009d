//! Hook installation into `.git/hooks`.

use std::fs;
use std::path::PathBuf;

use git2::Repository;

use crate::error::InstallError;

/// Install the `prepare-commit-msg` hook for a repository.
///
/// Writes a small shell shim that execs the currently running subnote
/// binary, so the hook keeps working from any directory git invokes it in.
/// An existing hook is only overwritten with `force`. Returns the path of
/// the installed hook.
pub fn install_hook(repo: &Repository, force: bool) -> Result<PathBuf, InstallError> {
    let hooks_dir = repo.path().join("hooks");
    fs::create_dir_all(&hooks_dir).map_err(InstallError::WriteHook)?;

    let hook_path = hooks_dir.join("prepare-commit-msg");
    if hook_path.exists() && !force {
        return Err(InstallError::HookExists(hook_path));
    }

    let exe = std::env::current_exe().map_err(InstallError::CurrentExe)?;
    let script = format!("#!/bin/sh\nexec '{}' hook \"$@\"\n", exe.display());

    fs::write(&hook_path, script).map_err(InstallError::WriteHook)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(&hook_path)
            .map_err(InstallError::WriteHook)?
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms).map_err(InstallError::WriteHook)?;
    }

    Ok(hook_path)
}
