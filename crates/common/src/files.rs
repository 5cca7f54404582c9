use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};
use xshell::Shell;

pub fn read_yaml_file<T>(shell: &Shell, file_path: impl AsRef<Path>) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let content = shell.read_file(&file_path)?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse YAML file {:?}", file_path.as_ref()))
}

pub fn read_toml_file<T>(shell: &Shell, file_path: impl AsRef<Path>) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let content = shell.read_file(&file_path)?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML file {:?}", file_path.as_ref()))
}

pub fn read_json_file<T>(shell: &Shell, file_path: impl AsRef<Path>) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let content = shell.read_file(&file_path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file {:?}", file_path.as_ref()))
}

pub fn save_yaml_file(
    shell: &Shell,
    file_path: impl AsRef<Path>,
    content: impl Serialize,
) -> anyhow::Result<()> {
    let data = serde_yaml::to_string(&content)?;
    shell.write_file(file_path, data)?;
    Ok(())
}

pub fn save_toml_file(
    shell: &Shell,
    file_path: impl AsRef<Path>,
    content: impl Serialize,
) -> anyhow::Result<()> {
    let data = toml::to_string(&content)?;
    shell.write_file(file_path, data)?;
    Ok(())
}

pub fn save_json_file(
    shell: &Shell,
    file_path: impl AsRef<Path>,
    content: impl Serialize,
) -> anyhow::Result<()> {
    let data = serde_json::to_string_pretty(&content)?;
    shell.write_file(file_path, data)?;
    Ok(())
}

/// Walks up from `start_dir` until a directory containing `file_name` is
/// found. Returns that directory, not the file itself.
pub fn find_file(shell: &Shell, start_dir: &Path, file_name: &str) -> anyhow::Result<PathBuf> {
    let mut dir = start_dir.to_path_buf();
    loop {
        if shell.path_exists(dir.join(file_name)) {
            return Ok(dir);
        }
        if !dir.pop() {
            anyhow::bail!("Unable to find {file_name} starting from {start_dir:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_file_walks_up() {
        let shell = Shell::new().unwrap();
        let tmp = shell.create_temp_dir().unwrap();
        shell.write_file(tmp.path().join("marker.yaml"), "a: 1\n").unwrap();
        let nested = tmp.path().join("deeply/nested/dir");
        shell.create_dir(&nested).unwrap();

        let found = find_file(&shell, &nested, "marker.yaml").unwrap();
        assert_eq!(found, tmp.path());
    }

    #[test]
    fn test_find_file_missing_fails() {
        let shell = Shell::new().unwrap();
        let tmp = shell.create_temp_dir().unwrap();
        assert!(find_file(&shell, tmp.path(), "does-not-exist.yaml").is_err());
    }
}
