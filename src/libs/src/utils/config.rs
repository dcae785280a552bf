use std::path::{Path, PathBuf};

pub use config_sys::ConfigError;
use config_sys::{Config, Environment, File};
use serde::de::DeserializeOwned;

const CONFIG_FOLDER_PATH_DEFAULT: &str = "./config/";
const CONFIG_FILE_LOCAL_PREFIX: &str = "local_";
// This makes it so "<APP_NAME>_DEVICES__0__NAME overrides devices[0].name
const CONFIG_ENV_SEPARATOR: &str = "__";
const CONFIG_ENV_PREFIX_SEPARATOR: &str = "_";

#[derive(Debug, Clone, Copy)]
pub enum FileFormat {
    YAML,
}

impl FileFormat {
    pub fn as_str(&self) -> &str {
        match self {
            FileFormat::YAML => "yaml",
        }
    }
}

/// Loads `T` from, lowest priority first:
/// `./config/<app>.<ext>`, `./config/local_<app>.<ext>`,
/// `<APP>_*` environment variables, then `extra_path` if given.
pub fn setup_config<T>(
    app_name: &str,
    file_format: FileFormat,
    extra_path: Option<&PathBuf>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    setup_config_in(
        Path::new(CONFIG_FOLDER_PATH_DEFAULT),
        app_name,
        file_format,
        extra_path,
    )
}

/// Same as [`setup_config`] with an explicit config folder.
pub fn setup_config_in<T>(
    folder: &Path,
    app_name: &str,
    file_format: FileFormat,
    extra_path: Option<&PathBuf>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut s = Config::builder()
        .add_source(
            File::from(folder.join(format!("{}.{}", app_name, file_format.as_str())))
                .required(false),
        )
        .add_source(
            File::from(folder.join(format!(
                "{}{}.{}",
                CONFIG_FILE_LOCAL_PREFIX,
                app_name,
                file_format.as_str()
            )))
            .required(false),
        )
        .add_source(
            Environment::with_prefix(app_name.to_uppercase().as_str())
                .prefix_separator(CONFIG_ENV_PREFIX_SEPARATOR)
                .separator(CONFIG_ENV_SEPARATOR),
        );

    if let Some(extra_path) = extra_path {
        s = s.add_source(File::from(extra_path.as_path()));
    }

    s.build()?.try_deserialize::<T>()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, Default)]
    #[serde(default)]
    struct Sample {
        name: String,
        retries: u32,
    }

    // Unique app names keep these tests clear of each other's env vars.
    #[test]
    fn layered_files_override_in_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cfgorder.yaml"), "name: base\nretries: 1\n").unwrap();
        fs::write(dir.path().join("local_cfgorder.yaml"), "retries: 5\n").unwrap();

        let sample: Sample = setup_config_in(dir.path(), "cfgorder", FileFormat::YAML, None).unwrap();
        assert_eq!(sample.name, "base");
        assert_eq!(sample.retries, 5);
    }

    #[test]
    fn extra_file_wins_over_folder() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cfgextra.yaml"), "name: base\n").unwrap();
        let extra = dir.path().join("custom.yaml");
        fs::write(&extra, "name: custom\n").unwrap();

        let sample: Sample =
            setup_config_in(dir.path(), "cfgextra", FileFormat::YAML, Some(&extra)).unwrap();
        assert_eq!(sample.name, "custom");
    }

    #[test]
    fn env_overrides_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cfgenv.yaml"), "name: base\n").unwrap();
        std::env::set_var("CFGENV_NAME", "from-env");

        let sample: Sample = setup_config_in(dir.path(), "cfgenv", FileFormat::YAML, None).unwrap();
        std::env::remove_var("CFGENV_NAME");
        assert_eq!(sample.name, "from-env");
    }

    #[test]
    fn missing_extra_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let extra = dir.path().join("nope.yaml");
        let res: Result<Sample, _> =
            setup_config_in(dir.path(), "cfgmissing", FileFormat::YAML, Some(&extra));
        assert!(res.is_err());
    }
}
