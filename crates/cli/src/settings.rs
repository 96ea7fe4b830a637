// crates/cli/src/settings.rs
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use advcounter_shared_kernel::{ConfigError, ConfigResult};
use ini::Ini;

/// Section holding every advcounter option.
pub const DEFAULT_SECTION: &str = "default";

/// Port for reading `section.key` values from a configuration store.
pub trait ConfigProvider {
    fn get(&self, section: &str, key: &str) -> ConfigResult<String>;
}

/// INI-backed configuration, e.g.
///
/// ```ini
/// [default]
/// driver = stattext
/// log_file = advcounter.log
/// log_level = warning
/// ```
#[derive(Debug, Clone)]
pub struct IniConfig {
    ini: Ini,
}

impl IniConfig {
    /// Loads `path`. A missing file is treated as an empty configuration, so
    /// the first lookup reports the missing section.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        match Ini::load_from_file(path) {
            Ok(ini) => Ok(Self { ini }),
            Err(ini::Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
                log::debug!("config file {} not found, using empty config", path.display());
                Ok(Self { ini: Ini::new() })
            }
            Err(e) => Err(ConfigError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }

    pub fn parse(text: &str) -> ConfigResult<Self> {
        Ini::load_from_str(text)
            .map(|ini| Self { ini })
            .map_err(|e| ConfigError::Parse {
                path: PathBuf::from("<string>"),
                reason: e.to_string(),
            })
    }
}

impl ConfigProvider for IniConfig {
    fn get(&self, section: &str, key: &str) -> ConfigResult<String> {
        let props = self
            .ini
            .section(Some(section))
            .ok_or_else(|| ConfigError::MissingSection {
                section: section.to_string(),
            })?;

        // キーは大文字小文字を区別しない
        props
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.to_string())
            .ok_or_else(|| ConfigError::MissingOption {
                section: section.to_string(),
                key: key.to_string(),
            })
    }
}
