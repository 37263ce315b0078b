use std::{
    convert::TryFrom, fs::read, io::Error as IoError, path::PathBuf, time::Duration,
};

use argh::FromArgs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use toml::{de::Error as TomlError, from_slice};

#[cfg(feature = "gctts")]
use crate::gctts::config::GoogleCloudTextToSpeechConfig;

/// Configuration, shared between tests.
#[cfg(test)]
pub static TEST_CONFIG: once_cell::sync::Lazy<Config> = once_cell::sync::Lazy::new(|| Config {
    driver: None,
    catalog_ttl: 60,
    catalog_forever: false,
    catalog_store: None,
    output: PathBuf::from("output.mp3"),
    default_text: default_text(),
    #[cfg(feature = "gctts")]
    gctts_config: None,
});

const fn default_catalog_ttl() -> u64 {
    60 * 60
}

fn default_output() -> PathBuf {
    PathBuf::from("output.mp3")
}

fn default_text() -> String {
    String::from("Hello world!")
}

fn default_config_path() -> PathBuf {
    PathBuf::from("./tts-studio.toml")
}

/// Preferred speech backend.
#[derive(Serialize, Deserialize)]
pub enum SpeechDriver {
    /// Google Cloud Text-to-Speech driver
    #[cfg(feature = "gctts")]
    #[serde(rename = "google")]
    GoogleCloudTextToSpeech,
}

/// Errors, that may happen during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config was not found using specified path (or using a default one).
    #[error("Config file ({0}) cannot be loaded: {1}")]
    ConfigNotFound(PathBuf, IoError),

    /// File by provided path does not contain a valid configuration.
    #[error("Malformed config file: {0}")]
    MalformedConfig(#[from] TomlError),
}

/// Synthesize speech with a cloud text-to-speech service.
#[derive(FromArgs)]
pub struct Cli {
    /// path to configuration file
    #[argh(default = "default_config_path()", option)]
    pub config: PathBuf,

    /// action to execute.
    #[argh(subcommand)]
    pub command: Command,
}

/// Available CLI actions.
#[derive(FromArgs)]
#[argh(subcommand)]
pub enum Command {
    /// List locales.
    Languages(LanguagesCommand),
    /// List voices of a locale.
    Voices(VoicesCommand),
    /// Synthesize a single text.
    Synthesize(SynthesizeCommand),
    /// Interactive session.
    Session(SessionCommand),
}

/// List locales supported by available voices.
#[derive(FromArgs)]
#[argh(subcommand, name = "languages")]
pub struct LanguagesCommand {
    /// ignore cached voice catalog
    #[argh(switch)]
    pub refresh: bool,
}

/// List voices, that support a locale.
#[derive(FromArgs)]
#[argh(subcommand, name = "voices")]
pub struct VoicesCommand {
    /// locale to list voices for, for example en-US
    #[argh(option, short = 'l')]
    pub language: String,

    /// print voices as JSON
    #[argh(switch)]
    pub json: bool,

    /// ignore cached voice catalog
    #[argh(switch)]
    pub refresh: bool,
}

/// Synthesize text and save resulting MP3.
#[derive(FromArgs)]
#[argh(subcommand, name = "synthesize")]
pub struct SynthesizeCommand {
    /// locale to synthesize text in
    #[argh(option, short = 'l')]
    pub language: String,

    /// voice name or voice label, as printed by `voices`
    #[argh(option, short = 'v')]
    pub voice: String,

    /// text to synthesize, configured default text is used if omitted
    #[argh(option, short = 't')]
    pub text: Option<String>,

    /// output file, configured output file is used if omitted
    #[argh(option, short = 'o')]
    pub output: Option<PathBuf>,

    /// ignore cached voice catalog
    #[argh(switch)]
    pub refresh: bool,
}

/// Pick language, voice and text interactively.
#[derive(FromArgs)]
#[argh(subcommand, name = "session")]
pub struct SessionCommand {}

/// TOML application configuration.
#[derive(Serialize, Deserialize)]
pub struct Config {
    /// Speech backend to be used.
    ///
    /// [`None`] by default.
    driver: Option<SpeechDriver>,

    /// Voice catalog validity window in seconds.
    #[serde(default = "default_catalog_ttl")]
    catalog_ttl: u64,

    /// Keep voice catalog for the whole process lifetime, ignoring `catalog_ttl`.
    #[serde(default)]
    catalog_forever: bool,

    /// JSON file, that keeps voice catalog between runs.
    catalog_store: Option<PathBuf>,

    /// File to write synthesized audio to.
    #[serde(default = "default_output")]
    output: PathBuf,

    /// Text, that is used if user didn't provide any.
    #[serde(default = "default_text")]
    default_text: String,

    /// Google Cloud Text-to-Speech configuration.
    #[cfg(feature = "gctts")]
    #[serde(rename = "gctts")]
    gctts_config: Option<GoogleCloudTextToSpeechConfig>,
}

// We can use sync FS API to load config, as there are no other tasks
// to block from executing.
impl TryFrom<&Cli> for Config {
    type Error = ConfigError;

    fn try_from(value: &Cli) -> Result<Self, Self::Error> {
        Ok(from_slice(&read(&value.config).map_err(|e| {
            ConfigError::ConfigNotFound(value.config.clone(), e)
        })?)?)
    }
}

impl Config {
    /// Get configured speech backend.
    ///
    /// [`None`], if no backend was configured.
    pub fn driver(&self) -> &Option<SpeechDriver> {
        &self.driver
    }

    /// Get voice catalog validity window.
    ///
    /// [`None`] means that catalog never expires.
    pub fn catalog_ttl(&self) -> Option<Duration> {
        if self.catalog_forever {
            None
        } else {
            Some(Duration::from_secs(self.catalog_ttl))
        }
    }

    /// Get voice catalog store path, if persistent catalog is enabled.
    pub fn catalog_store(&self) -> &Option<PathBuf> {
        &self.catalog_store
    }

    /// Get default synthesized audio path.
    pub fn output(&self) -> &PathBuf {
        &self.output
    }

    /// Get text, that is synthesized if user didn't provide one.
    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    /// Get Google Cloud Text-to-Speech configuration.
    ///
    /// Note that driver selection config, and the driver config itself are separate entities.
    #[cfg(feature = "gctts")]
    pub fn gctts_config(&self) -> &Option<GoogleCloudTextToSpeechConfig> {
        &self.gctts_config
    }
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, time::Duration};

    use toml::from_str;

    use super::{Config, TEST_CONFIG};

    #[test]
    fn applies_defaults() {
        let config = from_str::<Config>("").unwrap();

        assert!(config.driver().is_none());
        assert_eq!(config.catalog_ttl(), Some(Duration::from_secs(3600)));
        assert!(config.catalog_store().is_none());
        assert_eq!(config.output(), &PathBuf::from("output.mp3"));
        assert_eq!(config.default_text(), "Hello world!");
    }

    #[test]
    fn catalog_may_never_expire() {
        let config = from_str::<Config>("catalog_forever = true").unwrap();

        assert_eq!(config.catalog_ttl(), None);
        assert_eq!(TEST_CONFIG.catalog_ttl(), Some(Duration::from_secs(60)));
    }

    #[cfg(feature = "gctts")]
    #[test]
    fn reads_google_section() {
        let config = from_str::<Config>(
            r#"
            driver = "google"
            catalog_ttl = 0
            catalog_store = "voices.json"

            [gctts]
            service_account_path = "key.json"
            "#,
        )
        .unwrap();

        assert!(config.driver().is_some());
        assert_eq!(config.catalog_ttl(), Some(Duration::from_secs(0)));
        assert_eq!(config.catalog_store(), &Some(PathBuf::from("voices.json")));
        assert_eq!(
            config.gctts_config().as_ref().unwrap().service_account_path,
            PathBuf::from("key.json")
        );
    }
}
