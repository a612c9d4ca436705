use crate::cli::Cli;
use crate::config::Config;
use crate::output::{ColorMode, OutputFormat, RenderOptions};
use crate::report::Severity;

/// Effective run settings: CLI flags over the config file over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Settings {
    pub threshold: Severity,
    pub format: OutputFormat,
    pub recursive: bool,
    pub cmode: bool,
    pub full_paths: bool,
    /// Config patterns first, then CLI patterns.
    pub exclude: Vec<String>,
    pub disabled_rules: Vec<String>,
    pub color: ColorMode,
    pub quiet: bool,
}

impl Settings {
    #[must_use]
    pub fn resolve(cli: &Cli, config: Config) -> Self {
        let threshold = cli
            .level
            .map(Severity::from_level)
            .or_else(|| config.threshold())
            .unwrap_or_default();

        let format = if cli.json {
            OutputFormat::Json
        } else {
            cli.format.or(config.format).unwrap_or_default()
        };

        let mut exclude = config.exclude;
        exclude.extend(cli.exclude.iter().cloned());

        Self {
            threshold,
            format,
            recursive: cli.recursive || config.recursive,
            cmode: cli.cmode || config.cmode,
            full_paths: cli.full_paths || config.full_paths,
            exclude,
            disabled_rules: config.rules.disabled,
            color: cli.color.into(),
            quiet: cli.quiet,
        }
    }

    #[must_use]
    pub const fn render_options(&self) -> RenderOptions {
        RenderOptions::new(self.format, self.threshold).with_color(self.color)
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
