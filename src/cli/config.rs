//! Configuration management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::common::{load_config, to_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default export directory (empty string to unset)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Layout used when --layout is omitted
    #[arg(long, value_name = "NAME|FILE")]
    default_layout: Option<String>,

    /// Cut the MX cross into the stem (true/false)
    #[arg(long, value_name = "BOOL")]
    stem_cross: Option<String>,

    /// Build legend parts (true/false)
    #[arg(long, value_name = "BOOL")]
    legends: Option<String>,

    /// Legend thickness in mm
    #[arg(long, value_name = "MM")]
    legend_thickness: Option<String>,

    /// Legend embed depth in mm
    #[arg(long, value_name = "MM")]
    legend_embed: Option<String>,

    /// TrueType font for STL legends (empty string to unset)
    #[arg(long, value_name = "FILE")]
    font: Option<String>,

    /// Cap color as #RRGGBB
    #[arg(long, value_name = "HEX")]
    cap_color: Option<String>,

    /// Legend color as #RRGGBB
    #[arg(long, value_name = "HEX")]
    legend_color: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    paths: PathsOutput,
    build: BuildOutput,
    legend: LegendOutput,
    colors: ColorsOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    output_dir: Option<String>,
}

#[derive(Serialize, Debug)]
struct BuildOutput {
    default_layout: String,
    stem_cross: bool,
    legends: bool,
}

#[derive(Serialize, Debug)]
struct LegendOutput {
    thickness: f64,
    embed: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_path: Option<String>,
}

#[derive(Serialize, Debug)]
struct ColorsOutput {
    cap: String,
    legend: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn assignments(&self) -> Vec<(&'static str, &str)> {
        [
            ("paths.output_dir", &self.output_dir),
            ("build.default_layout", &self.default_layout),
            ("build.stem_cross", &self.stem_cross),
            ("build.legends", &self.legends),
            ("legend.thickness", &self.legend_thickness),
            ("legend.embed", &self.legend_embed),
            ("legend.font_path", &self.font),
            ("colors.cap", &self.cap_color),
            ("colors.legend", &self.legend_color),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        let assignments = self.assignments();
        if assignments.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified (see `config set --help`)",
            ));
        }

        let mut config = load_config()?;

        for (key, value) in assignments {
            config
                .set_value(key, value)
                .map_err(|e| CliError::validation(format!("Invalid value for {key}: {e:#}")))?;
        }

        let path = config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully: {}", path.display());

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        config_file: Config::config_file_path()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default(),
        paths: PathsOutput {
            output_dir: config
                .paths
                .output_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
        build: BuildOutput {
            default_layout: config.build.default_layout.clone(),
            stem_cross: config.build.stem_cross,
            legends: config.build.legends,
        },
        legend: LegendOutput {
            thickness: config.legend.thickness,
            embed: config.legend.embed,
            font_path: config
                .legend
                .font_path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
        colors: ColorsOutput {
            cap: config.colors.cap.to_hex(),
            legend: config.colors.legend.to_hex(),
        },
    };

    println!("{}", to_json(&output)?);
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("{APP_NAME} Configuration");
    println!("========================");
    println!();

    println!("Paths:");
    match &config.paths.output_dir {
        Some(dir) => println!("  Output Directory: {}", dir.display()),
        None => println!("  Output Directory: (current directory)"),
    }
    println!();

    println!("Build:");
    println!("  Default Layout: {}", config.build.default_layout);
    println!("  Stem Cross: {}", config.build.stem_cross);
    println!("  Legends: {}", config.build.legends);
    println!();

    println!("Legend:");
    println!("  Thickness: {} mm", config.legend.thickness);
    println!("  Embed: {} mm", config.legend.embed);
    match &config.legend.font_path {
        Some(font) => println!("  Font: {}", font.display()),
        None => println!("  Font: (not configured)"),
    }
    println!();

    println!("Colors:");
    println!("  Cap: {}", config.colors.cap);
    println!("  Legend: {}", config.colors.legend);
    println!();
}
