/// CLI argument parsing and command handling.
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::Rng;

use crate::color::Palette;
use crate::flicker::{ColorFlicker, FlickerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "colorflicker",
    version,
    about = "ColorFlicker - A flashing cyberpunk color panel for the terminal"
)]
pub struct Cli {
    /// Run as a privileged user (keeps the color steady)
    #[arg(long)]
    pub superuser: bool,

    /// Run in debug mode (keeps the color steady)
    #[arg(long)]
    pub debug: bool,

    /// Milliseconds between color changes
    #[arg(long = "interval-ms", default_value_t = 2000)]
    pub interval_ms: u64,

    /// Comma-separated hex colors replacing the built-in palette
    #[arg(long)]
    pub palette: Option<String>,

    /// Where to write the log file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print randomly picked colors and exit
    Pick {
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: usize,
    },
    /// Print the active palette and exit
    Palette,
}

impl Cli {
    /// Privileged and debug sessions never flicker.
    pub fn reduced_motion(&self) -> bool {
        self.superuser || self.debug
    }

    pub fn flicker_config(&self) -> Result<FlickerConfig> {
        let palette = match &self.palette {
            Some(list) => Palette::parse(list)?,
            None => Palette::cyberpunk(),
        };
        Ok(FlickerConfig::new(palette, self.reduced_motion())
            .with_interval(Duration::from_millis(self.interval_ms)))
    }
}

/// Execute a one-shot command (pick or palette).
pub fn run(command: Command, config: FlickerConfig) -> Result<()> {
    match command {
        Command::Pick { count } => handle_pick(count, config)?,
        Command::Palette => handle_palette(config)?,
    }
    Ok(())
}

fn handle_pick(count: usize, config: FlickerConfig) -> Result<()> {
    let (mut flicker, _timer) = ColorFlicker::initialize(config.steady(), Instant::now())?;
    write_picks(&mut io::stdout().lock(), &mut flicker, count)?;
    Ok(())
}

/// Writes `count` colors, one per line, starting with the initial pick.
fn write_picks<R: Rng>(
    out: &mut impl Write,
    flicker: &mut ColorFlicker<R>,
    count: usize,
) -> io::Result<()> {
    for index in 0..count {
        if index > 0 {
            flicker.pick_color();
        }
        writeln!(out, "{}", flicker.current_color())?;
    }
    Ok(())
}

fn handle_palette(config: FlickerConfig) -> Result<()> {
    if config.palette.is_empty() {
        println!("Palette is empty.");
        return Ok(());
    }
    for (index, color) in config.palette.iter().enumerate() {
        println!("{index:>2}  {color}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    use super::*;
    use crate::flicker::DEFAULT_INTERVAL;

    #[rstest]
    #[case(&["colorflicker"], false)]
    #[case(&["colorflicker", "--superuser"], true)]
    #[case(&["colorflicker", "--debug"], true)]
    #[case(&["colorflicker", "--superuser", "--debug"], true)]
    fn reduced_motion_follows_privilege_flags(#[case] args: &[&str], #[case] expected: bool) {
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.reduced_motion(), expected);
        assert_eq!(cli.flicker_config().unwrap().reduced_motion, expected);
    }

    #[test]
    fn defaults_to_cyberpunk_palette() {
        let cli = Cli::try_parse_from(["colorflicker"]).unwrap();
        let config = cli.flicker_config().unwrap();
        assert_eq!(config.palette, Palette::cyberpunk());
        assert_eq!(config.interval, DEFAULT_INTERVAL);
        assert_eq!(cli.command, None);
    }

    #[test]
    fn custom_palette_and_interval() {
        let cli = Cli::try_parse_from([
            "colorflicker",
            "--palette",
            "#ff0000,#00ff00",
            "--interval-ms",
            "500",
        ])
        .unwrap();
        let config = cli.flicker_config().unwrap();
        assert_eq!(config.palette.len(), 2);
        assert_eq!(config.interval, Duration::from_millis(500));
    }

    #[test]
    fn bad_palette_is_an_error() {
        let cli = Cli::try_parse_from(["colorflicker", "--palette", "#ff0000,teal"]).unwrap();
        assert!(cli.flicker_config().is_err());
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["colorflicker", "pick", "-n", "3"]).unwrap();
        assert_eq!(cli.command, Some(Command::Pick { count: 3 }));
        let cli = Cli::try_parse_from(["colorflicker", "palette"]).unwrap();
        assert_eq!(cli.command, Some(Command::Palette));
    }

    #[test]
    fn pick_with_empty_palette_fails() {
        let config = FlickerConfig::new(Palette::default(), false);
        assert!(run(Command::Pick { count: 1 }, config).is_err());
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    fn pick_writes_one_line_per_color(#[case] count: usize) {
        let config = FlickerConfig::new(Palette::cyberpunk(), true);
        let (mut flicker, _timer) =
            ColorFlicker::initialize_with_rng(config, StdRng::seed_from_u64(11), Instant::now())
                .unwrap();
        let mut out = Vec::new();
        write_picks(&mut out, &mut flicker, count).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), count);
        assert!(lines.iter().all(|color| flicker.palette().contains(color)));
        assert_eq!(lines.last().copied(), (count > 0).then(|| flicker.current_color()));
    }
}
