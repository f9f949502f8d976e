//! Command line front end for chromapick.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{bail, Context};
use chromapick::{
    Color, Config, EyeDropper, Format, Pick, Picker, Point, Size, Spectrum, MAX_CANVAS_SIZE,
};
use clap::{Parser, Subcommand};
use image::{Rgb as Pixel, RgbImage};
use rand::{rngs::StdRng, SeedableRng};

#[derive(Parser, Debug)]
#[command(name = "chromapick", about = "Pick colors and convert between hex, RGB, HSL and HSV")]
struct Cli {
    /// TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output; repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a color in every notation. COLOR is `#rrggbb`, `r,g,b` or
    /// `hsl:h,s,l`.
    Convert { color: String },
    /// Show a random color.
    Random {
        /// Seed for a reproducible color.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the color under a pixel of the spectrum canvas.
    Sample {
        x: u32,
        y: u32,
        #[command(flatten)]
        canvas: CanvasArgs,
    },
    /// Write the spectrum canvas to an image file.
    Spectrum {
        out: PathBuf,
        #[command(flatten)]
        canvas: CanvasArgs,
    },
    /// Read picked colors from stdin, one per line, as an eye-dropper would
    /// report them. An empty line cancels a pick.
    Pick,
    /// List the configured color history.
    History,
}

#[derive(clap::Args, Debug)]
struct CanvasArgs {
    /// Canvas width, overriding the config.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_CANVAS_SIZE as i64))]
    width: Option<u32>,
    /// Canvas height, overriding the config.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_CANVAS_SIZE as i64))]
    height: Option<u32>,
}

impl CanvasArgs {
    fn spectrum(&self, config: &Config) -> Spectrum {
        Spectrum::new(Size::new(
            self.width.unwrap_or(config.canvas.width),
            self.height.unwrap_or(config.canvas.height),
        ))
    }
}

/// An eye-dropper fed from lines of text. End of input makes it
/// unavailable. A read error does too, and is kept for the caller.
struct LineDropper<R> {
    lines: io::Lines<R>,
    error: Option<io::Error>,
}

impl<R: BufRead> LineDropper<R> {
    fn new(input: R) -> Self {
        Self {
            lines: input.lines(),
            error: None,
        }
    }

    fn finish(self) -> io::Result<()> {
        self.error.map_or(Ok(()), Err)
    }
}

impl<R: BufRead> EyeDropper for LineDropper<R> {
    fn is_available(&self) -> bool {
        self.error.is_none()
    }

    fn open(&mut self) -> Pick {
        match self.lines.next() {
            Some(Ok(line)) if !line.trim().is_empty() => Pick::Picked(line.trim().to_owned()),
            Some(Ok(_)) => Pick::Cancelled,
            Some(Err(err)) => {
                self.error = Some(err);
                Pick::Unavailable
            }
            None => Pick::Unavailable,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let mut picker = Picker::with_config(&config);
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Convert { color } => {
            let color = parse_color(&color)?;
            print_color(&mut out, &color)?;
        }
        Command::Random { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let color = picker.randomize(&mut rng).clone();
            print_color(&mut out, &color)?;
        }
        Command::Sample { x, y, canvas } => {
            let spectrum = canvas.spectrum(&config);
            let color = picker.sample(&spectrum, Point::new(x, y)).clone();
            print_color(&mut out, &color)?;
        }
        Command::Spectrum { out: path, canvas } => {
            let spectrum = canvas.spectrum(&config);
            let size = spectrum.size();
            let mut image = RgbImage::new(size.width, size.height);
            for (point, rgb) in spectrum.render() {
                image.put_pixel(point.x, point.y, Pixel([rgb.red, rgb.green, rgb.blue]));
            }
            image
                .save(&path)
                .with_context(|| format!("could not write image to {}", path.display()))?;
            log::info!("wrote {}x{} spectrum to {}", size.width, size.height, path.display());
        }
        Command::Pick => {
            let mut dropper = LineDropper::new(io::stdin().lock());
            loop {
                match picker.pick_with(&mut dropper)? {
                    Pick::Picked(_) => print_color(&mut out, picker.color())?,
                    Pick::Cancelled => writeln!(out, "cancelled")?,
                    Pick::Unavailable => break,
                }
            }
            dropper.finish().context("could not read picked colors")?;
            writeln!(out, "history: {}", picker.history().entries().join(" "))?;
        }
        Command::History => {
            for (i, hex) in picker.history().entries().iter().enumerate() {
                writeln!(out, "{i:>2} {hex}")?;
            }
        }
    }

    Ok(())
}

fn print_color(out: &mut impl Write, color: &Color) -> io::Result<()> {
    for format in Format::ALL {
        writeln!(out, "{:<4}{}", format.label(), color.format(format))?;
    }
    Ok(())
}

/// Read a color given as `#rrggbb`, `r,g,b` or `hsl:h,s,l`.
fn parse_color(text: &str) -> anyhow::Result<Color> {
    let text = text.trim();

    if let Some(hsl) = text.strip_prefix("hsl:") {
        let [h, s, l] = parse_triple(hsl)?;
        return Ok(Color::from_hsl(h, s, l));
    }

    if text.contains(',') {
        let [r, g, b] = parse_triple(text)?;
        return Ok(chromapick::normalize(r, g, b));
    }

    let rgb = chromapick::parse_hex(text).with_context(|| format!("invalid color {text:?}"))?;
    Ok(Color::from_rgb(rgb))
}

fn parse_triple(text: &str) -> anyhow::Result<[i32; 3]> {
    let values = text
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<i32>()
                .with_context(|| format!("invalid number {part:?}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    match values[..] {
        [a, b, c] => Ok([a, b, c]),
        _ => bail!("expected 3 comma separated numbers, found {}", values.len()),
    }
}
