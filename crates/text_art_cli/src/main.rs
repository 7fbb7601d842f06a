use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use text_art::{
    present, BlockSize, DisplayMode, Gradient, ParamsUpdate, RenderParams, Rgb, Session,
    SvgSurface, TextStyle, TextSurface,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert images to block-averaged text art")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render text art to stdout for a quick preview
    Preview(PreviewArgs),
    /// Convert an image to text art and write the result to disk
    Convert(ConvertArgs),
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input image path
    input: PathBuf,
    /// Print characters only, without terminal colors
    #[arg(long, default_value_t = false)]
    plain: bool,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input image path
    input: PathBuf,
    /// Output file path
    #[arg(short, long)]
    output: PathBuf,
    /// Output format, guessed from the output extension when omitted
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug, Clone)]
struct RenderSettings {
    /// TOML file with render parameters; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Source pixels per glyph horizontally
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    block_width: Option<u32>,
    /// Source pixels per glyph vertically
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    block_height: Option<u32>,
    /// Derive the block size from a target number of glyph columns
    #[arg(
        long,
        conflicts_with = "block_width",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    columns: Option<u32>,
    /// Block height / width ratio used with --columns
    #[arg(long, default_value_t = 2.0)]
    cell_aspect: f32,
    /// Font size in points
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    font_size: Option<u32>,
    /// Glyph selection mode
    #[arg(long, value_enum)]
    mode: Option<ModeChoice>,
    /// Background color (#rrggbb)
    #[arg(long)]
    background: Option<Rgb>,
    /// Text cycled through in color mode
    #[arg(long)]
    text: Option<String>,
    /// Glyph ramp used in monochrome mode
    #[arg(long, value_enum)]
    ramp: Option<RampPreset>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ModeChoice {
    Color,
    Monochrome,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RampPreset {
    Monochrome,
    Standard,
    Detailed,
    Blocks,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Svg,
    Text,
    Ansi,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Preview(args) => preview(args),
        Commands::Convert(args) => convert(args),
    }
}

fn preview(args: PreviewArgs) -> Result<()> {
    let session = render(&args.input, &args.settings)?;

    let style = if args.plain { TextStyle::Plain } else { TextStyle::Ansi };
    let mut surface = TextSurface::new(style);
    present(session.commands(), &mut surface);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    surface.write_to(&mut out)?;
    out.flush()?;
    Ok(())
}

fn convert(args: ConvertArgs) -> Result<()> {
    let session = render(&args.input, &args.settings)?;
    let format = args.format.unwrap_or_else(|| OutputFormat::from_path(&args.output));

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {:?}", args.output))?;
    let mut out = BufWriter::new(file);

    match format {
        OutputFormat::Svg => {
            let mut surface = SvgSurface::new(session.params().font_size);
            present(session.commands(), &mut surface);
            out.write_all(surface.finish().as_bytes())?;
        },
        OutputFormat::Text | OutputFormat::Ansi => {
            let style =
                if format == OutputFormat::Ansi { TextStyle::Ansi } else { TextStyle::Plain };
            let mut surface = TextSurface::new(style);
            present(session.commands(), &mut surface);
            surface.write_to(&mut out)?;
        },
    }
    out.flush().with_context(|| format!("failed to write {:?}", args.output))?;

    info!("wrote {:?} output to {:?}", format, args.output);
    Ok(())
}

/// Load parameters and image into a fresh session and render once.
fn render(input: &Path, settings: &RenderSettings) -> Result<Session> {
    let params = match &settings.config {
        Some(path) => RenderParams::load(path)
            .with_context(|| format!("failed to load config {:?}", path))?,
        None => RenderParams::default(),
    };

    let buffer =
        text_art::load_path(input).with_context(|| format!("failed to open image {:?}", input))?;

    let mut session = Session::new(params);
    session.on_parameters_changed(settings.to_update(buffer.width()));
    session.on_image_ready(buffer);

    if let Some(reason) = empty_output_reason(&session) {
        warn!("{}, output of {:?} has no glyphs", reason, input);
    }

    Ok(session)
}

/// Why `session` rendered no glyphs, if it rendered none.
fn empty_output_reason(session: &Session) -> Option<&'static str> {
    if session.params().block().is_degenerate() {
        Some("block size has a zero side")
    } else if session.grid().map_or(true, |grid| grid.is_empty()) {
        Some("image is smaller than one block")
    } else {
        None
    }
}

impl RenderSettings {
    fn to_update(&self, source_width: u32) -> ParamsUpdate {
        let mut update = ParamsUpdate {
            block_width: self.block_width,
            block_height: self.block_height,
            font_size: self.font_size,
            mode: self.mode.map(ModeChoice::to_mode),
            background: self.background,
            display_text: self.text.clone(),
            ramp: self.ramp.map(RampPreset::to_gradient),
        };

        if let Some(columns) = self.columns {
            match BlockSize::fit_columns(source_width, columns, self.cell_aspect) {
                Some(block) => {
                    update.block_width = Some(block.width);
                    update.block_height = update.block_height.or(Some(block.height));
                },
                None => {
                    warn!("ignoring --columns {} with cell aspect {}", columns, self.cell_aspect)
                },
            }
        }

        update
    }
}

impl ModeChoice {
    fn to_mode(self) -> DisplayMode {
        match self {
            ModeChoice::Color => DisplayMode::Color,
            ModeChoice::Monochrome => DisplayMode::Monochrome,
        }
    }
}

impl RampPreset {
    fn to_gradient(self) -> Gradient {
        match self {
            RampPreset::Monochrome => Gradient::monochrome(),
            RampPreset::Standard => Gradient::standard(),
            RampPreset::Detailed => Gradient::detailed(),
            RampPreset::Blocks => Gradient::blocks(),
        }
    }
}

impl OutputFormat {
    fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "svg" => OutputFormat::Svg,
            "ans" | "ansi" => OutputFormat::Ansi,
            _ => OutputFormat::Text,
        }
    }
}
