use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use hexsurf::{
    timed, ColourMapType, MeshStyle, Surface, SurfaceConfig, SurfaceRenderer,
};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for generating hex surfaces and rendering them to files.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexsurf")]
struct Opt {
    /// Path to a config file that defines the surface to be generated.
    /// Supported formats: JSON, TOML. If omitted, the default config is used
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// If given, the rendered surface will be saved to this directory. The
    /// exact files that appear in the directory are defined by the output
    /// formats. See `--output-formats` for more info
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The format(s) to output the surface in. Supported formats:
    ///
    /// cfg - The full config object used for the surface, in TOML format
    ///
    /// json - The triangle mesh buffers (positions, normals, colours,
    ///   indices) in JSON
    ///
    /// svg - 2D top-down rendering of the surface
    ///
    /// stl - 3D rendering of the surface
    #[structopt(short = "f", long)]
    output_formats: Vec<OutputFormat>,

    /// Override the seed from the config file
    #[structopt(long)]
    seed: Option<u64>,

    /// Override the colour map from the config file, e.g. `jet`, `viridis`
    /// or `monochrome_red`
    #[structopt(long)]
    colour_map: Option<ColourMapType>,

    /// Override the colour map hue from the config file, in [0, 1]. Only
    /// used by colour maps that accept a hue
    #[structopt(long)]
    hue: Option<f32>,

    /// Override the mesh style from the config file (`hexes` or `triangles`)
    #[structopt(long)]
    mesh_style: Option<MeshStyle>,

    /// The logging level to use during generation. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // Keep the help text for `--output-formats` in sync with this
    Cfg,
    Json,
    Svg,
    Stl,
}

impl OutputFormat {
    fn file_ext(self) -> &'static str {
        match self {
            Self::Cfg => "toml",
            Self::Json => "json",
            Self::Svg => "svg",
            Self::Stl => "stl",
        }
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<SurfaceConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Apply any command line overrides on top of the loaded config
fn apply_overrides(opt: &Opt, config: &mut SurfaceConfig) {
    if let Some(seed) = opt.seed {
        config.field.seed = seed;
    }
    if let Some(colour_map) = opt.colour_map {
        config.render.colour_map = colour_map;
    }
    if let Some(hue) = opt.hue {
        config.render.hue = hue;
    }
    if let Some(mesh_style) = opt.mesh_style {
        config.render.mesh_style = mesh_style;
    }
}

/// Generate an output form of the surface in the given format.
fn gen_output(
    output_dir: &Path,
    output_format: OutputFormat,
    surface: &Surface,
    renderer: &SurfaceRenderer,
) -> anyhow::Result<()> {
    fn generate_bytes(
        output_format: OutputFormat,
        surface: &Surface,
        renderer: &SurfaceRenderer,
    ) -> anyhow::Result<Vec<u8>> {
        let grid = surface.grid();
        let data = surface.data();
        let bytes = match output_format {
            OutputFormat::Cfg => toml::to_string_pretty(surface.config())
                .context("error serializing config")?
                .into_bytes(),
            OutputFormat::Json => {
                renderer.build_mesh(grid, data)?.to_json()?.into_bytes()
            }
            OutputFormat::Svg => {
                renderer.render_as_svg(grid, data)?.into_bytes()
            }
            OutputFormat::Stl => renderer.render_as_stl(grid, data)?,
        };
        Ok(bytes)
    }

    let output_file_path = output_dir
        .join("surface")
        .with_extension(output_format.file_ext());

    timed!(
        format!(
            "Generating {} output and writing to {:?}",
            output_format, &output_file_path
        ),
        log::Level::Info,
        {
            let bytes = generate_bytes(output_format, surface, renderer)?;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&output_file_path)
                .with_context(|| {
                    format!("error opening output file {:?}", &output_file_path)
                })?;
            file.write_all(&bytes).with_context(|| {
                format!("error writing to file {:?}", &output_file_path)
            })?;
        }
    );

    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let mut config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => {
            info!("No config file given, using defaults");
            SurfaceConfig::default()
        }
    };
    apply_overrides(&opt, &mut config);
    let surface = Surface::generate(config)?;

    // If an output dir was specified, write out output format(s) there
    if let Some(output_dir) = &opt.output {
        if opt.output_formats.is_empty() {
            bail!("output dir was specified, but no output formats were given")
        }
        fs::create_dir_all(output_dir)?;

        let renderer = surface.renderer().context("invalid render config")?;
        for output_format in &opt.output_formats {
            gen_output(output_dir, *output_format, &surface, &renderer)?;
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
