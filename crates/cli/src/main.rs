use anyhow::{anyhow, Context};
use config::{Config, File};
use graticule::{
    fmt_degree, parse_extra_fields, timed, Graticule, GraticuleConfig, GridType,
};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;

/// CLI for generating GeoJSON graticules (global lat/long reference grids).
#[derive(Debug, StructOpt)]
#[structopt(name = "graticule")]
struct Opt {
    /// Path to a config file that defines the graticule to be generated.
    /// Supported formats: JSON, TOML. Any flags given alongside it override
    /// the file's values
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Grid interval in decimal degrees: the spacing between grid lines
    /// (default 1.0)
    #[structopt(short, long)]
    grid_interval: Option<f64>,

    /// Step interval in decimal degrees: the sampling density along each
    /// grid line, so lines reproject as smooth curves (default 0.5)
    #[structopt(short, long)]
    step_interval: Option<f64>,

    /// Grid type: line (polylines), rectangle or hex (polygons). The
    /// polygon types write a second `_polygon` file alongside the line
    /// graticule (default line)
    #[structopt(short = "t", long)]
    grid_type: Option<GridType>,

    /// Extra properties to append to every feature, given as the body of a
    /// JSON object, e.g. '"source": "natural_earth", "scalerank": 2'
    #[structopt(short, long)]
    field_content: Option<String>,

    /// Output file path (with or without directories); defaults to
    /// output/graticule_<N>dd.geojson. Missing directories are created
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The logging level to use during generation. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Load a base config from a file. Fields not present in the file keep their
/// defaults.
fn load_config(config_path: &Path) -> anyhow::Result<GraticuleConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Assemble the effective config: file config (or defaults), then flag
/// overrides on top.
fn build_config(opt: &Opt) -> anyhow::Result<GraticuleConfig> {
    let mut config = match &opt.config {
        Some(path) => load_config(path)?,
        None => GraticuleConfig::default(),
    };
    if let Some(grid_interval) = opt.grid_interval {
        config.grid_interval = grid_interval;
    }
    if let Some(step_interval) = opt.step_interval {
        config.step_interval = step_interval;
    }
    if let Some(grid_type) = opt.grid_type {
        config.grid_type = grid_type;
    }
    if let Some(raw) = &opt.field_content {
        config.extra_fields = parse_extra_fields(raw)?;
    }
    Ok(config)
}

/// The path for the line graticule file: an explicit `-o` path as given,
/// otherwise `output/graticule_<N>dd.geojson` derived from the grid interval.
fn resolve_output_path(output: Option<&Path>, config: &GraticuleConfig) -> PathBuf {
    match output {
        Some(path) => path.to_owned(),
        None => PathBuf::from(format!(
            "output/graticule_{}dd.geojson",
            fmt_degree(config.grid_interval)
        )),
    }
}

/// The companion polygon file path: `_polygon` inserted before the extension
/// of the line file's path.
fn polygon_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("graticule");
    let mut file_name = format!("{}_polygon", stem);
    if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
        file_name.push('.');
        file_name.push_str(ext);
    }
    path.with_file_name(file_name)
}

/// Write one output file, creating the target directory first if needed. The
/// file handle is scoped to this function, so it's closed on all exit paths.
fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| {
            format!("error creating output directory {:?}", dir)
        })?;
    }
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("error opening output file {:?}", path))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("error writing to file {:?}", path))?;
    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = build_config(&opt)?;
    let output_path = resolve_output_path(opt.output.as_deref(), &config);

    let graticule = Graticule::generate(config)?;

    timed!(
        format!("Writing line graticule to {:?}", &output_path),
        log::Level::Info,
        write_output(&output_path, &graticule.lines().to_json())?
    );

    if let Some(polygons) = graticule.polygons() {
        let path = polygon_path(&output_path);
        timed!(
            format!(
                "Writing {} graticule to {:?}",
                graticule.config().grid_type,
                &path
            ),
            log::Level::Info,
            write_output(&path, &polygons.to_json())?
        );
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
