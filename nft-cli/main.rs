use clap::{Parser, ValueEnum};
use nft_cli::{MarkerBuilder, MarkerConfig, MarkerError, MarkerResult, SamplerConfig, SamplerKind};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "nft-marker")]
#[command(about = "Generate NFT marker files (.jpg, .fset, .fset3, .iset) from an image")]
#[command(version)]
struct Cli {
    /// Source image [default: paint1.jpg]
    input: Option<PathBuf>,

    /// Output prefix; files are written to <PREFIX>.{jpg,fset,fset3,iset} [default: markers/paint1]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Load settings from a .toml or .json file; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Longest side of the processed image [default: 1024]
    #[arg(long)]
    max_dimension: Option<u32>,

    /// JPEG quality 1-100 [default: 85]
    #[arg(long)]
    quality: Option<u8>,

    /// Feature sampler
    #[arg(long, value_enum)]
    sampler: Option<SamplerArg>,

    /// Grid divisions per axis [default depends on sampler]
    #[arg(long)]
    divisions: Option<usize>,

    /// Sampler threshold [default depends on sampler]
    #[arg(long)]
    threshold: Option<f32>,

    /// Contrast factor applied after resizing, e.g. 1.5
    #[arg(long)]
    contrast: Option<f32>,

    /// Indent the JSON documents
    #[arg(long)]
    pretty: bool,

    /// Also write an image with the sampled features drawn on it
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Log each pipeline stage
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SamplerArg {
    Threshold,
    Gradient,
    Directional,
}

impl From<SamplerArg> for SamplerKind {
    fn from(arg: SamplerArg) -> Self {
        match arg {
            SamplerArg::Threshold => SamplerKind::Threshold,
            SamplerArg::Gradient => SamplerKind::Gradient,
            SamplerArg::Directional => SamplerKind::Directional,
        }
    }
}

impl Cli {
    fn to_config(&self) -> MarkerResult<MarkerConfig> {
        let mut cfg = match &self.config {
            Some(path) => MarkerConfig::load(path)?,
            None => MarkerConfig::default(),
        };

        if let Some(input) = &self.input {
            cfg.input = input.clone();
        }
        if let Some(output) = &self.output {
            cfg.output_prefix = output.clone();
        }
        if let Some(v) = self.max_dimension {
            cfg.max_dimension = v;
        }
        if let Some(v) = self.quality {
            cfg.jpeg_quality = v;
        }
        if let Some(kind) = self.sampler.map(SamplerKind::from) {
            if kind != cfg.sampler.kind {
                cfg.sampler = SamplerConfig::for_kind(kind);
            }
        }
        if let Some(v) = self.divisions {
            cfg.sampler.grid_divisions = v;
        }
        if let Some(v) = self.threshold {
            cfg.sampler.threshold = v;
        }
        if self.contrast.is_some() {
            cfg.contrast = self.contrast;
        }
        if self.pretty {
            cfg.pretty_json = true;
        }
        if self.preview.is_some() {
            cfg.preview = self.preview.clone();
        }
        Ok(cfg)
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> MarkerResult<()> {
    let config = cli.to_config()?;
    let bundle = MarkerBuilder::new(config)?.build()?;

    println!("NFT marker files created:");
    for path in bundle.paths() {
        println!("  - {}", path.display());
    }
    if let Some(preview) = &bundle.preview {
        println!("Preview written to {}", preview.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ MarkerError::InputNotFound(_)) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
