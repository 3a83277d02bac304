use argh::FromArgs;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use dem::{
    grid::GridSize,
    io::{
        read_grid,
        rsc::{load_dem_rsc, rsc_path, upsample_dem_rsc, write_dem_rsc},
        write_grid, ByteOrder, IoError,
    },
    upsample::{parallel::ExecutionStrategy, upsample_with, UpsampleParameters},
};

const DEFAULT_OUTPUT: &str = "elevation.dem";

/// Upsamples a .hgt or .dem elevation grid by an integer rate
#[derive(FromArgs)]
struct Args {
    /// path to the .hgt or .dem file
    #[argh(positional)]
    filename: PathBuf,

    /// upsampling rate, a positive integer
    #[argh(positional)]
    rate: usize,

    /// run on the current thread only
    #[argh(switch, short = 's')]
    serial: bool,

    /// optional [ncols nrows] [outfilename]: grid width and height, inferred for SRTM
    /// .hgt tiles and .dem files with a .rsc, then the output .dem file
    #[argh(positional)]
    extra: Vec<String>,
}

/// Split the trailing arguments into the grid size and the output path.
fn parse_extra(extra: &[String]) -> Result<(Option<GridSize>, PathBuf), Box<dyn Error>> {
    let parse_size = |ncols: &str, nrows: &str| -> Result<GridSize, Box<dyn Error>> {
        let width: usize = ncols
            .parse()
            .map_err(|_| format!("ncols must be a positive integer, got {ncols:?}"))?;
        let height: usize = nrows
            .parse()
            .map_err(|_| format!("nrows must be a positive integer, got {nrows:?}"))?;
        Ok(GridSize { width, height })
    };

    match extra {
        [] => Ok((None, PathBuf::from(DEFAULT_OUTPUT))),
        [ncols, nrows] => Ok((
            Some(parse_size(ncols, nrows)?),
            PathBuf::from(DEFAULT_OUTPUT),
        )),
        [ncols, nrows, outfilename] => Ok((
            Some(parse_size(ncols, nrows)?),
            PathBuf::from(outfilename),
        )),
        _ => Err(format!(
            "expected [ncols nrows] [outfilename] after the rate, got {} arguments",
            extra.len()
        )
        .into()),
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let (size, outfilename) = parse_extra(&args.extra)?;

    // fail before reading the input if the output can not be written
    if ByteOrder::from_path(&outfilename)? != ByteOrder::Little {
        return Err(IoError::InvalidFileExtension(outfilename).into());
    }

    log::info!("Reading from {}", args.filename.display());
    let src = read_grid(&args.filename, size)?;

    let params = UpsampleParameters::new(args.rate, src.size())?;
    log::info!(
        "Upsampling {} by {} to {}",
        params.src_size(),
        params.rate(),
        params.dst_size()
    );

    let strategy = if args.serial {
        ExecutionStrategy::Serial
    } else {
        ExecutionStrategy::ParallelRows
    };
    let dst = upsample_with(&src, params.rate(), strategy)?;

    write_grid(&outfilename, &dst)?;
    log::info!("{} write complete", outfilename.display());

    if rsc_path(&args.filename).exists() {
        let rsc = load_dem_rsc(&args.filename)?;
        write_dem_rsc(&outfilename, &upsample_dem_rsc(&rsc, params.rate())?)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
