//! Fill polygons read from an edge file and save the result as an image

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use grayfill::{draw, BlockTimer, EdgeTable, Gray8, PixfmtGray8, Rasterizer, RenderingBase, ScanBounds};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Bounds {
    /// Scan from the highest to the lowest end point of any edge
    Full,
    /// Scan between edge top points only
    Top,
}

impl From<Bounds> for ScanBounds {
    fn from(b: Bounds) -> ScanBounds {
        match b {
            Bounds::Full => ScanBounds::Full,
            Bounds::Top => ScanBounds::TopOnly,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Scanline polygon fill on a grayscale image")]
struct Args {
    /// Edge records, one `x1 y1 x2 y2` per line
    edges: PathBuf,

    /// Output image; format from the extension
    #[arg(short, long, default_value = "fill.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 900)]
    width: usize,

    #[arg(long, default_value_t = 600)]
    height: usize,

    /// Fill intensity
    #[arg(short, long, default_value_t = 255)]
    intensity: u8,

    /// Background intensity
    #[arg(long, default_value_t = 0)]
    background: u8,

    /// Also draw the edges as lines of this intensity
    #[arg(long)]
    outline: Option<u8>,

    #[arg(long, value_enum, default_value_t = Bounds::Full)]
    bounds: Bounds,
}

fn run(args: Args) -> grayfill::Result<()> {
    let edges = EdgeTable::load(BufReader::new(File::open(&args.edges)?))?;

    let mut base = RenderingBase::new(PixfmtGray8::new(args.width, args.height));
    base.clear(Gray8::new(args.background));

    let mut ras = Rasterizer::with_edges(edges);
    ras.bounds(args.bounds.into());
    let report = {
        let _t = BlockTimer::new("Fill Polygon");
        let mut ren = base.lock();
        let report = ras.fill(&mut ren, Gray8::new(args.intensity));
        if let Some(c) = args.outline {
            for e in ras.edges() {
                draw::line(&mut ren, e.x_top, e.y_top, e.x_bottom, e.y_bottom, Gray8::new(c));
            }
        }
        report
    };
    if !report.is_clean() {
        eprintln!("warning: {} scanlines with an odd number of intersections, first at row {}",
                  report.odd_scanlines.len(), report.odd_scanlines[0]);
    }
    base.to_file(&args.output)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    if args.width == 0 || args.height == 0 {
        eprintln!("error: image size must be non-zero");
        return ExitCode::FAILURE;
    }
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
