use anyhow::Result;
use clap::Parser;
use log::info;
use slope_reversal::{
    Analysis, Config, default_points, parse_point, random_points, read_points_file, render_json,
    render_report, write_report,
};

/// Show how one high-leverage point can flip the sign of a regression slope
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Four base points as "x,y" (defaults to (1,7) (2,9) (8,21) (10,25)).
    /// Put them after "--" when a point starts with a minus sign.
    #[arg(value_name = "X,Y")]
    points: Vec<String>,

    /// Read base points from a file, one "x y" pair per line
    #[arg(long)]
    points_file: Option<String>,

    /// TOML file with points, fifth point and policy
    #[arg(long)]
    config: Option<String>,

    /// Generate four random positive-slope points from this seed
    #[arg(long)]
    random: Option<u64>,

    /// Fifth point to add instead of the suggested reversal point
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    fifth: Option<String>,

    /// Only analyse the base points
    #[arg(long, default_value_t = false)]
    base_only: bool,

    /// Distance of the reversal point from the x-centroid, in standard deviations
    #[arg(long)]
    leverage: Option<f64>,

    /// Fraction of the boundary value added to the safety margin
    #[arg(long)]
    relative_margin: Option<f64>,

    /// Flat safety margin past the boundary
    #[arg(long)]
    absolute_margin: Option<f64>,

    /// Print the analysis as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Also write the output to this file
    #[arg(long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(v) = args.leverage {
        config.policy.leverage = v;
    }
    if let Some(v) = args.relative_margin {
        config.policy.relative_margin = v;
    }
    if let Some(v) = args.absolute_margin {
        config.policy.absolute_margin = v;
    }
    config.validate()?;

    // command line > random > points file > config file > defaults
    let points = if !args.points.is_empty() {
        args.points
            .iter()
            .map(|s| parse_point(s))
            .collect::<Result<Vec<_>, _>>()?
    } else if let Some(seed) = args.random {
        random_points(seed)
    } else if let Some(path) = &args.points_file {
        read_points_file(path)?
    } else if !config.points.is_empty() {
        config.points.clone()
    } else {
        default_points()
    };
    info!("base points: {:?}", points);

    let mut analysis = Analysis::new(&points, &config.policy)?;

    if !args.base_only {
        let fifth = match &args.fifth {
            Some(text) => Some(parse_point(text)?),
            None => config.fifth,
        };
        match fifth {
            Some(p) => analysis.with_fifth_point(p),
            None => analysis.use_suggestion(),
        };
    }

    let rendered = if args.json {
        render_json(&analysis)?
    } else {
        render_report(&analysis)
    };
    print!("{}", rendered);

    if let Some(path) = &args.output {
        write_report(path, &rendered)?;
        info!("report written to {}", path);
    }

    Ok(())
}
