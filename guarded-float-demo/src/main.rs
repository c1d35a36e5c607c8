//! Demonstrates [`Guarded`] arithmetic, formatting, and failure reporting
//! by printing a short sequence of computations.

use clap::Parser as _;

use guarded_float::{Guarded, NanError};

/// Command-line arguments.
#[derive(Clone, Debug, clap::Parser)]
#[command(author, about, version)]
struct DemoArgs {
    /// Additional logging to stderr, including every rejected NaN.
    #[arg(long = "verbose", short = 'v')]
    verbose: bool,

    /// Digits after the decimal point in the formatted example.
    #[arg(long = "precision", value_name = "N", default_value_t = 2)]
    precision: usize,
}

fn main() -> Result<(), anyhow::Error> {
    let args = DemoArgs::parse();

    use simplelog::LevelFilter::{Info, Off, Trace};
    simplelog::TermLogger::init(
        if args.verbose { Trace } else { Info },
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    demonstrate(&args)?;
    Ok(())
}

fn demonstrate(args: &DemoArgs) -> Result<(), NanError> {
    let precision = args.precision;

    let f1 = Guarded::new(12.0f32)?;
    println!("{f1:>+7.precision$}");
    println!("{f1}");

    let mut f2 = (f1 + 10.0f64)?;
    f2.try_add_assign(1.0f64)?;
    println!("{f2}");
    println!("{}", (f2 + 3i32)?.try_eq(26.0f32)?);

    f2.try_sub_assign(20.0f32)?;
    println!("{f2}");

    f2.try_mul_assign(2.0f32)?;
    println!("{f2}");

    let f3 = (10i32 / f2)?;
    println!("{f3}");

    let f4 = Guarded::new(f32::INFINITY)?;
    println!("{f4}");

    match f4 - f4 {
        Ok(f5) => println!("{f5}"),
        Err(error) => {
            log::debug!("caught expected failure of ∞ − ∞");
            println!("Error: {error}");
        }
    }

    Ok(())
}
