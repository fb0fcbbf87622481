use footprint_calculator::{calculator, io, report};
use log::info;

const USAGE: &str = "Usage: footprint_calculator [--csv] <input file | person name>";

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut format = report::Format::Text;
    let mut input_name = None;

    for arg in std::env::args().skip(1) {
        if arg == "--csv" {
            format = report::Format::Csv;
        } else if arg.starts_with("--") {
            return Err(format!("Unrecognised option \"{}\"\n{}", arg, USAGE).into());
        } else if input_name.is_none() {
            input_name = Some(arg);
        } else {
            return Err(format!("Unexpected argument \"{}\"\n{}", arg, USAGE).into());
        }
    }

    let input_name = input_name.ok_or(USAGE)?;
    let input_path = io::input_path(&input_name);
    info!("Reading footprint questionnaire from {}", input_path.display());

    let footprint = calculator::compute(io::SectionReader::from_path(&input_path)?)?;

    // Dump report to stdout
    report::write(&footprint, format, std::io::stdout())?;

    Ok(())
}
