use abcd_optics::{
    console::{run_batch, run_session, show_intro, Args, PartialArgs},
    error::OptResult,
    OpticalSystem, RayState, SystemDocument,
};
use clap::Parser;
use std::io::{stdin, stdout, BufReader};

fn main() -> OptResult<()> {
    env_logger::init();
    //parse CLI arguments
    let args = Args::try_from(PartialArgs::parse())?;

    //read system from file if given
    let mut system = match &args.file_path {
        Some(path) => SystemDocument::from_file(path)?.into_system(),
        None => OpticalSystem::default(),
    };
    let mut writer = stdout().lock();
    if args.batch {
        return run_batch(&system, &args.beam.unwrap_or_default(), &mut writer);
    }
    show_intro();
    if let Some(beam) = args.beam {
        if !system.is_empty() {
            let out = system.propagate(&beam)?;
            println!("{beam} -> {out}");
        }
    }
    let mut reader = BufReader::new(stdin().lock());
    run_session(&mut system, &mut reader, &mut writer)
}
