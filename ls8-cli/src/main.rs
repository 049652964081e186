#[macro_use]
extern crate clap;

use clap::Arg;

use ls8::StandardMachine;
use ls8_cli::loader;

#[derive(Debug)]
enum Error {
    Load(loader::LoadError),
    RamFull(ls8::RamFullError),
    Run(ls8::ExitCode),
}

fn main() -> Result<(), Error> {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("PROGRAM")
                .help("The .ls8 program file to run")
                .required(true)
                .index(1),
        )
        .get_matches();

    let path = matches.value_of("PROGRAM").unwrap();

    let program = loader::load_file(path).map_err(Error::Load)?;

    let mut machine = StandardMachine::standard();
    machine.load_program(&program).map_err(Error::RamFull)?;
    machine.run().map_err(Error::Run)?;

    Ok(())
}
