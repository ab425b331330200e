use crate::reports;
use clap::Args;
use enigma::config::MachineArgs;
use enigma::error::EnigmaResult;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub machine: MachineArgs,
}

pub fn run(args: InspectArgs) -> EnigmaResult<()> {
    let machine = args.machine.resolve()?.build()?;

    println!("\n🔎 === MACHINE SETTINGS === 🔎");
    reports::print_pairs("Plugboard", machine.plugboard().pairs());
    reports::print_pairs("Reflector", machine.reflector().pairs());
    reports::print_rotors(machine.rotors());
    Ok(())
}
