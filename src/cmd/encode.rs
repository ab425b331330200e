use clap::Args;
use enigma::config::MachineArgs;
use enigma::error::{EnigmaError, EnigmaResult};
use std::io::{self, Read, Write};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub machine: MachineArgs,

    /// Message to encode. Read from stdin when absent.
    #[arg(short, long)]
    pub message: Option<String>,
}

pub fn run(args: EncodeArgs) -> EnigmaResult<()> {
    let mut machine = args.machine.resolve()?.build()?;

    let input = match args.message {
        Some(m) => m,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| EnigmaError::ConfigurationFileUnreadable {
                    path: "<stdin>".to_string(),
                    reason: e.to_string(),
                })?;
            buf
        }
    };

    let result = machine.process_inputs(&input);
    let written = match &result {
        Ok(out) => out.as_str(),
        Err(EnigmaError::InvalidInputCharacter { processed, .. }) => processed.as_str(),
        Err(_) => "",
    };

    let mut stdout = io::stdout().lock();
    // A closed stdout is not something the run can recover from or report.
    let _ = writeln!(stdout, "{}", written);
    let _ = stdout.flush();

    info!("Encoded {} letter(s); rotors now at {:?}", written.len(), machine.offsets());
    result.map(|_| ())
}
