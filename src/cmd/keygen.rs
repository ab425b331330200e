use clap::Args;
use enigma::error::{EnigmaError, EnigmaResult};
use enigma::keygen;
use enigma::loader::save_values;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct KeygenArgs {
    /// Directory the configuration files are written to.
    #[arg(short, long)]
    pub out: PathBuf,

    #[arg(short, long, default_value_t = 3)]
    pub rotors: usize,

    /// Plugboard cables (at most 13).
    #[arg(short, long, default_value_t = 10)]
    pub pairs: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

pub fn run(args: KeygenArgs) -> EnigmaResult<()> {
    let mut rng = if let Some(s) = args.seed {
        fastrand::Rng::with_seed(s)
    } else {
        fastrand::Rng::new()
    };

    let spec = keygen::random_spec(&mut rng, args.rotors, args.pairs);
    // Generated values always satisfy the constructors; fail loudly if not.
    spec.build()?;

    let unwritable = |e: std::io::Error| EnigmaError::ConfigurationFileUnreadable {
        path: args.out.display().to_string(),
        reason: e.to_string(),
    };
    fs::create_dir_all(&args.out).map_err(unwritable)?;

    save_values(args.out.join("machine.pb"), &spec.plugboard)?;
    save_values(args.out.join("machine.rf"), &spec.reflector)?;
    for (i, rotor) in spec.rotors.iter().enumerate() {
        save_values(args.out.join(format!("rotor{}.rot", i)), &rotor.to_values())?;
    }
    save_values(args.out.join("machine.pos"), &spec.positions)?;
    fs::write(args.out.join("machine.json"), spec.to_json()).map_err(unwritable)?;

    info!("🔑 Wrote configuration to {}", args.out.display());
    println!("Configuration written to {}", args.out.display());
    Ok(())
}
