use cyclegen::InstructionSet;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let set = args.next().unwrap_or_else(|| "mos6502".to_string());

    let set = match set.as_str() {
        "6502" | "mos6502" | "nmos6502" => InstructionSet::Mos6502,
        other => {
            eprintln!("Unknown instruction set '{}'. Supported: mos6502", other);
            std::process::exit(1);
        }
    };

    log::info!("Generating {} cycle table", set.name());

    match cyclegen::generate(set) {
        Ok(text) => print!("{}", text),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(1);
        }
    }
}
