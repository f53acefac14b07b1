use crate::cli::{args::DetectArgs, commands::read_input, global::GlobalArgs};
use sigilwire::{CodecError, Settings};

pub fn handle(
    args: DetectArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(args.file.as_ref(), global, settings)?;

    let schemes = if args.all {
        sigilwire::candidates(&text)
    } else {
        sigilwire::detect_scheme(&text).into_iter().collect()
    };

    if schemes.is_empty() {
        return Err(CodecError::Undetected.into());
    }

    for scheme in schemes {
        println!("{}", scheme);
    }
    Ok(())
}
