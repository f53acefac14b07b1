use crate::cli::{
    args::EncodeArgs,
    commands::{read_input, write_output},
    global::GlobalArgs,
};
use sigilwire::{Direction, Scheme, Settings, TextEncoding};

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(args.file.as_ref(), global, settings)?;

    let scheme: Scheme = args
        .scheme
        .map(Into::into)
        .unwrap_or_else(|| settings.default_scheme());
    let encoding: TextEncoding = args
        .encoding
        .map(Into::into)
        .unwrap_or_else(|| settings.text_encoding());

    // Input is encoded verbatim, trailing newline included
    let payload = sigilwire::transcode(&text, scheme, Direction::Encode, encoding)?;

    write_output(args.output.as_ref(), &payload, true)
}
