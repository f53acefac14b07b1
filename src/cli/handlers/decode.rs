use crate::cli::{
    args::DecodeArgs,
    commands::{read_input, write_output},
    global::GlobalArgs,
};
use sigilwire::{Direction, Settings, TextEncoding};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(args.file.as_ref(), global, settings)?;

    let encoding: TextEncoding = args
        .encoding
        .map(Into::into)
        .unwrap_or_else(|| settings.text_encoding());

    let payload = match args.scheme.scheme() {
        Some(scheme) => sigilwire::transcode(&text, scheme, Direction::Decode, encoding)?,
        None => sigilwire::decode_auto(&text, encoding)?,
    };

    write_output(args.output.as_ref(), &payload, false)
}
