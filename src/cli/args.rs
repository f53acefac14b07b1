use clap::{Args, Subcommand, ValueEnum};
use sigilwire::{Scheme, TextEncoding};
use std::path::PathBuf;

/// Arguments for encoding text
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Encoding scheme (default from settings)
    #[arg(short = 's', long, value_enum)]
    pub scheme: Option<SchemeCli>,

    /// Byte encoding of the text (default from settings)
    #[arg(short = 'e', long, value_enum)]
    pub encoding: Option<TextEncodingCli>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding a symbol stream
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Scheme of the input; `auto` detects it from the symbols
    #[arg(short = 's', long, value_enum, default_value = "auto")]
    pub scheme: DecodeSchemeCli,

    /// Byte encoding of the decoded text (default from settings)
    #[arg(short = 'e', long, value_enum)]
    pub encoding: Option<TextEncodingCli>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for auto-detecting the scheme
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// List every matching scheme in priority order
    #[arg(long)]
    pub all: bool,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show effective settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show both symbol tables
    Alphabets {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Encoding schemes (CLI enum)
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SchemeCli {
    #[value(alias = "hex")]
    Nibble,
    #[value(alias = "b64")]
    Base64,
}

impl From<SchemeCli> for Scheme {
    fn from(cli: SchemeCli) -> Self {
        match cli {
            SchemeCli::Nibble => Scheme::Nibble,
            SchemeCli::Base64 => Scheme::Base64,
        }
    }
}

/// Decode schemes (CLI enum), with auto-detection
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DecodeSchemeCli {
    Auto,
    #[value(alias = "hex")]
    Nibble,
    #[value(alias = "b64")]
    Base64,
}

impl DecodeSchemeCli {
    /// `None` means detect from the input.
    pub fn scheme(self) -> Option<Scheme> {
        match self {
            DecodeSchemeCli::Auto => None,
            DecodeSchemeCli::Nibble => Some(Scheme::Nibble),
            DecodeSchemeCli::Base64 => Some(Scheme::Base64),
        }
    }
}

/// Text encodings (CLI enum)
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TextEncodingCli {
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
    #[value(name = "utf-16le", alias = "utf16le")]
    Utf16Le,
    #[value(name = "utf-16be", alias = "utf16be")]
    Utf16Be,
    Ascii,
}

impl From<TextEncodingCli> for TextEncoding {
    fn from(cli: TextEncodingCli) -> Self {
        match cli {
            TextEncodingCli::Utf8 => TextEncoding::Utf8,
            TextEncodingCli::Utf16Le => TextEncoding::Utf16Le,
            TextEncodingCli::Utf16Be => TextEncoding::Utf16Be,
            TextEncodingCli::Ascii => TextEncoding::Ascii,
        }
    }
}
