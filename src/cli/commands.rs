use crate::cli::config::max_size;
use crate::cli::global::GlobalArgs;
use sigilwire::Settings;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::warn;

/// Reads the input text from `file` or stdin, enforcing the size limit.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<String, Box<dyn std::error::Error>> {
    let limit = max_size(global, settings);

    if let Some(file_path) = file {
        // Check file size if a limit is set
        if limit > 0 {
            let metadata = fs::metadata(file_path)
                .map_err(|e| format!("Cannot read {}: {}", file_path.display(), e))?;
            let file_size = metadata.len() as usize;

            if file_size > limit {
                if global.force {
                    warn!(
                        file_size,
                        limit, "processing file larger than the size limit"
                    );
                } else {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, limit
                    )
                    .into());
                }
            }
        }

        return fs::read_to_string(file_path)
            .map_err(|e| format!("Cannot read {}: {}", file_path.display(), e).into());
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| format!("Cannot read stdin: {}", e))?;

    // Check stdin size after reading
    if limit > 0 && buffer.len() > limit && !global.force {
        return Err(format!(
            "Input size ({} bytes) exceeds maximum ({} bytes). Use --force to process anyway.",
            buffer.len(),
            limit
        )
        .into());
    }

    Ok(buffer)
}

/// Writes `payload` to `output` verbatim, or to stdout.
///
/// `newline` only applies to stdout, so that files hold exactly the payload.
pub fn write_output(
    output: Option<&PathBuf>,
    payload: &str,
    newline: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(output_path) = output {
        fs::write(output_path, payload)
            .map_err(|e| format!("Cannot write {}: {}", output_path.display(), e))?;
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(payload.as_bytes())?;
    if newline {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
