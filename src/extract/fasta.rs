//! FASTA header relabeling and file moves

use crate::error::ExtractError;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Copy `reader` to `writer` line by line, inserting `<prefix>.` after the `>` of
/// every header line. Returns the number of headers touched.
pub fn prefix_headers<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    prefix: &str,
) -> io::Result<usize> {
    let mut line = Vec::new();
    let mut headers = 0;
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.first() == Some(&b'>') {
            writer.write_all(b">")?;
            writer.write_all(prefix.as_bytes())?;
            writer.write_all(b".")?;
            writer.write_all(&line[1..])?;
            headers += 1;
        } else {
            writer.write_all(&line)?;
        }
    }
    writer.flush()?;
    Ok(headers)
}

/// Relabel the headers of the FASTA file at `path` in place.
///
/// The rewrite streams into `<path>.relabel` which then replaces `path`. The staging
/// file is removed if any step fails.
pub fn rewrite_headers(path: &Path, prefix: &str) -> Result<usize, ExtractError> {
    let input = File::open(path).map_err(|e| ExtractError::io(path, e))?;

    let mut staging = path.as_os_str().to_owned();
    staging.push(".relabel");
    let staging = Path::new(&staging);

    let result = relabel_into(input, staging, prefix)
        .and_then(|headers| fs::rename(staging, path).map(|_| headers));
    match result {
        Ok(headers) => {
            debug!(path = %path.display(), headers, "Relabeled FASTA headers");
            Ok(headers)
        }
        Err(e) => {
            let _ = fs::remove_file(staging);
            Err(ExtractError::io(path, e))
        }
    }
}

fn relabel_into(input: File, staging: &Path, prefix: &str) -> io::Result<usize> {
    let output = File::create(staging)?;
    prefix_headers(BufReader::new(input), BufWriter::new(output), prefix)
}

/// Move `from` to `to`, copying when a rename is not possible (e.g. across filesystems).
///
/// If the copy fallback fails too, the error carries both causes.
pub fn move_file(from: &Path, to: &Path) -> Result<(), ExtractError> {
    let rename_err = match fs::rename(from, to) {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };
    debug!(
        from = %from.display(),
        to = %to.display(),
        error = %rename_err,
        "Rename failed, copying"
    );
    if let Err(copy_err) = fs::copy(from, to) {
        return Err(ExtractError::io(
            to,
            io::Error::new(
                copy_err.kind(),
                format!("rename failed: {}; copy failed: {}", rename_err, copy_err),
            ),
        ));
    }
    fs::remove_file(from).map_err(|e| ExtractError::io(from, e))?;
    Ok(())
}
