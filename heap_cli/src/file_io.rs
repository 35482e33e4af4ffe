use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::Path;

pub fn open_file_buf_read<P: AsRef<Path>>(path: P) -> io::Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}
