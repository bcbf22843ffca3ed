use std::io;
use std::path::Path;

/// Read access to the secret files
///
/// The loader only ever reads whole files as text. Any
/// `Fn(&Path) -> io::Result<String>` closure is a source, which lets callers
/// serve fixtures from memory.
pub trait TextSource {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reads from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl TextSource for FsSource {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

impl<F> TextSource for F
where
    F: Fn(&Path) -> io::Result<String>,
{
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self(path)
    }
}
