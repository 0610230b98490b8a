use std::io::ErrorKind;
use std::path::PathBuf;

pub trait ConfigContentProvider {
    /// `Ok(None)` means there is no stored config yet.
    fn read_content(&self) -> Result<Option<String>, String>;
    fn write_content(&self, content: &str) -> Result<(), String>;
    fn describe(&self) -> String;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn read_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.file_path.display(),
                err
            )),
        }
    }

    fn write_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.file_path, content).map_err(|e| {
            format!(
                "Failed to write config file {}: {}",
                self.file_path.display(),
                e
            )
        })
    }

    fn describe(&self) -> String {
        self.file_path.display().to_string()
    }
}
