/// Anything that can store a string and hand it back.
///
/// Base holders and transform layers both implement this, so layers stack on
/// top of one another without the caller knowing how deep the stack is.
pub trait DataSource {
    fn write(&mut self, data: &str);
    fn read(&self) -> String;
}

impl<S: DataSource + ?Sized> DataSource for Box<S> {
    fn write(&mut self, data: &str) {
        (**self).write(data)
    }

    fn read(&self) -> String {
        (**self).read()
    }
}

/// Label given to the base holder when none is configured.
pub const DEFAULT_FILE_NAME: &str = "somefile.dat";

/// In-memory holder at the bottom of every pipeline.
///
/// The file name is only a label; nothing touches the filesystem.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileDataSource {
    file_name: String,
    data: String,
}

impl FileDataSource {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            data: String::new(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl DataSource for FileDataSource {
    fn write(&mut self, data: &str) {
        self.data = data.to_string();
    }

    fn read(&self) -> String {
        self.data.clone()
    }
}
