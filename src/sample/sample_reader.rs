use std::path::Path;
use std::io;

use super::sample_struct::Sample;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV format file to [`Sample`].
/// Other formats are not supported yet.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use minilearn::SampleReader;
///
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::new()
///     .file(filename)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}


impl<P, S> SampleReader<P, S> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
            target: None,
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P, S> Default for SampleReader<P, S> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for target label.
    /// The classifiers in this crate expect the column
    /// to take values in `{0, 1}`.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}



impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments,
    /// and returns `std::io::Result<Sample>`.
    /// This method consumes `self.`
    pub fn read(self) -> io::Result<Sample> {
        if self.file.is_none() {
            panic!("The file name for csv is not set");
        }
        let file = self.file.unwrap();

        if self.target.is_none() {
            panic!(
                "Target (class) column is not specified. \
                Use `SampleReader::target_feature`."
            );
        }
        let target = self.target.unwrap();

        let sample = Sample::from_csv(file, self.has_header)?
            .set_target(target.as_ref());
        Ok(sample)
    }
}
