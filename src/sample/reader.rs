//! Reads the grade records into [`Sample`].
use serde_json::{Map, Value};

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::{Instance, Sample};
use crate::constants::{MISSING, N_GRADES};


/// The subjects used as features.
/// The `j`th subject is the `j`th feature.
pub const SUBJECTS: [&str; 9] = [
    "English",
    "Physics",
    "Chemistry",
    "ComputerScience",
    "Biology",
    "PhysicalEducation",
    "Economics",
    "Accountancy",
    "BusinessStudies",
];

/// The subject used as the label.
pub const LABEL_SUBJECT: &str = "Mathematics";

/// A key that identifies a record. This key is ignored.
const SERIAL: &str = "serial";


/// A struct that returns [`Sample`].
/// Using this struct, one can read a file of grade records to [`Sample`].
///
/// The first line of the file is a header (the number of records)
/// and each following line is a JSON object such as
/// ```txt
/// {"English": 4, "Physics": 3, "Mathematics": 5, "serial": 19}
/// ```
/// A grade `g` in `1..=8` is stored as `g - 1`.
/// A subject absent from a record is stored as `-1`.
/// `"Mathematics"` is the label if it exists.
///
/// # Example
/// ```no_run
/// use gradeboost::SampleReader;
/// let sample = SampleReader::default()
///     .file("training.json")
///     .skip_header(true)
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader {
    file: Option<PathBuf>,
    skip_header: bool,
    n_class: usize,
}


impl Default for SampleReader {
    fn default() -> Self {
        Self { file: None, skip_header: true, n_class: N_GRADES, }
    }
}


impl SampleReader {
    /// Set the file to read.
    pub fn file<P: AsRef<Path>>(mut self, file: P) -> Self {
        self.file = Some(file.as_ref().to_path_buf());
        self
    }


    /// Set whether the first line is a header line.
    /// Default value is `true`.
    pub fn skip_header(mut self, skip_header: bool) -> Self {
        self.skip_header = skip_header;
        self
    }


    /// Set the number of grades.
    /// Default value is `8`.
    pub fn n_class(mut self, n_class: usize) -> Self {
        self.n_class = n_class;
        self
    }


    /// Read the file specified by [`SampleReader::file`].
    pub fn read(self) -> io::Result<Sample> {
        let file = self.file.as_ref()
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "file is not specified")
            })?;
        let reader = BufReader::new(File::open(file)?);
        self.read_from(reader)
    }


    /// Read the records from the given reader.
    pub fn read_from<R: BufRead>(&self, reader: R) -> io::Result<Sample> {
        let mut lines = reader.lines();
        if self.skip_header {
            if let Some(line) = lines.next() {
                line?;
            }
        }

        let offset = if self.skip_header { 2 } else { 1 };
        let mut instances = Vec::new();
        for (i, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let record = serde_json::from_str::<Map<String, Value>>(&line)
                .map_err(|e| invalid_data(i + offset, e))?;
            instances.push(self.parse_record(&record, i + offset)?);
        }

        Ok(Sample::from_instances(instances, self.n_class))
    }


    fn parse_record(&self, record: &Map<String, Value>, line: usize)
        -> io::Result<Instance>
    {
        let mut features = vec![MISSING; SUBJECTS.len()];
        let mut label = None;
        for (subject, value) in record {
            if subject == SERIAL { continue; }

            if subject == LABEL_SUBJECT {
                let grade = self.parse_grade(subject, value, line)?;
                label = Some(grade as usize);
                continue;
            }

            // Unknown subjects do not contribute to the features.
            if let Some(j) = SUBJECTS.iter().position(|s| *s == subject.as_str()) {
                features[j] = self.parse_grade(subject, value, line)?;
            }
        }

        Ok(Instance { features, label, weight: 0f64, })
    }


    /// Converts a grade `1..=n_class` into `0..n_class`.
    fn parse_grade(&self, subject: &str, value: &Value, line: usize)
        -> io::Result<i32>
    {
        let n_class = self.n_class as i64;
        match value.as_i64() {
            Some(g) if (1..=n_class).contains(&g) => Ok(g as i32 - 1),
            _ => Err(invalid_data(
                line,
                format!("grade of {subject} must be in 1..={n_class}. got {value}"),
            )),
        }
    }
}


/// Read the grades stored one per line.
/// Each grade `g` in `1..=8` is returned as `g - 1`.
/// Blank lines are skipped.
pub fn read_grades<P: AsRef<Path>>(file: P) -> io::Result<Vec<usize>> {
    let reader = BufReader::new(File::open(file)?);
    parse_grades(reader, N_GRADES)
}


pub(crate) fn parse_grades<R: BufRead>(reader: R, n_class: usize)
    -> io::Result<Vec<usize>>
{
    let mut grades = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() { continue; }

        let grade = line.parse::<usize>()
            .map_err(|e| invalid_data(i + 1, e))?;
        if !(1..=n_class).contains(&grade) {
            return Err(invalid_data(
                i + 1,
                format!("grade must be in 1..={n_class}. got {grade}"),
            ));
        }
        grades.push(grade - 1);
    }
    Ok(grades)
}


fn invalid_data<E: std::fmt::Display>(line: usize, e: E) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, format!("line {line}: {e}"))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn read(bytes: &[u8]) -> io::Result<Sample> {
        SampleReader::default()
            .read_from(BufReader::new(bytes))
    }

    #[test]
    fn test_read_records() {
        let bytes = b"\
            2\n\
            {\"serial\": 1, \"English\": 4, \"Physics\": 1, \"Mathematics\": 8}\n\
            {\"BusinessStudies\": 2, \"serial\": 2}\n";
        let sample = read(&bytes[..]).unwrap();

        assert_eq!(sample.shape(), (2, SUBJECTS.len()));
        assert_eq!(sample[0].features, vec![3, 0, -1, -1, -1, -1, -1, -1, -1]);
        assert_eq!(sample[0].label, Some(7));
        assert_eq!(sample[1].features, vec![-1, -1, -1, -1, -1, -1, -1, -1, 1]);
        assert_eq!(sample[1].label, None);
    }

    #[test]
    fn test_unknown_subject_is_ignored() {
        let bytes = b"\
            1\n\
            {\"Hindi\": 3, \"English\": 2}\n";
        let sample = read(&bytes[..]).unwrap();
        assert_eq!(sample[0].value_at(0), 1);
        assert!((1..SUBJECTS.len()).all(|j| sample[0].is_missing(j)));
    }

    #[test]
    fn test_grade_out_of_range() {
        let bytes = b"\
            1\n\
            {\"English\": 9}\n";
        let err = read(&bytes[..]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().starts_with("line 2"), "{err}");
    }

    #[test]
    fn test_malformed_json() {
        let bytes = b"\
            1\n\
            {\"English\": 3\n";
        let err = read(&bytes[..]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_without_header() {
        let bytes = b"{\"Physics\": 5, \"Mathematics\": 2}\n";
        let sample = SampleReader::default()
            .skip_header(false)
            .read_from(BufReader::new(&bytes[..]))
            .unwrap();
        assert_eq!(sample.shape().0, 1);
        assert_eq!(sample[0].value_at(1), 4);
        assert_eq!(sample[0].label, Some(1));
    }

    #[test]
    fn test_parse_grades() {
        let bytes = b"1\n8\n\n3\n";
        let grades = parse_grades(BufReader::new(&bytes[..]), N_GRADES)
            .unwrap();
        assert_eq!(grades, vec![0, 7, 2]);
    }

    #[test]
    fn test_parse_grades_out_of_range() {
        let bytes = b"0\n";
        let err = parse_grades(BufReader::new(&bytes[..]), N_GRADES)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
