use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;
use thiserror::Error;

use super::builder::{BuildError, DawgBuilder, InsertError, IntoKey};
use super::char_trait::DictChar;
use super::dict::DawgDict;

/// Errors that can occur when building a dictionary in one go.
#[derive(Debug, Error)]
pub enum LoadError<C: DictChar> {
    /// Reading the word list failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A line carries a value that is not an integer.
    #[error("line {line}: invalid value {text:?}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// The offending value text.
        text: String,
    },
    /// A key was rejected by the builder.
    #[error(transparent)]
    Insert(#[from] InsertError<C>),
    /// The automaton could not be laid out.
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Builds a dictionary from `(key, value)` pairs and returns it.
///
/// Keys **must** be provided in strictly ascending order, or this function will
/// return an error. This requirement allows the builder to construct a minimal
/// automaton efficiently in a single pass.
///
/// # Examples
///
/// ```
/// use worddict::dawg::wordlist::build_dict;
/// use worddict::DawgDict;
///
/// let dict: DawgDict<u8> = build_dict([("APPLE", 1), ("BANANA", 2), ("CHERRY", 3)]).unwrap();
/// assert_eq!(dict.find("BANANA"), 2);
/// assert_eq!(dict.find("APRICOT"), -1);
/// ```
pub fn build_dict<C, K>(
    entries: impl IntoIterator<Item = (K, C::Value)>,
) -> Result<DawgDict<C>, LoadError<C>>
where
    C: DictChar,
    K: IntoKey<C>,
{
    let mut builder = DawgBuilder::new();
    for (key, value) in entries {
        builder.insert(key, value)?;
    }
    Ok(builder.build()?)
}

/// Builds a byte-keyed dictionary from a sorted word list.
///
/// Each line holds a key, optionally followed by a tab and its value. Keys without
/// a value get their entry index. Lines starting with '#' are treated as comments
/// and ignored. Empty lines are skipped.
///
/// # Examples
///
/// ```
/// use worddict::dawg::wordlist::build_dict_from_reader;
///
/// let list = "# fruit\nAPPLE\t10\nBANANA\n\nCHERRY\t30\n";
/// let dict = build_dict_from_reader(list.as_bytes()).unwrap();
/// assert_eq!(dict.find("APPLE"), 10);
/// assert_eq!(dict.find("BANANA"), 1);
/// assert_eq!(dict.find("CHERRY"), 30);
/// ```
pub fn build_dict_from_reader(mut reader: impl BufRead) -> Result<DawgDict<u8>, LoadError<u8>> {
    let mut builder = DawgBuilder::<u8>::new();

    // Instead of using BufRead::lines() we call read_line repeatedly which allows us
    // to reuse the same string instead of allocating a new string for every line.
    let mut buf = String::with_capacity(80);
    let mut line = 0;
    loop {
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        line += 1;
        let entry = buf.trim_end_matches(['\n', '\r']);
        if !entry.trim().is_empty() && !is_comment(entry) {
            let (key, value) = parse_entry(entry, builder.len(), line)?;
            builder.insert(key, value)?;
        }
        buf.clear();
    }
    debug!("read {} entries from {line} lines", builder.len());
    Ok(builder.build()?)
}

/// Builds a byte-keyed dictionary from a word-list file.
///
/// See [`build_dict_from_reader`] for the format.
///
/// # Examples
///
/// ```no_run
/// use worddict::dawg::wordlist::build_dict_from_file;
///
/// let dict = build_dict_from_file("dictionary.txt").unwrap();
/// ```
pub fn build_dict_from_file(path: impl AsRef<Path>) -> Result<DawgDict<u8>, LoadError<u8>> {
    let file = File::open(path)?;
    build_dict_from_reader(BufReader::new(file))
}

fn parse_entry(entry: &str, index: usize, line: usize) -> Result<(&str, i32), LoadError<u8>> {
    let parse_error = |text: &str| -> LoadError<u8> {
        LoadError::Parse {
            line,
            text: text.to_string(),
        }
    };
    match entry.split_once('\t') {
        Some((key, value)) => {
            let value = value.trim();
            let value = value.parse().map_err(|_| parse_error(value))?;
            Ok((key, value))
        }
        None => {
            let value = i32::try_from(index).map_err(|_| parse_error(&index.to_string()))?;
            Ok((entry, value))
        }
    }
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
