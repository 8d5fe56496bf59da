pub mod analyze;
pub mod dot;
pub mod explore;
pub mod list;
pub mod monitor;
pub mod serve;
pub mod version;

use std::io::{self, Read};

/// Use the given text, or read all of stdin when it is absent
pub(crate) fn text_or_stdin(text: Option<String>) -> anyhow::Result<String> {
    match text {
        Some(t) => Ok(t),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
