// Shared test helpers: a deterministic registry client and CSV fixtures.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use whois_enrich::{LookupError, LookupResult, RegistryLookup};

#[allow(dead_code)] // Used by other test files
/// Registry client answering from a fixed table.
///
/// Addresses not in the table fail with a timed-out connection whose text is
/// "connection timed out".
pub struct FakeLookup {
    answers: Vec<(String, String, String)>,
    pub calls: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl FakeLookup {
    pub fn new(answers: &[(&str, &str, &str)]) -> Self {
        Self {
            answers: answers
                .iter()
                .map(|(a, d, c)| (a.to_string(), d.to_string(), c.to_string()))
                .collect(),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl RegistryLookup for FakeLookup {
    async fn lookup(&self, address: &str) -> Result<LookupResult, LookupError> {
        self.calls.borrow_mut().push(address.to_string());
        match self.answers.iter().find(|(a, _, _)| a == address) {
            Some((_, description, cidr)) => Ok(LookupResult {
                asn_description: description.clone(),
                asn_cidr: cidr.clone(),
                ..Default::default()
            }),
            None => Err(LookupError::Connect(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "connection timed out",
            ))),
        }
    }
}

/// Writes `contents` to `dir/name` and returns the path.
#[allow(dead_code)] // Used by other test files
pub fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write test input");
    path
}
