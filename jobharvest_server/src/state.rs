use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;

/// Shared server state: where the input file and output directory live, and
/// which companies currently have a run in flight.
pub struct AppState {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    /// Lowercased company keys with an active run. A second trigger for the
    /// same company is refused instead of clobbering its CSV mid-run.
    pub running: Mutex<HashSet<String>>,
}

impl AppState {
    pub fn new(input_path: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_path,
            output_dir,
            running: Mutex::new(HashSet::new()),
        }
    }

    /// Marks a company as running. Returns false when it already was.
    pub fn try_start(&self, key: &str) -> bool {
        self.running
            .lock()
            .expect("running set lock poisoned")
            .insert(key.to_string())
    }

    pub fn finish(&self, key: &str) {
        self.running
            .lock()
            .expect("running set lock poisoned")
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_start_is_refused_until_finished() {
        let state = AppState::new(PathBuf::from("input.csv"), PathBuf::from("output"));
        assert!(state.try_start("ibm"));
        assert!(!state.try_start("ibm"));
        state.finish("ibm");
        assert!(state.try_start("ibm"));
    }
}
