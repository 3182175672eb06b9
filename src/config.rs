/// The fully parsed command-line surface: just the object-file path.
///
/// Kept decoupled from `clap::ArgMatches` so it can be constructed directly in tests without
/// going through argument parsing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub program: String,
}

impl Config {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_the_program_path() {
        let config = Config::new("program.obj");
        assert_eq!(config.program, "program.obj");
    }
}
