#[cfg(test)]
pub mod test {
    use std::cell::RefCell;
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use crate::builder::ConfigFileBuilder;
    use crate::manager::ConfigFile;
    use crate::store::Section;
    use crate::terminal::{Level, Terminal};

    /// Terminal that keeps everything it is sent.
    #[derive(Debug, Default)]
    pub struct RecordingTerminal {
        messages: RefCell<Vec<(Level, String)>>,
        help: RefCell<Vec<String>>,
        printed: RefCell<Vec<Section>>,
    }

    impl RecordingTerminal {
        pub fn messages_at(&self, level: Level) -> Vec<String> {
            self.messages
                .borrow()
                .iter()
                .filter(|(l, _)| *l == level)
                .map(|(_, text)| text.clone())
                .collect()
        }

        /// Each help call, lines joined with `\n`.
        pub fn help_blocks(&self) -> Vec<String> {
            self.help.borrow().clone()
        }

        pub fn printed(&self) -> Vec<Section> {
            self.printed.borrow().clone()
        }
    }

    impl Terminal for RecordingTerminal {
        fn message(&self, level: Level, text: &str) {
            self.messages.borrow_mut().push((level, text.to_string()));
        }

        fn help(&self, lines: &[&str], _section: Option<&str>, _newline: bool) {
            self.help.borrow_mut().push(lines.join("\n"));
        }

        fn json_print(&self, tree: &Section) {
            self.printed.borrow_mut().push(tree.clone());
        }
    }

    /// A throwaway home directory and local directory.
    pub struct TestEnv {
        pub home: TempDir,
        pub local: TempDir,
    }

    impl TestEnv {
        pub const PROJECT: &'static str = "testapp";

        pub fn new() -> Self {
            Self {
                home: TempDir::new().unwrap(),
                local: TempDir::new().unwrap(),
            }
        }

        pub fn builder(&self) -> ConfigFileBuilder<RecordingTerminal> {
            ConfigFile::builder()
                .project(Self::PROJECT)
                .home_dir(self.home.path())
                .local_dir(self.local.path())
                .terminal(RecordingTerminal::default())
        }

        pub fn config(&self) -> ConfigFile<RecordingTerminal> {
            self.builder().build().unwrap()
        }

        pub fn home_file(&self) -> PathBuf {
            self.home
                .path()
                .join(".nk")
                .join(Self::PROJECT)
                .join("config.json")
        }

        pub fn local_file(&self) -> PathBuf {
            self.local.path().join("config.json")
        }

        pub fn write_home(&self, content: &str) {
            let path = self.home_file();
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }

        pub fn write_local(&self, content: &str) {
            fs::write(self.local_file(), content).unwrap();
        }
    }

    #[test]
    fn recording_terminal_filters_by_level() {
        let t = RecordingTerminal::default();
        t.info("a");
        t.fatal("b");
        t.info("c");
        assert_eq!(t.messages_at(Level::Info), vec!["a", "c"]);
        assert_eq!(t.messages_at(Level::Fatal), vec!["b"]);
    }

    #[test]
    fn test_env_paths() {
        let env = TestEnv::new();
        env.write_home("{}");
        assert!(env.home_file().is_file());
        assert!(!env.local_file().exists());
    }
}
