#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tsync::libs::config::{Config, FeedConfig, DEFAULT_FEED_URL};

    /// Sets up a temporary directory to act as the user's home/appdata
    /// directory so config tests never touch the real filesystem.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.feed.is_none());
    }

    #[test]
    fn test_default_feed_url() {
        let feed = FeedConfig::default();
        assert_eq!(feed.url, DEFAULT_FEED_URL);
        assert_eq!(feed.url, "https://jsonplaceholder.typicode.com/todos/");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_lifecycle(_ctx: &mut ConfigTestContext) {
        // With no file on disk, read() falls back to the default config
        let config = Config::read().unwrap();
        assert!(config.feed.is_none());

        // Saved settings survive a read round-trip
        let config = Config {
            feed: Some(FeedConfig {
                url: "https://feed.example.com/todos/".to_string(),
            }),
        };
        config.save().unwrap();

        let read_back = Config::read().unwrap();
        assert_eq!(read_back.feed, config.feed);
    }
}
