use std::path::PathBuf;

/// Expand a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_tilde("/tmp/out.csv"), PathBuf::from("/tmp/out.csv"));
        assert_eq!(expand_tilde("out.csv"), PathBuf::from("out.csv"));
    }

    #[test]
    fn tilde_becomes_absolute() {
        if dirs::home_dir().is_some() {
            assert!(expand_tilde("~/out.csv").is_absolute());
        }
    }
}
