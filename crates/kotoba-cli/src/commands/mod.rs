pub mod dispatch;
pub mod import;
pub mod serve;
pub mod sets;
pub mod study;

use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Read a text file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "猫,cat,ねこ,neko").unwrap();

        assert_eq!(read_input(file.path()).unwrap(), "猫,cat,ねこ,neko");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_input(Path::new("/nonexistent/kotoba/words.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/kotoba/words.txt"));
    }
}
