use std::path::Path;

use crate::core::env::{abbreviate_home, home_dir, hostname, username};
use crate::highlight::Palette;

/// `user@host:dir$ `, with the home prefix of `dir` shown as `~`.
pub(crate) struct Prompt {
    user: String,
    host: String,
    palette: Palette,
}

impl Prompt {
    pub(crate) fn new(palette: Palette) -> Self {
        Self {
            user: username().unwrap_or_else(|| "?".to_string()),
            host: hostname().unwrap_or_default(),
            palette,
        }
    }

    pub(crate) fn render(&self, cwd: &Path) -> String {
        self.render_with_home(cwd, home_dir().as_deref())
    }

    fn render_with_home(&self, cwd: &Path, home: Option<&Path>) -> String {
        format!(
            "{}:{}$ ",
            self.palette.user(&format!("{}@{}", self.user, self.host)),
            self.palette.folder(&abbreviate_home(cwd, home))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prompt() {
        let prompt = Prompt {
            user: "ada".to_string(),
            host: "box".to_string(),
            palette: Palette::plain(),
        };
        let home = Path::new("/home/ada");

        assert_eq!(
            prompt.render_with_home(Path::new("/home/ada/src"), Some(home)),
            "ada@box:~/src$ "
        );
        assert_eq!(prompt.render_with_home(Path::new("/"), Some(home)), "ada@box:/$ ");
    }
}
