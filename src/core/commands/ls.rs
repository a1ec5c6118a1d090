use std::ffi::CStr;
use std::fs;
use std::io::Write;
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::Path;

use super::{Command, CommandError, Outcome};
use crate::core::env::{group_name_of, user_name_of};
use crate::highlight::Palette;
use crate::input::WHITESPACE;

#[derive(Debug, Default, Clone, Copy)]
struct LsOptions {
    all: bool,
    long: bool,
    quote: bool,
    help: bool,
}

/// `ls [path] [-a] [-l] [-q] [-h]`
#[derive(Clone)]
pub struct LsCommand {
    palette: Palette,
}

impl LsCommand {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    fn parse_args(args: &[String]) -> Result<(LsOptions, Option<&str>), CommandError> {
        let mut options = LsOptions::default();
        let mut path = None;

        for arg in args {
            match arg.as_str() {
                "-a" => options.all = true,
                "-l" => options.long = true,
                "-q" => options.quote = true,
                "-h" => options.help = true,
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(CommandError::InvalidArguments(format!(
                        "unknown option {}",
                        flag
                    )));
                }
                other if path.is_none() => path = Some(other),
                _ => {}
            }
        }

        Ok((options, path))
    }

    fn print_help(&self, out: &mut dyn Write) -> Result<(), CommandError> {
        let p = &self.palette;
        writeln!(out, "{}", p.bold("ls help"))?;
        writeln!(out, "{}\n\tls [path] [options]", p.important("Command:"))?;
        writeln!(out, "{}", p.bold("Options:"))?;
        writeln!(out, "\t-a | display all entries, including names starting with .")?;
        writeln!(out, "\t-l | long listing (user, group, size, modification date, name)")?;
        writeln!(out, "\t-q | display names in double quotes")?;
        writeln!(out, "\t-h | display this help")?;
        Ok(())
    }

    fn colorize(&self, name: &str, file_type: Option<fs::FileType>) -> String {
        match file_type {
            Some(t) if t.is_symlink() => self.palette.link(name),
            Some(t) if t.is_dir() => self.palette.folder(name),
            Some(t) if t.is_block_device() => self.palette.device(name),
            _ => name.to_string(),
        }
    }

    fn render_entry(&self, dir: &Path, name: &str, options: LsOptions) -> String {
        let metadata = fs::symlink_metadata(dir.join(name)).ok();

        let display = if options.quote || name.contains(WHITESPACE) {
            format!("\"{}\"", name)
        } else {
            name.to_string()
        };
        let display = self.colorize(&display, metadata.as_ref().map(|m| m.file_type()));

        match (options.long, metadata) {
            (true, Some(m)) => {
                let user = user_name_of(m.uid()).unwrap_or_else(|| m.uid().to_string());
                let group = group_name_of(m.gid()).unwrap_or_else(|| m.gid().to_string());
                format!(
                    "{} {}\t{}\t{}\t{}",
                    user,
                    group,
                    m.size(),
                    format_mtime(m.mtime()),
                    display
                )
            }
            _ => display,
        }
    }
}

impl Command for LsCommand {
    fn execute(&self, argv: &[String], out: &mut dyn Write) -> Result<Outcome, CommandError> {
        let (options, path) = Self::parse_args(argv.get(1..).unwrap_or_default())?;
        if options.help {
            self.print_help(out)?;
            return Ok(Outcome::Status(0));
        }

        let dir = Path::new(path.unwrap_or("."));
        let entries = fs::read_dir(dir).map_err(|e| {
            CommandError::ExecutionError(format!("cannot open {}: {}", dir.display(), e))
        })?;

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| options.all || !name.starts_with('.'))
            .collect();
        if options.all {
            names.push(".".to_string());
            names.push("..".to_string());
        }
        names.sort();

        for name in &names {
            writeln!(out, "{}", self.render_entry(dir, name, options))?;
        }
        Ok(Outcome::Status(0))
    }
}

/// Local time as `Mon 2024/01/31 12:00:00`.
fn format_mtime(secs: i64) -> String {
    let time = secs as libc::time_t;
    let mut tm: libc::tm = unsafe { std::mem::zeroed() };
    if unsafe { libc::localtime_r(&time, &mut tm) }.is_null() {
        return secs.to_string();
    }

    let mut buf = [0 as libc::c_char; 64];
    let format = b"%a %Y/%m/%d %T\0";
    let written = unsafe {
        libc::strftime(
            buf.as_mut_ptr(),
            buf.len(),
            format.as_ptr() as *const libc::c_char,
            &tm,
        )
    };
    if written == 0 {
        return secs.to_string();
    }
    unsafe { CStr::from_ptr(buf.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    fn scratch(tag: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("microsh_ls_{}_{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("sub")).unwrap();
        fs::write(dir.join("b.txt"), "b").unwrap();
        fs::write(dir.join("a file"), "").unwrap();
        fs::write(dir.join(".hidden"), "").unwrap();
        dir
    }

    fn run(argv: &[&str]) -> Result<String, CommandError> {
        let argv: Vec<String> = argv.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        LsCommand::new(Palette::plain()).execute(&argv, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_lists_sorted_without_hidden() -> Result<(), CommandError> {
        let dir = scratch("plain");
        let listing = run(&["ls", dir.to_str().unwrap()])?;
        assert_eq!(listing, "\"a file\"\nb.txt\nsub\n");
        let _ = fs::remove_dir_all(dir);
        Ok(())
    }

    #[test]
    fn test_all_and_quote_flags() -> Result<(), CommandError> {
        let dir = scratch("all");
        let listing = run(&["ls", dir.to_str().unwrap(), "-a", "-q"])?;
        assert_eq!(
            listing,
            "\".\"\n\"..\"\n\".hidden\"\n\"a file\"\n\"b.txt\"\n\"sub\"\n"
        );
        let _ = fs::remove_dir_all(dir);
        Ok(())
    }

    #[test]
    fn test_long_format_fields() -> Result<(), CommandError> {
        let dir = scratch("long");
        let listing = run(&["ls", "-l", dir.to_str().unwrap()])?;
        let line = listing.lines().find(|l| l.ends_with("b.txt")).unwrap();
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[1], "1");
        let _ = fs::remove_dir_all(dir);
        Ok(())
    }

    #[test]
    fn test_help_flag_skips_listing() -> Result<(), CommandError> {
        let listing = run(&["ls", "-h"])?;
        assert!(listing.starts_with("ls help"));
        Ok(())
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            run(&["ls", "/microsh/missing/dir"]),
            Err(CommandError::ExecutionError(_))
        ));
        assert!(matches!(
            run(&["ls", "-z"]),
            Err(CommandError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_format_mtime_shape() {
        let formatted = format_mtime(0);
        assert_eq!(formatted.split(' ').count(), 3);
        assert!(formatted.contains('/'));
    }
}
