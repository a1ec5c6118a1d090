use crate::error::ShellError;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: Vec<(&'static str, Flag)>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: &'static str,
    pub long: &'static str,
    pub description: &'static str,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn switch(short: &'static str, long: &'static str, description: &'static str) -> Self {
        Self {
            short,
            long,
            description,
            takes_value: false,
            value: None,
        }
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let flags = vec![
            ("help", Flag::switch("-h", "--help", "Print this help message")),
            ("version", Flag::switch("-v", "--version", "Show version information")),
            ("quiet", Flag::switch("-q", "--quiet", "Suppress diagnostics on stderr")),
            ("debug", Flag::switch("-d", "--debug", "Enable debug logging")),
            ("no-color", Flag::switch("-n", "--no-color", "Disable colored output")),
            (
                "command",
                Flag {
                    takes_value: true,
                    ..Flag::switch("-c", "--command", "Run one command line and exit")
                },
            ),
        ];

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            let flag = self
                .flags
                .iter_mut()
                .map(|(_, flag)| flag)
                .find(|flag| arg == flag.short || arg == flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("Unknown argument {}", arg)))?;

            if flag.takes_value {
                let value = args.next().ok_or_else(|| {
                    ShellError::FlagError(format!("Flag {} requires a value", arg))
                })?;
                flag.value = Some(value.clone());
            } else {
                flag.value = Some("true".to_string());
            }
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get_value(name).is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags
            .iter()
            .find(|(key, _)| *key == name)
            .and_then(|(_, flag)| flag.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: microsh [OPTIONS]");
        println!("\nOptions:");
        for (_, flag) in &self.flags {
            let long = if flag.takes_value {
                format!("{} <line>", flag.long)
            } else {
                flag.long.to_string()
            };
            println!("  {}, {:<18} {}", flag.short, long, flag.description);
        }
    }
}
