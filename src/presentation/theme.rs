use colored::Colorize;

pub struct Theme {
    pub heading: fn(&str) -> String,
    pub title: fn(&str) -> String,
    pub line: fn(&str) -> String,
    pub idx: fn(&str) -> String,
    pub count: fn(&str) -> String,
    pub date: fn(&str) -> String,
    pub active: fn(&str) -> String,
    pub inactive: fn(&str) -> String,
    pub error: fn(&str) -> String,
    pub hint: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "temp" | "" => Self::temp(),
            "wudao" => Self::wudao(),
            "canvas" => Self::canvas(),
            "plain" => Self::plain(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::temp() // Fallback to default
            }
        }
    }

    fn temp() -> Self {
        Self {
            heading: |s| s.bright_magenta().italic().bold().underline().to_string(),
            title: |s| s.yellow().bold().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            idx: |s| s.bright_white().to_string(),
            count: |s| s.cyan().to_string(),
            date: |s| s.bright_white().dimmed().italic().to_string(),
            active: |s| s.on_blue().white().bold().to_string(),
            inactive: |s| s.bright_black().to_string(),
            error: |s| s.red().bold().to_string(),
            hint: |s| s.green().italic().to_string(),
        }
    }

    fn wudao() -> Self {
        Self {
            heading: |s| s.red().italic().bold().underline().to_string(),
            title: |s| s.bright_white().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            idx: |s| s.bright_white().to_string(),
            count: |s| s.green().to_string(),
            date: |s| s.bright_yellow().dimmed().italic().to_string(),
            active: |s| s.on_red().white().to_string(),
            inactive: |s| s.normal().to_string(),
            error: |s| s.red().italic().to_string(),
            hint: |s| s.cyan().to_string(),
        }
    }

    fn canvas() -> Self {
        Self {
            heading: |s| s.blue().bold().underline().to_string(),
            title: |s| s.black().bold().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            idx: |s| s.cyan().to_string(),
            count: |s| s.magenta().to_string(),
            date: |s| s.bright_black().italic().to_string(),
            active: |s| s.on_bright_blue().black().to_string(),
            inactive: |s| s.bright_black().to_string(),
            error: |s| s.red().bold().to_string(),
            hint: |s| s.bright_blue().to_string(),
        }
    }

    fn plain() -> Self {
        Self {
            heading: |s| s.to_string(),
            title: |s| s.to_string(),
            line: |s| s.to_string(),
            idx: |s| s.to_string(),
            count: |s| s.to_string(),
            date: |s| s.to_string(),
            active: |s| format!("[{}]", s),
            inactive: |s| s.to_string(),
            error: |s| s.to_string(),
            hint: |s| s.to_string(),
        }
    }
}
