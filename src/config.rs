use regex::Regex;

/// Options shared by loading and serializing.
///
/// # Examples
/// ```
/// use cricket_stats_sort::config::Config;
/// // tab separated input, pretty printed output
/// let config = Config::default()
///     .with_field_separator(b'\t')
///     .with_pretty(true);
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    field_separator: u8,
    ignore_rows: Option<Regex>,
    pretty: bool,
}

impl Default for Config {
    /// * The default field separator is a comma (',')
    /// * rows whose first cell starts with '#' are ignored
    /// * output is compact JSON
    fn default() -> Self {
        Config {
            field_separator: b',',
            ignore_rows: Regex::new("^#").ok(),
            pretty: false,
        }
    }
}

impl Config {
    pub fn field_separator(&self) -> u8 {
        self.field_separator
    }

    pub fn ignore_rows(&self) -> &Option<Regex> {
        &self.ignore_rows
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }

    /// Set the field separator. The default is ','
    pub fn with_field_separator(mut self, field_separator: u8) -> Config {
        self.field_separator = field_separator;
        self
    }

    /// Specify which rows to ignore. Each row whose first cell matches the regex is skipped and
    /// does not appear in the result. None keeps every row.
    pub fn with_ignore_rows(mut self, ignore_rows: Option<Regex>) -> Config {
        self.ignore_rows = ignore_rows;
        self
    }

    /// Render JSON with indentation
    pub fn with_pretty(mut self, pretty: bool) -> Config {
        self.pretty = pretty;
        self
    }
}
