//! Configuration of the zonefile scanner.

//------------ Config --------------------------------------------------------

/// Options for scanning zonefile data.
///
/// With the `serde` feature enabled, the type can be deserialized as part
/// of a larger configuration. Missing fields take their default values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct Config {
    /// Whether to report lines that couldn’t be understood.
    ///
    /// By default, such lines are silently dropped. In strict mode, an
    /// [`Event::Unparsed`][super::Event::Unparsed] is emitted for them.
    pub strict: bool,

    /// The maximum length of a single entry in octets.
    ///
    /// This limits both physical lines that haven’t seen a line feed yet
    /// and parenthesized entries spanning multiple lines.
    pub max_entry_len: usize,
}

impl Config {
    /// The default for `max_entry_len`.
    pub const DEFAULT_MAX_ENTRY_LEN: usize = 64 * 1024;

    /// Returns the default configuration with strict mode enabled.
    pub fn strict() -> Self {
        Config {
            strict: true,
            ..Default::default()
        }
    }

    /// Sets the maximum entry length.
    pub fn with_max_entry_len(mut self, len: usize) -> Self {
        self.max_entry_len = len;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            strict: false,
            max_entry_len: Self::DEFAULT_MAX_ENTRY_LEN,
        }
    }
}

//============ Tests =========================================================
